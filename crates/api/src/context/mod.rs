//! Application context - dependency injection container
//!
//! The whole object graph is constructed once per process and injected
//! explicitly; there is no lazily-memoized global store handle.

use std::sync::Arc;

use worktrack_core::notify::ports::EmailSender;
use worktrack_core::reminders::{ReminderDeps, ReminderEngine};
use worktrack_domain::{AppConfig, Result, WorktrackError};
use worktrack_infra::{
    BrevoClient, BrevoConfig, FirestoreClient, FirestoreClientRepository, FirestoreConfig,
    FirestoreJobRepository, FirestorePreferencesRepository, FirestoreReminderLedger,
    FirestoreTaskRepository, FirestoreUserRepository, StaticTokenProvider, SystemClock,
};

/// Application context - holds configuration and shared services
pub struct AppContext {
    pub config: AppConfig,
    pub engine: Arc<ReminderEngine>,
    pub mailer: Arc<dyn EmailSender>,
}

impl AppContext {
    /// Wire the production object graph from configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the store or email client cannot be
    /// constructed (missing project id, missing API key).
    pub fn new(config: AppConfig) -> Result<Self> {
        let token_provider = StaticTokenProvider::new(config.store.token.clone());
        let store = Arc::new(
            FirestoreClient::new(FirestoreConfig::from(&config.store), Arc::new(token_provider))
                .map_err(WorktrackError::from)?,
        );

        let mailer: Arc<dyn EmailSender> =
            Arc::new(BrevoClient::new(BrevoConfig::from(&config.email))?);

        let deps = ReminderDeps {
            jobs: Arc::new(FirestoreJobRepository::new(Arc::clone(&store))),
            clients: Arc::new(FirestoreClientRepository::new(Arc::clone(&store))),
            tasks: Arc::new(FirestoreTaskRepository::new(Arc::clone(&store))),
            preferences: Arc::new(FirestorePreferencesRepository::new(Arc::clone(&store))),
            users: Arc::new(FirestoreUserRepository::new(Arc::clone(&store))),
            ledger: Arc::new(FirestoreReminderLedger::new(Arc::clone(&store))),
            mailer: Arc::clone(&mailer),
            clock: Arc::new(SystemClock),
        };
        let engine =
            Arc::new(ReminderEngine::new(deps, config.reminders.dashboard_url.clone()));

        Ok(Self { config, engine, mailer })
    }

    /// Assemble a context from pre-built parts (test wiring)
    pub fn from_parts(
        config: AppConfig,
        engine: Arc<ReminderEngine>,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        Self { config, engine, mailer }
    }
}
