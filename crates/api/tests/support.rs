//! Shared fixtures for HTTP integration tests: in-memory implementations of
//! every port, wired into a real `AppContext`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use worktrack_api::context::AppContext;
use worktrack_core::notify::ports::{EmailSender, SendReceipt};
use worktrack_core::notify::templates::EmailMessage;
use worktrack_core::reminders::ports::Clock;
use worktrack_core::reminders::{ReminderDeps, ReminderEngine};
use worktrack_core::store::ports::{
    ClientRepository, JobRepository, PreferencesRepository, ReminderLedger, TaskRepository,
    UserRepository,
};
use worktrack_domain::utils::dates::WeekWindow;
use worktrack_domain::{
    AppConfig, Client, Job, JobStatus, NotificationSettings, ReminderKind, ReminderRecord,
    ReminderConfig, Result, Task, UserAccount, UserPreferences, UserType, WorktrackError,
};

pub const CRON_TOKEN: &str = "cron-secret";
pub const NOW: &str = "2026-08-06T08:00:00Z";

/// Seed data served by the in-memory store
#[derive(Default)]
pub struct SeedStore {
    pub jobs: Vec<Job>,
    pub clients: Vec<Client>,
    pub tasks: Vec<Task>,
    pub prefs: Vec<UserPreferences>,
    pub users: Vec<UserAccount>,
}

#[async_trait]
impl JobRepository for SeedStore {
    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>> {
        Ok(self.jobs.iter().filter(|job| job.status == status).cloned().collect())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Job>> {
        Ok(self.jobs.iter().filter(|job| job.user_id == user_id).cloned().collect())
    }
}

#[async_trait]
impl ClientRepository for SeedStore {
    async fn get(&self, id: &str) -> Result<Option<Client>> {
        Ok(self.clients.iter().find(|client| client.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Client>> {
        Ok(self.clients.iter().filter(|client| client.user_id == user_id).cloned().collect())
    }
}

#[async_trait]
impl TaskRepository for SeedStore {
    async fn list_all(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>> {
        Ok(self.tasks.iter().filter(|task| task.user_id == user_id).cloned().collect())
    }
}

#[async_trait]
impl PreferencesRepository for SeedStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserPreferences>> {
        Ok(self.prefs.iter().find(|prefs| prefs.user_id == user_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserPreferences>> {
        Ok(self.prefs.clone())
    }
}

#[async_trait]
impl UserRepository for SeedStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserAccount>> {
        Ok(self.users.iter().find(|user| user.id == user_id).cloned())
    }
}

/// In-memory ledger with insert-if-absent semantics
#[derive(Default)]
pub struct MemoryLedger {
    records: Mutex<Vec<ReminderRecord>>,
}

#[async_trait]
impl ReminderLedger for MemoryLedger {
    async fn was_sent(&self, user_id: &str, kind: ReminderKind, entity_id: &str) -> Result<bool> {
        Ok(self.records.lock().await.iter().any(|record| {
            record.sent
                && record.user_id == user_id
                && record.kind == kind
                && record.entity_id == entity_id
        }))
    }

    async fn weekly_sent_within(&self, user_id: &str, window: &WeekWindow) -> Result<bool> {
        Ok(self.records.lock().await.iter().any(|record| {
            record.sent
                && record.user_id == user_id
                && record.kind == ReminderKind::Weekly
                && window.contains(record.scheduled_for)
        }))
    }

    async fn record_sent(&self, record: &ReminderRecord) -> Result<bool> {
        let mut records = self.records.lock().await;
        let exists = records.iter().any(|existing| {
            existing.user_id == record.user_id
                && existing.kind == record.kind
                && existing.entity_id == record.entity_id
        });
        if exists {
            return Ok(false);
        }
        records.push(record.clone());
        Ok(true)
    }
}

/// Mailer that records sent messages; optionally rejects every send
#[derive(Default)]
pub struct CapturingMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub reject: bool,
}

impl CapturingMailer {
    pub fn rejecting() -> Self {
        Self { sent: Mutex::new(Vec::new()), reject: true }
    }
}

#[async_trait]
impl EmailSender for CapturingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt> {
        if self.reject {
            return Err(WorktrackError::Email("provider rejected".to_string()));
        }
        self.sent.lock().await.push(message.clone());
        Ok(SendReceipt { message_id: Some("<test-message-id>".to_string()) })
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Build a context over the seed data, returning the mailer for assertions
pub fn test_context(seed: SeedStore, mailer: CapturingMailer) -> (Arc<AppContext>, Arc<CapturingMailer>) {
    let store = Arc::new(seed);
    let mailer = Arc::new(mailer);
    let now: DateTime<Utc> = NOW.parse().expect("valid fixture timestamp");

    let deps = ReminderDeps {
        jobs: Arc::clone(&store) as Arc<dyn JobRepository>,
        clients: Arc::clone(&store) as Arc<dyn ClientRepository>,
        tasks: Arc::clone(&store) as Arc<dyn TaskRepository>,
        preferences: Arc::clone(&store) as Arc<dyn PreferencesRepository>,
        users: Arc::clone(&store) as Arc<dyn UserRepository>,
        ledger: Arc::new(MemoryLedger::default()),
        mailer: Arc::clone(&mailer) as Arc<dyn EmailSender>,
        clock: Arc::new(FixedClock(now)),
    };
    let engine = Arc::new(ReminderEngine::new(deps, "https://app.example.com"));

    let config = AppConfig {
        reminders: ReminderConfig {
            cron_secret_token: CRON_TOKEN.to_string(),
            dashboard_url: "https://app.example.com".to_string(),
        },
        ..Default::default()
    };

    let ctx = Arc::new(AppContext::from_parts(config, engine, mailer.clone()));
    (ctx, mailer)
}

/// One interview-eligible user: job with an interview tomorrow, default
/// preferences, and a user record
pub fn interview_seed() -> SeedStore {
    let job = Job {
        id: "job-1".to_string(),
        user_id: "user-1".to_string(),
        company: "Acme".to_string(),
        position: "Engineer".to_string(),
        location: "Remote".to_string(),
        status: JobStatus::Interview,
        url: None,
        salary: None,
        notes: None,
        applied_date: "2026-07-20T10:00:00Z".parse().expect("valid fixture timestamp"),
        interview_date: Some("2026-08-07T14:00:00Z".parse().expect("valid fixture timestamp")),
        start_date: None,
        created_at: "2026-07-20T10:00:00Z".parse().expect("valid fixture timestamp"),
    };
    let prefs = UserPreferences {
        user_id: "user-1".to_string(),
        user_type: UserType::JobSeeker,
        theme: None,
        remember_user_type: false,
        notifications: NotificationSettings::default(),
    };
    let user = UserAccount {
        id: "user-1".to_string(),
        email: "user-1@example.com".to_string(),
        display_name: Some("Sam".to_string()),
    };

    SeedStore { jobs: vec![job], prefs: vec![prefs], users: vec![user], ..Default::default() }
}
