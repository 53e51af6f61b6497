//! Port interfaces for document store access
//!
//! Every repository is an adapter boundary: infra implements these over the
//! hosted document database, tests implement them in memory. Gets return
//! `Ok(None)` for missing documents; `Err` is reserved for transport and
//! decoding failures.

use async_trait::async_trait;
use worktrack_domain::utils::dates::WeekWindow;
use worktrack_domain::{
    Client, Job, JobStatus, ReminderKind, ReminderRecord, Result, Task, UserAccount,
    UserPreferences,
};

/// Trait for reading job applications
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// List every job in the given status, across all users
    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>>;

    /// List all jobs owned by a user
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Job>>;
}

/// Trait for reading client records
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Get a client by document id
    async fn get(&self, id: &str) -> Result<Option<Client>>;

    /// List all clients owned by a user
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Client>>;
}

/// Trait for reading tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List every task, across all users and statuses
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// List all tasks owned by a user
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>>;
}

/// Trait for reading per-user preference documents
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Get the preference document for a user
    async fn get(&self, user_id: &str) -> Result<Option<UserPreferences>>;

    /// List every preference document in the store
    async fn list_all(&self) -> Result<Vec<UserPreferences>>;
}

/// Trait for reading user account records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user account by id
    async fn get(&self, user_id: &str) -> Result<Option<UserAccount>>;
}

/// Trait for the append-only sent-reminder ledger
#[async_trait]
pub trait ReminderLedger: Send + Sync {
    /// True when a sent record exists for `(user, kind, entity)`
    async fn was_sent(&self, user_id: &str, kind: ReminderKind, entity_id: &str) -> Result<bool>;

    /// True when a sent `weekly` record exists inside the week window
    async fn weekly_sent_within(&self, user_id: &str, window: &WeekWindow) -> Result<bool>;

    /// Append a sent record if absent.
    ///
    /// The write is an atomic insert-if-absent: returns `Ok(false)` when a
    /// record for the same key already exists and nothing was written.
    async fn record_sent(&self, record: &ReminderRecord) -> Result<bool>;
}
