//! # Worktrack Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the document store, email
//!   dispatch, and wall-clock time
//! - The four reminder processors and their orchestrator
//! - Notification templates (pure entity → email rendering)
//!
//! ## Architecture Principles
//! - Only depends on `worktrack-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod notify;
pub mod reminders;
pub mod store;

// Re-export specific items to avoid ambiguity
pub use notify::ports::{EmailSender, SendReceipt};
pub use notify::templates::EmailMessage;
pub use reminders::digest::{FreelancerWeekStats, JobSeekerWeekStats};
pub use reminders::ports::Clock;
pub use reminders::{ReminderDeps, ReminderEngine};
pub use store::ports::{
    ClientRepository, JobRepository, PreferencesRepository, ReminderLedger, TaskRepository,
    UserRepository,
};
