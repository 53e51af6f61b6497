//! Domain data types
//!
//! Serde representations mirror the document store: camelCase field names,
//! kebab-case status strings, RFC 3339 timestamps.

pub mod client;
pub mod job;
pub mod reminder;
pub mod subcontractor;
pub mod task;
pub mod user;

pub use client::{Client, ClientStatus};
pub use job::{Job, JobStatus};
pub use reminder::{ProcessedCounts, ReminderKind, ReminderRecord};
pub use subcontractor::Subcontractor;
pub use task::{PaymentStatus, Task, TaskPriority, TaskStatus};
pub use user::{NotificationSettings, UserAccount, UserPreferences, UserType};
