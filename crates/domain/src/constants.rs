//! Domain constants
//!
//! Collection names for the hosted document store. Every entity lives in a
//! flat collection keyed by document id; ownership is expressed through a
//! `userId` field on the document.

/// Job applications (job seekers)
pub const COLLECTION_JOBS: &str = "jobs";

/// Clients and projects (freelancers)
pub const COLLECTION_CLIENTS: &str = "clients";

/// Tasks, each belonging to exactly one client
pub const COLLECTION_TASKS: &str = "tasks";

/// Subcontractors optionally assigned to tasks
pub const COLLECTION_SUBCONTRACTORS: &str = "subcontractors";

/// Per-user preference documents, keyed by user id
pub const COLLECTION_USER_PREFERENCES: &str = "userPreferences";

/// User account records, keyed by user id
pub const COLLECTION_USERS: &str = "users";

/// Sent-reminder ledger (append-only)
pub const COLLECTION_REMINDERS: &str = "reminders";
