//! Sent-reminder ledger types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of reminder a ledger record suppresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Interview,
    Offer,
    Task,
    Weekly,
}

impl ReminderKind {
    /// Wire string, also used in deterministic ledger document ids
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Task => "task",
            Self::Weekly => "weekly",
        }
    }
}

/// Append-only ledger record marking a reminder as sent.
///
/// Existence of a `sent == true` record for `(userId, type, entityId)`,
/// or for `weekly` within the current week window, suppresses resending.
/// The system never updates or deletes these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub entity_id: String,
    pub scheduled_for: DateTime<Utc>,
    pub sent: bool,
    pub sent_at: Option<DateTime<Utc>>,
}

/// Per-processor send counts aggregated by the orchestrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedCounts {
    pub interviews: u32,
    pub offers: u32,
    pub tasks: u32,
    pub digests: u32,
}
