//! Job application types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a job application.
///
/// The status drives which date fields are meaningful: `Interview` implies
/// `interview_date` is set, `Offer` implies `start_date` is set. This is an
/// input-validation convention, not a stored invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl JobStatus {
    /// Wire string stored in the document store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }
}

/// A tracked job application, owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Document id
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub status: JobStatus,
    pub url: Option<String>,
    pub salary: Option<String>,
    pub notes: Option<String>,
    pub applied_date: DateTime<Utc>,
    pub interview_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
