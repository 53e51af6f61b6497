//! Client and project types (freelancers)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline status of a client engagement.
///
/// Which date and contact fields are required per status is enforced at
/// input-validation time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    ColdPitch,
    Proposal,
    Negotiation,
    Targeting,
    Active,
    Delivered,
    OnHold,
    Completed,
    Paid,
    Cancelled,
    Lost,
}

/// A freelancer's client/project record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Document id
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub company: Option<String>,
    pub project: String,
    pub status: ClientStatus,
    pub sent_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub rate: Option<f64>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
