//! Subcontractor types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subcontractor a freelancer can assign tasks to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcontractor {
    /// Document id
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub expertise: String,
    pub rate: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
