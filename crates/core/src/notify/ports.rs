//! Port interface for email dispatch

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use worktrack_domain::Result;

use super::templates::EmailMessage;

/// Provider acknowledgement for a dispatched message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReceipt {
    /// Provider-assigned message id, when the provider returns one
    pub message_id: Option<String>,
}

/// Trait for sending one transactional email per call.
///
/// A returned error means "not sent": callers must not write a ledger
/// record, leaving the entity eligible for the next run.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Dispatch a single message
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt>;
}
