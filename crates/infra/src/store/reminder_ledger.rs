//! Firestore-backed implementation of `ReminderLedger`
//!
//! Ledger documents use deterministic ids so duplicate suppression is a
//! single conditional insert: `{userId}_{kind}_{entityId}` for entity
//! reminders, `{userId}_weekly_{weekStartDate}` for digests (one id per
//! calendar week). The store rejects an existing id atomically, which
//! closes the check-then-act race between overlapping cron runs.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use worktrack_core::store::ports::ReminderLedger as ReminderLedgerPort;
use worktrack_domain::constants::COLLECTION_REMINDERS;
use worktrack_domain::utils::dates::WeekWindow;
use worktrack_domain::{ReminderKind, ReminderRecord, Result as DomainResult, WorktrackError};

use super::firestore::{CreateOutcome, FirestoreClient};
use super::value::encode_fields;

/// Firestore adapter for the append-only sent-reminder ledger
pub struct FirestoreReminderLedger {
    store: Arc<FirestoreClient>,
}

impl FirestoreReminderLedger {
    /// Create a new ledger instance
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }

    fn entity_doc_id(user_id: &str, kind: ReminderKind, entity_id: &str) -> String {
        format!("{user_id}_{}_{entity_id}", kind.as_str())
    }

    fn weekly_doc_id(user_id: &str, window: &WeekWindow) -> String {
        format!("{user_id}_weekly_{}", window.start_date())
    }

    async fn sent_record_exists(&self, doc_id: &str) -> DomainResult<bool> {
        let document = self
            .store
            .get_document(COLLECTION_REMINDERS, doc_id)
            .await
            .map_err(WorktrackError::from)?;

        match document {
            Some(doc) => {
                let record: ReminderRecord = doc.decode().map_err(WorktrackError::from)?;
                Ok(record.sent)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ReminderLedgerPort for FirestoreReminderLedger {
    async fn was_sent(
        &self,
        user_id: &str,
        kind: ReminderKind,
        entity_id: &str,
    ) -> DomainResult<bool> {
        self.sent_record_exists(&Self::entity_doc_id(user_id, kind, entity_id)).await
    }

    async fn weekly_sent_within(&self, user_id: &str, window: &WeekWindow) -> DomainResult<bool> {
        self.sent_record_exists(&Self::weekly_doc_id(user_id, window)).await
    }

    async fn record_sent(&self, record: &ReminderRecord) -> DomainResult<bool> {
        let doc_id = match record.kind {
            ReminderKind::Weekly => {
                let window = WeekWindow::containing(record.scheduled_for.date_naive());
                Self::weekly_doc_id(&record.user_id, &window)
            }
            kind => Self::entity_doc_id(&record.user_id, kind, &record.entity_id),
        };

        let encoded = serde_json::to_value(record)
            .map_err(|err| WorktrackError::Internal(err.to_string()))?;
        let Value::Object(plain) = encoded else {
            return Err(WorktrackError::Internal(
                "reminder record did not serialize to an object".to_string(),
            ));
        };

        let outcome = self
            .store
            .create_document(COLLECTION_REMINDERS, &doc_id, encode_fields(&plain))
            .await
            .map_err(WorktrackError::from)?;

        Ok(matches!(outcome, CreateOutcome::Created))
    }
}
