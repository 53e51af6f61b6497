//! Firestore-backed implementation of `JobRepository`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use worktrack_core::store::ports::JobRepository as JobRepositoryPort;
use worktrack_domain::constants::COLLECTION_JOBS;
use worktrack_domain::{Job, JobStatus, Result as DomainResult, WorktrackError};

use super::firestore::FirestoreClient;

/// Firestore adapter for job application reads
pub struct FirestoreJobRepository {
    store: Arc<FirestoreClient>,
}

impl FirestoreJobRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl JobRepositoryPort for FirestoreJobRepository {
    async fn list_by_status(&self, status: JobStatus) -> DomainResult<Vec<Job>> {
        let documents = self
            .store
            .query_equal(COLLECTION_JOBS, &[("status", json!(status.as_str()))])
            .await
            .map_err(WorktrackError::from)?;

        documents
            .iter()
            .map(|doc| doc.decode_with_id::<Job>("id").map_err(WorktrackError::from))
            .collect()
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Job>> {
        let documents = self
            .store
            .query_equal(COLLECTION_JOBS, &[("userId", json!(user_id))])
            .await
            .map_err(WorktrackError::from)?;

        documents
            .iter()
            .map(|doc| doc.decode_with_id::<Job>("id").map_err(WorktrackError::from))
            .collect()
    }
}
