//! Firestore-backed implementation of `TaskRepository`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use worktrack_core::store::ports::TaskRepository as TaskRepositoryPort;
use worktrack_domain::constants::COLLECTION_TASKS;
use worktrack_domain::{Result as DomainResult, Task, WorktrackError};

use super::firestore::FirestoreClient;

/// Firestore adapter for task reads.
///
/// The deadline processor scans the whole collection with no status
/// filter, so `list_all` follows pagination to the end.
pub struct FirestoreTaskRepository {
    store: Arc<FirestoreClient>,
}

impl FirestoreTaskRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepositoryPort for FirestoreTaskRepository {
    async fn list_all(&self) -> DomainResult<Vec<Task>> {
        let documents =
            self.store.list_documents(COLLECTION_TASKS).await.map_err(WorktrackError::from)?;

        documents
            .iter()
            .map(|doc| doc.decode_with_id::<Task>("id").map_err(WorktrackError::from))
            .collect()
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Task>> {
        let documents = self
            .store
            .query_equal(COLLECTION_TASKS, &[("userId", json!(user_id))])
            .await
            .map_err(WorktrackError::from)?;

        documents
            .iter()
            .map(|doc| doc.decode_with_id::<Task>("id").map_err(WorktrackError::from))
            .collect()
    }
}
