//! Firestore-backed implementation of `ClientRepository`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use worktrack_core::store::ports::ClientRepository as ClientRepositoryPort;
use worktrack_domain::constants::COLLECTION_CLIENTS;
use worktrack_domain::{Client, Result as DomainResult, WorktrackError};

use super::firestore::FirestoreClient;

/// Firestore adapter for client/project reads
pub struct FirestoreClientRepository {
    store: Arc<FirestoreClient>,
}

impl FirestoreClientRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClientRepositoryPort for FirestoreClientRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<Client>> {
        let document =
            self.store.get_document(COLLECTION_CLIENTS, id).await.map_err(WorktrackError::from)?;

        document
            .map(|doc| doc.decode_with_id::<Client>("id").map_err(WorktrackError::from))
            .transpose()
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Client>> {
        let documents = self
            .store
            .query_equal(COLLECTION_CLIENTS, &[("userId", json!(user_id))])
            .await
            .map_err(WorktrackError::from)?;

        documents
            .iter()
            .map(|doc| doc.decode_with_id::<Client>("id").map_err(WorktrackError::from))
            .collect()
    }
}
