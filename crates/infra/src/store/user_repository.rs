//! Firestore-backed implementation of `UserRepository`

use std::sync::Arc;

use async_trait::async_trait;
use worktrack_core::store::ports::UserRepository as UserRepositoryPort;
use worktrack_domain::constants::COLLECTION_USERS;
use worktrack_domain::{Result as DomainResult, UserAccount, WorktrackError};

use super::firestore::FirestoreClient;

/// Firestore adapter for user account reads
pub struct FirestoreUserRepository {
    store: Arc<FirestoreClient>,
}

impl FirestoreUserRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepositoryPort for FirestoreUserRepository {
    async fn get(&self, user_id: &str) -> DomainResult<Option<UserAccount>> {
        let document =
            self.store.get_document(COLLECTION_USERS, user_id).await.map_err(WorktrackError::from)?;

        document
            .map(|doc| doc.decode_with_id::<UserAccount>("id").map_err(WorktrackError::from))
            .transpose()
    }
}
