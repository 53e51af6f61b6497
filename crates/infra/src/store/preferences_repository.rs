//! Firestore-backed implementation of `PreferencesRepository`
//!
//! Preference documents are keyed by user id; the decoded struct carries
//! the owner under `userId`, injected from the document name.

use std::sync::Arc;

use async_trait::async_trait;
use worktrack_core::store::ports::PreferencesRepository as PreferencesRepositoryPort;
use worktrack_domain::constants::COLLECTION_USER_PREFERENCES;
use worktrack_domain::{Result as DomainResult, UserPreferences, WorktrackError};

use super::firestore::FirestoreClient;

/// Firestore adapter for per-user preference documents
pub struct FirestorePreferencesRepository {
    store: Arc<FirestoreClient>,
}

impl FirestorePreferencesRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PreferencesRepositoryPort for FirestorePreferencesRepository {
    async fn get(&self, user_id: &str) -> DomainResult<Option<UserPreferences>> {
        let document = self
            .store
            .get_document(COLLECTION_USER_PREFERENCES, user_id)
            .await
            .map_err(WorktrackError::from)?;

        document
            .map(|doc| doc.decode_with_id::<UserPreferences>("userId").map_err(WorktrackError::from))
            .transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<UserPreferences>> {
        let documents = self
            .store
            .list_documents(COLLECTION_USER_PREFERENCES)
            .await
            .map_err(WorktrackError::from)?;

        documents
            .iter()
            .map(|doc| {
                doc.decode_with_id::<UserPreferences>("userId").map_err(WorktrackError::from)
            })
            .collect()
    }
}
