//! Firestore-backed document store adapters
//!
//! One repository per collection, all sharing a [`FirestoreClient`]. The
//! client speaks the Firestore REST API; the [`value`] codec translates
//! between Firestore `Value` JSON and the plain serde representations the
//! domain types use.

pub mod auth;
pub mod client_repository;
pub mod errors;
pub mod firestore;
pub mod job_repository;
pub mod preferences_repository;
pub mod reminder_ledger;
pub mod task_repository;
pub mod user_repository;
pub mod value;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client_repository::FirestoreClientRepository;
pub use errors::{StoreError, StoreErrorCategory};
pub use firestore::{CreateOutcome, Document, FirestoreClient, FirestoreConfig};
pub use job_repository::FirestoreJobRepository;
pub use preferences_repository::FirestorePreferencesRepository;
pub use reminder_ledger::FirestoreReminderLedger;
pub use task_repository::FirestoreTaskRepository;
pub use user_repository::FirestoreUserRepository;
