//! # Worktrack Infra
//!
//! Infrastructure adapters for the core ports.
//!
//! This crate contains:
//! - Retrying HTTP client plumbing (reqwest wrapper)
//! - Firestore REST client, value codec, and repository adapters
//! - Brevo transactional email client
//! - Configuration loader (environment first, file fallback)
//! - System clock
//!
//! ## Architecture
//! - Implements the traits defined in `worktrack-core`
//! - All remote access goes through [`http::HttpClient`]
//! - No business logic: scanning, filtering, and dedup decisions live in
//!   `worktrack-core`

pub mod clock;
pub mod config;
pub mod email;
pub mod http;
pub mod store;

pub use clock::SystemClock;
pub use email::{BrevoClient, BrevoConfig};
pub use http::HttpClient;
pub use store::{
    AccessTokenProvider, CreateOutcome, FirestoreClient, FirestoreClientRepository,
    FirestoreConfig, FirestoreJobRepository, FirestorePreferencesRepository,
    FirestoreReminderLedger, FirestoreTaskRepository, FirestoreUserRepository, StaticTokenProvider,
    StoreError,
};
