//! # Worktrack API
//!
//! HTTP service layer - routes and application wiring.
//!
//! This crate contains:
//! - The axum router and request handlers
//! - Application context (dependency injection)
//! - Logging bootstrap and the server entry point
//!
//! ## Architecture
//! - Depends on `worktrack-domain`, `worktrack-core`, and `worktrack-infra`
//! - Wires up the hexagonal architecture once per process
//! - A single bearer-token-guarded endpoint triggers the reminder batch

pub mod context;
pub mod logging;
pub mod routes;

// Re-export for convenience
pub use context::AppContext;
pub use routes::router;
