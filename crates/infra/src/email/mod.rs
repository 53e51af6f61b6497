//! Transactional email adapters

pub mod brevo;

pub use brevo::{BrevoClient, BrevoConfig};
