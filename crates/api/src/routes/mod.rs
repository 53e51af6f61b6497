//! HTTP routes

pub mod email;
pub mod health;
pub mod reminders;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::context::AppContext;

/// Build the application router
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route(
            "/api/process-reminders",
            post(reminders::process_reminders).fallback(reminders::method_not_allowed),
        )
        .route(
            "/api/send-email",
            post(email::send_email).fallback(reminders::method_not_allowed),
        )
        .route("/health", get(health::health))
        .with_state(ctx)
}
