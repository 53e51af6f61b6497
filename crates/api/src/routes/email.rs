//! Direct email dispatch endpoint
//!
//! `POST /api/send-email` with `{to, subject, html}`; forwards to the
//! transactional email provider and reports the provider acknowledgement.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use worktrack_core::notify::templates::EmailMessage;

use crate::context::AppContext;

/// Request body for a direct send
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Dispatch one email through the configured provider
pub async fn send_email(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SendEmailRequest>,
) -> Response {
    let message =
        EmailMessage { to: request.to, subject: request.subject, html: request.html };

    match ctx.mailer.send(&message).await {
        Ok(receipt) => {
            (StatusCode::OK, Json(json!({ "success": true, "data": receipt }))).into_response()
        }
        Err(err) => {
            warn!(error = %err, to = %message.to, "send-email dispatch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "success": false,
                    "error": "Failed to send email",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
