//! Reminder batch endpoint
//!
//! `POST /api/process-reminders`, invoked by the external cron scheduler.
//! Guarded by a static bearer token compared against `CRON_SECRET_TOKEN`;
//! no body. Processor failures never fail the request: each processor
//! reports the count it managed to send.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::warn;
use worktrack_domain::ProcessedCounts;

use crate::context::AppContext;

/// Per-processor counts in the response wire format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedBody {
    pub interview_reminders: u32,
    pub offer_reminders: u32,
    pub task_reminders: u32,
    pub weekly_digests: u32,
}

impl From<ProcessedCounts> for ProcessedBody {
    fn from(counts: ProcessedCounts) -> Self {
        Self {
            interview_reminders: counts.interviews,
            offer_reminders: counts.offers,
            task_reminders: counts.tasks,
            weekly_digests: counts.digests,
        }
    }
}

/// Run the reminder batch
pub async fn process_reminders(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers, &ctx.config.reminders.cron_secret_token) {
        warn!("rejected process-reminders call with missing or invalid token");
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" })))
            .into_response();
    }

    let counts = ctx.engine.process_all().await;
    (
        StatusCode::OK,
        Json(json!({ "success": true, "processed": ProcessedBody::from(counts) })),
    )
        .into_response()
}

/// 405 fallback for the method routers, with the JSON error shape
pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "error": "Method not allowed" })))
        .into_response()
}

fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    // An unconfigured secret must never authorize anything
    if expected.is_empty() {
        return false;
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}
