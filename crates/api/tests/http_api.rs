//! Router-level integration tests for the HTTP entry points

mod support;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use worktrack_api::routes;

use support::{interview_seed, test_context, CapturingMailer, SeedStore, CRON_TOKEN};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn process_request(auth_header: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/api/process-reminders");
    if let Some(value) = auth_header {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn missing_authorization_header_is_unauthorized() {
    let (ctx, _mailer) = test_context(SeedStore::default(), CapturingMailer::default());
    let app = routes::router(ctx);

    let response = app.oneshot(process_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let (ctx, mailer) = test_context(interview_seed(), CapturingMailer::default());
    let app = routes::router(ctx);

    let response = app.oneshot(process_request(Some("Bearer nope"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // Nothing was processed
    assert!(mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn correct_token_runs_the_batch_and_reports_counts() {
    let (ctx, mailer) = test_context(interview_seed(), CapturingMailer::default());
    let app = routes::router(ctx);

    let response = app
        .oneshot(process_request(Some(&format!("Bearer {CRON_TOKEN}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["processed"],
        json!({
            "interviewReminders": 1,
            "offerReminders": 0,
            "taskReminders": 0,
            "weeklyDigests": 1
        })
    );

    // One interview reminder plus one weekly digest went out
    assert_eq!(mailer.sent.lock().await.len(), 2);
}

#[tokio::test]
async fn non_post_method_is_rejected() {
    let (ctx, _mailer) = test_context(SeedStore::default(), CapturingMailer::default());
    let app = routes::router(ctx);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/process-reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn send_email_dispatches_and_returns_provider_data() {
    let (ctx, mailer) = test_context(SeedStore::default(), CapturingMailer::default());
    let app = routes::router(ctx);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/send-email")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "to": "dev@example.com",
                        "subject": "Hello",
                        "html": "<p>Hi</p>"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["messageId"], json!("<test-message-id>"));

    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "dev@example.com");
}

#[tokio::test]
async fn send_email_failure_maps_to_error_body() {
    let (ctx, _mailer) = test_context(SeedStore::default(), CapturingMailer::rejecting());
    let app = routes::router(ctx);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/send-email")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "to": "dev@example.com",
                        "subject": "Hello",
                        "html": "<p>Hi</p>"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Failed to send email"));
    assert!(body["details"].as_str().unwrap().contains("provider rejected"));
}

#[tokio::test]
async fn second_batch_run_is_deduplicated_by_the_ledger() {
    let (ctx, mailer) = test_context(interview_seed(), CapturingMailer::default());
    let app = routes::router(ctx);

    let first = app
        .clone()
        .oneshot(process_request(Some(&format!("Bearer {CRON_TOKEN}"))))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(process_request(Some(&format!("Bearer {CRON_TOKEN}"))))
        .await
        .unwrap();
    let body = body_json(second).await;
    assert_eq!(
        body["processed"],
        json!({
            "interviewReminders": 0,
            "offerReminders": 0,
            "taskReminders": 0,
            "weeklyDigests": 0
        })
    );

    // Still only the two emails from the first run
    assert_eq!(mailer.sent.lock().await.len(), 2);
}

#[tokio::test]
async fn health_probe_reports_ok() {
    let (ctx, _mailer) = test_context(SeedStore::default(), CapturingMailer::default());
    let app = routes::router(ctx);

    let response = app
        .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["service"], json!("worktrack-api"));
}
