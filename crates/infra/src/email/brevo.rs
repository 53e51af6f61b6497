//! Brevo transactional email client
//!
//! Implements the `EmailSender` port over the Brevo REST API: one message
//! per call, authenticated with a static `api-key` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;
use worktrack_core::notify::ports::{EmailSender, SendReceipt};
use worktrack_core::notify::templates::EmailMessage;
use worktrack_domain::{EmailConfig, Result as DomainResult, WorktrackError};

use crate::http::HttpClient;

const DEFAULT_BASE_URL: &str = "https://api.brevo.com";

/// Configuration for the Brevo client
#[derive(Debug, Clone)]
pub struct BrevoConfig {
    pub api_key: String,
    pub sender_name: String,
    pub sender_email: String,
    /// Override for the API endpoint (tests)
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl From<&EmailConfig> for BrevoConfig {
    fn from(config: &EmailConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            sender_name: config.sender_name.clone(),
            sender_email: config.sender_email.clone(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[derive(Serialize)]
struct Party<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    sender: Party<'a>,
    to: Vec<Recipient<'a>>,
    subject: &'a str,
    html_content: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: Option<String>,
}

/// Brevo-backed `EmailSender`
pub struct BrevoClient {
    http: HttpClient,
    config: BrevoConfig,
    endpoint: String,
}

impl BrevoClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `WorktrackError::Config` when the API key is missing or the
    /// HTTP client cannot be built.
    pub fn new(config: BrevoConfig) -> Result<Self, WorktrackError> {
        if config.api_key.is_empty() {
            return Err(WorktrackError::Config("brevo api key is not configured".to_string()));
        }

        // A transport-level retry could double-deliver a message; failures
        // surface to the caller, which stays eligible for the next run.
        let http =
            HttpClient::builder().timeout(config.timeout).max_attempts(1).build()?;

        let base = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/');
        let endpoint = format!("{base}/v3/smtp/email");

        Ok(Self { http, config, endpoint })
    }

    async fn dispatch(&self, message: &EmailMessage) -> DomainResult<SendReceipt> {
        let body = SendEmailRequest {
            sender: Party { name: &self.config.sender_name, email: &self.config.sender_email },
            to: vec![Recipient { email: &message.to }],
            subject: &message.subject,
            html_content: &message.html,
        };

        let request = self
            .http
            .request(Method::POST, &self.endpoint)
            .header("api-key", &self.config.api_key)
            .header("accept", "application/json")
            .json(&body);
        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(WorktrackError::Email(format!("{status} from email provider: {text}")));
        }

        let parsed: SendEmailResponse =
            response.json().await.unwrap_or(SendEmailResponse { message_id: None });
        debug!(to = %message.to, message_id = ?parsed.message_id, "email dispatched");

        Ok(SendReceipt { message_id: parsed.message_id })
    }
}

#[async_trait]
impl EmailSender for BrevoClient {
    async fn send(&self, message: &EmailMessage) -> DomainResult<SendReceipt> {
        self.dispatch(message).await
    }
}
