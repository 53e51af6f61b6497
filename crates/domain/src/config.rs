//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub email: EmailConfig,
    pub reminders: ReminderConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

/// Document store (Firestore REST) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Firebase project id
    pub project_id: String,
    /// Service token used as the bearer credential for store calls
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Override for the documents endpoint (emulators, tests)
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { project_id: String::new(), token: None, base_url: None, timeout_seconds: 30 }
    }
}

/// Transactional email (Brevo) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub sender_name: String,
    pub sender_email: String,
    /// Override for the Brevo API endpoint (tests)
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sender_name: "Worktrack".to_string(),
            sender_email: "notifications@worktrack.app".to_string(),
            base_url: None,
            timeout_seconds: 30,
        }
    }
}

/// Reminder processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Static bearer token the external cron scheduler must present
    #[serde(skip_serializing)]
    pub cron_secret_token: String,
    /// Base URL linked from notification emails
    pub dashboard_url: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            cron_secret_token: String::new(),
            dashboard_url: "https://app.worktrack.app".to_string(),
        }
    }
}
