//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variables are missing, falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FIREBASE_PROJECT_ID` (or `NEXT_PUBLIC_FIREBASE_PROJECT_ID`): project id
//! - `FIRESTORE_TOKEN`: service bearer token for store calls (optional)
//! - `FIRESTORE_BASE_URL`: documents endpoint override (optional)
//! - `CRON_SECRET_TOKEN`: bearer token the cron scheduler must present
//! - `BREVO_API_KEY`: transactional email API key
//! - `BREVO_SENDER_NAME` / `BREVO_SENDER_EMAIL`: sender identity (optional)
//! - `BREVO_BASE_URL`: email endpoint override (optional)
//! - `DASHBOARD_URL`: base URL linked from emails (optional)
//! - `WORKTRACK_HTTP_HOST` / `WORKTRACK_HTTP_PORT`: bind address (optional)
//!
//! ## File Locations
//! The loader probes `config.toml`, `config.json`, `worktrack.toml`, and
//! `worktrack.json` in the current and parent directories.

use std::path::{Path, PathBuf};

use worktrack_domain::{
    AppConfig, EmailConfig, ReminderConfig, Result, ServerConfig, StoreConfig, WorktrackError,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `WorktrackError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `WorktrackError::Config` if a required variable is missing or
/// has an invalid value.
pub fn load_from_env() -> Result<AppConfig> {
    let project_id = env_first(&["FIREBASE_PROJECT_ID", "NEXT_PUBLIC_FIREBASE_PROJECT_ID"])
        .ok_or_else(|| WorktrackError::Config("FIREBASE_PROJECT_ID is not set".to_string()))?;
    let cron_secret_token = env_var("CRON_SECRET_TOKEN")?;
    let api_key = env_var("BREVO_API_KEY")?;

    let port = match env_opt("WORKTRACK_HTTP_PORT") {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|e| WorktrackError::Config(format!("Invalid HTTP port: {e}")))?,
        None => ServerConfig::default().port,
    };

    let defaults = AppConfig::default();
    Ok(AppConfig {
        server: ServerConfig {
            host: env_opt("WORKTRACK_HTTP_HOST").unwrap_or(defaults.server.host),
            port,
        },
        store: StoreConfig {
            project_id,
            token: env_opt("FIRESTORE_TOKEN"),
            base_url: env_opt("FIRESTORE_BASE_URL"),
            timeout_seconds: defaults.store.timeout_seconds,
        },
        email: EmailConfig {
            api_key,
            sender_name: env_opt("BREVO_SENDER_NAME").unwrap_or(defaults.email.sender_name),
            sender_email: env_opt("BREVO_SENDER_EMAIL").unwrap_or(defaults.email.sender_email),
            base_url: env_opt("BREVO_BASE_URL"),
            timeout_seconds: defaults.email.timeout_seconds,
        },
        reminders: ReminderConfig {
            cron_secret_token,
            dashboard_url: env_opt("DASHBOARD_URL").unwrap_or(defaults.reminders.dashboard_url),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `WorktrackError::Config` if no config file is found or the file
/// cannot be parsed.
pub fn load_from_file(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(WorktrackError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => probe_config_paths()
            .into_iter()
            .find(|candidate| candidate.exists())
            .ok_or_else(|| WorktrackError::Config("No config file found".to_string()))?,
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| WorktrackError::Config(format!("Failed to read config file: {e}")))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .map_err(|e| WorktrackError::Config(format!("Invalid TOML config: {e}")))?,
        Some("json") => serde_json::from_str(&contents)
            .map_err(|e| WorktrackError::Config(format!("Invalid JSON config: {e}")))?,
        _ => {
            return Err(WorktrackError::Config(format!(
                "Unsupported config format: {}",
                path.display()
            )));
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Vec<PathBuf> {
    let names = ["config.toml", "config.json", "worktrack.toml", "worktrack.json"];
    let mut paths = Vec::new();
    for base in [".", ".."] {
        for name in names {
            paths.push(Path::new(base).join(name));
        }
    }
    paths
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| WorktrackError::Config(format!("{name} is not set")))
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn env_first(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env_opt(name))
}
