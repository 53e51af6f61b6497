//! User account and preference types
//!
//! Account records are synced from the external identity provider; the
//! preference document is keyed by user id and owns the notification opt-ins.

use serde::{Deserialize, Serialize};

/// Which side of the product a user works in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserType {
    JobSeeker,
    Freelancer,
}

/// User account record from the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Document id (identity-provider uid)
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Per-channel notification opt-ins.
///
/// Every flag defaults to `true` when absent from the stored document, so a
/// user who never opened the settings page still receives reminders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default = "enabled")]
    pub email_notifications: bool,
    #[serde(default = "enabled")]
    pub weekly_digest: bool,
    #[serde(default = "enabled")]
    pub application_reminders: bool,
    #[serde(default = "enabled")]
    pub deadline_reminders: bool,
    #[serde(default = "enabled")]
    pub client_updates: bool,
    #[serde(default = "enabled")]
    pub payment_reminders: bool,
    #[serde(default = "enabled")]
    pub interview_reminders: bool,
    #[serde(default = "enabled")]
    pub offer_deadline_reminders: bool,
}

fn enabled() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            weekly_digest: true,
            application_reminders: true,
            deadline_reminders: true,
            client_updates: true,
            payment_reminders: true,
            interview_reminders: true,
            offer_deadline_reminders: true,
        }
    }
}

/// Per-user preference document (one per user)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Document id of the owning user
    pub user_id: String,
    pub user_type: UserType,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub remember_user_type: bool,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_uses_camel_case_wire_strings() {
        assert_eq!(serde_json::to_string(&UserType::JobSeeker).unwrap(), "\"jobSeeker\"");
        let t: UserType = serde_json::from_str("\"freelancer\"").unwrap();
        assert_eq!(t, UserType::Freelancer);
    }

    #[test]
    fn missing_notification_flags_default_to_enabled() {
        let prefs: UserPreferences = serde_json::from_value(serde_json::json!({
            "userId": "user-1",
            "userType": "jobSeeker",
            "notifications": { "weeklyDigest": false }
        }))
        .unwrap();

        assert!(!prefs.notifications.weekly_digest);
        assert!(prefs.notifications.interview_reminders);
        assert!(prefs.notifications.deadline_reminders);
    }

    #[test]
    fn missing_notifications_object_defaults_to_all_enabled() {
        let prefs: UserPreferences = serde_json::from_value(serde_json::json!({
            "userId": "user-1",
            "userType": "freelancer"
        }))
        .unwrap();

        assert_eq!(prefs.notifications, NotificationSettings::default());
    }
}
