//! Task types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Payment state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
}

/// A unit of work belonging to exactly one client, optionally assigned to a
/// subcontractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Document id
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub subcontractor_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub payment_status: PaymentStatus,
    pub payment_amount: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_store_document() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": "task-1",
            "userId": "user-1",
            "clientId": "client-1",
            "title": "Wireframes",
            "status": "in-progress",
            "priority": "high",
            "dueDate": "2026-08-07T00:00:00Z",
            "paymentStatus": "unpaid",
            "createdAt": "2026-08-01T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.payment_status, PaymentStatus::Unpaid);
        assert!(task.subcontractor_id.is_none());
    }
}
