//! Shared fixtures for report and wire-format tests.

#![allow(dead_code)]

use teampulse::api::types::{Feedback, Role, Sentiment, User};

pub const MANAGER_NAME: &str = "Mia Manager";
pub const EMPLOYEE_NAME: &str = "Evan Employee";

pub fn user(id: i64, name: &str, role: Role) -> User {
    User {
        id,
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        full_name: name.to_string(),
        role,
        manager_id: None,
        is_active: true,
        created_at: "2025-01-01T00:00:00".to_string(),
        updated_at: None,
        manager: None,
    }
}

/// A feedback item from Mia (manager) to Evan (employee), created
/// 2025-07-01 12:00 and, when acknowledged, acknowledged 2025-07-02 09:30.
pub fn feedback(id: i64, sentiment: Sentiment, acknowledged: bool) -> Feedback {
    Feedback {
        id,
        manager_id: 1,
        employee_id: 2,
        strengths: "Strong communicator".to_string(),
        areas_to_improve: "Time management".to_string(),
        overall_sentiment: sentiment,
        acknowledged,
        acknowledged_at: acknowledged.then(|| "2025-07-02T09:30:00".to_string()),
        created_at: "2025-07-01T12:00:00".to_string(),
        updated_at: None,
        manager: Some(user(1, MANAGER_NAME, Role::Manager)),
        employee: Some(user(2, EMPLOYEE_NAME, Role::Employee)),
    }
}
