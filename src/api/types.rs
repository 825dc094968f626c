use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dates;

/// Account role, also used for role-based rendering and report labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a feedback request. Completed and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub manager_id: Option<i64>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub manager: Option<Box<User>>,
}

impl User {
    pub fn avatar_initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

/// A single piece of feedback from a manager to an employee.
///
/// `acknowledged_at` is set by the backend when the employee acknowledges;
/// the transition is one-way. The embedded `manager`/`employee` records may
/// be absent, in which case name lookups degrade to an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub manager_id: i64,
    pub employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub overall_sentiment: Sentiment,
    pub acknowledged: bool,
    #[serde(default)]
    pub acknowledged_at: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub manager: Option<User>,
    #[serde(default)]
    pub employee: Option<User>,
}

impl Feedback {
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|u| u.full_name.as_str())
            .unwrap_or("")
    }

    pub fn manager_name(&self) -> &str {
        self.manager
            .as_ref()
            .map(|u| u.full_name.as_str())
            .unwrap_or("")
    }

    /// The other party's name from the reader's point of view: managers see
    /// the employee, employees see the manager.
    pub fn counterparty_name(&self, role: Role) -> &str {
        match role {
            Role::Manager => self.employee_name(),
            Role::Employee => self.manager_name(),
        }
    }

    pub fn created_display(&self) -> String {
        dates::format_long(&self.created_at)
    }

    /// Formatted acknowledgement timestamp, only when the item is actually
    /// acknowledged and the backend supplied the timestamp.
    pub fn acknowledged_display(&self) -> Option<String> {
        if !self.acknowledged {
            return None;
        }
        self.acknowledged_at.as_deref().map(dates::format_long)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackCreate {
    pub employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub overall_sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas_to_improve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_sentiment: Option<Sentiment>,
}

/// Aggregate counts computed by the backend. The category counts are trusted
/// to sum to `total_feedback`; this layer does not re-derive them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_feedback: i64,
    pub positive_feedback: i64,
    pub neutral_feedback: i64,
    pub negative_feedback: i64,
    pub team_members_count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub feedback: Vec<Feedback>,
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub id: i64,
    pub employee_id: i64,
    pub manager_id: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub status: RequestStatus,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub employee: Option<User>,
    #[serde(default)]
    pub manager: Option<User>,
}

impl FeedbackRequest {
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|u| u.full_name.as_str())
            .unwrap_or("Unknown Employee")
    }

    pub fn created_display(&self) -> String {
        dates::format_long(&self.created_at)
    }

    /// Completion timestamp when present, else the creation timestamp —
    /// what the request history list shows.
    pub fn resolved_display(&self) -> String {
        match self.completed_at.as_deref() {
            Some(ts) => dates::format_long(ts),
            None => self.created_display(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequestCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}
