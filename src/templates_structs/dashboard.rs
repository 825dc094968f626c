use askama::Template;

use super::PageContext;
use crate::analytics::{OverallSentiment, SentimentSummary};
use crate::api::types::{DashboardStats, Feedback, FeedbackRequest, User};

#[derive(Template)]
#[template(path = "dashboard/manager.html")]
pub struct ManagerDashboardTemplate {
    pub ctx: PageContext,
    pub stats: DashboardStats,
    pub feedback: Vec<Feedback>,
    pub team_members: Vec<User>,
    pub pending_requests: Vec<FeedbackRequest>,
    pub recent_requests: Vec<FeedbackRequest>,
    pub summary: SentimentSummary,
    pub overall: OverallSentiment,
    pub insights: Vec<&'static str>,
    pub load_error: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard/employee.html")]
pub struct EmployeeDashboardTemplate {
    pub ctx: PageContext,
    pub stats: DashboardStats,
    pub feedback: Vec<Feedback>,
    pub acknowledged_count: i64,
    pub unacknowledged_count: i64,
    pub summary: SentimentSummary,
    pub overall: OverallSentiment,
    pub insights: Vec<&'static str>,
    pub load_error: Option<String>,
}
