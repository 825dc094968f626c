use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::analytics::{self, OverallSentiment};
use crate::api::types::{DashboardData, RequestStatus, Role};
use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{
    EmployeeDashboardTemplate, ManagerDashboardTemplate, PageContext,
};

pub async fn index(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config)?;
    let client = ApiClient::from_session(&http, &config, &session)?;

    let (data, load_error) = match client.dashboard().await {
        Ok(data) => (data, None),
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to load dashboard data: {e}");
            (
                DashboardData::default(),
                Some(e.user_message("Failed to load dashboard data")),
            )
        }
    };

    let summary = analytics::percentages(&data.stats);
    let overall = OverallSentiment::from_summary(&summary);
    let insights = analytics::insights(&summary, ctx.is_manager());

    match ctx.role {
        Role::Manager => {
            let team_members = client.team_members().await.unwrap_or_default();
            let requests = client.list_feedback_requests().await.unwrap_or_default();
            let (pending_requests, resolved): (Vec<_>, Vec<_>) = requests
                .into_iter()
                .partition(|r| r.status == RequestStatus::Pending);
            let recent_requests = resolved.into_iter().take(5).collect();

            let tmpl = ManagerDashboardTemplate {
                ctx,
                stats: data.stats,
                feedback: data.feedback,
                team_members,
                pending_requests,
                recent_requests,
                summary,
                overall,
                insights,
                load_error,
            };
            render(tmpl)
        }
        Role::Employee => {
            let acknowledged_count =
                data.feedback.iter().filter(|f| f.acknowledged).count() as i64;
            let unacknowledged_count = data.feedback.len() as i64 - acknowledged_count;

            let tmpl = EmployeeDashboardTemplate {
                ctx,
                stats: data.stats,
                feedback: data.feedback,
                acknowledged_count,
                unacknowledged_count,
                summary,
                overall,
                insights,
                load_error,
            };
            render(tmpl)
        }
    }
}
