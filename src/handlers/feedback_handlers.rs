use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::types::{FeedbackCreate, FeedbackUpdate, Role, Sentiment};
use crate::api::{ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::session::{get_user_id, require_role, set_flash};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::templates_structs::{FeedbackFormTemplate, PageContext};

#[derive(Deserialize)]
pub struct FeedbackForm {
    pub employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub overall_sentiment: Sentiment,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct EditFeedbackForm {
    pub strengths: String,
    pub areas_to_improve: String,
    pub overall_sentiment: Sentiment,
    pub csrf_token: String,
}

fn to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// GET /feedback/new — the "give feedback" form with the team roster.
pub async fn new_form(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Manager)?;

    let ctx = PageContext::build(&session, &config)?;
    let client = ApiClient::from_session(&http, &config, &session)?;

    let (team_members, errors) = match client.team_members().await {
        Ok(team) => (team, vec![]),
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to load team members: {e}");
            (vec![], vec![e.user_message("Failed to load team members")])
        }
    };

    let tmpl = FeedbackFormTemplate {
        ctx,
        form_action: "/feedback".to_string(),
        form_title: "Give Feedback".to_string(),
        team_members,
        editing: false,
        strengths: String::new(),
        areas_to_improve: String::new(),
        sentiment: Sentiment::Neutral,
        errors,
    };
    render(tmpl)
}

/// POST /feedback
pub async fn create(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FeedbackForm>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let client = ApiClient::from_session(&http, &config, &session)?;

    // The form disables submission until a member is chosen; this is the
    // server-side backstop.
    let mut errors = Vec::new();
    if form.employee_id <= 0 {
        errors.push("Please select a team member".to_string());
    }

    if errors.is_empty() {
        let payload = FeedbackCreate {
            employee_id: form.employee_id,
            strengths: form.strengths.clone(),
            areas_to_improve: form.areas_to_improve.clone(),
            overall_sentiment: form.overall_sentiment,
        };
        match client.create_feedback(&payload).await {
            Ok(created) => {
                let user_id = get_user_id(&session).unwrap_or(0);
                log::info!(
                    "user {user_id} submitted feedback {} for employee {}",
                    created.id,
                    payload.employee_id
                );
                set_flash(&session, "Feedback submitted successfully");
                return Ok(to_dashboard());
            }
            Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
            Err(e) => {
                log::error!("Failed to submit feedback: {e}");
                errors.push(e.user_message("Failed to submit feedback"));
            }
        }
    }

    let ctx = PageContext::build(&session, &config)?;
    let team_members = client.team_members().await.unwrap_or_default();
    let tmpl = FeedbackFormTemplate {
        ctx,
        form_action: "/feedback".to_string(),
        form_title: "Give Feedback".to_string(),
        team_members,
        editing: false,
        strengths: form.strengths.clone(),
        areas_to_improve: form.areas_to_improve.clone(),
        sentiment: form.overall_sentiment,
        errors,
    };
    render(tmpl)
}

/// GET /feedback/{id}/edit
pub async fn edit_form(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Manager)?;

    let feedback_id = path.into_inner();
    let ctx = PageContext::build(&session, &config)?;
    let client = ApiClient::from_session(&http, &config, &session)?;

    // The backend has no fetch-by-id; find the item in the caller's list.
    let item = match client.list_feedback().await {
        Ok(list) => list.into_iter().find(|f| f.id == feedback_id),
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to load feedback for editing: {e}");
            set_flash(&session, &e.user_message("Failed to load feedback"));
            return Ok(to_dashboard());
        }
    };
    let item = item.ok_or(AppError::NotFound)?;

    let tmpl = FeedbackFormTemplate {
        ctx,
        form_action: format!("/feedback/{feedback_id}"),
        form_title: "Edit Feedback".to_string(),
        team_members: vec![],
        editing: true,
        strengths: item.strengths,
        areas_to_improve: item.areas_to_improve,
        sentiment: item.overall_sentiment,
        errors: vec![],
    };
    render(tmpl)
}

/// POST /feedback/{id}
pub async fn update(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<EditFeedbackForm>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let feedback_id = path.into_inner();
    let client = ApiClient::from_session(&http, &config, &session)?;

    let payload = FeedbackUpdate {
        strengths: Some(form.strengths.clone()),
        areas_to_improve: Some(form.areas_to_improve.clone()),
        overall_sentiment: Some(form.overall_sentiment),
    };

    match client.update_feedback(feedback_id, &payload).await {
        Ok(_) => {
            let user_id = get_user_id(&session).unwrap_or(0);
            log::info!("user {user_id} updated feedback {feedback_id}");
            set_flash(&session, "Feedback updated successfully");
            Ok(to_dashboard())
        }
        Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to update feedback {feedback_id}: {e}");
            let ctx = PageContext::build(&session, &config)?;
            let tmpl = FeedbackFormTemplate {
                ctx,
                form_action: format!("/feedback/{feedback_id}"),
                form_title: "Edit Feedback".to_string(),
                team_members: vec![],
                editing: true,
                strengths: form.strengths.clone(),
                areas_to_improve: form.areas_to_improve.clone(),
                sentiment: form.overall_sentiment,
                errors: vec![e.user_message("Failed to update feedback")],
            };
            render(tmpl)
        }
    }
}

/// POST /feedback/{id}/acknowledge — one-way, sent once per item.
pub async fn acknowledge(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Employee)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let feedback_id = path.into_inner();
    let client = ApiClient::from_session(&http, &config, &session)?;

    match client.acknowledge_feedback(feedback_id).await {
        Ok(()) => {
            let user_id = get_user_id(&session).unwrap_or(0);
            log::info!("user {user_id} acknowledged feedback {feedback_id}");
            set_flash(&session, "Feedback acknowledged");
        }
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to acknowledge feedback {feedback_id}: {e}");
            set_flash(&session, &e.user_message("Failed to acknowledge feedback"));
        }
    }

    Ok(to_dashboard())
}
