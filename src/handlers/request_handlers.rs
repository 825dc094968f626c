use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::types::{FeedbackRequestCreate, Role};
use crate::api::{ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::session::{get_user_id, require_role, set_flash};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::templates_structs::{PageContext, RequestFormTemplate};

#[derive(Deserialize)]
pub struct RequestForm {
    pub message: String,
    pub csrf_token: String,
}

fn to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// GET /requests/new — employee asks their manager for feedback.
pub async fn new_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Employee)?;

    let ctx = PageContext::build(&session, &config)?;
    let tmpl = RequestFormTemplate {
        ctx,
        message: String::new(),
        errors: vec![],
    };
    render(tmpl)
}

/// POST /requests
pub async fn create(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<RequestForm>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Employee)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let client = ApiClient::from_session(&http, &config, &session)?;

    let message = form.message.trim();
    let payload = FeedbackRequestCreate {
        message: (!message.is_empty()).then(|| message.to_string()),
    };

    match client.create_feedback_request(&payload).await {
        Ok(created) => {
            let user_id = get_user_id(&session).unwrap_or(0);
            log::info!("user {user_id} created feedback request {}", created.id);
            set_flash(
                &session,
                "Your feedback request has been sent to your manager.",
            );
            Ok(to_dashboard())
        }
        Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to send feedback request: {e}");
            let ctx = PageContext::build(&session, &config)?;
            let tmpl = RequestFormTemplate {
                ctx,
                message: form.message.clone(),
                errors: vec![
                    e.user_message("Failed to send feedback request. Please try again."),
                ],
            };
            render(tmpl)
        }
    }
}

/// POST /requests/{id}/complete
pub async fn complete(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let request_id = path.into_inner();
    let client = ApiClient::from_session(&http, &config, &session)?;

    match client.complete_feedback_request(request_id).await {
        Ok(()) => {
            let user_id = get_user_id(&session).unwrap_or(0);
            log::info!("user {user_id} completed feedback request {request_id}");
            set_flash(&session, "Request marked complete");
        }
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to complete request {request_id}: {e}");
            set_flash(&session, &e.user_message("Failed to complete request"));
        }
    }

    Ok(to_dashboard())
}

/// POST /requests/{id}/cancel
pub async fn cancel(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    require_role(&session, Role::Manager)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let request_id = path.into_inner();
    let client = ApiClient::from_session(&http, &config, &session)?;

    match client.cancel_feedback_request(request_id).await {
        Ok(()) => {
            let user_id = get_user_id(&session).unwrap_or(0);
            log::info!("user {user_id} cancelled feedback request {request_id}");
            set_flash(&session, "Request cancelled");
        }
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to cancel request {request_id}: {e}");
            set_flash(&session, &e.user_message("Failed to cancel request"));
        }
    }

    Ok(to_dashboard())
}
