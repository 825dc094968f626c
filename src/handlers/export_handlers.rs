use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::api::{ApiClient, ApiError};
use crate::auth::session::{get_user_id, set_flash};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::report;
use crate::templates_structs::PageContext;

fn to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// GET /export/pdf — print-friendly HTML served inline; the browser's print
/// dialog does the PDF conversion.
pub async fn export_pdf(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config)?;
    let client = ApiClient::from_session(&http, &config, &session)?;

    let data = match client.dashboard().await {
        Ok(data) => data,
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to load feedback for export: {e}");
            set_flash(&session, &e.user_message("Failed to export report"));
            return Ok(to_dashboard());
        }
    };

    let user_id = get_user_id(&session).unwrap_or(0);
    log::info!(
        "user {user_id} exported {} feedback items as printable report",
        data.feedback.len()
    );

    let now = Local::now();
    let html =
        report::printable::render(&data.feedback, ctx.role, &ctx.full_name, now.naive_local());

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!(
                "inline; filename=\"feedback-report-{}.html\"",
                now.format("%Y-%m-%d")
            ),
        ))
        .body(html))
}

/// GET /export/csv
pub async fn export_csv(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config)?;
    let client = ApiClient::from_session(&http, &config, &session)?;

    let data = match client.dashboard().await {
        Ok(data) => data,
        Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized.into()),
        Err(e) => {
            log::error!("Failed to load feedback for export: {e}");
            set_flash(&session, &e.user_message("Failed to export report"));
            return Ok(to_dashboard());
        }
    };

    let user_id = get_user_id(&session).unwrap_or(0);
    log::info!(
        "user {user_id} exported {} feedback items as CSV",
        data.feedback.len()
    );

    let csv = report::csv::render(&data.feedback, ctx.role);
    let filename = report::csv::filename(Local::now().date_naive());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(csv))
}
