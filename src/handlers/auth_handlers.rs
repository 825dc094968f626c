use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::types::{LoginRequest, RegisterRequest, Role};
use crate::api::{ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::session::{set_flash, store_login, take_flash};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{LoginTemplate, RegisterTemplate};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    /// Comes from an HTML select; empty string means "none chosen".
    pub manager_id: Option<String>,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    // If already logged in, go straight to the dashboard
    if session.get::<String>("token").unwrap_or(None).is_some() {
        return Ok(to_dashboard());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        notice: take_flash(&session),
        app_name: config.app_name.clone(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let client = ApiClient::anonymous(&http, &config);
    let payload = LoginRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };

    let login_error = |error: String, session: &Session| {
        let tmpl = LoginTemplate {
            error: Some(error),
            notice: None,
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
        };
        render(tmpl)
    };

    let token = match client.login(&payload).await {
        Ok(token) => token,
        Err(ApiError::Unauthorized) => {
            return login_error("Invalid email or password".to_string(), &session);
        }
        Err(e) => {
            log::warn!("Login failed for {}: {e}", payload.email);
            return login_error(e.user_message("Login failed. Please try again."), &session);
        }
    };

    let authed = ApiClient::new(
        http.get_ref().clone(),
        config.api_base_url.clone(),
        Some(token.access_token.clone()),
    );
    match authed.current_user().await {
        Ok(user) => {
            store_login(&session, &token.access_token, &user);
            Ok(to_dashboard())
        }
        Err(e) => {
            log::error!("Fetching current user after login failed: {e}");
            login_error(
                e.user_message("Login failed. Please try again."),
                &session,
            )
        }
    }
}

pub async fn register_page(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if session.get::<String>("token").unwrap_or(None).is_some() {
        return Ok(to_dashboard());
    }

    let client = ApiClient::anonymous(&http, &config);
    let managers = client.managers().await.unwrap_or_default();

    let tmpl = RegisterTemplate {
        error: None,
        app_name: config.app_name.clone(),
        csrf_token: csrf::get_or_create_token(&session),
        managers,
    };
    render(tmpl)
}

pub async fn register_submit(
    http: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let client = ApiClient::anonymous(&http, &config);
    let manager_id = form
        .manager_id
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0);

    let payload = RegisterRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        full_name: form.full_name.trim().to_string(),
        role: form.role,
        manager_id,
    };

    match client.register(&payload).await {
        Ok(_) => {
            set_flash(&session, "Account created. Please sign in.");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/login"))
                .finish())
        }
        Err(e) => {
            log::warn!("Registration failed for {}: {e}", payload.email);
            let managers = client.managers().await.unwrap_or_default();
            let tmpl = RegisterTemplate {
                error: Some(e.user_message("Registration failed. Please try again.")),
                app_name: config.app_name.clone(),
                csrf_token: csrf::get_or_create_token(&session),
                managers,
            };
            render(tmpl)
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
