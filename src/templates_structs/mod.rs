// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::api::types::Role;
use crate::auth::csrf;
use crate::auth::session::{get_full_name, get_role, take_flash};
use crate::config::AppConfig;
use crate::errors::AppError;

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.full_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub full_name: String,
    pub role: Role,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Result<Self, AppError> {
        let full_name = get_full_name(session)
            .map_err(|e| AppError::Session(format!("Failed to get user: {}", e)))?;
        let role = get_role(session)
            .map_err(|e| AppError::Session(format!("Failed to get role: {}", e)))?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = full_name.chars().next().unwrap_or('?').to_uppercase().to_string();
        Ok(Self {
            full_name,
            role,
            avatar_initial,
            flash,
            app_name: config.app_name.clone(),
            csrf_token,
        })
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    pub fn role_label(&self) -> &'static str {
        self.role.label()
    }
}

mod common;
mod dashboard;
mod feedback;
mod request;

pub use self::common::{LoginTemplate, RegisterTemplate};
pub use self::dashboard::{EmployeeDashboardTemplate, ManagerDashboardTemplate};
pub use self::feedback::FeedbackFormTemplate;
pub use self::request::RequestFormTemplate;
