use actix_session::Session;

use crate::api::types::{Role, User};
use crate::errors::AppError;

pub fn get_token(session: &Session) -> Option<String> {
    session.get::<String>("token").unwrap_or(None)
}

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

pub fn get_full_name(session: &Session) -> Result<String, String> {
    match session.get::<String>("full_name") {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err("No user in session".to_string()),
        Err(e) => Err(format!("Session error: {}", e)),
    }
}

pub fn get_role(session: &Session) -> Result<Role, String> {
    match session.get::<Role>("role") {
        Ok(Some(role)) => Ok(role),
        Ok(None) => Err("No role in session".to_string()),
        Err(e) => Err(format!("Session error: {}", e)),
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

/// Store the backend token and the authenticated user in the session.
pub fn store_login(session: &Session, token: &str, user: &User) {
    session.renew();
    let _ = session.insert("token", token);
    let _ = session.insert("user_id", user.id);
    let _ = session.insert("full_name", &user.full_name);
    let _ = session.insert("role", user.role);
}

/// Check the session role; returns Err(AppError) when it does not match.
pub fn require_role(session: &Session, role: Role) -> Result<(), AppError> {
    let current = get_role(session)
        .map_err(|e| AppError::Session(format!("Failed to get role: {}", e)))?;
    if current == role {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(role.as_str().to_string()))
    }
}
