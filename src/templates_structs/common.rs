use askama::Template;

use crate::api::types::User;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    /// One-shot info message, e.g. after registration.
    pub notice: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    /// Managers to choose from when registering as an employee.
    pub managers: Vec<User>,
}
