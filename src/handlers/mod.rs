pub mod auth_handlers;
pub mod dashboard;
pub mod export_handlers;
pub mod feedback_handlers;
pub mod request_handlers;
