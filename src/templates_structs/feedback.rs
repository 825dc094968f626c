use askama::Template;

use super::PageContext;
use crate::api::types::{Sentiment, User};

/// Create/edit form. When editing, the employee selection is fixed and the
/// text fields arrive prefilled.
#[derive(Template)]
#[template(path = "feedback/form.html")]
pub struct FeedbackFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub team_members: Vec<User>,
    pub editing: bool,
    pub strengths: String,
    pub areas_to_improve: String,
    pub sentiment: Sentiment,
    pub errors: Vec<String>,
}
