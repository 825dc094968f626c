use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "requests/form.html")]
pub struct RequestFormTemplate {
    pub ctx: PageContext,
    /// Entered text survives a failed submission so the user can retry.
    pub message: String,
    pub errors: Vec<String>,
}
