//! Thin REST client for the feedback backend.
//!
//! Every call attaches the session's bearer token; a 401 from the backend is
//! mapped to [`ApiError::Unauthorized`] so the auth middleware can clear the
//! session and return the user to the login page.

pub mod types;

use std::fmt;

use actix_session::Session;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use self::types::{
    DashboardData, Feedback, FeedbackCreate, FeedbackRequest, FeedbackRequestCreate,
    FeedbackUpdate, LoginRequest, RegisterRequest, Token, User,
};

#[derive(Debug)]
pub enum ApiError {
    /// The backend rejected the credentials (HTTP 401).
    Unauthorized,
    /// Any other non-success response; `detail` is the backend's
    /// human-readable message when it supplied one.
    Backend { status: u16, detail: Option<String> },
    /// The request never produced a response, or the body failed to decode.
    Transport(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Backend rejected credentials (401)"),
            ApiError::Backend { status, detail } => match detail {
                Some(d) => write!(f, "Backend error {status}: {d}"),
                None => write!(f, "Backend error {status}"),
            },
            ApiError::Transport(e) => write!(f, "Transport error: {e}"),
        }
    }
}

impl ApiError {
    /// Message to show the user: the backend's detail takes precedence over
    /// the view's generic fallback; raw transport errors are never surfaced.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// FastAPI-style error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        ApiClient {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    /// Client without credentials, for the login and registration endpoints.
    pub fn anonymous(http: &reqwest::Client, config: &AppConfig) -> Self {
        ApiClient::new(http.clone(), config.api_base_url.clone(), None)
    }

    /// Client carrying the session's bearer token. Fails with
    /// [`ApiError::Unauthorized`] when the session holds no token.
    pub fn from_session(
        http: &reqwest::Client,
        config: &AppConfig,
        session: &Session,
    ) -> Result<Self, ApiError> {
        let token = crate::auth::session::get_token(session).ok_or(ApiError::Unauthorized)?;
        Ok(ApiClient::new(
            http.clone(),
            config.api_base_url.clone(),
            Some(token),
        ))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, rb: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let rb = match &self.token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        };
        let resp = rb.send().await.map_err(ApiError::Transport)?;
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let detail = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ApiError::Backend {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(resp)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        rb: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = self.send(rb).await?;
        resp.json::<T>().await.map_err(ApiError::Transport)
    }

    // ---------- Auth ----------

    pub async fn login(&self, payload: &LoginRequest) -> Result<Token, ApiError> {
        self.fetch(self.http.post(self.url("/auth/login")).json(payload))
            .await
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, ApiError> {
        self.fetch(self.http.post(self.url("/auth/register")).json(payload))
            .await
    }

    // ---------- Users ----------

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(self.http.get(self.url("/users/me"))).await
    }

    pub async fn team_members(&self) -> Result<Vec<User>, ApiError> {
        self.fetch(self.http.get(self.url("/users/team"))).await
    }

    pub async fn managers(&self) -> Result<Vec<User>, ApiError> {
        self.fetch(self.http.get(self.url("/users/managers"))).await
    }

    // ---------- Feedback ----------

    pub async fn create_feedback(&self, payload: &FeedbackCreate) -> Result<Feedback, ApiError> {
        self.fetch(self.http.post(self.url("/feedback/")).json(payload))
            .await
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        self.fetch(self.http.get(self.url("/feedback/"))).await
    }

    pub async fn update_feedback(
        &self,
        id: i64,
        payload: &FeedbackUpdate,
    ) -> Result<Feedback, ApiError> {
        self.fetch(
            self.http
                .put(self.url(&format!("/feedback/{id}")))
                .json(payload),
        )
        .await
    }

    /// Acknowledge by id. Sent at most once per item by the UI; a repeat is
    /// the backend's to reject.
    pub async fn acknowledge_feedback(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(&format!("/feedback/{id}/acknowledge"))))
            .await
            .map(|_| ())
    }

    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.fetch(self.http.get(self.url("/feedback/dashboard")))
            .await
    }

    // ---------- Feedback requests ----------

    pub async fn create_feedback_request(
        &self,
        payload: &FeedbackRequestCreate,
    ) -> Result<FeedbackRequest, ApiError> {
        self.fetch(self.http.post(self.url("/feedback/request")).json(payload))
            .await
    }

    pub async fn list_feedback_requests(&self) -> Result<Vec<FeedbackRequest>, ApiError> {
        self.fetch(self.http.get(self.url("/feedback/requests")))
            .await
    }

    pub async fn complete_feedback_request(&self, id: i64) -> Result<(), ApiError> {
        self.send(
            self.http
                .post(self.url(&format!("/feedback/requests/{id}/complete"))),
        )
        .await
        .map(|_| ())
    }

    pub async fn cancel_feedback_request(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/feedback/requests/{id}"))))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = ApiError::Backend {
            status: 400,
            detail: Some("Employee not on your team".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to submit feedback"),
            "Employee not on your team"
        );
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let err = ApiError::Backend {
            status: 502,
            detail: None,
        };
        assert_eq!(
            err.user_message("Failed to load dashboard data"),
            "Failed to load dashboard data"
        );
        assert_eq!(
            ApiError::Unauthorized.user_message("Session expired"),
            "Session expired"
        );
    }
}
