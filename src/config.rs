/// Runtime configuration, read once at startup from the environment
/// (a `.env` file is loaded first when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    /// Base URL of the feedback backend, including the `/api` prefix.
    pub api_base_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let backend = std::env::var("API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let api_base_url = format!("{}/api", backend.trim_end_matches('/'));

        AppConfig {
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| "TeamPulse".to_string()),
            api_base_url,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn trailing_slash_is_normalized_before_api_suffix() {
        let backend = "http://backend:9000/".trim_end_matches('/');
        assert_eq!(format!("{}/api", backend), "http://backend:9000/api");
    }
}
