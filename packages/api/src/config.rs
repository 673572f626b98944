//! Client configuration from environment variables.
//!
//! | Variable | Default | Read at |
//! |----------|---------|---------|
//! | `BACKEND_URL` | `http://localhost:8000` | build time on wasm32, start-up on native |
//! | `REQUEST_TIMEOUT_SECS` | `30` | build time on wasm32, start-up on native |
//!
//! A browser bundle has no process environment, so the wasm build bakes the
//! values in with `option_env!`.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the content API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(base_url.into()),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load from `BACKEND_URL` / `REQUEST_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        let (base, timeout) = env_values();
        Self::from_values(base, timeout)
    }

    fn from_values(base: Option<String>, timeout: Option<String>) -> Self {
        let base = base
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = timeout
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base).with_timeout(Duration::from_secs(timeout))
    }

    /// Join a resource path (starting with `/`) onto the base address.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base(base: String) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn env_values() -> (Option<String>, Option<String>) {
    (
        option_env!("BACKEND_URL").map(str::to_string),
        option_env!("REQUEST_TIMEOUT_SECS").map(str::to_string),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn env_values() -> (Option<String>, Option<String>) {
    dotenvy::dotenv().ok();
    (
        std::env::var("BACKEND_URL").ok(),
        std::env::var("REQUEST_TIMEOUT_SECS").ok(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_values_override_defaults() {
        let config = ApiConfig::from_values(
            Some("https://api.school.example/".to_string()),
            Some("5".to_string()),
        );
        assert_eq!(config.base_url, "https://api.school.example");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ApiConfig::from_values(Some("  ".to_string()), Some("soon".to_string()));
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::from_values(None, Some("0".to_string()));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_url_join() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.url("/admin/staff"), "http://localhost:8000/admin/staff");
    }
}
