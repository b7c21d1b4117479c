use crate::constants::{API_PREFIX, DEFAULT_API_BASE_URL};

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Read the base URL baked in at build time via `API_BASE_URL`, falling
    /// back to the local development backend.
    pub fn new() -> Self {
        Self::from_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an `/api/v1` path, e.g. `url("/users/me")`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }
}
