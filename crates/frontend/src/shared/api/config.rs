pub const DEFAULT_BASE_URL: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Connection settings shared by every request of an [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub default_headers: Vec<(String, String)>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Base URL from the `API_BASE_URL` variable at build time, else `/api`.
    pub fn from_env() -> Self {
        let base_url = option_env!("API_BASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(base_url)
    }

    /// Resolve `path` against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ApiConfig::new(DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(
            config.default_headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn joins_paths() {
        let config = ApiConfig::new("/api");
        assert_eq!(config.url("/users"), "/api/users");
        assert_eq!(config.url("users"), "/api/users");

        let config = ApiConfig::new("https://erp.example.com/api/");
        assert_eq!(config.url("/test-endpoint"), "https://erp.example.com/api/test-endpoint");
        assert_eq!(config.url("http://other.host/x"), "http://other.host/x");
    }
}
