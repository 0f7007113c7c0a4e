//! Client configuration

use std::time::Duration;

/// Production endpoint of the Context7 API.
pub const DEFAULT_BASE_URL: &str = "https://context7.com/api/v1";
/// Placeholder key used until a real one is supplied.
pub const DEFAULT_API_KEY: &str = "YOUR_API_KEY_HERE";
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the client needs to reach the API.
///
/// Passed explicitly into [`crate::DocsClient::new`] so tests can point the
/// client at a local mock server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://context7.com/api/v1`
    pub base_url: String,
    /// Bearer token sent with every request
    pub api_key: String,
    /// Timeout applied to the search request
    pub search_timeout: Duration,
    /// Timeout applied to the documentation request
    pub fetch_timeout: Duration,
    /// User agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            search_timeout: DEFAULT_SEARCH_TIMEOUT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: format!("libdocs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.search_timeout, Duration::from_secs(10));
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert!(config.user_agent.starts_with("libdocs/"));
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/api/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
    }
}
