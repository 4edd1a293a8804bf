use std::env;
use std::time::Duration;

use rest_client::client::DEFAULT_BASE_URL;

/// Products REST resource configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCTS_API_URL: Base resource URL (default: "http://localhost:8080/api/v1/products")
    /// - PRODUCTS_API_TIMEOUT_SECS: Request timeout in seconds (default: transport default)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PRODUCTS_API_URL").ok(),
            env::var("PRODUCTS_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self { base_url, timeout }
    }
}
