use std::time::Duration;

use business::domain::product::value_objects::ProductId;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1/products";

/// Shared HTTP client bound to the products resource.
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    /// Without a timeout the transport default applies. Fails when the TLS
    /// backend or system configuration cannot be loaded.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// Returns the collection URL, used for list and create.
    pub fn collection_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// Returns the URL of a single product, used for get, update and delete.
    pub fn item_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}
