use reqwest::{Client, Url};

use business::domain::errors::CatalogError;

/// Shared Open Food Facts HTTP client configuration.
pub struct OpenFoodFactsClient {
    pub client: Client,
    pub base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: String, user_agent: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the exact-match product endpoint URL for a barcode.
    ///
    /// The barcode is percent-encoded as a single path segment.
    pub fn product_url(&self, barcode: &str) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.base_url).map_err(|_| CatalogError::transport())?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::transport())?
            .pop_if_empty()
            .extend(["api", "v0", "product", &format!("{}.json", barcode)]);
        Ok(url)
    }

    /// Returns the free-text search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/cgi/search.pl", self.base_url)
    }
}
