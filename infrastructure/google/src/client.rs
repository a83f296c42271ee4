use reqwest::Client;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared Google Cloud HTTP client configuration.
///
/// Credentials are handed in by the caller at startup; nothing is read from
/// the process environment here. Clones share one connection pool.
#[derive(Clone)]
pub struct GoogleCloudClient {
    pub client: Client,
    pub api_key: String,
    pub vision_base_url: String,
    pub translate_base_url: String,
}

impl GoogleCloudClient {
    pub fn new(api_key: String, vision_base_url: String, translate_base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            vision_base_url: vision_base_url.trim_end_matches('/').to_string(),
            translate_base_url: translate_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the API key header name and value.
    pub fn api_key_header(&self) -> (&'static str, &str) {
        (API_KEY_HEADER, &self.api_key)
    }

    /// Returns the Vision annotate endpoint URL.
    pub fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.vision_base_url)
    }

    /// Returns the Translation v2 endpoint URL.
    pub fn translate_url(&self) -> String {
        format!("{}/language/translate/v2", self.translate_base_url)
    }
}
