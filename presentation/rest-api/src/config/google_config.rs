use anyhow::Context;

const DEFAULT_VISION_BASE_URL: &str = "https://vision.googleapis.com";
const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translation.googleapis.com";

/// Configuration for Google Cloud Vision and Translation access.
///
/// Environment variables:
/// - GOOGLE_CLOUD_API_KEY: API key with Vision and Translation enabled (required)
/// - GOOGLE_VISION_BASE_URL: default "https://vision.googleapis.com"
/// - GOOGLE_TRANSLATE_BASE_URL: default "https://translation.googleapis.com"
pub struct GoogleCloudConfig {
    pub api_key: String,
    pub vision_base_url: String,
    pub translate_base_url: String,
}

impl GoogleCloudConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GOOGLE_CLOUD_API_KEY")
            .context("GOOGLE_CLOUD_API_KEY environment variable must be set")?;
        let vision_base_url = std::env::var("GOOGLE_VISION_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_VISION_BASE_URL.to_string());
        let translate_base_url = std::env::var("GOOGLE_TRANSLATE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_BASE_URL.to_string());

        Ok(Self {
            api_key,
            vision_base_url,
            translate_base_url,
        })
    }
}
