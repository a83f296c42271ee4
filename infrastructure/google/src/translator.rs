use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::TranslationError;
use business::domain::product::services::TranslatorService;

use crate::client::GoogleCloudClient;

const TARGET_LANGUAGE: &str = "en";

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Deserialize)]
struct TranslationList {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Cloud Translation v2 adapter. The source language is auto-detected.
pub struct TranslatorGoogle {
    client: GoogleCloudClient,
}

impl TranslatorGoogle {
    pub fn new(client: GoogleCloudClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<String, TranslationError> {
        let data: TranslateResponse =
            serde_json::from_str(body).map_err(|_| TranslationError::InvalidPayload)?;

        data.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or(TranslationError::InvalidPayload)
    }
}

#[async_trait]
impl TranslatorService for TranslatorGoogle {
    async fn translate_to_english(&self, text: &str) -> Result<String, TranslationError> {
        let body = json!({
            "q": text,
            "target": TARGET_LANGUAGE,
            "format": "text",
        });

        let (header, key) = self.client.api_key_header();
        let response = self
            .client
            .client
            .post(self.client.translate_url())
            .header("Content-Type", "application/json")
            .header(header, key)
            .json(&body)
            .send()
            .await
            .map_err(|_| TranslationError::Transport)?;

        if !response.status().is_success() {
            return Err(TranslationError::HttpStatus(response.status().as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|_| TranslationError::Transport)?;

        Self::parse_response(&text)
    }
}
