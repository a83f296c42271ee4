use std::path::Path;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::AnnotationError;
use business::domain::product::services::ImageAnnotatorService;

use crate::client::GoogleCloudClient;

/// Detection requested from the Vision API, one per call.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Feature {
    Text,
    WebEntities,
    Logos,
    Labels,
}

impl Feature {
    fn api_name(self) -> &'static str {
        match self {
            Feature::Text => "TEXT_DETECTION",
            Feature::WebEntities => "WEB_DETECTION",
            Feature::Logos => "LOGO_DETECTION",
            Feature::Labels => "LABEL_DETECTION",
        }
    }
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    #[serde(default)]
    text_annotations: Vec<EntityAnnotation>,
    web_detection: Option<WebDetection>,
    #[serde(default)]
    logo_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    label_annotations: Vec<EntityAnnotation>,
    error: Option<ServiceStatus>,
}

#[derive(Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebDetection {
    #[serde(default)]
    web_entities: Vec<WebEntity>,
}

#[derive(Deserialize)]
struct WebEntity {
    description: Option<String>,
}

#[derive(Deserialize)]
struct ServiceStatus {
    #[serde(default)]
    message: String,
}

pub struct ImageAnnotatorGoogleVision {
    client: GoogleCloudClient,
}

impl ImageAnnotatorGoogleVision {
    pub fn new(client: GoogleCloudClient) -> Self {
        Self { client }
    }

    async fn read_image_base64(image_path: &Path) -> Result<String, AnnotationError> {
        let content = tokio::fs::read(image_path)
            .await
            .map_err(|_| AnnotationError::ImageUnreadable)?;
        Ok(STANDARD.encode(content))
    }

    fn parse_response(feature: Feature, body: &str) -> Result<Vec<String>, AnnotationError> {
        let data: AnnotateResponse =
            serde_json::from_str(body).map_err(|_| AnnotationError::InvalidPayload)?;

        let response = data.responses.into_iter().next().unwrap_or_default();
        if let Some(status) = response.error {
            return Err(AnnotationError::Service(status.message));
        }

        let descriptions = match feature {
            // The first text annotation is the whole detected block; the rest are words.
            Feature::Text => response
                .text_annotations
                .into_iter()
                .skip(1)
                .map(|a| a.description)
                .collect(),
            Feature::WebEntities => response
                .web_detection
                .map(|w| w.web_entities)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|e| e.description)
                .filter(|d| !d.is_empty())
                .collect(),
            Feature::Logos => response
                .logo_annotations
                .into_iter()
                .map(|a| a.description)
                .collect(),
            Feature::Labels => response
                .label_annotations
                .into_iter()
                .map(|a| a.description)
                .collect(),
        };

        Ok(descriptions)
    }

    async fn annotate(
        &self,
        image_path: &Path,
        feature: Feature,
    ) -> Result<Vec<String>, AnnotationError> {
        let content = Self::read_image_base64(image_path).await?;

        let body = json!({
            "requests": [
                {
                    "image": {"content": content},
                    "features": [{"type": feature.api_name()}],
                },
            ],
        });

        let (header, key) = self.client.api_key_header();
        let response = self
            .client
            .client
            .post(self.client.annotate_url())
            .header("Content-Type", "application/json")
            .header(header, key)
            .json(&body)
            .send()
            .await
            .map_err(|_| AnnotationError::Transport)?;

        if !response.status().is_success() {
            return Err(AnnotationError::HttpStatus(response.status().as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|_| AnnotationError::Transport)?;

        Self::parse_response(feature, &text)
    }
}

#[async_trait]
impl ImageAnnotatorService for ImageAnnotatorGoogleVision {
    async fn detect_text(&self, image_path: &Path) -> Result<Vec<String>, AnnotationError> {
        self.annotate(image_path, Feature::Text).await
    }

    async fn detect_web_entities(
        &self,
        image_path: &Path,
    ) -> Result<Vec<String>, AnnotationError> {
        self.annotate(image_path, Feature::WebEntities).await
    }

    async fn detect_logos(&self, image_path: &Path) -> Result<Vec<String>, AnnotationError> {
        self.annotate(image_path, Feature::Logos).await
    }

    async fn detect_labels(&self, image_path: &Path) -> Result<Vec<String>, AnnotationError> {
        self.annotate(image_path, Feature::Labels).await
    }
}
