use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{LookupOutcome, RecognitionMethod};

pub const FOUND_MESSAGE: &str = "Most relevant result";
pub const NOT_FOUND_MESSAGE: &str = "No product found.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum RecognitionMethodDto {
    #[oai(rename = "barcode")]
    Barcode,
    #[oai(rename = "text")]
    Text,
    #[oai(rename = "web_entities")]
    WebEntities,
    #[oai(rename = "logo_label")]
    LogoLabel,
}

impl From<RecognitionMethod> for RecognitionMethodDto {
    fn from(method: RecognitionMethod) -> Self {
        match method {
            RecognitionMethod::Barcode => RecognitionMethodDto::Barcode,
            RecognitionMethod::Text => RecognitionMethodDto::Text,
            RecognitionMethod::WebEntities => RecognitionMethodDto::WebEntities,
            RecognitionMethod::LogoLabel => RecognitionMethodDto::LogoLabel,
        }
    }
}

/// Request to identify a product from a photo.
#[derive(Debug, Clone, Object)]
pub struct LookupRequest {
    /// Base64-encoded PNG or JPEG (a data URL prefix is accepted)
    pub image_base64: String,
}

/// One line of the product record.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductFieldResponse {
    /// Field label, e.g. "Product Name"
    pub key: String,
    /// Field value, "Unknown" when the database has none
    pub value: String,
}

/// Lookup result.
#[derive(Debug, Clone, Object)]
pub struct LookupResultResponse {
    /// Whether any recognition method matched a product
    pub found: bool,
    /// Recognition method that produced the match
    #[oai(skip_serializing_if_is_none)]
    pub method: Option<RecognitionMethodDto>,
    /// Product fields in display order (empty when nothing matched)
    pub fields: Vec<ProductFieldResponse>,
    /// Human-readable summary
    pub message: String,
}

impl From<LookupOutcome> for LookupResultResponse {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(record) => Self {
                found: true,
                method: Some(record.method.into()),
                fields: record
                    .fields()
                    .into_iter()
                    .map(|(key, value)| ProductFieldResponse {
                        key: key.to_string(),
                        value,
                    })
                    .collect(),
                message: FOUND_MESSAGE.to_string(),
            },
            LookupOutcome::NotFound => Self {
                found: false,
                method: None,
                fields: Vec::new(),
                message: NOT_FOUND_MESSAGE.to_string(),
            },
        }
    }
}
