use std::path::Path;

use async_trait::async_trait;

use super::model::CatalogProduct;
use super::value_objects::LumaBuffer;
use crate::domain::errors::{AnnotationError, BarcodeError, CatalogError, TranslationError};

/// Service port for decoding barcodes from an intensity image.
///
/// Returns the raw payload of every barcode found, in detection order.
pub trait BarcodeDecoderService: Send + Sync {
    fn decode(&self, image: &LumaBuffer) -> Result<Vec<Vec<u8>>, BarcodeError>;
}

/// Service port for image annotation.
///
/// Each call reads the encoded image at `image_path` and returns descriptions
/// ordered by the service's confidence, best first. An empty vector means the
/// service found nothing.
#[async_trait]
pub trait ImageAnnotatorService: Send + Sync {
    async fn detect_text(&self, image_path: &Path) -> Result<Vec<String>, AnnotationError>;

    async fn detect_web_entities(&self, image_path: &Path)
    -> Result<Vec<String>, AnnotationError>;

    async fn detect_logos(&self, image_path: &Path) -> Result<Vec<String>, AnnotationError>;

    async fn detect_labels(&self, image_path: &Path) -> Result<Vec<String>, AnnotationError>;
}

/// Service port for translating free text into English.
#[async_trait]
pub trait TranslatorService: Send + Sync {
    async fn translate_to_english(&self, text: &str) -> Result<String, TranslationError>;
}

/// Service port for the product database.
///
/// `Ok(None)` is a genuine miss; `Err` means the database could not be
/// queried or answered with something unusable.
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn find_by_barcode(&self, barcode: &str)
    -> Result<Option<CatalogProduct>, CatalogError>;

    /// Free-text search. Returns the first product of the result list.
    async fn search(&self, terms: &str) -> Result<Option<CatalogProduct>, CatalogError>;
}
