use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{AnnotationError, CatalogError};
use crate::domain::logger::Logger;
use crate::domain::product::model::{
    CatalogProduct, ProductRecord, RecognitionMethod, RecognitionResult, UNKNOWN,
};
use crate::domain::product::query::{logo_label_query, text_query, web_entity_query};
use crate::domain::product::services::{
    BarcodeDecoderService, ImageAnnotatorService, ProductCatalogService, TranslatorService,
};
use crate::domain::product::value_objects::ProductImage;

/// Collaborators shared by every stage of one cascade.
pub struct LookupContext {
    pub barcode_decoder: Arc<dyn BarcodeDecoderService>,
    pub annotator: Arc<dyn ImageAnnotatorService>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub translator: Arc<dyn TranslatorService>,
    pub logger: Arc<dyn Logger>,
}

/// One recognition method plus its product search.
///
/// A stage yields `Some` only when recognition produced output AND the
/// product database matched it.
#[async_trait]
pub trait LookupStage: Send + Sync {
    fn method(&self) -> RecognitionMethod;

    async fn attempt(&self, image: &ProductImage, context: &LookupContext)
    -> Option<ProductRecord>;
}

pub struct BarcodeStage;

#[async_trait]
impl LookupStage for BarcodeStage {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::Barcode
    }

    async fn attempt(
        &self,
        image: &ProductImage,
        context: &LookupContext,
    ) -> Option<ProductRecord> {
        let luma = image.pixels().to_luma();
        let payloads = match context.barcode_decoder.decode(&luma) {
            Ok(payloads) => payloads,
            Err(err) => {
                context
                    .logger
                    .warn(&format!("Barcode decoding failed: {}", err));
                return None;
            }
        };

        let Some(payload) = payloads.into_iter().next() else {
            context.logger.debug("No barcode detected");
            return None;
        };

        let barcode = match String::from_utf8(payload) {
            Ok(text) => RecognitionResult::Barcode(text.trim().to_string()),
            Err(_) => {
                context.logger.warn("Barcode payload is not valid UTF-8");
                return None;
            }
        };
        if barcode.is_empty() {
            return None;
        }
        context.logger.info(&format!("Recognized {}", barcode));

        let code = barcode.tokens().first()?;
        let result = context.catalog.find_by_barcode(code).await;
        resolve(context, self.method(), result).await
    }
}

pub struct TextStage;

#[async_trait]
impl LookupStage for TextStage {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::Text
    }

    async fn attempt(
        &self,
        image: &ProductImage,
        context: &LookupContext,
    ) -> Option<ProductRecord> {
        let detected = context.annotator.detect_text(image.path()).await;
        let tokens = recognized(context, detected, RecognitionResult::TextTokens);

        let terms = text_query(tokens.tokens())?;
        search(context, self.method(), &terms).await
    }
}

pub struct WebEntityStage;

#[async_trait]
impl LookupStage for WebEntityStage {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::WebEntities
    }

    async fn attempt(
        &self,
        image: &ProductImage,
        context: &LookupContext,
    ) -> Option<ProductRecord> {
        let detected = context.annotator.detect_web_entities(image.path()).await;
        let entities = recognized(context, detected, RecognitionResult::WebEntities);

        let terms = web_entity_query(entities.tokens())?;
        search(context, self.method(), &terms).await
    }
}

pub struct LogoLabelStage;

#[async_trait]
impl LookupStage for LogoLabelStage {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::LogoLabel
    }

    async fn attempt(
        &self,
        image: &ProductImage,
        context: &LookupContext,
    ) -> Option<ProductRecord> {
        let detected = context.annotator.detect_labels(image.path()).await;
        let labels = recognized(context, detected, RecognitionResult::Labels);
        let detected = context.annotator.detect_logos(image.path()).await;
        let logos = recognized(context, detected, RecognitionResult::Logos);

        let terms = logo_label_query(logos.tokens(), labels.tokens())?;
        search(context, self.method(), &terms).await
    }
}

/// Stages in cascade order.
pub fn default_stages() -> Vec<Box<dyn LookupStage>> {
    vec![
        Box::new(BarcodeStage),
        Box::new(TextStage),
        Box::new(WebEntityStage),
        Box::new(LogoLabelStage),
    ]
}

/// Annotation failures count as a recognition miss.
fn recognized(
    context: &LookupContext,
    detected: Result<Vec<String>, AnnotationError>,
    wrap: fn(Vec<String>) -> RecognitionResult,
) -> RecognitionResult {
    let result = match detected {
        Ok(items) => wrap(items),
        Err(err) => {
            context
                .logger
                .warn(&format!("Image annotation failed: {}", err));
            wrap(Vec::new())
        }
    };
    context.logger.debug(&format!("Recognized {}", result));
    result
}

async fn search(
    context: &LookupContext,
    method: RecognitionMethod,
    terms: &str,
) -> Option<ProductRecord> {
    context
        .logger
        .info(&format!("Searching products by {}: \"{}\"", method, terms));
    let result = context.catalog.search(terms).await;
    resolve(context, method, result).await
}

async fn resolve(
    context: &LookupContext,
    method: RecognitionMethod,
    result: Result<Option<CatalogProduct>, CatalogError>,
) -> Option<ProductRecord> {
    match result {
        Ok(Some(product)) => Some(build_record(context, product, method).await),
        Ok(None) => {
            context
                .logger
                .info(&format!("No product matched the {} stage", method));
            None
        }
        Err(err) => {
            context.logger.warn(&format!(
                "Product database unavailable during {} stage: {}",
                method, err
            ));
            None
        }
    }
}

/// Translates the free-text fields and assembles the record. Nutrition is
/// only reported for exact barcode matches.
pub async fn build_record(
    context: &LookupContext,
    product: CatalogProduct,
    method: RecognitionMethod,
) -> ProductRecord {
    let nutrition = (method == RecognitionMethod::Barcode).then_some(product.nutrition);

    ProductRecord {
        method,
        product_name: translate_field(context, product.product_name).await,
        brands: translate_field(context, product.brands).await,
        categories: translate_field(context, product.categories).await,
        ingredients: translate_field(context, product.ingredients_text).await,
        allergens: product.allergens,
        nutrition,
    }
}

/// Best-effort translation: any failure keeps the original text.
pub async fn translate_field(context: &LookupContext, text: String) -> String {
    if text.trim().is_empty() || text == UNKNOWN {
        return text;
    }

    match context.translator.translate_to_english(&text).await {
        Ok(translated) if !translated.trim().is_empty() => translated,
        Ok(_) => text,
        Err(err) => {
            context
                .logger
                .warn(&format!("Translation failed, keeping original: {}", err));
            text
        }
    }
}
