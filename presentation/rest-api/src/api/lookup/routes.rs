use std::path::PathBuf;
use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::lookup::LookupProductUseCase;
use imaging::loader::StagedImage;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::lookup::dto::{LookupRequest, LookupResultResponse};
use crate::api::lookup::upload::decode_image_base64;
use crate::api::tags::ApiTags;

pub struct LookupApi {
    lookup_use_case: Arc<dyn LookupProductUseCase>,
    upload_dir: PathBuf,
}

impl LookupApi {
    pub fn new(lookup_use_case: Arc<dyn LookupProductUseCase>, upload_dir: PathBuf) -> Self {
        Self {
            lookup_use_case,
            upload_dir,
        }
    }
}

/// Product recognition API
#[OpenApi]
impl LookupApi {
    /// Identify a food product from a photo
    ///
    /// Tries barcode decoding, text recognition, web entity detection and
    /// logo/label detection in that order, and returns the first product the
    /// Open Food Facts database matches. A photo nothing matches is not an
    /// error: the response has `found: false` and "No product found.".
    #[oai(path = "/products/lookup", method = "post", tag = "ApiTags::Lookup")]
    async fn lookup(&self, body: Json<LookupRequest>) -> LookupResponse {
        let staged = match decode_image_base64(&body.0.image_base64)
            .and_then(|bytes| StagedImage::stage(&self.upload_dir, &bytes))
        {
            Ok(staged) => staged,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    400 => LookupResponse::BadRequest(json),
                    _ => LookupResponse::InternalError(json),
                };
            }
        };

        let outcome = self.lookup_use_case.execute(staged.image()).await;
        LookupResponse::Ok(Json(outcome.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LookupResponse {
    #[oai(status = 200)]
    Ok(Json<LookupResultResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::product::model::{LookupOutcome, ProductRecord, RecognitionMethod};
    use business::domain::product::value_objects::ProductImage;

    use super::*;

    const ONE_PIXEL_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    struct FixedLookup(LookupOutcome);

    #[async_trait]
    impl LookupProductUseCase for FixedLookup {
        async fn execute(&self, image: &ProductImage) -> LookupOutcome {
            assert!(image.path().exists());
            self.0.clone()
        }
    }

    fn client(outcome: LookupOutcome) -> TestClient<Route> {
        let api = LookupApi::new(Arc::new(FixedLookup(outcome)), std::env::temp_dir());
        let service = OpenApiService::new(api, "Food Lookup API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_report_no_product_found() {
        let cli = client(LookupOutcome::NotFound);

        let response = cli
            .post("/products/lookup")
            .body_json(&json!({ "image_base64": ONE_PIXEL_PNG }))
            .send()
            .await;

        response.assert_status_is_ok();
        response
            .assert_json(json!({
                "found": false,
                "fields": [],
                "message": "No product found.",
            }))
            .await;
    }

    #[tokio::test]
    async fn should_return_matched_product_fields() {
        let cli = client(LookupOutcome::Found(ProductRecord {
            method: RecognitionMethod::LogoLabel,
            product_name: "Coca-Cola Original".to_string(),
            brands: "Coca-Cola".to_string(),
            categories: "Sodas".to_string(),
            ingredients: "Carbonated water, sugar".to_string(),
            allergens: "Unknown".to_string(),
            nutrition: None,
        }));

        let response = cli
            .post("/products/lookup")
            .body_json(&json!({ "image_base64": ONE_PIXEL_PNG }))
            .send()
            .await;

        response.assert_status_is_ok();
        response
            .assert_json(json!({
                "found": true,
                "method": "logo_label",
                "fields": [
                    {"key": "Product Name", "value": "Coca-Cola Original"},
                    {"key": "Brands", "value": "Coca-Cola"},
                    {"key": "Categories", "value": "Sodas"},
                    {"key": "Ingredients", "value": "Carbonated water, sugar"},
                    {"key": "Allergens", "value": "Unknown"},
                ],
                "message": "Most relevant result",
            }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_upload_that_is_not_an_image() {
        let cli = client(LookupOutcome::NotFound);

        let response = cli
            .post("/products/lookup")
            .body_json(&json!({ "image_base64": "aGVsbG8gd29ybGQ=" }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
