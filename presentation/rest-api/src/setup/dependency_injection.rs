use std::sync::Arc;

use logger::TracingLogger;

use google::client::GoogleCloudClient;
use google::image_annotator::ImageAnnotatorGoogleVision;
use google::translator::TranslatorGoogle;
use imaging::barcode_decoder::BarcodeDecoderRxing;
use openfoodfacts::client::OpenFoodFactsClient;
use openfoodfacts::product_catalog::ProductCatalogOpenFoodFacts;

use business::application::product::lookup::LookupProductUseCaseImpl;
use business::application::product::stages::LookupContext;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub lookup_api: crate::api::lookup::routes::LookupApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let google = &config.google;
        let google_client = GoogleCloudClient::new(
            google.api_key.clone(),
            google.vision_base_url.clone(),
            google.translate_base_url.clone(),
        );
        let catalog_client = OpenFoodFactsClient::new(
            config.open_food_facts.base_url.clone(),
            config.open_food_facts.user_agent.clone(),
        );

        let context = LookupContext {
            barcode_decoder: Arc::new(BarcodeDecoderRxing),
            annotator: Arc::new(ImageAnnotatorGoogleVision::new(google_client.clone())),
            catalog: Arc::new(ProductCatalogOpenFoodFacts::new(catalog_client)),
            translator: Arc::new(TranslatorGoogle::new(google_client)),
            logger,
        };

        // Use cases
        let lookup_use_case = Arc::new(LookupProductUseCaseImpl::new(context));

        let lookup_api =
            crate::api::lookup::routes::LookupApi::new(lookup_use_case, config.upload_dir.clone());

        Ok(Self {
            health_api,
            lookup_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::cors_config::init_cors;
    use crate::config::google_config::GoogleCloudConfig;
    use crate::config::openfoodfacts_config::OpenFoodFactsConfig;
    use crate::config::server_config::ServerConfig;

    #[test]
    fn should_wire_container_from_explicit_config() {
        let config = AppConfig {
            server: ServerConfig {
                ip: "127.0.0.1".to_string(),
                port: 8080,
            },
            cors: init_cors(),
            google: GoogleCloudConfig {
                api_key: "secret".to_string(),
                vision_base_url: "http://localhost:9000".to_string(),
                translate_base_url: "http://localhost:9001".to_string(),
            },
            open_food_facts: OpenFoodFactsConfig {
                base_url: "http://localhost:9002".to_string(),
                user_agent: "food-lookup-test".to_string(),
            },
            upload_dir: PathBuf::from("/tmp"),
        };

        assert!(DependencyContainer::new(&config).is_ok());
    }
}
