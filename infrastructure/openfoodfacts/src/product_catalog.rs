use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use business::domain::errors::CatalogError;
use business::domain::product::model::{CatalogProduct, NutritionFacts, UNKNOWN};
use business::domain::product::services::ProductCatalogService;

use crate::client::OpenFoodFactsClient;

#[derive(Deserialize)]
struct BarcodeResponse {
    #[serde(default)]
    status: Option<i64>,
    product: Option<OpenFoodFactsProduct>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<OpenFoodFactsProduct>,
}

#[derive(Deserialize)]
struct OpenFoodFactsProduct {
    product_name: Option<String>,
    brands: Option<String>,
    categories: Option<String>,
    ingredients_text: Option<String>,
    allergens: Option<String>,
    nutriments: Option<OpenFoodFactsNutriments>,
}

#[derive(Deserialize)]
struct OpenFoodFactsNutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<Value>,
    fat_100g: Option<Value>,
    sugars_100g: Option<Value>,
}

impl OpenFoodFactsProduct {
    fn into_catalog_product(self) -> CatalogProduct {
        let nutrition = self
            .nutriments
            .map(|n| NutritionFacts {
                energy_kcal_100g: render_value(n.energy_kcal_100g),
                fat_100g: render_value(n.fat_100g),
                sugars_100g: render_value(n.sugars_100g),
            })
            .unwrap_or_default();

        CatalogProduct {
            product_name: or_unknown(self.product_name),
            brands: or_unknown(self.brands),
            categories: or_unknown(self.categories),
            ingredients_text: or_unknown(self.ingredients_text),
            allergens: or_unknown(self.allergens),
            nutrition,
        }
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

fn render_value(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

pub struct ProductCatalogOpenFoodFacts {
    client: OpenFoodFactsClient,
}

impl ProductCatalogOpenFoodFacts {
    pub fn new(client: OpenFoodFactsClient) -> Self {
        Self { client }
    }

    fn parse_barcode_response(body: &str) -> Result<Option<CatalogProduct>, CatalogError> {
        let data: BarcodeResponse =
            serde_json::from_str(body).map_err(|_| CatalogError::invalid_payload())?;

        if data.status == Some(0) {
            return Ok(None);
        }

        Ok(data.product.map(OpenFoodFactsProduct::into_catalog_product))
    }

    fn parse_search_response(body: &str) -> Result<Option<CatalogProduct>, CatalogError> {
        let data: SearchResponse =
            serde_json::from_str(body).map_err(|_| CatalogError::invalid_payload())?;

        Ok(data
            .products
            .into_iter()
            .next()
            .map(OpenFoodFactsProduct::into_catalog_product))
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<Option<String>, CatalogError> {
        let response = request
            .send()
            .await
            .map_err(|_| CatalogError::transport())?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::http_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|_| CatalogError::transport())?;
        Ok(Some(body))
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogOpenFoodFacts {
    async fn find_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<CatalogProduct>, CatalogError> {
        if barcode.is_empty() {
            return Ok(None);
        }

        let request = self.client.client.get(self.client.product_url(barcode)?);
        match self.fetch(request).await? {
            Some(body) => Self::parse_barcode_response(&body),
            None => Ok(None),
        }
    }

    async fn search(&self, terms: &str) -> Result<Option<CatalogProduct>, CatalogError> {
        let request = self.client.client.get(self.client.search_url()).query(&[
            ("search_terms", terms),
            ("search_simple", "1"),
            ("action", "process"),
            ("json", "1"),
        ]);

        match self.fetch(request).await? {
            Some(body) => Self::parse_search_response(&body),
            None => Ok(None),
        }
    }
}
