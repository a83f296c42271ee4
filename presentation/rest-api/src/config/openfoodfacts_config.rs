/// Configuration for the Open Food Facts product database.
pub struct OpenFoodFactsConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl OpenFoodFactsConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("OPENFOODFACTS_BASE_URL")
            .unwrap_or_else(|_| "https://world.openfoodfacts.org".to_string());
        let user_agent = std::env::var("OPENFOODFACTS_USER_AGENT")
            .unwrap_or_else(|_| format!("food-lookup/{}", env!("CARGO_PKG_VERSION")));

        Self {
            base_url,
            user_agent,
        }
    }
}
