use std::env;
use std::path::PathBuf;

use super::google_config::GoogleCloudConfig;
use super::openfoodfacts_config::OpenFoodFactsConfig;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub google: GoogleCloudConfig,
    pub open_food_facts: OpenFoodFactsConfig,
    /// Directory where uploaded photos are staged during a lookup.
    pub upload_dir: PathBuf,
}

impl AppConfig {
    /// Environment variables:
    /// - UPLOAD_DIR: staging directory for uploads (default: system temp dir)
    pub fn from_env() -> anyhow::Result<Self> {
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());

        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            google: GoogleCloudConfig::from_env()?,
            open_food_facts: OpenFoodFactsConfig::from_env(),
            upload_dir,
        })
    }
}
