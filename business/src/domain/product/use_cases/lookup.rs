use async_trait::async_trait;

use crate::domain::product::model::LookupOutcome;
use crate::domain::product::value_objects::ProductImage;

#[async_trait]
pub trait LookupProductUseCase: Send + Sync {
    /// Identifies the product in `image`. Never fails: a photo nothing
    /// matches yields `LookupOutcome::NotFound`.
    async fn execute(&self, image: &ProductImage) -> LookupOutcome;
}
