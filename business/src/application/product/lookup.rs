use async_trait::async_trait;

use crate::application::product::stages::{LookupContext, LookupStage, default_stages};
use crate::domain::product::model::LookupOutcome;
use crate::domain::product::use_cases::lookup::LookupProductUseCase;
use crate::domain::product::value_objects::ProductImage;

/// Fallback cascade: stages run in order and the first match wins.
pub struct LookupProductUseCaseImpl {
    pub context: LookupContext,
    pub stages: Vec<Box<dyn LookupStage>>,
}

impl LookupProductUseCaseImpl {
    pub fn new(context: LookupContext) -> Self {
        Self::with_stages(context, default_stages())
    }

    pub fn with_stages(context: LookupContext, stages: Vec<Box<dyn LookupStage>>) -> Self {
        Self { context, stages }
    }
}

#[async_trait]
impl LookupProductUseCase for LookupProductUseCaseImpl {
    async fn execute(&self, image: &ProductImage) -> LookupOutcome {
        let logger = &self.context.logger;
        logger.info(&format!(
            "Looking up product for image {}",
            image.path().display()
        ));

        for stage in &self.stages {
            logger.debug(&format!("Trying {} stage", stage.method()));

            if let Some(record) = stage.attempt(image, &self.context).await {
                logger.info(&format!(
                    "Product identified by {}: {}",
                    record.method, record.product_name
                ));
                return LookupOutcome::Found(record);
            }
        }

        logger.info("No product found by any method");
        LookupOutcome::NotFound
    }
}
