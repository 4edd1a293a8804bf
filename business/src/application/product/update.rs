use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.data.validate()?;

        let updated = self
            .gateway
            .update(params.id, &params.data)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Error updating product {}: {}", params.id, e));
                if e.is_not_found() {
                    ProductError::NotFound
                } else {
                    ProductError::Remote(e)
                }
            })?;

        if updated.id() != params.id {
            self.logger.warn(&format!(
                "Remote returned product {} for update of {}",
                updated.id(),
                params.id
            ));
        }

        self.logger.info(&format!("Product updated: {}", updated.id()));
        Ok(updated)
    }
}
