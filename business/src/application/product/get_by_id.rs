use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Fetching product: {}", params.id));
        self.gateway.get(params.id).await.map_err(|e| {
            if e.is_not_found() {
                self.logger.warn(&format!("Product not found: {}", params.id));
                ProductError::NotFound
            } else {
                self.logger
                    .error(&format!("Error fetching product {}: {}", params.id, e));
                ProductError::Remote(e)
            }
        })
    }
}
