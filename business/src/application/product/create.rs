use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.data.name));

        params.data.validate()?;

        let product = self.gateway.create(&params.data).await.map_err(|e| {
            self.logger.error(&format!("Error creating product: {}", e));
            ProductError::Remote(e)
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id()));
        Ok(product)
    }
}
