use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.gateway.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Error deleting product {}: {}", params.id, e));
            if e.is_not_found() {
                ProductError::NotFound
            } else {
                ProductError::Remote(e)
            }
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
