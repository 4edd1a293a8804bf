use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Product, ProductFormData};
use super::value_objects::ProductId;

/// Port to the remote products resource. One request per call; no retry,
/// caching or batching.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
    async fn get(&self, id: ProductId) -> Result<Product, GatewayError>;
    async fn create(&self, data: &ProductFormData) -> Result<Product, GatewayError>;
    async fn update(&self, id: ProductId, data: &ProductFormData) -> Result<Product, GatewayError>;
    async fn delete(&self, id: ProductId) -> Result<(), GatewayError>;
}
