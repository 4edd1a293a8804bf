use chrono::{DateTime, Utc};

use super::validation::{
    ProductField, ValidationErrors, check_image, check_price, require_description, require_name,
};
use super::value_objects::{ImageReference, ProductId, ProductStatus};

/// A catalog record as last confirmed by the remote collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub status: ProductStatus,
    pub image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for records returned by the remote collaborator (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_remote(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        status: ProductStatus,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            status,
            image_url,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Writable projection of [`Product`]: everything except id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormData {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub status: ProductStatus,
    pub image: Option<ImageReference>,
}

impl ProductFormData {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            status: product.status,
            image: product.image_url.clone().map(ImageReference::Url),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = require_name(&self.name) {
            errors.add(ProductField::Name, e);
        }
        if let Err(e) = require_description(&self.description) {
            errors.add(ProductField::Description, e);
        }
        if let Err(e) = check_price(self.price) {
            errors.add(ProductField::Price, e);
        }
        if let Some(Err(e)) = self.image.as_ref().map(check_image) {
            errors.add(ProductField::Image, e);
        }
        errors.into_result()
    }
}
