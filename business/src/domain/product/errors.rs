use super::validation::ValidationErrors;
use crate::domain::errors::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation_failed")]
    Validation(ValidationErrors),
    #[error("product.not_found")]
    NotFound,
    #[error("remote.request_failed")]
    Remote(#[from] GatewayError),
}

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        ProductError::Validation(errors)
    }
}
