use url::{ParseError, Url};

use super::value_objects::{ImageReference, ProductStatus};

/// Writable fields of a product, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Status,
    Image,
}

impl ProductField {
    pub fn key(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Status => "status",
            ProductField::Image => "image",
        }
    }
}

impl std::str::FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProductField::Name),
            "description" => Ok(ProductField::Description),
            "price" => Ok(ProductField::Price),
            "status" => Ok(ProductField::Status),
            "image" => Ok(ProductField::Image),
            _ => Err(format!("Invalid product field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("product.name_required")]
    NameRequired,
    #[error("product.description_required")]
    DescriptionRequired,
    #[error("product.price_not_a_number")]
    PriceNotANumber,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.status_invalid")]
    StatusInvalid,
    #[error("product.image_not_an_image")]
    ImageNotAnImage,
    #[error("product.image_url_invalid")]
    ImageUrlInvalid,
}

impl FieldError {
    /// Human-readable message shown next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "Product name is required",
            FieldError::DescriptionRequired => "Description is required",
            FieldError::PriceNotANumber => "Price must be a number",
            FieldError::PriceNegative => "Price must be greater than or equal to 0",
            FieldError::StatusInvalid => "Status must be active or inactive",
            FieldError::ImageNotAnImage => "Uploaded file must be an image",
            FieldError::ImageUrlInvalid => "Image must be an http(s) URL or a server path",
        }
    }
}

/// At most one error per field, in the order fields were checked.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("product.validation_failed")]
pub struct ValidationErrors {
    errors: Vec<(ProductField, FieldError)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error unless the field already has one.
    pub fn add(&mut self, field: ProductField, error: FieldError) {
        if self.get(field).is_none() {
            self.errors.push((field, error));
        }
    }

    pub fn clear(&mut self, field: ProductField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn get(&self, field: ProductField) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| error)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn require_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

pub fn require_description(description: &str) -> Result<(), FieldError> {
    if description.trim().is_empty() {
        return Err(FieldError::DescriptionRequired);
    }
    Ok(())
}

pub fn check_price(price: f64) -> Result<(), FieldError> {
    if !price.is_finite() {
        return Err(FieldError::PriceNotANumber);
    }
    if price < 0.0 {
        return Err(FieldError::PriceNegative);
    }
    Ok(())
}

/// Parses raw price input and applies the range rule.
pub fn parse_price(raw: &str) -> Result<f64, FieldError> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| FieldError::PriceNotANumber)?;
    check_price(price)?;
    Ok(price)
}

pub fn parse_status(raw: &str) -> Result<ProductStatus, FieldError> {
    raw.parse::<ProductStatus>()
        .map_err(|_| FieldError::StatusInvalid)
}

pub fn check_image(image: &ImageReference) -> Result<(), FieldError> {
    match image {
        ImageReference::Upload(upload) if upload.is_image() => Ok(()),
        ImageReference::Upload(_) => Err(FieldError::ImageNotAnImage),
        ImageReference::Url(raw) => {
            let raw = raw.trim();
            match Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
                Err(ParseError::RelativeUrlWithoutBase) if is_relative_reference(raw) => Ok(()),
                _ => Err(FieldError::ImageUrlInvalid),
            }
        }
    }
}

/// Paths the server hands back for stored uploads, such as `/uploads/a.png`.
fn is_relative_reference(raw: &str) -> bool {
    !raw.is_empty() && !raw.chars().any(char::is_whitespace)
}
