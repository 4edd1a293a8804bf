//! Product form: a statically declared field schema plus the editable state
//! it validates. The form never talks to the remote collaborator; a
//! successful submit hands the validated data to the caller's callback.

use super::model::{Product, ProductFormData};
use super::validation::{
    FieldError, ProductField, ValidationErrors, check_image, parse_price, parse_status,
    require_description, require_name,
};
use super::value_objects::{ImageReference, ProductId, ProductStatus};

/// Input widget a renderer should use for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    MultilineText,
    Decimal,
    Choice(&'static [&'static str]),
    ImageFile,
}

pub struct FieldSchema {
    pub field: ProductField,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub validate: fn(&FormValues) -> Result<(), FieldError>,
}

const STATUS_CHOICES: &[&str] = &["active", "inactive"];

pub static PRODUCT_FORM_SCHEMA: [FieldSchema; 5] = [
    FieldSchema {
        field: ProductField::Name,
        label: "Product Name",
        kind: FieldKind::Text,
        required: true,
        validate: validate_name,
    },
    FieldSchema {
        field: ProductField::Description,
        label: "Description",
        kind: FieldKind::MultilineText,
        required: true,
        validate: validate_description,
    },
    FieldSchema {
        field: ProductField::Price,
        label: "Price",
        kind: FieldKind::Decimal,
        required: true,
        validate: validate_price,
    },
    FieldSchema {
        field: ProductField::Image,
        label: "Upload Image",
        kind: FieldKind::ImageFile,
        required: false,
        validate: validate_image,
    },
    FieldSchema {
        field: ProductField::Status,
        label: "Status",
        kind: FieldKind::Choice(STATUS_CHOICES),
        required: true,
        validate: validate_status,
    },
];

fn validate_name(values: &FormValues) -> Result<(), FieldError> {
    require_name(&values.name)
}

fn validate_description(values: &FormValues) -> Result<(), FieldError> {
    require_description(&values.description)
}

fn validate_price(values: &FormValues) -> Result<(), FieldError> {
    parse_price(&values.price).map(|_| ())
}

fn validate_status(values: &FormValues) -> Result<(), FieldError> {
    parse_status(&values.status).map(|_| ())
}

fn validate_image(values: &FormValues) -> Result<(), FieldError> {
    values.image.as_ref().map_or(Ok(()), check_image)
}

/// Raw field state, as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub description: String,
    pub price: String,
    pub status: String,
    pub image: Option<ImageReference>,
}

impl FormValues {
    /// Text shown for a field by a renderer.
    pub fn display(&self, field: ProductField) -> String {
        match field {
            ProductField::Name => self.name.clone(),
            ProductField::Description => self.description.clone(),
            ProductField::Price => self.price.clone(),
            ProductField::Status => self.status.clone(),
            ProductField::Image => match &self.image {
                None => String::new(),
                Some(ImageReference::Url(url)) => url.clone(),
                Some(ImageReference::Upload(upload)) => format!(
                    "{} ({}, {} bytes)",
                    upload.file_name,
                    upload.content_type,
                    upload.bytes.len()
                ),
            },
        }
    }

    fn to_form_data(&self) -> Result<ProductFormData, ValidationErrors> {
        let price = parse_price(&self.price);
        let status = parse_status(&self.status);
        match (price, status) {
            (Ok(price), Ok(status)) => Ok(ProductFormData {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                price,
                status,
                image: self.image.clone(),
            }),
            (price, status) => {
                let mut errors = ValidationErrors::new();
                if let Err(e) = price {
                    errors.add(ProductField::Price, e);
                }
                if let Err(e) = status {
                    errors.add(ProductField::Status, e);
                }
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    mode: FormMode,
    values: FormValues,
    errors: ValidationErrors,
}

impl ProductForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            values: FormValues {
                status: ProductStatus::default().to_string(),
                ..FormValues::default()
            },
            errors: ValidationErrors::new(),
        }
    }

    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id()),
            values: FormValues {
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price.to_string(),
                status: product.status.to_string(),
                image: product.image_url.clone().map(ImageReference::Url),
            },
            errors: ValidationErrors::new(),
        }
    }

    pub fn schema() -> &'static [FieldSchema] {
        &PRODUCT_FORM_SCHEMA
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: ProductField) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self, is_loading: bool) -> &'static str {
        match (is_loading, self.mode) {
            (true, _) => "Saving...",
            (false, FormMode::Create) => "Create Product",
            (false, FormMode::Edit(_)) => "Update Product",
        }
    }

    /// Sets a field from text input. For the image field, blank clears it and
    /// anything else is taken as a URL.
    pub fn set_field(&mut self, field: ProductField, value: &str) {
        match field {
            ProductField::Name => self.values.name = value.to_string(),
            ProductField::Description => self.values.description = value.to_string(),
            ProductField::Price => self.values.price = value.to_string(),
            ProductField::Status => self.values.status = value.to_string(),
            ProductField::Image => {
                let value = value.trim();
                self.values.image = (!value.is_empty()).then(|| ImageReference::Url(value.to_string()));
            }
        }
        self.errors.clear(field);
    }

    pub fn set_image(&mut self, image: Option<ImageReference>) {
        self.values.image = image;
        self.errors.clear(ProductField::Image);
    }

    /// Runs every schema validator, recording one error per invalid field.
    pub fn validate(&mut self) -> Result<ProductFormData, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for schema in PRODUCT_FORM_SCHEMA.iter() {
            if let Err(e) = (schema.validate)(&self.values) {
                errors.add(schema.field, e);
            }
        }

        let result = errors
            .into_result()
            .and_then(|_| self.values.to_form_data());
        self.errors = match &result {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors.clone(),
        };
        result
    }

    /// Validates and, only on success, hands the data to `on_complete`.
    pub fn submit<R>(
        &mut self,
        on_complete: impl FnOnce(ProductFormData) -> R,
    ) -> Result<R, ValidationErrors> {
        self.validate().map(on_complete)
    }

    /// Discards every edit without validating.
    pub fn cancel<R>(self, on_cancel: impl FnOnce() -> R) -> R {
        on_cancel()
    }
}
