use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use business::domain::product::model::{Product, ProductFormData};
use business::domain::product::value_objects::{ProductId, ProductStatus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatusDto {
    #[serde(alias = "ACTIVE", alias = "Active")]
    Active,
    #[serde(alias = "INACTIVE", alias = "Inactive")]
    Inactive,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Active => ProductStatusDto::Active,
            ProductStatus::Inactive => ProductStatusDto::Inactive,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Active => ProductStatus::Active,
            ProductStatusDto::Inactive => ProductStatus::Inactive,
        }
    }
}

/// Product as sent by the remote resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub status: ProductStatusDto,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product::from_remote(
            ProductId::new(dto.id),
            dto.name,
            dto.description.unwrap_or_default(),
            dto.price,
            dto.status.into(),
            dto.image_url.filter(|url| !url.trim().is_empty()),
            dto.created_at,
            dto.updated_at,
        )
    }
}

/// JSON body for create and update when no file is uploaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub status: ProductStatusDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&ProductFormData> for ProductRequest {
    fn from(data: &ProductFormData) -> Self {
        Self {
            name: data.name.clone(),
            description: data.description.clone(),
            price: data.price,
            status: data.status.into(),
            image_url: data
                .image
                .as_ref()
                .and_then(|image| image.as_url())
                .map(str::to_string),
        }
    }
}

/// Accepts RFC 3339, or a zone-less local date-time taken as UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            raw.parse::<NaiveDateTime>()
                .ok()
                .map(|naive| naive.and_utc())
        })
}
