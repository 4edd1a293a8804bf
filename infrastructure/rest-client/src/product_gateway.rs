use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::{Product, ProductFormData};
use business::domain::product::value_objects::{ImageUpload, ProductId};

use crate::client::ApiClient;
use crate::dto::{ProductDto, ProductRequest};
use crate::envelope::Envelope;

/// Name of the multipart file part the resource expects.
const IMAGE_PART: &str = "image";

pub struct ProductGatewayRest {
    client: ApiClient,
}

impl ProductGatewayRest {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Attaches the form data: multipart when a file is uploaded, JSON otherwise.
    fn with_body(
        request: RequestBuilder,
        data: &ProductFormData,
    ) -> Result<RequestBuilder, GatewayError> {
        match data.image.as_ref().and_then(|image| image.as_upload()) {
            Some(upload) => Ok(request.multipart(Self::multipart_form(data, upload)?)),
            None => Ok(request.json(&ProductRequest::from(data))),
        }
    }

    fn multipart_form(data: &ProductFormData, upload: &ImageUpload) -> Result<Form, GatewayError> {
        let image = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|_| GatewayError::RequestFailed)?;

        Ok(Form::new()
            .text("name", data.name.clone())
            .text("description", data.description.clone())
            .text("price", data.price.to_string())
            .text("status", data.status.to_string())
            .part(IMAGE_PART, image))
    }

    async fn send(request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("products request failed: {}", e);
                GatewayError::RequestFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("products request answered {}", status);
            return Err(GatewayError::UnexpectedStatus(status.as_u16()));
        }
        Ok(response)
    }

    async fn payload<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, GatewayError> {
        let envelope: Envelope<T> = Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| {
                tracing::debug!("malformed products response: {}", e);
                GatewayError::RequestFailed
            })?;
        Ok(envelope.payload)
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayRest {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let request = self.client.client.get(self.client.collection_url());
        let products: Vec<ProductDto> = Self::payload(request).await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: ProductId) -> Result<Product, GatewayError> {
        let request = self.client.client.get(self.client.item_url(id));
        let product: ProductDto = Self::payload(request).await?;
        Ok(product.into())
    }

    async fn create(&self, data: &ProductFormData) -> Result<Product, GatewayError> {
        let request = Self::with_body(self.client.client.post(self.client.collection_url()), data)?;
        let product: ProductDto = Self::payload(request).await?;
        Ok(product.into())
    }

    async fn update(&self, id: ProductId, data: &ProductFormData) -> Result<Product, GatewayError> {
        let request = Self::with_body(self.client.client.put(self.client.item_url(id)), data)?;
        let product: ProductDto = Self::payload(request).await?;
        Ok(product.into())
    }

    async fn delete(&self, id: ProductId) -> Result<(), GatewayError> {
        Self::send(self.client.client.delete(self.client.item_url(id))).await?;
        Ok(())
    }
}
