use std::sync::Arc;

use anyhow::Context;

use tokio::io::{BufReader, Stdin};

use logger::TracingLogger;
use rest_client::client::ApiClient;
use rest_client::product_gateway::ProductGatewayRest;

use business::application::catalog::screen::{CatalogScreen, CatalogUseCases};
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::app_config::AppConfig;
use crate::console::prompt::{ConsoleConfirmation, ConsoleInput};

pub type StdinInput = ConsoleInput<BufReader<Stdin>>;

pub struct DependencyContainer {
    pub screen: CatalogScreen,
    pub input: Arc<StdinInput>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let api_client = ApiClient::new(config.api.base_url.clone(), config.api.timeout)
            .context("Failed to build the products HTTP client")?;
        let product_gateway = Arc::new(ProductGatewayRest::new(api_client));

        // Product use cases
        let use_cases = CatalogUseCases {
            get_all: Arc::new(GetAllProductsUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetProductByIdUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            create: Arc::new(CreateProductUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateProductUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteProductUseCaseImpl {
                gateway: product_gateway,
                logger: logger.clone(),
            }),
        };

        // Console
        let input = Arc::new(ConsoleInput::new(BufReader::new(tokio::io::stdin())));
        let confirmation = Arc::new(ConsoleConfirmation::new(input.clone()));

        let screen = CatalogScreen::new(use_cases, confirmation, logger);

        Ok(Self { screen, input })
    }
}
