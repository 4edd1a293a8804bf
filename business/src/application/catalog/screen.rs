//! Product catalog screen: the in-memory product list plus the list / view /
//! edit / create states an operator moves through. The list is a cache of
//! the last successful remote calls and is only changed after the remote
//! collaborator confirms a mutation.

use std::sync::Arc;

use crate::domain::catalog::confirmation::ConfirmationPrompt;
use crate::domain::catalog::view::ScreenView;
use crate::domain::logger::Logger;
use crate::domain::notification::{Notification, NotificationChannel};
use crate::domain::product::errors::ProductError;
use crate::domain::product::form::ProductForm;
use crate::domain::product::model::Product;
use crate::domain::product::search::filter_by_name;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validation::ValidationErrors;
use crate::domain::product::value_objects::ProductId;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";
const SAVE_SUCCEEDED: &str = "Product saved successfully!";
const SAVE_FAILED: &str = "Failed to save product.";
const DELETE_SUCCEEDED: &str = "Product deleted.";
const DELETE_FAILED: &str = "Failed to delete product.";

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("catalog.unknown_product")]
    UnknownProduct(ProductId),
    #[error("catalog.no_open_form")]
    NoOpenForm,
    #[error("catalog.not_viewing")]
    NotViewing,
    #[error("product.validation_failed")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Product(#[from] ProductError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

pub struct CatalogUseCases {
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub get_by_id: Arc<dyn GetProductByIdUseCase>,
    pub create: Arc<dyn CreateProductUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
}

/// Raises the loading flag for the lifetime of the guard.
struct LoadingFlag<'a>(&'a mut bool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub struct CatalogScreen {
    use_cases: CatalogUseCases,
    confirmation: Arc<dyn ConfirmationPrompt>,
    logger: Arc<dyn Logger>,
    notifications: NotificationChannel,
    products: Vec<Product>,
    search_query: String,
    view: ScreenView,
    is_loading: bool,
}

impl CatalogScreen {
    pub fn new(
        use_cases: CatalogUseCases,
        confirmation: Arc<dyn ConfirmationPrompt>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            use_cases,
            confirmation,
            logger,
            notifications: NotificationChannel::new(),
            products: Vec::new(),
            search_query: String::new(),
            view: ScreenView::Idle,
            is_loading: false,
        }
    }

    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Products matching the current search query, in list order.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_by_name(&self.products, &self.search_query)
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        self.view.form_mut()
    }

    /// Initial load. A failed fetch leaves an empty list; it is only logged.
    pub async fn mount(&mut self) {
        self.view = ScreenView::Loading;
        let result = {
            let _loading = LoadingFlag::raise(&mut self.is_loading);
            self.use_cases.get_all.execute().await
        };
        match result {
            Ok(products) => self.products = products,
            Err(e) => {
                self.products.clear();
                self.logger
                    .error(&format!("Failed to load products: {}", e));
            }
        }
        self.view = ScreenView::List;
    }

    pub fn open_create(&mut self) {
        self.view = ScreenView::ModalCreate {
            form: ProductForm::create(),
        };
    }

    pub fn open_view(&mut self, id: ProductId) -> Result<(), ScreenError> {
        let product = self.find(id)?.clone();
        self.view = ScreenView::ModalView { product };
        Ok(())
    }

    pub fn open_edit(&mut self, id: ProductId) -> Result<(), ScreenError> {
        let product = self.find(id)?.clone();
        self.view = ScreenView::ModalEdit {
            form: ProductForm::edit(&product),
            product,
        };
        Ok(())
    }

    /// Switches the detail view of the selected product to its edit form.
    pub fn edit_selected(&mut self) -> Result<(), ScreenError> {
        let product = match &self.view {
            ScreenView::ModalView { product } => product.clone(),
            _ => return Err(ScreenError::NotViewing),
        };
        self.view = ScreenView::ModalEdit {
            form: ProductForm::edit(&product),
            product,
        };
        Ok(())
    }

    /// Closes any modal and clears the selection. An open form is cancelled,
    /// discarding its edits; returns whether that happened.
    pub fn close(&mut self) -> bool {
        if !self.view.is_modal() {
            return false;
        }
        let logger = &self.logger;
        match std::mem::replace(&mut self.view, ScreenView::List) {
            ScreenView::ModalCreate { form } | ScreenView::ModalEdit { form, .. } => {
                form.cancel(|| {
                    logger.debug("Product form cancelled");
                    true
                })
            }
            _ => false,
        }
    }

    /// Validates the open form and sends it to the remote collaborator.
    /// On failure the modal stays open and the list is untouched.
    pub async fn submit(&mut self) -> Result<Product, ScreenError> {
        let (data, target) = match &mut self.view {
            ScreenView::ModalCreate { form } => {
                (form.submit(|data| data).map_err(ScreenError::Invalid)?, None)
            }
            ScreenView::ModalEdit { product, form } => (
                form.submit(|data| data).map_err(ScreenError::Invalid)?,
                Some(product.id()),
            ),
            _ => return Err(ScreenError::NoOpenForm),
        };

        let result = {
            let _loading = LoadingFlag::raise(&mut self.is_loading);
            match target {
                None => {
                    self.use_cases
                        .create
                        .execute(CreateProductParams { data })
                        .await
                }
                Some(id) => {
                    self.use_cases
                        .update
                        .execute(UpdateProductParams { id, data })
                        .await
                }
            }
        };

        match result {
            Ok(product) => {
                match target {
                    None => self.products.push(product.clone()),
                    Some(_) => self.replace(product.clone()),
                }
                self.notifications
                    .publish(Notification::Success(SAVE_SUCCEEDED.to_string()));
                self.view = ScreenView::List;
                Ok(product)
            }
            Err(e) => {
                self.logger.error(&format!("Error saving product: {}", e));
                self.notifications
                    .publish(Notification::Error(SAVE_FAILED.to_string()));
                Err(ScreenError::Product(e))
            }
        }
    }

    /// Deletes a product after the operator confirms.
    pub async fn delete(&mut self, id: ProductId) -> Result<DeleteOutcome, ScreenError> {
        self.find(id)?;
        if !self.confirmation.confirm(DELETE_CONFIRMATION).await {
            self.logger.debug(&format!("Deletion of {} declined", id));
            return Ok(DeleteOutcome::Declined);
        }

        let result = {
            let _loading = LoadingFlag::raise(&mut self.is_loading);
            self.use_cases
                .delete
                .execute(DeleteProductParams { id })
                .await
        };

        match result {
            Ok(()) => {
                self.products.retain(|p| p.id() != id);
                if self.view.selected().is_some_and(|p| p.id() == id) {
                    self.view = ScreenView::List;
                }
                self.notifications
                    .publish(Notification::Success(DELETE_SUCCEEDED.to_string()));
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                self.logger.error(&format!("Error deleting product: {}", e));
                self.notifications
                    .publish(Notification::Error(DELETE_FAILED.to_string()));
                Err(ScreenError::Product(e))
            }
        }
    }

    /// Re-fetches one product and replaces the cached copy.
    pub async fn refresh(&mut self, id: ProductId) -> Result<Product, ScreenError> {
        self.find(id)?;
        let result = {
            let _loading = LoadingFlag::raise(&mut self.is_loading);
            self.use_cases
                .get_by_id
                .execute(GetProductByIdParams { id })
                .await
        };

        let product = result.inspect_err(|e| {
            self.logger
                .error(&format!("Error refreshing product {}: {}", id, e));
        })?;
        self.replace(product.clone());
        if let ScreenView::ModalView { product: shown } = &mut self.view
            && shown.id() == id
        {
            *shown = product.clone();
        }
        Ok(product)
    }

    fn find(&self, id: ProductId) -> Result<&Product, ScreenError> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .ok_or(ScreenError::UnknownProduct(id))
    }

    fn replace(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id() == product.id()) {
            Some(slot) => *slot = product,
            None => self.logger.warn(&format!(
                "Product {} is no longer in the list; not replaced",
                product.id()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::create::CreateProductUseCaseImpl;
    use crate::application::product::delete::DeleteProductUseCaseImpl;
    use crate::application::product::get_all::GetAllProductsUseCaseImpl;
    use crate::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use crate::application::product::update::UpdateProductUseCaseImpl;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::gateway::ProductGateway;
    use crate::domain::product::model::ProductFormData;
    use crate::domain::product::validation::{FieldError, ProductField};
    use crate::domain::product::value_objects::ProductStatus;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use mockall::mock;
    use tokio::sync::broadcast::error::TryRecvError;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl ProductGateway for Gateway {
            async fn list(&self) -> Result<Vec<Product>, GatewayError>;
            async fn get(&self, id: ProductId) -> Result<Product, GatewayError>;
            async fn create(&self, data: &ProductFormData) -> Result<Product, GatewayError>;
            async fn update(&self, id: ProductId, data: &ProductFormData) -> Result<Product, GatewayError>;
            async fn delete(&self, id: ProductId) -> Result<(), GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    struct FixedAnswer(bool);

    #[async_trait]
    impl ConfirmationPrompt for FixedAnswer {
        async fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: i64, name: &str, price: f64) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Product::from_remote(
            ProductId::new(id),
            name.to_string(),
            format!("{} description", name),
            price,
            ProductStatus::Active,
            None,
            at,
            at,
        )
    }

    fn echo(id: ProductId, data: &ProductFormData) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
        Product::from_remote(
            id,
            data.name.clone(),
            data.description.clone(),
            data.price,
            data.status,
            data.image.as_ref().and_then(|i| i.as_url()).map(str::to_string),
            at,
            at,
        )
    }

    fn seeded(mut gateway: MockGateway, products: Vec<Product>) -> MockGateway {
        gateway
            .expect_list()
            .times(1)
            .returning(move || Ok(products.clone()));
        gateway
    }

    fn screen(gateway: MockGateway, confirm: bool) -> CatalogScreen {
        let gateway: Arc<dyn ProductGateway> = Arc::new(gateway);
        let logger = mock_logger();
        let use_cases = CatalogUseCases {
            get_all: Arc::new(GetAllProductsUseCaseImpl {
                gateway: gateway.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetProductByIdUseCaseImpl {
                gateway: gateway.clone(),
                logger: logger.clone(),
            }),
            create: Arc::new(CreateProductUseCaseImpl {
                gateway: gateway.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateProductUseCaseImpl {
                gateway: gateway.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteProductUseCaseImpl {
                gateway,
                logger: logger.clone(),
            }),
        };
        CatalogScreen::new(use_cases, Arc::new(FixedAnswer(confirm)), logger)
    }

    fn fill_widget(screen: &mut CatalogScreen, price: &str) {
        let form = screen.form_mut().expect("form should be open");
        form.set_field(ProductField::Name, "Widget");
        form.set_field(ProductField::Description, "A small widget");
        form.set_field(ProductField::Price, price);
        form.set_field(ProductField::Status, "active");
    }

    #[tokio::test]
    async fn should_start_idle_and_list_products_after_mount() {
        let gateway = seeded(
            MockGateway::new(),
            vec![product(1, "Gadget", 4.0), product(2, "Sprocket", 1.5)],
        );
        let mut screen = screen(gateway, true);
        assert_eq!(screen.view(), &ScreenView::Idle);

        screen.mount().await;

        assert_eq!(screen.view(), &ScreenView::List);
        assert_eq!(screen.products().len(), 2);
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn should_show_empty_list_when_initial_load_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|| Err(GatewayError::RequestFailed));
        let mut screen = screen(gateway, true);

        screen.mount().await;

        assert_eq!(screen.view(), &ScreenView::List);
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn should_append_created_product_and_close_modal_when_create_succeeds() {
        let mut gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        gateway
            .expect_create()
            .times(1)
            .returning(|data| Ok(echo(ProductId::new(2), data)));
        let mut screen = screen(gateway, true);
        screen.mount().await;
        let mut notifications = screen.notifications().subscribe();

        screen.open_create();
        fill_widget(&mut screen, "9.99");
        let created = screen.submit().await.unwrap();

        assert_eq!(screen.view(), &ScreenView::List);
        assert_eq!(screen.products().len(), 2);
        let widgets: Vec<&Product> = screen
            .products()
            .iter()
            .filter(|p| p.name == "Widget")
            .collect();
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].id(), created.id());
        assert_eq!(widgets[0].price, 9.99);
        assert_eq!(widgets[0].status, ProductStatus::Active);
        assert_eq!(
            notifications.try_recv().unwrap(),
            Notification::Success("Product saved successfully!".to_string())
        );
    }

    #[tokio::test]
    async fn should_keep_list_and_modal_when_create_fails() {
        let mut gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        gateway
            .expect_create()
            .returning(|_| Err(GatewayError::UnexpectedStatus(500)));
        let mut screen = screen(gateway, true);
        screen.mount().await;
        let before = screen.products().to_vec();
        let mut notifications = screen.notifications().subscribe();

        screen.open_create();
        fill_widget(&mut screen, "9.99");
        let result = screen.submit().await;

        assert!(matches!(result, Err(ScreenError::Product(ProductError::Remote(_)))));
        assert_eq!(screen.products(), before.as_slice());
        assert!(matches!(screen.view(), ScreenView::ModalCreate { .. }));
        assert_eq!(
            screen.form_mut().unwrap().values().name,
            "Widget"
        );
        assert_eq!(
            notifications.try_recv().unwrap(),
            Notification::Error("Failed to save product.".to_string())
        );
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn should_block_submission_when_form_is_invalid() {
        let mut gateway = seeded(MockGateway::new(), vec![]);
        gateway.expect_create().never();
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.open_create();
        fill_widget(&mut screen, "-1");
        screen
            .form_mut()
            .unwrap()
            .set_field(ProductField::Name, "");
        let result = screen.submit().await;

        match result {
            Err(ScreenError::Invalid(errors)) => {
                assert_eq!(errors.get(ProductField::Name), Some(&FieldError::NameRequired));
                assert_eq!(errors.get(ProductField::Price), Some(&FieldError::PriceNegative));
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
        assert!(matches!(screen.view(), ScreenView::ModalCreate { .. }));
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn should_replace_product_in_place_when_update_succeeds() {
        let mut gateway = seeded(
            MockGateway::new(),
            vec![product(1, "Gadget", 4.0), product(2, "Widget", 9.99)],
        );
        gateway
            .expect_update()
            .times(1)
            .returning(|id, data| Ok(echo(id, data)));
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.open_edit(ProductId::new(2)).unwrap();
        assert_eq!(screen.view().selected().unwrap().id(), ProductId::new(2));
        screen
            .form_mut()
            .unwrap()
            .set_field(ProductField::Price, "19.99");
        screen.submit().await.unwrap();

        assert_eq!(screen.view(), &ScreenView::List);
        assert_eq!(screen.products().len(), 2);
        let matching: Vec<&Product> = screen
            .products()
            .iter()
            .filter(|p| p.id() == ProductId::new(2))
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].price, 19.99);
        assert_eq!(screen.products()[1].id(), ProductId::new(2));
    }

    #[tokio::test]
    async fn should_stay_in_edit_modal_when_update_fails() {
        let mut gateway = seeded(MockGateway::new(), vec![product(2, "Widget", 9.99)]);
        gateway
            .expect_update()
            .returning(|_, _| Err(GatewayError::RequestFailed));
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.open_edit(ProductId::new(2)).unwrap();
        screen
            .form_mut()
            .unwrap()
            .set_field(ProductField::Price, "19.99");
        let result = screen.submit().await;

        assert!(result.is_err());
        assert!(matches!(screen.view(), ScreenView::ModalEdit { .. }));
        assert_eq!(screen.products()[0].price, 9.99);
    }

    #[tokio::test]
    async fn should_remove_product_when_delete_is_confirmed() {
        let mut gateway = seeded(
            MockGateway::new(),
            vec![product(1, "Gadget", 4.0), product(2, "Widget", 9.99)],
        );
        gateway.expect_delete().times(1).returning(|_| Ok(()));
        let mut screen = screen(gateway, true);
        screen.mount().await;

        let outcome = screen.delete(ProductId::new(2)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(screen.products().len(), 1);
        assert!(screen.products().iter().all(|p| p.id() != ProductId::new(2)));
    }

    #[tokio::test]
    async fn should_not_call_remote_when_delete_is_declined() {
        let mut gateway = seeded(MockGateway::new(), vec![product(2, "Widget", 9.99)]);
        gateway.expect_delete().never();
        let mut screen = screen(gateway, false);
        screen.mount().await;

        let outcome = screen.delete(ProductId::new(2)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(screen.products().len(), 1);
    }

    #[tokio::test]
    async fn should_leave_list_unchanged_when_delete_fails() {
        let mut gateway = seeded(MockGateway::new(), vec![product(2, "Widget", 9.99)]);
        gateway
            .expect_delete()
            .returning(|_| Err(GatewayError::UnexpectedStatus(503)));
        let mut screen = screen(gateway, true);
        screen.mount().await;

        let result = screen.delete(ProductId::new(2)).await;

        assert!(result.is_err());
        assert_eq!(screen.products().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_unknown_product_ids() {
        let gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        let mut screen = screen(gateway, true);
        screen.mount().await;

        assert!(matches!(
            screen.open_view(ProductId::new(99)),
            Err(ScreenError::UnknownProduct(_))
        ));
        assert!(matches!(
            screen.delete(ProductId::new(99)).await,
            Err(ScreenError::UnknownProduct(_))
        ));
        assert_eq!(screen.view(), &ScreenView::List);
    }

    #[tokio::test]
    async fn should_move_between_view_edit_and_list() {
        let gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.open_view(ProductId::new(1)).unwrap();
        assert!(matches!(screen.view(), ScreenView::ModalView { .. }));
        assert!(screen.form_mut().is_none());

        screen.edit_selected().unwrap();
        assert!(matches!(screen.view(), ScreenView::ModalEdit { .. }));
        assert_eq!(screen.form_mut().unwrap().values().name, "Gadget");
        assert!(matches!(screen.edit_selected(), Err(ScreenError::NotViewing)));

        screen.close();
        assert_eq!(screen.view(), &ScreenView::List);
        assert!(screen.view().selected().is_none());
    }

    #[tokio::test]
    async fn should_discard_edits_when_form_is_cancelled() {
        let mut gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        gateway.expect_update().never();
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.open_edit(ProductId::new(1)).unwrap();
        screen
            .form_mut()
            .unwrap()
            .set_field(ProductField::Name, "Renamed");
        let discarded = screen.close();

        assert!(discarded);
        assert_eq!(screen.products()[0].name, "Gadget");
        assert!(matches!(screen.submit().await, Err(ScreenError::NoOpenForm)));
    }

    #[tokio::test]
    async fn should_report_no_discard_when_closing_without_form() {
        let gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        let mut screen = screen(gateway, true);
        screen.mount().await;

        assert!(!screen.close());
        screen.open_view(ProductId::new(1)).unwrap();
        assert!(!screen.close());
        screen.open_create();
        assert!(screen.close());
        assert_eq!(screen.view(), &ScreenView::List);
    }

    #[tokio::test]
    async fn should_filter_visible_products_without_mutating_list() {
        let gateway = seeded(
            MockGateway::new(),
            vec![
                product(1, "Blue Widget", 4.0),
                product(2, "Gadget", 2.0),
                product(3, "widget mini", 1.0),
            ],
        );
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.set_search_query("WIDGET");
        let visible: Vec<ProductId> = screen.visible_products().iter().map(|p| p.id()).collect();

        assert_eq!(visible, vec![ProductId::new(1), ProductId::new(3)]);
        assert_eq!(screen.products().len(), 3);

        screen.set_search_query("");
        assert_eq!(screen.visible_products().len(), 3);
    }

    #[tokio::test]
    async fn should_replace_cached_copy_when_refreshing() {
        let mut gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        gateway
            .expect_get()
            .times(1)
            .returning(|id| Ok(product(id.value(), "Gadget v2", 5.0)));
        let mut screen = screen(gateway, true);
        screen.mount().await;
        screen.open_view(ProductId::new(1)).unwrap();

        let refreshed = screen.refresh(ProductId::new(1)).await.unwrap();

        assert_eq!(refreshed.name, "Gadget v2");
        assert_eq!(screen.products()[0].name, "Gadget v2");
        assert_eq!(screen.view().selected().unwrap().name, "Gadget v2");
    }

    #[tokio::test]
    async fn should_keep_cached_copy_when_refresh_fails() {
        let mut gateway = seeded(MockGateway::new(), vec![product(1, "Gadget", 4.0)]);
        gateway
            .expect_get()
            .times(1)
            .returning(|_| Err(GatewayError::UnexpectedStatus(500)));
        let mut screen = screen(gateway, true);
        screen.mount().await;
        screen.open_view(ProductId::new(1)).unwrap();

        let result = screen.refresh(ProductId::new(1)).await;

        assert!(matches!(
            result,
            Err(ScreenError::Product(ProductError::Remote(
                GatewayError::UnexpectedStatus(500)
            )))
        ));
        assert_eq!(screen.products(), &[product(1, "Gadget", 4.0)]);
        assert_eq!(screen.view().selected().unwrap().name, "Gadget");
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn should_close_view_when_viewed_product_is_deleted() {
        let mut gateway = seeded(
            MockGateway::new(),
            vec![product(1, "Gadget", 4.0), product(2, "Widget", 9.99)],
        );
        gateway.expect_delete().times(2).returning(|_| Ok(()));
        let mut screen = screen(gateway, true);
        screen.mount().await;

        screen.open_view(ProductId::new(1)).unwrap();
        screen.delete(ProductId::new(2)).await.unwrap();
        assert_eq!(screen.view().selected().unwrap().id(), ProductId::new(1));

        screen.delete(ProductId::new(1)).await.unwrap();
        assert_eq!(screen.view(), &ScreenView::List);
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn should_close_edit_form_when_edited_product_is_deleted() {
        let mut gateway = seeded(MockGateway::new(), vec![product(2, "Widget", 9.99)]);
        gateway.expect_delete().times(1).returning(|_| Ok(()));
        let mut screen = screen(gateway, true);
        screen.mount().await;
        screen.open_edit(ProductId::new(2)).unwrap();
        screen
            .form_mut()
            .unwrap()
            .set_field(ProductField::Price, "1.00");

        let outcome = screen.delete(ProductId::new(2)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(screen.view(), &ScreenView::List);
        assert!(screen.view().form().is_none());
    }

    #[tokio::test]
    async fn should_close_notifications_when_screen_is_dropped() {
        let gateway = seeded(MockGateway::new(), vec![]);
        let mut screen = screen(gateway, true);
        screen.mount().await;
        let mut notifications = screen.notifications().subscribe();

        drop(screen);

        assert_eq!(notifications.try_recv(), Err(TryRecvError::Closed));
    }
}
