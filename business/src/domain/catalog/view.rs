use crate::domain::product::form::ProductForm;
use crate::domain::product::model::Product;

/// Which part of the catalog screen is on display.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    /// Not mounted yet.
    Idle,
    Loading,
    List,
    ModalView { product: Product },
    ModalEdit { product: Product, form: ProductForm },
    ModalCreate { form: ProductForm },
}

impl ScreenView {
    pub fn selected(&self) -> Option<&Product> {
        match self {
            ScreenView::ModalView { product } | ScreenView::ModalEdit { product, .. } => {
                Some(product)
            }
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&ProductForm> {
        match self {
            ScreenView::ModalEdit { form, .. } | ScreenView::ModalCreate { form } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        match self {
            ScreenView::ModalEdit { form, .. } | ScreenView::ModalCreate { form } => Some(form),
            _ => None,
        }
    }

    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            ScreenView::ModalView { .. } | ScreenView::ModalEdit { .. } | ScreenView::ModalCreate { .. }
        )
    }
}
