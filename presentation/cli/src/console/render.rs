//! Plain-text rendering of the catalog screen. Every function returns the
//! text to print so the layout can be checked without a terminal.

use std::fmt::Write;

use business::application::catalog::screen::ScreenError;
use business::domain::catalog::view::ScreenView;
use business::domain::errors::GatewayError;
use business::domain::notification::Notification;
use business::domain::product::errors::ProductError;
use business::domain::product::form::{FieldKind, ProductForm};
use business::domain::product::model::Product;

const DESCRIPTION_PREVIEW: usize = 80;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub const DISCARDED_FORM: &str =
    "The open form was closed and its unsaved changes were discarded.";

pub fn price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Clamps a description to a short preview for list cards.
fn preview(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= DESCRIPTION_PREVIEW {
        return single_line;
    }
    let clamped: String = single_line.chars().take(DESCRIPTION_PREVIEW - 3).collect();
    format!("{}...", clamped.trim_end())
}

pub fn product_card(product: &Product) -> String {
    let mut out = format!(
        "#{}  {}  [{}]  {}",
        product.id(),
        product.name,
        product.status,
        price(product.price)
    );
    if product.image_url.is_some() {
        out.push_str("  (image)");
    }
    let description = preview(&product.description);
    if !description.is_empty() {
        let _ = write!(out, "\n      {}", description);
    }
    out
}

pub fn product_list(products: &[&Product], query: &str, is_loading: bool) -> String {
    if is_loading {
        return "Loading products...".to_string();
    }

    let mut out = String::from("Products");
    if !query.is_empty() {
        let _ = write!(out, " matching \"{}\"", query);
    }
    let _ = write!(out, " ({})", products.len());

    if products.is_empty() {
        out.push_str("\n  No products found.");
        return out;
    }
    for product in products {
        let card = product_card(product).replace('\n', "\n  ");
        let _ = write!(out, "\n  {}", card);
    }
    out
}

pub fn product_detail(product: &Product) -> String {
    let mut out = String::from("View Product");
    let _ = write!(out, "\n  Id:          {}", product.id());
    let _ = write!(out, "\n  Name:        {}", product.name);
    let _ = write!(out, "\n  Description: {}", product.description);
    let _ = write!(out, "\n  Price:       {}", price(product.price));
    let _ = write!(out, "\n  Status:      {}", product.status);
    if let Some(url) = &product.image_url {
        let _ = write!(out, "\n  Image:       {}", url);
    }
    let _ = write!(
        out,
        "\n  Created:     {}",
        product.created_at().format(TIMESTAMP_FORMAT)
    );
    let _ = write!(
        out,
        "\n  Updated:     {}",
        product.updated_at().format(TIMESTAMP_FORMAT)
    );
    out.push_str("\n  [edit] [delete] [close]");
    out
}

fn kind_hint(kind: FieldKind) -> Option<String> {
    match kind {
        FieldKind::Choice(choices) => Some(format!("({})", choices.join("|"))),
        FieldKind::ImageFile => Some("(path or URL, via `image`)".to_string()),
        FieldKind::Decimal => Some("(0.00)".to_string()),
        FieldKind::Text | FieldKind::MultilineText => None,
    }
}

/// Form rendered from its schema, with each field's error beneath it.
pub fn product_form(form: &ProductForm, is_loading: bool) -> String {
    let mut out = form.title().to_string();
    for schema in ProductForm::schema() {
        let marker = if schema.required { "*" } else { "" };
        let _ = write!(
            out,
            "\n  {}{} [{}]: {}",
            schema.label,
            marker,
            schema.field.key(),
            form.values().display(schema.field)
        );
        if let Some(hint) = kind_hint(schema.kind) {
            let _ = write!(out, " {}", hint);
        }
        if let Some(error) = form.error(schema.field) {
            let _ = write!(out, "\n      ! {}", error.message());
        }
    }
    let _ = write!(
        out,
        "\n  [{}] [cancel]",
        form.submit_label(is_loading)
    );
    out
}

/// Whatever the screen currently shows.
pub fn screen(view: &ScreenView, products: &[&Product], query: &str, is_loading: bool) -> String {
    match view {
        ScreenView::Idle | ScreenView::Loading => "Loading products...".to_string(),
        ScreenView::List => product_list(products, query, is_loading),
        ScreenView::ModalView { product } => product_detail(product),
        ScreenView::ModalEdit { form, .. } | ScreenView::ModalCreate { form } => {
            product_form(form, is_loading)
        }
    }
}

pub fn notification(notification: &Notification) -> String {
    match notification {
        Notification::Success(message) => format!("[ok] {}", message),
        Notification::Error(message) => format!("[error] {}", message),
    }
}

pub fn screen_error(error: &ScreenError) -> String {
    match error {
        ScreenError::UnknownProduct(id) => format!("No product with id {} in the list.", id),
        ScreenError::NoOpenForm => "No form is open. Use `add` or `edit <id>` first.".to_string(),
        ScreenError::NotViewing => "Open a product with `view <id>` first.".to_string(),
        ScreenError::Invalid(_) | ScreenError::Product(ProductError::Validation(_)) => {
            "Please correct the highlighted fields.".to_string()
        }
        ScreenError::Product(ProductError::NotFound) => {
            "The product no longer exists on the server.".to_string()
        }
        ScreenError::Product(ProductError::Remote(GatewayError::RequestFailed)) => {
            "The products server could not be reached.".to_string()
        }
        ScreenError::Product(ProductError::Remote(GatewayError::UnexpectedStatus(code))) => {
            format!("The products server answered with status {}.", code)
        }
    }
}
