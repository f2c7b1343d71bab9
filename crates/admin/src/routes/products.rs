//! Product tab handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use store_admin_core::{Price, ProductId};

use crate::filters;
use crate::services::types::{NewProduct, Product};
use crate::state::AppState;

use super::{redirect_with_error, redirect_with_notice};

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: i64,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: Price::new(product.price).to_string(),
            category: product.category.clone(),
            stock: product.stock,
        }
    }
}

/// Query parameters for the products page.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// `?new=1` shows the create form.
    pub new: Option<u8>,
    /// Success banner from a completed action.
    pub notice: Option<String>,
    /// Failure banner from a completed action.
    pub error: Option<String>,
}

/// Products page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub current_path: &'static str,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub show_form: bool,
    pub products: Vec<ProductRow>,
}

/// Display the products tab.
///
/// A failed fetch renders the tab with an error banner and no rows; the
/// error itself goes to the log only.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> impl IntoResponse {
    let mut error = query.error;
    let products = match state.products().list().await {
        Ok(products) => products.iter().map(ProductRow::from).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products");
            error.get_or_insert_with(|| "Failed to load products".to_string());
            Vec::new()
        }
    };

    ProductsIndexTemplate {
        current_path: "/products",
        notice: query.notice,
        error,
        show_form: query.new == Some(1),
        products,
    }
}

/// Create-product form fields.
///
/// Price and stock arrive as text; beyond the template's `required`
/// attributes there is no client-side validation, so conversion happens here.
#[derive(Debug, Deserialize)]
pub struct CreateProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

/// Handle the create-product form.
///
/// The success redirect lands on `/products` without `?new=1`, which hides
/// the form, discards its values, and re-fetches the list.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateProductForm>,
) -> Redirect {
    let input = match parse_form(form) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected create-product input");
            return redirect_with_error("/products", "Failed to create product");
        }
    };

    match state.products().create(&input).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "Product created");
            redirect_with_notice("/products", "Product created successfully!")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create product");
            redirect_with_error("/products", "Failed to create product")
        }
    }
}

/// Handle the delete-product action.
///
/// The rendered form asks for confirmation before submitting; a declined
/// confirmation never reaches this handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    match state.products().delete(&id).await {
        Ok(()) => {
            tracing::info!(product_id = %id, "Product deleted");
            redirect_with_notice("/products", "Product deleted successfully!")
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "Failed to delete product");
            redirect_with_error("/products", "Failed to delete product")
        }
    }
}

/// Convert raw form text into a service payload.
fn parse_form(form: CreateProductForm) -> Result<NewProduct, String> {
    let price = form
        .price
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("price: {e}"))?;
    let stock = form
        .stock
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("stock: {e}"))?;

    Ok(NewProduct {
        name: form.name,
        description: form.description,
        price,
        category: form.category,
        stock,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_form() -> CreateProductForm {
        CreateProductForm {
            name: "Leash".to_string(),
            description: "Nylon".to_string(),
            price: "9.99".to_string(),
            category: "Accessories".to_string(),
            stock: "5".to_string(),
        }
    }

    #[test]
    fn test_product_row_formats_price() {
        let product = Product {
            id: ProductId::new("p1"),
            name: "Leash".to_string(),
            description: "Nylon".to_string(),
            price: Decimal::new(999, 2),
            category: "Accessories".to_string(),
            stock: 5,
        };

        let row = ProductRow::from(&product);
        assert_eq!(row.name, "Leash");
        assert_eq!(row.description, "Nylon");
        assert_eq!(row.price, "$9.99");
        assert_eq!(row.category, "Accessories");
        assert_eq!(row.stock, 5);
    }

    #[test]
    fn test_parse_form_converts_numeric_text() {
        let input = parse_form(sample_form()).unwrap();
        assert_eq!(input.price, Decimal::new(999, 2));
        assert_eq!(input.stock, 5);
    }

    #[test]
    fn test_parse_form_trims_whitespace() {
        let mut form = sample_form();
        form.price = " 12.50 ".to_string();
        form.stock = " 3 ".to_string();

        let input = parse_form(form).unwrap();
        assert_eq!(input.price, Decimal::new(1250, 2));
        assert_eq!(input.stock, 3);
    }

    #[test]
    fn test_parse_form_rejects_non_numeric_input() {
        let mut form = sample_form();
        form.price = "nine dollars".to_string();
        assert!(parse_form(form).is_err());

        let mut form = sample_form();
        form.stock = "lots".to_string();
        assert!(parse_form(form).is_err());
    }

    #[test]
    fn test_products_page_renders_rows_and_delete_button() {
        let template = ProductsIndexTemplate {
            current_path: "/products",
            notice: None,
            error: None,
            show_form: false,
            products: vec![ProductRow {
                id: ProductId::new("p1"),
                name: "Leash".to_string(),
                description: "Nylon".to_string(),
                price: "$9.99".to_string(),
                category: "Accessories".to_string(),
                stock: 5,
            }],
        };

        let html = template.render().unwrap();
        assert!(html.contains("Leash"));
        assert!(html.contains("Nylon"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("Accessories"));
        assert!(html.contains("/products/p1/delete"));
        assert!(html.contains("Delete"));
        assert!(html.contains("Add New Product"));
        assert!(!html.contains("Create Product"));
    }

    #[test]
    fn test_products_page_toggles_create_form() {
        let template = ProductsIndexTemplate {
            current_path: "/products",
            notice: None,
            error: None,
            show_form: true,
            products: Vec::new(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Create Product"));
        assert!(html.contains("Cancel"));
        assert!(!html.contains("Add New Product"));
    }

    #[test]
    fn test_products_page_renders_banners() {
        let template = ProductsIndexTemplate {
            current_path: "/products",
            notice: Some("Product created successfully!".to_string()),
            error: Some("Failed to load products".to_string()),
            show_form: false,
            products: Vec::new(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Product created successfully!"));
        assert!(html.contains("Failed to load products"));
    }
}
