//! Product entity model, payload DTO, and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use inventory_core::types::DbId;
use inventory_core::validation::{check_required, FieldViolation};

/// Allowed characters for a product lot identifier.
static LOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9_]*$").expect("valid lote pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_size")]
pub enum ProductSize {
    S,
    M,
    L,
    XL,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "container_type")]
pub enum ContainerType {
    Cardboard,
    Plastic,
    Glass,
    Nylon,
}

/// A product row from the `product` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub product_size: ProductSize,
    pub color: String,
    pub price: f32,
    pub fragile: bool,
    pub lote: String,
    pub container_type: ContainerType,
}

/// Entity identity is the id alone; stored rows with equal ids are the
/// same product regardless of their other columns.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Product {
    /// Overlay the fields present in `patch`, leaving the rest untouched.
    ///
    /// A JSON `null` deserializes to `None` and is treated as "not
    /// provided"; merge-patch cannot clear a field.
    pub fn apply_patch(&mut self, patch: &ProductPayload) {
        if let Some(product_size) = patch.product_size {
            self.product_size = product_size;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(fragile) = patch.fragile {
            self.fragile = fragile;
        }
        if let Some(lote) = &patch.lote {
            self.lote = lote.clone();
        }
        if let Some(container_type) = patch.container_type {
            self.container_type = container_type;
        }
    }
}

/// Request body for product create, full update, and merge-patch.
///
/// Every field is optional so the same shape serves all three write paths;
/// `validate` enforces the required fields where the operation demands them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: Option<DbId>,
    pub product_size: Option<ProductSize>,
    pub color: Option<String>,
    pub price: Option<f32>,
    pub fragile: Option<bool>,
    pub lote: Option<String>,
    pub container_type: Option<ContainerType>,
}

impl From<Product> for ProductPayload {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            product_size: Some(product.product_size),
            color: Some(product.color),
            price: Some(product.price),
            fragile: Some(product.fragile),
            lote: Some(product.lote),
            container_type: Some(product.container_type),
        }
    }
}

/// Required-field and pattern checks for create and full update.
pub fn validate(payload: &ProductPayload) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    check_required("productSize", &payload.product_size, &mut violations);
    check_required("color", &payload.color, &mut violations);
    check_required("price", &payload.price, &mut violations);
    check_required("fragile", &payload.fragile, &mut violations);
    check_required("containerType", &payload.container_type, &mut violations);
    match &payload.lote {
        None => violations.push(FieldViolation::required("lote")),
        Some(lote) if !LOTE_RE.is_match(lote) => {
            violations.push(FieldViolation::new(
                "lote",
                "must match \"^[a-zA-Z0-9_]*$\"",
            ));
        }
        Some(_) => {}
    }
    violations
}
