//! Registry entity model, payload DTO, and validation.
//!
//! A registry records the quantity of a product held in a section. Read
//! paths hydrate the full `product` and `section` objects via a left outer
//! join (see `RegistryRepo`); write paths carry only the foreign-key ids.

use serde::{Deserialize, Serialize};

use inventory_core::types::DbId;
use inventory_core::validation::{check_required, FieldViolation};

use crate::models::product::Product;
use crate::models::section::Section;

/// A registry row, optionally hydrated with its product and section.
///
/// `product`/`section` are `None` either when the foreign key is null or
/// when the row came from a non-joining query (insert/update RETURNING).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub id: DbId,
    pub amount: i32,
    pub product_id: Option<DbId>,
    pub section_id: Option<DbId>,
    pub product: Option<Product>,
    pub section: Option<Section>,
}

impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Registry {
    /// Overlay the fields present in `patch`; `null` means "not provided".
    pub fn apply_patch(&mut self, patch: &RegistryPayload) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(product_id) = patch.product_id {
            self.product_id = Some(product_id);
        }
        if let Some(section_id) = patch.section_id {
            self.section_id = Some(section_id);
        }
    }
}

/// Request body for registry create, full update, and merge-patch.
///
/// Nested `product`/`section` objects in an inbound body are ignored; the
/// relation is set through `productId`/`sectionId`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryPayload {
    pub id: Option<DbId>,
    pub amount: Option<i32>,
    pub product_id: Option<DbId>,
    pub section_id: Option<DbId>,
}

impl From<Registry> for RegistryPayload {
    fn from(registry: Registry) -> Self {
        Self {
            id: Some(registry.id),
            amount: Some(registry.amount),
            product_id: registry.product_id,
            section_id: registry.section_id,
        }
    }
}

/// Required-field checks for create and full update. The foreign keys are
/// nullable at the storage layer and stay optional here.
pub fn validate(payload: &RegistryPayload) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    check_required("amount", &payload.amount, &mut violations);
    violations
}
