//! Section entity model, payload DTO, and validation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use inventory_core::types::DbId;
use inventory_core::validation::{check_required, FieldViolation};

/// The category of product a storage section holds. Wire values keep the
/// original underscore spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_type")]
pub enum ProductType {
    #[serde(rename = "Electric_Materials")]
    #[sqlx(rename = "Electric_Materials")]
    ElectricMaterials,
    Equipment,
}

/// A section row from the `section` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: DbId,
    pub area: f32,
    pub product_type: ProductType,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Section {
    /// Overlay the fields present in `patch`; `null` means "not provided".
    pub fn apply_patch(&mut self, patch: &SectionPayload) {
        if let Some(area) = patch.area {
            self.area = area;
        }
        if let Some(product_type) = patch.product_type {
            self.product_type = product_type;
        }
    }
}

/// Request body for section create, full update, and merge-patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPayload {
    pub id: Option<DbId>,
    pub area: Option<f32>,
    pub product_type: Option<ProductType>,
}

impl From<Section> for SectionPayload {
    fn from(section: Section) -> Self {
        Self {
            id: Some(section.id),
            area: Some(section.area),
            product_type: Some(section.product_type),
        }
    }
}

/// Required-field checks for create and full update.
pub fn validate(payload: &SectionPayload) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    check_required("area", &payload.area, &mut violations);
    check_required("productType", &payload.product_type, &mut violations);
    violations
}
