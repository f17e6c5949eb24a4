//! HTTP handlers, one module per entity.

pub mod product;
pub mod registry;
pub mod section;

use inventory_core::types::DbId;

use crate::error::AppError;

/// Shared id checks for full update and merge-patch: the payload id must
/// be present and must match the path id.
pub(crate) fn check_path_body_ids(path_id: DbId, body_id: Option<DbId>) -> Result<DbId, AppError> {
    let body_id = body_id.ok_or_else(AppError::id_null)?;
    if body_id != path_id {
        return Err(AppError::id_mismatch());
    }
    Ok(body_id)
}
