use inventory_core::types::DbId;

/// Repository-level error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// An UPDATE keyed on an existing id affected zero rows. The HTTP
    /// layer checks existence before saving, so reaching this means the
    /// row vanished between the check and the write.
    #[error("Unable to update {entity} with id = {id}: no rows affected")]
    StaleUpdate { entity: &'static str, id: DbId },
}
