//! Repository for the `section` table.

use sqlx::PgPool;

use inventory_core::pagination::PageSpec;
use inventory_core::types::DbId;

use crate::error::DbError;
use crate::models::section::{Section, SectionPayload};

const COLUMNS: &str = "id, area, product_type";

/// Provides CRUD operations for sections.
pub struct SectionRepo;

impl SectionRepo {
    /// `(json property, sql column)` pairs accepted by the `sort` parameter.
    pub const SORTABLE_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("area", "area"),
        ("productType", "product_type"),
    ];

    /// Insert a new section, returning the created row.
    pub async fn insert(pool: &PgPool, payload: &SectionPayload) -> Result<Section, DbError> {
        let query = format!(
            "INSERT INTO section (area, product_type)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let section = sqlx::query_as::<_, Section>(&query)
            .bind(payload.area)
            .bind(payload.product_type)
            .fetch_one(pool)
            .await?;
        Ok(section)
    }

    /// Full-row update of an existing section.
    ///
    /// Fails with [`DbError::StaleUpdate`] when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        payload: &SectionPayload,
    ) -> Result<Section, DbError> {
        let query = format!(
            "UPDATE section SET area = $2, product_type = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(payload.area)
            .bind(payload.product_type)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::StaleUpdate {
                entity: "section",
                id,
            })
    }

    /// Dispatch on the payload id: insert when null, update otherwise.
    pub async fn save(pool: &PgPool, payload: &SectionPayload) -> Result<Section, DbError> {
        match payload.id {
            None => Self::insert(pool, payload).await,
            Some(id) => Self::update(pool, id, payload).await,
        }
    }

    /// Find a section by id. Absence is not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM section WHERE id = $1");
        let section = sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(section)
    }

    /// List one page of sections, ordered per the page spec.
    pub async fn find_all(pool: &PgPool, page: &PageSpec) -> Result<Vec<Section>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM section ORDER BY {} {} LIMIT $1 OFFSET $2",
            page.sort.column,
            page.sort.direction.as_sql()
        );
        let sections = sqlx::query_as::<_, Section>(&query)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        Ok(sections)
    }

    /// Whether a section with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM section WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Total number of sections, used to compute pagination headers.
    pub async fn count(pool: &PgPool) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM section")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a section by id. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM section WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
