//! Repository for the `registry` table.
//!
//! Read paths join `product` and `section` so each registry comes back
//! with its related entities hydrated, not just the foreign-key ids.
//! Write paths operate on the bare row.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use inventory_core::pagination::PageSpec;
use inventory_core::types::DbId;

use crate::error::DbError;
use crate::models::product::Product;
use crate::models::registry::{Registry, RegistryPayload};
use crate::models::section::Section;

/// Bare registry columns, for insert/update RETURNING.
const COLUMNS: &str = "id, amount, product_id, section_id";

/// Joined select: registry columns prefixed `r_`, product `p_`, section `s_`.
const JOINED_SELECT: &str = "SELECT
    r.id AS r_id, r.amount AS r_amount,
    r.product_id AS r_product_id, r.section_id AS r_section_id,
    p.id AS p_id, p.product_size AS p_product_size, p.color AS p_color,
    p.price AS p_price, p.fragile AS p_fragile, p.lote AS p_lote,
    p.container_type AS p_container_type,
    s.id AS s_id, s.area AS s_area, s.product_type AS s_product_type
 FROM registry r
 LEFT OUTER JOIN product p ON r.product_id = p.id
 LEFT OUTER JOIN section s ON r.section_id = s.id";

/// A bare row without the hydrated relations.
#[derive(sqlx::FromRow)]
struct RegistryRow {
    id: DbId,
    amount: i32,
    product_id: Option<DbId>,
    section_id: Option<DbId>,
}

impl From<RegistryRow> for Registry {
    fn from(row: RegistryRow) -> Self {
        Registry {
            id: row.id,
            amount: row.amount,
            product_id: row.product_id,
            section_id: row.section_id,
            product: None,
            section: None,
        }
    }
}

/// Map one joined row into a hydrated [`Registry`].
///
/// A null `p_id`/`s_id` means the outer join found no related row (the
/// foreign key is null), so the sub-object stays `None`.
fn from_joined_row(row: &PgRow) -> Result<Registry, sqlx::Error> {
    let product = match row.try_get::<Option<DbId>, _>("p_id")? {
        Some(id) => Some(Product {
            id,
            product_size: row.try_get("p_product_size")?,
            color: row.try_get("p_color")?,
            price: row.try_get("p_price")?,
            fragile: row.try_get("p_fragile")?,
            lote: row.try_get("p_lote")?,
            container_type: row.try_get("p_container_type")?,
        }),
        None => None,
    };
    let section = match row.try_get::<Option<DbId>, _>("s_id")? {
        Some(id) => Some(Section {
            id,
            area: row.try_get("s_area")?,
            product_type: row.try_get("s_product_type")?,
        }),
        None => None,
    };
    Ok(Registry {
        id: row.try_get("r_id")?,
        amount: row.try_get("r_amount")?,
        product_id: row.try_get("r_product_id")?,
        section_id: row.try_get("r_section_id")?,
        product,
        section,
    })
}

/// Provides CRUD operations for registries, with join hydration on reads.
pub struct RegistryRepo;

impl RegistryRepo {
    /// `(json property, sql column)` pairs accepted by the `sort` parameter.
    pub const SORTABLE_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("amount", "amount"),
        ("productId", "product_id"),
        ("sectionId", "section_id"),
    ];

    /// Insert a new registry, returning the created row (not hydrated).
    pub async fn insert(pool: &PgPool, payload: &RegistryPayload) -> Result<Registry, DbError> {
        let query = format!(
            "INSERT INTO registry (amount, product_id, section_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RegistryRow>(&query)
            .bind(payload.amount)
            .bind(payload.product_id)
            .bind(payload.section_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Full-row update of an existing registry.
    ///
    /// Fails with [`DbError::StaleUpdate`] when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        payload: &RegistryPayload,
    ) -> Result<Registry, DbError> {
        let query = format!(
            "UPDATE registry SET amount = $2, product_id = $3, section_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RegistryRow>(&query)
            .bind(id)
            .bind(payload.amount)
            .bind(payload.product_id)
            .bind(payload.section_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::StaleUpdate {
                entity: "registry",
                id,
            })?;
        Ok(row.into())
    }

    /// Dispatch on the payload id: insert when null, update otherwise.
    pub async fn save(pool: &PgPool, payload: &RegistryPayload) -> Result<Registry, DbError> {
        match payload.id {
            None => Self::insert(pool, payload).await,
            Some(id) => Self::update(pool, id, payload).await,
        }
    }

    /// Find a registry by id, hydrated with its product and section.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Registry>, DbError> {
        let query = format!("{JOINED_SELECT} WHERE r.id = $1");
        let registry = sqlx::query(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(|row| from_joined_row(&row))
            .transpose()?;
        Ok(registry)
    }

    /// List one page of registries, hydrated, ordered per the page spec.
    pub async fn find_all(pool: &PgPool, page: &PageSpec) -> Result<Vec<Registry>, DbError> {
        let query = format!(
            "{JOINED_SELECT} ORDER BY r.{} {} LIMIT $1 OFFSET $2",
            page.sort.column,
            page.sort.direction.as_sql()
        );
        let rows = sqlx::query(&query)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        rows.iter()
            .map(|row| from_joined_row(row).map_err(DbError::from))
            .collect()
    }

    /// Whether a registry with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM registry WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Total number of registries, used to compute pagination headers.
    pub async fn count(pool: &PgPool) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registry")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a registry by id. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM registry WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
