//! Repository for the `product` table.

use sqlx::PgPool;

use inventory_core::pagination::PageSpec;
use inventory_core::types::DbId;

use crate::error::DbError;
use crate::models::product::{Product, ProductPayload};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_size, color, price, fragile, lote, container_type";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// `(json property, sql column)` pairs accepted by the `sort` parameter.
    pub const SORTABLE_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("productSize", "product_size"),
        ("color", "color"),
        ("price", "price"),
        ("fragile", "fragile"),
        ("lote", "lote"),
        ("containerType", "container_type"),
    ];

    /// Insert a new product, returning the created row.
    ///
    /// The caller rejects payloads carrying an id before this point; the
    /// required fields have passed validation and are `Some`.
    pub async fn insert(pool: &PgPool, payload: &ProductPayload) -> Result<Product, DbError> {
        let query = format!(
            "INSERT INTO product (product_size, color, price, fragile, lote, container_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(payload.product_size)
            .bind(&payload.color)
            .bind(payload.price)
            .bind(payload.fragile)
            .bind(&payload.lote)
            .bind(payload.container_type)
            .fetch_one(pool)
            .await?;
        Ok(product)
    }

    /// Full-row update of an existing product.
    ///
    /// Fails with [`DbError::StaleUpdate`] when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        payload: &ProductPayload,
    ) -> Result<Product, DbError> {
        let query = format!(
            "UPDATE product SET
                product_size = $2,
                color = $3,
                price = $4,
                fragile = $5,
                lote = $6,
                container_type = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(payload.product_size)
            .bind(&payload.color)
            .bind(payload.price)
            .bind(payload.fragile)
            .bind(&payload.lote)
            .bind(payload.container_type)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::StaleUpdate {
                entity: "product",
                id,
            })
    }

    /// Dispatch on the payload id: insert when null, update otherwise.
    pub async fn save(pool: &PgPool, payload: &ProductPayload) -> Result<Product, DbError> {
        match payload.id {
            None => Self::insert(pool, payload).await,
            Some(id) => Self::update(pool, id, payload).await,
        }
    }

    /// Find a product by id. Absence is not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM product WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(product)
    }

    /// List one page of products, ordered per the page spec.
    pub async fn find_all(pool: &PgPool, page: &PageSpec) -> Result<Vec<Product>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM product ORDER BY {} {} LIMIT $1 OFFSET $2",
            page.sort.column,
            page.sort.direction.as_sql()
        );
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;
        Ok(products)
    }

    /// Whether a product with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM product WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Total number of products, used to compute pagination headers.
    pub async fn count(pool: &PgPool) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a product by id. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
