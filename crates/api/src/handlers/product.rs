//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderMap, LOCATION};
use axum::http::StatusCode;
use axum::Json;

use inventory_core::error::CoreError;
use inventory_core::pagination::{parse_sort, PageSpec};
use inventory_core::types::DbId;
use inventory_db::models::product::{self, Product, ProductPayload};
use inventory_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::check_path_body_ids;
use crate::headers::pagination_headers;
use crate::query::PageParams;
use crate::state::AppState;

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<Product>)> {
    if payload.id.is_some() {
        return Err(AppError::id_exists("product"));
    }
    let violations = product::validate(&payload);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    let created = ProductRepo::insert(&state.pool, &payload).await?;
    let location = format!("/api/products/{}", created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// GET /api/products?page&size&sort
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<(HeaderMap, Json<Vec<Product>>)> {
    let sort = parse_sort(params.sort.as_deref(), ProductRepo::SORTABLE_COLUMNS)?;
    let page = PageSpec::new(params.page, params.size, sort);
    let total = ProductRepo::count(&state.pool).await?;
    let products = ProductRepo::find_all(&state.pool, &page).await?;
    let headers = pagination_headers("/api/products", &page, total)?;
    Ok((headers, Json(products)))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "product",
            id,
        }))?;
    Ok(Json(product))
}

/// PUT /api/products/{id} -- full replacement.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<Product>> {
    check_path_body_ids(id, payload.id)?;
    let violations = product::validate(&payload);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    if !ProductRepo::exists(&state.pool, id).await? {
        return Err(AppError::id_not_found("product", id));
    }
    let updated = ProductRepo::save(&state.pool, &payload).await?;
    Ok(Json(updated))
}

/// PATCH /api/products/{id} -- merge-patch: only fields present in the
/// payload overwrite existing values.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<Product>> {
    check_path_body_ids(id, payload.id)?;
    let mut existing = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::id_not_found("product", id))?;
    existing.apply_patch(&payload);
    let updated = ProductRepo::save(&state.pool, &ProductPayload::from(existing)).await?;
    Ok(Json(updated))
}

/// DELETE /api/products/{id} -- 204 regardless of prior existence.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ProductRepo::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
