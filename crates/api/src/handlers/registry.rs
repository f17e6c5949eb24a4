//! Handlers for the `/registries` resource.
//!
//! Reads come back hydrated with the related product and section; writes
//! return the bare row (clients re-read to get the embedded objects, as
//! the repository's insert/update RETURNING does not join).

use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderMap, LOCATION};
use axum::http::StatusCode;
use axum::Json;

use inventory_core::error::CoreError;
use inventory_core::pagination::{parse_sort, PageSpec};
use inventory_core::types::DbId;
use inventory_db::models::registry::{self, Registry, RegistryPayload};
use inventory_db::repositories::RegistryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::check_path_body_ids;
use crate::headers::pagination_headers;
use crate::query::PageParams;
use crate::state::AppState;

/// POST /api/registries
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RegistryPayload>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<Registry>)> {
    if payload.id.is_some() {
        return Err(AppError::id_exists("registry"));
    }
    let violations = registry::validate(&payload);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    let created = RegistryRepo::insert(&state.pool, &payload).await?;
    let location = format!("/api/registries/{}", created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// GET /api/registries?page&size&sort
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<(HeaderMap, Json<Vec<Registry>>)> {
    let sort = parse_sort(params.sort.as_deref(), RegistryRepo::SORTABLE_COLUMNS)?;
    let page = PageSpec::new(params.page, params.size, sort);
    let total = RegistryRepo::count(&state.pool).await?;
    let registries = RegistryRepo::find_all(&state.pool, &page).await?;
    let headers = pagination_headers("/api/registries", &page, total)?;
    Ok((headers, Json(registries)))
}

/// GET /api/registries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Registry>> {
    let registry = RegistryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "registry",
            id,
        }))?;
    Ok(Json(registry))
}

/// PUT /api/registries/{id} -- full replacement.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<RegistryPayload>,
) -> AppResult<Json<Registry>> {
    check_path_body_ids(id, payload.id)?;
    let violations = registry::validate(&payload);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    if !RegistryRepo::exists(&state.pool, id).await? {
        return Err(AppError::id_not_found("registry", id));
    }
    let updated = RegistryRepo::save(&state.pool, &payload).await?;
    Ok(Json(updated))
}

/// PATCH /api/registries/{id} -- merge-patch: only fields present in the
/// payload overwrite existing values.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<RegistryPayload>,
) -> AppResult<Json<Registry>> {
    check_path_body_ids(id, payload.id)?;
    let mut existing = RegistryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::id_not_found("registry", id))?;
    existing.apply_patch(&payload);
    let updated = RegistryRepo::save(&state.pool, &RegistryPayload::from(existing)).await?;
    Ok(Json(updated))
}

/// DELETE /api/registries/{id} -- 204 regardless of prior existence.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    RegistryRepo::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
