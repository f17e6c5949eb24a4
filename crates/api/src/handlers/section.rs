//! Handlers for the `/sections` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderMap, LOCATION};
use axum::http::StatusCode;
use axum::Json;

use inventory_core::error::CoreError;
use inventory_core::pagination::{parse_sort, PageSpec};
use inventory_core::types::DbId;
use inventory_db::models::section::{self, Section, SectionPayload};
use inventory_db::repositories::SectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::check_path_body_ids;
use crate::headers::pagination_headers;
use crate::query::PageParams;
use crate::state::AppState;

/// POST /api/sections
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SectionPayload>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<Section>)> {
    if payload.id.is_some() {
        return Err(AppError::id_exists("section"));
    }
    let violations = section::validate(&payload);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    let created = SectionRepo::insert(&state.pool, &payload).await?;
    let location = format!("/api/sections/{}", created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// GET /api/sections?page&size&sort
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<(HeaderMap, Json<Vec<Section>>)> {
    let sort = parse_sort(params.sort.as_deref(), SectionRepo::SORTABLE_COLUMNS)?;
    let page = PageSpec::new(params.page, params.size, sort);
    let total = SectionRepo::count(&state.pool).await?;
    let sections = SectionRepo::find_all(&state.pool, &page).await?;
    let headers = pagination_headers("/api/sections", &page, total)?;
    Ok((headers, Json(sections)))
}

/// GET /api/sections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Section>> {
    let section = SectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "section",
            id,
        }))?;
    Ok(Json(section))
}

/// PUT /api/sections/{id} -- full replacement.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<SectionPayload>,
) -> AppResult<Json<Section>> {
    check_path_body_ids(id, payload.id)?;
    let violations = section::validate(&payload);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    if !SectionRepo::exists(&state.pool, id).await? {
        return Err(AppError::id_not_found("section", id));
    }
    let updated = SectionRepo::save(&state.pool, &payload).await?;
    Ok(Json(updated))
}

/// PATCH /api/sections/{id} -- merge-patch: only fields present in the
/// payload overwrite existing values.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<SectionPayload>,
) -> AppResult<Json<Section>> {
    check_path_body_ids(id, payload.id)?;
    let mut existing = SectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::id_not_found("section", id))?;
    existing.apply_patch(&payload);
    let updated = SectionRepo::save(&state.pool, &SectionPayload::from(existing)).await?;
    Ok(Json(updated))
}

/// DELETE /api/sections/{id} -- 204 regardless of prior existence.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    SectionRepo::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
