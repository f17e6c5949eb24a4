pub mod health;
pub mod product;
pub mod registry;
pub mod section;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (same shape per entity):
///
/// ```text
/// /products                GET (paginated list), POST (create)
/// /products/{id}           GET, PUT (full update), PATCH (merge-patch), DELETE
/// /sections                ...
/// /registries              ...
/// ```
///
/// PUT/PATCH on the collection path have no registered method and answer 405.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product::router())
        .nest("/sections", section::router())
        .nest("/registries", registry::router())
}
