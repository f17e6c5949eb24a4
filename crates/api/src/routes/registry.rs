use axum::routing::get;
use axum::Router;

use crate::handlers::registry;
use crate::state::AppState;

/// Routes mounted at `/registries`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(registry::list).post(registry::create))
        .route(
            "/{id}",
            get(registry::get_by_id)
                .put(registry::update)
                .patch(registry::partial_update)
                .delete(registry::delete),
        )
}
