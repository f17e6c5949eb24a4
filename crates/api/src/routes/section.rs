use axum::routing::get;
use axum::Router;

use crate::handlers::section;
use crate::state::AppState;

/// Routes mounted at `/sections`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(section::list).post(section::create))
        .route(
            "/{id}",
            get(section::get_by_id)
                .put(section::update)
                .patch(section::partial_update)
                .delete(section::delete),
        )
}
