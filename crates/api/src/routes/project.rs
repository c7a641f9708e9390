//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/palettes     -> list_palettes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/palettes", get(project::list_palettes))
}
