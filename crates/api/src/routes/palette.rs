//! Route definitions for the `/palettes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::palette;
use crate::state::AppState;

/// Routes mounted at `/palettes`.
///
/// ```text
/// GET    /?hexcode=X        -> search
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(palette::search).post(palette::create))
        .route(
            "/{id}",
            get(palette::get_by_id)
                .patch(palette::update)
                .delete(palette::delete),
        )
}
