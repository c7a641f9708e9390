pub mod health;
pub mod palette;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                        list, create
/// /projects/{id}                   get, patch, delete
/// /projects/{id}/palettes          list palettes of a project
///
/// /palettes?hexcode=               substring search over colors
/// /palettes                        create
/// /palettes/{id}                   get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/palettes", palette::router())
}
