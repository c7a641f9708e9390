use std::sync::Arc;

use palette_db::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage accessor for projects and palettes.
    pub storage: Arc<dyn Storage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
