//! Shared success bodies for write endpoints.

use palette_core::types::DbId;
use serde::Serialize;

/// `{ "id": ... }` returned by create endpoints with 201.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// `{ "message": ... }` returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
