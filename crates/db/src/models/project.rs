//! Project entity model and DTOs.

use palette_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
}

/// DTO for renaming a project. `name` is the only mutable column.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
}
