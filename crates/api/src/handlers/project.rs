//! Handlers for the `/projects` resource.
//!
//! Every `{id}` handler parses the raw path segment itself so malformed IDs
//! get the resource-level 422 instead of Axum's path rejection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use palette_core::error::CoreError;
use palette_core::validation::{parse_resource_id, CREATE_PROJECT, UPDATE_PROJECT};
use palette_db::models::palette::ShapedPalette;
use palette_db::models::project::{CreateProject, Project, UpdateProject};

use super::{parse_body, PROJECT};
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.storage.list_projects().await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
///
/// Responds with a one-element array.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let id = parse_resource_id(&raw_id)?;
    let project = state
        .storage
        .find_project(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PROJECT,
            id,
        })?;
    Ok(Json(vec![project]))
}

/// GET /api/v1/projects/{id}/palettes
pub async fn list_palettes(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<ShapedPalette>>> {
    let id = parse_resource_id(&raw_id)?;
    let palettes = state.storage.list_palettes_by_project(id).await?;
    if palettes.is_empty() {
        return Err(CoreError::NoMatch(format!(
            "Project with ID of {id} does not have any palettes"
        ))
        .into());
    }

    tracing::debug!(project_id = id, count = palettes.len(), "Listed project palettes");
    Ok(Json(palettes.into_iter().map(ShapedPalette::from).collect()))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    CREATE_PROJECT.validate(&body)?;
    let input: CreateProject = parse_body(body)?;

    let id = state.storage.create_project(&input).await?;
    tracing::info!(project_id = id, name = %input.name, "Created project");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PATCH /api/v1/projects/{id}
///
/// Only `name` may be supplied.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Project>> {
    let id = parse_resource_id(&raw_id)?;
    UPDATE_PROJECT.validate(&body)?;
    let input: UpdateProject = parse_body(body)?;

    let not_found = || CoreError::NotFound {
        entity: PROJECT,
        id,
    };

    state.storage.find_project(id).await?.ok_or_else(not_found)?;
    let project = state
        .storage
        .update_project(id, &input)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(project_id = id, name = %project.name, "Updated project");
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Palettes are not removed with their project; a project that still has
/// palettes trips the foreign key and answers 500.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_resource_id(&raw_id)?;
    state
        .storage
        .find_project(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PROJECT,
            id,
        })?;

    let removed = state.storage.delete_project(id).await?;
    tracing::info!(project_id = id, removed, "Deleted project");

    Ok(Json(MessageResponse {
        message: "Success: Project has been removed",
    }))
}
