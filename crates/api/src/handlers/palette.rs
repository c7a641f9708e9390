//! Handlers for the `/palettes` resource.
//!
//! Palettes are always returned shaped: the five color columns collapse
//! into an ordered `colors` list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use palette_core::error::CoreError;
use palette_core::palette_search;
use palette_core::validation::{parse_resource_id, CREATE_PALETTE, UPDATE_PALETTE};
use palette_db::models::palette::{CreatePalette, ShapedPalette, UpdatePaletteColors};

use super::{parse_body, PALETTE};
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::query::HexcodeParams;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /palettes/{id}
// ---------------------------------------------------------------------------

/// Fetch one palette. Responds with a one-element array.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<ShapedPalette>>> {
    let id = parse_resource_id(&raw_id)?;
    let palette = state
        .storage
        .find_palette(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PALETTE,
            id,
        })?;
    Ok(Json(vec![palette.into()]))
}

// ---------------------------------------------------------------------------
// GET /palettes?hexcode=...
// ---------------------------------------------------------------------------

/// Return every palette with at least one color containing `hexcode`.
///
/// The filter runs here over the full table rather than in storage.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<HexcodeParams>,
) -> AppResult<Json<Vec<ShapedPalette>>> {
    let code = params.hexcode.unwrap_or_default();
    palette_search::validate_hexcode(&code)?;

    let palettes = state.storage.list_palettes().await?;
    if palettes.is_empty() {
        return Err(palette_search::no_saved_palettes().into());
    }

    let matches: Vec<ShapedPalette> = palettes
        .into_iter()
        .filter(|palette| palette_search::colors_match(&palette.colors(), &code))
        .map(ShapedPalette::from)
        .collect();

    if matches.is_empty() {
        return Err(palette_search::no_matching_palettes(&code).into());
    }

    tracing::debug!(hexcode = %code, count = matches.len(), "Palette search matched");
    Ok(Json(matches))
}

// ---------------------------------------------------------------------------
// POST /palettes
// ---------------------------------------------------------------------------

/// Create a palette. The referenced project is not looked up first.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    CREATE_PALETTE.validate(&body)?;
    let input: CreatePalette = parse_body(body)?;

    let id = state.storage.create_palette(&input).await?;
    tracing::info!(
        palette_id = id,
        project_id = input.project_id,
        name = %input.name,
        "Created palette"
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// ---------------------------------------------------------------------------
// PATCH /palettes/{id}
// ---------------------------------------------------------------------------

/// Replace all five colors. Partial color updates are rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<ShapedPalette>> {
    let id = parse_resource_id(&raw_id)?;
    UPDATE_PALETTE.validate(&body)?;
    let input: UpdatePaletteColors = parse_body(body)?;

    let not_found = || CoreError::NotFound {
        entity: PALETTE,
        id,
    };

    state.storage.find_palette(id).await?.ok_or_else(not_found)?;
    let palette = state
        .storage
        .update_palette_colors(id, &input)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(palette_id = id, "Updated palette colors");
    Ok(Json(palette.into()))
}

// ---------------------------------------------------------------------------
// DELETE /palettes/{id}
// ---------------------------------------------------------------------------

pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_resource_id(&raw_id)?;
    state
        .storage
        .find_palette(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PALETTE,
            id,
        })?;

    let removed = state.storage.delete_palette(id).await?;
    tracing::info!(palette_id = id, removed, "Deleted palette");

    Ok(Json(MessageResponse {
        message: "Success: Palette has been removed",
    }))
}
