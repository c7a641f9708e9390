//! Repository for the `palettes` table.

use palette_core::types::DbId;
use sqlx::PgPool;

use crate::models::palette::{CreatePalette, Palette, UpdatePaletteColors};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_id, color_one, color_two, color_three, color_four, \
                       color_five, created_at, updated_at";

/// Provides CRUD operations for palettes.
pub struct PaletteRepo;

impl PaletteRepo {
    /// Insert a new palette, returning the generated ID.
    ///
    /// The referenced project is not checked up front; a dangling
    /// `project_id` fails on the foreign key.
    pub async fn create(pool: &PgPool, input: &CreatePalette) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO palettes
                (name, project_id, color_one, color_two, color_three, color_four, color_five)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.project_id)
        .bind(&input.color_one)
        .bind(&input.color_two)
        .bind(&input.color_three)
        .bind(&input.color_four)
        .bind(&input.color_five)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a palette by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Palette>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM palettes WHERE id = $1");
        sqlx::query_as::<_, Palette>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all palettes ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Palette>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM palettes ORDER BY id");
        sqlx::query_as::<_, Palette>(&query).fetch_all(pool).await
    }

    /// List palettes belonging to a project, ordered by ID.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Palette>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM palettes WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Palette>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace all five colors of a palette and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_colors(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePaletteColors,
    ) -> Result<Option<Palette>, sqlx::Error> {
        let query = format!(
            "UPDATE palettes SET
                color_one = $2,
                color_two = $3,
                color_three = $4,
                color_four = $5,
                color_five = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Palette>(&query)
            .bind(id)
            .bind(&input.color_one)
            .bind(&input.color_two)
            .bind(&input.color_three)
            .bind(&input.color_four)
            .bind(&input.color_five)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a palette by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM palettes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every palette.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM palettes").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
