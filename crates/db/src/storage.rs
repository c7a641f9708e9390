//! The storage accessor seam used by the HTTP handlers.
//!
//! Handlers only ever see `Arc<dyn Storage>`; [`PgStorage`] backs it in
//! production and [`MemoryStorage`](crate::memory::MemoryStorage) in tests.

use async_trait::async_trait;
use palette_core::types::DbId;

use crate::error::StoreResult;
use crate::models::palette::{CreatePalette, Palette, UpdatePaletteColors};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::{PaletteRepo, ProjectRepo};
use crate::DbPool;

/// Row-level select/insert/update/delete over `projects` and `palettes`.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn create_project(&self, input: &CreateProject) -> StoreResult<DbId>;

    /// Returns `None` if no project has this ID.
    async fn update_project(&self, id: DbId, input: &UpdateProject)
        -> StoreResult<Option<Project>>;

    /// Returns `true` if a row was removed.
    async fn delete_project(&self, id: DbId) -> StoreResult<bool>;

    async fn list_palettes(&self) -> StoreResult<Vec<Palette>>;

    async fn list_palettes_by_project(&self, project_id: DbId) -> StoreResult<Vec<Palette>>;

    async fn find_palette(&self, id: DbId) -> StoreResult<Option<Palette>>;

    async fn create_palette(&self, input: &CreatePalette) -> StoreResult<DbId>;

    /// Returns `None` if no palette has this ID.
    async fn update_palette_colors(
        &self,
        id: DbId,
        input: &UpdatePaletteColors,
    ) -> StoreResult<Option<Palette>>;

    /// Returns `true` if a row was removed.
    async fn delete_palette(&self, id: DbId) -> StoreResult<bool>;

    /// Remove every palette, then every project.
    async fn clear(&self) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
}

/// PostgreSQL-backed storage delegating to the repositories.
#[derive(Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<DbId> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn list_palettes(&self) -> StoreResult<Vec<Palette>> {
        Ok(PaletteRepo::list(&self.pool).await?)
    }

    async fn list_palettes_by_project(&self, project_id: DbId) -> StoreResult<Vec<Palette>> {
        Ok(PaletteRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn find_palette(&self, id: DbId) -> StoreResult<Option<Palette>> {
        Ok(PaletteRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_palette(&self, input: &CreatePalette) -> StoreResult<DbId> {
        Ok(PaletteRepo::create(&self.pool, input).await?)
    }

    async fn update_palette_colors(
        &self,
        id: DbId,
        input: &UpdatePaletteColors,
    ) -> StoreResult<Option<Palette>> {
        Ok(PaletteRepo::update_colors(&self.pool, id, input).await?)
    }

    async fn delete_palette(&self, id: DbId) -> StoreResult<bool> {
        Ok(PaletteRepo::delete(&self.pool, id).await?)
    }

    async fn clear(&self) -> StoreResult<()> {
        let palettes = PaletteRepo::delete_all(&self.pool).await?;
        let projects = ProjectRepo::delete_all(&self.pool).await?;
        tracing::debug!(palettes, projects, "Cleared storage");
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
