//! In-process [`Storage`] used by tests and `STORAGE_BACKEND=memory`.
//!
//! Mirrors the relational behaviour the handlers rely on: generated
//! ascending IDs, `updated_at` bumps, and the non-cascading foreign key from
//! `palettes.project_id` to `projects.id`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use palette_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::palette::{CreatePalette, Palette, UpdatePaletteColors};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::storage::Storage;

/// Name reported for foreign key violations, matching the migration.
pub const PALETTE_PROJECT_FK: &str = "fk_palettes_project_id";

#[derive(Default)]
struct Tables {
    projects: BTreeMap<DbId, Project>,
    palettes: BTreeMap<DbId, Palette>,
    last_project_id: DbId,
    last_palette_id: DbId,
}

/// Map-backed storage guarded by a single async `RwLock`.
#[derive(Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.values().cloned().collect())
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(&id).cloned())
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<DbId> {
        let mut tables = self.tables.write().await;
        tables.last_project_id += 1;
        let id = tables.last_project_id;
        let now = Utc::now();
        tables.projects.insert(
            id,
            Project {
                id,
                name: input.name.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        Ok(tables.projects.get_mut(&id).map(|project| {
            project.name = input.name.clone();
            project.updated_at = Utc::now();
            project.clone()
        }))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.palettes.values().any(|p| p.project_id == id) {
            return Err(StoreError::ForeignKey(PALETTE_PROJECT_FK.to_string()));
        }
        Ok(tables.projects.remove(&id).is_some())
    }

    async fn list_palettes(&self) -> StoreResult<Vec<Palette>> {
        let tables = self.tables.read().await;
        Ok(tables.palettes.values().cloned().collect())
    }

    async fn list_palettes_by_project(&self, project_id: DbId) -> StoreResult<Vec<Palette>> {
        let tables = self.tables.read().await;
        Ok(tables
            .palettes
            .values()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_palette(&self, id: DbId) -> StoreResult<Option<Palette>> {
        let tables = self.tables.read().await;
        Ok(tables.palettes.get(&id).cloned())
    }

    async fn create_palette(&self, input: &CreatePalette) -> StoreResult<DbId> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&input.project_id) {
            return Err(StoreError::ForeignKey(PALETTE_PROJECT_FK.to_string()));
        }
        tables.last_palette_id += 1;
        let id = tables.last_palette_id;
        let now = Utc::now();
        tables.palettes.insert(
            id,
            Palette {
                id,
                name: input.name.clone(),
                project_id: input.project_id,
                color_one: input.color_one.clone(),
                color_two: input.color_two.clone(),
                color_three: input.color_three.clone(),
                color_four: input.color_four.clone(),
                color_five: input.color_five.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn update_palette_colors(
        &self,
        id: DbId,
        input: &UpdatePaletteColors,
    ) -> StoreResult<Option<Palette>> {
        let mut tables = self.tables.write().await;
        Ok(tables.palettes.get_mut(&id).map(|palette| {
            palette.color_one = input.color_one.clone();
            palette.color_two = input.color_two.clone();
            palette.color_three = input.color_three.clone();
            palette.color_four = input.color_four.clone();
            palette.color_five = input.color_five.clone();
            palette.updated_at = Utc::now();
            palette.clone()
        }))
    }

    async fn delete_palette(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.palettes.remove(&id).is_some())
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.palettes.clear();
        tables.projects.clear();
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
