//! Development seed data.
//!
//! Wipes both tables and inserts one project with two identical palettes.
//! Works against any [`Storage`] so the API tests and a fresh database get
//! the same fixture.

use palette_core::types::DbId;

use crate::error::StoreResult;
use crate::models::palette::CreatePalette;
use crate::models::project::CreateProject;
use crate::storage::Storage;

pub const SEED_PROJECT_NAME: &str = "Project One";
pub const SEED_PALETTE_NAMES: [&str; 2] = ["Palette One", "Palette Two"];
pub const SEED_COLORS: [&str; 5] = ["#47850", "#47851", "#47852", "#47853", "#47854"];

/// IDs generated by [`run`].
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub project_id: DbId,
    pub palette_ids: Vec<DbId>,
}

/// Clear storage and insert the development fixture.
pub async fn run(storage: &dyn Storage) -> StoreResult<SeedSummary> {
    storage.clear().await?;

    let project_id = storage
        .create_project(&CreateProject {
            name: SEED_PROJECT_NAME.to_string(),
        })
        .await?;

    let mut palette_ids = Vec::with_capacity(SEED_PALETTE_NAMES.len());
    for name in SEED_PALETTE_NAMES {
        let [one, two, three, four, five] = SEED_COLORS.map(String::from);
        let id = storage
            .create_palette(&CreatePalette {
                name: name.to_string(),
                project_id,
                color_one: one,
                color_two: two,
                color_three: three,
                color_four: four,
                color_five: five,
            })
            .await?;
        palette_ids.push(id);
    }

    tracing::info!(project_id, palettes = palette_ids.len(), "Seeded storage");

    Ok(SeedSummary {
        project_id,
        palette_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    #[tokio::test]
    async fn seed_creates_one_project_with_two_palettes() {
        let store = MemoryStorage::new();
        let summary = run(&store).await.unwrap();

        let projects = store.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, SEED_PROJECT_NAME);

        let palettes = store
            .list_palettes_by_project(summary.project_id)
            .await
            .unwrap();
        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[0].colors(), SEED_COLORS);
    }

    #[tokio::test]
    async fn reseeding_replaces_existing_rows() {
        let store = MemoryStorage::new();
        let first = run(&store).await.unwrap();
        let second = run(&store).await.unwrap();

        assert_ne!(first.project_id, second.project_id);
        assert_eq!(store.list_projects().await.unwrap().len(), 1);
        assert_eq!(store.list_palettes().await.unwrap().len(), 2);
    }
}
