//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod palette_repo;
pub mod project_repo;

pub use palette_repo::PaletteRepo;
pub use project_repo::ProjectRepo;
