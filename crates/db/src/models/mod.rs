//! Row models and request DTOs for the `projects` and `palettes` tables.

pub mod palette;
pub mod project;
