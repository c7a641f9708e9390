//! Domain rules for the Palette Picker API.
//!
//! Pure validation and search logic shared by the storage and HTTP layers.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod palette_search;
pub mod types;
pub mod validation;
