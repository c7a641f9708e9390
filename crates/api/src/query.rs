//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /palettes?hexcode=`.
///
/// A missing `hexcode` is treated as empty and fails the length check.
#[derive(Debug, Deserialize)]
pub struct HexcodeParams {
    pub hexcode: Option<String>,
}
