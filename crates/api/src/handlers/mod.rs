pub mod palette;
pub mod project;

use palette_core::error::CoreError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppResult;

/// Resource names used in not-found messages.
pub const PROJECT: &str = "project";
pub const PALETTE: &str = "palette";

/// Convert an already-validated JSON body into a typed DTO.
///
/// Fields that passed the presence checks may still carry the wrong type
/// (e.g. a numeric `name`); those are reported as validation errors.
pub(crate) fn parse_body<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body)
        .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")).into())
}
