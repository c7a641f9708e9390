//! Request validation for path identifiers and JSON write bodies.
//!
//! Path identifiers are checked before any storage access. Write bodies are
//! checked against a [`BodySchema`]: first every required field must be
//! present, then (for updates) every supplied field must be allowed.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_NAME: &str = "name";
pub const FIELD_PROJECT_ID: &str = "project_id";

/// The five palette color columns, in response order.
pub const COLOR_FIELDS: [&str; 5] = [
    "color_one",
    "color_two",
    "color_three",
    "color_four",
    "color_five",
];

// ---------------------------------------------------------------------------
// Body schemas
// ---------------------------------------------------------------------------

/// Required and allowed fields for one write operation, plus the expected
/// format text reported back to clients.
#[derive(Debug, Clone, Copy)]
pub struct BodySchema {
    /// Human-readable body shape, e.g. `{ name: <String> }`.
    pub shape: &'static str,
    /// Text between the shape and the missing-field sentence.
    pub missing_separator: &'static str,
    /// Fields checked for presence, in order.
    pub required: &'static [&'static str],
    /// Fields a body may carry. `None` accepts anything.
    pub allowed: Option<&'static [&'static str]>,
}

pub const CREATE_PROJECT: BodySchema = BodySchema {
    shape: "{ name: <String> }",
    missing_separator: ", ",
    required: &[FIELD_NAME],
    allowed: None,
};

pub const UPDATE_PROJECT: BodySchema = BodySchema {
    shape: "{ name:<String> }",
    missing_separator: ", ",
    required: &[FIELD_NAME],
    allowed: Some(&[FIELD_NAME]),
};

pub const CREATE_PALETTE: BodySchema = BodySchema {
    shape: "{ name: <String>, project_id: <Number>, color_one:<String>, color_two:<String>, \
            color_three:<String>, color_four:<String>, color_five:<String>}",
    missing_separator: " ",
    required: &[
        FIELD_NAME,
        FIELD_PROJECT_ID,
        COLOR_FIELDS[0],
        COLOR_FIELDS[1],
        COLOR_FIELDS[2],
        COLOR_FIELDS[3],
        COLOR_FIELDS[4],
    ],
    allowed: None,
};

pub const UPDATE_PALETTE: BodySchema = BodySchema {
    shape: "{ color_one:<String>, color_two:<String>, color_three:<String>, \
            color_four:<String>, color_five:<String>}",
    missing_separator: " ",
    required: &COLOR_FIELDS,
    allowed: Some(&COLOR_FIELDS),
};

impl BodySchema {
    /// Run the required-field check, then the whitelist check.
    pub fn validate(&self, body: &Value) -> Result<(), CoreError> {
        self.check_required(body)?;
        self.check_allowed(body)
    }

    /// Fail on the first required field that is absent, in declared order.
    ///
    /// Missing keys, `null`, `false`, zero and the empty string all count as
    /// absent. A body that is not an object has no fields at all.
    pub fn check_required(&self, body: &Value) -> Result<(), CoreError> {
        for field in self.required {
            let present = body.get(field).is_some_and(is_present);
            if !present {
                return Err(CoreError::Validation(format!(
                    "Expected format: {}{}Your missing a {field} property",
                    self.shape, self.missing_separator
                )));
            }
        }
        Ok(())
    }

    /// Fail on the first body key outside the allowed set, in document order.
    pub fn check_allowed(&self, body: &Value) -> Result<(), CoreError> {
        let (Some(allowed), Some(fields)) = (self.allowed, body.as_object()) else {
            return Ok(());
        };
        match fields.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(CoreError::Validation(format!(
                "Expected format: {}, {key} is invalid property",
                self.shape
            ))),
            None => Ok(()),
        }
    }
}

/// Whether a JSON value counts as a supplied field.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Parse a raw `:id` path segment into a [`DbId`].
///
/// Reads an optional sign and the leading decimal digits, ignoring any
/// trailing text (`"12abc"` parses as `12`). Rejects segments with no
/// leading digits, the value zero, and values outside `i64`.
pub fn parse_resource_id(raw: &str) -> Result<DbId, CoreError> {
    let invalid = || CoreError::InvalidId(raw.to_string());

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return Err(invalid());
    }

    let magnitude: DbId = digits.parse().map_err(|_| invalid())?;
    let id = if negative { -magnitude } else { magnitude };

    if id == 0 {
        return Err(invalid());
    }
    Ok(id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
