//! Request body extractor for the create and update handlers.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A request body read as a JSON value, whatever its `Content-Type`.
///
/// An empty (or all-whitespace) body yields an empty object, so the field
/// checks answer with their usual 422. Bodies that are present but not valid
/// JSON are rejected with an [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        parse_json_body(&bytes).map(JsonBody)
    }
}

fn parse_json_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))
}
