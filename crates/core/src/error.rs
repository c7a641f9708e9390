use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A path identifier that is not a non-zero integer. Holds the raw value.
    #[error("Incorrect ID: {0}, Required data type: <Number>")]
    InvalidId(String),

    #[error("{0}")]
    Validation(String),

    #[error("Could not locate {entity}: {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup by relationship or filter that matched nothing.
    #[error("{0}")]
    NoMatch(String),

    #[error("Please provide 5-6 digit hexcode")]
    InvalidHexcode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message_echoes_raw_value() {
        let err = CoreError::InvalidId("f".into());
        assert_eq!(
            err.to_string(),
            "Incorrect ID: f, Required data type: <Number>"
        );
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "project",
            id: 700,
        };
        assert_eq!(err.to_string(), "Could not locate project: 700");
    }
}
