/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Failure reported by a [`Storage`](crate::Storage) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write that would leave a reference without its target, or delete a
    /// target that is still referenced. Holds the constraint name.
    #[error("Foreign key constraint violated: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return StoreError::ForeignKey(constraint);
            }
        }
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn non_database_errors_stay_database_errors() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, StoreError::Database(sqlx::Error::RowNotFound));
    }

    #[test]
    fn foreign_key_message_names_constraint() {
        let err = StoreError::ForeignKey("fk_palettes_project_id".into());
        assert_eq!(
            err.to_string(),
            "Foreign key constraint violated: fk_palettes_project_id"
        );
    }
}
