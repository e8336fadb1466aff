//! Database error types
//!
//! This module defines the error types that can occur during database
//! operations and maps PostgreSQL error codes onto them, so callers see
//! typed outcomes (duplicate, missing row, overlap) instead of raw SQL
//! failures.

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check or not-null constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Exclusion constraint violation on the reservations table
    #[error("Reservation overlaps an existing booking: {0}")]
    BookingOverlap(String),

    /// Migration or schema-management error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A database row could not be mapped to a domain type
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Owner", 17);
    /// assert!(error.to_string().contains("Owner"));
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Creates a duplicate entry error
    pub fn duplicate(entity: &str, field: &str, value: impl std::fmt::Display) -> Self {
        DatabaseError::DuplicateEntry(format!(
            "{} with {} '{}' already exists",
            entity, field, value
        ))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
                | DatabaseError::BookingOverlap(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to specific DatabaseError variants
///
/// Maps PostgreSQL error codes so `?` in repository code yields typed
/// errors directly.
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                        "23503" => {
                            DatabaseError::ForeignKeyViolation(db_err.message().to_string())
                        }
                        "23502" | "23514" => {
                            DatabaseError::ConstraintViolation(db_err.message().to_string())
                        }
                        "23P01" => DatabaseError::BookingOverlap(db_err.message().to_string()),
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = DatabaseError::not_found("Apartment", 9);
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Apartment"));
        assert!(error.to_string().contains('9'));
    }

    #[test]
    fn test_predicates() {
        assert!(DatabaseError::BookingOverlap("x".into()).is_constraint_violation());
        assert!(DatabaseError::PoolExhausted.is_connection_error());
        assert!(!DatabaseError::QueryFailed("x".into()).is_constraint_violation());
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(error.is_not_found());
    }
}
