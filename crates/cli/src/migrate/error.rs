//! Error types for migration operations.

use dynamigrate_core::encode::EncodeError;
use dynamigrate_core::schema::SchemaError;
use thiserror::Error;

/// Result type alias for migrate module.
pub type Result<T> = std::result::Result<T, MigrateError>;

/// Errors that can occur while applying or destroying a migration.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("seed item error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Table '{table_name}' already exists (set dropIfExists to replace it)")]
    TableAlreadyExists { table_name: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Timeout waiting for table '{table_name}' to become active")]
    TableActivationTimeout { table_name: String },

    #[error("Timeout waiting for table '{table_name}' to be deleted")]
    TableDeletionTimeout { table_name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_already_exists_display() {
        let error = MigrateError::TableAlreadyExists {
            table_name: "users".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table 'users' already exists (set dropIfExists to replace it)"
        );
    }

    #[test]
    fn test_schema_error_wraps_with_prefix() {
        let error = MigrateError::from(SchemaError::MissingTableName);
        assert_eq!(error.to_string(), "schema error: table must be specified");
    }

    #[test]
    fn test_user_cancelled_display() {
        assert_eq!(
            MigrateError::UserCancelled.to_string(),
            "Operation cancelled by user"
        );
    }
}
