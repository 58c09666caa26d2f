use thiserror::Error;

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur when parsing or validating a migration schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("table must be specified")]
    MissingTableName,

    #[error("table '{table}' has no hash key column")]
    MissingHashKey { table: String },

    #[error("name of {kind} must be specified")]
    UnnamedIndex { kind: &'static str },

    #[error("index '{name}' has no hash key")]
    IndexMissingHashKey { name: String },

    #[error("INCLUDE projection on index '{name}' must list non-key attributes")]
    IncludeWithoutNonKeys { name: String },
}
