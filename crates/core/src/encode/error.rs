use thiserror::Error;

/// Result type alias for encode operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while encoding a JSON value into an
/// `AttributeValue` tree. All of them are structural and terminal: the
/// input shape is wrong, so retrying the same call cannot succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("expected a JSON object at {path}, found {found}")]
    TypeMismatch { path: String, found: &'static str },

    #[error("maximum nesting depth ({limit}) exceeded at {path}")]
    DepthLimitExceeded { path: String, limit: usize },
}
