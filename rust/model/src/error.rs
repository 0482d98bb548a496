use thiserror::Error;

/// Result type for document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when querying or mutating the document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("element not found in document")]
    ElementNotFound,

    #[error("element type not found in document")]
    ElementTypeNotFound,

    #[error("no element type named '{0}' is loaded")]
    UnknownTypeName(String),

    #[error("parameter '{0}' not found")]
    ParameterMissing(String),

    #[error("parameter '{name}' is stored as {actual}, expected {expected}")]
    ParameterStorage {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("element has no bounding box")]
    MissingBounds,

    #[error("element has no location point")]
    MissingLocation,
}
