use thiserror::Error;

/// Result type for placement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying planned sleeves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("sleeve family '{0}' is not loaded in the document")]
    SleeveFamilyMissing(String),

    #[error("document error: {0}")]
    Model(#[from] sleevegen_model::Error),
}
