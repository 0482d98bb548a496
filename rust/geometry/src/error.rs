use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("degenerate face: {0}")]
    DegenerateFace(String),

    #[error("degenerate solid: {0}")]
    DegenerateSolid(String),
}
