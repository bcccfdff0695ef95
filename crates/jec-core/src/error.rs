//! Error types for jec-core

use thiserror::Error;

/// Domain error for jet and missing-pt records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A record field is outside its physical domain
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
