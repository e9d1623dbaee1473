//! Provider error types

use thiserror::Error;

/// Errors that can occur during value resolution
///
/// A missing value is never an error: providers report it as `Ok(None)`.
/// The only failure the core itself produces is a conversion function
/// rejecting the winning raw value.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A conversion function rejected the winning raw value
    #[error("conversion failed: {0}")]
    Conversion(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Create a conversion error
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(message.into())
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
