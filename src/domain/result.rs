//! Result type alias for privault

use super::errors::PrivaultError;

/// Result type alias using [`PrivaultError`] as the error type
pub type Result<T> = std::result::Result<T, PrivaultError>;
