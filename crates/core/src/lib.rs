//! Shared primitives for all Rust crates in mcamp.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across mcamp crates.
pub type AppResult<T> = Result<T, AppError>;

/// Returns a required input value, naming the field when it is absent or
/// empty.
///
/// Any other value is returned unchanged, including whitespace-only strings.
pub fn required_value<'a>(field: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(AppError::MissingConfiguration(format!(
            "{field} must not be empty"
        ))),
        None => Err(AppError::MissingConfiguration(format!("{field} is required"))),
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required configuration or input field is absent or empty.
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// Inputs were present but the request artifact could not be assembled.
    #[error("assembly failure: {0}")]
    Assembly(String),

    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
