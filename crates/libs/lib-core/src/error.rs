//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`AppError`] used by the
//! configuration loader, the domain model and the wallet bridge in the web
//! front end. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! - [`Config`](AppError::Config): a build-time setting is missing or malformed
//! - [`InvalidInput`](AppError::InvalidInput): a value failed validation (e.g. a public key)
//! - [`Wallet`](AppError::Wallet): the browser wallet refused or failed a request
//! - [`Encoding`](AppError::Encoding): signature or payload encoding failed
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_choice(tag: &str) -> Result<char> {
//!     match tag {
//!         "A" => Ok('A'),
//!         "B" => Ok('B'),
//!         other => Err(AppError::InvalidInput(format!("unknown vote option {other}"))),
//!     }
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
///
/// Each variant includes a descriptive `String` for context. The `#[error]` attribute
/// from `thiserror` provides automatic `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error while resolving build-time settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input validation error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wallet error (not installed, rejected by the user, no public key).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Data encoding error (base58 signatures, ballot serialization).
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl AppError {
    /// Get a user-friendly error message suitable for rendering in the page.
    ///
    /// Configuration and encoding problems are not actionable for a visitor,
    /// so they collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::Wallet(msg) => msg.clone(),
            AppError::Config(_) | AppError::Encoding(_) => {
                "Something went wrong, please reload the page".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category() {
        let err = AppError::Wallet("Phantom wallet not found".to_string());
        assert_eq!(err.to_string(), "Wallet error: Phantom wallet not found");
    }

    #[test]
    fn test_user_message_hides_internal_errors() {
        let err = AppError::Config("ANTITOKEN_CLUSTER must be one of ...".to_string());
        assert_eq!(err.user_message(), "Something went wrong, please reload the page");

        let err = AppError::Wallet("User rejected the request".to_string());
        assert_eq!(err.user_message(), "User rejected the request");
    }
}
