//! # Utilities Library
//!
//! Shared input validation helpers.

pub mod validation;

// Re-export commonly used functions
pub use validation::{validate_not_empty, validate_pubkey, PUBKEY_LEN};
