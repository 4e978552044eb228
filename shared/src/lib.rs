//! # Shared Data Transfer Objects Library
//!
//! Wire types for signed votes and small display helpers used by the web
//! front end. They carry no browser dependencies so a backend collecting
//! ballots can reuse them unchanged.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::vote`]**: vote ballots and signed receipts
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Timestamps are RFC 3339 strings (`chrono` with the `serde` feature)
//! - Nonces are hyphenated UUID strings

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
