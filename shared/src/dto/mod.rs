//! # Data Transfer Objects (DTOs)
//!
//! - [`vote`] - Vote ballots and signed vote receipts
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "ballot": {
//!     "wallet": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
//!     "option": "A",
//!     "mint": "ehsT5tCvRyzYC1fTfHKv87kawGuTmEgXhSpytUgARPw",
//!     "cluster": "mainnet-beta",
//!     "nonce": "6f1c0b7e-9a53-4b8e-8d56-2b7f2d0f3c11",
//!     "issued_at": "2024-01-01T00:00:00Z"
//!   },
//!   "signature": "3yZe7d..."
//! }
//! ```

pub mod vote;

pub use vote::*;
