//! # Core Library
//!
//! Configuration, error type, domain model, decorative layout and the page
//! component tree for the Antitoken landing page. Nothing in here depends on
//! the browser, so the whole page structure is testable on the host.

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod view;

// Re-export commonly used types
pub use config::{Cluster, SiteConfig};
pub use error::{AppError, Result};
pub use layout::{star_field, Star, STAR_COUNT, STAR_SEED};
pub use model::{PublicKey, TokenMint, TokenMints, VoteChoice, WalletSnapshot};
