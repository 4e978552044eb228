//! # Domain Model
//!
//! Wallet identities, connection snapshots and vote options.

pub mod vote;
pub mod wallet;

pub use vote::{TokenMint, TokenMints, VoteChoice};
pub use wallet::{PublicKey, WalletSnapshot};
