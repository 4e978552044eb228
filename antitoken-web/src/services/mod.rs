//! Browser-facing services: wallet interop, vote signing and document setup

pub mod document;
pub mod vote;
pub mod wallet;
