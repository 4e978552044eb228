//! Client-side state

pub mod wallet;
