//! Crate-level tests that drive whole games.
//!
//! - `determinism.rs`: same seed and inputs give identical games
//! - `integration.rs`: end-to-end play, win detection and restart
//! - `helpers.rs`: scenario builders shared by both

mod helpers;

pub use helpers::*;
