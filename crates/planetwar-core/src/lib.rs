//! # Planet War Core
//!
//! Deterministic simulation core for Planet War, a small real-time strategy
//! game: the player and a scripted AI each start with one planet and fight
//! over neutral ones by sending fleets carrying half a planet's garrison.
//!
//! ## Architecture
//!
//! - **Entities**: [`Planet`](entity::Planet)s and [`Fleet`](entity::Fleet)s,
//!   held by the [`Arena`](arena::Arena)
//! - **Controllers**: decide for a faction from a read-only
//!   [`WorldView`](world_view::WorldView) and emit
//!   [`Command`](output::Command)s
//! - **Resolvers**: apply the rules each tick (production, then movement and
//!   combat) and record [`Event`](output::Event)s
//! - **Game**: owns all of the above, routes input, checks the win condition
//!   and handles restart
//!
//! Rendering and input polling are left to front ends; [`render::Frame`]
//! describes what to draw.
//!
//! ## Determinism
//!
//! All randomness comes from one [`GameRng`] seeded from
//! [`GameConfig::seed`](config::GameConfig::seed). Same seed and same inputs
//! give the same game.
//!
//! ## Usage
//!
//! ```
//! use planetwar_core::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::with_seed(7))?;
//! while game.is_running() && game.tick() < 600 {
//!     game.step();
//! }
//! for event in game.take_events() {
//!     println!("{event:?}");
//! }
//! # Ok::<(), planetwar_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use rand::SeedableRng;

pub mod ai;
pub mod arena;
pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod output;
pub mod render;
pub mod resolver;
pub mod setup;
pub mod world_view;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, GamePhase};

/// The random number generator used throughout the simulation.
pub type GameRng = rand_chacha::ChaCha8Rng;

/// Creates a [`GameRng`] from a seed.
#[must_use]
pub fn new_rng(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests;
