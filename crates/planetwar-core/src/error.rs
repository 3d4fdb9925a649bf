//! Error types for the Planet War core.
//!
//! Gameplay input is never an error from the player's point of view: stray
//! clicks and empty dispatches are ignored. The types here cover the cases
//! that are real failures (bad configuration, impossible planet layouts) and
//! the typed rejection reasons for commands, which the game logs and drops.

use thiserror::Error;

use crate::entity::{Faction, PlanetId};

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for fallible core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration failed validation or could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The initial planet layout could not be generated.
    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// A [`GameConfig`](crate::config::GameConfig) value is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// An inclusive range has its lower bound above its upper bound.
    #[error("range `{field}` is inverted: {min} > {max}")]
    InvertedRange {
        /// Name of the offending field
        field: &'static str,
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
    /// A value that must be strictly positive was zero.
    #[error("`{field}` must be greater than zero")]
    Zero {
        /// Name of the offending field
        field: &'static str,
    },
    /// A game needs one planet per faction at least.
    #[error("planet_count must be at least 2, got {0}")]
    TooFewPlanets(usize),
    /// The margins leave no room to place planets.
    #[error("playfield {width}x{height} leaves no room inside margin {margin}")]
    PlayfieldTooSmall {
        /// Playfield width
        width: u32,
        /// Playfield height
        height: u32,
        /// Border kept free of planet centres
        margin: u32,
    },
    /// A probability fell outside `[0, 1]`.
    #[error("`{field}` must be within [0, 1], got {value}")]
    Probability {
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Planet placement gave up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// Rejection sampling hit the attempt limit for one planet.
    #[error(
        "could not place planet {index} at least {min_separation} apart from the others \
         after {attempts} attempts"
    )]
    PlacementExhausted {
        /// Index of the planet that could not be placed
        index: usize,
        /// Attempts made for that planet
        attempts: u32,
        /// Required minimum distance between planet centres
        min_separation: u32,
    },
}

/// Why a dispatch command was dropped.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Commands are only accepted while the game is running.
    #[error("the game is not running")]
    NotRunning,
    /// The referenced planet does not exist.
    #[error("unknown planet {0}")]
    UnknownPlanet(PlanetId),
    /// The source planet is not owned by the commanding faction.
    #[error("planet {planet} is not owned by {faction}")]
    NotOwned {
        /// Source planet
        planet: PlanetId,
        /// Faction that issued the command
        faction: Faction,
    },
    /// Source and target are the same planet.
    #[error("cannot dispatch from planet {0} to itself")]
    SamePlanet(PlanetId),
    /// Half the garrison rounds down to zero ships.
    #[error("planet {0} has no ships to spare")]
    NoShips(PlanetId),
}
