//! Entity types for the planet war simulation.
//!
//! This module provides the two kinds of things that exist on the map:
//! - [`Planet`]: stationary, owned, produces ships
//! - [`Fleet`]: ships in transit between two planets
//!
//! and the identifiers and ownership types they share:
//! - [`PlanetId`] / [`FleetId`]: stable identifiers assigned by the arena
//! - [`Owner`]: who holds a planet (`Neutral`, `Player` or `Ai`)
//! - [`Faction`]: who can act (`Player` or `Ai`); only factions own fleets
//!
//! # Example
//!
//! ```
//! use planetwar_core::entity::{Faction, Owner};
//!
//! let owner: Owner = Faction::Ai.into();
//! assert_eq!(owner, Owner::Ai);
//! assert_eq!(Owner::Neutral.faction(), None);
//! assert_eq!(Faction::Player.opponent(), Faction::Ai);
//! ```

pub mod fleet;
pub mod planet;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use fleet::Fleet;
pub use planet::Planet;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a planet.
///
/// Planet IDs are the planet's index in generation order. Planet 0 is the
/// player's home and planet 1 the AI's home in a freshly generated map.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanetId(u32);

impl PlanetId {
    /// Creates a new `PlanetId` from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the identifier as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlanetId({})", self.0)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a fleet.
///
/// Fleet IDs increase monotonically for the lifetime of an arena and are
/// never reused, so iteration in ID order is launch order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FleetId(u64);

impl FleetId {
    /// Creates a new `FleetId` from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FleetId({})", self.0)
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Ownership
// =============================================================================

/// A side that issues orders: the human player or the scripted AI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The human player
    Player,
    /// The scripted opponent
    Ai,
}

impl Faction {
    /// Both factions in a fixed order.
    pub const ALL: [Self; 2] = [Self::Player, Self::Ai];

    /// Returns the other faction.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Ai => write!(f, "AI"),
        }
    }
}

/// Holder of a planet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Unclaimed; never produces ships
    #[default]
    Neutral,
    /// Held by the human player
    Player,
    /// Held by the scripted opponent
    Ai,
}

impl Owner {
    /// Every owner in display order.
    pub const ALL: [Self; 3] = [Self::Player, Self::Ai, Self::Neutral];

    /// Returns the faction behind this owner, or `None` for neutral planets.
    #[must_use]
    pub const fn faction(self) -> Option<Faction> {
        match self {
            Self::Neutral => None,
            Self::Player => Some(Faction::Player),
            Self::Ai => Some(Faction::Ai),
        }
    }

    /// Returns true if this is the given faction.
    #[must_use]
    pub const fn is(self, faction: Faction) -> bool {
        matches!(
            (self, faction),
            (Self::Player, Faction::Player) | (Self::Ai, Faction::Ai)
        )
    }
}

impl From<Faction> for Owner {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Player => Self::Player,
            Faction::Ai => Self::Ai,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "Neutral"),
            Self::Player => write!(f, "Player"),
            Self::Ai => write!(f, "AI"),
        }
    }
}
