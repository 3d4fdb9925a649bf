//! Outputs exchanged between controllers, resolvers and the game loop.
//!
//! - [`Command`]: a proposal from a controller (AI or player) to change state.
//!   Commands are validated when applied and may be rejected.
//! - [`Event`]: a record of something that happened during a tick, kept for
//!   front ends and tests.

use serde::{Deserialize, Serialize};

use crate::entity::{Faction, FleetId, PlanetId};
use crate::resolver::ArrivalOutcome;

// =============================================================================
// Command
// =============================================================================

/// A request to change game state.
///
/// # Variants
///
/// - `Dispatch`: send half of a planet's garrison to another planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Launch a fleet with half of `source`'s ships toward `target`.
    Dispatch {
        /// Faction issuing the order; must hold `source`
        faction: Faction,
        /// Planet the ships leave from
        source: PlanetId,
        /// Planet the fleet heads for
        target: PlanetId,
    },
}

impl Command {
    /// Returns the faction that issued this command.
    #[must_use]
    pub const fn faction(&self) -> Faction {
        match self {
            Self::Dispatch { faction, .. } => *faction,
        }
    }
}

// =============================================================================
// Event
// =============================================================================

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A fleet left its origin.
    FleetLaunched {
        /// The new fleet
        fleet: FleetId,
        /// Owner of the fleet
        faction: Faction,
        /// Planet the ships left
        origin: PlanetId,
        /// Planet the fleet heads for
        destination: PlanetId,
        /// Ships aboard
        ships: u32,
    },
    /// A fleet reached its destination and was removed.
    FleetArrived {
        /// The fleet that landed
        fleet: FleetId,
        /// Owner of the fleet
        faction: Faction,
        /// Planet it landed on
        destination: PlanetId,
        /// Ships aboard
        ships: u32,
        /// What the landing did to the planet
        outcome: ArrivalOutcome,
    },
    /// A production cycle ran.
    ShipsProduced {
        /// Ships added across all owned planets
        total: u32,
    },
    /// The player's selection changed.
    SelectionChanged {
        /// Newly selected planet, or `None` when cleared
        selected: Option<PlanetId>,
    },
    /// One faction was eliminated.
    GameOver {
        /// The surviving faction
        winner: Faction,
        /// Tick on which the game ended
        tick: u64,
    },
    /// A fresh map was generated.
    Restarted,
}
