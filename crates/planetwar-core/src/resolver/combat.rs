//! Arrival resolution: reinforcement and combat.
//!
//! When a fleet lands:
//! - On a planet of its own faction, the ships join the garrison.
//! - On any other planet, ships trade one-for-one with the garrison. The
//!   attacker captures the planet only with strictly more ships; a tie leaves
//!   the defender holding the planet with zero ships.

use serde::{Deserialize, Serialize};

use crate::entity::{Faction, Owner, Planet};

/// What a fleet's arrival did to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalOutcome {
    /// Same-faction landing; ships were added.
    Reinforced {
        /// Garrison after the landing
        garrison: u32,
    },
    /// The attacker outnumbered the garrison and took the planet.
    Captured {
        /// Holder before the landing
        previous: Owner,
        /// Attacker's surplus, now the garrison
        garrison: u32,
    },
    /// The garrison held.
    Repelled {
        /// Garrison after the losses
        garrison: u32,
    },
}

impl ArrivalOutcome {
    /// Returns the destination's garrison after the landing.
    #[must_use]
    pub const fn garrison(&self) -> u32 {
        match self {
            Self::Reinforced { garrison }
            | Self::Captured { garrison, .. }
            | Self::Repelled { garrison } => *garrison,
        }
    }
}

/// Lands `ships` ships of `faction` on `destination`.
///
/// # Example
///
/// ```
/// use planetwar_core::entity::{Faction, Owner, Planet, PlanetId};
/// use planetwar_core::resolver::{resolve_arrival, ArrivalOutcome};
/// use glam::Vec2;
///
/// let mut planet = Planet::new(PlanetId::new(3), Vec2::ZERO, 25.0, Owner::Ai, 10, 2);
/// let outcome = resolve_arrival(Faction::Player, 11, &mut planet);
///
/// assert_eq!(outcome, ArrivalOutcome::Captured { previous: Owner::Ai, garrison: 1 });
/// assert_eq!(planet.owner(), Owner::Player);
/// ```
pub fn resolve_arrival(faction: Faction, ships: u32, destination: &mut Planet) -> ArrivalOutcome {
    match destination.owner {
        owner if owner.is(faction) => {
            destination.ships = destination.ships.saturating_add(ships);
            ArrivalOutcome::Reinforced {
                garrison: destination.ships,
            }
        }
        previous @ (Owner::Neutral | Owner::Player | Owner::Ai) => {
            if ships > destination.ships {
                destination.owner = faction.into();
                destination.ships = ships - destination.ships;
                ArrivalOutcome::Captured {
                    previous,
                    garrison: destination.ships,
                }
            } else {
                destination.ships -= ships;
                ArrivalOutcome::Repelled {
                    garrison: destination.ships,
                }
            }
        }
    }
}
