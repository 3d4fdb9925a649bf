//! `WorldView` provides read-only access to game state.
//!
//! Controllers and renderers never touch the arena directly. They receive a
//! [`WorldView`] borrowed from the game for the duration of a decision or a
//! frame, which rules out mutation outside the game loop.
//!
//! # Example
//!
//! ```
//! use planetwar_core::arena::Arena;
//! use planetwar_core::entity::{Owner, Planet, PlanetId};
//! use planetwar_core::world_view::WorldView;
//! use glam::Vec2;
//!
//! let arena = Arena::new(vec![
//!     Planet::new(PlanetId::new(0), Vec2::new(100.0, 100.0), 20.0, Owner::Player, 12, 1),
//!     Planet::new(PlanetId::new(1), Vec2::new(300.0, 100.0), 20.0, Owner::Ai, 30, 1),
//! ]);
//! let view = WorldView::new(&arena);
//!
//! assert_eq!(view.planet_count(Owner::Ai), 1);
//! assert_eq!(view.planets_of(Owner::Player).count(), 1);
//! ```

use crate::arena::Arena;
use crate::entity::{Faction, Fleet, Owner, Planet, PlanetId};

// =============================================================================
// WorldView
// =============================================================================

/// Read-only view of the arena.
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    arena: &'a Arena,
}

impl<'a> WorldView<'a> {
    /// Creates a view over `arena`.
    #[must_use]
    pub fn new(arena: &'a Arena) -> Self {
        Self { arena }
    }

    /// Returns the number of completed ticks.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.arena.current_tick()
    }

    /// Returns every planet in ID order.
    #[must_use]
    pub fn planets(&self) -> &'a [Planet] {
        self.arena.planets()
    }

    /// Returns a planet by ID.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> Option<&'a Planet> {
        self.arena.planet(id)
    }

    /// Iterates the planets held by `owner` in ID order.
    pub fn planets_of(&self, owner: Owner) -> impl Iterator<Item = &'a Planet> + 'a {
        self.arena
            .planets()
            .iter()
            .filter(move |planet| planet.owner() == owner)
    }

    /// Iterates the planets not held by `faction`, neutral ones included.
    pub fn planets_not_of(&self, faction: Faction) -> impl Iterator<Item = &'a Planet> + 'a {
        self.arena
            .planets()
            .iter()
            .filter(move |planet| !planet.owner().is(faction))
    }

    /// Counts the planets held by `owner`.
    #[must_use]
    pub fn planet_count(&self, owner: Owner) -> usize {
        self.arena.planet_count(owner)
    }

    /// Iterates fleets in launch order.
    pub fn fleets(&self) -> impl Iterator<Item = &'a Fleet> + 'a {
        self.arena.fleets_sorted()
    }

    /// Counts the fleets in flight for `faction`.
    #[must_use]
    pub fn fleet_count(&self, faction: Faction) -> usize {
        self.arena.fleet_count(faction)
    }

    /// Sums the ships of `faction` on planets and in flight.
    #[must_use]
    pub fn total_ships(&self, faction: Faction) -> u64 {
        let on_planets: u64 = self
            .planets_of(faction.into())
            .map(|p| u64::from(p.ships()))
            .sum();
        let in_flight: u64 = self
            .fleets()
            .filter(|f| f.faction() == faction)
            .map(|f| u64::from(f.ships()))
            .sum();
        on_planets + in_flight
    }
}
