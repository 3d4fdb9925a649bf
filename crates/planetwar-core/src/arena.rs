//! Arena module: the container for everything on the map.
//!
//! The Arena owns:
//! - The fixed set of planets, indexed by [`PlanetId`]
//! - The in-flight fleets, in a `BTreeMap` keyed by [`FleetId`]
//! - The simulation tick counter
//!
//! # Determinism
//!
//! Fleet IDs are assigned monotonically and never reused, so iterating the
//! `BTreeMap` visits fleets in launch order on every platform. Planets are a
//! plain `Vec` in generation order.
//!
//! # Example
//!
//! ```
//! use planetwar_core::arena::Arena;
//! use planetwar_core::entity::{Faction, Owner, Planet, PlanetId};
//! use glam::Vec2;
//!
//! let mut arena = Arena::new(vec![
//!     Planet::new(PlanetId::new(0), Vec2::new(100.0, 100.0), 20.0, Owner::Player, 20, 2),
//!     Planet::new(PlanetId::new(1), Vec2::new(400.0, 100.0), 20.0, Owner::Neutral, 5, 1),
//! ]);
//!
//! let fleet = arena.dispatch(Faction::Player, PlanetId::new(0), PlanetId::new(1)).unwrap();
//! assert_eq!(arena.fleet(fleet).unwrap().ships(), 10);
//! assert_eq!(arena.planet(PlanetId::new(0)).unwrap().ships(), 10);
//! ```

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::fleet::FleetStatus;
use crate::entity::{Faction, Fleet, FleetId, Owner, Planet, PlanetId};
use crate::error::CommandError;
use crate::resolver::ArrivalOutcome;

/// All planets and fleets of one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    /// Planets in generation order; a planet's ID is its index.
    planets: Vec<Planet>,
    /// In-flight fleets in launch order.
    fleets: BTreeMap<FleetId, Fleet>,
    /// Monotonically increasing fleet ID counter.
    next_fleet_id: u64,
    /// Completed simulation ticks.
    tick: u64,
}

impl Arena {
    /// Creates an arena holding `planets` and no fleets.
    ///
    /// Planet IDs must match their position in `planets`.
    #[must_use]
    pub fn new(planets: Vec<Planet>) -> Self {
        debug_assert!(planets
            .iter()
            .enumerate()
            .all(|(index, planet)| planet.id().index() == index));
        Self {
            planets,
            fleets: BTreeMap::new(),
            next_fleet_id: 0,
            tick: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Planets
    // -------------------------------------------------------------------------

    /// Returns all planets in ID order.
    #[must_use]
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Returns mutable access to all planets.
    pub fn planets_mut(&mut self) -> &mut [Planet] {
        &mut self.planets
    }

    /// Returns a planet by ID.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.index())
    }

    /// Returns a mutable planet by ID.
    pub fn planet_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.planets.get_mut(id.index())
    }

    /// Returns the first planet whose disc contains `point`.
    #[must_use]
    pub fn planet_at(&self, point: Vec2) -> Option<PlanetId> {
        self.planets
            .iter()
            .find(|planet| planet.is_clicked(point))
            .map(Planet::id)
    }

    /// Counts the planets held by `owner`.
    #[must_use]
    pub fn planet_count(&self, owner: Owner) -> usize {
        self.planets.iter().filter(|p| p.owner() == owner).count()
    }

    // -------------------------------------------------------------------------
    // Fleets
    // -------------------------------------------------------------------------

    /// Iterates fleets in launch order.
    pub fn fleets_sorted(&self) -> impl Iterator<Item = &Fleet> {
        self.fleets.values()
    }

    /// Returns a fleet by ID.
    #[must_use]
    pub fn fleet(&self, id: FleetId) -> Option<&Fleet> {
        self.fleets.get(&id)
    }

    /// Returns the number of fleets in flight.
    #[must_use]
    pub fn fleet_len(&self) -> usize {
        self.fleets.len()
    }

    /// Counts the fleets in flight for `faction`.
    #[must_use]
    pub fn fleet_count(&self, faction: Faction) -> usize {
        self.fleets
            .values()
            .filter(|f| f.faction() == faction)
            .count()
    }

    /// Sends half of `source`'s garrison to `target` on behalf of `faction`.
    ///
    /// The ships leave `source` immediately and the new fleet starts at its
    /// centre.
    ///
    /// # Errors
    ///
    /// - [`CommandError::UnknownPlanet`] if either planet does not exist
    /// - [`CommandError::SamePlanet`] if `source == target`
    /// - [`CommandError::NotOwned`] if `faction` does not hold `source`
    /// - [`CommandError::NoShips`] if half the garrison rounds down to zero
    pub fn dispatch(
        &mut self,
        faction: Faction,
        source: PlanetId,
        target: PlanetId,
    ) -> Result<FleetId, CommandError> {
        let source_planet = self
            .planet(source)
            .ok_or(CommandError::UnknownPlanet(source))?;
        if self.planet(target).is_none() {
            return Err(CommandError::UnknownPlanet(target));
        }
        if source == target {
            return Err(CommandError::SamePlanet(source));
        }
        if !source_planet.owner().is(faction) {
            return Err(CommandError::NotOwned {
                planet: source,
                faction,
            });
        }

        let ships = self.planets[source.index()]
            .take_half()
            .ok_or(CommandError::NoShips(source))?;

        let id = FleetId::new(self.next_fleet_id);
        let fleet = Fleet::launch(
            id,
            faction,
            &self.planets[source.index()],
            &self.planets[target.index()],
            ships,
        )
        .ok_or(CommandError::NoShips(source))?;
        self.next_fleet_id += 1;
        self.fleets.insert(id, fleet);
        Ok(id)
    }

    /// Inserts an already-built fleet, assigning it the next ID.
    ///
    /// Used by tests and tooling that need fleets without paying for them
    /// from a garrison.
    pub fn insert_fleet(
        &mut self,
        faction: Faction,
        source: PlanetId,
        target: PlanetId,
        ships: u32,
    ) -> Option<FleetId> {
        let id = FleetId::new(self.next_fleet_id);
        let fleet = Fleet::launch(id, faction, self.planet(source)?, self.planet(target)?, ships)?;
        self.next_fleet_id += 1;
        self.fleets.insert(id, fleet);
        Some(id)
    }

    /// Advances every fleet one tick and returns the IDs of those that arrived.
    ///
    /// Arrived fleets stay in the arena until [`Arena::land_fleet`] is called.
    pub(crate) fn advance_fleets(&mut self) -> Vec<FleetId> {
        self.fleets
            .values_mut()
            .filter_map(|fleet| {
                (fleet.update() == FleetStatus::Arrived).then(|| fleet.id())
            })
            .collect()
    }

    /// Removes a fleet and resolves its arrival on its destination.
    pub(crate) fn land_fleet(
        &mut self,
        id: FleetId,
    ) -> Option<(Fleet, ArrivalOutcome)> {
        let fleet = self.fleets.remove(&id)?;
        let destination = self.planets.get_mut(fleet.destination().index())?;
        let outcome = fleet.resolve_arrival(destination);
        Some((fleet, outcome))
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Returns the number of completed ticks.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the tick counter by one.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================
