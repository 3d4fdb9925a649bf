//! Planets: the stationary, capturable nodes of the map.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Owner, PlanetId};

/// A planet on the map.
///
/// Planets are created once at setup and never destroyed. Ship count and
/// ownership change through production and fleet arrivals; ownership in
/// particular only changes when a hostile fleet lands with more ships than the
/// garrison (see [`resolve_arrival`](crate::resolver::resolve_arrival)).
///
/// # Example
///
/// ```
/// use planetwar_core::entity::{Owner, Planet, PlanetId};
/// use glam::Vec2;
///
/// let mut planet = Planet::new(PlanetId::new(0), Vec2::new(100.0, 100.0), 30.0, Owner::Player, 10, 3);
/// planet.produce_ships();
/// assert_eq!(planet.ships(), 13);
/// assert!(planet.is_clicked(Vec2::new(120.0, 100.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    id: PlanetId,
    position: Vec2,
    radius: f32,
    pub(crate) owner: Owner,
    pub(crate) ships: u32,
    production_rate: u32,
    pub(crate) selected: bool,
}

impl Planet {
    /// Creates an unselected planet.
    #[must_use]
    pub const fn new(
        id: PlanetId,
        position: Vec2,
        radius: f32,
        owner: Owner,
        ships: u32,
        production_rate: u32,
    ) -> Self {
        Self {
            id,
            position,
            radius,
            owner,
            ships,
            production_rate,
            selected: false,
        }
    }

    /// Returns the planet's identifier.
    #[must_use]
    pub const fn id(&self) -> PlanetId {
        self.id
    }

    /// Returns the planet's centre.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the planet's radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the current holder.
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Returns the garrison size.
    #[must_use]
    pub const fn ships(&self) -> u32 {
        self.ships
    }

    /// Returns the ships added per production cycle.
    #[must_use]
    pub const fn production_rate(&self) -> u32 {
        self.production_rate
    }

    /// Returns true if the player has this planet selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Adds one production cycle to the garrison.
    ///
    /// Neutral planets never produce. Returns the number of ships added.
    pub fn produce_ships(&mut self) -> u32 {
        match self.owner {
            Owner::Neutral => 0,
            Owner::Player | Owner::Ai => {
                self.ships = self.ships.saturating_add(self.production_rate);
                self.production_rate
            }
        }
    }

    /// Returns true if `point` lies on the planet's disc (edge included).
    #[must_use]
    pub fn is_clicked(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius
    }

    /// Returns the distance between this planet's centre and another's.
    #[must_use]
    pub fn distance_to(&self, other: &Planet) -> f32 {
        self.position.distance(other.position)
    }

    /// Removes half the garrison (rounded down) for launching a fleet.
    ///
    /// Returns `None`, leaving the garrison untouched, when the half would be
    /// zero ships.
    pub(crate) fn take_half(&mut self) -> Option<u32> {
        let half = self.ships / 2;
        if half == 0 {
            return None;
        }
        self.ships -= half;
        Some(half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(owner: Owner, ships: u32, rate: u32) -> Planet {
        Planet::new(PlanetId::new(0), Vec2::new(100.0, 100.0), 20.0, owner, ships, rate)
    }

    mod production_tests {
        use super::*;

        #[test]
        fn owned_planets_produce() {
            let mut p = planet(Owner::Player, 10, 4);
            assert_eq!(p.produce_ships(), 4);
            assert_eq!(p.ships(), 14);

            let mut a = planet(Owner::Ai, 0, 5);
            a.produce_ships();
            a.produce_ships();
            assert_eq!(a.ships(), 10);
        }

        #[test]
        fn neutral_planets_never_produce() {
            let mut p = planet(Owner::Neutral, 7, 5);
            assert_eq!(p.produce_ships(), 0);
            assert_eq!(p.ships(), 7);
        }

        #[test]
        fn production_saturates() {
            let mut p = planet(Owner::Player, u32::MAX - 1, 5);
            p.produce_ships();
            assert_eq!(p.ships(), u32::MAX);
        }
    }

    mod click_tests {
        use super::*;

        #[test]
        fn centre_and_edge_are_inside() {
            let p = planet(Owner::Neutral, 5, 1);
            assert!(p.is_clicked(Vec2::new(100.0, 100.0)));
            assert!(p.is_clicked(Vec2::new(120.0, 100.0)));
            assert!(p.is_clicked(Vec2::new(100.0, 80.0)));
        }

        #[test]
        fn outside_radius_is_not_clicked() {
            let p = planet(Owner::Neutral, 5, 1);
            assert!(!p.is_clicked(Vec2::new(120.5, 100.0)));
            assert!(!p.is_clicked(Vec2::new(115.0, 115.0)));
        }
    }

    mod take_half_tests {
        use super::*;

        #[test]
        fn takes_floor_of_half() {
            let mut p = planet(Owner::Player, 11, 1);
            assert_eq!(p.take_half(), Some(5));
            assert_eq!(p.ships(), 6);
        }

        #[test]
        fn single_ship_cannot_launch() {
            let mut p = planet(Owner::Player, 1, 1);
            assert_eq!(p.take_half(), None);
            assert_eq!(p.ships(), 1);
        }
    }
}
