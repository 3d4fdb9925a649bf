//! Fleets: ships in transit between two planets.
//!
//! A fleet travels along the straight line from its origin to its
//! destination. Progress is a fraction of the trip advanced by a fixed
//! per-tick speed; bigger fleets are slightly slower, with a floor so every
//! fleet eventually arrives.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Faction, FleetId, Planet, PlanetId};
use crate::resolver::{resolve_arrival, ArrivalOutcome};

/// Trip fraction per tick for an infinitesimally small fleet.
pub const BASE_SPEED: f32 = 0.015;
/// Divisor applied to `ln(ships + 1)` before subtracting from [`BASE_SPEED`].
pub const SPEED_FACTOR: f32 = 1000.0;
/// Slowest possible speed, so every fleet arrives.
pub const MIN_SPEED: f32 = 0.001;

/// Result of advancing a fleet by one tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FleetStatus {
    /// Still travelling.
    InFlight,
    /// Progress reached the destination this tick.
    Arrived,
}

/// A group of ships travelling between planets.
///
/// Fleets only reference their planets by ID; they hold copies of the two
/// endpoint positions because planets never move.
///
/// # Example
///
/// ```
/// use planetwar_core::entity::{Faction, Fleet, FleetId, Owner, Planet, PlanetId};
/// use planetwar_core::entity::fleet::FleetStatus;
/// use glam::Vec2;
///
/// let a = Planet::new(PlanetId::new(0), Vec2::new(0.0, 0.0), 20.0, Owner::Player, 20, 1);
/// let b = Planet::new(PlanetId::new(1), Vec2::new(100.0, 0.0), 20.0, Owner::Neutral, 5, 1);
///
/// let mut fleet = Fleet::launch(FleetId::new(0), Faction::Player, &a, &b, 10).unwrap();
/// assert_eq!(fleet.update(), FleetStatus::InFlight);
/// assert!(fleet.position().x > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    id: FleetId,
    faction: Faction,
    origin: PlanetId,
    destination: PlanetId,
    from: Vec2,
    to: Vec2,
    position: Vec2,
    ships: u32,
    progress: f32,
    speed: f32,
}

impl Fleet {
    /// Creates a fleet at `origin` heading for `destination`.
    ///
    /// Returns `None` for an empty fleet; a fleet always carries at least one
    /// ship. The ships are not taken from `origin` here.
    #[must_use]
    pub fn launch(
        id: FleetId,
        faction: Faction,
        origin: &Planet,
        destination: &Planet,
        ships: u32,
    ) -> Option<Self> {
        if ships == 0 {
            return None;
        }
        Some(Self {
            id,
            faction,
            origin: origin.id(),
            destination: destination.id(),
            from: origin.position(),
            to: destination.position(),
            position: origin.position(),
            ships,
            progress: 0.0,
            speed: Self::speed_for(ships),
        })
    }

    /// Travel speed, in trip fraction per tick, of a fleet with `ships` ships.
    ///
    /// `max(BASE_SPEED - ln(ships + 1) / SPEED_FACTOR, MIN_SPEED)`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn speed_for(ships: u32) -> f32 {
        let modifier = (ships as f32 + 1.0).ln() / SPEED_FACTOR;
        (BASE_SPEED - modifier).max(MIN_SPEED)
    }

    /// Advances the fleet by one tick.
    ///
    /// When progress reaches 1 the fleet reports [`FleetStatus::Arrived`] and
    /// stays where it was; the caller resolves the arrival and removes it.
    pub fn update(&mut self) -> FleetStatus {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            return FleetStatus::Arrived;
        }
        self.position = self.from.lerp(self.to, self.progress);
        FleetStatus::InFlight
    }

    /// Lands the fleet on its destination planet.
    ///
    /// `destination` must be the planet this fleet was launched towards.
    pub fn resolve_arrival(&self, destination: &mut Planet) -> ArrivalOutcome {
        debug_assert_eq!(destination.id(), self.destination);
        resolve_arrival(self.faction, self.ships, destination)
    }

    /// Returns the fleet's identifier.
    #[must_use]
    pub const fn id(&self) -> FleetId {
        self.id
    }

    /// Returns the faction that launched the fleet.
    #[must_use]
    pub const fn faction(&self) -> Faction {
        self.faction
    }

    /// Returns the planet the fleet left.
    #[must_use]
    pub const fn origin(&self) -> PlanetId {
        self.origin
    }

    /// Returns the planet the fleet is heading for.
    #[must_use]
    pub const fn destination(&self) -> PlanetId {
        self.destination
    }

    /// Returns the fleet's current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the number of ships aboard.
    #[must_use]
    pub const fn ships(&self) -> u32 {
        self.ships
    }

    /// Returns the completed fraction of the trip.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Returns the per-tick progress increment.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Owner;

    fn endpoints() -> (Planet, Planet) {
        (
            Planet::new(PlanetId::new(0), Vec2::new(0.0, 0.0), 20.0, Owner::Player, 40, 1),
            Planet::new(PlanetId::new(1), Vec2::new(300.0, 400.0), 20.0, Owner::Ai, 10, 1),
        )
    }

    mod speed_tests {
        use super::*;

        #[test]
        fn small_fleet_is_near_base_speed() {
            let expected = BASE_SPEED - 2.0_f32.ln() / SPEED_FACTOR;
            assert!((Fleet::speed_for(1) - expected).abs() < 1e-7);
        }

        #[test]
        fn bigger_fleets_are_slower() {
            assert!(Fleet::speed_for(100) < Fleet::speed_for(10));
            assert!(Fleet::speed_for(10) < Fleet::speed_for(1));
        }

        #[test]
        fn speed_is_floored() {
            assert!((Fleet::speed_for(u32::MAX) - MIN_SPEED).abs() < f32::EPSILON);
        }
    }

    mod launch_tests {
        use super::*;

        #[test]
        fn empty_fleet_is_rejected() {
            let (a, b) = endpoints();
            assert!(Fleet::launch(FleetId::new(0), Faction::Player, &a, &b, 0).is_none());
        }

        #[test]
        fn launch_starts_at_origin() {
            let (a, b) = endpoints();
            let fleet = Fleet::launch(FleetId::new(3), Faction::Player, &a, &b, 20).unwrap();
            assert_eq!(fleet.position(), a.position());
            assert_eq!(fleet.origin(), a.id());
            assert_eq!(fleet.destination(), b.id());
            assert_eq!(fleet.progress(), 0.0);
            assert_eq!(fleet.ships(), 20);
        }
    }

    mod update_tests {
        use super::*;

        #[test]
        fn position_interpolates_linearly() {
            let (a, b) = endpoints();
            let mut fleet = Fleet::launch(FleetId::new(0), Faction::Player, &a, &b, 5).unwrap();
            fleet.update();
            let expected = a.position().lerp(b.position(), fleet.progress());
            assert!(fleet.position().distance(expected) < 1e-4);
            // On the segment from (0,0) to (300,400): y/x stays 4/3
            assert!((fleet.position().y * 3.0 - fleet.position().x * 4.0).abs() < 1e-3);
        }

        #[test]
        fn arrives_once_progress_reaches_one() {
            let (a, b) = endpoints();
            let mut fleet = Fleet::launch(FleetId::new(0), Faction::Player, &a, &b, 10).unwrap();
            let mut ticks = 0;
            let mut last = fleet.progress();
            while fleet.update() == FleetStatus::InFlight {
                assert!(fleet.progress() > last);
                assert!(fleet.progress() < 1.0);
                last = fleet.progress();
                ticks += 1;
                assert!(ticks < 10_000, "fleet never arrived");
            }
            assert!(fleet.progress() >= 1.0);
            assert!(last < 1.0);
        }

        #[test]
        fn resolve_arrival_lands_on_destination() {
            let (a, mut b) = endpoints();
            let fleet = Fleet::launch(FleetId::new(0), Faction::Player, &a, &b, 15).unwrap();
            let outcome = fleet.resolve_arrival(&mut b);
            assert!(matches!(outcome, ArrivalOutcome::Captured { .. }));
            assert_eq!(b.owner(), Owner::Player);
            assert_eq!(b.ships(), 5);
        }
    }
}
