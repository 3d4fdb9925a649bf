//! Fleet travel and arrival.

use crate::arena::Arena;
use crate::output::Event;

use super::{EventLog, Resolver};

/// Advances every fleet by its speed and lands the ones that arrive.
///
/// Fleets update in launch order. Arrivals are resolved after all fleets have
/// moved, in the same order; since movement never reads planet state this is
/// equivalent to landing each fleet as soon as it arrives.
#[derive(Debug, Clone, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Creates a new movement resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for MovementResolver {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn resolve(&mut self, arena: &mut Arena, events: &mut EventLog) {
        for id in arena.advance_fleets() {
            if let Some((fleet, outcome)) = arena.land_fleet(id) {
                events.record(Event::FleetArrived {
                    fleet: fleet.id(),
                    faction: fleet.faction(),
                    destination: fleet.destination(),
                    ships: fleet.ships(),
                    outcome,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Faction, Owner, Planet, PlanetId};
    use crate::resolver::ArrivalOutcome;
    use glam::Vec2;

    fn arena() -> Arena {
        Arena::new(vec![
            Planet::new(PlanetId::new(0), Vec2::ZERO, 20.0, Owner::Player, 50, 1),
            Planet::new(PlanetId::new(1), Vec2::new(500.0, 0.0), 20.0, Owner::Neutral, 10, 1),
        ])
    }

    #[test]
    fn fleet_is_removed_exactly_once() {
        let mut arena = arena();
        let mut events = EventLog::new();
        let mut movement = MovementResolver::new();
        let id = arena
            .insert_fleet(Faction::Player, PlanetId::new(0), PlanetId::new(1), 10)
            .unwrap();

        let mut last_progress = 0.0;
        let mut arrivals = 0;
        for _ in 0..2_000 {
            movement.resolve(&mut arena, &mut events);
            match arena.fleet(id) {
                Some(fleet) => {
                    assert!(fleet.progress() > last_progress);
                    last_progress = fleet.progress();
                }
                None => {
                    arrivals += events
                        .take_events()
                        .iter()
                        .filter(|e| matches!(e, Event::FleetArrived { fleet, .. } if *fleet == id))
                        .count();
                }
            }
        }
        assert_eq!(arrivals, 1);
        assert_eq!(arena.fleet_len(), 0);
    }

    #[test]
    fn arrival_applies_combat() {
        let mut arena = arena();
        let mut events = EventLog::new();
        let mut movement = MovementResolver::new();
        arena.insert_fleet(Faction::Player, PlanetId::new(0), PlanetId::new(1), 10);

        while arena.fleet_len() > 0 {
            movement.resolve(&mut arena, &mut events);
        }

        let target = arena.planet(PlanetId::new(1)).unwrap();
        assert_eq!(target.owner(), Owner::Neutral);
        assert_eq!(target.ships(), 0);
        assert!(events.events().iter().any(|e| matches!(
            e,
            Event::FleetArrived {
                outcome: ArrivalOutcome::Repelled { garrison: 0 },
                ..
            }
        )));
    }

    #[test]
    fn travel_time_follows_speed() {
        let mut arena = arena();
        let mut events = EventLog::new();
        let mut movement = MovementResolver::new();
        let id = arena
            .insert_fleet(Faction::Player, PlanetId::new(0), PlanetId::new(1), 10)
            .unwrap();
        let speed = arena.fleet(id).unwrap().speed();

        let mut expected = 0_u32;
        let mut progress = 0.0_f32;
        loop {
            expected += 1;
            progress += speed;
            if progress >= 1.0 {
                break;
            }
        }

        let mut ticks = 0_u32;
        while arena.fleet(id).is_some() {
            movement.resolve(&mut arena, &mut events);
            ticks += 1;
        }
        assert_eq!(ticks, expected);
    }
}
