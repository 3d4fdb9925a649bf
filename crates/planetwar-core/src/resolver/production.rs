//! Ship production on a fixed cadence.

use crate::arena::Arena;
use crate::output::Event;

use super::{EventLog, Resolver};

/// Adds each owned planet's production rate to its garrison every
/// `interval` ticks.
///
/// The resolver keeps its own countdown, so production timing is independent
/// of when fleets launch or the AI acts. With the default interval of 300 the
/// first cycle runs on the 300th tick of a game.
///
/// # Example
///
/// ```
/// use planetwar_core::arena::Arena;
/// use planetwar_core::entity::{Owner, Planet, PlanetId};
/// use planetwar_core::resolver::{EventLog, ProductionResolver, Resolver};
/// use glam::Vec2;
///
/// let mut arena = Arena::new(vec![
///     Planet::new(PlanetId::new(0), Vec2::ZERO, 20.0, Owner::Player, 10, 3),
/// ]);
/// let mut events = EventLog::new();
/// let mut production = ProductionResolver::new(2);
///
/// production.resolve(&mut arena, &mut events);
/// assert_eq!(arena.planets()[0].ships(), 10);
/// production.resolve(&mut arena, &mut events);
/// assert_eq!(arena.planets()[0].ships(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct ProductionResolver {
    interval: u64,
    timer: u64,
}

impl ProductionResolver {
    /// Creates a resolver that produces every `interval` ticks.
    #[must_use]
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            timer: 0,
        }
    }

    /// Ticks counted since the last production cycle.
    #[must_use]
    pub fn timer(&self) -> u64 {
        self.timer
    }
}

impl Resolver for ProductionResolver {
    fn name(&self) -> &'static str {
        "production"
    }

    fn resolve(&mut self, arena: &mut Arena, events: &mut EventLog) {
        self.timer += 1;
        if self.timer < self.interval {
            return;
        }
        self.timer = 0;

        let total = arena
            .planets_mut()
            .iter_mut()
            .fold(0_u32, |total, planet| total.saturating_add(planet.produce_ships()));
        events.record(Event::ShipsProduced { total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Owner, Planet, PlanetId};
    use glam::Vec2;

    fn arena() -> Arena {
        Arena::new(vec![
            Planet::new(PlanetId::new(0), Vec2::ZERO, 20.0, Owner::Player, 10, 2),
            Planet::new(PlanetId::new(1), Vec2::new(200.0, 0.0), 20.0, Owner::Ai, 10, 5),
            Planet::new(PlanetId::new(2), Vec2::new(400.0, 0.0), 20.0, Owner::Neutral, 10, 4),
        ])
    }

    #[test]
    fn produces_only_on_cadence() {
        let mut arena = arena();
        let mut events = EventLog::new();
        let mut production = ProductionResolver::new(300);

        for _ in 0..299 {
            production.resolve(&mut arena, &mut events);
        }
        assert_eq!(arena.planets()[0].ships(), 10);
        assert!(events.is_empty());

        production.resolve(&mut arena, &mut events);
        assert_eq!(arena.planets()[0].ships(), 12);
        assert_eq!(arena.planets()[1].ships(), 15);
        assert_eq!(production.timer(), 0);
    }

    #[test]
    fn neutral_planets_do_not_grow() {
        let mut arena = arena();
        let mut events = EventLog::new();
        let mut production = ProductionResolver::new(1);
        for _ in 0..5 {
            production.resolve(&mut arena, &mut events);
        }
        assert_eq!(arena.planets()[2].ships(), 10);
    }

    #[test]
    fn records_total_produced() {
        let mut arena = arena();
        let mut events = EventLog::new();
        ProductionResolver::new(1).resolve(&mut arena, &mut events);
        assert_eq!(events.take_events(), vec![Event::ShipsProduced { total: 7 }]);
    }
}
