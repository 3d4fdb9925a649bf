//! Resolvers: the per-tick state updates of the simulation.
//!
//! Each resolver owns one rule of the world and applies it to the arena once
//! per tick, recording what happened in the [`EventLog`]. The game runs them
//! in a fixed order:
//!
//! 1. [`ProductionResolver`]: owned planets grow on a fixed cadence
//! 2. [`MovementResolver`]: fleets advance; arrivals land via [`resolve_arrival`]
//!
//! Controller decisions and the win check happen after the resolvers, in
//! [`Game::step`](crate::game::Game::step).

mod combat;
mod event;
mod movement;
mod production;

pub use combat::{resolve_arrival, ArrivalOutcome};
pub use event::EventLog;
pub use movement::MovementResolver;
pub use production::ProductionResolver;

use crate::arena::Arena;

/// One rule applied to the arena every tick.
///
/// # Example
///
/// ```
/// use planetwar_core::arena::Arena;
/// use planetwar_core::resolver::{EventLog, Resolver};
///
/// struct Noop;
///
/// impl Resolver for Noop {
///     fn name(&self) -> &'static str {
///         "noop"
///     }
///
///     fn resolve(&mut self, _arena: &mut Arena, _events: &mut EventLog) {}
/// }
///
/// let mut resolver = Noop;
/// resolver.resolve(&mut Arena::default(), &mut EventLog::new());
/// ```
pub trait Resolver {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Applies this rule for one tick.
    fn resolve(&mut self, arena: &mut Arena, events: &mut EventLog);
}

/// The resolvers of a standard game, in execution order.
#[must_use]
pub fn default_resolvers(production_interval: u64) -> Vec<Box<dyn Resolver>> {
    vec![
        Box::new(ProductionResolver::new(production_interval)),
        Box::new(MovementResolver::new()),
    ]
}
