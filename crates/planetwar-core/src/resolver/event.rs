//! Event log for front ends and tests.
//!
//! The `EventLog` collects [`Event`]s as resolvers and the game produce
//! them. Nothing in the simulation reads it back; front ends drain it with
//! [`EventLog::take_events`] after each frame to drive sounds, effects or
//! statistics.
//!
//! Every recorded event is also emitted through `tracing`: game-level events
//! at `info`, fleet traffic at `debug` and production at `trace`.

use tracing::{debug, info, trace};

use crate::output::Event;

/// Ordered record of the events since the last drain.
///
/// # Example
///
/// ```
/// use planetwar_core::output::Event;
/// use planetwar_core::resolver::EventLog;
///
/// let mut log = EventLog::new();
/// log.record(Event::Restarted);
/// assert_eq!(log.len(), 1);
///
/// let events = log.take_events();
/// assert_eq!(events, vec![Event::Restarted]);
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event and traces it.
    pub fn record(&mut self, event: Event) {
        match &event {
            Event::FleetLaunched {
                fleet,
                faction,
                origin,
                destination,
                ships,
            } => debug!(%fleet, %faction, %origin, %destination, ships, "fleet launched"),
            Event::FleetArrived {
                fleet,
                faction,
                destination,
                ships,
                outcome,
            } => debug!(%fleet, %faction, %destination, ships, ?outcome, "fleet arrived"),
            Event::ShipsProduced { total } => trace!(total, "production cycle"),
            Event::SelectionChanged { selected } => trace!(?selected, "selection changed"),
            Event::GameOver { winner, tick } => info!(%winner, tick, "game over"),
            Event::Restarted => info!("game restarted"),
        }
        self.events.push(event);
    }

    /// Drains and returns all recorded events in order.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Returns the recorded events without draining them.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
