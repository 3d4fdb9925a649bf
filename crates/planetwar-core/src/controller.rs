//! Controllers: the deciding side of a faction.
//!
//! A [`Controller`] looks at a read-only [`WorldView`] and proposes
//! [`Command`]s for its faction. It cannot mutate state; the game validates and
//! applies the commands afterwards, dropping any that are no longer legal.
//!
//! The game runs its AI controller every `ai_interval` ticks. Front ends may
//! drive the player's side with a controller too (the headless runner does).
//!
//! # Example
//!
//! ```
//! use planetwar_core::controller::Controller;
//! use planetwar_core::entity::Faction;
//! use planetwar_core::output::Command;
//! use planetwar_core::world_view::WorldView;
//! use planetwar_core::GameRng;
//!
//! /// Never does anything.
//! struct Idle;
//!
//! impl Controller for Idle {
//!     fn name(&self) -> &'static str {
//!         "idle"
//!     }
//!
//!     fn faction(&self) -> Faction {
//!         Faction::Ai
//!     }
//!
//!     fn decide(&mut self, _view: &WorldView<'_>, _rng: &mut GameRng) -> Vec<Command> {
//!         Vec::new()
//!     }
//! }
//! ```

use crate::entity::Faction;
use crate::output::Command;
use crate::world_view::WorldView;
use crate::GameRng;

/// Decision logic for one faction.
pub trait Controller {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The faction this controller plays.
    fn faction(&self) -> Faction;

    /// Proposes commands for the current state.
    ///
    /// All randomness must come from `rng` so that a seeded game replays the
    /// same way.
    fn decide(&mut self, view: &WorldView<'_>, rng: &mut GameRng) -> Vec<Command>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_is_object_safe() {
        fn _accepts_boxed(_controller: Box<dyn Controller>) {}
    }
}
