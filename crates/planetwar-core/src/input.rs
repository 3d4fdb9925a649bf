//! Input events delivered by the windowing layer.
//!
//! Front ends translate their native events into [`InputEvent`]s and hand
//! them to [`Game::handle_input`](crate::game::Game::handle_input). Only
//! pointer releases and the restart key matter to the game; everything else
//! maps to [`Key::Other`] and is ignored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::{FleetId, PlanetId};

/// Keys the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Restarts a finished game.
    Space,
    /// Any other key.
    Other,
}

/// A user input event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A pointer button was released.
    PointerUp {
        /// Pointer position in playfield pixels
        position: Vec2,
    },
    /// A key was pressed.
    KeyDown(Key),
    /// The window was closed.
    Quit,
}

impl InputEvent {
    /// Shorthand for a pointer release at `(x, y)`.
    #[must_use]
    pub fn click(x: f32, y: f32) -> Self {
        Self::PointerUp {
            position: Vec2::new(x, y),
        }
    }
}

/// What handling an input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed.
    Ignored,
    /// A player planet became selected.
    Selected(PlanetId),
    /// The selection was cleared without launching anything.
    Deselected,
    /// A fleet left the previously selected planet.
    Dispatched(FleetId),
    /// A new map was generated.
    Restarted,
    /// The front end should shut down.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_builds_pointer_event() {
        assert_eq!(
            InputEvent::click(3.0, 4.0),
            InputEvent::PointerUp {
                position: Vec2::new(3.0, 4.0)
            }
        );
    }
}
