//! Scripted AI opponent.
//!
//! Each turn the AI flips a weighted coin:
//!
//! - **Attack**: pick a random own planet with more than one ship and a random
//!   planet it does not hold, and send half the garrison.
//! - **Reinforce**: with two or more planets, send half of the largest
//!   garrison to the smallest one. Ties pick the lowest planet ID.
//!
//! A turn with nothing eligible does nothing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::controller::Controller;
use crate::entity::{Faction, Owner, Planet};
use crate::output::Command;
use crate::world_view::WorldView;
use crate::GameRng;

/// The scripted controller.
///
/// # Example
///
/// ```
/// use planetwar_core::ai::ScriptedAi;
/// use planetwar_core::arena::Arena;
/// use planetwar_core::controller::Controller;
/// use planetwar_core::entity::{Faction, Owner, Planet, PlanetId};
/// use planetwar_core::output::Command;
/// use planetwar_core::world_view::WorldView;
/// use glam::Vec2;
///
/// let arena = Arena::new(vec![
///     Planet::new(PlanetId::new(0), Vec2::ZERO, 20.0, Owner::Player, 10, 1),
///     Planet::new(PlanetId::new(1), Vec2::new(200.0, 0.0), 20.0, Owner::Ai, 30, 1),
/// ]);
///
/// // Always attack: the only target is the player's planet.
/// let mut ai = ScriptedAi::new(Faction::Ai, 1.0);
/// let mut rng = planetwar_core::new_rng(1);
/// let commands = ai.decide(&WorldView::new(&arena), &mut rng);
/// assert_eq!(
///     commands,
///     vec![Command::Dispatch { faction: Faction::Ai, source: PlanetId::new(1), target: PlanetId::new(0) }]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedAi {
    faction: Faction,
    attack_probability: f64,
}

impl ScriptedAi {
    /// Creates an AI for `faction` that attacks with the given probability.
    ///
    /// The probability is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(faction: Faction, attack_probability: f64) -> Self {
        Self {
            faction,
            attack_probability: attack_probability.clamp(0.0, 1.0),
        }
    }

    fn attack(&self, own: &[&Planet], view: &WorldView<'_>, rng: &mut GameRng) -> Option<Command> {
        let sources: Vec<&Planet> = own.iter().copied().filter(|p| p.ships() > 1).collect();
        let source = sources.choose(rng)?;
        let targets: Vec<&Planet> = view.planets_not_of(self.faction).collect();
        let target = targets.choose(rng)?;
        Some(Command::Dispatch {
            faction: self.faction,
            source: source.id(),
            target: target.id(),
        })
    }

    fn reinforce(&self, own: &[&Planet]) -> Option<Command> {
        let (&first, rest) = own.split_first()?;
        if rest.is_empty() {
            return None;
        }

        let mut strongest = first;
        let mut weakest = first;
        for &planet in rest {
            if planet.ships() > strongest.ships() {
                strongest = planet;
            }
            if planet.ships() < weakest.ships() {
                weakest = planet;
            }
        }

        if strongest.id() == weakest.id() || strongest.ships() <= 1 {
            return None;
        }
        Some(Command::Dispatch {
            faction: self.faction,
            source: strongest.id(),
            target: weakest.id(),
        })
    }
}

impl Controller for ScriptedAi {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn faction(&self) -> Faction {
        self.faction
    }

    fn decide(&mut self, view: &WorldView<'_>, rng: &mut GameRng) -> Vec<Command> {
        let own: Vec<&Planet> = view.planets_of(Owner::from(self.faction)).collect();
        if own.is_empty() {
            return Vec::new();
        }

        let command = if rng.gen_bool(self.attack_probability) {
            self.attack(&own, view, rng)
        } else {
            self.reinforce(&own)
        };
        command.into_iter().collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
