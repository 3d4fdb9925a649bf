//! Drives the player's side without a human.
//!
//! The autopilot runs the same scripted strategy as the AI, half an AI
//! interval out of phase, and plays its moves as pointer clicks so they go
//! through the ordinary selection path.

use planetwar_core::ai::ScriptedAi;
use planetwar_core::controller::Controller;
use planetwar_core::entity::Faction;
use planetwar_core::input::{InputEvent, InputOutcome};
use planetwar_core::output::Command;
use planetwar_core::{new_rng, Game, GameRng};
use tracing::debug;

/// Mixed into the game seed so the autopilot draws from its own stream.
const SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Scripted player that acts through clicks.
pub struct Autopilot {
    brain: ScriptedAi,
    rng: GameRng,
    interval: u64,
    phase: u64,
}

impl Autopilot {
    /// Creates an autopilot for `game`'s config.
    pub fn new(game: &Game) -> Self {
        let config = game.config();
        let interval = config.ai_interval.max(1);
        Self {
            brain: ScriptedAi::new(Faction::Player, config.ai_attack_probability),
            rng: new_rng(config.seed ^ SEED_SALT),
            interval,
            phase: interval / 2,
        }
    }

    /// Plays this tick's move, if any. Returns the input events sent.
    pub fn act(&mut self, game: &mut Game) -> anyhow::Result<Vec<InputEvent>> {
        if !game.is_running() || game.tick() % self.interval != self.phase {
            return Ok(Vec::new());
        }

        let commands = self.brain.decide(&game.view(), &mut self.rng);
        let mut sent = Vec::new();
        for command in commands {
            let Command::Dispatch { source, target, .. } = command;
            let (Some(from), Some(to)) = (game.arena().planet(source), game.arena().planet(target))
            else {
                continue;
            };
            let clicks = [
                InputEvent::PointerUp {
                    position: from.position(),
                },
                InputEvent::PointerUp {
                    position: to.position(),
                },
            ];
            for click in clicks {
                let outcome = game.handle_input(click)?;
                sent.push(click);
                if let InputOutcome::Dispatched(fleet) = outcome {
                    debug!(%fleet, %source, %target, "autopilot dispatched");
                }
            }
        }
        Ok(sent)
    }
}
