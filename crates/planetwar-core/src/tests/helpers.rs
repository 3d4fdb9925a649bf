//! Scenario builders and state probes for crate-level tests.

use glam::Vec2;

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::controller::Controller;
use crate::entity::{Faction, Owner, Planet, PlanetId};
use crate::game::Game;
use crate::output::Command;
use crate::world_view::WorldView;
use crate::GameRng;

// =============================================================================
// Games
// =============================================================================

/// Creates a standard game with the given seed.
pub fn seeded_game(seed: u64) -> Game {
    Game::new(GameConfig::with_seed(seed)).expect("default config is valid")
}

/// Creates a game where the AI never acts.
pub fn game_with_idle_ai(planets: Vec<Planet>) -> Game {
    let mut game =
        Game::with_controller(GameConfig::with_seed(0), Box::new(Idle)).expect("valid config");
    *game.arena_mut() = Arena::new(planets);
    game
}

/// Builds a planet on a horizontal row, `x` pixels from the left.
pub fn planet_at(id: u32, x: f32, owner: Owner, ships: u32) -> Planet {
    Planet::new(PlanetId::new(id), Vec2::new(x, 200.0), 20.0, owner, ships, 2)
}

/// Steps until the game ends or `max_ticks` ticks have run.
pub fn run_until_over(game: &mut Game, max_ticks: u64) {
    for _ in 0..max_ticks {
        if !game.is_running() {
            break;
        }
        game.step();
    }
}

/// Steps `ticks` times.
pub fn run_ticks(game: &mut Game, ticks: u64) {
    for _ in 0..ticks {
        game.step();
    }
}

/// Returns `(owner, ships)` for every planet, in ID order.
pub fn snapshot(game: &Game) -> Vec<(Owner, u32)> {
    game.arena()
        .planets()
        .iter()
        .map(|p| (p.owner(), p.ships()))
        .collect()
}

/// Clicks the centre of a planet.
pub fn click_planet(game: &mut Game, id: PlanetId) -> crate::input::InputOutcome {
    let position = game.arena().planet(id).expect("planet exists").position();
    game.click(position)
}

// =============================================================================
// Controllers
// =============================================================================

/// A controller that never issues commands.
pub struct Idle;

impl Controller for Idle {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn faction(&self) -> Faction {
        Faction::Ai
    }

    fn decide(&mut self, _view: &WorldView<'_>, _rng: &mut GameRng) -> Vec<Command> {
        Vec::new()
    }
}
