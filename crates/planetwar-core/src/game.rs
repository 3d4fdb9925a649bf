//! The game: setup, the per-tick loop, player input and the win condition.
//!
//! A [`Game`] owns everything about one match: config, random number
//! generator, arena, resolvers, the AI controller and the event log. There is
//! no global state; a front end holds a `Game` and calls, once per frame:
//!
//! 1. [`Game::handle_input`] for each pending input event
//! 2. [`Game::step`] to advance the simulation one tick
//! 3. [`Frame::build`](crate::render::Frame::build) to draw the result
//!
//! # Phases
//!
//! `Setup -> Running -> GameOver`. `GameOver` is terminal until the player
//! presses space, which regenerates the map and re-enters `Running`.
//!
//! # Tick order
//!
//! While running, one [`Game::step`]:
//! 1. Runs the resolvers (production cadence, then fleet movement and arrivals)
//! 2. Drops the player's selection if that planet was captured
//! 3. Checks the win condition; on game over the tick ends here
//! 4. Runs the AI on every `ai_interval`-th tick, tick 0 included
//! 5. Advances the tick counter
//!
//! # Win condition
//!
//! A faction is eliminated when it holds no planets *and* has none of its own
//! fleets in flight. The player's elimination is checked first.
//!
//! # Example
//!
//! ```
//! use planetwar_core::config::GameConfig;
//! use planetwar_core::game::Game;
//!
//! let mut game = Game::new(GameConfig::with_seed(42)).unwrap();
//! for _ in 0..120 {
//!     game.step();
//! }
//! assert_eq!(game.tick(), 120);
//! assert_eq!(game.arena().planets().len(), 10);
//! ```

use std::fmt;

use glam::Vec2;
use tracing::{debug, info};

use crate::ai::ScriptedAi;
use crate::arena::Arena;
use crate::config::GameConfig;
use crate::controller::Controller;
use crate::entity::{Faction, Fleet, FleetId, Owner, Planet, PlanetId};
use crate::error::{CommandError, Result};
use crate::input::{InputEvent, InputOutcome, Key};
use crate::output::{Command, Event};
use crate::resolver::{default_resolvers, EventLog, Resolver};
use crate::setup::generate_planets;
use crate::world_view::WorldView;
use crate::{new_rng, GameRng};

// =============================================================================
// GamePhase
// =============================================================================

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The map is being generated.
    Setup,
    /// Ticks advance and input is accepted.
    Running,
    /// One faction was eliminated; only restart is accepted.
    GameOver {
        /// The surviving faction
        winner: Faction,
    },
}

// =============================================================================
// Game
// =============================================================================

/// One match of planet war.
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    arena: Arena,
    phase: GamePhase,
    selected: Option<PlanetId>,
    resolvers: Vec<Box<dyn Resolver>>,
    ai: Box<dyn Controller>,
    events: EventLog,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("tick", &self.arena.current_tick())
            .field("planets", &self.arena.planets().len())
            .field("fleets", &self.arena.fleet_len())
            .field("selected", &self.selected)
            .field("ai", &self.ai.name())
            .field("seed", &self.config.seed)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a game against the scripted AI and generates the first map.
    ///
    /// # Errors
    ///
    /// Returns a config error if `config` is invalid, or a setup error if the
    /// planets cannot be placed.
    pub fn new(config: GameConfig) -> Result<Self> {
        let ai = ScriptedAi::new(Faction::Ai, config.ai_attack_probability);
        Self::with_controller(config, Box::new(ai))
    }

    /// Creates a game with a custom controller for the AI side.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_controller(config: GameConfig, ai: Box<dyn Controller>) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            rng: new_rng(config.seed),
            arena: Arena::default(),
            phase: GamePhase::Setup,
            selected: None,
            resolvers: Vec::new(),
            ai,
            events: EventLog::new(),
            config,
        };
        game.setup()?;
        info!(
            seed = game.config.seed,
            planets = game.arena.planets().len(),
            ai = game.ai.name(),
            "game started"
        );
        Ok(game)
    }

    /// Generates a fresh map and resets all per-match state.
    fn setup(&mut self) -> Result<()> {
        self.phase = GamePhase::Setup;
        let planets = generate_planets(&self.config, &mut self.rng)?;
        self.arena = Arena::new(planets);
        self.selected = None;
        self.resolvers = default_resolvers(self.config.production_interval);
        self.phase = GamePhase::Running;
        Ok(())
    }

    /// Discards the current match and starts a new one on a new map.
    ///
    /// The random stream continues, so the new layout differs from the old.
    ///
    /// # Errors
    ///
    /// Returns a setup error if the new planets cannot be placed.
    pub fn restart(&mut self) -> Result<()> {
        self.setup()?;
        self.events.record(Event::Restarted);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Simulation
    // -------------------------------------------------------------------------

    /// Advances the simulation by one tick. Does nothing unless running.
    pub fn step(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        for resolver in &mut self.resolvers {
            resolver.resolve(&mut self.arena, &mut self.events);
        }
        self.drop_lost_selection();

        if let Some(winner) = self.check_winner() {
            self.phase = GamePhase::GameOver { winner };
            self.set_selection(None);
            self.events.record(Event::GameOver {
                winner,
                tick: self.arena.current_tick(),
            });
            self.arena.advance_tick();
            return;
        }

        if self.arena.current_tick() % self.config.ai_interval == 0 {
            self.run_ai();
        }

        self.arena.advance_tick();
    }

    /// Returns the winner if a faction has been eliminated.
    ///
    /// A faction is out when it holds no planet and has no fleet of its own in
    /// flight. The player is checked first.
    #[must_use]
    pub fn check_winner(&self) -> Option<Faction> {
        Faction::ALL.into_iter().find_map(|faction| {
            let planets = self.arena.planet_count(faction.into());
            let fleets = self.arena.fleet_count(faction);
            (planets == 0 && fleets == 0).then(|| faction.opponent())
        })
    }

    fn run_ai(&mut self) {
        let commands = {
            let view = WorldView::new(&self.arena);
            self.ai.decide(&view, &mut self.rng)
        };
        for command in commands {
            if let Err(err) = self.apply_command(command) {
                debug!(controller = self.ai.name(), %err, "command rejected");
            }
        }
    }

    /// Validates and applies a command.
    ///
    /// # Errors
    ///
    /// Returns why the command was rejected; the game state is unchanged in
    /// that case.
    pub fn apply_command(&mut self, command: Command) -> std::result::Result<FleetId, CommandError> {
        if self.phase != GamePhase::Running {
            return Err(CommandError::NotRunning);
        }
        match command {
            Command::Dispatch {
                faction,
                source,
                target,
            } => {
                let fleet = self.arena.dispatch(faction, source, target)?;
                let ships = self.arena.fleet(fleet).map_or(0, Fleet::ships);
                self.events.record(Event::FleetLaunched {
                    fleet,
                    faction,
                    origin: source,
                    destination: target,
                    ships,
                });
                Ok(fleet)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Routes one input event.
    ///
    /// # Errors
    ///
    /// Only a restart can fail, with a setup error.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<InputOutcome> {
        match event {
            InputEvent::Quit => Ok(InputOutcome::Quit),
            InputEvent::KeyDown(Key::Space) if self.is_over() => {
                self.restart()?;
                Ok(InputOutcome::Restarted)
            }
            InputEvent::KeyDown(Key::Space | Key::Other) => Ok(InputOutcome::Ignored),
            InputEvent::PointerUp { position } => Ok(self.click(position)),
        }
    }

    /// Handles a pointer release at `point`.
    ///
    /// - Nothing selected: a click on a player planet selects it.
    /// - Something selected: a click on another planet sends half the selected
    ///   garrison there; any click clears the selection.
    pub fn click(&mut self, point: Vec2) -> InputOutcome {
        if self.phase != GamePhase::Running {
            return InputOutcome::Ignored;
        }
        let clicked = self.arena.planet_at(point);

        match self.selected {
            Some(selected) => {
                self.set_selection(None);
                let Some(target) = clicked.filter(|&target| target != selected) else {
                    return InputOutcome::Deselected;
                };
                let command = Command::Dispatch {
                    faction: Faction::Player,
                    source: selected,
                    target,
                };
                match self.apply_command(command) {
                    Ok(fleet) => InputOutcome::Dispatched(fleet),
                    Err(err) => {
                        debug!(%err, "player dispatch dropped");
                        InputOutcome::Deselected
                    }
                }
            }
            None => match clicked {
                Some(id) if self.owner_of(id) == Some(Owner::Player) => {
                    self.set_selection(Some(id));
                    InputOutcome::Selected(id)
                }
                Some(_) | None => InputOutcome::Ignored,
            },
        }
    }

    fn owner_of(&self, id: PlanetId) -> Option<Owner> {
        self.arena.planet(id).map(Planet::owner)
    }

    fn set_selection(&mut self, selected: Option<PlanetId>) {
        if self.selected == selected {
            return;
        }
        if let Some(previous) = self.selected.and_then(|id| self.arena.planet_mut(id)) {
            previous.selected = false;
        }
        if let Some(next) = selected.and_then(|id| self.arena.planet_mut(id)) {
            next.selected = true;
        }
        self.selected = selected;
        self.events.record(Event::SelectionChanged { selected });
    }

    fn drop_lost_selection(&mut self) {
        if let Some(id) = self.selected {
            if self.owner_of(id) != Some(Owner::Player) {
                self.set_selection(None);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the config this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns true while ticks advance.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Returns true once a faction has been eliminated.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Returns the winner of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<Faction> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            GamePhase::Setup | GamePhase::Running => None,
        }
    }

    /// Returns the number of completed ticks in this match.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.arena.current_tick()
    }

    /// Returns the planet the player has selected.
    #[must_use]
    pub fn selected(&self) -> Option<PlanetId> {
        self.selected
    }

    /// Returns the arena.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns a mutable reference to the arena.
    ///
    /// Use this for scenario setup before running steps; during play, state
    /// changes go through commands and resolvers.
    #[must_use]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Returns a read-only view for controllers and renderers.
    #[must_use]
    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(&self.arena)
    }

    /// Returns the events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// Drains the recorded events.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

// =============================================================================
// Tests
// =============================================================================
