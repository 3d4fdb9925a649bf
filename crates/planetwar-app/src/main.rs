//! Headless Planet War runner.
//!
//! Plays scripted rounds of the game at the configured tick rate, with an
//! autopilot standing in for the human player, and logs progress through
//! `tracing`. See [`settings`] for the environment variables it reads.

mod autopilot;
mod clock;
mod renderer;
mod settings;

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use planetwar_core::entity::Faction;
use planetwar_core::input::{InputEvent, Key};
use planetwar_core::output::Event;
use planetwar_core::render::{Background, Frame, Renderer};
use planetwar_core::resolver::ArrivalOutcome;
use planetwar_core::Game;
use tracing::{info, warn};

use crate::autopilot::Autopilot;
use crate::clock::FixedClock;
use crate::renderer::LogRenderer;
use crate::settings::Settings;

fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::from_env()?;
    info!(
        seed = settings.config.seed,
        rounds = settings.rounds,
        paced = settings.paced,
        max_ticks = settings.max_ticks,
        "planetwar starting"
    );

    let background = Background::load(&settings.background);
    let game = Game::new(settings.config.clone()).context("failed to start game")?;
    Runner::new(game, &settings, background).run()
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Won(Faction),
    TimedOut,
}

/// Per-round tallies built from the event stream.
#[derive(Debug, Default)]
struct RoundStats {
    launched: [u32; 2],
    captures: [u32; 2],
    produced: u64,
}

impl RoundStats {
    fn slot(faction: Faction) -> usize {
        match faction {
            Faction::Player => 0,
            Faction::Ai => 1,
        }
    }

    fn record(&mut self, event: &Event) {
        match event {
            Event::FleetLaunched { faction, .. } => self.launched[Self::slot(*faction)] += 1,
            Event::FleetArrived {
                faction,
                outcome: ArrivalOutcome::Captured { .. },
                ..
            } => self.captures[Self::slot(*faction)] += 1,
            Event::ShipsProduced { total } => self.produced += u64::from(*total),
            Event::FleetArrived { .. }
            | Event::SelectionChanged { .. }
            | Event::GameOver { .. }
            | Event::Restarted => {}
        }
    }
}

struct Runner {
    game: Game,
    autopilot: Autopilot,
    renderer: LogRenderer,
    background: Background,
    clock: FixedClock,
    rounds: u32,
    round: u32,
    paced: bool,
    max_ticks: u64,
    stats: RoundStats,
}

impl Runner {
    fn new(game: Game, settings: &Settings, background: Background) -> Self {
        let tick_rate = game.config().tick_rate;
        Self {
            autopilot: Autopilot::new(&game),
            renderer: LogRenderer::new(tick_rate),
            background,
            clock: FixedClock::new(tick_rate, Instant::now()),
            rounds: settings.rounds,
            round: 1,
            paced: settings.paced,
            max_ticks: settings.max_ticks,
            stats: RoundStats::default(),
            game,
        }
    }

    fn run(mut self) -> Result<()> {
        loop {
            let due = if self.paced {
                let now = Instant::now();
                let due = self.clock.due(now);
                if due == 0 {
                    thread::sleep(self.clock.until_next(now));
                    continue;
                }
                due
            } else {
                1
            };

            for _ in 0..due {
                if let Some(end) = self.tick()? {
                    if !self.finish_round(end)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs one frame: autopilot, simulation step, draw.
    fn tick(&mut self) -> Result<Option<RoundEnd>> {
        let started = Instant::now();

        self.autopilot.act(&mut self.game)?;
        self.game.step();
        for event in self.game.take_events() {
            self.stats.record(&event);
        }
        self.renderer
            .draw(&Frame::build(&self.game, &self.background));

        let elapsed = started.elapsed();
        if self.paced && elapsed > self.clock.step() {
            warn!(
                tick = self.game.tick(),
                elapsed_us = elapsed.as_micros(),
                "slow tick"
            );
        }

        Ok(match self.game.winner() {
            Some(winner) => Some(RoundEnd::Won(winner)),
            None if self.game.tick() >= self.max_ticks => Some(RoundEnd::TimedOut),
            None => None,
        })
    }

    /// Logs the result and starts the next round. Returns false when done.
    fn finish_round(&mut self, end: RoundEnd) -> Result<bool> {
        let stats = std::mem::take(&mut self.stats);
        let result = match end {
            RoundEnd::Won(Faction::Player) => "player wins",
            RoundEnd::Won(Faction::Ai) => "AI wins",
            RoundEnd::TimedOut => "timed out",
        };
        info!(
            round = self.round,
            ticks = self.game.tick(),
            player_fleets = stats.launched[0],
            ai_fleets = stats.launched[1],
            player_captures = stats.captures[0],
            ai_captures = stats.captures[1],
            produced = stats.produced,
            "round over: {result}"
        );

        if self.round >= self.rounds {
            return Ok(false);
        }
        self.round += 1;

        match end {
            RoundEnd::Won(_) => {
                self.game
                    .handle_input(InputEvent::KeyDown(Key::Space))
                    .context("failed to restart")?;
            }
            RoundEnd::TimedOut => self.game.restart().context("failed to restart")?,
        }
        self.game.take_events();
        info!(round = self.round, "new round");
        Ok(true)
    }
}
