//! Draw lists for front ends.
//!
//! The core does not draw. [`Frame::build`] turns a [`Game`] into an ordered
//! list of [`DrawCommand`]s that a backend replays back to front, and a
//! [`Renderer`] consumes the frame. Everything here is plain data, so frames
//! can be inspected in tests or logged by a headless runner.
//!
//! Draw order:
//! 1. Background (image, or solid black)
//! 2. A thin line between every pair of planets
//! 3. Per planet: glow (owned only), body, outer ring, selection ring, label
//! 4. Per fleet: marker and label
//! 5. Status line
//! 6. Game-over overlay and result text

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entity::{Faction, Fleet, Owner, Planet};
use crate::game::Game;

// =============================================================================
// Colours
// =============================================================================

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha; 255 is opaque
    pub a: u8,
}

impl Color {
    /// Player blue.
    pub const PLAYER: Self = Self::rgb(78, 192, 255);
    /// AI red.
    pub const AI: Self = Self::rgb(255, 96, 96);
    /// Neutral grey.
    pub const NEUTRAL: Self = Self::rgb(180, 180, 180);
    /// Planet connection lines.
    pub const LINE: Self = Self::rgb(50, 50, 50);
    /// Text and rings.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fallback background.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns this colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Owner {
    /// Colour planets of this owner are drawn in.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Neutral => Color::NEUTRAL,
            Self::Player => Color::PLAYER,
            Self::Ai => Color::AI,
        }
    }
}

impl Faction {
    /// Colour fleets and result text of this faction are drawn in.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Player => Color::PLAYER,
            Self::Ai => Color::AI,
        }
    }
}

impl Planet {
    /// Colour of this planet, derived from its owner.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.owner().color()
    }
}

// =============================================================================
// Background
// =============================================================================

/// What fills the screen behind everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Encoded image bytes; decoding is the backend's job.
    Image {
        /// Raw file contents
        bytes: Arc<[u8]>,
    },
    /// A flat colour.
    Solid(Color),
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl Background {
    /// Reads a background image, falling back to solid black.
    ///
    /// A missing, unreadable or empty file is not an error; it is logged at
    /// warn level.
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) if !bytes.is_empty() => Self::Image {
                bytes: bytes.into(),
            },
            Ok(_) => {
                warn!(path = %path.display(), "background image is empty, using solid black");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to load background image, using solid black");
                Self::default()
            }
        }
    }
}

// =============================================================================
// Draw commands
// =============================================================================

/// How a circle is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Filled disc.
    Fill,
    /// Ring of the given line width.
    Outline(f32),
}

/// Text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Labels and status line (20px).
    Normal,
    /// Result headline (32px).
    Large,
}

impl FontSize {
    /// Pixel height.
    #[must_use]
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Normal => 20,
            Self::Large => 32,
        }
    }
}

/// Which point of the text box sits at the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top-left corner.
    TopLeft,
    /// Centre.
    Center,
}

/// One primitive of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the screen.
    Background(Background),
    /// One-pixel line.
    Line {
        /// Start point
        from: Vec2,
        /// End point
        to: Vec2,
        /// Colour
        color: Color,
    },
    /// Circle or ring.
    Circle {
        /// Centre
        center: Vec2,
        /// Radius
        radius: f32,
        /// Colour, alpha included
        color: Color,
        /// Fill or outline
        stroke: Stroke,
    },
    /// Text label.
    Text {
        /// Contents
        text: String,
        /// Anchor position
        position: Vec2,
        /// Which point of the text box `position` refers to
        anchor: Anchor,
        /// Size
        size: FontSize,
        /// Colour
        color: Color,
    },
    /// Full-screen translucent rectangle.
    Overlay(Color),
}

// =============================================================================
// Frame
// =============================================================================

/// Extra radius of the glow and outer ring.
const RING_OFFSET: f32 = 5.0;
/// Extra radius of the selection ring.
const SELECTION_OFFSET: f32 = 7.0;
/// Alpha of owned planets' glow.
const GLOW_ALPHA: u8 = 50;
/// Radius of a fleet marker.
const FLEET_MARKER_RADIUS: f32 = 5.0;
/// Offset of a fleet's ship label from its centre.
const FLEET_LABEL_OFFSET: Vec2 = Vec2::new(10.0, -10.0);
/// Game-over dimming.
const OVERLAY: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 180,
};

/// Everything needed to draw one frame.
///
/// # Example
///
/// ```
/// use planetwar_core::config::GameConfig;
/// use planetwar_core::game::Game;
/// use planetwar_core::render::{Background, Frame};
///
/// let game = Game::new(GameConfig::with_seed(1)).unwrap();
/// let frame = Frame::build(&game, &Background::default());
/// assert_eq!(frame.status, "Player planets: 1 | AI planets: 1 | Neutral planets: 8");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Playfield width
    pub width: u32,
    /// Playfield height
    pub height: u32,
    /// Primitives, back to front
    pub commands: Vec<DrawCommand>,
    /// Status line text
    pub status: String,
}

impl Frame {
    /// Builds the draw list for the current state of `game`.
    #[must_use]
    pub fn build(game: &Game, background: &Background) -> Self {
        let config = game.config();
        let view = game.view();
        let mut commands = vec![DrawCommand::Background(background.clone())];

        let planets = view.planets();
        for (i, a) in planets.iter().enumerate() {
            for b in &planets[i + 1..] {
                commands.push(DrawCommand::Line {
                    from: a.position(),
                    to: b.position(),
                    color: Color::LINE,
                });
            }
        }

        for planet in planets {
            push_planet(&mut commands, planet);
        }
        for fleet in view.fleets() {
            push_fleet(&mut commands, fleet);
        }

        let status = status_line(
            view.planet_count(Owner::Player),
            view.planet_count(Owner::Ai),
            view.planet_count(Owner::Neutral),
        );
        commands.push(DrawCommand::Text {
            text: status.clone(),
            position: Vec2::new(10.0, 10.0),
            anchor: Anchor::TopLeft,
            size: FontSize::Normal,
            color: Color::WHITE,
        });

        if let Some(winner) = game.winner() {
            #[allow(clippy::cast_precision_loss)]
            let center = Vec2::new(config.width as f32, config.height as f32) / 2.0;
            let headline = match winner {
                Faction::Player => "You win!",
                Faction::Ai => "You lose!",
            };
            commands.push(DrawCommand::Overlay(OVERLAY));
            commands.push(DrawCommand::Text {
                text: headline.to_owned(),
                position: center,
                anchor: Anchor::Center,
                size: FontSize::Large,
                color: winner.color(),
            });
            commands.push(DrawCommand::Text {
                text: "Press SPACE to restart".to_owned(),
                position: center + Vec2::new(0.0, 50.0),
                anchor: Anchor::Center,
                size: FontSize::Normal,
                color: Color::WHITE,
            });
        }

        Self {
            width: config.width,
            height: config.height,
            commands,
            status,
        }
    }
}

fn push_planet(commands: &mut Vec<DrawCommand>, planet: &Planet) {
    let center = planet.position();
    let color = planet.color();
    if planet.owner() != Owner::Neutral {
        commands.push(DrawCommand::Circle {
            center,
            radius: planet.radius() + RING_OFFSET,
            color: color.with_alpha(GLOW_ALPHA),
            stroke: Stroke::Fill,
        });
    }
    commands.push(DrawCommand::Circle {
        center,
        radius: planet.radius(),
        color,
        stroke: Stroke::Fill,
    });
    commands.push(DrawCommand::Circle {
        center,
        radius: planet.radius() + RING_OFFSET,
        color: Color::WHITE.with_alpha(GLOW_ALPHA),
        stroke: Stroke::Outline(2.0),
    });
    if planet.is_selected() {
        commands.push(DrawCommand::Circle {
            center,
            radius: planet.radius() + SELECTION_OFFSET,
            color: Color::WHITE,
            stroke: Stroke::Outline(2.0),
        });
    }
    commands.push(DrawCommand::Text {
        text: planet.ships().to_string(),
        position: center,
        anchor: Anchor::Center,
        size: FontSize::Normal,
        color: Color::WHITE,
    });
}

fn push_fleet(commands: &mut Vec<DrawCommand>, fleet: &Fleet) {
    commands.push(DrawCommand::Circle {
        center: fleet.position(),
        radius: FLEET_MARKER_RADIUS,
        color: fleet.faction().color(),
        stroke: Stroke::Fill,
    });
    commands.push(DrawCommand::Text {
        text: fleet.ships().to_string(),
        position: fleet.position() + FLEET_LABEL_OFFSET,
        anchor: Anchor::TopLeft,
        size: FontSize::Normal,
        color: Color::WHITE,
    });
}

/// Formats the per-owner planet count line.
#[must_use]
pub fn status_line(player: usize, ai: usize, neutral: usize) -> String {
    format!("Player planets: {player} | AI planets: {ai} | Neutral planets: {neutral}")
}

/// Consumes frames.
pub trait Renderer {
    /// Presents one frame.
    fn draw(&mut self, frame: &Frame);
}

// =============================================================================
// Tests
// =============================================================================
