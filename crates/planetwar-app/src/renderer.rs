//! A renderer for terminals: logs the status line instead of drawing.

use planetwar_core::render::{DrawCommand, Frame, Renderer};
use tracing::{info, trace};

/// Logs the status line once every `every` frames.
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
    last_status: Option<String>,
}

impl LogRenderer {
    pub fn new(every: u32) -> Self {
        Self {
            every: u64::from(every.max(1)),
            frames: 0,
            last_status: None,
        }
    }

    /// Frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The most recently logged status line.
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        trace!(commands = frame.commands.len(), "frame");
        if self.frames % self.every != 0 {
            return;
        }

        let overlay = frame
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Overlay(_)));
        info!(
            seconds = self.frames / self.every,
            game_over = overlay,
            "{}",
            frame.status
        );
        self.last_status = Some(frame.status.clone());
    }
}

#[cfg(test)]
mod tests {
    use planetwar_core::render::Background;
    use planetwar_core::{Game, GameConfig};

    use super::*;

    #[test]
    fn logs_once_per_period() {
        let game = Game::new(GameConfig::with_seed(4)).unwrap();
        let mut renderer = LogRenderer::new(3);

        renderer.draw(&Frame::build(&game, &Background::default()));
        renderer.draw(&Frame::build(&game, &Background::default()));
        assert!(renderer.last_status().is_none());

        renderer.draw(&Frame::build(&game, &Background::default()));
        assert_eq!(renderer.frames(), 3);
        assert_eq!(
            renderer.last_status(),
            Some("Player planets: 1 | AI planets: 1 | Neutral planets: 8")
        );
    }
}
