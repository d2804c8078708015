//! StatusHud: terminal-side [`Hud`] state.
//!
//! Holds the last pushed score, level and game-over flag; `GameScreen`
//! reads these when composing a frame.

use crate::core::Hud;

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusHud {
    score: u32,
    level: u32,
    game_over: bool,
}

impl StatusHud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

impl Hud for StatusHud {
    fn show_score(&mut self, score: u32, level: u32) {
        self.score = score;
        self.level = level;
    }

    fn show_game_over(&mut self) {
        self.game_over = true;
    }

    fn clear_game_over(&mut self) {
        self.game_over = false;
    }
}
