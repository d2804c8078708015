//! Board simulation - the timer-driven game state machine
//!
//! Owns the settled grid, the active and next piece, and the session state
//! (score, level, gravity period). The host owns the actual gravity timer
//! and calls [`Game::tick`] at [`Game::tick_interval`]; a changed interval
//! means the host must re-arm its timer at the new period.
//!
//! States: Idle (no session) -> Running -> GameOver -> Running on restart.
//! Input and ticks are no-ops outside Running. Single-threaded by design:
//! exactly one caller mutates the game at a time and every operation runs
//! to completion synchronously.

use std::time::Duration;

use crate::board::Grid;
use crate::display::{Frontend, Hud, Surface};
use crate::piece::Piece;
use crate::rng::{PieceRng, ShapeSource};
use crate::scoring::{score_for_lines, speed_for_score};

use quadris_types::{Action, Rotation, BASE_TICK_MS, BOARD_COLUMNS, BOARD_ROWS, BUFFER_ROWS};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

/// The falling-block simulation.
///
/// Generic over the shape source so tests can script the spawn sequence;
/// gameplay uses the seedable [`PieceRng`].
#[derive(Debug, Clone)]
pub struct Game<R: ShapeSource = PieceRng> {
    grid: Grid,
    current: Option<Piece>,
    next: Option<Piece>,
    source: R,
    score: u32,
    level: u32,
    tick_interval_ms: u64,
    phase: Phase,
}

impl Game {
    /// Create an idle game with the default seeded shape source.
    pub fn new(seed: u32) -> Game {
        Game::with_source(PieceRng::new(seed))
    }
}

impl<R: ShapeSource> Game<R> {
    /// Create an idle game drawing shapes from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            grid: Grid::new(),
            current: None,
            next: None,
            source,
            score: 0,
            level: 1,
            tick_interval_ms: BASE_TICK_MS,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity period. The host re-arms its timer from this value
    /// after start and after every tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup in tests and tools.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Start or restart a session: reset score and level, empty the grid,
    /// spawn the active and next piece, and enter Running.
    ///
    /// The caller must re-arm its gravity timer afterwards; a restart must
    /// not leave a timer from the previous session pending.
    pub fn start(&mut self, frontend: &mut Frontend<'_>) {
        self.score = 0;
        self.level = 1;
        self.tick_interval_ms = BASE_TICK_MS;
        self.grid.clear();
        self.phase = Phase::Running;

        frontend.hud.clear_game_over();
        frontend.hud.show_score(self.score, self.level);

        self.current = Some(Piece::new(self.source.next_shape()));
        self.next = Some(Piece::new(self.source.next_shape()));
        self.show_next_piece(frontend.preview);
    }

    /// Apply a player action to the active piece.
    ///
    /// The candidate position is validated with [`Game::collision`]; a
    /// colliding candidate is rejected silently and the piece stays put.
    pub fn handle_input(&mut self, action: Action, frontend: &mut Frontend<'_>) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.current else {
            return;
        };

        let mut x = piece.x;
        let mut y = piece.y;
        let mut rotation = piece.rotation;
        match action {
            Action::RotateCw => rotation = rotation.cw(),
            Action::MoveLeft => x -= 1,
            Action::MoveRight => x += 1,
            Action::SoftDrop => y += 1,
        }

        if !self.collision(x, y, rotation) {
            self.current = Some(Piece {
                x,
                y,
                rotation,
                ..piece
            });
        }

        self.render(frontend.board);
        frontend.board.redraw();
    }

    /// One gravity step, driven by the host timer.
    ///
    /// In order: repaint the board surface, settle rows filled by the
    /// previous tick's lock, then either lock the piece (and promote the
    /// next one, or end the session if it locked inside the spawn buffer)
    /// or advance it one row. Exactly one of lock or advance happens.
    pub fn tick(&mut self, frontend: &mut Frontend<'_>) {
        if self.phase != Phase::Running {
            return;
        }

        self.render(frontend.board);
        self.clear_filled_lines(frontend.hud);

        let Some(piece) = self.current else {
            return;
        };

        if self.collision(piece.x, piece.y + 1, piece.rotation) {
            self.lock(&piece);

            // Locking while still overlapping the spawn buffer tops out.
            if piece.y <= BUFFER_ROWS as i8 {
                self.game_over(frontend.hud);
                frontend.board.redraw();
                return;
            }

            self.current = self.next.take();
            self.next = Some(Piece::new(self.source.next_shape()));
            self.show_next_piece(frontend.preview);
        } else if let Some(piece) = self.current.as_mut() {
            piece.advance();
        }

        frontend.board.redraw();
    }

    /// Whether the active piece's shape collides at the candidate placement.
    ///
    /// True if any occupied cell would fall below the last playable row,
    /// outside the columns, or onto a settled cell.
    pub fn collision(&self, x: i8, y: i8, rotation: Rotation) -> bool {
        let Some(piece) = self.current else {
            return false;
        };

        for py in 0..4 {
            for px in 0..4 {
                if !crate::piece::occupies(piece.shape, px, py, rotation) {
                    continue;
                }
                let row = y + py as i8;
                let col = x + px as i8;
                if row > (BOARD_ROWS - 1) as i8 || col < 0 || col > (BOARD_COLUMNS - 1) as i8 {
                    return true;
                }
                if self.grid.filled(row, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Remove filled rows, award points, and re-evaluate level/speed.
    /// Returns the number of rows cleared.
    pub fn clear_filled_lines(&mut self, hud: &mut dyn Hud) -> usize {
        let cleared = self.grid.clear_filled_rows();
        if cleared.is_empty() {
            return 0;
        }

        self.score += score_for_lines(cleared.len());
        let step = speed_for_score(self.score);
        self.level = step.level;
        // A changed period means the host disarms and re-arms its timer.
        self.tick_interval_ms = step.interval_ms;

        hud.show_score(self.score, self.level);
        cleared.len()
    }

    /// End the session. The grid and score stay visible, read-only.
    pub fn game_over(&mut self, hud: &mut dyn Hud) {
        self.phase = Phase::GameOver;
        hud.show_game_over();
    }

    /// Write the piece's occupied cells into the grid, clipped to bounds.
    fn lock(&mut self, piece: &Piece) {
        for py in 0..4 {
            for px in 0..4 {
                if !piece.occupies(px, py) {
                    continue;
                }
                let row = piece.y + py as i8;
                let col = piece.x + px as i8;
                if row < BOARD_ROWS as i8 && (0..BOARD_COLUMNS as i8).contains(&col) {
                    self.grid.settle(row, col, piece.color());
                }
            }
        }
    }

    /// Repaint pass: clear, settled cells, then the active piece.
    ///
    /// The surface shows the playable rows only; grid row `BUFFER_ROWS`
    /// maps to surface row 0 and the piece is clipped against the surface's
    /// own dimensions.
    fn render(&self, board: &mut dyn Surface) {
        board.clear();

        for row in BUFFER_ROWS..BOARD_ROWS {
            for col in 0..BOARD_COLUMNS {
                let cell = self.grid.get(row as i8, col as i8).unwrap_or(None);
                board.set_cell_color(row - BUFFER_ROWS, col, cell);
            }
        }

        if let Some(piece) = self.current {
            let start_row = piece.y as i32 - BUFFER_ROWS as i32;
            for py in 0..4 {
                for px in 0..4 {
                    if !piece.occupies(px, py) {
                        continue;
                    }
                    let row = start_row + py as i32;
                    let col = piece.x as i32 + px as i32;
                    if row >= 0
                        && (row as usize) < board.rows()
                        && col >= 0
                        && (col as usize) < board.columns()
                    {
                        board.set_cell_color(row as usize, col as usize, Some(piece.color()));
                    }
                }
            }
        }
    }

    /// Paint the upcoming piece into the 4x4 preview surface.
    fn show_next_piece(&self, preview: &mut dyn Surface) {
        let Some(next) = self.next else {
            return;
        };
        preview.clear();
        for y in 0..4 {
            for x in 0..4 {
                let cell = if crate::piece::occupies(next.shape, x, y, Rotation::North) {
                    Some(next.color())
                } else {
                    None
                };
                preview.set_cell_color(y, x, cell);
            }
        }
        preview.redraw();
    }
}
