//! GameScreen: composes canvases and hud state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::GridCanvas;
use quadris_core::Surface;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::hud::StatusHud;
use crate::types::Color;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lays out the play field, the next-piece box and the score labels.
pub struct GameScreen {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameScreen {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose one frame into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is resized to the
    /// viewport and repainted from scratch each time.
    pub fn compose_into(
        &self,
        board: &GridCanvas,
        preview: &GridCanvas,
        hud: &StatusHud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let board_px_w = board.columns() as u16 * self.cell_w;
        let board_px_h = board.rows() as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..board.rows() {
            for col in 0..board.columns() {
                if let Some(color) = board.get(row, col) {
                    let px = start_x + 1 + col as u16 * self.cell_w;
                    let py = start_y + 1 + row as u16;
                    fb.fill_rect(px, py, self.cell_w, 1, '█', block_style(color));
                }
            }
        }

        self.draw_side_panel(fb, preview, hud, start_x + frame_w + 2, start_y, border);

        if hud.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        preview: &GridCanvas,
        hud: &StatusHud,
        panel_x: u16,
        start_y: u16,
        border: CellStyle,
    ) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;

        let box_w = preview.columns() as u16 * self.cell_w + 2;
        let box_h = preview.rows() as u16 + 2;
        self.draw_border(fb, panel_x, y, box_w, box_h, border);
        for row in 0..preview.rows() {
            for col in 0..preview.columns() {
                if let Some(color) = preview.get(row, col) {
                    let px = panel_x + 1 + col as u16 * self.cell_w;
                    let py = y + 1 + row as u16;
                    fb.fill_rect(px, py, self.cell_w, 1, '█', block_style(color));
                }
            }
        }
        y += box_h + 1;

        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_str(panel_x, y, &hud.score().to_string(), value);
        y += 2;

        fb.put_str(panel_x, y, "LEVEL", label);
        y += 1;
        fb.put_str(panel_x, y, &hud.level().to_string(), value);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 20, 20),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Columns reserved right of the board for the preview box and labels.
const PANEL_W: u16 = 14;

fn block_style(color: Color) -> CellStyle {
    let fg = match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Magenta => Rgb::new(200, 120, 220),
    };
    CellStyle {
        fg,
        bg: Rgb::new(25, 25, 35),
        bold: true,
    }
}
