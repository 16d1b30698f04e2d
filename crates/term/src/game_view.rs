//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_2048_core::GameSession;
use tui_2048_types::Tile;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const TITLE: &str = "2048 - join the numbers and get to the 2048 tile!";
const GAME_OVER_BANNER: &str = "GAME OVER - restart or quit";
const HELP: [&str; 3] = ["w: up      a: left", "s: down    d: right", "r: restart q: quit"];

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

/// A lightweight terminal view of one game session.
pub struct GameView {
    /// Board cell width in terminal columns; values are right-aligned in it.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for four-digit tiles with a space between columns.
        Self { cell_w: 6 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the session into a framebuffer sized to the viewport.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let size = session.grid().size() as u16;
        let board_w = size.saturating_mul(self.cell_w);
        let frame_w = board_w + 2;
        let frame_h = size + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let help = CellStyle {
            fg: Rgb::new(150, 150, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        // Title above the board.
        let title_x = viewport.width.saturating_sub(TITLE.chars().count() as u16) / 2;
        fb.put_str(title_x, start_y.saturating_sub(2), TITLE, label);

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles, right-aligned in fixed-width cells; empty cells show '-'.
        for row in 0..size {
            for col in 0..size {
                let value = session
                    .grid()
                    .get(row as usize, col as usize)
                    .unwrap_or(0);
                let text = cell_text(value, self.cell_w as usize);
                fb.put_str(
                    start_x + 1 + col * self.cell_w,
                    start_y + 1 + row,
                    &text,
                    tile_style(value),
                );
            }
        }

        // Key help under the board.
        let help_y = start_y + frame_h + 1;
        for (i, line) in HELP.iter().enumerate() {
            let x = viewport.width.saturating_sub(line.chars().count() as u16) / 2;
            fb.put_str(x, help_y + i as u16, line, help);
        }

        // The board stays visible when the game is over; only restart and
        // quit are accepted, and the banner says so.
        if session.game_over() {
            let x = viewport
                .width
                .saturating_sub(GAME_OVER_BANNER.chars().count() as u16)
                / 2;
            fb.put_str(x, help_y + HELP.len() as u16 + 1, GAME_OVER_BANNER, label);
        }

        fb
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
}

/// Right-align a tile value (or the '-' placeholder) in a fixed-width field.
fn cell_text(value: Tile, width: usize) -> String {
    if value == 0 {
        format!("{:>width$}", "-")
    } else {
        format!("{value:>width$}")
    }
}

fn tile_style(value: Tile) -> CellStyle {
    let fg = match value {
        0 => Rgb::new(110, 110, 120),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(255, 120, 120),
    };
    CellStyle {
        fg,
        bg: Rgb::new(0, 0, 0),
        bold: value >= 128,
    }
}
