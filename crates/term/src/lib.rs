//! Terminal rendering module for the game shell.
//!
//! `fb` and `game_view` are pure and unit-testable; `renderer` owns the
//! real terminal (raw mode, alternate screen) and restores it on exit.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
