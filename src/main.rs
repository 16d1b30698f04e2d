//! Terminal 2048 runner (default binary).
//!
//! Turn-based loop: render the board, block on one key event, feed the
//! decoded intent to the session, repeat until it asks to exit.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameSession, SessionFlow};
use tui_2048::input::map_key_event;
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GRID_SIZE, STARTING_TILES};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if result.is_ok() {
        println!("See you later");
    }
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(GRID_SIZE, STARTING_TILES, clock_seed())?;
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        term.draw(&fb)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if session.handle(map_key_event(key)) == SessionFlow::Exit {
                return Ok(());
            }
        }
    }
}

/// Seed each process from the clock; tests construct sessions with fixed
/// seeds instead.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
