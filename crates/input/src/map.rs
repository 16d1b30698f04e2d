//! Key mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_2048_types::{Direction, Intent};

/// Decode one key event into an intent.
///
/// Unrecognized keys decode to `Intent::Noop`; the caller must never
/// forward them to the engine as a move.
pub fn map_key_event(key: KeyEvent) -> Intent {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Intent::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Intent::Move(Direction::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Intent::Move(Direction::Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Intent::Move(Direction::Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Intent::Move(Direction::Right),

        // Session control
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,

        _ => Intent::Noop,
    }
}
