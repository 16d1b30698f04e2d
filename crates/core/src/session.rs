//! Session module - one interactive episode of the game.
//!
//! The session owns the grid, the RNG, and an explicit lifecycle phase.
//! Restart and quit arrive as decoded intents and flow back out as a
//! return value; there is no shared mutable flag anywhere.

use tui_2048_types::{Direction, Intent};

use crate::grid::{Grid, GridError};
use crate::rng::SimpleRng;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What the caller should do after an intent has been handled.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Exit,
}

/// Complete state of one game: board, randomness, and phase.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    rng: SimpleRng,
    phase: Phase,
    starting_tiles: usize,
}

impl GameSession {
    /// Start a session with a freshly populated board.
    pub fn new(size: usize, starting_tiles: usize, seed: u32) -> Result<Self, GridError> {
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::with_starting_tiles(size, starting_tiles, &mut rng)?;
        let phase = phase_of(&grid);
        Ok(Self {
            grid,
            rng,
            phase,
            starting_tiles,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Feed one decoded intent through the session state machine.
    ///
    /// While the game is over, only Restart and Quit do anything; the
    /// board keeps being displayed and moves are ignored.
    pub fn handle(&mut self, intent: Intent) -> SessionFlow {
        match intent {
            Intent::Quit => SessionFlow::Exit,
            Intent::Restart => {
                self.restart();
                SessionFlow::Continue
            }
            Intent::Move(direction) => {
                if self.phase == Phase::Playing {
                    self.step(direction);
                }
                SessionFlow::Continue
            }
            Intent::Noop => SessionFlow::Continue,
        }
    }

    /// One move: slide, spawn on change, then re-check for game over.
    fn step(&mut self, direction: Direction) {
        if self.grid.apply_move(direction) {
            self.grid.spawn_tile(&mut self.rng);
        }
        if self.grid.is_terminal() {
            self.phase = Phase::GameOver;
        }
    }

    fn restart(&mut self) {
        self.grid.reset(self.starting_tiles, &mut self.rng);
        self.phase = phase_of(&self.grid);
    }
}

fn phase_of(grid: &Grid) -> Phase {
    if grid.is_terminal() {
        Phase::GameOver
    } else {
        Phase::Playing
    }
}
