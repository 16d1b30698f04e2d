//! Grid module - the square tile board and the move engine over it.
//!
//! Cells are stored in a flat row-major `Vec` behind a validated shape:
//! the dimension never changes after construction, and structurally
//! invalid input (zero-sized or non-square) is rejected at the
//! constructor boundary instead of being operated on.

use thiserror::Error;

use tui_2048_types::{Direction, Tile, TWO_SPAWN_PERCENT};

use crate::line::shift_merge_shift;
use crate::rng::SimpleRng;

/// Structural precondition violations caught at grid construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimension must be at least 1")]
    ZeroSize,
    #[error("expected a square grid of {rows} rows, found a row of width {width}")]
    NotSquare { rows: usize, width: usize },
}

/// Square board of tiles. Zero cells are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty board of the given dimension.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Create a board with `count` starting tiles already spawned.
    pub fn with_starting_tiles(
        size: usize,
        count: usize,
        rng: &mut SimpleRng,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        for _ in 0..count {
            grid.spawn_tile(rng);
        }
        Ok(grid)
    }

    /// Build a board from explicit rows, failing fast on ragged or
    /// non-square input.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    width: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// The raw cells in row-major order.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Apply one directional move to every line of the board.
    ///
    /// Up/Down transform each column, Left/Right each row, packing toward
    /// the first cell for Up/Left. Every line is always processed; lines
    /// are independent and the whole board must end up updated. Returns
    /// true if any line changed.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let toward_start = direction.toward_start();
        let mut changed = false;

        if direction.is_vertical() {
            // Columns go through a scratch line reused across the move.
            let mut column = vec![0; self.size];
            for col in 0..self.size {
                for row in 0..self.size {
                    column[row] = self.cells[row * self.size + col];
                }
                if shift_merge_shift(&mut column, toward_start) {
                    changed = true;
                }
                for row in 0..self.size {
                    self.cells[row * self.size + col] = column[row];
                }
            }
        } else {
            // Rows are contiguous and transform in place.
            for row in 0..self.size {
                let start = row * self.size;
                if shift_merge_shift(&mut self.cells[start..start + self.size], toward_start) {
                    changed = true;
                }
            }
        }

        changed
    }

    /// True when the board is full and no direction can change it.
    ///
    /// Each trial move runs on its own cloned board; detection must never
    /// disturb the board it inspects.
    pub fn is_terminal(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        Direction::ALL.iter().all(|&direction| {
            let mut trial = self.clone();
            !trial.apply_move(direction)
        })
    }

    /// Place a new tile into a uniformly chosen empty cell.
    ///
    /// The value is a 2 or a 4, decided by one uniform draw over 1..=100:
    /// 1-90 place a 2, 91-100 place a 4. Returns false on a full board.
    pub fn spawn_tile(&mut self, rng: &mut SimpleRng) -> bool {
        let empty: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i] == 0)
            .collect();
        if empty.is_empty() {
            return false;
        }

        let slot = empty[rng.next_range(empty.len() as u32) as usize];
        let roll = rng.next_range(100) + 1;
        self.cells[slot] = if roll <= TWO_SPAWN_PERCENT { 2 } else { 4 };
        true
    }

    /// Wipe the board and spawn a fresh set of starting tiles.
    pub fn reset(&mut self, starting_tiles: usize, rng: &mut SimpleRng) {
        self.cells.fill(0);
        for _ in 0..starting_tiles {
            self.spawn_tile(rng);
        }
    }
}
