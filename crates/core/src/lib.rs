//! Core module - pure game rules with no I/O.
//!
//! Everything here is a synchronous, in-place transformation over owned
//! memory: the line transform, the grid engine built on top of it, the
//! seedable RNG used for tile spawning, and the session state machine.

pub mod grid;
pub mod line;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use grid::{Grid, GridError};
pub use line::shift_merge_shift;
pub use rng::SimpleRng;
pub use session::{GameSession, Phase, SessionFlow};
