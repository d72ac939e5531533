//! Conway's Game of Life on a bounded square board.
//!
//! [`GridState`] holds the current generation plus an "ever alive" trace used
//! for rendering. [`LifeEngine`] advances a grid one generation at a time
//! under a swappable [`Rule`] (B3/S23 by default) and seeds it at random.
//! [`Session`] wraps both in the editing/running state machine a driver
//! steps through.
//!
//! ```
//! use conway_core::{GridState, LifeEngine};
//!
//! let mut grid = GridState::new(5);
//! for x in 1..4 {
//!     grid.set(x, 2, true);
//! }
//! LifeEngine::new().advance(&mut grid);
//! assert!(grid.get(2, 1) && grid.get(2, 2) && grid.get(2, 3));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod session;

pub use config::LifeConfig;
pub use engine::{count_neighbors, GenerationStats, LifeEngine, DEFAULT_DENSITY};
pub use error::{LifeError, Result};
pub use grid::{CellView, GridState, DEFAULT_SIZE};
pub use patterns::{Pattern, PATTERNS};
pub use rule::{ConwayRule, Rule};
pub use session::{Session, SimState};
