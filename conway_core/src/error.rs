// error.rs - Error type shared by the grid, engine and session

use thiserror::Error;

/// Errors reported by the Game of Life core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A grid needs at least one cell per side.
    #[error("grid size must be at least 1")]
    EmptyGrid,
    /// `size * size` cells do not fit in memory addressing.
    #[error("grid size {0} is too large")]
    GridTooLarge(usize),
    /// Coordinate outside `0..size` on either axis.
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    /// Seeding probability must lie in `[0, 1]`.
    #[error("seed density {0} is not a probability")]
    InvalidDensity(f64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The operation is only allowed while the session is editing.
    #[error("{operation} is only allowed while editing")]
    NotEditing { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, LifeError>;
