// grid.rs - Grid state for Conway's Game of Life

use crate::error::{LifeError, Result};
use tracing::debug;

pub const DEFAULT_SIZE: usize = 256;                  // Reference board is 256x256

/// Rendering hint for a single cell, derived from `(alive, ever_alive)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Alive,
    /// Dead now, but alive at some point since the last reset or reseed.
    Trace,
    Empty,
}

/// Square, non-wrapping board stored as flat row-major buffers.
///
/// `cells` holds the current generation and `ever_alive` records every cell
/// that has been alive since the last reset or reseed. `next` is the back
/// buffer the engine writes the following generation into before swapping.
#[derive(Debug, Clone)]
pub struct GridState {
    size: usize,
    cells: Vec<bool>,
    ever_alive: Vec<bool>,
    next: Vec<bool>,
}

impl GridState {
    /// All-dead `size` x `size` grid. Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }
        let area = size.checked_mul(size).ok_or(LifeError::GridTooLarge(size))?;
        Ok(Self {
            size,
            cells: vec![false; area],
            ever_alive: vec![false; area],
            next: vec![false; area],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then_some(y * self.size + x)
    }

    #[inline]
    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        self.index(x, y).ok_or(LifeError::OutOfBounds { x, y, size: self.size })
    }

    #[inline]
    fn index_or_panic(&self, x: usize, y: usize) -> usize {
        match self.checked_index(x, y) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Cell state at `(x, y)`. Panics when the coordinate is off the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index_or_panic(x, y)]
    }

    /// Overwrites the cell at `(x, y)`. Leaves the trace alone.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index_or_panic(x, y);
        self.cells[idx] = alive;
    }

    pub fn try_get(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.cells[self.checked_index(x, y)?])
    }

    pub fn try_set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    pub fn mark_ever_alive(&mut self, x: usize, y: usize) {
        let idx = self.index_or_panic(x, y);
        self.ever_alive[idx] = true;
    }

    pub fn is_ever_alive(&self, x: usize, y: usize) -> bool {
        self.ever_alive[self.index_or_panic(x, y)]
    }

    pub fn view(&self, x: usize, y: usize) -> CellView {
        let idx = self.index_or_panic(x, y);
        view_of(self.cells[idx], self.ever_alive[idx])
    }

    /// Row-major rendering hints, one per cell.
    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells
            .iter()
            .zip(&self.ever_alive)
            .map(|(&alive, &traced)| view_of(alive, traced))
    }

    /// Kills every cell and wipes the trace.
    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.ever_alive.fill(false);
        debug!(size = self.size, "grid reset");
    }

    pub fn clear_trace(&mut self) {
        self.ever_alive.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn trace(&self) -> &[bool] {
        &self.ever_alive
    }

    /// Frozen current generation, back buffer and trace, borrowed together.
    pub(crate) fn buffers_mut(&mut self) -> (&[bool], &mut [bool], &mut [bool]) {
        (&self.cells, &mut self.next, &mut self.ever_alive)
    }

    /// Promotes the back buffer to the current generation.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    pub(crate) fn cells_and_trace_mut(&mut self) -> (&mut [bool], &mut [bool]) {
        (&mut self.cells, &mut self.ever_alive)
    }
}

// The back buffer is scratch space and takes no part in equality.
impl PartialEq for GridState {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells && self.ever_alive == other.ever_alive
    }
}

impl Eq for GridState {}

fn view_of(alive: bool, traced: bool) -> CellView {
    match (alive, traced) {
        (true, _) => CellView::Alive,
        (false, true) => CellView::Trace,
        (false, false) => CellView::Empty,
    }
}
