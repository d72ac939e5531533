// engine.rs - Generation advance and random seeding

use crate::error::{LifeError, Result};
use crate::grid::GridState;
use crate::rule::{ConwayRule, Rule};
use rand::Rng;
use tracing::{debug, trace};

pub const DEFAULT_DENSITY: f64 = 0.3;                 // Reference alive probability when seeding

/// Population summary of the generation an `advance` call produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Applies a [`Rule`] to a [`GridState`]. Holds no grid state of its own.
#[derive(Debug, Clone, Default)]
pub struct LifeEngine<R = ConwayRule> {
    rule: R,
}

impl LifeEngine<ConwayRule> {
    pub fn new() -> Self {
        Self { rule: ConwayRule }
    }
}

impl<R: Rule> LifeEngine<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn count_neighbors(&self, grid: &GridState, x: usize, y: usize) -> u8 {
        count_neighbors(grid, x, y)
    }

    /// Replaces the grid's generation with the next one.
    ///
    /// Every transition reads the frozen current buffer and writes the back
    /// buffer, which is swapped in once all cells are computed. Cells that are
    /// alive in the new generation get their trace set; the trace is never
    /// cleared here.
    pub fn advance(&self, grid: &mut GridState) -> GenerationStats {
        let size = grid.size();
        let (current, next, ever_alive) = grid.buffers_mut();
        let mut stats = GenerationStats::default();

        for y in 0..size {
            for x in 0..size {
                let idx = y * size + x;
                let alive = current[idx];
                let next_state = self.rule.next_state(alive, live_neighbors(current, size, x, y));

                next[idx] = next_state;
                if next_state {
                    ever_alive[idx] = true;
                    stats.population += 1;
                    if !alive {
                        stats.births += 1;
                    }
                } else if alive {
                    stats.deaths += 1;
                }
            }
        }

        grid.swap_buffers();
        trace!(
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            "generation advanced"
        );
        stats
    }

    /// Wipes the trace, then makes each cell alive with probability `density`.
    ///
    /// Returns the number of cells seeded alive. A `density` outside `[0, 1]`
    /// is rejected before the grid is touched.
    pub fn seed_random<G>(&self, grid: &mut GridState, density: f64, rng: &mut G) -> Result<usize>
    where
        G: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }

        grid.clear_trace();
        let (cells, ever_alive) = grid.cells_and_trace_mut();
        let mut population = 0;
        for (cell, traced) in cells.iter_mut().zip(ever_alive.iter_mut()) {
            *cell = rng.gen_bool(density);
            if *cell {
                *traced = true;
                population += 1;
            }
        }

        debug!(density, population, "grid seeded");
        Ok(population)
    }
}

/// Live cells among the up-to-8 neighbors of `(x, y)`.
///
/// The board does not wrap: neighbors past an edge are skipped, so corners
/// look at 3 cells, other edge cells at 5 and interior cells at 8.
/// Panics if `(x, y)` is off the board.
pub fn count_neighbors(grid: &GridState, x: usize, y: usize) -> u8 {
    let size = grid.size();
    assert!(x < size && y < size, "cell ({x}, {y}) is outside the {size}x{size} grid");
    live_neighbors(grid.cells(), size, x, y)
}

#[inline]
fn live_neighbors(cells: &[bool], size: usize, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for ny in y.saturating_sub(1)..=(y + 1).min(size - 1) {
        for nx in x.saturating_sub(1)..=(x + 1).min(size - 1) {
            if (nx, ny) != (x, y) && cells[ny * size + nx] {
                count += 1;
            }
        }
    }
    count
}
