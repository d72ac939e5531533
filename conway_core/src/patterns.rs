// patterns.rs - Named starting patterns

use crate::error::{LifeError, Result};
use crate::grid::GridState;
use tracing::debug;

/// A named set of live cells, as `(x, y)` offsets from the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0), (22, 1), (24, 1), (12, 2), (13, 2), (20, 2),
            (21, 2), (34, 2), (35, 2), (11, 3), (15, 3), (20, 3),
            (21, 3), (34, 3), (35, 3), (0, 4), (1, 4), (10, 4),
            (16, 4), (20, 4), (21, 4), (0, 5), (1, 5), (10, 5),
            (14, 5), (16, 5), (17, 5), (22, 5), (24, 5), (10, 6),
            (16, 6), (24, 6), (11, 7), (15, 7), (12, 8), (13, 8),
        ],
    },
];

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Stamps the pattern's live cells with their top-left corner at `origin`.
    ///
    /// Stamped cells are traced. Cells outside the pattern are left as they
    /// are. Fails without touching the grid if any cell would land off the board.
    pub fn place(&self, grid: &mut GridState, origin: (usize, usize)) -> Result<()> {
        let (ox, oy) = origin;
        let (w, h) = self.bounds();
        let size = grid.size();
        if ox + w > size || oy + h > size {
            return Err(LifeError::OutOfBounds {
                x: ox + w.saturating_sub(1),
                y: oy + h.saturating_sub(1),
                size,
            });
        }

        for &(x, y) in self.cells {
            grid.set(ox + x, oy + y, true);
            grid.mark_ever_alive(ox + x, oy + y);
        }
        debug!(pattern = self.name, x = ox, y = oy, "pattern placed");
        Ok(())
    }

    /// Places the pattern in the middle of the board.
    pub fn place_centered(&self, grid: &mut GridState) -> Result<()> {
        let (w, h) = self.bounds();
        let size = grid.size();
        let origin = (size.saturating_sub(w) / 2, size.saturating_sub(h) / 2);
        self.place(grid, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn cells_are_distinct() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("gosper glider gun").map(|p| p.cells.len()), Some(36));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn bounds() {
        assert_eq!(find("Pulsar").map(Pattern::bounds), Some((13, 13)));
        assert_eq!(find("Gosper Glider Gun").map(Pattern::bounds), Some((36, 9)));
    }

    #[test]
    fn place_marks_trace() {
        let mut grid = GridState::new(10);
        let glider = find("Glider").unwrap();
        glider.place(&mut grid, (3, 4)).unwrap();
        assert!(grid.get(4, 4));
        assert!(grid.is_ever_alive(4, 4));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn place_off_board_leaves_grid_untouched() {
        let mut grid = GridState::new(10);
        let pulsar = find("Pulsar").unwrap();
        assert!(matches!(pulsar.place_centered(&mut grid), Err(LifeError::OutOfBounds { .. })));
        assert!(matches!(find("Blinker").unwrap().place(&mut grid, (8, 0)), Err(LifeError::OutOfBounds { .. })));
        assert_eq!(grid.population(), 0);
    }
}
