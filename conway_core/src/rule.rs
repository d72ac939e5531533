// rule.rs - Per-cell transition rules

/// Decides a cell's next state from its current state and live-neighbor count.
pub trait Rule {
    fn next_state(&self, alive: bool, neighbors: u8) -> bool;
}

/// Standard B3/S23 rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    #[inline]
    fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 2) | (true, 3) => true,   // Survival
            (true, n) if n > 3    => false,  // Overpopulation
            (false, 3)            => true,   // Birth
            _                     => false,  // Underpopulation or stays dead
        }
    }
}

impl<F> Rule for F
where
    F: Fn(bool, u8) -> bool,
{
    #[inline]
    fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        self(alive, neighbors)
    }
}
