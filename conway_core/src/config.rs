// config.rs - Simulation settings supplied by the driver

use crate::engine::DEFAULT_DENSITY;
use crate::error::{LifeError, Result};
use crate::grid::DEFAULT_SIZE;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);   // ~50 generations/sec

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// Cells per side of the square board.
    pub size: usize,
    /// Probability of a cell being alive after a reseed.
    pub density: f64,
    /// Pacing between generations while running. The core never sleeps; the driver does.
    pub tick_interval: Duration,
    /// When set, painting a cell while running pauses the simulation first.
    /// Otherwise edits are refused until the driver pauses.
    pub draw_pauses_run: bool,
    /// Seed for reseeding. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            density: DEFAULT_DENSITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            draw_pauses_run: true,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(LifeError::EmptyGrid);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density));
        }
        if self.tick_interval.is_zero() {
            return Err(LifeError::InvalidConfig("tick interval must be non-zero"));
        }
        Ok(())
    }

    pub fn generations_per_second(&self) -> f64 {
        1.0 / self.tick_interval.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let config = LifeConfig::default();
        assert_eq!(config.size, 256);
        assert_eq!(config.density, 0.3);
        assert_eq!(config.tick_interval, Duration::from_millis(20));
        assert!(config.draw_pauses_run);
        assert!((config.generations_per_second() - 50.0).abs() < 1e-9);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let base = LifeConfig::default();
        assert_eq!(LifeConfig { size: 0, ..base.clone() }.validate(), Err(LifeError::EmptyGrid));
        assert_eq!(
            LifeConfig { density: -0.1, ..base.clone() }.validate(),
            Err(LifeError::InvalidDensity(-0.1))
        );
        assert!(matches!(
            LifeConfig { tick_interval: Duration::ZERO, ..base }.validate(),
            Err(LifeError::InvalidConfig(_))
        ));
    }
}
