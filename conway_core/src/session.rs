// session.rs - Editing/running state machine around a grid and engine

use crate::config::LifeConfig;
use crate::engine::{GenerationStats, LifeEngine};
use crate::error::{LifeError, Result};
use crate::grid::GridState;
use crate::patterns::Pattern;
use crate::rule::{ConwayRule, Rule};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimState {
    /// Cells can be edited and reseeded; generations do not advance.
    #[default]
    Editing,
    /// Each tick advances one generation.
    Running,
}

/// One simulation: the board, the rule, the random source and the run state.
///
/// The driver calls [`Session::tick`] once per paced frame and reads
/// [`Session::grid`] afterwards to render.
pub struct Session<R = ConwayRule> {
    config: LifeConfig,
    grid: GridState,
    engine: LifeEngine<R>,
    rng: ChaCha8Rng,
    state: SimState,
    generation: u64,
}

impl Session<ConwayRule> {
    pub fn new(config: LifeConfig) -> Result<Self> {
        Self::with_engine(config, LifeEngine::new())
    }
}

impl<R: Rule> Session<R> {
    pub fn with_engine(config: LifeConfig, engine: LifeEngine<R>) -> Result<Self> {
        config.validate()?;
        let grid = GridState::try_new(config.size)?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        debug!(size = config.size, seed = ?config.seed, "session created");
        Ok(Self {
            config,
            grid,
            engine,
            rng,
            state: SimState::Editing,
            generation: 0,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start(&mut self) {
        if self.state == SimState::Editing {
            self.state = SimState::Running;
            info!(generation = self.generation, "simulation started");
        }
    }

    pub fn pause(&mut self) {
        if self.state == SimState::Running {
            self.state = SimState::Editing;
            info!(generation = self.generation, "simulation paused");
        }
    }

    pub fn toggle(&mut self) {
        match self.state {
            SimState::Editing => self.start(),
            SimState::Running => self.pause(),
        }
    }

    /// Stops the run and clears the board and its trace.
    pub fn reset(&mut self) {
        self.pause();
        self.grid.reset();
        self.generation = 0;
    }

    /// Fills the board at the configured density. Only allowed while editing.
    pub fn reseed(&mut self) -> Result<usize> {
        self.require_editing("reseed")?;
        let population = self
            .engine
            .seed_random(&mut self.grid, self.config.density, &mut self.rng)?;
        self.generation = 0;
        Ok(population)
    }

    /// Manual edit of one cell. Cells painted alive are traced.
    ///
    /// While running, the edit either pauses the simulation first or is
    /// refused, depending on [`LifeConfig::draw_pauses_run`].
    pub fn paint(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.grid.try_get(x, y)?;
        if self.is_running() {
            if !self.config.draw_pauses_run {
                return Err(LifeError::NotEditing { operation: "paint" });
            }
            self.pause();
        }
        self.grid.set(x, y, alive);
        // Hand-drawn cells count as ever alive, so a cell drawn and erased
        // before the next tick still renders as a trace.
        if alive {
            self.grid.mark_ever_alive(x, y);
        }
        Ok(())
    }

    /// Clears the board and stamps `pattern` in its middle. Only allowed while editing.
    pub fn place_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        self.require_editing("place pattern")?;
        let (w, h) = pattern.bounds();
        let size = self.grid.size();
        if w > size || h > size {
            return Err(LifeError::OutOfBounds { x: w - 1, y: h - 1, size });
        }
        self.grid.reset();
        self.generation = 0;
        pattern.place_centered(&mut self.grid)
    }

    /// Advances one generation when running; does nothing while editing.
    pub fn tick(&mut self) -> Option<GenerationStats> {
        if !self.is_running() {
            return None;
        }
        let stats = self.engine.advance(&mut self.grid);
        self.generation += 1;
        Some(stats)
    }

    fn require_editing(&self, operation: &'static str) -> Result<()> {
        match self.state {
            SimState::Editing => Ok(()),
            SimState::Running => Err(LifeError::NotEditing { operation }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn session(size: usize) -> Session {
        Session::new(LifeConfig { size, seed: Some(42), ..LifeConfig::default() }).unwrap()
    }

    #[test]
    fn starts_in_editing() {
        let mut session = session(8);
        assert_eq!(session.state(), SimState::Editing);
        assert_eq!(session.tick(), None);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn start_pause_cycle() {
        let mut session = session(8);
        session.start();
        assert!(session.is_running());
        assert!(session.tick().is_some());
        assert_eq!(session.generation(), 1);
        session.pause();
        assert_eq!(session.state(), SimState::Editing);
        session.toggle();
        assert!(session.is_running());
    }

    #[test]
    fn reset_returns_to_editing() {
        let mut session = session(8);
        session.paint(2, 2, true).unwrap();
        session.start();
        session.tick();
        session.reset();
        assert_eq!(session.state(), SimState::Editing);
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().population(), 0);
        assert!(session.grid().trace().iter().all(|&t| !t));
    }

    #[test]
    fn reseed_only_while_editing() {
        let mut session = session(16);
        session.start();
        assert_eq!(session.reseed(), Err(LifeError::NotEditing { operation: "reseed" }));
        session.pause();
        let population = session.reseed().unwrap();
        assert_eq!(session.grid().population(), population);
        assert_eq!(session.grid().cells(), session.grid().trace());
    }

    #[test]
    fn seeded_sessions_reseed_identically() {
        let mut a = session(32);
        let mut b = session(32);
        a.reseed().unwrap();
        b.reseed().unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn paint_while_running_pauses() {
        let mut session = session(8);
        session.start();
        session.paint(3, 3, true).unwrap();
        assert_eq!(session.state(), SimState::Editing);
        assert!(session.grid().get(3, 3));
        assert!(session.grid().is_ever_alive(3, 3));
    }

    #[test]
    fn paint_while_running_refused_without_policy() {
        let config = LifeConfig { size: 8, seed: Some(1), draw_pauses_run: false, ..LifeConfig::default() };
        let mut session = Session::new(config).unwrap();
        session.start();
        assert_eq!(session.paint(3, 3, true), Err(LifeError::NotEditing { operation: "paint" }));
        assert!(session.is_running());
        assert!(!session.grid().get(3, 3));
    }

    #[test]
    fn paint_dead_keeps_trace() {
        let mut session = session(8);
        session.paint(1, 1, true).unwrap();
        session.paint(1, 1, false).unwrap();
        assert!(!session.grid().get(1, 1));
        assert!(session.grid().is_ever_alive(1, 1));
    }

    #[test]
    fn paint_off_board_is_an_error() {
        let mut session = session(8);
        session.start();
        assert_eq!(session.paint(8, 0, true), Err(LifeError::OutOfBounds { x: 8, y: 0, size: 8 }));
        assert!(session.is_running());
    }

    #[test]
    fn place_pattern_clears_board() {
        let mut session = session(20);
        session.paint(0, 0, true).unwrap();
        let blinker = patterns::find("Blinker").unwrap();
        session.place_pattern(blinker).unwrap();
        assert!(!session.grid().get(0, 0));
        assert_eq!(session.grid().population(), 3);
        assert!(session.grid().get(9, 9));

        let gun = patterns::find("Gosper Glider Gun").unwrap();
        assert!(session.place_pattern(gun).is_err());
        assert_eq!(session.grid().population(), 3);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_board_is_rejected() {
        let config = LifeConfig { size: 1 << 32, ..LifeConfig::default() };
        assert!(matches!(Session::new(config), Err(LifeError::GridTooLarge(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LifeConfig { density: 2.0, ..LifeConfig::default() };
        assert!(matches!(Session::new(config), Err(LifeError::InvalidDensity(_))));
    }
}
