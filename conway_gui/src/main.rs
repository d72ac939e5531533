// main.rs - Conway's Game of Life window
// Board logic lives in conway_core; this crate only paces, draws and forwards input.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use conway_core::{DEFAULT_DENSITY, DEFAULT_SIZE, GenerationStats, LifeConfig, Session};
use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};
use tracing::info;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "conway", version, about = "Conway's Game of Life on a bounded board")]
struct Cli {
    /// Cells per side of the board.
    #[arg(long, env = "CONWAY_SIZE", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Screen pixels per cell.
    #[arg(long, env = "CONWAY_SCALE", default_value_t = 4.0)]
    scale: f32,

    /// Alive probability used by "Random".
    #[arg(long, env = "CONWAY_DENSITY", default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Milliseconds between generations while running.
    #[arg(long, env = "CONWAY_TICK_MS", default_value_t = 20)]
    tick_ms: u64,

    /// Fixed seed for reproducible random boards.
    #[arg(long, env = "CONWAY_SEED")]
    seed: Option<u64>,

    /// Ignore drawing while running instead of pausing to draw.
    #[arg(long, env = "CONWAY_NO_DRAW_WHILE_RUNNING")]
    no_draw_while_running: bool,
}

impl Cli {
    fn config(&self) -> LifeConfig {
        LifeConfig {
            size: self.size,
            density: self.density,
            tick_interval: Duration::from_millis(self.tick_ms),
            draw_pauses_run: !self.no_draw_while_running,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    if !(cli.scale.is_finite() && cli.scale >= 1.0) {
        return Err(anyhow!("scale must be at least 1, got {}", cli.scale));
    }

    let session = Session::new(cli.config()).context("invalid board configuration")?;
    let side = session.grid().size() as f32 * cli.scale;
    info!(size = cli.size, scale = cli.scale, seed = ?cli.seed, "starting Game of Life");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side.max(640.0) + 32.0, side + 160.0]),
        ..Default::default()
    };

    let scale = cli.scale;
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(session, scale))),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Window state around one simulation session.
pub struct GameOfLife {
    session: Session,

    pub last_update: Instant,
    pub update_interval: Duration,
    pub scale: f32,
    pub alive_color: Color32,
    pub trace_color: Color32,
    pub empty_color: Color32,
    pub selected_pattern: usize,
    pub last_stats: Option<GenerationStats>,

    texture: Option<egui::TextureHandle>,
}

impl GameOfLife {
    pub fn new(session: Session, scale: f32) -> Self {
        let update_interval = session.config().tick_interval;
        Self {
            session,
            last_update: Instant::now(),
            update_interval,
            scale,
            alive_color: Color32::BLACK,
            trace_color: Color32::GREEN,
            empty_color: Color32::WHITE,
            selected_pattern: 0,
            last_stats: None,
            texture: None,
        }
    }

    /// Advances one generation once the pacing interval has elapsed.
    fn step_if_due(&mut self) {
        if self.session.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.last_stats = self.session.tick();
            self.last_update = Instant::now();
        }
    }
}
