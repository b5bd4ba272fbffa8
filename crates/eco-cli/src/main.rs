//! Command-line driver for the river simulation.

mod render;
mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eco_core::SimulationConfig;
use eco_world::River;
use render::Palette;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "eco",
    version,
    about = "Run a one-dimensional predator/prey river simulation"
)]
struct Cli {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long, env = "ECO_CONFIG")]
    config: Option<PathBuf>,

    /// Number of cells in the river.
    #[arg(long)]
    size: Option<usize>,

    /// Initial fill probability in [0.0, 1.0].
    #[arg(long)]
    fill: Option<f64>,

    /// Steps to run.
    #[arg(long)]
    steps: Option<u64>,

    /// Pause between frames in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Random seed. A fresh seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Symbol drawn for predators.
    #[arg(long, default_value_t = 'B')]
    predator: char,

    /// Symbol drawn for prey.
    #[arg(long, default_value_t = 'F')]
    prey: char,

    /// Symbol drawn for empty cells.
    #[arg(long, default_value_t = '-')]
    empty: char,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Headed frames of cell symbols
    Text,
    /// One JSON snapshot per line
    Json,
}

impl Cli {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(size) = self.size {
            config.river.size = size;
        }
        if let Some(fill) = self.fill {
            config.river.fill_probability = fill;
        }
        if let Some(steps) = self.steps {
            config.run.steps = steps;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.run.delay_ms = delay_ms;
        }
        config.river.seed = match (self.seed, &self.config) {
            (Some(seed), _) => seed,
            (None, Some(_)) => config.river.seed,
            (None, None) => rand::random(),
        };

        Ok(config)
    }

    fn palette(&self) -> Palette {
        Palette {
            predator: self.predator,
            prey: self.prey,
            empty: self.empty,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry()?;

    let config = cli.resolve_config()?;
    info!(
        size = config.river.size,
        fill_probability = config.river.fill_probability,
        seed = config.river.seed,
        steps = config.run.steps,
        "Starting Eco-River simulation"
    );

    let mut river = River::from_config(&config.river).context("invalid river parameters")?;
    let palette = cli.palette();
    let delay = Duration::from_millis(config.run.delay_ms);
    let steps = config.run.steps;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for snapshot in river.run(steps) {
        match cli.format {
            Format::Text => {
                writeln!(out, "{}", render::heading(&snapshot))?;
                writeln!(out, "{}", palette.frame(&snapshot.cells))?;
            }
            Format::Json => {
                serde_json::to_writer(&mut out, &snapshot)?;
                writeln!(out)?;
            }
        }
        out.flush()?;

        if !delay.is_zero() && snapshot.tick < steps {
            thread::sleep(delay);
        }
    }

    let census = river.census();
    info!(
        tick = river.tick(),
        predators = census.predators,
        prey = census.prey,
        empty = census.empty,
        "Simulation finished"
    );

    Ok(())
}
