//! Coin Grid entry point
//!
//! Parses the command line, resolves settings and runs either the terminal
//! game or a headless simulation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use coin_grid::Settings;
use coin_grid::terminal;

#[derive(Parser, Debug)]
#[command(name = "coin-grid", about = "Collect the coins, avoid the zombies")]
struct Cli {
    /// Settings file (defaults to ./coin-grid.json when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Grid side length
    #[arg(long)]
    grid_size: Option<u32>,
    /// Number of coins
    #[arg(long)]
    coins: Option<u32>,
    /// Number of zombies
    #[arg(long)]
    zombies: Option<u32>,
    /// Zombie move probability per tick
    #[arg(long)]
    zombie_speed: Option<f32>,
    /// Simulation ticks per second
    #[arg(long)]
    tps: Option<f32>,
    /// Let the autopilot steer the player
    #[arg(long)]
    autopilot: bool,
    /// Simulate without a terminal UI and print the final state as JSON
    #[arg(long)]
    headless: bool,
    /// Tick limit for headless runs
    #[arg(long, default_value_t = 1000)]
    max_ticks: u64,
    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::load(),
        };

        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(grid_size) = self.grid_size {
            settings.grid_size = grid_size;
        }
        if let Some(coins) = self.coins {
            settings.coin_count = coins;
        }
        if let Some(zombies) = self.zombies {
            settings.zombie_count = zombies;
        }
        if let Some(speed) = self.zombie_speed {
            settings.zombie_speed = speed;
        }
        if let Some(tps) = self.tps {
            settings.ticks_per_second = tps;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    log::info!("Coin Grid starting with {:?}", settings);

    if cli.save_config {
        match &cli.config {
            Some(path) => settings
                .save_to(path)
                .with_context(|| format!("failed to save settings to {}", path.display()))?,
            None => settings
                .save()
                .with_context(|| format!("failed to save settings to {}", Settings::FILE_NAME))?,
        }
    }

    if cli.headless {
        let snap = terminal::run_headless(&settings, cli.max_ticks, cli.autopilot);
        println!("{}", serde_json::to_string_pretty(&snap)?);
        return Ok(());
    }

    terminal::run(settings, cli.autopilot)
}
