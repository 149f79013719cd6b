//! Game settings
//!
//! Persisted as JSON next to the binary's working directory.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::WorldConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Side length of the square grid
    pub grid_size: u32,
    pub coin_count: u32,
    pub zombie_count: u32,
    /// Zombie move probability per tick (clamped to 0..=1)
    pub zombie_speed: f32,

    // === Pacing ===
    /// Simulation ticks per second
    pub ticks_per_second: f32,

    /// Fixed RNG seed; random per run when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            coin_count: DEFAULT_COIN_COUNT,
            zombie_count: DEFAULT_ZOMBIE_COUNT,
            zombie_speed: DEFAULT_ZOMBIE_SPEED,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file in the working directory
    pub const FILE_NAME: &'static str = "coin-grid.json";

    /// World parameters for a new run
    pub fn world_config(&self) -> WorldConfig {
        WorldConfig {
            grid_size: self.grid_size,
            coin_count: self.coin_count,
            zombie_count: self.zombie_count,
            zombie_speed: self.zombie_speed,
        }
    }

    /// Scheduler period. Bad rates fall back to the default, the rest are
    /// clamped to `MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND`.
    pub fn tick_interval(&self) -> Duration {
        let tps = if self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0 {
            self.ticks_per_second
                .clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND)
        } else {
            DEFAULT_TICKS_PER_SECOND
        };
        Duration::try_from_secs_f32(1.0 / tps)
            .unwrap_or_else(|_| Duration::from_secs_f32(1.0 / DEFAULT_TICKS_PER_SECOND))
    }

    /// Seed for the next run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Load settings from the default file, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(std::io::Error::from)
    }

    /// Save settings to the default file
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(Path::new(Self::FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
