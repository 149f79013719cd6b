//! Coin Grid - collect wandering coins on a toroidal grid, dodge zombies
//!
//! Core modules:
//! - `sim`: Deterministic grid-world simulation (movement, scoring, win/lose)
//! - `settings`: Data-driven configuration
//! - `hud`: Text overlay content
//! - `terminal`: Terminal input/render front end and headless runner

pub mod hud;
pub mod settings;
pub mod sim;
pub mod terminal;

pub use settings::Settings;
pub use sim::{Direction, GameState, Snapshot, WorldConfig, tick};

/// Game configuration constants
pub mod consts {
    /// Grid side length (cells)
    pub const DEFAULT_GRID_SIZE: u32 = 7;
    pub const DEFAULT_COIN_COUNT: u32 = 10;
    pub const DEFAULT_ZOMBIE_COUNT: u32 = 1;
    /// Zombie move probability per tick
    pub const DEFAULT_ZOMBIE_SPEED: f32 = 0.2;
    /// Simulation rate (one tick every half second)
    pub const DEFAULT_TICKS_PER_SECOND: f32 = 2.0;
    /// Accepted simulation rate range
    pub const MIN_TICKS_PER_SECOND: f32 = 0.01;
    pub const MAX_TICKS_PER_SECOND: f32 = 1000.0;
}
