//! Game state and core simulation types
//!
//! Everything the update rule reads or writes lives on [`GameState`].

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, random_cell, step};
use crate::consts::*;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin at this cell was picked up
    CoinCollected { pos: IVec2 },
    /// Last coin collected
    Won,
    /// A zombie reached the player
    Caught,
}

/// World parameters fixed for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub grid_size: u32,
    pub coin_count: u32,
    pub zombie_count: u32,
    pub zombie_speed: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            coin_count: DEFAULT_COIN_COUNT,
            zombie_count: DEFAULT_ZOMBIE_COUNT,
            zombie_speed: DEFAULT_ZOMBIE_SPEED,
        }
    }
}

/// Clamp a move probability into `[0, 1]`. NaN counts as 0.
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() { 0.0 } else { speed.clamp(0.0, 1.0) }
}

/// A wandering coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: IVec2,
    pub direction: Direction,
}

impl Coin {
    pub fn new(pos: IVec2, direction: Direction) -> Self {
        Self { pos, direction }
    }
}

/// A wandering zombie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub pos: IVec2,
    pub direction: Direction,
    /// Per-tick move probability
    pub speed: f32,
}

impl Zombie {
    pub fn new(pos: IVec2, direction: Direction, speed: f32) -> Self {
        Self {
            pos,
            direction,
            speed: clamp_speed(speed),
        }
    }
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Side length of the square grid
    pub grid_size: i32,
    pub player: IVec2,
    /// Remaining coins, in creation order
    pub coins: Vec<Coin>,
    /// Zombies, in creation order
    pub zombies: Vec<Zombie>,
    /// Coins collected so far
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub won: bool,
    /// Caught by a zombie
    pub lost: bool,
}

impl GameState {
    /// New run with the default world
    pub fn new(seed: u64) -> Self {
        Self::initialize(&WorldConfig::default(), seed)
    }

    /// Set up a run: player at the origin, coins then zombies at uniform
    /// random cells (overlaps allowed) with uniform random headings.
    pub fn initialize(config: &WorldConfig, seed: u64) -> Self {
        let grid_size = config.grid_size.clamp(1, i32::MAX as u32) as i32;
        let mut rng = Pcg32::seed_from_u64(seed);

        let coins = (0..config.coin_count)
            .map(|_| {
                let pos = random_cell(&mut rng, grid_size);
                Coin::new(pos, Direction::random(&mut rng))
            })
            .collect();

        let zombies = (0..config.zombie_count)
            .map(|_| {
                let pos = random_cell(&mut rng, grid_size);
                Zombie::new(pos, Direction::random(&mut rng), config.zombie_speed)
            })
            .collect();

        log::debug!(
            "World initialized: {0}x{0} grid, {1} coins, {2} zombies, seed {3}",
            grid_size,
            config.coin_count,
            config.zombie_count,
            seed
        );

        Self {
            seed,
            rng,
            grid_size,
            player: IVec2::ZERO,
            coins,
            zombies,
            score: 0,
            time_ticks: 0,
            won: false,
            lost: false,
        }
    }

    /// Move the player one cell right away. Scoring waits for the next tick.
    pub fn apply_input(&mut self, direction: Option<Direction>) {
        if let Some(dir) = direction {
            self.player = step(self.player, dir, self.grid_size);
        }
    }

    /// Either terminal flag is set
    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
