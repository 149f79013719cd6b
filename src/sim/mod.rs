//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per scheduler call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod grid;
pub mod snapshot;
pub mod solve;
pub mod state;
pub mod tick;

pub use grid::{Direction, random_cell, step, wrap_cell};
pub use snapshot::{GamePhase, Snapshot};
pub use solve::solve;
pub use state::{Coin, GameEvent, GameState, WorldConfig, Zombie, clamp_speed};
pub use tick::tick;
