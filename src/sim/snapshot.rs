//! Read-only view of the world for render sinks

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: i32,
    pub player: IVec2,
    pub coins: Vec<IVec2>,
    pub zombies: Vec<IVec2>,
    pub score: u32,
    pub time_ticks: u64,
    pub won: bool,
    pub lost: bool,
}

impl Snapshot {
    pub fn phase(&self) -> GamePhase {
        // Both flags can't normally be set at once; a win reads as a win
        if self.won {
            GamePhase::Won
        } else if self.lost {
            GamePhase::Lost
        } else {
            GamePhase::Playing
        }
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            grid_size: state.grid_size,
            player: state.player,
            coins: state.coins.iter().map(|c| c.pos).collect(),
            zombies: state.zombies.iter().map(|z| z.pos).collect(),
            score: state.score,
            time_ticks: state.time_ticks,
            won: state.won,
            lost: state.lost,
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}
