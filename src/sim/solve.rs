//! Autopilot hook
//!
//! Front ends ask [`solve`] for a move each tick when autopilot is on and
//! feed the answer to [`GameState::apply_input`]. No strategy is wired in
//! yet, so it never moves the player.

use super::grid::Direction;
use super::state::GameState;

/// Pick a move for the player, or `None` to stand still
pub fn solve(_state: &GameState) -> Option<Direction> {
    None
}
