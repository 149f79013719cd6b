//! Fixed timestep simulation tick
//!
//! Scoring and terminal checks run against the player's cell before any
//! agent moves, so a coin or zombie stepping onto the player is only seen on
//! the following tick.

use rand::Rng;

use super::grid::step;
use super::state::{GameEvent, GameState};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen once a terminal flag is set
    if state.is_over() {
        return events;
    }

    // Collect coins on the player's cell
    let player = state.player;
    let before = state.coins.len();
    state.coins.retain(|coin| {
        if coin.pos == player {
            events.push(GameEvent::CoinCollected { pos: coin.pos });
            false
        } else {
            true
        }
    });
    let collected = before - state.coins.len();
    if collected > 0 {
        state.score += collected as u32;
        log::debug!(
            "Collected {} coin(s) at {:?}, score {}",
            collected,
            player,
            state.score
        );
    }

    if state.coins.is_empty() {
        state.won = true;
        events.push(GameEvent::Won);
        log::info!(
            "All coins collected after {} ticks (score {})",
            state.time_ticks,
            state.score
        );
    }

    // A win on this tick takes precedence over being caught
    if !state.won && state.zombies.iter().any(|z| z.pos == player) {
        state.lost = true;
        events.push(GameEvent::Caught);
        log::info!(
            "Caught at {:?} after {} ticks (score {})",
            player,
            state.time_ticks,
            state.score
        );
    }

    move_agents(state);

    state.time_ticks += 1;
    events
}

/// Random-walk every surviving coin, then every zombie
fn move_agents(state: &mut GameState) {
    let size = state.grid_size;
    let mut coins = std::mem::take(&mut state.coins);
    let mut zombies = std::mem::take(&mut state.zombies);
    let rng = state.rng();

    for coin in &mut coins {
        let dir = coin.direction.wander(rng);
        coin.pos = step(coin.pos, dir, size);
        coin.direction = dir;
    }

    for zombie in &mut zombies {
        let roll: f32 = rng.random();
        if roll > zombie.speed {
            continue;
        }
        zombie.direction = zombie.direction.wander(rng);
        zombie.pos = step(zombie.pos, zombie.direction, size);
    }

    state.coins = coins;
    state.zombies = zombies;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Direction;
    use crate::sim::state::{Coin, WorldConfig, Zombie};
    use glam::IVec2;

    fn empty_world(grid_size: u32) -> GameState {
        GameState::initialize(
            &WorldConfig {
                grid_size,
                coin_count: 0,
                zombie_count: 0,
                zombie_speed: 0.0,
            },
            12345,
        )
    }

    #[test]
    fn test_collect_only_coin_wins() {
        let mut state = empty_world(3);
        state.coins.push(Coin::new(IVec2::ZERO, Direction::Up));

        let events = tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(state.coins.is_empty());
        assert!(state.won);
        assert!(!state.lost);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(
            events,
            vec![
                GameEvent::CoinCollected { pos: IVec2::ZERO },
                GameEvent::Won
            ]
        );
    }

    #[test]
    fn test_win_checked_before_catch() {
        let mut state = empty_world(1);
        state.coins.push(Coin::new(IVec2::ZERO, Direction::Left));
        state
            .zombies
            .push(Zombie::new(IVec2::ZERO, Direction::Right, 1.0));

        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(state.won);
        assert!(!state.lost);
    }

    #[test]
    fn test_caught_while_coins_remain() {
        let mut state = empty_world(5);
        state.coins.push(Coin::new(IVec2::new(3, 3), Direction::Up));
        state
            .zombies
            .push(Zombie::new(IVec2::ZERO, Direction::Up, 0.0));

        let events = tick(&mut state);
        assert!(state.lost);
        assert!(!state.won);
        assert_eq!(events, vec![GameEvent::Caught]);
    }

    #[test]
    fn test_multiple_coins_same_cell() {
        let mut state = empty_world(4);
        state.coins.push(Coin::new(IVec2::ZERO, Direction::Up));
        state.coins.push(Coin::new(IVec2::ZERO, Direction::Down));
        state.coins.push(Coin::new(IVec2::new(2, 2), Direction::Down));

        tick(&mut state);
        assert_eq!(state.score, 2);
        assert_eq!(state.coins.len(), 1);
        assert!(!state.won);
    }

    #[test]
    fn test_frozen_after_terminal() {
        let mut state = empty_world(5);
        state.coins.push(Coin::new(IVec2::new(2, 2), Direction::Up));
        state
            .zombies
            .push(Zombie::new(IVec2::ZERO, Direction::Up, 1.0));
        tick(&mut state);
        assert!(state.lost);

        let coins = state.coins.clone();
        let zombies = state.zombies.clone();
        let ticks = state.time_ticks;
        for _ in 0..10 {
            assert!(tick(&mut state).is_empty());
        }
        assert_eq!(state.coins, coins);
        assert_eq!(state.zombies, zombies);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_coins_move_one_cell() {
        let mut state = empty_world(7);
        state.player = IVec2::new(6, 6);
        state.coins.push(Coin::new(IVec2::new(3, 3), Direction::Up));

        for _ in 0..20 {
            let before = state.coins[0];
            if before.pos == state.player {
                break;
            }
            tick(&mut state);
            let after = state.coins[0];
            assert_ne!(after.direction, before.direction.turned(2));
            assert_eq!(after.pos, step(before.pos, after.direction, 7));
        }
    }

    #[test]
    fn test_still_zombie_never_moves() {
        let mut state = empty_world(7);
        state.coins.push(Coin::new(IVec2::new(5, 5), Direction::Up));
        state
            .zombies
            .push(Zombie::new(IVec2::new(3, 3), Direction::Left, 0.0));
        // Keep the player away from both
        state.player = IVec2::new(1, 5);

        for _ in 0..50 {
            if state.is_over() {
                break;
            }
            tick(&mut state);
            assert_eq!(state.zombies[0].pos, IVec2::new(3, 3));
            assert_eq!(state.zombies[0].direction, Direction::Left);
        }
    }

    #[test]
    fn test_full_speed_zombie_always_moves() {
        let mut state = empty_world(7);
        state.coins.push(Coin::new(IVec2::new(5, 5), Direction::Up));
        state
            .zombies
            .push(Zombie::new(IVec2::new(3, 3), Direction::Left, 1.0));
        state.player = IVec2::new(0, 6);

        let before = state.zombies[0];
        tick(&mut state);
        let after = state.zombies[0];
        assert_eq!(after.pos, step(before.pos, after.direction, 7));
        assert_ne!(after.direction, before.direction.turned(2));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            Some(Direction::Right),
            None,
            Some(Direction::Up),
            Some(Direction::Up),
            None,
        ];

        for input in inputs {
            state1.apply_input(input);
            state2.apply_input(input);
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.coins, state2.coins);
        assert_eq!(state1.zombies, state2.zombies);
        assert_eq!(state1.score, state2.score);
    }
}
