//! Toroidal grid arithmetic
//!
//! Cells are integer coordinates in `[0, size)` on both axes. Moving past an
//! edge wraps to the opposite edge.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Facing / movement direction. Discriminants match the turn arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Direction for an index, taken mod 4
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    /// Unit cell offset (y grows upward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
        }
    }

    /// Rotate by `turn` quarter steps clockwise (negative = counter-clockwise)
    pub fn turned(self, turn: i32) -> Self {
        Self::from_index(self.index() + turn)
    }

    /// Uniform random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_index(rng.random_range(0..4))
    }

    /// Random-walk perturbation: turn left, keep heading, or turn right with
    /// equal probability
    pub fn wander<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        self.turned(rng.random_range(-1..=1))
    }
}

/// Wrap a cell into `[0, size)` on both axes
#[inline]
pub fn wrap_cell(pos: IVec2, size: i32) -> IVec2 {
    IVec2::new(pos.x.rem_euclid(size), pos.y.rem_euclid(size))
}

/// One cell in `dir`, wrapped
#[inline]
pub fn step(pos: IVec2, dir: Direction, size: i32) -> IVec2 {
    wrap_cell(pos + dir.delta(), size)
}

/// Uniform random cell
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, size: i32) -> IVec2 {
    IVec2::new(rng.random_range(0..size), rng.random_range(0..size))
}
