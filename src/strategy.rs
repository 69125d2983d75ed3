//! Move selection for the computer side
//!
//! The engine does not evaluate positions. A front end asks a
//! [`MoveStrategy`] for a legal cell whenever the computer is to move.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone};

/// Something that picks a move for a given color
pub trait MoveStrategy {
    /// Pick an empty cell, or None if the board is full
    fn select_move(&mut self, board: &Board, stone: Stone) -> Option<Pos>;

    fn name(&self) -> &str;
}

/// Plays a uniformly random empty cell
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    /// Create from system entropy
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for reproducible games
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::from_seed)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _stone: Stone) -> Option<Pos> {
        let empty = board.size() * board.size() - board.stone_count();
        if empty == 0 {
            return None;
        }
        let pick = self.rng.random_range(0..empty);
        board.empty_cells().nth(pick)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
