//! Game rules for Hex
//!
//! Any empty cell is a legal move, so the only rule to check is whether a
//! player has joined their two board edges.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, find_winning_path, goal_edges};
