//! Win condition checking for Hex
//!
//! Blue wins with an unbroken chain of blue cells from the West column to
//! the East column, Red with a chain from the North row to the South row.
//! Checks are pure queries over the board and the player's connectivity
//! graph; calling them every turn has no side effects.

use crate::board::{Board, Stone};
use crate::graph::ConnectivityGraph;

/// The two boundary sets a color has to join (None for Empty)
pub fn goal_edges(board: &Board, stone: Stone) -> Option<(&[usize], &[usize])> {
    match stone {
        Stone::Blue => Some((board.west(), board.east())),
        Stone::Red => Some((board.north(), board.south())),
        Stone::Empty => None,
    }
}

/// Endpoint pairs worth a path query: both ends hold `stone`
fn endpoint_pairs<'a>(
    board: &'a Board,
    stone: Stone,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let none: &[usize] = &[];
    let (src, dst) = goal_edges(board, stone).unwrap_or((none, none));
    src.iter()
        .copied()
        .filter(move |&s| board.stone_at(s) == stone)
        .flat_map(move |s| {
            dst.iter()
                .copied()
                .filter(move |&d| board.stone_at(d) == stone)
                .map(move |d| (s, d))
        })
}

/// Check whether `stone` has joined its two edges
pub fn check_win(board: &Board, graph: &ConnectivityGraph, stone: Stone) -> bool {
    endpoint_pairs(board, stone).any(|(s, d)| graph.has_path(s, d))
}

/// Find a winning chain of cell indices, starting on the West (Blue) or
/// North (Red) edge.
///
/// Endpoints are tried in index order, so the result is deterministic.
pub fn find_winning_path(
    board: &Board,
    graph: &ConnectivityGraph,
    stone: Stone,
) -> Option<Vec<usize>> {
    endpoint_pairs(board, stone).find_map(|(s, d)| graph.shortest_path(s, d))
}
