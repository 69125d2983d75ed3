//! Game session: board, per-player graphs and turn order
//!
//! A move runs through the layers in order: the board checks and applies
//! it, the grid finds same-colored neighbors, the mover's graph gains the
//! new edges, and the win check runs for the mover only.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::graph::ConnectivityGraph;
use crate::rules;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Terminal: no further moves are accepted
    Won(Stone),
}

/// What a successful move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub stone: Stone,
    pub winner: Option<Stone>,
}

/// A single game of Hex
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    blue_graph: ConnectivityGraph,
    red_graph: ConnectivityGraph,
    current_turn: Stone,
    status: GameStatus,
    history: Vec<(Pos, Stone)>,
}

impl Game {
    /// New empty game; Blue moves first
    pub fn new(size: usize) -> Self {
        let board = Board::new(size);
        let cells = board.grid().cell_count();
        Self {
            board,
            blue_graph: ConnectivityGraph::new(cells),
            red_graph: ConnectivityGraph::new(cells),
            current_turn: Stone::Blue,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(cells),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::Won(stone) => Some(stone),
            GameStatus::InProgress => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    #[inline]
    pub fn is_available(&self, pos: Pos) -> bool {
        self.board.is_available(pos)
    }

    /// Connectivity graph of a player (panics for Empty)
    pub fn graph(&self, stone: Stone) -> &ConnectivityGraph {
        match stone {
            Stone::Blue => &self.blue_graph,
            Stone::Red => &self.red_graph,
            Stone::Empty => panic!("empty cells have no connectivity graph"),
        }
    }

    fn graph_mut(&mut self, stone: Stone) -> &mut ConnectivityGraph {
        match stone {
            Stone::Blue => &mut self.blue_graph,
            Stone::Red => &mut self.red_graph,
            Stone::Empty => panic!("empty cells have no connectivity graph"),
        }
    }

    /// Play a stone for the side to move.
    ///
    /// Rejected moves leave the whole session unchanged.
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        if let Some(winner) = self.winner() {
            return Err(GameError::GameOver { winner });
        }

        let stone = self.current_turn;
        self.board.make_move(pos, stone)?;

        let idx = self.board.grid().to_index(pos);
        let neighbors = self.board.neighbors_of_color(idx, stone);
        let graph = self.graph_mut(stone);
        graph.add_node(idx);
        for &n in &neighbors {
            graph.add_edge(idx, n);
        }
        self.history.push((pos, stone));
        debug!(%pos, stone = stone.name(), ?neighbors, "stone placed");

        let winner = if self.check_win(stone) {
            info!(stone = stone.name(), moves = self.history.len(), "game won");
            self.status = GameStatus::Won(stone);
            Some(stone)
        } else {
            self.current_turn = stone.opponent();
            None
        };

        Ok(MoveOutcome { pos, stone, winner })
    }

    /// Has `stone` joined its two edges? Pure query.
    pub fn check_win(&self, stone: Stone) -> bool {
        match stone {
            Stone::Empty => false,
            _ => rules::check_win(&self.board, self.graph(stone), stone),
        }
    }

    /// The chain of positions that won the game
    pub fn winning_path(&self) -> Option<Vec<Pos>> {
        let winner = self.winner()?;
        let path = rules::find_winning_path(&self.board, self.graph(winner), winner)?;
        let grid = self.board.grid();
        Some(path.into_iter().map(|idx| grid.to_pos(idx)).collect())
    }

    /// Take back the last move by replaying the rest into a fresh game.
    ///
    /// Returns the removed move, if there was one.
    pub fn undo(&mut self) -> Option<(Pos, Stone)> {
        let (&last, rest) = self.history.split_last()?;
        let mut replay = Game::new(self.size());
        for &(pos, _) in rest {
            let replayed = replay.play(pos);
            debug_assert!(replayed.is_ok(), "history replay rejected {}", pos);
        }
        debug!(pos = %last.0, stone = last.1.name(), "move undone");
        *self = replay;
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    #[test]
    fn test_new_game() {
        let game = Game::new(5);
        assert_eq!(game.current_turn(), Stone::Blue);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert!(game.is_available(Pos::new(2, 2)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(5);
        let out = game.play(Pos::new(2, 2)).unwrap();
        assert_eq!(out.stone, Stone::Blue);
        assert_eq!(out.winner, None);
        assert_eq!(game.current_turn(), Stone::Red);
        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(game.current_turn(), Stone::Blue);
        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::Red);
        assert_eq!(game.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(3);
        game.play(Pos::new(1, 1)).unwrap();
        assert_eq!(
            game.play(Pos::new(1, 1)),
            Err(GameError::Move(MoveError::CellOccupied(Pos::new(1, 1))))
        );
        assert_eq!(
            game.play(Pos::new(3, 0)),
            Err(GameError::Move(MoveError::OutOfBounds(Pos::new(3, 0))))
        );
        assert_eq!(game.current_turn(), Stone::Red);
        assert_eq!(game.board().get(Pos::new(1, 1)), Stone::Blue);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_edges_only_join_same_color() {
        let mut game = Game::new(4);
        game.play(Pos::new(1, 1)).unwrap(); // blue
        game.play(Pos::new(1, 2)).unwrap(); // red, adjacent to blue
        game.play(Pos::new(2, 2)).unwrap(); // blue, below (1, 1)
        assert_eq!(game.graph(Stone::Blue).edge_count(), 1);
        assert!(game.graph(Stone::Blue).has_edge(5, 10));
        assert_eq!(game.graph(Stone::Red).edge_count(), 0);
        assert!(game.graph(Stone::Red).contains(6));
    }

    /// Blue takes row 0 while Red fills row 2 without reaching South
    fn play_blue_top_row(game: &mut Game) -> Vec<MoveOutcome> {
        let mut outcomes = Vec::new();
        for col in 0..4 {
            outcomes.push(game.play(Pos::new(0, col)).unwrap());
            if col < 3 {
                game.play(Pos::new(2, col)).unwrap();
            }
        }
        outcomes
    }

    #[test]
    fn test_win_is_terminal() {
        let mut game = Game::new(4);
        let outcomes = play_blue_top_row(&mut game);
        assert!(outcomes[..3].iter().all(|o| o.winner.is_none()));
        assert_eq!(outcomes[3].winner, Some(Stone::Blue));
        assert_eq!(game.status(), GameStatus::Won(Stone::Blue));
        assert!(game.check_win(Stone::Blue));
        assert!(!game.check_win(Stone::Red));
        assert!(!game.check_win(Stone::Empty));

        assert_eq!(
            game.play(Pos::new(3, 3)),
            Err(GameError::GameOver { winner: Stone::Blue })
        );
        assert!(game.is_available(Pos::new(3, 3)));
    }

    #[test]
    fn test_winning_path_positions() {
        let mut game = Game::new(4);
        assert_eq!(game.winning_path(), None);
        play_blue_top_row(&mut game);
        assert_eq!(
            game.winning_path(),
            Some((0..4).map(|c| Pos::new(0, c)).collect())
        );
    }

    #[test]
    fn test_check_win_has_no_side_effects() {
        let mut game = Game::new(4);
        game.play(Pos::new(0, 0)).unwrap();
        let before = game.clone();
        for _ in 0..3 {
            assert!(!game.check_win(Stone::Blue));
        }
        assert_eq!(game.board(), before.board());
        assert_eq!(game.graph(Stone::Blue), before.graph(Stone::Blue));
    }

    #[test]
    fn test_undo() {
        let mut game = Game::new(4);
        assert_eq!(game.undo(), None);

        game.play(Pos::new(1, 1)).unwrap();
        game.play(Pos::new(0, 0)).unwrap();
        game.play(Pos::new(1, 2)).unwrap();
        assert_eq!(game.graph(Stone::Blue).edge_count(), 1);

        assert_eq!(game.undo(), Some((Pos::new(1, 2), Stone::Blue)));
        assert_eq!(game.current_turn(), Stone::Blue);
        assert!(game.is_available(Pos::new(1, 2)));
        assert_eq!(game.graph(Stone::Blue).edge_count(), 0);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_undo_reopens_won_game() {
        let mut game = Game::new(4);
        play_blue_top_row(&mut game);
        assert!(game.is_over());
        game.undo();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_turn(), Stone::Blue);
    }
}
