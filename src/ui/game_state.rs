//! Game state management for the Hex GUI

use crate::{Game, GameConfig, GameError, MoveStrategy, Opponent, Pos, RandomStrategy, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs random computer
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Blue }
    }
}

impl GameMode {
    pub fn from_config(config: &GameConfig) -> Self {
        match config.opponent {
            Opponent::Random => GameMode::PvE { human_color: config.human },
            Opponent::Human => GameMode::PvP,
        }
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub winning_path: Option<Vec<Pos>>,
    pub message: Option<String>,
    computer: RandomStrategy,
}

impl GameState {
    pub fn new(size: usize, mode: GameMode, seed: Option<u64>) -> Self {
        let mut state = Self {
            game: Game::new(size),
            mode,
            winning_path: None,
            message: None,
            computer: RandomStrategy::with_seed(seed),
        };
        // the computer opens when the human plays Red
        state.play_computer_move();
        state
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, GameMode::from_config(config), config.seed)
    }

    /// Start over with the same size and mode
    pub fn reset(&mut self) {
        self.game = Game::new(self.game.size());
        self.winning_path = None;
        self.message = None;
        self.play_computer_move();
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.game.current_turn()
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.game.winner()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the computer's turn
    pub fn is_computer_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())?;
        self.play_computer_move();
        Ok(())
    }

    /// Execute a move (for both human and computer)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let outcome = self.game.play(pos)?;
        self.message = None;
        if outcome.winner.is_some() {
            self.winning_path = self.game.winning_path();
        }
        Ok(())
    }

    /// Let the computer answer if it is its turn
    fn play_computer_move(&mut self) {
        if !self.is_computer_turn() || self.game.is_over() {
            return;
        }

        let stone = self.current_turn();
        let Some(pos) = self.computer.select_move(self.game.board(), stone) else {
            self.message = Some("Computer could not find a move".to_string());
            return;
        };
        if let Err(e) = self.execute_move(pos) {
            tracing::error!(%pos, error = %e, "computer move rejected");
            self.message = Some(format!("Computer move rejected: {}", e));
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        // For PvE, undo two moves (human + computer)
        let undo_count = match self.mode {
            GameMode::PvE { human_color } => {
                if self.game.history().last().map(|&(_, s)| s) == Some(human_color) {
                    1
                } else {
                    2
                }
            }
            GameMode::PvP => 1,
        };

        for _ in 0..undo_count {
            self.game.undo();
        }
        self.winning_path = None;
        self.message = None;

        // undoing back past the computer's opening move hands it the turn again
        self.play_computer_move();
    }
}
