//! Hex game engine
//!
//! Two players take turns claiming cells of an N x N hex board. Blue wins
//! by joining the West and East columns with an unbroken chain of blue
//! cells, Red by joining the North and South rows.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid geometry (odd-row offset layout) and cell storage
//! - [`graph`]: Per-player connectivity graph over owned cells
//! - [`rules`]: Win detection over a player's graph
//! - [`game`]: Game session with turn order, history and undo
//! - [`strategy`]: Pluggable move selection for the computer side
//! - [`render`]: Text rendering of the board
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use hex::{Game, MoveStrategy, Pos, RandomStrategy, Stone};
//!
//! let mut game = Game::new(4);
//! let mut computer = RandomStrategy::from_seed(7);
//!
//! // Blue opens in the top-left corner
//! game.play(Pos::new(0, 0)).unwrap();
//!
//! // Red answers with a random legal move
//! if let Some(pos) = computer.select_move(game.board(), Stone::Red) {
//!     game.play(pos).unwrap();
//!     println!("Red plays at {}", pos);
//! }
//!
//! assert!(!game.check_win(Stone::Blue));
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod graph;
pub mod render;
pub mod rules;
pub mod strategy;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Grid, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, Opponent};
pub use error::{ConfigError, GameError, MoveError};
pub use game::{Game, GameStatus, MoveOutcome};
pub use graph::ConnectivityGraph;
pub use strategy::{MoveStrategy, RandomStrategy};
