//! GUI module for the Hex game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::HexApp;
pub use game_state::{GameMode, GameState};
