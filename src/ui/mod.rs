//! GUI module for playing against the heuristic
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::ConnectFourApp;
pub use game_state::{GameMode, GameResult, GameState};
