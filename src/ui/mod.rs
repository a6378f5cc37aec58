//! GUI module for the Kamisado game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::KamisadoApp;
pub use game_state::{GameConfig, GameMode, GameState};
