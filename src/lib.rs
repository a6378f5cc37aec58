//! Kamisado game engine with sumo pushes
//!
//! A rules engine and AI opponent for Kamisado on the standard 8x8 board:
//! - Every cell has one of eight colors; each side owns one stone per color
//! - The color of the cell a stone lands on forces the opponent's next stone
//! - Stones move forward, straight or diagonally, and never through others
//! - Reaching the opponent's home row wins the round and promotes the stone
//!   to a sumo, which moves less far but can push weaker stones back
//! - Sumo points accumulate over rounds until one side reaches the target
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, colors, stones and sumo levels
//! - [`rules`]: Move validation, execution, undo and round reset
//! - [`eval`]: Static position evaluation
//! - [`search`]: Iterative-deepening alpha-beta over do/undo
//! - [`engine`]: Main AI engine, including the opening color choice
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use kamisado::{AIEngine, Board, Pos};
//!
//! let mut board = Board::new();
//! board.set_color(0).unwrap();
//! board.perform_move(Pos::new(5, 0)).unwrap();
//!
//! // AI responds for the second side with a short budget
//! let mut engine = AIEngine::with_config(4, 300);
//! let result = engine.get_move(&mut board, 300);
//! if let Some(pos) = result.best_move {
//!     board.perform_move(pos).unwrap();
//!     println!("AI plays at {pos}: {}", result.summary);
//! }
//! ```
//!
//! # Undo
//!
//! [`Board::perform_move`] returns a [`MoveRecord`] holding everything the
//! move changed; [`Board::undo_move`] restores the exact previous state. The
//! search relies on this instead of cloning boards.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{color_at, Board, Color, Pos, Side, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use rules::{MoveError, MoveOutcome, MoveRecord};
