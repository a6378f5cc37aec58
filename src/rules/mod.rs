//! Game rules for Kamisado with sumo pushes
//!
//! This module implements the rule set on top of [`crate::board::Board`]:
//! - Path checks and legal move generation
//! - Sumo push resolution
//! - Move execution, undo, round scoring and reset

pub mod error;
pub mod movement;
pub mod play;
pub mod sumo;

// Re-exports for convenient access
pub use error::MoveError;
pub use play::{MoveOutcome, MoveRecord, Scoring, SumoPush};
