//! Search module for the Kamisado engine
//!
//! Contains the iterative-deepening alpha-beta searcher that drives the
//! board through do/undo to pick a move for the side to move.

pub mod alphabeta;

pub use alphabeta::{is_mate_score, SearchResult, Searcher, MAX_PLY, SAFETY_MARGIN, WIN_SCORE};
