//! Position evaluation

pub mod heuristic;

pub use heuristic::{
    color_diversity, has_winning_move, reachable_colors, score_position, winning_stone_count,
    IMMEDIATE_WIN,
};
