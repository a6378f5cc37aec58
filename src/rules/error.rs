//! Rule violations reported by the board

use thiserror::Error;

/// Why a command was rejected.
///
/// All variants describe illegal input, never a transient failure; the
/// board is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("a color must be chosen before the first move")]
    ColorNotSet,
    #[error("the color for this round has already been chosen")]
    ColorAlreadySet,
    #[error("there is no color {0}")]
    InvalidColor(u8),
    #[error("position out of bounds")]
    OutOfBounds,
    #[error("cannot move onto a stone")]
    OccupiedTarget,
    #[error("can only move forward")]
    WrongDirection,
    #[error("can only move straight or diagonally")]
    NotStraightOrDiagonal,
    #[error("cannot move through stones")]
    Blocked,
    #[error("move exceeds max range")]
    RangeExceeded,
    #[error("sumo cannot push own stone")]
    PushOwnStone,
    #[error("sumo cannot push a sumo of the same or greater strength")]
    PushTooStrong,
    #[error("sumo cannot push off the board")]
    PushOffBoard,
    #[error("sumo cannot push that many stones")]
    PushLimitExceeded,
    #[error("the round is not over yet")]
    RoundNotOver,
    #[error("the round is over")]
    RoundOver,
    #[error("the match is over")]
    MatchOver,
    #[error("invalid setup: {0}")]
    InvalidSetup(&'static str),
}
