//! Main AI engine wrapping the searcher
//!
//! The engine decides everything the side to move has to decide:
//!
//! 1. **Opening color**: at the start of a round no color is forced, so the
//!    engine tries each of the eight and keeps the one with the best reply
//! 2. **Move**: iterative-deepening alpha-beta within the time budget
//!
//! # Example
//!
//! ```
//! use kamisado::{AIEngine, Board};
//!
//! let mut engine = AIEngine::with_config(3, 400);
//! let mut board = Board::new();
//!
//! let result = engine.think(&mut board);
//! println!("{}", result.summary);
//! result.apply(&mut board).unwrap();
//! assert_eq!(board.turn_count(), 1);
//! ```

use std::time::{Duration, Instant};

use log::info;

use crate::board::{color_name, Board, Color, Pos, NUM_COLORS};
use crate::rules::{MoveError, MoveRecord};
use crate::search::{SearchResult, Searcher};

/// Default maximum iteration depth
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Default thinking time per move in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: u64 = 1_000;

/// Result of an engine decision with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Color to open the round with, when none was forced yet
    pub color: Option<Color>,
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score for the side to move
    pub score: i32,
    /// Depth of the last completed iteration
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Human-readable diagnostics
    pub summary: String,
}

impl MoveResult {
    fn from_search(color: Option<Color>, result: SearchResult, time_ms: u64) -> Self {
        Self {
            color,
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            summary: result.summary(),
            time_ms,
        }
    }

    /// Play this decision on `board`: choose the color if needed, then move.
    ///
    /// Returns the move record, or `None` when there was no move to make.
    pub fn apply(&self, board: &mut Board) -> Result<Option<MoveRecord>, MoveError> {
        if let Some(color) = self.color {
            board.set_color(color)?;
        }
        self.best_move
            .map(|target| board.perform_move(target))
            .transpose()
    }
}

/// Main AI engine.
///
/// # Configuration
///
/// - Maximum search depth
/// - Time limit per decision
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    time_limit: Duration,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Create an engine with default settings (depth 100, 1000 ms).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT_MS)
    }

    /// Create an engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Maximum iteration depth
    /// * `time_limit_ms` - Time limit in milliseconds
    #[must_use]
    pub fn with_config(max_depth: u32, time_limit_ms: u64) -> Self {
        Self {
            searcher: Searcher::new(max_depth),
            time_limit: Duration::from_millis(time_limit_ms),
        }
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.searcher = Searcher::new(max_depth);
    }

    pub fn set_time_limit(&mut self, time_limit_ms: u64) {
        self.time_limit = Duration::from_millis(time_limit_ms);
    }

    pub fn max_depth(&self) -> u32 {
        self.searcher.max_depth()
    }

    pub fn time_limit_ms(&self) -> u64 {
        self.time_limit.as_millis() as u64
    }

    /// Decide for the side to move using the configured time limit.
    ///
    /// Picks the opening color first when the round has not started.
    /// The board is mutated during the search but restored before returning.
    pub fn think(&mut self, board: &mut Board) -> MoveResult {
        let budget = self.time_limit_ms();
        if board.current_color().is_none() && !board.is_round_over() {
            if let Some(result) = self.choose_color(board, budget) {
                return result;
            }
        }
        self.get_move(board, budget)
    }

    /// Best move for the side to move within `time_budget_ms`.
    pub fn get_move(&mut self, board: &mut Board, time_budget_ms: u64) -> MoveResult {
        let start = Instant::now();
        let result = self
            .searcher
            .search(board, Duration::from_millis(time_budget_ms));
        let result = MoveResult::from_search(None, result, start.elapsed().as_millis() as u64);
        info!(
            "{:?} plays {:?}: {}",
            board.current_player(),
            result.best_move,
            result.summary
        );
        result
    }

    /// Pick the opening color of a round.
    ///
    /// Every color is searched on a scratch copy with an equal share of the
    /// budget; the color whose best move scores highest wins, ties going to
    /// the lower color. Returns `None` if a color is already forced or the
    /// round is over.
    pub fn choose_color(&mut self, board: &Board, time_budget_ms: u64) -> Option<MoveResult> {
        if board.current_color().is_some() || board.is_round_over() {
            return None;
        }
        let start = Instant::now();
        let share = Duration::from_millis(time_budget_ms / NUM_COLORS as u64);

        let mut best: Option<(Color, SearchResult)> = None;
        for color in 0..NUM_COLORS as Color {
            let mut scratch = board.clone();
            if scratch.set_color(color).is_err() {
                continue;
            }
            let result = self.searcher.search(&mut scratch, share);
            let better = best
                .as_ref()
                .map_or(true, |(_, current)| result.score > current.score);
            if better {
                best = Some((color, result));
            }
        }

        let (color, result) = best?;
        let result = MoveResult::from_search(Some(color), result, start.elapsed().as_millis() as u64);
        info!(
            "{:?} opens with {} and plays {:?}: {}",
            board.current_player(),
            color_name(color),
            result.best_move,
            result.summary
        );
        Some(result)
    }
}
