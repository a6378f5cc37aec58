//! Alpha-Beta search with iterative deepening
//!
//! Negamax with alpha-beta pruning over the board's own do/undo primitives:
//! every child is reached with [`Board::perform_move`] and left again with
//! [`Board::undo_move`], so the search never copies the board.
//!
//! # Features
//!
//! - Iterative deepening, with the time budget checked between iterations
//! - Mate-distance pruning so shorter wins are preferred over longer ones
//! - Correct handling of skipped turns, where the same side moves twice
//! - Early stop once a win or loss has been proven
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use kamisado::board::Board;
//! use kamisado::search::Searcher;
//!
//! let mut board = Board::new();
//! board.set_color(3).unwrap();
//!
//! let mut searcher = Searcher::new(2);
//! let result = searcher.search(&mut board, Duration::from_millis(200));
//! assert!(board.get_legal_moves().contains(&result.best_move.unwrap()));
//! ```

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::board::{Board, Pos};
use crate::eval::{score_position, IMMEDIATE_WIN};

/// Score of a round won at the current node
pub const WIN_SCORE: i32 = IMMEDIATE_WIN;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Deepest ply a search may reach; scores within this of `WIN_SCORE` are proven results
pub const MAX_PLY: u32 = 1_000;

/// Time kept in reserve so the last iteration does not overrun the budget
pub const SAFETY_MARGIN: Duration = Duration::from_millis(50);

/// Whether `score` encodes a forced win or loss rather than a heuristic value
#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= WIN_SCORE - MAX_PLY as i32
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the position for the side to move
    pub score: i32,
    /// Depth of the last completed iteration
    pub depth: u32,
    /// Nodes evaluated across all iterations
    pub nodes: u64,
    /// Wall-clock time spent
    pub time_ms: u64,
}

impl SearchResult {
    fn empty(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            depth: 0,
            nodes: 0,
            time_ms: 0,
        }
    }

    /// Half-moves until the proven end of the round, if the score is a proven result
    pub fn mate_distance(&self) -> Option<u32> {
        is_mate_score(self.score).then(|| (WIN_SCORE - self.score.abs()) as u32)
    }

    /// One-line description of the result for logs and the side panel
    pub fn summary(&self) -> String {
        let verdict = match self.mate_distance() {
            Some(n) if self.score > 0 => format!("forced win in {n} half-moves"),
            Some(n) => format!("forced loss in {n} half-moves"),
            None => format!("evaluation score {}", self.score),
        };
        format!("{verdict}, {} nodes, depth {}", self.nodes, self.depth)
    }
}

/// Iterative-deepening alpha-beta searcher.
///
/// Holds only per-search bookkeeping; the board itself is borrowed mutably
/// for the duration of [`Searcher::search`] and handed back unchanged.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u32,
    nodes: u64,
    /// Best root move of the previous iteration, tried first
    pv_move: Option<Pos>,
    /// Best root move of the running iteration
    root_best: Option<Pos>,
}

impl Searcher {
    /// Create a searcher that deepens up to `max_depth` plies
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth: max_depth.clamp(1, MAX_PLY - 1),
            nodes: 0,
            pv_move: None,
            root_best: None,
        }
    }

    /// Maximum iteration depth
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Nodes evaluated by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for the side to move within `time_limit`.
    ///
    /// Iterations run at depth 1, 2, ... until `max_depth`, a proven result,
    /// or until less than [`SAFETY_MARGIN`] of the budget remains. An
    /// iteration is never interrupted, so a deep one may overrun the budget.
    pub fn search(&mut self, board: &mut Board, time_limit: Duration) -> SearchResult {
        let start = Instant::now();
        let deadline = time_limit.saturating_sub(SAFETY_MARGIN);
        self.nodes = 0;
        self.pv_move = None;

        if board.is_round_over() {
            return SearchResult::empty(-WIN_SCORE);
        }
        let moves = board.get_legal_moves();
        if moves.is_empty() {
            return SearchResult::empty(0);
        }

        let mut best = SearchResult {
            best_move: moves.first().copied(),
            ..SearchResult::empty(0)
        };

        for depth in 1..=self.max_depth {
            self.root_best = None;
            let score = self.alphabeta(board, depth, 0, -INF, INF);

            if let Some(pos) = self.root_best {
                best.best_move = Some(pos);
                self.pv_move = Some(pos);
            }
            best.score = score;
            best.depth = depth;
            best.nodes = self.nodes;
            debug!(
                "depth {depth}: best {:?} score {score} ({} nodes)",
                best.best_move, self.nodes
            );

            if is_mate_score(score) || start.elapsed() >= deadline {
                break;
            }
        }

        best.time_ms = start.elapsed().as_millis() as u64;
        best
    }

    /// Negamax alpha-beta; returns the score for the side to move.
    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let ply_score = ply as i32;
        if board.is_round_over() {
            self.nodes += 1;
            return -WIN_SCORE + ply_score;
        }
        if depth == 0 {
            self.nodes += 1;
            let score = score_position(board);
            // The forced stone reaches the goal on the next half-move
            if score >= IMMEDIATE_WIN {
                return WIN_SCORE - ply_score - 1;
            }
            return score;
        }

        if ply > 0 {
            alpha = alpha.max(-WIN_SCORE + ply_score);
            beta = beta.min(WIN_SCORE - ply_score);
            if alpha >= beta {
                return alpha;
            }
        }

        let mover = board.current_player();
        let moves = self.ordered_moves(board, ply);
        if moves.is_empty() {
            // Only reachable before a color is chosen
            self.nodes += 1;
            return score_position(board);
        }

        for target in moves {
            let record = match board.perform_move(target) {
                Ok(record) => record,
                Err(err) => {
                    warn!("generated move {target} rejected: {err}");
                    continue;
                }
            };

            let score = match record.scoring {
                Some(scoring) => {
                    self.nodes += 1;
                    let distance = WIN_SCORE - ply_score - 1;
                    if scoring.side == mover {
                        distance
                    } else {
                        -distance
                    }
                }
                None if board.current_player() == mover => {
                    self.alphabeta(board, depth - 1, ply + 1, alpha, beta)
                }
                None => -self.alphabeta(board, depth - 1, ply + 1, -beta, -alpha),
            };

            board.undo_move(record);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
                if ply == 0 {
                    self.root_best = Some(target);
                }
            }
        }

        alpha
    }

    /// Legal moves, longest advance first; at the root the previous
    /// iteration's best move leads.
    fn ordered_moves(&self, board: &Board, ply: u32) -> Vec<Pos> {
        let mut moves = board.get_legal_moves();
        let origin = match board.current_color() {
            Some(color) => board.player(board.current_player()).stone(color),
            None => return moves,
        };
        moves.sort_by_key(|pos| std::cmp::Reverse((pos.row - origin.row).abs()));

        if ply == 0 {
            if let Some(pv) = self.pv_move {
                if let Some(idx) = moves.iter().position(|&m| m == pv) {
                    let pv = moves.remove(idx);
                    moves.insert(0, pv);
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    /// First side's stone 0 two rows from the goal with an open file ahead.
    fn near_win_board() -> Board {
        let mut first = *Board::new().stones(Side::First);
        first[0] = Pos::new(2, 3);
        let mut second = *Board::new().stones(Side::Second);
        second[4] = Pos::new(3, 0);
        let mut board = Board::from_stones(first, second).unwrap();
        board.set_color(0).unwrap();
        board
    }

    #[test]
    fn test_finds_immediate_win() {
        let mut board = near_win_board();
        let mut searcher = Searcher::new(4);
        let result = searcher.search(&mut board, Duration::from_millis(500));

        assert_eq!(result.best_move, Some(Pos::new(0, 3)));
        assert_eq!(result.score, WIN_SCORE - 1);
        assert_eq!(result.mate_distance(), Some(1));
        assert_eq!(result.depth, 1);
        assert!(result.summary().starts_with("forced win in 1 half-moves"));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        board.set_color(2).unwrap();
        board.perform_move(Pos::new(5, 2)).unwrap();
        let before = board.clone();

        let mut searcher = Searcher::new(3);
        let result = searcher.search(&mut board, Duration::from_millis(2_000));

        assert_eq!(board, before);
        assert!(result.nodes > 0);
        assert!(result.depth >= 1);
    }

    #[test]
    fn test_best_move_is_legal() {
        let mut board = Board::new();
        board.set_color(6).unwrap();
        let mut searcher = Searcher::new(3);
        for _ in 0..6 {
            if board.is_round_over() {
                break;
            }
            let result = searcher.search(&mut board, Duration::from_millis(300));
            let best = result.best_move.unwrap();
            assert!(board.get_legal_moves().contains(&best));
            board.perform_move(best).unwrap();
        }
    }

    #[test]
    fn test_no_move_when_round_over() {
        let mut board = near_win_board();
        board.perform_move(Pos::new(0, 3)).unwrap();
        let mut searcher = Searcher::new(4);
        let result = searcher.search(&mut board, Duration::from_millis(100));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_summary_formats() {
        let loss = SearchResult {
            best_move: None,
            score: -(WIN_SCORE - 4),
            depth: 6,
            nodes: 120,
            time_ms: 3,
        };
        assert_eq!(loss.summary(), "forced loss in 4 half-moves, 120 nodes, depth 6");

        let eval = SearchResult { score: 17, ..loss };
        assert_eq!(eval.mate_distance(), None);
        assert_eq!(eval.summary(), "evaluation score 17, 120 nodes, depth 6");
    }

    #[test]
    fn test_max_depth_clamped() {
        assert_eq!(Searcher::new(0).max_depth(), 1);
        assert_eq!(Searcher::new(u32::MAX).max_depth(), MAX_PLY - 1);
    }

    #[test]
    fn test_win_after_skipped_opponent() {
        // Moving to (1, 6) walls in Second's stone 0, so First moves again
        // with stone 0, which then has an open file to (0, 2)
        let mut first = *Board::new().stones(Side::First);
        first[0] = Pos::new(2, 2);
        first[2] = Pos::new(1, 7);
        first[3] = Pos::new(2, 6);
        let mut second = *Board::new().stones(Side::Second);
        second[5] = Pos::new(3, 0);
        let mut board = Board::from_stones(first, second).unwrap();
        board.set_color(3).unwrap();
        let before = board.clone();

        let mut searcher = Searcher::new(4);
        let result = searcher.search(&mut board, Duration::from_millis(500));

        assert_eq!(board, before);
        assert_eq!(result.best_move, Some(Pos::new(1, 6)));
        assert_eq!(result.score, WIN_SCORE - 2);
        assert_eq!(result.mate_distance(), Some(2));
        assert!(result.summary().starts_with("forced win in 2 half-moves"));
    }

    #[test]
    fn test_only_move_deadlocks() {
        // The single move to (1, 6) stalls both sides and hands Second the round
        let mut first = *Board::new().stones(Side::First);
        first[0] = Pos::new(1, 7);
        first[1] = Pos::new(1, 5);
        first[3] = Pos::new(2, 6);
        let second = *Board::new().stones(Side::Second);
        let mut board = Board::from_stones(first, second).unwrap();
        board.set_color(3).unwrap();
        assert_eq!(board.get_legal_moves(), vec![Pos::new(1, 6)]);

        let mut searcher = Searcher::new(4);
        let result = searcher.search(&mut board, Duration::from_millis(500));

        assert_eq!(result.best_move, Some(Pos::new(1, 6)));
        assert_eq!(result.score, -(WIN_SCORE - 1));
        assert_eq!(result.mate_distance(), Some(1));
        assert_eq!(result.depth, 1);
        assert!(result.summary().starts_with("forced loss in 1 half-moves"));
    }
}
