//! Game state management for the Kamisado GUI

use crate::board::{color_name, MAX_SUMO_LEVEL};
use crate::rules::{MoveOutcome, MoveRecord};
use crate::{AIEngine, Board, MoveResult, Pos, Side};
use log::{info, warn};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_side: Side },
    /// Player vs Player (hotseat)
    PvP,
    /// AI vs AI
    EvE,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_side: Side::First }
    }
}

/// Settings that survive starting a new match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub winning_points: u32,
    pub think_ms: u64,
    pub max_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_points: crate::board::DEFAULT_WINNING_POINTS,
            think_ms: crate::engine::DEFAULT_TIME_LIMIT_MS,
            max_depth: crate::engine::DEFAULT_MAX_DEPTH,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub config: GameConfig,
    /// Moves of the current round, most recent last
    pub history: Vec<MoveRecord>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode, config: GameConfig) -> Self {
        Self {
            board: Board::with_winning_points(config.winning_points),
            mode,
            config,
            history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    /// Check if the side to move is played by a human
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.board.current_player() == human_side,
            GameMode::PvP => true,
            GameMode::EvE => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn() && !self.board.is_round_over()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether the match has been decided
    pub fn is_match_over(&self) -> bool {
        self.board.winner().is_some()
    }

    /// Whether the round ended and the next one waits for a fill direction
    pub fn awaits_fill(&self) -> bool {
        self.board.is_round_over() && !self.is_match_over()
    }

    /// Origin and target of the most recent move of this round
    pub fn last_move(&self) -> Option<(Pos, Pos)> {
        self.history.last().map(|record| (record.origin, record.target))
    }

    /// Whether a click on `pos` would do something right now
    pub fn can_click(&self, pos: Pos) -> bool {
        if self.board.is_round_over() || self.is_ai_thinking() || !self.is_human_turn() {
            return false;
        }
        match self.board.current_color() {
            None => self
                .board
                .stone_at(pos)
                .is_some_and(|(side, _)| side == self.board.current_player()),
            Some(_) => self.board.get_legal_moves().contains(&pos),
        }
    }

    /// Handle a click on the board.
    ///
    /// Before the first move of a round, clicking one of your own stones
    /// chooses its color; afterwards a click moves the forced stone.
    pub fn handle_click(&mut self, pos: Pos) -> Result<(), String> {
        if self.board.is_round_over() {
            return Err("The round is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if self.board.current_color().is_none() {
            let color = match self.board.stone_at(pos) {
                Some((side, color)) if side == self.board.current_player() => color,
                _ => return Err("Pick one of your own stones to start the round".to_string()),
            };
            self.board.set_color(color).map_err(|e| e.to_string())?;
            self.message = Some(format!("{} opens the round", color_name(color)));
            return Ok(());
        }

        self.execute_move(pos)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, target: Pos) -> Result<(), String> {
        let record = self.board.perform_move(target).map_err(|e| e.to_string())?;
        self.history.push(record);
        self.move_timer.start();

        self.message = match record.outcome {
            MoveOutcome::Continue => None,
            MoveOutcome::Skipped => Some(format!(
                "{:?} is blocked and skips a turn",
                record.mover.opponent()
            )),
            MoveOutcome::RoundWon | MoveOutcome::Deadlock => self.round_end_message(&record),
        };
        Ok(())
    }

    fn round_end_message(&self, record: &MoveRecord) -> Option<String> {
        let scoring = record.scoring?;
        let how = if record.outcome == MoveOutcome::Deadlock {
            "by deadlock"
        } else {
            "the round"
        };
        let text = if scoring.won_match {
            format!("{:?} wins {how} and the match!", scoring.side)
        } else {
            format!(
                "{:?} wins {how}; {} becomes a level {} sumo",
                scoring.side,
                color_name(scoring.color),
                (scoring.previous_level + 1).min(MAX_SUMO_LEVEL)
            )
        };
        info!("{text}");
        Some(text)
    }

    /// Start the next round, refilling the home rows from the chosen edge
    pub fn fill(&mut self, from_right: bool) {
        match self.board.reset(from_right) {
            Ok(()) => {
                self.history.clear();
                self.move_timer.start();
                self.message = Some(format!("{:?} opens the next round", self.board.current_player()));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let mut board = self.board.clone();
        let config = self.config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config.max_depth, config.think_ms);
            let result = engine.think(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_result(&move_result);
            self.last_ai_result = Some(move_result);
        }
    }

    fn apply_ai_result(&mut self, result: &MoveResult) {
        if let Some(color) = result.color {
            if let Err(e) = self.board.set_color(color) {
                warn!("engine chose color {color}: {e}");
                self.message = Some(e.to_string());
                return;
            }
        }
        match result.best_move {
            Some(pos) => {
                if let Err(e) = self.execute_move(pos) {
                    warn!("engine move {pos} rejected: {e}");
                    self.message = Some(e);
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo moves of the current round.
    ///
    /// Against the AI, moves are taken back until it is the human's turn
    /// again. A finished match cannot be undone.
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() || self.is_match_over() {
            return;
        }

        while let Some(record) = self.history.pop() {
            self.board.undo_move(record);
            if self.is_human_turn() || self.mode == GameMode::EvE {
                break;
            }
        }

        self.message = None;
        self.move_timer.start();
    }
}
