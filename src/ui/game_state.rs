//! Game state management for the Connect Four GUI

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::{rules, Disc, MoveDecision, StreakHeuristic};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs heuristic
    PvE { human_color: Disc },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Disc::Red,
        }
    }
}

/// Game result; `winner` is `None` for a draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Disc>,
    pub winning_line: Option<Vec<(usize, usize)>>,
}

/// Main game state
pub struct GameState {
    /// Raw board, column-major, each column top to bottom
    pub board: Vec<Vec<Disc>>,
    pub mode: GameMode,
    pub current_turn: Disc,
    pub game_over: Option<GameResult>,
    /// (col, raw row) of the last disc
    pub last_move: Option<(usize, usize)>,
    pub move_history: Vec<(usize, Disc)>,
    pub last_decision: Option<MoveDecision>,
    pub ai_time: Option<Duration>,
    pub suggested_column: Option<usize>,
    pub message: Option<String>,
    move_started: Instant,
    /// Heuristic playing the AI side; built on its first turn of the game
    heuristic: Option<StreakHeuristic>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: rules::empty_board(rules::COLUMNS, rules::ROWS),
            mode,
            current_turn: Disc::Red,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_decision: None,
            ai_time: None,
            suggested_column: None,
            message: None,
            move_started: Instant::now(),
            heuristic: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Time spent on the current move
    pub fn move_elapsed(&self) -> Duration {
        self.move_started.elapsed()
    }

    /// Attempt to drop a disc for the human player
    pub fn try_drop(&mut self, column: usize) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(column)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, column: usize) -> Result<(), String> {
        let color = self.current_turn;
        let row = rules::drop_disc(&mut self.board, column, color)
            .ok_or_else(|| format!("Column {} is full", column + 1))?;

        info!(?color, column, "disc dropped");
        self.move_history.push((column, color));
        self.last_move = Some((column, row));
        self.suggested_column = None;
        self.message = None;

        if let Some(line) = rules::winning_line(&self.board, column, row) {
            info!(?color, "game won");
            self.game_over = Some(GameResult {
                winner: Some(color),
                winning_line: Some(line),
            });
            return Ok(());
        }

        if rules::is_full(&self.board) {
            info!("game drawn");
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
            return Ok(());
        }

        self.current_turn = color.opponent();
        self.move_started = Instant::now();
        Ok(())
    }

    /// Let the heuristic play the current turn
    pub fn play_ai_turn(&mut self) {
        if !self.is_ai_turn() || self.game_over.is_some() {
            return;
        }

        let start = Instant::now();
        if self.heuristic.is_none() {
            match StreakHeuristic::new(self.current_turn) {
                Ok(heuristic) => self.heuristic = Some(heuristic),
                Err(err) => {
                    self.message = Some(err.to_string());
                    return;
                }
            }
        }
        let Some(heuristic) = self.heuristic.as_mut() else {
            return;
        };

        let available = rules::available_columns(&self.board);
        match heuristic.choose_column_with_stats(&available, &self.board) {
            Ok(decision) => {
                self.ai_time = Some(start.elapsed());
                let column = decision.column;
                self.last_decision = Some(decision);
                if let Err(msg) = self.execute_move(column) {
                    warn!(column, "heuristic picked an unplayable column");
                    self.message = Some(msg);
                }
            }
            Err(err) => {
                warn!(%err, "heuristic rejected the board");
                self.message = Some(format!("AI error: {err}"));
            }
        }
    }

    /// Ask a separate heuristic which column the side to move should play
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        let available = rules::available_columns(&self.board);
        let result = StreakHeuristic::new(self.current_turn)
            .and_then(|mut h| h.choose_column_with_stats(&available, &self.board));
        match result {
            Ok(decision) => {
                self.suggested_column = Some(decision.column);
                self.last_decision = Some(decision);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = rules::empty_board(rules::COLUMNS, rules::ROWS);
        self.move_history.clear();
        self.current_turn = Disc::Red;
        self.game_over = None;
        self.last_move = None;
        self.suggested_column = None;

        for (column, color) in moves {
            if let Some(row) = rules::drop_disc(&mut self.board, column, color) {
                self.move_history.push((column, color));
                self.last_move = Some((column, row));
                self.current_turn = color.opponent();
            }
        }

        // Replayed history goes to a fresh heuristic on the next AI turn
        self.heuristic = None;
        self.move_started = Instant::now();
    }
}
