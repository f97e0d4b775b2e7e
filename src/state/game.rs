//! Game state and board registry
//!
//! [`GameState`] owns the board registry and drives the round lifecycle
//! against a shared [`Scenario`]. Registration is an idempotent
//! get-or-create; lookups of unregistered identifiers are errors, never
//! silent creation. All methods take `&mut self` or `&self`, so a
//! concurrent host wraps the whole state in its own lock or actor; no
//! internal synchronization is attempted here.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::protocol::GameStatus;

use super::{BoardState, RoundType, Scenario, ScoringEngine, StateError};

/// Registry of boards plus the active round, bound to a scenario
#[derive(Debug, Clone)]
pub struct GameState {
    boards: HashMap<u32, BoardState>,
    scenario: Arc<Scenario>,
    scoring: ScoringEngine,
    current_round: u16,
    active: bool,
}

impl GameState {
    /// Create a game state bound to a scenario
    ///
    /// The scenario is shared, not owned; its lifetime is governed by the
    /// service that started the game.
    #[must_use]
    pub fn new(scenario: Arc<Scenario>) -> Self {
        Self {
            boards: HashMap::new(),
            scenario,
            scoring: ScoringEngine::new(),
            current_round: 0,
            active: false,
        }
    }

    /// The active scenario
    #[must_use]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Idempotent get-or-create of a board
    ///
    /// Returns the existing state if the identifier is already registered,
    /// otherwise creates a zeroed one with empty histories. Atomic under
    /// `&mut self`.
    pub fn register_board(&mut self, board_id: u32) -> &mut BoardState {
        match self.boards.entry(board_id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(board_id, "registering new board");
                entry.insert(BoardState::new())
            }
        }
    }

    /// Look up a registered board
    ///
    /// Never auto-creates; unregistered identifiers are an error.
    pub fn board(&self, board_id: u32) -> Result<&BoardState, StateError> {
        self.boards
            .get(&board_id)
            .ok_or(StateError::BoardNotFound { board_id })
    }

    /// Look up a registered board mutably
    pub fn board_mut(&mut self, board_id: u32) -> Result<&mut BoardState, StateError> {
        self.boards
            .get_mut(&board_id)
            .ok_or(StateError::BoardNotFound { board_id })
    }

    /// Identifiers of all registered boards, in no particular order
    pub fn board_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.boards.keys().copied()
    }

    /// Number of registered boards
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Route a telemetry report to a board
    ///
    /// Updates the snapshot and histories; while a game is active the board
    /// is also marked as having submitted data for the current round.
    pub fn update_power(
        &mut self,
        board_id: u32,
        production: f64,
        consumption: f64,
    ) -> Result<(), StateError> {
        let current_round = self.current_round;
        let active = self.active;

        let board = self
            .boards
            .get_mut(&board_id)
            .ok_or(StateError::BoardNotFound { board_id })?;

        board.update_power(production, consumption);
        if active && current_round > 0 {
            board.mark_data_submitted(current_round);
        }

        trace!(board_id, production, consumption, "telemetry recorded");
        Ok(())
    }

    /// Start a game: round 1, all board scores reset
    pub fn start_game(&mut self) {
        self.active = true;
        self.current_round = 1;
        for board in self.boards.values_mut() {
            board.reset_score();
        }
        debug!(
            total_rounds = self.scenario.total_rounds(),
            "game started"
        );
    }

    /// Advance to the next round
    ///
    /// Returns `false` and deactivates the game once the last round has
    /// been played.
    pub fn advance_round(&mut self) -> bool {
        if self.current_round < self.scenario.total_rounds() {
            self.current_round += 1;
            trace!(round = self.current_round, "round advanced");
            true
        } else {
            self.active = false;
            debug!("game finished");
            false
        }
    }

    /// Current round number (1-based; 0 before the game starts)
    #[must_use]
    pub fn current_round(&self) -> u16 {
        self.current_round
    }

    /// Total rounds in the bound scenario
    #[must_use]
    pub fn total_rounds(&self) -> u16 {
        self.scenario.total_rounds()
    }

    /// Whether a game is in progress
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Type of the current round (day before the game starts)
    #[must_use]
    pub fn current_round_type(&self) -> RoundType {
        self.scenario.round_type(self.current_round)
    }

    /// Build the poll response for a board
    ///
    /// `expecting_data` is set while a game is active and the board has not
    /// yet submitted telemetry for the current round.
    pub fn game_status(&self, board_id: u32) -> Result<GameStatus, StateError> {
        let board = self.board(board_id)?;
        let expecting_data =
            self.active && self.current_round > 0 && board.last_data_round() < self.current_round;

        Ok(GameStatus {
            current_round: self.current_round,
            total_rounds: self.scenario.total_rounds(),
            round_type: self.current_round_type().as_str().to_string(),
            expecting_data,
        })
    }

    /// Score a board's current snapshot against the current round's rewards
    /// and record the result
    pub fn score_board(&mut self, board_id: u32) -> Result<u32, StateError> {
        let rewards = self.scenario.rewards(self.current_round);
        let scoring = self.scoring;

        let board = self
            .boards
            .get_mut(&board_id)
            .ok_or(StateError::BoardNotFound { board_id })?;

        let score = scoring.score(board.power_values(), &rewards);
        board.add_round_score(score);
        trace!(board_id, score, "round scored");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(Arc::new(Scenario::alternating(4)))
    }

    #[test]
    fn test_register_board_is_idempotent() {
        let mut game = game();
        game.register_board(5).update_power(1.0, 2.0);
        // Second registration returns the same board, history intact
        let board = game.register_board(5);
        assert_eq!(board.production_history().len(), 1);
        assert_eq!(game.board_count(), 1);
    }

    #[test]
    fn test_two_updates_leave_histories_length_two() {
        let mut game = game();
        game.register_board(5);
        game.update_power(5, 10.0, 9.0).unwrap();
        game.update_power(5, 11.0, 10.5).unwrap();

        let board = game.board(5).unwrap();
        assert_eq!(board.production_history().len(), 2);
        assert_eq!(board.consumption_history().len(), 2);
    }

    #[test]
    fn test_lookup_of_unregistered_board_fails() {
        let game = game();
        assert!(matches!(
            game.board(99),
            Err(StateError::BoardNotFound { board_id: 99 })
        ));
    }

    #[test]
    fn test_update_power_never_auto_creates() {
        let mut game = game();
        let result = game.update_power(7, 1.0, 1.0);
        assert!(matches!(
            result,
            Err(StateError::BoardNotFound { board_id: 7 })
        ));
        assert_eq!(game.board_count(), 0);
    }

    #[test]
    fn test_game_lifecycle() {
        let mut game = game();
        assert_eq!(game.current_round(), 0);
        assert!(!game.is_active());

        game.start_game();
        assert!(game.is_active());
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.current_round_type(), RoundType::Day);

        assert!(game.advance_round());
        assert_eq!(game.current_round_type(), RoundType::Night);
        assert!(game.advance_round());
        assert!(game.advance_round());

        // Past the last round the game deactivates
        assert!(!game.advance_round());
        assert!(!game.is_active());
        assert_eq!(game.current_round(), 4);
    }

    #[test]
    fn test_start_game_resets_scores() {
        let mut game = game();
        game.register_board(1).add_round_score(10);
        game.start_game();
        assert_eq!(game.board(1).unwrap().total_score(), 0);
    }

    #[test]
    fn test_expecting_data_transitions() {
        let mut game = game();
        game.register_board(3);

        // Before the game starts nothing is expected
        assert!(!game.game_status(3).unwrap().expecting_data);

        game.start_game();
        assert!(game.game_status(3).unwrap().expecting_data);

        game.update_power(3, 100.0, 100.0).unwrap();
        assert!(!game.game_status(3).unwrap().expecting_data);

        game.advance_round();
        assert!(game.game_status(3).unwrap().expecting_data);
    }

    #[test]
    fn test_game_status_fields() {
        let mut game = game();
        game.register_board(3);
        game.start_game();
        game.advance_round();

        let status = game.game_status(3).unwrap();
        assert_eq!(status.current_round, 2);
        assert_eq!(status.total_rounds, 4);
        assert_eq!(status.round_type, "night");
    }

    #[test]
    fn test_score_board_records_round_score() {
        let mut game = game();
        game.register_board(8);
        game.start_game();
        game.update_power(8, 100.0, 100.0).unwrap();

        let score = game.score_board(8).unwrap();
        assert_eq!(score, 10);
        assert_eq!(game.board(8).unwrap().total_score(), 10);
        assert_eq!(game.board(8).unwrap().round_scores(), &[10]);
    }

    #[test]
    fn test_score_board_night_penalty() {
        let mut game = game();
        game.register_board(8);
        game.start_game();
        game.advance_round(); // night

        // 6% under-production: a day round would score 1, night scores 0
        game.update_power(8, 94.0, 100.0).unwrap();
        assert_eq!(game.score_board(8).unwrap(), 0);
    }
}
