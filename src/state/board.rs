//! Per-board telemetry state
//!
//! A [`BoardState`] owns the current power snapshot, the append-only
//! telemetry histories, the lists of sources/buildings attributed to the
//! board, and per-round score bookkeeping. Created on first registration,
//! never deleted, mutated only through its own update operations.

use std::time::SystemTime;

use tracing::trace;

use crate::protocol::{BuildingId, PowerValues, SourceId};

/// Mutable state for a single registered board
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    name: String,
    board_type: String,
    production: f64,
    consumption: f64,
    last_updated: Option<SystemTime>,
    production_history: Vec<f64>,
    consumption_history: Vec<f64>,
    connected_production: Vec<SourceId>,
    connected_consumption: Vec<BuildingId>,
    total_score: u32,
    round_scores: Vec<u32>,
    last_data_round: u16,
}

impl BoardState {
    /// Create a zeroed board state with empty histories
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the name and hardware type from a registration request
    pub fn set_identity(&mut self, name: impl Into<String>, board_type: impl Into<String>) {
        self.name = name.into();
        self.board_type = board_type.into();
    }

    /// Registered board name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered board hardware type
    #[must_use]
    pub fn board_type(&self) -> &str {
        &self.board_type
    }

    /// Overwrite the power snapshot, refresh the timestamp, and append one
    /// entry to each history in lockstep
    pub fn update_power(&mut self, production: f64, consumption: f64) {
        self.production = production;
        self.consumption = consumption;
        self.last_updated = Some(SystemTime::now());
        self.production_history.push(production);
        self.consumption_history.push(consumption);

        trace!(
            production,
            consumption,
            samples = self.production_history.len(),
            "power snapshot updated"
        );
    }

    /// Replace the attributed production source list wholesale
    ///
    /// The prior list is discarded entirely; this is a replacement, not a
    /// merge. Used when the board's topology changes.
    pub fn replace_connected_production(&mut self, sources: Vec<SourceId>) {
        self.connected_production = sources;
    }

    /// Replace the attributed consumption building list wholesale
    pub fn replace_connected_consumption(&mut self, buildings: Vec<BuildingId>) {
        self.connected_consumption = buildings;
    }

    /// Current produced power in watts
    #[must_use]
    pub fn production(&self) -> f64 {
        self.production
    }

    /// Current consumed power in watts
    #[must_use]
    pub fn consumption(&self) -> f64 {
        self.consumption
    }

    /// Time of the last power update, if any
    #[must_use]
    pub fn last_updated(&self) -> Option<SystemTime> {
        self.last_updated
    }

    /// Append-only production history, oldest first
    #[must_use]
    pub fn production_history(&self) -> &[f64] {
        &self.production_history
    }

    /// Append-only consumption history, oldest first
    ///
    /// Always the same length as the production history.
    #[must_use]
    pub fn consumption_history(&self) -> &[f64] {
        &self.consumption_history
    }

    /// Sources currently attributed to this board
    #[must_use]
    pub fn connected_production(&self) -> &[SourceId] {
        &self.connected_production
    }

    /// Buildings currently attributed to this board
    #[must_use]
    pub fn connected_consumption(&self) -> &[BuildingId] {
        &self.connected_consumption
    }

    /// Current snapshot as a codec-ready record
    #[must_use]
    pub fn power_values(&self) -> PowerValues {
        PowerValues {
            production: self.production,
            consumption: self.consumption,
        }
    }

    /// Accumulated score over all scored rounds
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Per-round scores in round order
    #[must_use]
    pub fn round_scores(&self) -> &[u32] {
        &self.round_scores
    }

    /// The most recent round this board submitted telemetry for
    #[must_use]
    pub fn last_data_round(&self) -> u16 {
        self.last_data_round
    }

    /// Record a round score and fold it into the total
    pub fn add_round_score(&mut self, score: u32) {
        self.round_scores.push(score);
        self.total_score += score;
    }

    /// Mark that telemetry arrived for the given round
    pub fn mark_data_submitted(&mut self, round: u16) {
        self.last_data_round = round;
    }

    /// Clear score bookkeeping for a fresh game
    pub fn reset_score(&mut self) {
        self.total_score = 0;
        self.round_scores.clear();
        self.last_data_round = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Building, Source};

    #[test]
    fn test_new_board_is_zeroed() {
        let board = BoardState::new();
        assert_eq!(board.production(), 0.0);
        assert_eq!(board.consumption(), 0.0);
        assert!(board.last_updated().is_none());
        assert!(board.production_history().is_empty());
        assert!(board.consumption_history().is_empty());
    }

    #[test]
    fn test_update_power_appends_histories_in_lockstep() {
        let mut board = BoardState::new();
        board.update_power(10.0, 8.0);
        board.update_power(12.0, 9.5);

        assert_eq!(board.production(), 12.0);
        assert_eq!(board.consumption(), 9.5);
        assert_eq!(board.production_history(), &[10.0, 12.0]);
        assert_eq!(board.consumption_history(), &[8.0, 9.5]);
        assert_eq!(
            board.production_history().len(),
            board.consumption_history().len()
        );
        assert!(board.last_updated().is_some());
    }

    #[test]
    fn test_replace_connected_production_discards_prior_list() {
        let mut board = BoardState::new();
        board.replace_connected_production(vec![1.into(), 2.into()]);
        board.replace_connected_production(vec![3.into()]);

        assert_eq!(board.connected_production(), &[SourceId::new(3)]);
    }

    #[test]
    fn test_replace_connected_consumption_discards_prior_list() {
        let mut board = BoardState::new();
        board.replace_connected_consumption(vec![Building::Factory.into()]);
        board.replace_connected_consumption(vec![Building::School.into(), 4.into()]);

        assert_eq!(
            board.connected_consumption(),
            &[BuildingId::from(Building::School), BuildingId::new(4)]
        );
    }

    #[test]
    fn test_symbolic_sources_accepted() {
        let mut board = BoardState::new();
        board.replace_connected_production(vec![Source::Wind.into(), Source::Battery.into()]);
        assert_eq!(board.connected_production().len(), 2);
    }

    #[test]
    fn test_score_bookkeeping() {
        let mut board = BoardState::new();
        board.add_round_score(10);
        board.add_round_score(4);
        board.mark_data_submitted(2);

        assert_eq!(board.total_score(), 14);
        assert_eq!(board.round_scores(), &[10, 4]);
        assert_eq!(board.last_data_round(), 2);

        board.reset_score();
        assert_eq!(board.total_score(), 0);
        assert!(board.round_scores().is_empty());
        assert_eq!(board.last_data_round(), 0);
    }
}
