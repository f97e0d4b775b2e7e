//! Round scoring
//!
//! Scores a board's power snapshot against a round's reward matrix by
//! efficiency ratio (production / consumption). Band boundaries are
//! inclusive: exactly 95% or 105% still counts as a perfect match, and
//! exactly 90% still counts as slight under-production.

use crate::protocol::PowerValues;

use super::RewardMatrix;

/// Lower bound of the perfect efficiency band
pub const PERFECT_MIN: f64 = 0.95;

/// Upper bound of the perfect efficiency band
pub const PERFECT_MAX: f64 = 1.05;

/// Lower bound of the slight under-production band
pub const UNDER_SLIGHT_MIN: f64 = 0.90;

/// Maps power snapshots to round scores
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Create a scoring engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Score a snapshot against a reward matrix
    ///
    /// Zero consumption scores zero: without load there is nothing to match.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn score(&self, values: PowerValues, rewards: &RewardMatrix) -> u32 {
        if values.consumption == 0.0 {
            return 0;
        }

        let ratio = values.production / values.consumption;

        if (PERFECT_MIN..=PERFECT_MAX).contains(&ratio) {
            rewards.perfect
        } else if ratio > PERFECT_MAX {
            rewards.over
        } else if ratio >= UNDER_SLIGHT_MIN {
            rewards.under_slight
        } else {
            rewards.under_severe
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(production: f64, consumption: f64) -> PowerValues {
        PowerValues {
            production,
            consumption,
        }
    }

    #[test]
    fn test_zero_consumption_scores_zero() {
        let engine = ScoringEngine::new();
        assert_eq!(engine.score(snapshot(100.0, 0.0), &RewardMatrix::DAY), 0);
    }

    #[test]
    fn test_perfect_band() {
        let engine = ScoringEngine::new();
        assert_eq!(engine.score(snapshot(100.0, 100.0), &RewardMatrix::DAY), 10);
        // Boundaries are inclusive
        assert_eq!(engine.score(snapshot(95.0, 100.0), &RewardMatrix::DAY), 10);
        assert_eq!(engine.score(snapshot(105.0, 100.0), &RewardMatrix::DAY), 10);
    }

    #[test]
    fn test_over_production() {
        let engine = ScoringEngine::new();
        assert_eq!(engine.score(snapshot(106.0, 100.0), &RewardMatrix::DAY), 4);
        assert_eq!(engine.score(snapshot(500.0, 100.0), &RewardMatrix::NIGHT), 4);
    }

    #[test]
    fn test_slight_under_production() {
        let engine = ScoringEngine::new();
        assert_eq!(engine.score(snapshot(94.0, 100.0), &RewardMatrix::DAY), 1);
        assert_eq!(engine.score(snapshot(90.0, 100.0), &RewardMatrix::DAY), 1);
        // Night penalizes any under-production
        assert_eq!(engine.score(snapshot(94.0, 100.0), &RewardMatrix::NIGHT), 0);
    }

    #[test]
    fn test_severe_under_production() {
        let engine = ScoringEngine::new();
        assert_eq!(engine.score(snapshot(89.0, 100.0), &RewardMatrix::DAY), 0);
        assert_eq!(engine.score(snapshot(0.0, 100.0), &RewardMatrix::DAY), 0);
    }
}
