//! Board registry and game state
//!
//! The mutable side of the server: per-board telemetry snapshots with
//! append-only histories, the board registry, and the scenario/round model
//! the poll responses are derived from. All operations are synchronous and
//! non-blocking; hosts that dispatch requests concurrently must serialize
//! access to the registry themselves.

mod board;
mod error;
mod game;
mod scenario;
mod scoring;

pub use board::BoardState;
pub use error::StateError;
pub use game::GameState;
pub use scenario::{DEFAULT_TOTAL_ROUNDS, RewardMatrix, RoundConfig, RoundType, Scenario};
pub use scoring::ScoringEngine;
