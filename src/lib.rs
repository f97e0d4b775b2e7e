//! gridlink - compact binary protocol and state model for power-grid simulation boards
//!
//! This library implements the wire formats a power-management simulation
//! server uses to talk to bandwidth/RAM-constrained embedded boards, together
//! with the in-memory state those messages read and write: a per-board
//! telemetry history and a board registry bound to an active scenario.
//!
//! All multi-byte fields are big-endian and every power value crosses the
//! wire fixed-point scaled by 1000 (milliwatts), trading 0.001 W precision
//! for half the bytes of a raw float.
//!
//! # Quick Start
//!
//! ```rust
//! use gridlink::protocol;
//!
//! // Pack a telemetry frame the way a board would report it
//! let bytes = protocol::pack_power_data(12.5, 11.75);
//!
//! // Decode it server-side
//! let values = protocol::unpack_power_values(&bytes)?;
//! assert!((values.production - 12.5).abs() < 0.001);
//! # Ok::<(), gridlink::Error>(())
//! ```
//!
//! # Features
//!
//! - **Fixed-layout messages** - registration, telemetry, coefficient and
//!   range tables, building tables, status polling
//! - **Lenient string decoding** - partial recovery from noisy embedded links,
//!   with a strict opt-in variant
//! - **Board registry** - idempotent registration, strict lookups, lockstep
//!   telemetry histories
//! - **Scenario + scoring** - day/night round flow with efficiency-ratio
//!   reward matrices

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
pub mod state;

pub use protocol::{
    Building, BuildingId, BuildingTable, Error, GameStatus, PowerValues, RegistrationRequest,
    RegistrationResponse, Result, Source, SourceId,
};
pub use state::{BoardState, GameState, RoundType, Scenario, ScoringEngine, StateError};

/// gridlink protocol version
pub const VERSION: &str = "1.0.0";
