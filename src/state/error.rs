//! State error types

use thiserror::Error;

/// Errors raised by board registry lookups
#[derive(Error, Debug)]
pub enum StateError {
    /// Lookup of a board identifier that was never registered
    #[error("board {board_id} is not registered")]
    BoardNotFound {
        /// The identifier that missed
        board_id: u32,
    },
}
