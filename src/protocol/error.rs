//! gridlink protocol error types

use thiserror::Error;

/// Wire protocol errors
///
/// Raised synchronously by the unpack operations; the transport boundary is
/// responsible for turning these into client-visible failure responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer shorter than the message's fixed minimum
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Minimum size the message requires
        needed: usize,
        /// Actual size supplied
        got: usize,
    },

    /// A declared length field exceeds the remaining buffer
    #[error("declared length overruns buffer: {declared} bytes declared, {available} available")]
    LengthOverrun {
        /// Length declared by the message
        declared: usize,
        /// Bytes actually remaining
        available: usize,
    },

    /// Invalid UTF-8 (strict string decoding only)
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
