//! Error types for g59-control

use thiserror::Error;

use crate::transport::TransportError;

/// Main error type for all G59 control operations
#[derive(Debug, Error)]
pub enum Error {
    /// No divider/HS_DIV combination puts the DCO inside its lock range
    /// for the requested target frequency. Not retryable; the caller must
    /// pick a different frequency.
    #[error("no divider solution for {target_hz} Hz oscillator target")]
    NoDividerSolution {
        /// Oscillator frequency the planner was asked for, in Hz
        target_hz: f64,
    },

    /// The RFREQ integer part does not fit the chip's 10-bit register
    /// field; the frequency is outside the practical operating envelope.
    #[error("RFREQ integer part {0} exceeds the 10-bit register field")]
    RegisterOverflow(u64),

    /// Parameter payload exceeds the 56-byte packet capacity.
    #[error("parameter payload of {0} bytes exceeds the 56-byte capacity")]
    ParamsTooLong(usize),

    /// Device-level transport failure, surfaced unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias using the library error
pub type Result<T> = core::result::Result<T, Error>;
