//! Transport seam for the G59 peripheral controller
//!
//! The library never opens USB devices itself. Callers supply a
//! [`Transport`] over whatever stack they use; the G59 enumerates as
//! VID [`crate::config::G59_USB_VID`] / PID [`crate::config::G59_USB_PID`]
//! with a single bulk OUT endpoint for command packets.

use thiserror::Error;

use crate::protocol::CommandPacket;

/// Device-level transport failure
///
/// Surfaced unchanged through the library; retry and backoff are the
/// transport implementor's business.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The device is no longer attached.
    #[error("device disconnected")]
    Disconnected,

    /// The endpoint accepted fewer bytes than the packet holds.
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes the endpoint accepted
        written: usize,
        /// Bytes the packet holds
        expected: usize,
    },

    /// I/O error from the underlying device handle.
    #[error("device I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous command-packet transport
///
/// One operation: write exactly one 64-byte packet to the controller.
/// The packet type fixes the length, so an implementation only moves
/// `packet.as_bytes()` to the device.
pub trait Transport {
    /// Write one command packet, blocking until the device accepts it
    ///
    /// # Errors
    ///
    /// Any [`TransportError`] the device raises; the library propagates
    /// it without retrying.
    fn send(&mut self, packet: &CommandPacket) -> Result<(), TransportError>;
}
