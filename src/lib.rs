//! Genesis G59 Control Library
//!
//! Host-side command library for the Genesis G59 SDR transceiver. The
//! G59's local oscillator is a Silicon Labs Si570 programmable crystal
//! oscillator driven through the transceiver's USB peripheral controller.
//! This crate computes Si570 divider register values for a requested
//! frequency and frames them (and the controller's other commands) into
//! the fixed 64-byte packets the controller expects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DEVICE LAYER                             │
//! │  G59 command surface (set_freq, set_filter, on/off helpers)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     SYNTHESIS LAYER                          │
//! │  Divider planning  │  RFREQ fixed-point register encoding    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     PROTOCOL LAYER                           │
//! │  64-byte command packet framing                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     TRANSPORT SEAM                           │
//! │  Transport trait (implemented by the caller's USB stack)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Immutable configuration**: chip constants travel in an explicit
//!   [`Si570Config`] value, never in globals
//! - **Pure core**: planning, encoding, and framing are functions of
//!   their inputs; the only side effect is the final transport write
//! - **Type-driven design**: fixed-size packet and register types make
//!   length invariants unrepresentable to violate
//! - **Explicit error handling**: all fallible operations return `Result`
//!
//! # Example
//!
//! ```no_run
//! use g59_control::{Frequency, G59, Transport, TransportError};
//! use g59_control::protocol::CommandPacket;
//!
//! struct UsbEndpoint; // the caller's USB stack
//!
//! impl Transport for UsbEndpoint {
//!     fn send(&mut self, packet: &CommandPacket) -> Result<(), TransportError> {
//!         // write packet.as_bytes() to the bulk OUT endpoint
//!         Ok(())
//!     }
//! }
//!
//! let mut rig = G59::new(UsbEndpoint);
//! let freq = Frequency::from_mhz(7.5).unwrap();
//! let solution = rig.set_freq(freq)?;
//! println!("DCO locked at {} Hz", solution.f0_hz);
//! # Ok::<(), g59_control::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hardware constants and chip configuration
pub mod config;

/// Device Command Surface
///
/// One method per G59 controller command, composing the synthesis and
/// protocol layers over a transport.
pub mod device;

/// Library error types
pub mod error;

/// Command Packet Framing
///
/// The controller's 64-byte wire format: command name header plus
/// parameter payload.
pub mod protocol;

/// Frequency Synthesis
///
/// Si570 divider planning and register encoding.
pub mod synth;

/// Transport seam for the USB peripheral controller
pub mod transport;

/// Shared types used across modules
pub mod types;

pub use config::Si570Config;
pub use device::G59;
pub use error::{Error, Result};
pub use synth::registers::RegisterImage;
pub use synth::si570_calc::DividerSolution;
pub use transport::{Transport, TransportError};
pub use types::Frequency;
