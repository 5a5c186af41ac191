//! Device Command Surface
//!
//! One method per G59 controller command. Tuning composes the synthesis
//! pipeline (divider planning, register encoding, packet framing) and
//! hands the result to the transport; everything else is a bare command
//! packet.

use tracing::{info, trace};

use crate::config::Si570Config;
use crate::error::Result;
use crate::protocol::{self, Command, CommandPacket};
use crate::synth::registers;
use crate::synth::si570_calc::{compute_dividers, DividerSolution};
use crate::transport::Transport;
use crate::types::Frequency;

/// Command interface to a G59 transceiver
///
/// Owns the transport and the Si570 configuration; holds no other
/// state, so every call is independent.
pub struct G59<T: Transport> {
    transport: T,
    config: Si570Config,
}

impl<T: Transport> G59<T> {
    /// Create a controller with the stock G59 Si570 configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Si570Config::g59())
    }

    /// Create a controller with a custom configuration (calibrated
    /// crystal, different multiplier)
    pub const fn with_config(transport: T, config: Si570Config) -> Self {
        Self { transport, config }
    }

    /// The active Si570 configuration
    #[must_use]
    pub const fn config(&self) -> &Si570Config {
        &self.config
    }

    /// Release the underlying transport
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Tune the Si570 to a signal frequency
    ///
    /// The oscillator runs at `multiplier` times the signal frequency.
    /// Returns the divider solution actually programmed, including the
    /// resulting DCO frequency.
    ///
    /// # Errors
    ///
    /// [`crate::Error::NoDividerSolution`] or
    /// [`crate::Error::RegisterOverflow`] when the frequency is outside
    /// the synthesizer's reach, and transport failures unchanged.
    pub fn set_freq(&mut self, freq: Frequency) -> Result<DividerSolution> {
        let target_hz = f64::from(self.config.multiplier) * f64::from(freq.as_hz());
        info!(signal_hz = freq.as_hz(), target_hz, "tuning Si570");

        let solution = compute_dividers(&self.config, target_hz)?;
        let image = registers::encode(&solution)?;
        self.send(&protocol::set_freq_packet(freq, &image))?;
        Ok(solution)
    }

    /// Select a band-pass filter
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn set_filter(&mut self, filter: u8) -> Result<()> {
        self.send(&protocol::set_filter_packet(filter))
    }

    /// Attenuator on
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn att_on(&mut self) -> Result<()> {
        self.command(Command::AttOn)
    }

    /// Attenuator off
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn att_off(&mut self) -> Result<()> {
        self.command(Command::AttOff)
    }

    /// Audio amplifier on
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn af_on(&mut self) -> Result<()> {
        self.command(Command::AfOn)
    }

    /// Audio amplifier off
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn af_off(&mut self) -> Result<()> {
        self.command(Command::AfOff)
    }

    /// Mute on
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn mute_on(&mut self) -> Result<()> {
        self.command(Command::MuteOn)
    }

    /// Mute off
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn mute_off(&mut self) -> Result<()> {
        self.command(Command::MuteOff)
    }

    /// Transverter output on
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn trv_on(&mut self) -> Result<()> {
        self.command(Command::TrvOn)
    }

    /// Transverter output off
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn trv_off(&mut self) -> Result<()> {
        self.command(Command::TrvOff)
    }

    /// RF preamp on
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn rf_on(&mut self) -> Result<()> {
        self.command(Command::RfOn)
    }

    /// RF preamp off
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn rf_off(&mut self) -> Result<()> {
        self.command(Command::RfOff)
    }

    /// Transmit on
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn tx_on(&mut self) -> Result<()> {
        self.command(Command::TxOn)
    }

    /// Transmit off
    ///
    /// # Errors
    ///
    /// Transport failures, unchanged.
    pub fn tx_off(&mut self) -> Result<()> {
        self.command(Command::TxOff)
    }

    fn command(&mut self, command: Command) -> Result<()> {
        self.send(&CommandPacket::from(command))
    }

    fn send(&mut self, packet: &CommandPacket) -> Result<()> {
        trace!(?packet, "sending command packet");
        self.transport.send(packet)?;
        Ok(())
    }
}
