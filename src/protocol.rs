//! Command Packet Framing
//!
//! The G59 peripheral controller accepts fixed 64-byte command packets:
//! an 8-byte ASCII command name padded with spaces, followed by a
//! 56-byte parameter area that is zero unless a command defines payload
//! fields. This module builds those packets; it never interprets
//! anything coming back from the device.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::config::SI570_BUS_ADDR;
use crate::error::Error;
use crate::synth::registers::{RegisterImage, REGISTER_IMAGE_LEN};
use crate::types::Frequency;

/// Command packet length on the wire
pub const PACKET_LEN: usize = 64;

/// Command-name header field length
pub const CMD_FIELD_LEN: usize = 8;

/// Maximum parameter payload length
pub const MAX_PARAMS_LEN: usize = PACKET_LEN - CMD_FIELD_LEN;

/// Length of the decimal frequency field in the SET_FREQ payload
const FREQ_DIGITS_LEN: usize = 8;

/// Peripheral bus address offset in the SET_FREQ payload
const BUS_ADDR_OFFSET: usize = 10;

/// Register image offset in the SET_FREQ payload
const REGISTERS_OFFSET: usize = 12;

/// Filter selector offset in the SET_FILT payload
const FILTER_OFFSET: usize = 12;

/// Commands understood by the G59 controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Program the Si570 synthesizer (frequency digits + registers)
    SetFreq,
    /// Select a band-pass filter
    SetFilt,
    /// Attenuator on
    AttOn,
    /// Attenuator off
    AttOff,
    /// Audio amplifier on
    AfOn,
    /// Audio amplifier off
    AfOff,
    /// Mute on
    MuteOn,
    /// Mute off
    MuteOff,
    /// Transverter output on
    TrvOn,
    /// Transverter output off
    TrvOff,
    /// RF preamp on
    RfOn,
    /// RF preamp off
    RfOff,
    /// Transmit on
    TxOn,
    /// Transmit off
    TxOff,
}

impl Command {
    /// ASCII command name as it appears in the packet header
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SetFreq => "SET_FREQ",
            Self::SetFilt => "SET_FILT",
            Self::AttOn => "ATT_ON",
            Self::AttOff => "ATT_OFF",
            Self::AfOn => "AF_ON",
            Self::AfOff => "AF_OFF",
            Self::MuteOn => "MUTE_ON",
            Self::MuteOff => "MUTE_OFF",
            Self::TrvOn => "TRV_ON",
            Self::TrvOff => "TRV_OFF",
            Self::RfOn => "RF_ON",
            Self::RfOff => "RF_OFF",
            Self::TxOn => "TX_ON",
            Self::TxOff => "TX_OFF",
        }
    }
}

/// A framed 64-byte command packet, ready for the transport
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CommandPacket([u8; PACKET_LEN]);

impl CommandPacket {
    /// Frame a command name and optional parameter payload
    ///
    /// The name is written left-justified into the 8-byte header,
    /// padded with 0x20 and truncated past 8 bytes. Parameters are
    /// copied from offset 8; the rest of the packet stays zero.
    ///
    /// # Errors
    ///
    /// [`Error::ParamsTooLong`] when the payload exceeds 56 bytes.
    pub fn build(name: &str, params: Option<&[u8]>) -> Result<Self, Error> {
        let params = params.unwrap_or(&[]);
        if params.len() > MAX_PARAMS_LEN {
            return Err(Error::ParamsTooLong(params.len()));
        }
        Ok(Self::assemble(name, params))
    }

    /// Infallible framing for payloads already known to fit
    fn assemble(name: &str, params: &[u8]) -> Self {
        let mut buf = [0u8; PACKET_LEN];
        buf[..CMD_FIELD_LEN].fill(b' ');

        let name = name.as_bytes();
        let len = name.len().min(CMD_FIELD_LEN);
        buf[..len].copy_from_slice(&name[..len]);

        buf[CMD_FIELD_LEN..CMD_FIELD_LEN + params.len()].copy_from_slice(params);
        Self(buf)
    }

    /// Borrow the full 64-byte wire image
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PACKET_LEN] {
        &self.0
    }

    /// The 8-byte command-name header field, padding included
    #[must_use]
    pub fn command_field(&self) -> &[u8] {
        &self.0[..CMD_FIELD_LEN]
    }

    /// The 56-byte parameter area
    #[must_use]
    pub fn params(&self) -> &[u8] {
        &self.0[CMD_FIELD_LEN..]
    }
}

impl From<Command> for CommandPacket {
    fn from(command: Command) -> Self {
        Self::assemble(command.name(), &[])
    }
}

impl fmt::Debug for CommandPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandPacket(\"")?;
        for &byte in self.command_field() {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        write!(f, "\",")?;
        for &byte in self.params() {
            write!(f, " {byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Frame a SET_FREQ packet
///
/// Payload layout (offsets within the parameter area): bytes 0-7 carry
/// the signal frequency in Hz as 8 zero-padded decimal digits, byte 10
/// the Si570 peripheral bus address, bytes 12-17 the register image.
/// Everything else is zero.
#[must_use]
pub fn set_freq_packet(freq: Frequency, registers: &RegisterImage) -> CommandPacket {
    let mut params = [0u8; MAX_PARAMS_LEN];

    let mut digits: String<FREQ_DIGITS_LEN> = String::new();
    let _ = write!(digits, "{:08}", freq.as_hz());
    params[..FREQ_DIGITS_LEN].copy_from_slice(digits.as_bytes());

    params[BUS_ADDR_OFFSET] = SI570_BUS_ADDR;
    params[REGISTERS_OFFSET..REGISTERS_OFFSET + REGISTER_IMAGE_LEN]
        .copy_from_slice(registers.as_bytes());

    CommandPacket::assemble(Command::SetFreq.name(), &params)
}

/// Frame a SET_FILT packet selecting a band-pass filter
#[must_use]
pub fn set_filter_packet(filter: u8) -> CommandPacket {
    let mut params = [0u8; MAX_PARAMS_LEN];
    params[FILTER_OFFSET] = filter;
    CommandPacket::assemble(Command::SetFilt.name(), &params)
}
