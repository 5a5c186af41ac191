//! G59 Device Command Tests
//!
//! Drives the command surface end to end against a capturing transport:
//! tuning produces the exact SET_FREQ wire image, helper commands frame
//! bare packets, and transport failures surface unchanged.

use g59_control::protocol::{CommandPacket, PACKET_LEN};
use g59_control::{Error, Frequency, G59, Si570Config, Transport, TransportError};

/// Transport that records every packet it is handed
#[derive(Default)]
struct CaptureTransport {
    sent: Vec<[u8; PACKET_LEN]>,
}

impl Transport for CaptureTransport {
    fn send(&mut self, packet: &CommandPacket) -> Result<(), TransportError> {
        self.sent.push(*packet.as_bytes());
        Ok(())
    }
}

/// Transport that refuses every packet
struct DeadTransport;

impl Transport for DeadTransport {
    fn send(&mut self, _packet: &CommandPacket) -> Result<(), TransportError> {
        Err(TransportError::Disconnected)
    }
}

// ============================================================================
// Tuning
// ============================================================================

#[test]
fn test_set_freq_sends_golden_packet() {
    let mut rig = G59::new(CaptureTransport::default());
    let freq = Frequency::from_mhz(7.5).unwrap();

    let solution = rig.set_freq(freq).unwrap();
    assert_eq!(solution.hs_div, 7);
    assert_eq!(solution.n1, 15);
    assert_eq!(solution.f0_hz, 5_280_000_000.0);

    let mut expected = [0u8; PACKET_LEN];
    expected[..8].copy_from_slice(b"SET_FREQ");
    expected[8..16].copy_from_slice(b"07500000");
    expected[18] = 0xAA;
    expected[20..26].copy_from_slice(&[0xE3, 0xC2, 0xE3, 0x34, 0x61, 0xFA]);

    let sent = rig.into_transport().sent;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], expected);
}

#[test]
fn test_set_freq_applies_multiplier() {
    // With a unity multiplier the 30 MHz signal is the oscillator
    // target itself, reaching the same solution as 7.5 MHz at 4x.
    let config = Si570Config::g59().with_multiplier(1);
    let mut rig = G59::with_config(CaptureTransport::default(), config);

    let solution = rig.set_freq(Frequency::from_hz(30_000_000).unwrap()).unwrap();
    assert_eq!(solution.f0_hz, 5_280_000_000.0);

    let sent = rig.into_transport().sent;
    assert_eq!(&sent[0][8..16], b"30000000");
}

#[test]
fn test_set_freq_unreachable_frequency_sends_nothing() {
    // 100 kHz x 4 = 400 kHz oscillator target, far below the DCO range.
    let mut rig = G59::new(CaptureTransport::default());
    let result = rig.set_freq(Frequency::from_hz(100_000).unwrap());
    assert!(matches!(result, Err(Error::NoDividerSolution { .. })));
    assert!(rig.into_transport().sent.is_empty());
}

// ============================================================================
// Simple Commands
// ============================================================================

#[test]
fn test_helper_commands_frame_bare_packets() {
    let mut rig = G59::new(CaptureTransport::default());
    rig.att_on().unwrap();
    rig.att_off().unwrap();
    rig.af_on().unwrap();
    rig.af_off().unwrap();
    rig.mute_on().unwrap();
    rig.mute_off().unwrap();
    rig.trv_on().unwrap();
    rig.trv_off().unwrap();
    rig.rf_on().unwrap();
    rig.rf_off().unwrap();
    rig.tx_on().unwrap();
    rig.tx_off().unwrap();

    let sent = rig.into_transport().sent;
    let headers: Vec<&[u8]> = sent.iter().map(|p| &p[..8]).collect();
    assert_eq!(
        headers,
        [
            b"ATT_ON  " as &[u8],
            b"ATT_OFF ",
            b"AF_ON   ",
            b"AF_OFF  ",
            b"MUTE_ON ",
            b"MUTE_OFF",
            b"TRV_ON  ",
            b"TRV_OFF ",
            b"RF_ON   ",
            b"RF_OFF  ",
            b"TX_ON   ",
            b"TX_OFF  ",
        ]
    );
    for packet in &sent {
        assert!(packet[8..].iter().all(|&b| b == 0));
    }
}

#[test]
fn test_set_filter_places_selector() {
    let mut rig = G59::new(CaptureTransport::default());
    rig.set_filter(2).unwrap();

    let sent = rig.into_transport().sent;
    assert_eq!(&sent[0][..8], b"SET_FILT");
    assert_eq!(sent[0][20], 2);
}

// ============================================================================
// Transport Failures
// ============================================================================

#[test]
fn test_transport_failure_surfaces_unchanged() {
    let mut rig = G59::new(DeadTransport);
    let result = rig.tx_on();
    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::Disconnected))
    ));
}

#[test]
fn test_set_freq_transport_failure_surfaces_unchanged() {
    let mut rig = G59::new(DeadTransport);
    let result = rig.set_freq(Frequency::from_mhz(7.5).unwrap());
    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::Disconnected))
    ));
}
