//! Si570 Register Encoding
//!
//! Packs a [`DividerSolution`] into the 6-byte register image the chip
//! expects, and decodes images back for verification. The layout is
//! bit-exact per the Si570 register map; a single misplaced bit locks
//! the chip onto the wrong frequency.
//!
//! # Register layout
//!
//! RFREQ is an unsigned 10.28 fixed-point value (10 integer bits, 28
//! fractional bits). Byte 0 is transmitted first:
//!
//! ```text
//! byte0 = HS_DIV[2:0] << 5 | N1[6:2]
//! byte1 = N1[1:0] << 6    | RFREQ_int[9:4]
//! byte2 = RFREQ_int[3:0] << 4 | RFREQ_frac[27:24]
//! byte3 = RFREQ_frac[23:16]
//! byte4 = RFREQ_frac[15:8]
//! byte5 = RFREQ_frac[7:0]
//! ```

use core::fmt;

use fixed::types::U36F28;

use crate::error::Error;
use crate::synth::si570_calc::DividerSolution;

/// Register image length in bytes
pub const REGISTER_IMAGE_LEN: usize = 6;

/// Fractional bits in the RFREQ fixed-point format
const RFREQ_FRAC_BITS: u32 = 28;

/// Widest value the 10-bit RFREQ integer field can hold
const RFREQ_INT_MAX: u64 = 0x3FF;

const RFREQ_FRAC_MASK: u64 = (1 << RFREQ_FRAC_BITS) - 1;

/// The 6-byte Si570 register image
///
/// Immutable once produced; byte 0 is the first byte on the wire.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RegisterImage([u8; REGISTER_IMAGE_LEN]);

impl RegisterImage {
    /// Borrow the raw register bytes in transmission order
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; REGISTER_IMAGE_LEN] {
        &self.0
    }

    /// HS_DIV register code recovered from the image
    #[must_use]
    pub const fn hs_div(&self) -> u8 {
        self.0[0] >> 5
    }

    /// N1 register value recovered from the image
    #[must_use]
    pub const fn n1(&self) -> u8 {
        ((self.0[0] & 0x1F) << 2) | (self.0[1] >> 6)
    }

    /// RFREQ ratio recovered from the image
    ///
    /// Exact to the chip's 2^-28 fractional resolution.
    #[must_use]
    pub fn rfreq(&self) -> f64 {
        let int = (u64::from(self.0[1] & 0x3F) << 4) | u64::from(self.0[2] >> 4);
        let frac = (u64::from(self.0[2] & 0xF) << 24)
            | (u64::from(self.0[3]) << 16)
            | (u64::from(self.0[4]) << 8)
            | u64::from(self.0[5]);
        U36F28::from_bits((int << RFREQ_FRAC_BITS) | frac).to_num::<f64>()
    }
}

impl fmt::Debug for RegisterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegisterImage({:02x} {:02x} {:02x} {:02x} {:02x} {:02x})",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// Encode a divider solution into the 6-byte register image
///
/// RFREQ is rounded once at 28 fractional bits (nearest, ties to even);
/// a fractional part that rounds up to a whole unit carries into the
/// integer field rather than wrapping.
///
/// # Errors
///
/// [`Error::RegisterOverflow`] when the RFREQ integer part exceeds the
/// chip's 10-bit field. Out-of-range values are rejected, never
/// truncated.
pub fn encode(solution: &DividerSolution) -> Result<RegisterImage, Error> {
    let bits = match U36F28::checked_from_num(solution.rfreq) {
        Some(rfreq) => rfreq.to_bits(),
        None => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let approx_int = solution.rfreq.trunc() as u64;
            return Err(Error::RegisterOverflow(approx_int));
        }
    };

    let rfreq_int = bits >> RFREQ_FRAC_BITS;
    let rfreq_frac = bits & RFREQ_FRAC_MASK;
    if rfreq_int > RFREQ_INT_MAX {
        return Err(Error::RegisterOverflow(rfreq_int));
    }

    let hs_div = solution.hs_div & 0x7;
    let n1 = solution.n1 & 0x7F;

    #[allow(clippy::cast_possible_truncation)]
    let image = [
        (hs_div << 5) | (n1 >> 2),
        ((n1 & 0x3) << 6) | ((rfreq_int >> 4) as u8),
        (((rfreq_int & 0xF) as u8) << 4) | ((rfreq_frac >> 24) as u8),
        (rfreq_frac >> 16) as u8,
        (rfreq_frac >> 8) as u8,
        rfreq_frac as u8,
    ];

    Ok(RegisterImage(image))
}

impl DividerSolution {
    /// Encode this solution into its register image
    ///
    /// # Errors
    ///
    /// See [`encode`].
    pub fn to_registers(&self) -> Result<RegisterImage, Error> {
        encode(self)
    }
}
