//! Si570 Divider Planning
//!
//! Searches the Si570 divider space for the register settings that put
//! the chip's internal DCO inside its lock range for a requested output
//! frequency.
//!
//! # Theory of Operation
//!
//! The Si570 derives its output from a high-frequency DCO:
//!
//! ```text
//! f_out = f_dco / (HS_DIV × N1),   f_dco = f_xtal × RFREQ
//! ```
//!
//! The DCO only locks inside `[4.85 GHz, 5.67 GHz]`, HS_DIV is one of
//! {4, 5, 6, 7, 9, 11}, and N1 is 1 or any even value up to 128. For a
//! target output frequency the planner evaluates every HS_DIV code and
//! keeps the in-range candidate with the lowest DCO frequency. Lower
//! DCO means lower power and jitter on the part, so range membership is
//! the constraint and minimal `f0` the objective, not first-found.

use tracing::{debug, warn};

use crate::config::Si570Config;
use crate::error::Error;

/// Largest total divide (HS_DIV × N1 stage) the N1 field can express
const MAX_TOTAL_DIVIDE: f64 = 128.0;

/// A feasible Si570 divider configuration for one target frequency
///
/// Produced once per tuning request and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerSolution {
    /// HS_DIV register code (0..=7); the divider value is code + 4
    pub hs_div: u8,
    /// N1 register value (0..=127), stored as total-divide-minus-one
    pub n1: u8,
    /// Resulting DCO frequency in Hz, inside the configured lock range
    pub f0_hz: f64,
    /// RFREQ ratio `f0 / f_xtal`, encoded into registers downstream
    pub rfreq: f64,
}

impl DividerSolution {
    /// High-speed divider value selected by this solution
    #[must_use]
    pub const fn divider_value(&self) -> u8 {
        self.hs_div + 4
    }

    /// Total second-stage divide (N1 + 1)
    #[must_use]
    pub const fn total_divide(&self) -> u32 {
        self.n1 as u32 + 1
    }

    /// Check that both register fields are within their bit widths
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.hs_div <= 7 && self.n1 <= 127
    }
}

/// Find the divider settings for a target oscillator frequency
///
/// Scans HS_DIV codes from 7 down to 0, derives the even (or unity) N1
/// divide for each, and selects the candidate with the smallest DCO
/// frequency inside `[dco_low_hz, dco_high_hz]`. Ties keep the higher
/// HS_DIV code.
///
/// # Errors
///
/// [`Error::NoDividerSolution`] when no candidate lands inside the DCO
/// lock range, or when `target_hz` is not a positive finite frequency.
pub fn compute_dividers(
    config: &Si570Config,
    target_hz: f64,
) -> Result<DividerSolution, Error> {
    if !target_hz.is_finite() || target_hz <= 0.0 {
        warn!(target_hz, "rejecting non-positive oscillator target");
        return Err(Error::NoDividerSolution { target_hz });
    }

    let mut best: Option<DividerSolution> = None;

    for code in (0..config.hs_div_map.len()).rev() {
        let Some(divider) = config.hs_div_map[code] else {
            continue;
        };
        let divider = f64::from(divider);

        // Total divide that centers the DCO in its range, snapped to the
        // values N1 can express: 1, or an even count up to 128.
        let mut y = (config.dco_high_hz + config.dco_low_hz) / (2.0 * target_hz * divider);
        if y < 1.5 {
            y = 1.0;
        } else {
            y = 2.0 * (y / 2.0).round_ties_even();
        }
        if y > MAX_TOTAL_DIVIDE {
            y = MAX_TOTAL_DIVIDE;
        }

        let f0_hz = target_hz * y * divider;
        if f0_hz < config.dco_low_hz || f0_hz > config.dco_high_hz {
            continue;
        }

        // Strict comparison: on equal f0 the earlier (higher) code wins.
        let should_update = match &best {
            None => true,
            Some(current) => f0_hz < current.f0_hz,
        };

        if should_update {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n1 = (y as u32 - 1) as u8;
            #[allow(clippy::cast_possible_truncation)]
            let hs_div = code as u8;
            best = Some(DividerSolution {
                hs_div,
                n1,
                f0_hz,
                rfreq: f0_hz / config.xtal_hz,
            });
        }
    }

    match best {
        Some(solution) => {
            debug!(
                hs_div = solution.hs_div,
                n1 = solution.n1,
                f0_hz = solution.f0_hz,
                rfreq = solution.rfreq,
                "divider solution"
            );
            Ok(solution)
        }
        None => {
            warn!(target_hz, "no divider solution inside the DCO lock range");
            Err(Error::NoDividerSolution { target_hz })
        }
    }
}
