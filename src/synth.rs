//! Frequency Synthesis
//!
//! Translates a target oscillator frequency into Si570 register values:
//! - divider planning (HS_DIV/N1 search over the DCO lock range)
//! - RFREQ fixed-point conversion and register bit packing

pub mod registers;
pub mod si570_calc;
