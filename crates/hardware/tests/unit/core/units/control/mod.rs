//! Control unit tests.
//!
//! Covers both decoder variants opcode by opcode, the funct7 fallback policy and
//! the funct3-derived auxiliary fields.



/// Exhaustive comparison against a table-driven reference decoder.
pub mod totality;


use rvpipe_core::core::pipeline::signals::ControlSignals;

/// `ControlSignals::idle` under another name, for readability in expectations.
pub fn idle(funct3: u8) -> ControlSignals {
    ControlSignals::idle(funct3)
}
