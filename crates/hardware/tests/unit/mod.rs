//! # Unit Components
//!
//! Per-unit tests, organized like the crate: shared helpers, configuration, ISA
//! definitions, the core units and pipeline, the backing memory and statistics.

/// Bit-field helpers and error formatting.
pub mod common;




/// Word-addressed backing memory.
pub mod soc;

/// Run statistics counters and report.
pub mod stats;
