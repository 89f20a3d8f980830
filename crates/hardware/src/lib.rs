//! Pipelined RISC-V datapath model.
//!
//! This crate models the control and memory side of a small RV32 pipeline at the
//! cycle level:
//! 1. **Control:** Decoding opcode, funct3, funct7 and immediate fields into control
//!    signal bundles, for the base ISA and the Zbkb bit-manipulation extension.
//! 2. **Cache:** A direct-mapped data cache with single-cycle miss handling over a
//!    pluggable backing store.
//! 3. **Pipeline:** Skid-buffered valid/ready stages with registered readiness, chained
//!    to any depth.
//! 4. **Datapath:** The units clocked together with snapshot-then-commit semantics,
//!    plus configuration and run statistics.

/// Common helpers (bit fields) and error types.
pub mod common;
/// Configuration (defaults, ISA selection, cache geometry, stage count).
pub mod config;
/// Pipeline, control unit, cache and the composed datapath.
pub mod core;
/// Instruction set definitions (opcodes, function codes, field extraction).
pub mod isa;
/// Memory behind the data cache.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Composed datapath; construct with `Datapath::new`.
pub use crate::core::Datapath;
/// Word-addressed backing memory.
pub use crate::soc::WordMemory;
