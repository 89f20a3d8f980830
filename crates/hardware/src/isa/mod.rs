//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode enumeration, the function-code constants the control unit
//! matches against, and field extraction from 32-bit instruction words.
//!
//! # Structure
//!
//! * `opcodes`: The ten major opcodes decoded by the control unit.
//! * `funct7`: `funct7` keys and immediate literals used by the decode tables.
//! * `instruction`: Field extraction and the decoder input bundle.

/// `funct7` and immediate constants for the base and Zbkb decode tables.
pub mod funct7;

/// Instruction field extraction and the decoder input bundle.
pub mod instruction;

/// Major opcode enumeration.
pub mod opcodes;

pub use instruction::{DecodeFields, InstructionBits};
pub use opcodes::Opcode;
