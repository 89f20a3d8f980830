//! Function code 7 keys and immediate literals.
//!
//! Entries of the `funct7` refinement tables used by the REG and IMM decoders.
//! For shift-immediate instructions `funct7` is the upper seven bits of the
//! I-type immediate.

/// Standard encoding (ADD, SLL, SRL, XOR, OR, AND, ...).
pub const BASE: u8 = 0b000_0000;

/// Alternate encoding (SUB, SRA, and the Zbkb inverted logic ops XNOR/ORN/ANDN).
pub const ALT: u8 = 0b010_0000;

/// Carry-less multiply (CLMUL, CLMULH).
pub const CLMUL: u8 = 0b000_0101;

/// Packing and bit interleave (PACK, PACKH, ZIP, UNZIP).
pub const PACK: u8 = 0b000_0100;

/// Rotates (ROL, ROR, RORI).
pub const ROTATE: u8 = 0b011_0000;

/// Byte/bit reversal group (REV8, BREV8); refined by the full immediate.
pub const REV: u8 = 0b011_0100;

/// Full 12-bit immediate selecting REV8 under [`REV`].
pub const REV8_IMM: u16 = 0x698;

/// Full 12-bit immediate selecting BREV8 (`AluOp::Revb`) under [`REV`].
pub const BREV8_IMM: u16 = 0x687;
