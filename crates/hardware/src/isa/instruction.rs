//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the fields the control unit consumes and the
//! [`DecodeFields`] bundle that carries them into a decoder.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the I-type immediate (bits 20-31).
pub const IMM_I_MASK: u32 = 0xFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u8;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u8;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// For I-type shifts this overlaps the upper immediate bits.
    fn funct7(&self) -> u8;

    /// Extracts the raw 12-bit I-type immediate (bits 20-31), not sign-extended.
    fn imm_i(&self) -> u16;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        (self & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u8 {
        ((self >> 12) & FUNCT3_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct7(&self) -> u8 {
        ((self >> 25) & FUNCT7_MASK) as u8
    }

    #[inline(always)]
    fn imm_i(&self) -> u16 {
        ((self >> 20) & IMM_I_MASK) as u16
    }
}

/// The instruction fields consumed by the control unit.
///
/// Values wider than their field are truncated by the decoders, so any
/// combination of integers is a valid input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodeFields {
    /// 7-bit major opcode.
    pub opcode: u8,
    /// 3-bit minor opcode.
    pub funct3: u8,
    /// 7-bit function code.
    pub funct7: u8,
    /// 12-bit I-type immediate (only consulted by the Zbkb decoder).
    pub imm: u16,
}

impl DecodeFields {
    /// Splits a 32-bit instruction word into decoder inputs.
    ///
    /// ```
    /// use rvpipe_core::isa::DecodeFields;
    ///
    /// // sub x3, x1, x2
    /// let fields = DecodeFields::from_word(0x4020_81B3);
    /// assert_eq!(fields.opcode, 0b0110011);
    /// assert_eq!(fields.funct3, 0);
    /// assert_eq!(fields.funct7, 0x20);
    /// ```
    pub fn from_word(word: u32) -> Self {
        Self {
            opcode: word.opcode(),
            funct3: word.funct3(),
            funct7: word.funct7(),
            imm: word.imm_i(),
        }
    }
}

impl From<u32> for DecodeFields {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}
