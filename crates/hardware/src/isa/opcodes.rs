//! RISC-V Major Opcodes.
//!
//! Defines the major opcodes (bits 6-0) recognized by the control unit. The values
//! come from the base opcode map of the RISC-V unprivileged ISA manual; any other
//! 7-bit value decodes to the idle control bundle.

/// Major opcode classes with their fixed 7-bit encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Load instructions (LB, LH, LW, LBU, LHU).
    Load = 0b000_0011,
    /// Immediate arithmetic instructions (ADDI, ANDI, SLLI, ...).
    Imm = 0b001_0011,
    /// Add Upper Immediate to PC (AUIPC).
    Auipc = 0b001_0111,
    /// Store instructions (SB, SH, SW).
    Store = 0b010_0011,
    /// Register-register arithmetic (ADD, SUB, SLL, ...).
    Reg = 0b011_0011,
    /// Load Upper Immediate (LUI).
    Lui = 0b011_0111,
    /// Conditional branches (BEQ, BNE, BLT, BGE, BLTU, BGEU).
    Branch = 0b110_0011,
    /// Jump and Link Register (JALR).
    Jalr = 0b110_0111,
    /// Jump and Link (JAL).
    Jal = 0b110_1111,
    /// System instructions (ECALL, EBREAK, CSR*).
    System = 0b111_0011,
}

impl Opcode {
    /// Every opcode, in encoding order.
    pub const ALL: [Self; 10] = [
        Self::Load,
        Self::Imm,
        Self::Auipc,
        Self::Store,
        Self::Reg,
        Self::Lui,
        Self::Branch,
        Self::Jalr,
        Self::Jal,
        Self::System,
    ];

    /// Returns the 7-bit encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Looks up the opcode for a 7-bit value; bit 7 of `bits` is ignored.
    ///
    /// ```
    /// use rvpipe_core::isa::Opcode;
    ///
    /// assert_eq!(Opcode::from_bits(0b0110011), Some(Opcode::Reg));
    /// assert_eq!(Opcode::from_bits(0b0001111), None); // MISC-MEM is not decoded
    /// ```
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7F {
            0b000_0011 => Some(Self::Load),
            0b001_0011 => Some(Self::Imm),
            0b001_0111 => Some(Self::Auipc),
            0b010_0011 => Some(Self::Store),
            0b011_0011 => Some(Self::Reg),
            0b011_0111 => Some(Self::Lui),
            0b110_0011 => Some(Self::Branch),
            0b110_0111 => Some(Self::Jalr),
            0b110_1111 => Some(Self::Jal),
            0b111_0011 => Some(Self::System),
            _ => None,
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.bits()
    }
}
