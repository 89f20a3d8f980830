//! Pipeline control signals and operation selectors.
//!
//! This module defines the signals produced by the control unit. It covers:
//! 1. **Operation Selection:** The ALU operation encoding consumed bit-exactly by the ALU.
//! 2. **Operand Selection:** Immediate format, ALU input and writeback source selectors.
//! 3. **Memory Control:** Access width mask and load sign-extension.
//! 4. **Control Flow:** Jump, branch and branch-sense signals.
//!
//! Every selector keeps an explicit numeric encoding; `bits()` returns the value a
//! downstream hardware block would see on the wire.

/// ALU operation selector.
///
/// The discriminants are fixed: the ALU decodes these values directly, and the
/// gaps (0x9-0xC) are unassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AluOp {
    /// Bitwise AND.
    And = 0x0,
    /// Shift left logical.
    Sll = 0x1,
    /// Set less than (signed).
    Slt = 0x2,
    /// Set less than unsigned.
    Sltu = 0x3,
    /// Bitwise XOR.
    Xor = 0x4,
    /// Shift right logical.
    Srl = 0x5,
    /// Bitwise OR.
    Or = 0x6,
    /// Integer addition.
    Add = 0x7,
    /// Integer subtraction.
    Sub = 0x8,
    /// Shift right arithmetic.
    Sra = 0xD,
    /// Pass the immediate operand through unchanged (LUI).
    Imm = 0xE,
    /// No operation.
    #[default]
    Nop = 0xF,
    /// Rotate right.
    Ror = 0x10,
    /// Rotate left.
    Rol = 0x11,
    /// Pack the low halves of both operands.
    Pack = 0x12,
    /// Pack the low bytes of both operands.
    Packh = 0x13,
    /// Bit interleave.
    Zip = 0x14,
    /// Bit deinterleave.
    Unzip = 0x15,
    /// Byte-reverse the register.
    Rev8 = 0x16,
    /// Bit-reverse each byte (BREV8).
    Revb = 0x17,
    /// Bitwise XOR with inverted operand.
    Xnor = 0x18,
    /// Bitwise AND with inverted operand.
    Andn = 0x19,
    /// Bitwise OR with inverted operand.
    Orn = 0x1A,
    /// Carry-less multiply, low half.
    Clmul = 0x1B,
    /// Carry-less multiply, high half.
    Clmulh = 0x1C,
}

impl AluOp {
    /// Returns the wire encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Looks up the operation for an encoding; unassigned values yield `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0x0 => Self::And,
            0x1 => Self::Sll,
            0x2 => Self::Slt,
            0x3 => Self::Sltu,
            0x4 => Self::Xor,
            0x5 => Self::Srl,
            0x6 => Self::Or,
            0x7 => Self::Add,
            0x8 => Self::Sub,
            0xD => Self::Sra,
            0xE => Self::Imm,
            0xF => Self::Nop,
            0x10 => Self::Ror,
            0x11 => Self::Rol,
            0x12 => Self::Pack,
            0x13 => Self::Packh,
            0x14 => Self::Zip,
            0x15 => Self::Unzip,
            0x16 => Self::Rev8,
            0x17 => Self::Revb,
            0x18 => Self::Xnor,
            0x19 => Self::Andn,
            0x1A => Self::Orn,
            0x1B => Self::Clmul,
            0x1C => Self::Clmulh,
            _ => return None,
        })
    }
}

/// Immediate format selector: how the immediate bits of the word are reassembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ImmType {
    /// No immediate (register-register).
    #[default]
    R = 0,
    /// 12-bit immediate (arithmetic, loads, JALR).
    I = 1,
    /// Split 12-bit store offset.
    S = 2,
    /// Branch offset.
    B = 3,
    /// Upper 20-bit immediate.
    U = 4,
    /// Jump offset.
    J = 5,
}

impl ImmType {
    /// Returns the 3-bit wire encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Source of the value written back to the destination register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RegWriteSrc {
    /// ALU result (or loaded data on the memory path).
    #[default]
    Alu = 0,
    /// Link address (`pc + 4`) for jumps.
    Pc = 1,
}

/// Source of a jump target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum JumpTarget {
    /// PC-relative immediate (JAL, branches).
    #[default]
    Imm = 0,
    /// ALU result (JALR).
    Alu = 1,
}

/// Memory access width encoded in the low two bits of `funct3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MaskMode {
    /// 8-bit access.
    Byte = 0x0,
    /// 16-bit access.
    Short = 0x1,
    /// 32-bit access.
    Word = 0x2,
}

impl MaskMode {
    /// Interprets a 2-bit `mask_mode` field. The value 3 names no width.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            0 => Some(Self::Byte),
            1 => Some(Self::Short),
            2 => Some(Self::Word),
            _ => None,
        }
    }
}

/// Control signals produced by the control unit for one instruction.
///
/// The bundle is built fresh on every decode and moved by value into the
/// pipeline; nothing mutates it afterwards.
///
/// `Default` is the power-on register contents (every field zero, `alu_op` NOP).
/// The decode fallback for unrecognized encodings is [`ControlSignals::idle`],
/// which additionally derives the funct3-only fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ControlSignals {
    /// Immediate format.
    pub imm_type: ImmType,
    /// Unconditional jump.
    pub jump: bool,
    /// Jump target source.
    pub target: JumpTarget,
    /// Conditional branch.
    pub branch: bool,
    /// Branch sense: taken when `(alu_result == 0) != branch_inv` (set for BNE, BLT, BLTU).
    pub branch_inv: bool,
    /// Write the destination register.
    pub reg_write: bool,
    /// Writeback source.
    pub reg_write_src: RegWriteSrc,
    /// Store to memory.
    pub mem_write: bool,
    /// Load from memory.
    pub mem_read: bool,
    /// ALU operand B is the immediate.
    pub alu_imm: bool,
    /// ALU operand A is the PC.
    pub alu_pc: bool,
    /// ALU operation.
    pub alu_op: AluOp,
    /// Raw 2-bit access width (`funct3[1:0]`); see [`MaskMode::from_bits`].
    pub mask_mode: u8,
    /// Sign-extend loaded data (`!funct3[2]`).
    pub mem_sign_ext: bool,
}

impl ControlSignals {
    /// The fallback bundle for an unrecognized or unsupported encoding.
    ///
    /// Every opcode-dependent signal is de-asserted and `alu_op` is NOP. The
    /// memory-width and branch-sense fields are wired straight from `funct3` and
    /// do not depend on the opcode, so they are still derived here.
    pub const fn idle(funct3: u8) -> Self {
        Self {
            imm_type: ImmType::R,
            jump: false,
            target: JumpTarget::Imm,
            branch: false,
            branch_inv: branch_inv(funct3),
            reg_write: false,
            reg_write_src: RegWriteSrc::Alu,
            mem_write: false,
            mem_read: false,
            alu_imm: false,
            alu_pc: false,
            alu_op: AluOp::Nop,
            mask_mode: funct3 & 0b11,
            mem_sign_ext: funct3 & 0b100 == 0,
        }
    }

    /// Decoded access width, if the mask field names one.
    pub const fn mask(&self) -> Option<MaskMode> {
        MaskMode::from_bits(self.mask_mode)
    }

    /// Whether any opcode-dependent signal is asserted.
    pub fn is_idle(&self) -> bool {
        let idle = Self::idle(0);
        Self {
            branch_inv: false,
            mask_mode: 0,
            mem_sign_ext: true,
            ..*self
        } == idle
    }
}

/// `funct3[0] ^ funct3[2]`.
const fn branch_inv(funct3: u8) -> bool {
    (funct3 & 0b001 != 0) ^ (funct3 & 0b100 != 0)
}
