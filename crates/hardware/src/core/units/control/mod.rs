//! Control Unit.
//!
//! Maps the opcode, funct3, funct7 (and for Zbkb, the I-type immediate) of an
//! instruction to a [`ControlSignals`] bundle. Decoding is a pure, total function:
//! every input combination produces exactly one bundle, and any encoding gap
//! resolves to [`ControlSignals::idle`] rather than a fault.
//!
//! The two variants share one decode skeleton and differ only in their
//! [`AluOpTable`], the REG/IMM operation selection:
//! - [`base`]: RV32I, plus the carry-less multiply entries.
//! - [`zbkb`]: RV32I plus the Zbkb rotate, pack, zip and reverse operations.

/// RV32I operation tables.
pub mod base;

/// Zbkb bit-manipulation operation tables.
pub mod zbkb;

use crate::config::Isa;
use crate::core::pipeline::signals::{AluOp, ControlSignals, ImmType, JumpTarget, RegWriteSrc};
use crate::isa::instruction::DecodeFields;
use crate::isa::opcodes::Opcode;

pub use self::base::BaseTable;
pub use self::zbkb::ZbkbTable;

/// Operation selection for the REG and IMM opcodes.
///
/// Each method is an 8-way select on `funct3`, refined by an exact-match table on
/// `funct7` where `funct3` alone is ambiguous. `None` marks an unmatched entry.
pub trait AluOpTable {
    /// Operation for a register-register instruction.
    fn reg(funct3: u8, funct7: u8) -> Option<AluOp>;

    /// Operation for a register-immediate instruction; `imm` is the raw 12-bit immediate.
    fn imm(funct3: u8, funct7: u8, imm: u16) -> Option<AluOp>;
}

/// Decodes with the base RV32I tables.
///
/// ```
/// use rvpipe_core::core::units::control::decode;
/// use rvpipe_core::core::pipeline::signals::AluOp;
/// use rvpipe_core::isa::Opcode;
///
/// assert_eq!(decode(Opcode::Reg.bits(), 0b000, 0x20).alu_op, AluOp::Sub);
/// assert_eq!(decode(Opcode::Reg.bits(), 0b000, 0x41).alu_op, AluOp::Nop);
/// ```
pub fn decode(opcode: u8, funct3: u8, funct7: u8) -> ControlSignals {
    decode_with::<BaseTable>(opcode, funct3, funct7, 0)
}

/// Decodes with the Zbkb tables; `imm` disambiguates REV8 and BREV8.
pub fn decode_zbkb(opcode: u8, funct3: u8, funct7: u8, imm: u16) -> ControlSignals {
    decode_with::<ZbkbTable>(opcode, funct3, funct7, imm)
}

/// The shared decode skeleton: an ordered match over the opcode with one default arm.
///
/// Inputs are truncated to their field widths first (7, 3, 7 and 12 bits).
pub fn decode_with<T: AluOpTable>(opcode: u8, funct3: u8, funct7: u8, imm: u16) -> ControlSignals {
    let funct3 = funct3 & 0b111;
    let funct7 = funct7 & 0x7F;
    let imm = imm & 0xFFF;
    let idle = ControlSignals::idle(funct3);

    let Some(opcode) = Opcode::from_bits(opcode) else {
        return idle;
    };

    match opcode {
        Opcode::Reg => match T::reg(funct3, funct7) {
            Some(alu_op) => ControlSignals {
                imm_type: ImmType::R,
                reg_write: true,
                reg_write_src: RegWriteSrc::Alu,
                alu_op,
                ..idle
            },
            None => idle,
        },
        Opcode::Imm => match T::imm(funct3, funct7, imm) {
            Some(alu_op) => ControlSignals {
                imm_type: ImmType::I,
                alu_imm: true,
                reg_write: true,
                reg_write_src: RegWriteSrc::Alu,
                alu_op,
                ..idle
            },
            None => idle,
        },
        Opcode::Load => ControlSignals {
            imm_type: ImmType::I,
            alu_imm: true,
            alu_op: AluOp::Add,
            mem_read: true,
            reg_write: true,
            ..idle
        },
        Opcode::Store => ControlSignals {
            imm_type: ImmType::S,
            alu_imm: true,
            alu_op: AluOp::Add,
            mem_write: true,
            ..idle
        },
        Opcode::Branch => match branch_op(funct3) {
            Some(alu_op) => ControlSignals {
                imm_type: ImmType::B,
                branch: true,
                target: JumpTarget::Imm,
                alu_op,
                ..idle
            },
            None => idle,
        },
        Opcode::Lui => ControlSignals {
            imm_type: ImmType::U,
            alu_imm: true,
            // LUI writes the immediate unchanged.
            alu_op: AluOp::Imm,
            reg_write: true,
            reg_write_src: RegWriteSrc::Alu,
            ..idle
        },
        Opcode::Auipc => ControlSignals {
            imm_type: ImmType::U,
            alu_imm: true,
            alu_pc: true,
            alu_op: AluOp::Add,
            reg_write: true,
            reg_write_src: RegWriteSrc::Alu,
            ..idle
        },
        Opcode::Jal => ControlSignals {
            imm_type: ImmType::J,
            jump: true,
            target: JumpTarget::Imm,
            reg_write: true,
            reg_write_src: RegWriteSrc::Pc,
            ..idle
        },
        Opcode::Jalr => ControlSignals {
            imm_type: ImmType::I,
            jump: true,
            target: JumpTarget::Alu,
            alu_imm: true,
            alu_op: AluOp::Add,
            reg_write: true,
            reg_write_src: RegWriteSrc::Pc,
            ..idle
        },
        Opcode::System => idle,
    }
}

/// Branch comparison, selected by `funct3[2:1]`. The sense comes from `branch_inv`.
const fn branch_op(funct3: u8) -> Option<AluOp> {
    match funct3 >> 1 {
        0b00 => Some(AluOp::Xor),  // beq/bne
        0b10 => Some(AluOp::Slt),  // blt/bge
        0b11 => Some(AluOp::Sltu), // bltu/bgeu
        _ => None,
    }
}

/// A decoder bound to one ISA variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlUnit {
    isa: Isa,
}

impl ControlUnit {
    /// Creates a control unit for `isa`.
    pub const fn new(isa: Isa) -> Self {
        Self { isa }
    }

    /// The decoded ISA variant.
    pub const fn isa(&self) -> Isa {
        self.isa
    }

    /// Decodes one instruction.
    pub fn decode(&self, fields: DecodeFields) -> ControlSignals {
        match self.isa {
            Isa::Base => decode(fields.opcode, fields.funct3, fields.funct7),
            Isa::Zbkb => decode_zbkb(fields.opcode, fields.funct3, fields.funct7, fields.imm),
        }
    }

    /// Splits and decodes a raw instruction word.
    pub fn decode_word(&self, word: u32) -> ControlSignals {
        self.decode(DecodeFields::from_word(word))
    }
}
