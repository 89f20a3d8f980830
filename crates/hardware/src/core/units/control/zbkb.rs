//! Zbkb operation tables.
//!
//! Extends the base REG and IMM tables with the rotate, pack, inverted-logic,
//! zip and reverse operations. REV8 and BREV8 share `funct7 = 0x34` and are
//! told apart by the full 12-bit immediate.

use super::AluOpTable;
use crate::core::pipeline::signals::AluOp;
use crate::isa::funct7 as f7;

/// Zbkb decoder tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZbkbTable;

impl AluOpTable for ZbkbTable {
    fn reg(funct3: u8, funct7: u8) -> Option<AluOp> {
        match (funct3, funct7) {
            (0b000, f7::BASE) => Some(AluOp::Add),
            (0b000, f7::ALT) => Some(AluOp::Sub),
            (0b001, f7::BASE) => Some(AluOp::Sll),
            (0b001, f7::ROTATE) => Some(AluOp::Rol),
            (0b010, _) => Some(AluOp::Slt),
            (0b011, _) => Some(AluOp::Sltu),
            (0b100, f7::BASE) => Some(AluOp::Xor),
            (0b100, f7::PACK) => Some(AluOp::Pack),
            (0b100, f7::ALT) => Some(AluOp::Xnor),
            (0b101, f7::BASE) => Some(AluOp::Srl),
            (0b101, f7::ALT) => Some(AluOp::Sra),
            (0b101, f7::ROTATE) => Some(AluOp::Ror),
            (0b110, f7::BASE) => Some(AluOp::Or),
            (0b110, f7::ALT) => Some(AluOp::Orn),
            (0b111, f7::BASE) => Some(AluOp::And),
            (0b111, f7::PACK) => Some(AluOp::Packh),
            (0b111, f7::ALT) => Some(AluOp::Andn),
            _ => None,
        }
    }

    fn imm(funct3: u8, funct7: u8, imm: u16) -> Option<AluOp> {
        match (funct3, funct7) {
            (0b000, _) => Some(AluOp::Add),
            (0b001, f7::BASE) => Some(AluOp::Sll),
            (0b001, f7::PACK) => Some(AluOp::Zip),
            (0b010, _) => Some(AluOp::Slt),
            (0b011, _) => Some(AluOp::Sltu),
            (0b100, _) => Some(AluOp::Xor),
            (0b101, f7::BASE) => Some(AluOp::Srl),
            (0b101, f7::PACK) => Some(AluOp::Unzip),
            (0b101, f7::ALT) => Some(AluOp::Sra),
            (0b101, f7::ROTATE) => Some(AluOp::Ror),
            (0b101, f7::REV) => match imm {
                f7::REV8_IMM => Some(AluOp::Rev8),
                f7::BREV8_IMM => Some(AluOp::Revb),
                _ => None,
            },
            (0b110, _) => Some(AluOp::Or),
            (0b111, _) => Some(AluOp::And),
            _ => None,
        }
    }
}
