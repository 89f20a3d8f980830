//! RV32I operation tables.
//!
//! `funct3` 000, 001, 011 and 101 of REG and 001 and 101 of IMM are refined by
//! `funct7`. The REG table also carries the Zbkc carry-less multiplies under
//! `funct7 = 0x05`.

use super::AluOpTable;
use crate::core::pipeline::signals::AluOp;
use crate::isa::funct7 as f7;

/// Base decoder tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseTable;

impl AluOpTable for BaseTable {
    fn reg(funct3: u8, funct7: u8) -> Option<AluOp> {
        match (funct3, funct7) {
            (0b000, f7::BASE) => Some(AluOp::Add),
            (0b000, f7::ALT) => Some(AluOp::Sub),
            (0b001, f7::BASE) => Some(AluOp::Sll),
            (0b001, f7::CLMUL) => Some(AluOp::Clmul),
            (0b010, _) => Some(AluOp::Slt),
            (0b011, f7::BASE) => Some(AluOp::Sltu),
            (0b011, f7::CLMUL) => Some(AluOp::Clmulh),
            (0b100, _) => Some(AluOp::Xor),
            (0b101, f7::BASE) => Some(AluOp::Srl),
            (0b101, f7::ALT) => Some(AluOp::Sra),
            (0b110, _) => Some(AluOp::Or),
            (0b111, _) => Some(AluOp::And),
            _ => None,
        }
    }

    fn imm(funct3: u8, funct7: u8, _imm: u16) -> Option<AluOp> {
        match (funct3, funct7) {
            (0b000, _) => Some(AluOp::Add),
            (0b001, f7::BASE) => Some(AluOp::Sll),
            (0b010, _) => Some(AluOp::Slt),
            (0b011, _) => Some(AluOp::Sltu),
            (0b100, _) => Some(AluOp::Xor),
            (0b101, f7::BASE) => Some(AluOp::Srl),
            (0b101, f7::ALT) => Some(AluOp::Sra),
            (0b110, _) => Some(AluOp::Or),
            (0b111, _) => Some(AluOp::And),
            _ => None,
        }
    }
}
