//! Instruction field extraction tests.

use pretty_assertions::assert_eq;
use rvpipe_core::isa::{DecodeFields, InstructionBits, Opcode};

use crate::common::encode::{i_type, r_type};

#[test]
fn r_type_fields() {
    let word = r_type(Opcode::Reg, 3, 0b101, 1, 2, 0x20); // sra x3, x1, x2
    assert_eq!(word.opcode(), 0x33);
    assert_eq!(word.rd(), 3);
    assert_eq!(word.funct3(), 0b101);
    assert_eq!(word.rs1(), 1);
    assert_eq!(word.rs2(), 2);
    assert_eq!(word.funct7(), 0x20);
}

#[test]
fn imm_is_raw_twelve_bits() {
    let word = i_type(Opcode::Imm, 1, 0b000, 0, -1);
    assert_eq!(word.imm_i(), 0xFFF);
}

#[test]
fn rev8_immediate_overlaps_funct7() {
    // rev8 x1, x2: imm 0x698, so funct7 is 0x34.
    let word = i_type(Opcode::Imm, 1, 0b101, 2, 0x698);
    assert_eq!(
        DecodeFields::from(word),
        DecodeFields {
            opcode: 0x13,
            funct3: 0b101,
            funct7: 0x34,
            imm: 0x698,
        }
    );
}
