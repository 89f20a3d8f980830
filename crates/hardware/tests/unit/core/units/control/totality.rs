//! Decode Totality Tests.
//!
//! Walks every `(opcode, funct3, funct7)` combination (2^17 inputs) through both
//! decoders and compares each bundle with a reference built from flat operation
//! tables. For Zbkb each combination is paired with the immediates that select
//! REV8 and BREV8 plus one that selects neither.

use pretty_assertions::assert_eq;
use rvpipe_core::config::Isa;
use rvpipe_core::core::pipeline::signals::{
    AluOp, ControlSignals, ImmType, JumpTarget, RegWriteSrc,
};
use rvpipe_core::core::units::control::{decode, decode_zbkb};

/// `(funct3, funct7, op)`; a `None` funct7 matches every value.
type Table = &'static [(u8, Option<u8>, AluOp)];

const BASE_REG: Table = &[
    (0, Some(0x00), AluOp::Add),
    (0, Some(0x20), AluOp::Sub),
    (1, Some(0x00), AluOp::Sll),
    (1, Some(0x05), AluOp::Clmul),
    (2, None, AluOp::Slt),
    (3, Some(0x00), AluOp::Sltu),
    (3, Some(0x05), AluOp::Clmulh),
    (4, None, AluOp::Xor),
    (5, Some(0x00), AluOp::Srl),
    (5, Some(0x20), AluOp::Sra),
    (6, None, AluOp::Or),
    (7, None, AluOp::And),
];

const BASE_IMM: Table = &[
    (0, None, AluOp::Add),
    (1, Some(0x00), AluOp::Sll),
    (2, None, AluOp::Slt),
    (3, None, AluOp::Sltu),
    (4, None, AluOp::Xor),
    (5, Some(0x00), AluOp::Srl),
    (5, Some(0x20), AluOp::Sra),
    (6, None, AluOp::Or),
    (7, None, AluOp::And),
];

const ZBKB_REG: Table = &[
    (0, Some(0x00), AluOp::Add),
    (0, Some(0x20), AluOp::Sub),
    (1, Some(0x00), AluOp::Sll),
    (1, Some(0x30), AluOp::Rol),
    (2, None, AluOp::Slt),
    (3, None, AluOp::Sltu),
    (4, Some(0x00), AluOp::Xor),
    (4, Some(0x04), AluOp::Pack),
    (4, Some(0x20), AluOp::Xnor),
    (5, Some(0x00), AluOp::Srl),
    (5, Some(0x20), AluOp::Sra),
    (5, Some(0x30), AluOp::Ror),
    (6, Some(0x00), AluOp::Or),
    (6, Some(0x20), AluOp::Orn),
    (7, Some(0x00), AluOp::And),
    (7, Some(0x04), AluOp::Packh),
    (7, Some(0x20), AluOp::Andn),
];

const ZBKB_IMM: Table = &[
    (0, None, AluOp::Add),
    (1, Some(0x00), AluOp::Sll),
    (1, Some(0x04), AluOp::Zip),
    (2, None, AluOp::Slt),
    (3, None, AluOp::Sltu),
    (4, None, AluOp::Xor),
    (5, Some(0x00), AluOp::Srl),
    (5, Some(0x04), AluOp::Unzip),
    (5, Some(0x20), AluOp::Sra),
    (5, Some(0x30), AluOp::Ror),
    (6, None, AluOp::Or),
    (7, None, AluOp::And),
];

fn lookup(table: Table, funct3: u8, funct7: u8) -> Option<AluOp> {
    table
        .iter()
        .find(|(f3, f7, _)| *f3 == funct3 && f7.is_none_or(|key| key == funct7))
        .map(|&(_, _, op)| op)
}

fn imm_op(isa: Isa, funct3: u8, funct7: u8, imm: u16) -> Option<AluOp> {
    match isa {
        Isa::Base => lookup(BASE_IMM, funct3, funct7),
        Isa::Zbkb => match (funct3, funct7, imm) {
            (5, 0x34, 0x698) => Some(AluOp::Rev8),
            (5, 0x34, 0x687) => Some(AluOp::Revb),
            _ => lookup(ZBKB_IMM, funct3, funct7),
        },
    }
}

/// The bundle each opcode must produce, written out field by field.
fn expected(isa: Isa, opcode: u8, funct3: u8, funct7: u8, imm: u16) -> ControlSignals {
    let idle = ControlSignals::idle(funct3);
    match opcode {
        0x33 => {
            let table = if isa == Isa::Base { BASE_REG } else { ZBKB_REG };
            lookup(table, funct3, funct7).map_or(idle, |alu_op| ControlSignals {
                imm_type: ImmType::R,
                reg_write: true,
                alu_op,
                ..idle
            })
        }
        0x13 => imm_op(isa, funct3, funct7, imm).map_or(idle, |alu_op| ControlSignals {
            imm_type: ImmType::I,
            alu_imm: true,
            reg_write: true,
            alu_op,
            ..idle
        }),
        0x03 => ControlSignals {
            imm_type: ImmType::I,
            alu_imm: true,
            reg_write: true,
            mem_read: true,
            alu_op: AluOp::Add,
            ..idle
        },
        0x23 => ControlSignals {
            imm_type: ImmType::S,
            alu_imm: true,
            mem_write: true,
            alu_op: AluOp::Add,
            ..idle
        },
        0x63 => {
            let alu_op = match funct3 {
                0 | 1 => AluOp::Xor,
                4 | 5 => AluOp::Slt,
                6 | 7 => AluOp::Sltu,
                _ => return idle,
            };
            ControlSignals {
                imm_type: ImmType::B,
                branch: true,
                alu_op,
                ..idle
            }
        }
        0x37 => ControlSignals {
            imm_type: ImmType::U,
            alu_imm: true,
            reg_write: true,
            alu_op: AluOp::Imm,
            ..idle
        },
        0x17 => ControlSignals {
            imm_type: ImmType::U,
            alu_imm: true,
            alu_pc: true,
            reg_write: true,
            alu_op: AluOp::Add,
            ..idle
        },
        0x6F => ControlSignals {
            imm_type: ImmType::J,
            jump: true,
            reg_write: true,
            reg_write_src: RegWriteSrc::Pc,
            ..idle
        },
        0x67 => ControlSignals {
            imm_type: ImmType::I,
            jump: true,
            target: JumpTarget::Alu,
            alu_imm: true,
            reg_write: true,
            reg_write_src: RegWriteSrc::Pc,
            alu_op: AluOp::Add,
            ..idle
        },
        _ => idle,
    }
}

/// Every in-domain `(opcode, funct3, funct7)`.
fn all_fields() -> impl Iterator<Item = (u8, u8, u8)> {
    (0u8..0x80).flat_map(|opcode| {
        (0u8..8).flat_map(move |funct3| (0u8..0x80).map(move |funct7| (opcode, funct3, funct7)))
    })
}

#[test]
fn base_decoder_matches_reference_everywhere() {
    for (opcode, funct3, funct7) in all_fields() {
        assert_eq!(
            decode(opcode, funct3, funct7),
            expected(Isa::Base, opcode, funct3, funct7, 0),
            "opcode={opcode:#04x} funct3={funct3} funct7={funct7:#04x}"
        );
    }
}

#[test]
fn zbkb_decoder_matches_reference_everywhere() {
    for (opcode, funct3, funct7) in all_fields() {
        let upper = u16::from(funct7) << 5;
        // Low bits 0x18 and 0x07 complete 0x698 and 0x687 under funct7 0x34.
        for imm in [upper, upper | 0x18, upper | 0x07] {
            assert_eq!(
                decode_zbkb(opcode, funct3, funct7, imm),
                expected(Isa::Zbkb, opcode, funct3, funct7, imm),
                "opcode={opcode:#04x} funct3={funct3} funct7={funct7:#04x} imm={imm:#05x}"
            );
        }
    }
}

#[test]
fn non_alu_bundles_ignore_funct7() {
    for opcode in [0x03, 0x23, 0x63, 0x37, 0x17, 0x6F, 0x67] {
        for funct3 in 0u8..8 {
            let reference = decode(opcode, funct3, 0);
            for funct7 in 1u8..0x80 {
                assert_eq!(decode(opcode, funct3, funct7), reference);
                assert_eq!(decode_zbkb(opcode, funct3, funct7, 0xFFF), reference);
            }
        }
    }
}
