//! Instruction word encoders.
//!
//! Builds raw 32-bit words from fields so tests can name instructions by their
//! encoding instead of magic constants.

use rvpipe_core::isa::Opcode;

/// Encode an R-type instruction.
pub fn r_type(opcode: Opcode, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | u32::from(opcode.bits())
}

/// Encode an I-type instruction.
pub fn i_type(opcode: Opcode, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | u32::from(opcode.bits())
}

/// Encode an S-type instruction.
pub fn s_type(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 5) & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (v & 0x1F) << 7
        | u32::from(Opcode::Store.bits())
}

/// Encode a B-type instruction (offset bits are not range-checked).
pub fn b_type(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 12) & 1) << 31
        | ((v >> 5) & 0x3F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | ((v >> 1) & 0xF) << 8
        | ((v >> 11) & 1) << 7
        | u32::from(Opcode::Branch.bits())
}

/// Encode a U-type instruction.
pub fn u_type(opcode: Opcode, rd: u32, imm: u32) -> u32 {
    (imm & 0xFFFF_F000) | (rd & 0x1F) << 7 | u32::from(opcode.bits())
}

/// Encode a J-type instruction.
pub fn j_type(rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 20) & 1) << 31
        | ((v >> 1) & 0x3FF) << 21
        | ((v >> 11) & 1) << 20
        | ((v >> 12) & 0xFF) << 12
        | (rd & 0x1F) << 7
        | u32::from(Opcode::Jal.bits())
}

/// `lw rd, imm(x0)`.
pub fn lw(rd: u32, imm: i32) -> u32 {
    i_type(Opcode::Load, rd, 0b010, 0, imm)
}

/// `addi rd, rs1, imm`.
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(Opcode::Imm, rd, 0b000, rs1, imm)
}
