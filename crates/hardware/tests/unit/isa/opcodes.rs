//! Opcode lookup tests.

use rstest::rstest;
use rvpipe_core::isa::Opcode;

#[rstest]
#[case(Opcode::Load, 0x03)]
#[case(Opcode::Imm, 0x13)]
#[case(Opcode::Auipc, 0x17)]
#[case(Opcode::Store, 0x23)]
#[case(Opcode::Reg, 0x33)]
#[case(Opcode::Lui, 0x37)]
#[case(Opcode::Branch, 0x63)]
#[case(Opcode::Jalr, 0x67)]
#[case(Opcode::Jal, 0x6F)]
#[case(Opcode::System, 0x73)]
fn encodings(#[case] opcode: Opcode, #[case] bits: u8) {
    assert_eq!(opcode.bits(), bits);
    assert_eq!(u8::from(opcode), bits);
    assert_eq!(Opcode::from_bits(bits), Some(opcode));
}

#[test]
fn from_bits_ignores_bit_seven() {
    assert_eq!(Opcode::from_bits(0x80 | 0x33), Some(Opcode::Reg));
}

#[test]
fn exactly_ten_opcodes_decode() {
    let recognized = (0u8..0x80).filter_map(Opcode::from_bits).count();
    assert_eq!(recognized, Opcode::ALL.len());
    for op in Opcode::ALL {
        assert_eq!(Opcode::from_bits(op.bits()), Some(op));
    }
}
