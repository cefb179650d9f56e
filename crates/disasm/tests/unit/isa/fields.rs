//! # Field Extraction Tests

use mipsdis::isa::instruction::{
    Fields, IMM_MASK, InstructionBits, Layout, OPCODE_MASK, TARGET_MASK, extract, sign_extend16,
};

/// Builds a register-format word.
fn r_type(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    (rs & 0x1F) << 21 | (rt & 0x1F) << 16 | (rd & 0x1F) << 11 | (shamt & 0x1F) << 6 | (funct & 0x3F)
}

#[test]
fn test_register_fields() {
    let inst = r_type(17, 18, 8, 0, 32); // add $8, $17, $18
    assert_eq!(inst.opcode(), 0);
    assert_eq!(inst.rs(), 17);
    assert_eq!(inst.rt(), 18);
    assert_eq!(inst.rd(), 8);
    assert_eq!(inst.shamt(), 0);
    assert_eq!(inst.funct(), 32);
}

#[test]
fn test_extract_register_layout() {
    let inst = r_type(1, 2, 3, 4, 2);
    assert_eq!(
        extract(inst, Layout::Register),
        Fields::Register {
            opcode: 0,
            rs: 1,
            rt: 2,
            rd: 3,
            shamt: 4,
            funct: 2,
        }
    );
}

#[test]
fn test_extract_immediate_layout() {
    assert_eq!(
        extract(0x8C23_0004, Layout::Immediate),
        Fields::Immediate {
            opcode: 35,
            rs: 1,
            rt: 3,
            imm: 4,
        }
    );
}

#[test]
fn test_extract_jump_layout() {
    assert_eq!(
        extract(0x0C00_0010, Layout::Jump),
        Fields::Jump {
            opcode: 3,
            target: 16,
        }
    );
}

#[test]
fn test_all_ones_word_saturates_every_field() {
    let inst = u32::MAX;
    assert_eq!(inst.opcode(), 63);
    assert_eq!(inst.rs(), 31);
    assert_eq!(inst.rt(), 31);
    assert_eq!(inst.rd(), 31);
    assert_eq!(inst.shamt(), 31);
    assert_eq!(inst.funct(), 63);
    assert_eq!(inst.imm(), 0xFFFF);
    assert_eq!(inst.target(), 0x03FF_FFFF);
}

#[test]
fn test_mask_constants() {
    assert_eq!(OPCODE_MASK, 0xFC00_0000);
    assert_eq!(IMM_MASK, 0x0000_FFFF);
    assert_eq!(TARGET_MASK, 0x03FF_FFFF);
}

#[test]
fn test_sign_extend16() {
    assert_eq!(sign_extend16(0x8000), -32768);
    assert_eq!(sign_extend16(0x7FFF), 32767);
    assert_eq!(sign_extend16(0x0000), 0);
    assert_eq!(sign_extend16(0xFFFC), -4);
}
