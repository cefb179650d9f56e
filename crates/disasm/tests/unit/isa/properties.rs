//! # Decoder Properties

use proptest::prelude::*;

use mipsdis::isa::decoder::{UNKNOWN, decode, disassemble};
use mipsdis::isa::instruction::sign_extend16;

const KNOWN_FUNCT: [u32; 27] = [
    0, 2, 3, 4, 6, 7, 8, 9, 12, 16, 17, 18, 19, 24, 25, 26, 27, 32, 33, 34, 35, 36, 37, 38, 39,
    42, 43,
];

const KNOWN_OPCODES: [u32; 22] = [
    0, 1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 13, 14, 15, 32, 33, 35, 36, 37, 40, 41, 43,
];

proptest! {
    #[test]
    fn decode_is_total_and_non_empty(inst in any::<u32>()) {
        prop_assert!(!disassemble(inst).is_empty());
    }

    #[test]
    fn decode_is_idempotent(inst in any::<u32>()) {
        prop_assert_eq!(decode(inst), decode(inst));
        prop_assert_eq!(disassemble(inst), disassemble(inst));
    }

    #[test]
    fn unlisted_function_codes_are_unknown(body in 0u32..(1 << 20), funct in 0u32..64) {
        prop_assume!(!KNOWN_FUNCT.contains(&funct));
        let inst = (body << 6) | funct;
        prop_assert_eq!(disassemble(inst), UNKNOWN);
    }

    #[test]
    fn unlisted_opcodes_are_unknown(opcode in 0u32..64, rest in 0u32..(1 << 26)) {
        prop_assume!(!KNOWN_OPCODES.contains(&opcode));
        let inst = (opcode << 26) | rest;
        prop_assert_eq!(disassemble(inst), UNKNOWN);
    }

    #[test]
    fn sign_extension_stays_in_range(imm in any::<u16>()) {
        let v = sign_extend16(imm);
        prop_assert!((-32768..=32767).contains(&v));
        let expected = if imm & 0x8000 == 0 { imm as i32 } else { imm as i32 - 65536 };
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn recognised_words_start_with_their_mnemonic(inst in any::<u32>()) {
        if let mipsdis::Decoded::Instruction { mnemonic, .. } = decode(inst) {
            prop_assert!(disassemble(inst).starts_with(mnemonic));
        }
    }
}
