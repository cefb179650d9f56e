//! Primary opcode values (bits 31..26) and their mnemonics.

pub const OP_SPECIAL: u32 = 0;
pub const OP_REGIMM: u32 = 1;
pub const OP_J: u32 = 2;
pub const OP_JAL: u32 = 3;
pub const OP_BEQ: u32 = 4;
pub const OP_BNE: u32 = 5;
pub const OP_ADDI: u32 = 8;
pub const OP_ADDIU: u32 = 9;
pub const OP_SLTI: u32 = 10;
pub const OP_SLTIU: u32 = 11;
pub const OP_ANDI: u32 = 12;
pub const OP_ORI: u32 = 13;
pub const OP_XORI: u32 = 14;
pub const OP_LUI: u32 = 15;
pub const OP_LB: u32 = 32;
pub const OP_LH: u32 = 33;
pub const OP_LW: u32 = 35;
pub const OP_LBU: u32 = 36;
pub const OP_LHU: u32 = 37;
pub const OP_SB: u32 = 40;
pub const OP_SH: u32 = 41;
pub const OP_SW: u32 = 43;

/// Mnemonic for a non-register-format opcode.
///
/// `OP_SPECIAL` has no mnemonic of its own; the function code names the
/// operation. `OP_REGIMM` carries the legacy `branch` label but no
/// operand rule, so the decoder treats it as unrecognised.
pub fn mnemonic(opcode: u32) -> Option<&'static str> {
    let name = match opcode {
        OP_REGIMM => "branch",
        OP_J => "j",
        OP_JAL => "jal",
        OP_BEQ => "beq",
        OP_BNE => "bne",
        OP_ADDI => "addi",
        OP_ADDIU => "addiu",
        OP_SLTI => "slti",
        OP_SLTIU => "sltiu",
        OP_ANDI => "andi",
        OP_ORI => "ori",
        OP_XORI => "xori",
        OP_LUI => "lui",
        OP_LB => "lb",
        OP_LH => "lh",
        OP_LW => "lw",
        OP_LBU => "lbu",
        OP_LHU => "lhu",
        OP_SB => "sb",
        OP_SH => "sh",
        OP_SW => "sw",
        _ => return None,
    };
    Some(name)
}
