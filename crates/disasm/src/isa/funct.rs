//! Function codes (bits 5..0) selecting the operation under `OP_SPECIAL`.

pub const SLL: u32 = 0;
pub const SRL: u32 = 2;
pub const SRA: u32 = 3;
pub const SLLV: u32 = 4;
pub const SRLV: u32 = 6;
pub const SRAV: u32 = 7;
pub const JR: u32 = 8;
pub const JALR: u32 = 9;
pub const SYSCALL: u32 = 12;
pub const MFHI: u32 = 16;
pub const MTHI: u32 = 17;
pub const MFLO: u32 = 18;
pub const MTLO: u32 = 19;
pub const MULT: u32 = 24;
pub const MULTU: u32 = 25;
pub const DIV: u32 = 26;
pub const DIVU: u32 = 27;
pub const ADD: u32 = 32;
pub const ADDU: u32 = 33;
pub const SUB: u32 = 34;
pub const SUBU: u32 = 35;
pub const AND: u32 = 36;
pub const OR: u32 = 37;
pub const XOR: u32 = 38;
pub const NOR: u32 = 39;
pub const SLT: u32 = 42;
pub const SLTU: u32 = 43;

pub fn mnemonic(funct: u32) -> Option<&'static str> {
    let name = match funct {
        SLL => "sll",
        SRL => "srl",
        SRA => "sra",
        SLLV => "sllv",
        SRLV => "srlv",
        SRAV => "srav",
        JR => "jr",
        JALR => "jalr",
        SYSCALL => "syscall",
        MFHI => "mfhi",
        MTHI => "mthi",
        MFLO => "mflo",
        MTLO => "mtlo",
        MULT => "mult",
        MULTU => "multu",
        DIV => "div",
        DIVU => "divu",
        ADD => "add",
        ADDU => "addu",
        SUB => "sub",
        SUBU => "subu",
        AND => "and",
        OR => "or",
        XOR => "xor",
        NOR => "nor",
        SLT => "slt",
        SLTU => "sltu",
        _ => return None,
    };
    Some(name)
}
