//! Instruction field extraction.
//!
//! Every MIPS I instruction is a single 32-bit word laid out in one of three
//! fixed formats (bit 31 is the most significant bit):
//!
//! | Format    | 31..26 | 25..21 | 20..16 | 15..11 | 10..6 | 5..0  |
//! |-----------|--------|--------|--------|--------|-------|-------|
//! | Register  | opcode | rs     | rt     | rd     | shamt | funct |
//! | Immediate | opcode | rs     | rt     | imm (15..0)            |
//! | Jump      | opcode | target (25..0)                           |
//!
//! Extraction is a mask followed by a right shift and is total over `u32`.

pub const OPCODE_BITS: u32 = 6;
pub const REG_BITS: u32 = 5;
pub const SHAMT_BITS: u32 = 5;
pub const FUNCT_BITS: u32 = 6;
pub const IMM_BITS: u32 = 16;
pub const TARGET_BITS: u32 = 26;

pub const OPCODE_SHIFT: u32 = 26;
pub const RS_SHIFT: u32 = 21;
pub const RT_SHIFT: u32 = 16;
pub const RD_SHIFT: u32 = 11;
pub const SHAMT_SHIFT: u32 = 6;

pub const OPCODE_MASK: u32 = ((1 << OPCODE_BITS) - 1) << OPCODE_SHIFT;
pub const RS_MASK: u32 = ((1 << REG_BITS) - 1) << RS_SHIFT;
pub const RT_MASK: u32 = ((1 << REG_BITS) - 1) << RT_SHIFT;
pub const RD_MASK: u32 = ((1 << REG_BITS) - 1) << RD_SHIFT;
pub const SHAMT_MASK: u32 = ((1 << SHAMT_BITS) - 1) << SHAMT_SHIFT;
pub const FUNCT_MASK: u32 = (1 << FUNCT_BITS) - 1;
pub const IMM_MASK: u32 = (1 << IMM_BITS) - 1;
pub const TARGET_MASK: u32 = (1 << TARGET_BITS) - 1;

/// Raw field accessors on an encoded instruction word.
pub trait InstructionBits {
    fn opcode(&self) -> u32;
    fn rs(&self) -> usize;
    fn rt(&self) -> usize;
    fn rd(&self) -> usize;
    fn shamt(&self) -> u32;
    fn funct(&self) -> u32;
    fn imm(&self) -> u16;
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self & OPCODE_MASK) >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self & RS_MASK) >> RS_SHIFT) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self & RT_MASK) >> RT_SHIFT) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self & RD_MASK) >> RD_SHIFT) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self & SHAMT_MASK) >> SHAMT_SHIFT
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// The three encoding layouts a word can be read through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Register,
    Immediate,
    Jump,
}

/// Sub-fields of a word, as seen through one [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fields {
    Register {
        opcode: u32,
        rs: usize,
        rt: usize,
        rd: usize,
        shamt: u32,
        funct: u32,
    },
    Immediate {
        opcode: u32,
        rs: usize,
        rt: usize,
        imm: u16,
    },
    Jump {
        opcode: u32,
        target: u32,
    },
}

/// Splits `inst` into the fields of the requested layout.
///
/// No validation happens here: any word can be viewed through any layout,
/// and whether the resulting values mean anything is decided by the
/// opcode and function-code lookups.
pub fn extract(inst: u32, layout: Layout) -> Fields {
    match layout {
        Layout::Register => Fields::Register {
            opcode: inst.opcode(),
            rs: inst.rs(),
            rt: inst.rt(),
            rd: inst.rd(),
            shamt: inst.shamt(),
            funct: inst.funct(),
        },
        Layout::Immediate => Fields::Immediate {
            opcode: inst.opcode(),
            rs: inst.rs(),
            rt: inst.rt(),
            imm: inst.imm(),
        },
        Layout::Jump => Fields::Jump {
            opcode: inst.opcode(),
            target: inst.target(),
        },
    }
}

/// Two's-complement reading of a 16-bit immediate, in `-32768..=32767`.
#[inline(always)]
pub fn sign_extend16(imm: u16) -> i32 {
    imm as i16 as i32
}
