use std::fmt;

use log::{debug, trace, warn};

use super::abi::reg_name;
use super::instruction::{Fields, InstructionBits, Layout, extract, sign_extend16};
use super::{funct, opcodes};

/// Text emitted for any encoding absent from the opcode or function-code tables.
pub const UNKNOWN: &str = "unknown instruction";

/// Operand rendering rule chosen for a recognised instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandLayout {
    /// `rd, rt, shamt`
    Shift,
    /// `rd, rt, rs`
    VariableShift,
    /// `rs`
    JumpRegister,
    /// `rd, rs`
    JumpAndLinkRegister,
    NoOperands,
    /// `rd`
    MoveFrom,
    /// `rs`
    MoveTo,
    /// `rs, rt`; the result lands in HI/LO.
    MulDiv,
    /// `rd, rs, rt`
    ThreeRegister,
    /// Unsigned 26-bit target.
    Jump,
    /// `rt, imm`
    LoadUpper,
    /// `rt, offset(rs)`
    Memory,
    /// `rs, rt, offset`
    Branch,
    /// `rt, rs, imm`
    Immediate,
}

impl OperandLayout {
    /// Encoding layout the operands are read from.
    pub fn format(self) -> Layout {
        use OperandLayout::*;
        match self {
            Shift | VariableShift | JumpRegister | JumpAndLinkRegister | NoOperands | MoveFrom
            | MoveTo | MulDiv | ThreeRegister => Layout::Register,
            Jump => Layout::Jump,
            LoadUpper | Memory | Branch | Immediate => Layout::Immediate,
        }
    }
}

/// Looks up the mnemonic and operand rule for `inst`.
///
/// Returns `None` for every unrecognised encoding, including opcode 1 whose
/// table entry has no operand rule.
pub fn classify(inst: u32) -> Option<(&'static str, OperandLayout)> {
    match inst.opcode() {
        opcodes::OP_SPECIAL => {
            let code = inst.funct();
            let name = funct::mnemonic(code)?;
            let layout = match code {
                funct::SLL | funct::SRL | funct::SRA => OperandLayout::Shift,
                funct::SLLV | funct::SRLV | funct::SRAV => OperandLayout::VariableShift,
                funct::JR => OperandLayout::JumpRegister,
                funct::JALR => OperandLayout::JumpAndLinkRegister,
                funct::SYSCALL => OperandLayout::NoOperands,
                funct::MFHI | funct::MFLO => OperandLayout::MoveFrom,
                funct::MTHI | funct::MTLO => OperandLayout::MoveTo,
                funct::MULT | funct::MULTU | funct::DIV | funct::DIVU => OperandLayout::MulDiv,
                _ => OperandLayout::ThreeRegister,
            };
            Some((name, layout))
        }
        opcodes::OP_REGIMM => None,
        op => {
            let name = opcodes::mnemonic(op)?;
            let layout = match op {
                opcodes::OP_J | opcodes::OP_JAL => OperandLayout::Jump,
                opcodes::OP_LUI => OperandLayout::LoadUpper,
                opcodes::OP_LB
                | opcodes::OP_LH
                | opcodes::OP_LW
                | opcodes::OP_LBU
                | opcodes::OP_LHU
                | opcodes::OP_SB
                | opcodes::OP_SH
                | opcodes::OP_SW => OperandLayout::Memory,
                opcodes::OP_BEQ | opcodes::OP_BNE => OperandLayout::Branch,
                _ => OperandLayout::Immediate,
            };
            Some((name, layout))
        }
    }
}

/// A decoded word: a mnemonic with its rendered operands, or nothing known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    Instruction {
        mnemonic: &'static str,
        operands: Vec<String>,
    },
    Unknown,
}

impl Decoded {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Decoded::Unknown)
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Unknown => f.write_str(UNKNOWN),
            Decoded::Instruction { mnemonic, operands } => {
                f.write_str(mnemonic)?;
                if !operands.is_empty() {
                    write!(f, " {}", operands.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

pub fn decode(inst: u32) -> Decoded {
    let Some((mnemonic, layout)) = classify(inst) else {
        if inst.opcode() == opcodes::OP_SPECIAL {
            debug!(
                "unrecognised function code {} in {:#010x}",
                inst.funct(),
                inst
            );
        } else {
            debug!("unrecognised opcode {} in {:#010x}", inst.opcode(), inst);
        }
        return Decoded::Unknown;
    };

    trace!("{:#010x} -> {} ({:?})", inst, mnemonic, layout);

    Decoded::Instruction {
        mnemonic,
        operands: render_operands(layout, extract(inst, layout.format())),
    }
}

/// Decodes `inst` straight to its listing text. Never empty.
pub fn disassemble(inst: u32) -> String {
    decode(inst).to_string()
}

fn render_operands(layout: OperandLayout, fields: Fields) -> Vec<String> {
    use OperandLayout::*;
    let reg = |idx: usize| reg_name(idx).to_string();

    match (layout, fields) {
        (Shift, Fields::Register { rt, rd, shamt, .. }) => {
            vec![reg(rd), reg(rt), shamt.to_string()]
        }
        (VariableShift, Fields::Register { rs, rt, rd, .. }) => vec![reg(rd), reg(rt), reg(rs)],
        (JumpRegister | MoveTo, Fields::Register { rs, .. }) => vec![reg(rs)],
        (JumpAndLinkRegister, Fields::Register { rs, rd, .. }) => vec![reg(rd), reg(rs)],
        (NoOperands, Fields::Register { .. }) => Vec::new(),
        (MoveFrom, Fields::Register { rd, .. }) => vec![reg(rd)],
        (MulDiv, Fields::Register { rs, rt, .. }) => vec![reg(rs), reg(rt)],
        (ThreeRegister, Fields::Register { rs, rt, rd, .. }) => vec![reg(rd), reg(rs), reg(rt)],
        (Jump, Fields::Jump { target, .. }) => vec![target.to_string()],
        (LoadUpper, Fields::Immediate { rt, imm, .. }) => {
            vec![reg(rt), sign_extend16(imm).to_string()]
        }
        (Memory, Fields::Immediate { rs, rt, imm, .. }) => {
            vec![reg(rt), format!("{}({})", sign_extend16(imm), reg_name(rs))]
        }
        (Branch, Fields::Immediate { rs, rt, imm, .. }) => {
            vec![reg(rs), reg(rt), sign_extend16(imm).to_string()]
        }
        (Immediate, Fields::Immediate { rs, rt, imm, .. }) => {
            vec![reg(rt), reg(rs), sign_extend16(imm).to_string()]
        }
        (layout, fields) => {
            warn!("operand layout {:?} cannot render {:?}", layout, fields);
            Vec::new()
        }
    }
}
