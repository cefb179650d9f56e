//! Register display names.

pub const NUM_REGS: usize = 32;

pub const REG_NAMES: [&str; NUM_REGS] = [
    "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12", "$13",
    "$14", "$15", "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24", "$25", "$26",
    "$27", "$28", "$29", "$30", "$31",
];

/// Display name for a 5-bit register index.
///
/// Indices come out of a 5-bit field, so only the low five bits are used.
#[inline(always)]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES[idx & (NUM_REGS - 1)]
}
