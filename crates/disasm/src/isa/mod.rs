pub mod abi;
pub mod decoder;
pub mod funct;
pub mod instruction;
pub mod opcodes;
