//! MIPS I instruction decoder.
//!
//! Turns 32-bit instruction words into `mnemonic operands` text and builds
//! numbered listings from raw big-endian binaries.

pub mod common;
pub mod config;
pub mod isa;
pub mod listing;
pub mod loader;

pub use isa::decoder::{Decoded, decode, disassemble};
