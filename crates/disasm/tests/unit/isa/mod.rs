//! # ISA Unit Tests
//!
//! Field extraction, opcode and function-code tables, register names and
//! the decoder's operand rendering.

/// Tests for mask/shift field extraction and sign extension.
pub mod fields;



/// Property tests over the whole 32-bit word space.
pub mod properties;
