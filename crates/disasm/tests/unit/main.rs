//! Unit tests for the decoder library.

/// Instruction-set tests: field extraction, lookup tables and decoding.
mod isa;
