//! Instruction Set Architecture definitions.
//!
//! MIPS32 instructions are 32-bit words in two layouts relevant here:
//! R-type (opcode 0x00, operation selected by the function field) and
//! I-type (everything else). Decoding is pure bit slicing; no state is
//! consulted.

/// Instruction field extraction and the decoded instruction record.
pub mod decode;

/// Textual disassembly of instruction words.
pub mod disasm;

/// Numeric opcode and function-field constants.
pub mod opcodes;

pub use decode::{decode, is_syscall, Decoded, Op};
pub use disasm::disassemble;
