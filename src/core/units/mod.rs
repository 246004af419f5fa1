//! Execution units.

/// The integer ALU.
pub mod alu;

pub use alu::{Alu, AluResult};
