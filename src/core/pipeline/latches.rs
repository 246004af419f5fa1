//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch holds the state of one in-flight instruction between two
//! stages. A latch is modeled as `Option<Entry>`: `None` is a bubble, and
//! every stage propagates a bubble as a no-op. This replaces the
//! all-fields-zero bubble convention of hand-written simulators with a
//! type the compiler checks.

use crate::isa::Decoded;

/// Entry in the IF/ID latch (Fetch to Decode).
///
/// Carries the fetched instruction word and its program counter. When the
/// fetched word is SYSCALL the entry also carries the exit sentinel: the
/// value of R2 as of the fetch cycle. Sampling at fetch time means writes
/// that retire after the fetch do not alter the sentinel.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub ir: u32,
    /// R2 sampled at fetch, for SYSCALL only.
    pub syscall: Option<u32>,
}

/// Entry in the ID/EX latch (Decode to Execute).
///
/// Carries the decoded instruction, the two operand values resolved by the
/// hazard unit (register file or a forwarding path), and snapshots of HI
/// and LO taken at decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction record.
    pub inst: Decoded,
    /// First operand (rs slot), possibly forwarded.
    pub a: u32,
    /// Second operand (rt slot), possibly forwarded.
    pub b: u32,
    /// HI as of decode.
    pub hi: u32,
    /// LO as of decode.
    pub lo: u32,
    /// Exit sentinel carried from IF/ID.
    pub syscall: Option<u32>,
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction record.
    pub inst: Decoded,
    /// ALU output: result, or effective address for loads and stores.
    pub alu: u32,
    /// Second ALU output for the 64-bit producers (MULT/MULTU/DIV/DIVU).
    pub alu2: u32,
    /// Store data carried from the rt operand.
    pub store_data: u32,
    /// Whether a multiply/divide result is valid (false on divide by zero).
    pub hilo_write: bool,
    /// Exit sentinel carried from ID/EX.
    pub syscall: Option<u32>,
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction record.
    pub inst: Decoded,
    /// ALU output carried through MEM.
    pub alu: u32,
    /// Second ALU output for the 64-bit producers.
    pub alu2: u32,
    /// Loaded memory data, for loads.
    pub lmd: u32,
    /// Whether a multiply/divide result is valid.
    pub hilo_write: bool,
    /// Exit sentinel carried from EX/MEM.
    pub syscall: Option<u32>,
}
