//! Architectural register state.
//!
//! One snapshot of everything the programmer can observe between cycles:
//! the 32 general-purpose registers, HI, LO, and the program counter. The
//! pipeline keeps two snapshots, `current` and `next`; stages write only
//! `next`, and `current <- next` commits atomically at the end of every
//! cycle, reproducing edge-triggered pipeline flip-flops.
//!
//! R0 is conventionally zero but writes to it are not suppressed here; the
//! hazard unit simply never forwards or stalls on an R0 destination. A
//! correct MIPS program never relies on R0 holding anything else.

use crate::common::constants::{MEM_TEXT_BEGIN, MIPS_REGS};

/// One architectural state snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchState {
    /// General-purpose registers R0..R31.
    pub regs: [u32; MIPS_REGS],
    /// High word of multiply/divide results.
    pub hi: u32,
    /// Low word of multiply/divide results.
    pub lo: u32,
    /// Program counter.
    pub pc: u32,
}

impl Default for ArchState {
    fn default() -> Self {
        Self {
            regs: [0; MIPS_REGS],
            hi: 0,
            lo: 0,
            pc: MEM_TEXT_BEGIN,
        }
    }
}
