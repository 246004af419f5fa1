//! Data hazard detection and forwarding.
//!
//! The unit runs once per instruction at decode, after the downstream
//! stages of the same cycle have advanced their latches. At that point the
//! instruction one ahead sits in EX/MEM and the instruction two ahead sits
//! in MEM/WB, so both Read-After-Write distances are visible from the two
//! latch references alone. The verdict is returned to the decode stage as
//! an explicit [`Issue`]; no forwarding state outlives the call.
//!
//! Producers three or more instructions ahead have already retired, and
//! their values are picked up through the write-through register read the
//! decode stage performs. HI and LO are not forwarded: a MULT or DIV must
//! be separated from a consuming MFHI/MFLO by at least two instructions.

use crate::core::arch::ArchState;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::isa::Decoded;

/// Verdict of the hazard unit for the instruction being decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Issue {
    /// A hazard cannot be resolved this cycle: inject a bubble into ID/EX
    /// and stall IF.
    Stall,
    /// Issue with these operand values (register file or forwarded).
    Operands {
        /// Resolved rs-slot operand.
        a: u32,
        /// Resolved rt-slot operand.
        b: u32,
    },
}

/// Resolves the operands of `inst` against the in-flight producers.
///
/// `regs` is the write-through register view: values retired by WB earlier
/// in the same cycle are already visible. With forwarding enabled the most
/// recent producer wins (EX/MEM over MEM/WB); a load in EX/MEM whose
/// destination matches a used source is the one hazard forwarding cannot
/// hide, costing exactly one bubble. With forwarding disabled any matching
/// producer in either latch stalls issue until it has retired.
pub fn resolve(
    inst: &Decoded,
    ex_mem: Option<&ExMemEntry>,
    mem_wb: Option<&MemWbEntry>,
    forwarding: bool,
    regs: &ArchState,
) -> Issue {
    let (src_a, src_b) = inst.source_gprs();

    let matches_source = |dst: usize| -> bool {
        dst != 0 && (src_a == Some(dst) || src_b == Some(dst))
    };

    if forwarding {
        // Load-use: the loaded value does not exist until after MEM.
        if let Some(mem) = ex_mem {
            if mem.inst.op.is_load() {
                if let Some(dst) = mem.inst.dest_gpr() {
                    if matches_source(dst) {
                        return Issue::Stall;
                    }
                }
            }
        }

        let forward = |src: Option<usize>, slot: usize| -> u32 {
            let fallback = regs.regs[slot];
            let Some(s) = src else { return fallback };
            if s == 0 {
                return fallback;
            }
            if let Some(mem) = ex_mem {
                if !mem.inst.op.is_load() && mem.inst.dest_gpr() == Some(s) {
                    return mem.alu;
                }
            }
            if let Some(wb) = mem_wb {
                if wb.inst.dest_gpr() == Some(s) {
                    return if wb.inst.op.is_load() { wb.lmd } else { wb.alu };
                }
            }
            fallback
        };

        Issue::Operands {
            a: forward(src_a, inst.rs),
            b: forward(src_b, inst.rt),
        }
    } else {
        let blocked_by = |dst: Option<usize>| dst.is_some_and(matches_source);

        if blocked_by(ex_mem.and_then(|e| e.inst.dest_gpr()))
            || blocked_by(mem_wb.and_then(|e| e.inst.dest_gpr()))
        {
            return Issue::Stall;
        }

        Issue::Operands {
            a: regs.regs[inst.rs],
            b: regs.regs[inst.rt],
        }
    }
}
