use tracing::trace;

use crate::core::pipeline::hazards::{self, Issue};
use crate::core::pipeline::IdExEntry;
use crate::core::Cpu;
use crate::isa;

pub fn decode_stage(cpu: &mut Cpu) {
    let Some(fetched) = cpu.if_id else {
        cpu.id_ex = None;
        return;
    };

    let inst = isa::decode(fetched.ir);

    match hazards::resolve(
        &inst,
        cpu.ex_mem.as_ref(),
        cpu.mem_wb.as_ref(),
        cpu.forwarding,
        &cpu.next,
    ) {
        Issue::Stall => {
            trace!("ID  pc={:#010x} stalled on data hazard", fetched.pc);
            cpu.id_ex = None;
            cpu.stall_fetch = true;
            cpu.stats.stalls_data += 1;
        }
        Issue::Operands { a, b } => {
            trace!(
                "ID  pc={:#010x} {:?} a={:#x} b={:#x}",
                fetched.pc,
                inst.op,
                a,
                b
            );
            cpu.id_ex = Some(IdExEntry {
                pc: fetched.pc,
                inst,
                a,
                b,
                hi: cpu.next.hi,
                lo: cpu.next.lo,
                syscall: fetched.syscall,
            });
            cpu.if_id = None;
        }
    }
}
