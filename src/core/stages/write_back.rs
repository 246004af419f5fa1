use tracing::{debug, trace};

use crate::common::constants::SYSCALL_EXIT;
use crate::core::Cpu;
use crate::isa::Op;

pub fn wb_stage(cpu: &mut Cpu) {
    let Some(wb) = cpu.mem_wb else {
        trace!("WB  bubble");
        return;
    };

    cpu.stats.instructions_retired += 1;
    debug!("WB  pc={:#010x} {:?}", wb.pc, wb.inst.op);

    match wb.inst.op {
        Op::Syscall => {
            if wb.syscall == Some(SYSCALL_EXIT) {
                cpu.run = false;
            }
        }
        Op::Mthi => cpu.next.hi = wb.alu,
        Op::Mtlo => cpu.next.lo = wb.alu,
        Op::Mult | Op::Multu | Op::Div | Op::Divu => {
            if wb.hilo_write {
                cpu.next.hi = wb.alu;
                cpu.next.lo = wb.alu2;
            }
        }
        _ => {
            if let Some(dst) = wb.inst.dest_gpr() {
                let value = if wb.inst.op.is_load() { wb.lmd } else { wb.alu };
                cpu.next.regs[dst] = value;
            }
        }
    }
}
