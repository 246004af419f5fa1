use tracing::trace;

use crate::core::pipeline::IfIdEntry;
use crate::core::Cpu;
use crate::isa;

pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.stall_fetch {
        trace!("IF  pc={:#010x} stalled", cpu.current.pc);
        return;
    }

    // Once a SYSCALL has been fetched nothing follows it; the latch drains
    // to bubbles while the syscall travels to WB.
    if cpu.fetch_stopped {
        cpu.if_id = None;
        return;
    }

    let pc = cpu.current.pc;
    let ir = cpu.mem.read32(pc);

    let syscall = if isa::is_syscall(ir) {
        cpu.fetch_stopped = true;
        Some(cpu.read_reg(2))
    } else {
        None
    };

    trace!("IF  pc={:#010x} ir={:#010x}", pc, ir);

    cpu.if_id = Some(IfIdEntry { pc, ir, syscall });
    cpu.next.pc = pc.wrapping_add(4);
}
