use tracing::trace;

use crate::core::pipeline::ExMemEntry;
use crate::core::units::Alu;
use crate::core::Cpu;

pub fn execute_stage(cpu: &mut Cpu) {
    let Some(issued) = cpu.id_ex else {
        cpu.ex_mem = None;
        return;
    };

    let result = Alu::execute(&issued.inst, issued.a, issued.b, issued.hi, issued.lo);

    trace!(
        "EX  pc={:#010x} {:?} alu={:#x}",
        issued.pc,
        issued.inst.op,
        result.alu
    );

    cpu.ex_mem = Some(ExMemEntry {
        pc: issued.pc,
        inst: issued.inst,
        alu: result.alu,
        alu2: result.alu2,
        store_data: issued.b,
        hilo_write: result.hilo_write,
        syscall: issued.syscall,
    });
}
