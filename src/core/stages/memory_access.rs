use tracing::trace;

use crate::core::pipeline::MemWbEntry;
use crate::core::Cpu;
use crate::isa::Op;

pub fn mem_stage(cpu: &mut Cpu) {
    let Some(ex) = cpu.ex_mem else {
        cpu.mem_wb = None;
        return;
    };

    let mut lmd = 0;

    match ex.inst.op {
        // LB/LH take the top of the fetched word. Architecturally the lane
        // would be selected by the low address bits, but top-extraction is
        // the defined semantics of this simulator.
        Op::Lb => lmd = cpu.mem.read32(ex.alu) >> 24,
        Op::Lh => lmd = cpu.mem.read32(ex.alu) >> 16,
        Op::Lw => lmd = cpu.mem.read32(ex.alu),

        // Sub-word stores are a read-modify-write of the containing
        // aligned word, replacing only the addressed little-endian lane.
        Op::Sb => {
            let base = ex.alu & !3;
            let shift = (ex.alu & 3) * 8;
            let old = cpu.mem.read32(base);
            let word = (old & !(0xFF << shift)) | ((ex.store_data & 0xFF) << shift);
            cpu.mem.write32(base, word);
        }
        Op::Sh => {
            let base = ex.alu & !3;
            let shift = (ex.alu & 2) * 8;
            let old = cpu.mem.read32(base);
            let word = (old & !(0xFFFF << shift)) | ((ex.store_data & 0xFFFF) << shift);
            cpu.mem.write32(base, word);
        }
        Op::Sw => cpu.mem.write32(ex.alu, ex.store_data),

        _ => {}
    }

    if ex.inst.op.is_load() {
        trace!("MEM pc={:#010x} load addr={:#010x} lmd={:#x}", ex.pc, ex.alu, lmd);
    } else if ex.inst.op.is_store() {
        trace!(
            "MEM pc={:#010x} store addr={:#010x} data={:#x}",
            ex.pc,
            ex.alu,
            ex.store_data
        );
    } else {
        trace!("MEM pc={:#010x}", ex.pc);
    }

    cpu.mem_wb = Some(MemWbEntry {
        pc: ex.pc,
        inst: ex.inst,
        alu: ex.alu,
        alu2: ex.alu2,
        lmd,
        hilo_write: ex.hilo_write,
        syscall: ex.syscall,
    });
}
