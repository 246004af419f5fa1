use crate::common::constants::MEM_TEXT_BEGIN;
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::stages;
use crate::isa::disassemble;
use crate::soc::Memory;
use crate::stats::SimStats;

pub struct Cpu {
    pub current: ArchState,
    pub next: ArchState,
    pub mem: Memory,

    pub if_id: Option<IfIdEntry>,
    pub id_ex: Option<IdExEntry>,
    pub ex_mem: Option<ExMemEntry>,
    pub mem_wb: Option<MemWbEntry>,

    pub forwarding: bool,
    pub run: bool,
    pub stats: SimStats,
    pub program_size: usize,

    // Raised by ID for the remainder of the cycle; IF consumes it.
    pub stall_fetch: bool,
    // Set once a SYSCALL has been fetched; suppresses further fetches.
    pub fetch_stopped: bool,
}

impl Cpu {
    pub fn new(mem: Memory, config: &Config) -> Self {
        Self {
            current: ArchState::default(),
            next: ArchState::default(),
            mem,
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            forwarding: config.general.forwarding,
            run: true,
            stats: SimStats::default(),
            program_size: 0,
            stall_fetch: false,
            fetch_stopped: false,
        }
    }

    /// Executes one cycle: the five stages in reverse order, then the
    /// atomic state commit.
    pub fn cycle(&mut self) {
        self.next = self.current;
        self.stall_fetch = false;

        stages::write_back::wb_stage(self);
        stages::memory_access::mem_stage(self);
        stages::execute::execute_stage(self);
        stages::decode::decode_stage(self);
        stages::fetch::fetch_stage(self);

        self.current = self.next;
        self.stats.cycles += 1;
    }

    /// Runs at most `n` cycles, stopping early when the run flag clears.
    pub fn run_cycles(&mut self, n: u64) {
        for _ in 0..n {
            if !self.run {
                break;
            }
            self.cycle();
        }
    }

    /// Runs until a SYSCALL with R2 == 10 retires.
    pub fn run_to_completion(&mut self) {
        while self.run {
            self.cycle();
        }
    }

    /// Register read through the write view: values retired by WB earlier
    /// in the current cycle are already visible, like a register file
    /// written in the first half of a cycle and read in the second.
    pub fn read_reg(&self, idx: usize) -> u32 {
        self.next.regs[idx]
    }

    /// Debug poke: writes a register in both snapshots.
    pub fn set_reg(&mut self, idx: usize, value: u32) {
        self.current.regs[idx] = value;
        self.next.regs[idx] = value;
    }

    /// Debug poke: writes HI in both snapshots.
    pub fn set_hi(&mut self, value: u32) {
        self.current.hi = value;
        self.next.hi = value;
    }

    /// Debug poke: writes LO in both snapshots.
    pub fn set_lo(&mut self, value: u32) {
        self.current.lo = value;
        self.next.lo = value;
    }

    /// Clears registers, counters, latches, and memory. The caller reloads
    /// the program afterwards; the forwarding setting is kept.
    pub fn reset(&mut self) {
        self.current = ArchState::default();
        self.next = ArchState::default();
        self.if_id = None;
        self.id_ex = None;
        self.ex_mem = None;
        self.mem_wb = None;
        self.run = true;
        self.stats = SimStats::default();
        self.stall_fetch = false;
        self.fetch_stopped = false;
        self.mem.reset();
    }

    pub fn dump_registers(&self) {
        println!("-------------------------------------");
        println!("Dumping Register Content");
        println!("-------------------------------------");
        println!("# Instructions Executed : {}", self.stats.instructions_retired);
        println!("# Cycles Executed       : {}", self.stats.cycles);
        println!("PC : {:#010x}", self.current.pc);
        println!("-------------------------------------");
        println!("[Register]      [Value]");
        println!("-------------------------------------");
        for (i, value) in self.current.regs.iter().enumerate() {
            println!("[R{:<2}] : {:#010x}", i, value);
        }
        println!("-------------------------------------");
        println!("[HI]  : {:#010x}", self.current.hi);
        println!("[LO]  : {:#010x}", self.current.lo);
        println!("-------------------------------------");
    }

    pub fn dump_memory(&self, start: u32, stop: u32) {
        println!("-------------------------------------------------------------");
        println!("Memory content [{:#010x}..{:#010x}] :", start, stop);
        println!("-------------------------------------------------------------");
        println!("        [Address]       [Value]");
        let mut addr = start;
        while addr <= stop {
            println!("        {:#010x}      {:#010x}", addr, self.mem.read32(addr));
            match addr.checked_add(4) {
                Some(next) => addr = next,
                None => break,
            }
        }
        println!();
    }

    pub fn show_pipeline(&self) {
        println!("Current PC         {:#010x}", self.current.pc);

        match &self.if_id {
            Some(f) => {
                println!("IF/ID.IR           {:#010x}  {}", f.ir, disassemble(f.ir));
                println!("IF/ID.PC           {:#010x}", f.pc);
            }
            None => println!("IF/ID              <bubble>"),
        }
        println!();

        match &self.id_ex {
            Some(d) => {
                println!(
                    "ID/EX.IR           {:#010x}  {}",
                    d.inst.word,
                    disassemble(d.inst.word)
                );
                println!("ID/EX.A            {:#010x}", d.a);
                println!("ID/EX.B            {:#010x}", d.b);
                println!("ID/EX.imm          {:#010x}", d.inst.imm);
            }
            None => println!("ID/EX              <bubble>"),
        }
        println!();

        match &self.ex_mem {
            Some(e) => {
                println!(
                    "EX/MEM.IR          {:#010x}  {}",
                    e.inst.word,
                    disassemble(e.inst.word)
                );
                println!("EX/MEM.ALUOutput   {:#010x}", e.alu);
                println!("EX/MEM.ALUOutput2  {:#010x}", e.alu2);
                println!("EX/MEM.B           {:#010x}", e.store_data);
            }
            None => println!("EX/MEM             <bubble>"),
        }
        println!();

        match &self.mem_wb {
            Some(w) => {
                println!(
                    "MEM/WB.IR          {:#010x}  {}",
                    w.inst.word,
                    disassemble(w.inst.word)
                );
                println!("MEM/WB.ALUOutput   {:#010x}", w.alu);
                println!("MEM/WB.ALUOutput2  {:#010x}", w.alu2);
                println!("MEM/WB.LMD         {:#010x}", w.lmd);
            }
            None => println!("MEM/WB             <bubble>"),
        }
    }

    pub fn print_program(&self) {
        for i in 0..self.program_size {
            let addr = MEM_TEXT_BEGIN + (i as u32) * 4;
            println!("[{:#010x}]      {}", addr, disassemble(self.mem.read32(addr)));
        }
    }
}
