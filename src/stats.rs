//! Simulation statistics collection and reporting.
//!
//! Tracks cycles, retired instructions, and data-hazard stalls. Bubbles
//! never count as retired instructions; a data stall is counted once per
//! injected bubble.

/// Counters accumulated over a simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStats {
    /// Cycles executed since reset.
    pub cycles: u64,
    /// Instructions retired by the WB stage.
    pub instructions_retired: u64,
    /// Bubbles injected for data hazards (stalls and load-use).
    pub stalls_data: u64,
}

impl SimStats {
    /// Prints a summary of the counters.
    pub fn print(&self) {
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let cpi = self.cycles as f64 / instr as f64;

        println!("----------------------------------------");
        println!("sim_cycles          {}", self.cycles);
        println!("sim_insts           {}", self.instructions_retired);
        println!("sim_cpi             {:.4}", cpi);
        println!("stalls.data         {}", self.stalls_data);
        println!("----------------------------------------");
    }
}
