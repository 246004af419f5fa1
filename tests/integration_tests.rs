//! End-to-end pipeline scenarios.
//!
//! Each test loads a short program into the text region, pokes registers
//! the way the shell's `i` command would, and runs to completion. Programs
//! halt by retiring SYSCALL with R2 == 10; R2 is preset before running and
//! sampled when the SYSCALL is fetched.

use mips_emulator::common::constants::{MEM_DATA_BEGIN, MEM_TEXT_BEGIN, MEM_TEXT_END};
use mips_emulator::config::Config;
use mips_emulator::core::Cpu;
use mips_emulator::soc::Memory;

const SYSCALL: u32 = 0x0000_000C;

fn make_cpu(forwarding: bool) -> Cpu {
    let mut cpu = Cpu::new(Memory::new(), &Config::default());
    cpu.forwarding = forwarding;
    cpu
}

fn load_words(cpu: &mut Cpu, words: &[u32]) {
    for (i, word) in words.iter().enumerate() {
        cpu.mem.write32(MEM_TEXT_BEGIN + (i as u32) * 4, *word);
    }
    cpu.program_size = words.len();
}

/// Runs with a generous cycle budget and asserts the program halted.
fn run_to_halt(cpu: &mut Cpu) {
    cpu.run_cycles(500);
    assert!(!cpu.run, "program did not halt");
}

/// A single ADDI retires, then SYSCALL stops the machine: 2 instructions
/// in 6 cycles.
#[test]
fn test_single_addi_retirement() {
    let mut cpu = make_cpu(false);
    load_words(&mut cpu, &[0x2001_0005, SYSCALL]); // ADDI $1, $0, 5
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[1], 5);
    assert_eq!(cpu.stats.instructions_retired, 2);
    assert_eq!(cpu.stats.cycles, 6);
}

/// A dependent pair without forwarding costs two bubbles.
#[test]
fn test_raw_without_forwarding() {
    let mut cpu = make_cpu(false);
    // ADDI $1, $0, 1 ; ADDI $2, $1, 1 ; SYSCALL
    load_words(&mut cpu, &[0x2001_0001, 0x2022_0001, SYSCALL]);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[2], 2);
    assert_eq!(cpu.stats.stalls_data, 2);
    assert_eq!(cpu.stats.cycles, 9, "7-cycle fill plus two bubbles");
}

/// The same pair with forwarding costs nothing.
#[test]
fn test_raw_with_forwarding() {
    let mut cpu = make_cpu(true);
    load_words(&mut cpu, &[0x2001_0001, 0x2022_0001, SYSCALL]);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[2], 2);
    assert_eq!(cpu.stats.stalls_data, 0);
    assert_eq!(cpu.stats.cycles, 7);
}

/// Forwarding never costs more cycles than stalling.
#[test]
fn test_forwarding_not_slower() {
    let program = [0x2001_0001, 0x2022_0001, SYSCALL];

    let mut stalled = make_cpu(false);
    load_words(&mut stalled, &program);
    stalled.set_reg(2, 10);
    run_to_halt(&mut stalled);

    let mut forwarded = make_cpu(true);
    load_words(&mut forwarded, &program);
    forwarded.set_reg(2, 10);
    run_to_halt(&mut forwarded);

    assert!(forwarded.stats.cycles <= stalled.stats.cycles);
    assert!(forwarded.stats.stalls_data <= stalled.stats.stalls_data);
    assert_eq!(forwarded.current.regs[2], stalled.current.regs[2]);
}

/// A load-use hazard costs exactly one bubble even with forwarding.
#[test]
fn test_load_use_under_forwarding() {
    let mut cpu = Cpu::new(
        Memory::with_regions(&[(0x0, 0xFFF), (MEM_TEXT_BEGIN, MEM_TEXT_END)]),
        &Config::default(),
    );
    cpu.forwarding = true;
    cpu.mem.write32(0, 0x0000_0007);
    // LW $1, 0($0) ; ADD $2, $1, $1 ; SYSCALL
    load_words(&mut cpu, &[0x8C01_0000, 0x0021_1020, SYSCALL]);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[1], 7);
    assert_eq!(cpu.current.regs[2], 0x0E);
    assert_eq!(cpu.stats.stalls_data, 1);
    assert_eq!(cpu.stats.cycles, 8, "7-cycle fill plus one bubble");
}

/// MULT of -1 by 2 retires the signed 64-bit product into HI and LO.
#[test]
fn test_mult_retires_hi_lo() {
    let mut cpu = make_cpu(true);
    // ADDI $1, $0, -1 ; ADDI $2, $0, 2 ; MULT $1, $2 ; SYSCALL
    load_words(&mut cpu, &[0x2001_FFFF, 0x2002_0002, 0x0022_0018, SYSCALL]);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.hi, 0xFFFF_FFFF);
    assert_eq!(cpu.current.lo, 0xFFFF_FFFE);
    assert_eq!(cpu.current.regs[2], 2, "the program's own R2 write retires");
}

/// MFHI/MFLO read the retired product two instructions after MULT.
#[test]
fn test_mfhi_mflo_after_separation() {
    let mut cpu = make_cpu(true);
    // ADDI $1, $0, -1 ; ADDI $4, $0, 2 ; MULT $1, $4 ;
    // ADDI $5, $0, 0 ; ADDI $6, $0, 0 ; MFHI $3 ; MFLO $7 ; SYSCALL
    load_words(
        &mut cpu,
        &[
            0x2001_FFFF,
            0x2004_0002,
            0x0024_0018,
            0x2005_0000,
            0x2006_0000,
            0x0000_1810,
            0x0000_3812,
            SYSCALL,
        ],
    );
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[3], 0xFFFF_FFFF, "high word of -1 * 2");
    assert_eq!(cpu.current.regs[7], 0xFFFF_FFFE, "low word of -1 * 2");
}

/// SB replaces only the addressed low byte of the containing word.
#[test]
fn test_sb_preserves_neighbors() {
    let mut cpu = make_cpu(false);
    let addr = MEM_DATA_BEGIN;
    cpu.mem.write32(addr, 0xAABB_CCDD);
    // SB $1, 0($0) with R0 poked to the target address.
    load_words(&mut cpu, &[0xA001_0000, SYSCALL]);
    cpu.set_reg(0, addr);
    cpu.set_reg(1, 0x11);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.mem.read32(addr), 0xAABB_CC11);
}

/// SH replaces the addressed halfword lane.
#[test]
fn test_sh_replaces_upper_lane() {
    let mut cpu = make_cpu(false);
    let addr = MEM_DATA_BEGIN;
    cpu.mem.write32(addr, 0xAABB_CCDD);
    // SH $1, 2($0) lands in the upper little-endian lane.
    load_words(&mut cpu, &[0xA401_0002, SYSCALL]);
    cpu.set_reg(0, addr);
    cpu.set_reg(1, 0x1234);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.mem.read32(addr), 0x1234_CCDD);
}

/// LB and LH take the top of the fetched word, per the defined semantics.
#[test]
fn test_lb_lh_top_extraction() {
    let mut cpu = make_cpu(false);
    let addr = MEM_DATA_BEGIN;
    cpu.mem.write32(addr, 0x1122_3344);
    // LB $1, 0($0) ; LH $3, 0($0) ; SYSCALL
    load_words(&mut cpu, &[0x8001_0000, 0x8403_0000, SYSCALL]);
    cpu.set_reg(0, addr);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[1], 0x11);
    assert_eq!(cpu.current.regs[3], 0x1122);
}

/// A hazard-free program of N instructions completes in N + 4 cycles and
/// retires every instruction exactly once.
#[test]
fn test_pipeline_fill_timing() {
    let mut cpu = make_cpu(false);
    load_words(
        &mut cpu,
        &[0x2001_0001, 0x2004_0002, 0x2005_0003, SYSCALL],
    );
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.stats.instructions_retired, 4);
    assert_eq!(cpu.stats.cycles, 8);
    assert_eq!(cpu.stats.stalls_data, 0);
    assert_eq!(cpu.current.regs[1], 1);
    assert_eq!(cpu.current.regs[4], 2);
    assert_eq!(cpu.current.regs[5], 3);
}

/// The committed state equals the write view at every stable point.
#[test]
fn test_commit_atomicity() {
    let mut cpu = make_cpu(false);
    load_words(&mut cpu, &[0x2001_0005, SYSCALL]);
    cpu.set_reg(2, 10);

    for _ in 0..10 {
        cpu.cycle();
        assert_eq!(cpu.current, cpu.next);
    }
}

/// An R0-destination producer neither stalls nor forwards; the write
/// itself still lands, as the architectural contract permits.
#[test]
fn test_r0_producer_is_hazard_free() {
    let mut cpu = make_cpu(false);
    // ADDI $0, $0, 7 ; ADD $3, $0, $0 ; SYSCALL
    load_words(&mut cpu, &[0x2000_0007, 0x0000_1820, SYSCALL]);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.stats.stalls_data, 0, "R0 never raises a hazard");
    assert_eq!(cpu.current.regs[3], 0, "the consumer read R0 before retirement");
    assert_eq!(cpu.current.regs[0], 7, "R0 writes are not suppressed");
    assert_eq!(cpu.stats.cycles, 7);
}

/// Unknown opcodes retire as no-ops without touching state.
#[test]
fn test_unknown_opcode_is_noop() {
    let mut cpu = make_cpu(false);
    load_words(&mut cpu, &[0x0800_0000, SYSCALL]); // J 0x0
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.stats.instructions_retired, 2);
    assert_eq!(cpu.stats.cycles, 6);
    let clean = make_cpu(false).current.regs;
    let mut expected = clean;
    expected[2] = 10;
    assert_eq!(cpu.current.regs, expected);
}

/// Division by zero leaves HI and LO untouched.
#[test]
fn test_div_by_zero_preserves_hilo() {
    let mut cpu = make_cpu(true);
    // ADDI $1, $0, 5 ; DIV $1, $0 ; SYSCALL
    load_words(&mut cpu, &[0x2001_0005, 0x0020_001A, SYSCALL]);
    cpu.set_hi(0x1111);
    cpu.set_lo(0x2222);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.hi, 0x1111);
    assert_eq!(cpu.current.lo, 0x2222);
}

/// The SYSCALL sentinel samples R2 at fetch time: a later in-flight write
/// to R2 does not disturb an exit already fetched.
#[test]
fn test_syscall_sentinel_sampled_at_fetch() {
    let mut cpu = make_cpu(false);
    // ADDI $2, $0, 2 ; SYSCALL -- R2 is 10 when SYSCALL is fetched.
    load_words(&mut cpu, &[0x2002_0002, SYSCALL]);
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.regs[2], 2);
    assert_eq!(cpu.stats.cycles, 6);
}

/// Reset returns the machine to its power-on state with memory cleared.
#[test]
fn test_reset_clears_state() {
    let mut cpu = make_cpu(true);
    load_words(&mut cpu, &[0x2001_0005, SYSCALL]);
    cpu.set_reg(2, 10);
    run_to_halt(&mut cpu);

    cpu.reset();

    assert!(cpu.run);
    assert_eq!(cpu.current.pc, MEM_TEXT_BEGIN);
    assert_eq!(cpu.current.regs, [0; 32]);
    assert_eq!(cpu.stats.cycles, 0);
    assert_eq!(cpu.stats.instructions_retired, 0);
    assert_eq!(cpu.mem.read32(MEM_TEXT_BEGIN), 0, "program memory cleared");
    assert!(cpu.forwarding, "forwarding mode survives reset");
}

/// MTHI and MTLO retire into HI and LO.
#[test]
fn test_mthi_mtlo() {
    let mut cpu = make_cpu(true);
    // ADDI $1, $0, 0x123 ; MTHI $1 ; MTLO $1 ; SYSCALL
    load_words(
        &mut cpu,
        &[0x2001_0123, 0x0020_0011, 0x0020_0013, SYSCALL],
    );
    cpu.set_reg(2, 10);

    run_to_halt(&mut cpu);

    assert_eq!(cpu.current.hi, 0x123);
    assert_eq!(cpu.current.lo, 0x123);
}
