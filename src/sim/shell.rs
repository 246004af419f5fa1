//! Interactive debug shell.
//!
//! Commands are dispatched on their first letter, case-insensitively, with
//! the second letter disambiguating `s`/`sh` and `r`/`rd`/`re`. Malformed
//! input prints `Invalid Command.` and the shell continues; `q` or EOF
//! ends the session.

use std::io::{self, BufRead, Write};

use crate::common::SimError;
use crate::core::Cpu;
use crate::sim::loader;

/// Prints the command menu.
pub fn help() {
    println!("------------------------------------------------------------------");
    println!();
    println!("s                  -- simulate program to completion");
    println!("sh                 -- show current pipeline latch content");
    println!("r <n>              -- simulate program for <n> cycles");
    println!("rd                 -- dump registers, PC, and counters");
    println!("re                 -- reset simulator and re-load the program");
    println!("m <start> <stop>   -- dump memory from <start> to <stop> (hex)");
    println!("i <reg> <val>      -- set GPR <reg> to <val>");
    println!("h <val>            -- set the HI register to <val>");
    println!("l <val>            -- set the LO register to <val>");
    println!("p                  -- print the program loaded into memory");
    println!("f <0|1>            -- turn forwarding off (0) or on (1)");
    println!("?                  -- display this menu");
    println!("q                  -- exit the simulator");
    println!();
    println!("------------------------------------------------------------------");
}

/// Runs the shell loop until `q` or EOF.
pub fn run_shell(cpu: &mut Cpu, program_path: &str) -> Result<(), SimError> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("MIPS-SIM> ");
        io::stdout().flush().ok();

        line.clear();
        let Ok(n) = stdin.lock().read_line(&mut line) else {
            break;
        };
        if n == 0 {
            break;
        }

        match dispatch(cpu, program_path, &line)? {
            Action::Continue => {}
            Action::Quit => break,
        }
    }

    Ok(())
}

enum Action {
    Continue,
    Quit,
}

fn dispatch(cpu: &mut Cpu, program_path: &str, line: &str) -> Result<Action, SimError> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(Action::Continue);
    };
    let cmd = cmd.to_ascii_lowercase();

    match cmd.as_bytes()[0] {
        b's' => {
            if cmd.as_bytes().get(1) == Some(&b'h') {
                cpu.show_pipeline();
            } else {
                simulate_all(cpu);
            }
        }
        b'r' => match cmd.as_bytes().get(1) {
            Some(&b'd') => cpu.dump_registers(),
            Some(&b'e') => {
                cpu.reset();
                cpu.program_size = loader::load_program(program_path, &mut cpu.mem)?;
                println!("Simulator reset; {} words re-loaded.", cpu.program_size);
            }
            _ => match parts.next().and_then(parse_value) {
                Some(cycles) => simulate_cycles(cpu, u64::from(cycles)),
                None => invalid(),
            },
        },
        b'm' => {
            let start = parts.next().and_then(parse_hex);
            let stop = parts.next().and_then(parse_hex);
            match (start, stop) {
                (Some(start), Some(stop)) => cpu.dump_memory(start, stop),
                _ => invalid(),
            }
        }
        b'i' => {
            let reg = parts.next().and_then(|s| s.parse::<usize>().ok());
            let value = parts.next().and_then(parse_value);
            match (reg, value) {
                (Some(reg), Some(value)) if reg < 32 => cpu.set_reg(reg, value),
                _ => invalid(),
            }
        }
        b'h' => match parts.next().and_then(parse_value) {
            Some(value) => cpu.set_hi(value),
            None => invalid(),
        },
        b'l' => match parts.next().and_then(parse_value) {
            Some(value) => cpu.set_lo(value),
            None => invalid(),
        },
        b'p' => cpu.print_program(),
        b'f' => match parts.next() {
            Some("0") => {
                cpu.forwarding = false;
                println!("Forwarding OFF");
            }
            Some("1") => {
                cpu.forwarding = true;
                println!("Forwarding ON");
            }
            _ => invalid(),
        },
        b'?' => help(),
        b'q' => {
            println!("**************************");
            println!("Exiting MIPS-SIM! Good Bye...");
            println!("**************************");
            cpu.stats.print();
            return Ok(Action::Quit);
        }
        _ => invalid(),
    }

    Ok(Action::Continue)
}

fn simulate_all(cpu: &mut Cpu) {
    if !cpu.run {
        println!("Simulation Stopped.");
        println!();
        return;
    }
    println!("Simulation Started...");
    println!();
    cpu.run_to_completion();
    println!("Simulation Finished.");
    println!();
}

fn simulate_cycles(cpu: &mut Cpu, cycles: u64) {
    if !cpu.run {
        println!("Simulation Stopped.");
        println!();
        return;
    }
    println!("Running simulator for {} cycles...", cycles);
    println!();
    cpu.run_cycles(cycles);
    if !cpu.run {
        println!("Simulation Stopped.");
        println!();
    }
}

fn invalid() {
    println!("Invalid Command.");
}

/// Parses a decimal or `0x`-prefixed hex value; a leading `-` is accepted
/// and wrapped to the 32-bit two's-complement pattern.
fn parse_value(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    if s.starts_with('-') {
        return s.parse::<i64>().ok().map(|v| v as u32);
    }
    s.parse::<u32>().ok()
}

/// Parses a bare or `0x`-prefixed hex address.
fn parse_hex(s: &str) -> Option<u32> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).ok()
}
