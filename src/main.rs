//! MIPS32 Pipeline Simulator CLI.
//!
//! The main executable. It loads the configuration and the program file,
//! then drops into the interactive shell, which drives the pipeline
//! cycle by cycle.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mips_emulator::config::Config;
use mips_emulator::core::Cpu;
use mips_emulator::sim::{loader, shell};
use mips_emulator::soc::Memory;

/// Command-line arguments for the MIPS pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS32 Cycle-Accurate Pipeline Simulator")]
struct Args {
    /// Program file: one 32-bit hex instruction per line.
    program: Option<String>,

    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,
}

fn main() {
    let args = Args::parse();

    let Some(program) = args.program else {
        eprintln!("Error: You should provide an input file.");
        eprintln!("Usage: mips-emulator <program file>");
        process::exit(1);
    };

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let default_filter = if config.general.trace_instructions {
        "mips_emulator=trace"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut cpu = Cpu::new(Memory::new(), &config);

    match loader::load_program(&program, &mut cpu.mem) {
        Ok(words) => {
            cpu.program_size = words;
            println!("Program loaded into memory.");
            println!("{} words written into memory.", words);
            println!();
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    println!("**************************");
    println!("Welcome to MIPS-SIM...");
    println!("**************************");
    println!();
    shell::help();

    if let Err(e) = shell::run_shell(&mut cpu, &program) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
