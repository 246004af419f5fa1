//! MIPS32 Five-Stage Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate functional simulator for a subset
//! of the MIPS32 integer instruction set running on a classic five-stage
//! in-order pipeline (Fetch, Decode, Execute, Memory, Writeback). The
//! simulator exposes the contents of the four inter-stage pipeline latches
//! so data hazards, forwarding, and stalls can be inspected cycle by cycle.
//!
//! # Architecture
//!
//! * **Core**: 5-stage in-order pipeline with hazard detection and an
//!   optional data-forwarding unit.
//! * **State**: two architectural snapshots (`current` / `next`) committed
//!   atomically at every cycle boundary, modeling edge-triggered flip-flops.
//! * **Memory**: little-endian, 32-bit word-addressable view over a fixed
//!   table of disjoint byte regions.
//!
//! # Modules
//!
//! * `common`: Shared constants and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation (pipeline, ALU, architectural state).
//! * `isa`: Instruction decoding and disassembly.
//! * `sim`: Program loader and interactive shell.
//! * `soc`: Region-backed memory service.
//! * `stats`: Simulation statistics collection.

/// Shared constants and error types.
///
/// Provides the memory-map constants and the crate-wide error enum used by
/// the loader, configuration, and shell.
pub mod common;

/// Configuration system for simulator settings.
///
/// Loads and parses TOML configuration files controlling instruction
/// tracing and the power-on forwarding mode.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
///
/// Implements the five pipeline stage engines, the inter-stage latches,
/// the hazard/forwarding unit, and the two-snapshot architectural state.
pub mod core;

/// Instruction Set Architecture definitions and decoders.
///
/// Implements MIPS32 R/I-type field extraction, the decoded instruction
/// record, and the textual disassembler.
pub mod isa;

/// Simulation harness: program loader and interactive shell.
///
/// Handles loading hex program files into the text region and dispatching
/// the debug commands of the command-line shell.
pub mod sim;

/// Region-backed memory service.
///
/// Implements the 32-bit word-addressable little-endian view over the
/// simulator's fixed memory regions.
pub mod soc;

/// Simulation statistics collection and reporting.
///
/// Tracks cycle counts, retired instructions, and data-hazard stalls.
pub mod stats;
