//! Error types for the simulator's fallible edges.
//!
//! Simulation itself never fails: out-of-range memory accesses, division by
//! zero, and unknown opcodes are all silent by design. The only errors that
//! surface are file and parse problems while loading programs or
//! configuration.

use std::io;

use thiserror::Error;

/// Errors raised while loading a program or configuration file.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be read.
    #[error("cannot read program file '{path}': {source}")]
    ProgramRead {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line of the program file is not a 32-bit hex word.
    #[error("malformed program word '{text}' at {path}:{line}")]
    ProgramParse {
        /// Path of the offending file.
        path: String,
        /// 1-based line number.
        line: usize,
        /// The text that failed to parse.
        text: String,
    },

    /// The configuration file exists but could not be read.
    #[error("cannot read config file '{path}': {source}")]
    ConfigRead {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
