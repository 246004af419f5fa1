//! Program loader.
//!
//! A program file is ASCII text with one 32-bit instruction per line,
//! written in hexadecimal (`0x` prefix optional, blank lines ignored).
//! Words are stored little-endian into successive 4-byte slots starting at
//! the base of the text region.

use std::fs;

use tracing::debug;

use crate::common::constants::MEM_TEXT_BEGIN;
use crate::common::SimError;
use crate::soc::Memory;

/// Loads the program at `path` into the text region of `mem`.
///
/// Returns the number of words written (the program size).
pub fn load_program(path: &str, mem: &mut Memory) -> Result<usize, SimError> {
    let content = fs::read_to_string(path).map_err(|source| SimError::ProgramRead {
        path: path.to_string(),
        source,
    })?;

    let mut words = 0usize;
    for (idx, line) in content.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let word = u32::from_str_radix(digits, 16).map_err(|_| SimError::ProgramParse {
            path: path.to_string(),
            line: idx + 1,
            text: text.to_string(),
        })?;

        let addr = MEM_TEXT_BEGIN + (words as u32) * 4;
        debug!("loader: {:#010x} <- {:#010x}", addr, word);
        mem.write32(addr, word);
        words += 1;
    }

    Ok(words)
}
