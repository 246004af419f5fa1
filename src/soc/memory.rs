//! Region-backed memory service.
//!
//! Memory is an ordered collection of disjoint `[begin, end]` byte ranges,
//! each backed by a zero-initialized buffer. The simulator sees a 32-bit
//! word-addressable little-endian view. Accesses outside every region are
//! silent: reads return 0 and writes are dropped. The containing region is
//! found by linear scan; the table is small enough that nothing fancier is
//! warranted.

use crate::common::constants::MEM_REGIONS;

/// One contiguous byte range of the memory map.
#[derive(Clone, Debug)]
struct Region {
    begin: u32,
    end: u32,
    data: Vec<u8>,
}

impl Region {
    fn new(begin: u32, end: u32) -> Self {
        let size = (end - begin + 1) as usize;
        Self {
            begin,
            end,
            data: vec![0; size],
        }
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.begin && addr <= self.end
    }
}

/// The simulator's memory: a fixed set of disjoint regions.
#[derive(Clone, Debug)]
pub struct Memory {
    regions: Vec<Region>,
}

impl Memory {
    /// Creates a memory with the default region table.
    pub fn new() -> Self {
        Self::with_regions(&MEM_REGIONS)
    }

    /// Creates a memory backed by an alternate region table.
    ///
    /// Ranges must be disjoint; the first containing region wins on lookup.
    pub fn with_regions(ranges: &[(u32, u32)]) -> Self {
        Self {
            regions: ranges.iter().map(|&(b, e)| Region::new(b, e)).collect(),
        }
    }

    /// Reads the little-endian 32-bit word at `addr`.
    ///
    /// The address need not be 4-aligned. Bytes outside every region,
    /// including bytes past the end of the containing region, read as 0.
    pub fn read32(&self, addr: u32) -> u32 {
        for region in &self.regions {
            if region.contains(addr) {
                let offset = (addr - region.begin) as usize;
                let byte = |i: usize| u32::from(region.data.get(offset + i).copied().unwrap_or(0));
                return byte(0) | byte(1) << 8 | byte(2) << 16 | byte(3) << 24;
            }
        }
        0
    }

    /// Writes `value` as a little-endian 32-bit word at `addr`.
    ///
    /// Writes outside every region are dropped, as are the bytes of a word
    /// that would fall past the end of the containing region.
    pub fn write32(&mut self, addr: u32, value: u32) {
        for region in &mut self.regions {
            if region.contains(addr) {
                let offset = (addr - region.begin) as usize;
                for i in 0..4 {
                    if let Some(slot) = region.data.get_mut(offset + i) {
                        *slot = (value >> (8 * i)) as u8;
                    }
                }
                return;
            }
        }
    }

    /// Rezeroes every region.
    pub fn reset(&mut self) {
        for region in &mut self.regions {
            region.data.fill(0);
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
