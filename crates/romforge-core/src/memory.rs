//! Shared definitions for the CPU-side cartridge window.
//!
//! Kept separate from the header codec so the assembler and any consumer that
//! reasons about reset vectors agree on the same addresses.

/// CPU memory map details.
pub mod cpu {
    /// First CPU address mapped to cartridge PRG ROM.
    pub const PRG_ROM_START: u16 = 0x8000;
    /// Last CPU address (inclusive) mapped to cartridge PRG ROM.
    pub const PRG_ROM_END: u16 = 0xFFFF;

    /// Whether `addr` falls inside the PRG ROM window.
    pub const fn in_prg_window(addr: u16) -> bool {
        addr >= PRG_ROM_START
    }
}
