//! iNES header codec.
//!
//! The first 16 bytes of every `.nes` ROM are the *iNES header*. It stores how much
//! PRG/CHR data the cartridge exposes, which mapper is required, and a few
//! compatibility flags. [`Header`] keeps those bytes as they appear on disk, so a
//! decoded header can always be written back unchanged, and offers typed accessors
//! for the interesting parts.
//!
//! # Quick overview
//! - Pass the first 16 bytes of an image to [`Header::decode`].
//! - Inspect `header.mapper()`, `header.mirroring()` and friends.
//! - Use [`Header::prg_rom_size`] / [`Header::chr_rom_size`] to slice the PRG/CHR
//!   sections out of the file.
//! - To produce a header, fill in [`HeaderFields`] and call
//!   [`HeaderFields::encode`].
//!
//! Only the iNES 1.0 interpretation is implemented. NES 2.0 bits are carried
//! through verbatim but never interpreted.

use crate::error::DecodeError;

mod console_type;
mod fields;
mod flags6;
mod flags7;
mod flags9;
mod mirroring;
mod tv_system;

pub use console_type::ConsoleType;
pub use fields::HeaderFields;
pub use flags6::Flags6;
pub use flags7::Flags7;
pub use flags9::Flags9;
pub use mirroring::Mirroring;
pub use tv_system::TvSystem;

/// `"NES"` followed by MS-DOS end-of-file.
pub const NES_MAGIC: &[u8; 4] = b"NES\x1A";

/// Size of the fixed iNES header in bytes.
pub const NES_HEADER_LEN: usize = 16;

/// Size of the optional trainer block that sits between the header and PRG ROM.
pub const TRAINER_SIZE: usize = 512;

/// One PRG ROM unit as counted by header byte 4.
pub const PRG_ROM_BANK_SIZE: usize = 16 * 1024;

/// One CHR ROM unit as counted by header byte 5.
pub const CHR_ROM_BANK_SIZE: usize = 8 * 1024;

/// One PRG RAM unit as counted by header byte 8.
pub const PRG_RAM_BANK_SIZE: usize = 8 * 1024;

/// Byte-faithful representation of an iNES 1.0 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    /// PRG ROM size in 16 KiB units (byte 4).
    pub prg_rom_banks: u8,
    /// CHR ROM size in 8 KiB units (byte 5). Zero means CHR RAM.
    pub chr_rom_banks: u8,
    /// iNES flags 6.
    pub flags6: Flags6,
    /// iNES flags 7.
    pub flags7: Flags7,
    /// PRG RAM size in 8 KiB units (byte 8). Zero is read as one unit.
    pub prg_ram_banks: u8,
    /// iNES flags 9.
    pub flags9: Flags9,
    /// Byte 10, unused by iNES 1.0.
    pub flags10: u8,
    /// Bytes 11-15, conventionally zero.
    pub padding: [u8; 5],
}

impl Header {
    /// Parse exactly [`NES_HEADER_LEN`] bytes.
    ///
    /// Only the shape is checked: the slice length and the magic. Every
    /// combination of field values decodes.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let bytes: &[u8; NES_HEADER_LEN] =
            bytes.try_into().map_err(|_| DecodeError::WrongLength {
                actual: bytes.len(),
            })?;

        if &bytes[0..4] != NES_MAGIC {
            return Err(DecodeError::BadMagic([bytes[0], bytes[1], bytes[2], bytes[3]]));
        }

        let mut padding = [0u8; 5];
        padding.copy_from_slice(&bytes[11..]);

        Ok(Self {
            prg_rom_banks: bytes[4],
            chr_rom_banks: bytes[5],
            flags6: Flags6::from_bits_retain(bytes[6]),
            flags7: Flags7::from_bits_retain(bytes[7]),
            prg_ram_banks: bytes[8],
            flags9: Flags9::from_bits_retain(bytes[9]),
            flags10: bytes[10],
            padding,
        })
    }

    /// Pack the header back into its on-disk form.
    pub fn to_bytes(&self) -> [u8; NES_HEADER_LEN] {
        let mut bytes = [0u8; NES_HEADER_LEN];
        bytes[0..4].copy_from_slice(NES_MAGIC);
        bytes[4] = self.prg_rom_banks;
        bytes[5] = self.chr_rom_banks;
        bytes[6] = self.flags6.bits();
        bytes[7] = self.flags7.bits();
        bytes[8] = self.prg_ram_banks;
        bytes[9] = self.flags9.bits();
        bytes[10] = self.flags10;
        bytes[11..].copy_from_slice(&self.padding);
        bytes
    }

    /// The field-level view of this header.
    pub fn fields(&self) -> HeaderFields {
        HeaderFields {
            prg_rom_banks: usize::from(self.prg_rom_banks),
            chr_rom_banks: usize::from(self.chr_rom_banks),
            mapper: u16::from(self.mapper()),
            mirroring: self.mirroring(),
            battery_backed_ram: self.battery_backed_ram(),
            trainer_present: self.trainer_present(),
            console_type: self.console_type(),
            prg_ram_banks: usize::from(self.prg_ram_banks),
            tv_system: self.tv_system(),
            flags10: self.flags10,
            padding: self.padding,
        }
    }

    /// Mapper ID (0 == NROM, 1 == MMC1, ...).
    pub fn mapper(&self) -> u8 {
        self.flags7.mapper_high() | self.flags6.mapper_low()
    }

    /// How the PPU nametables are mirrored.
    pub fn mirroring(&self) -> Mirroring {
        resolve_mirroring(self.flags6)
    }

    /// Battery bit indicates the cartridge keeps RAM contents when powered off.
    pub fn battery_backed_ram(&self) -> bool {
        self.flags6.contains(Flags6::BATTERY)
    }

    /// Whether the optional 512 byte trainer block is present between the header and PRG data.
    pub fn trainer_present(&self) -> bool {
        self.flags6.contains(Flags6::TRAINER)
    }

    pub fn console_type(&self) -> ConsoleType {
        ConsoleType::from_bits(self.flags7.bits())
    }

    pub fn tv_system(&self) -> TvSystem {
        if self.flags9.contains(Flags9::PAL) {
            TvSystem::Pal
        } else {
            TvSystem::Ntsc
        }
    }

    /// Amount of PRG ROM in bytes.
    pub fn prg_rom_size(&self) -> usize {
        usize::from(self.prg_rom_banks) * PRG_ROM_BANK_SIZE
    }

    /// Amount of CHR ROM in bytes.
    pub fn chr_rom_size(&self) -> usize {
        usize::from(self.chr_rom_banks) * CHR_ROM_BANK_SIZE
    }

    /// Volatile PRG RAM size. Legacy dumps store 0 for "assume 8 KiB".
    pub fn prg_ram_size(&self) -> usize {
        usize::from(self.prg_ram_banks.max(1)) * PRG_RAM_BANK_SIZE
    }

    /// The board carries CHR RAM instead of CHR ROM.
    pub fn uses_chr_ram(&self) -> bool {
        self.chr_rom_banks == 0
    }

    pub fn trainer_len(&self) -> usize {
        if self.trainer_present() {
            TRAINER_SIZE
        } else {
            0
        }
    }

    /// Total length of an image described by this header, header included.
    pub fn image_len(&self) -> usize {
        NES_HEADER_LEN + self.trainer_len() + self.prg_rom_size() + self.chr_rom_size()
    }
}

fn resolve_mirroring(flags6: Flags6) -> Mirroring {
    if flags6.contains(Flags6::FOUR_SCREEN) {
        Mirroring::FourScreen
    } else if flags6.contains(Flags6::MIRRORING) {
        Mirroring::Vertical
    } else {
        Mirroring::Horizontal
    }
}
