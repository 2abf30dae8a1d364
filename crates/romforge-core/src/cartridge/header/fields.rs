use crate::error::FieldError;

use super::{ConsoleType, Flags6, Flags7, Flags9, Header, Mirroring, NES_HEADER_LEN, TvSystem};

/// Caller-facing view of everything an iNES 1.0 header can describe.
///
/// Counts and the mapper number use wider integers than the on-disk bytes so
/// that out-of-range requests are reported instead of silently truncated.
/// Encoding goes through [`HeaderFields::to_header`], which performs every
/// range check; [`Header::fields`] goes the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderFields {
    /// PRG ROM size in 16 KiB banks. Must be at least 1.
    pub prg_rom_banks: usize,
    /// CHR ROM size in 8 KiB banks. Zero means the board uses CHR RAM.
    pub chr_rom_banks: usize,
    /// Mapper ID (0 == NROM, 1 == MMC1, ...).
    pub mapper: u16,
    pub mirroring: Mirroring,
    pub battery_backed_ram: bool,
    pub trainer_present: bool,
    pub console_type: ConsoleType,
    /// PRG RAM size in 8 KiB banks.
    pub prg_ram_banks: usize,
    pub tv_system: TvSystem,
    /// Raw byte 10.
    pub flags10: u8,
    /// Raw bytes 11-15.
    pub padding: [u8; 5],
}

impl Default for HeaderFields {
    fn default() -> Self {
        Self {
            prg_rom_banks: 1,
            chr_rom_banks: 0,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            battery_backed_ram: false,
            trainer_present: false,
            console_type: ConsoleType::NesFamicom,
            prg_ram_banks: 1,
            tv_system: TvSystem::Ntsc,
            flags10: 0,
            padding: [0; 5],
        }
    }
}

impl HeaderFields {
    /// Range-check the fields and pack them into a [`Header`].
    pub fn to_header(&self) -> Result<Header, FieldError> {
        if self.prg_rom_banks == 0 {
            return Err(FieldError::ZeroPrgBanks);
        }
        let prg_rom_banks = header_byte("PRG ROM banks", self.prg_rom_banks)?;
        let chr_rom_banks = header_byte("CHR ROM banks", self.chr_rom_banks)?;
        let prg_ram_banks = header_byte("PRG RAM banks", self.prg_ram_banks)?;
        let mapper = header_byte("mapper", usize::from(self.mapper))?;

        let mut flags6 = Flags6::from_bits_retain(mapper << 4);
        match self.mirroring {
            Mirroring::Horizontal => {}
            Mirroring::Vertical => flags6.insert(Flags6::MIRRORING),
            Mirroring::FourScreen => flags6.insert(Flags6::FOUR_SCREEN),
        }
        flags6.set(Flags6::BATTERY, self.battery_backed_ram);
        flags6.set(Flags6::TRAINER, self.trainer_present);

        let flags7 = Flags7::from_bits_retain(
            (mapper & Flags7::MAPPER_HIGH_MASK.bits()) | self.console_type.bits(),
        );

        let mut flags9 = Flags9::empty();
        flags9.set(Flags9::PAL, self.tv_system == TvSystem::Pal);

        Ok(Header {
            prg_rom_banks,
            chr_rom_banks,
            flags6,
            flags7,
            prg_ram_banks,
            flags9,
            flags10: self.flags10,
            padding: self.padding,
        })
    }

    /// Encode the fields into the 16-byte on-disk header.
    pub fn encode(&self) -> Result<[u8; NES_HEADER_LEN], FieldError> {
        Ok(self.to_header()?.to_bytes())
    }
}

fn header_byte(field: &'static str, value: usize) -> Result<u8, FieldError> {
    u8::try_from(value).map_err(|_| FieldError::OutOfRange {
        field,
        value,
        max: usize::from(u8::MAX),
    })
}
