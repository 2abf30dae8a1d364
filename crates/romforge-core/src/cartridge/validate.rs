//! Structural validation of iNES images.
//!
//! Validation only looks at the header and the overall buffer length. The
//! contents of the trainer, PRG ROM and CHR ROM are left to the emulator.

use tracing::{debug, warn};

use crate::{
    cartridge::header::{Header, NES_HEADER_LEN, TRAINER_SIZE},
    error::ValidationError,
};

/// How strictly the reserved header bytes are checked.
///
/// Plenty of dumps in the wild carry junk (often a ripper's signature) in bytes
/// 11-15, so the default only warns about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Accept non-zero reserved bytes.
    #[default]
    Lenient,
    /// Reject images whose reserved bytes are not all zero.
    Strict,
}

/// Check that `bytes` is a complete, self-consistent iNES image.
///
/// Checks run in order and the first failure is returned: minimum length,
/// header shape, total length against the declared sections, then (in
/// [`Strictness::Strict`] mode) the reserved bytes.
pub fn validate(bytes: &[u8], strictness: Strictness) -> Result<Header, ValidationError> {
    let header_bytes = bytes
        .get(..NES_HEADER_LEN)
        .ok_or(ValidationError::TooShort {
            actual: bytes.len(),
        })?;
    let header = Header::decode(header_bytes)?;

    let expected = header.image_len();
    if bytes.len() != expected {
        return Err(ValidationError::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    if header.padding != [0; 5] {
        match strictness {
            Strictness::Strict => {
                return Err(ValidationError::ReservedBytesNonZero {
                    bytes: header.padding,
                });
            }
            Strictness::Lenient => {
                warn!(padding = ?header.padding, "reserved header bytes are not zero");
            }
        }
    }

    debug!(
        prg_rom_banks = header.prg_rom_banks,
        chr_rom_banks = header.chr_rom_banks,
        mapper = header.mapper(),
        len = bytes.len(),
        "validated cartridge image"
    );

    Ok(header)
}

/// A validated image, borrowed from the buffer it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartridgeImage<'a> {
    header: Header,
    bytes: &'a [u8],
}

impl<'a> CartridgeImage<'a> {
    /// Validate `bytes` and split it into its sections without copying.
    pub fn parse(bytes: &'a [u8], strictness: Strictness) -> Result<Self, ValidationError> {
        let header = validate(bytes, strictness)?;
        Ok(Self { header, bytes })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The whole image, header included.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn trainer(&self) -> Option<&'a [u8]> {
        let bytes = self.bytes;
        self.header
            .trainer_present()
            .then(move || &bytes[NES_HEADER_LEN..NES_HEADER_LEN + TRAINER_SIZE])
    }

    pub fn prg_rom(&self) -> &'a [u8] {
        let start = self.prg_start();
        &self.bytes[start..start + self.header.prg_rom_size()]
    }

    pub fn chr_rom(&self) -> &'a [u8] {
        let start = self.prg_start() + self.header.prg_rom_size();
        &self.bytes[start..start + self.header.chr_rom_size()]
    }

    /// Little-endian address stored in the last two bytes of PRG ROM.
    ///
    /// This is where [`build`](crate::cartridge::build) places the reset vector.
    /// On real hardware those bytes map to `$FFFE` (the IRQ/BRK vector), so for
    /// third-party dumps the value is not necessarily the CPU's reset address.
    /// `None` when the header declares no PRG ROM at all.
    pub fn reset_vector(&self) -> Option<u16> {
        match self.prg_rom() {
            [.., lo, hi] => Some(u16::from_le_bytes([*lo, *hi])),
            _ => None,
        }
    }

    fn prg_start(&self) -> usize {
        NES_HEADER_LEN + self.header.trainer_len()
    }
}
