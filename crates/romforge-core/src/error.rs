use thiserror::Error;

/// A requested header field cannot be represented in an iNES 1.0 image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("PRG ROM must span at least one 16 KiB bank")]
    ZeroPrgBanks,

    #[error("{field} is {value}, the header can only store up to {max}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("reset vector ${0:04X} lies outside the mapped PRG ROM window")]
    ResetVectorOutOfWindow(u16),
}

/// Failure while assembling a cartridge image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid header field: {0}")]
    InvalidField(#[from] FieldError),

    #[error("trainer must be exactly 512 bytes, got {actual}")]
    InvalidTrainer { actual: usize },
}

/// The 16 header bytes do not have the shape of an iNES header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("header expected 16 bytes, got {actual}")]
    WrongLength { actual: usize },

    #[error("missing NES magic bytes, found {0:02X?}")]
    BadMagic([u8; 4]),
}

/// A byte buffer is not a structurally consistent iNES image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("image expected at least 16 bytes, got {actual}")]
    TooShort { actual: usize },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("header describes {expected} bytes but the image is {actual} bytes long")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("reserved header bytes 11-15 must be zero, found {bytes:02X?}")]
    ReservedBytesNonZero { bytes: [u8; 5] },
}
