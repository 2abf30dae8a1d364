//! Cartridge image primitives.
//!
//! An iNES image is laid out as header, optional trainer, PRG ROM and CHR ROM,
//! back to back with no gaps. [`build`] produces such an image from a
//! [`BuildConfig`]; [`validate`] and [`CartridgeImage::parse`] check an arbitrary
//! buffer against the sizes its header declares.

pub mod builder;
pub mod header;
pub mod validate;

pub use builder::{BuildConfig, build};
pub use header::{
    ConsoleType, Header, HeaderFields, Mirroring, NES_HEADER_LEN, TRAINER_SIZE, TvSystem,
};
pub use validate::{CartridgeImage, Strictness, validate};
