//! Build and validate iNES cartridge images.
//!
//! ```
//! use romforge_core::{BuildConfig, Strictness, build, validate};
//!
//! let image = build(&BuildConfig::default())?;
//! assert_eq!(image.len(), 16 + 16 * 1024 + 8 * 1024);
//!
//! let header = validate(&image, Strictness::Strict)?;
//! assert_eq!(header.prg_rom_banks, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cartridge;
pub mod error;
pub mod memory;

pub use cartridge::{
    BuildConfig, CartridgeImage, ConsoleType, Header, HeaderFields, Mirroring, Strictness,
    TvSystem, build, validate,
};
pub use error::{BuildError, DecodeError, FieldError, ValidationError};
