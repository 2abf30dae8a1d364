use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use romforge_core::{Mirroring, TvSystem};
use tracing::Level;

/// Build and validate iNES cartridge images
#[derive(Parser, Debug)]
#[command(name = "romforge", author, version, about, long_about = None)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble a cartridge image and write it to disk
    Build(BuildArgs),
    /// Validate an image and print its header
    Inspect(InspectArgs),
}

#[derive(ClapArgs, Debug)]
pub struct BuildArgs {
    /// Output path for the ROM file
    #[arg(default_value = "custom.nes")]
    pub output: PathBuf,

    /// PRG ROM size in 16 KiB banks
    #[arg(long, default_value_t = 1)]
    pub prg_banks: usize,

    /// CHR ROM size in 8 KiB banks (0 for CHR RAM)
    #[arg(long, default_value_t = 1)]
    pub chr_banks: usize,

    /// Mapper number
    #[arg(long, default_value_t = 0)]
    pub mapper: u16,

    #[arg(long, value_enum, default_value_t = MirroringArg::Horizontal)]
    pub mirroring: MirroringArg,

    /// Mark the PRG RAM as battery backed
    #[arg(long)]
    pub battery: bool,

    /// File holding a 512 byte trainer
    #[arg(long)]
    pub trainer: Option<PathBuf>,

    /// Reset vector address, e.g. 0x8000 (defaults to the start of PRG ROM)
    #[arg(long, value_parser = parse_u16)]
    pub reset_vector: Option<u16>,

    /// PRG RAM size in 8 KiB banks
    #[arg(long, default_value_t = 1)]
    pub prg_ram_banks: usize,

    #[arg(long, value_enum, default_value_t = TvSystemArg::Ntsc)]
    pub tv_system: TvSystemArg,

    /// Byte used to fill PRG and CHR ROM
    #[arg(long, default_value = "0", value_parser = parse_u8)]
    pub fill: u8,
}

#[derive(ClapArgs, Debug)]
pub struct InspectArgs {
    /// Path to the NES ROM file
    pub rom: PathBuf,

    /// Reject images whose reserved header bytes are not zero
    #[arg(long)]
    pub strict: bool,

    /// Refuse files larger than this many bytes
    #[arg(long, default_value_t = 5 * 1024 * 1024)]
    pub max_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MirroringArg {
    Horizontal,
    Vertical,
    FourScreen,
}

impl From<MirroringArg> for Mirroring {
    fn from(value: MirroringArg) -> Self {
        match value {
            MirroringArg::Horizontal => Mirroring::Horizontal,
            MirroringArg::Vertical => Mirroring::Vertical,
            MirroringArg::FourScreen => Mirroring::FourScreen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TvSystemArg {
    Ntsc,
    Pal,
}

impl From<TvSystemArg> for TvSystem {
    fn from(value: TvSystemArg) -> Self {
        match value {
            TvSystemArg::Ntsc => TvSystem::Ntsc,
            TvSystemArg::Pal => TvSystem::Pal,
        }
    }
}

/// Decimal, `0x`-prefixed or `$`-prefixed hexadecimal.
fn parse_number(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'));
    let parsed = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => s.parse(),
    };
    parsed.map_err(|err| format!("invalid number `{s}`: {err}"))
}

fn parse_u16(s: &str) -> Result<u16, String> {
    u16::try_from(parse_number(s)?).map_err(|_| format!("`{s}` does not fit in 16 bits"))
}

fn parse_u8(s: &str) -> Result<u8, String> {
    u8::try_from(parse_number(s)?).map_err(|_| format!("`{s}` does not fit in 8 bits"))
}
