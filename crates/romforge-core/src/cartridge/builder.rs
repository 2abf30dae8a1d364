//! Cartridge image assembler.

use tracing::debug;

use crate::{
    cartridge::header::{ConsoleType, HeaderFields, Mirroring, TRAINER_SIZE, TvSystem},
    error::{BuildError, FieldError},
    memory::cpu,
};

/// Everything needed to lay out a cartridge image.
///
/// The default describes the smallest NROM board: one 16 KiB PRG bank, one
/// 8 KiB CHR bank, horizontal mirroring and a reset vector at `$8000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildConfig {
    /// PRG ROM size in 16 KiB banks. Must be at least 1.
    pub prg_rom_banks: usize,
    /// CHR ROM size in 8 KiB banks. Zero leaves the board on CHR RAM.
    pub chr_rom_banks: usize,
    pub mapper: u16,
    pub mirroring: Mirroring,
    pub battery_backed_ram: bool,
    /// Optional trainer block, exactly [`TRAINER_SIZE`] bytes.
    pub trainer: Option<Vec<u8>>,
    /// Address written to the last two PRG ROM bytes. `None` means the start of
    /// the PRG window.
    pub reset_vector: Option<u16>,
    pub prg_ram_banks: usize,
    pub tv_system: TvSystem,
    pub console_type: ConsoleType,
    /// Byte used for the PRG and CHR regions before the reset vector is written.
    pub fill: u8,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            prg_rom_banks: 1,
            chr_rom_banks: 1,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            battery_backed_ram: false,
            trainer: None,
            reset_vector: None,
            prg_ram_banks: 1,
            tv_system: TvSystem::Ntsc,
            console_type: ConsoleType::NesFamicom,
            fill: 0x00,
        }
    }
}

impl BuildConfig {
    /// Header fields implied by this configuration.
    pub fn header_fields(&self) -> HeaderFields {
        HeaderFields {
            prg_rom_banks: self.prg_rom_banks,
            chr_rom_banks: self.chr_rom_banks,
            mapper: self.mapper,
            mirroring: self.mirroring,
            battery_backed_ram: self.battery_backed_ram,
            trainer_present: self.trainer.is_some(),
            console_type: self.console_type,
            prg_ram_banks: self.prg_ram_banks,
            tv_system: self.tv_system,
            flags10: 0,
            padding: [0; 5],
        }
    }

    /// The reset vector that [`build`] will write.
    pub fn effective_reset_vector(&self) -> u16 {
        self.reset_vector.unwrap_or(cpu::PRG_ROM_START)
    }
}

/// Assemble header, trainer, PRG ROM and CHR ROM into one image.
///
/// PRG and CHR are filled with `config.fill`, then the reset vector is stored
/// little-endian in the final two bytes of PRG ROM.
pub fn build(config: &BuildConfig) -> Result<Vec<u8>, BuildError> {
    let header = config.header_fields().to_header()?;

    let reset_vector = config.effective_reset_vector();
    if !cpu::in_prg_window(reset_vector) {
        return Err(FieldError::ResetVectorOutOfWindow(reset_vector).into());
    }

    if let Some(trainer) = &config.trainer
        && trainer.len() != TRAINER_SIZE
    {
        return Err(BuildError::InvalidTrainer {
            actual: trainer.len(),
        });
    }

    let mut image = Vec::with_capacity(header.image_len());
    image.extend_from_slice(&header.to_bytes());
    if let Some(trainer) = &config.trainer {
        image.extend_from_slice(trainer);
    }

    let prg_start = image.len();
    let prg_end = prg_start + header.prg_rom_size();
    image.resize(prg_end, config.fill);
    image[prg_end - 2..prg_end].copy_from_slice(&reset_vector.to_le_bytes());

    image.resize(prg_end + header.chr_rom_size(), config.fill);

    debug!(
        prg_rom_banks = header.prg_rom_banks,
        chr_rom_banks = header.chr_rom_banks,
        mapper = header.mapper(),
        trainer = header.trainer_present(),
        reset_vector,
        len = image.len(),
        "assembled cartridge image"
    );

    Ok(image)
}
