use std::{
    fmt::{self, Write as _},
    fs::{self, File},
    io::Read,
};

use anyhow::{Context, Result, bail};
use romforge_core::{CartridgeImage, Strictness};

use crate::args::InspectArgs;

pub fn run(args: InspectArgs) -> Result<()> {
    let path = &args.rom;
    let file_len = fs::metadata(path)
        .with_context(|| format!("reading metadata of {}", path.display()))?
        .len();
    if file_len > args.max_size {
        bail!(
            "{} is {file_len} bytes, larger than the {} byte limit",
            path.display(),
            args.max_size
        );
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let bytes = read_capped(file, args.max_size)
        .with_context(|| format!("reading {}", path.display()))?;
    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    let image = CartridgeImage::parse(&bytes, strictness)
        .with_context(|| format!("validating {}", path.display()))?;

    print!("{}", describe(&image)?);
    Ok(())
}

/// Read at most `max_size` bytes. Devices and pipes report a zero length in
/// their metadata, so the cap has to hold on the read itself.
fn read_capped<R: Read>(reader: R, max_size: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_size {
        bail!("input is larger than the {max_size} byte limit");
    }
    Ok(bytes)
}

fn describe(image: &CartridgeImage<'_>) -> Result<String, fmt::Error> {
    let header = image.header();
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

    let mut out = String::new();
    writeln!(
        out,
        "PRG ROM banks: {} ({} KiB)",
        header.prg_rom_banks,
        header.prg_rom_size() / 1024
    )?;
    if header.uses_chr_ram() {
        writeln!(out, "CHR ROM banks: 0 (CHR RAM)")?;
    } else {
        writeln!(
            out,
            "CHR ROM banks: {} ({} KiB)",
            header.chr_rom_banks,
            header.chr_rom_size() / 1024
        )?;
    }
    writeln!(out, "PRG RAM:       {} KiB", header.prg_ram_size() / 1024)?;
    writeln!(out, "Mapper:        {}", header.mapper())?;
    writeln!(out, "Mirroring:     {}", header.mirroring())?;
    writeln!(out, "Battery:       {}", yes_no(header.battery_backed_ram()))?;
    writeln!(out, "Trainer:       {}", yes_no(header.trainer_present()))?;
    writeln!(out, "Console:       {}", header.console_type())?;
    writeln!(out, "TV system:     {}", header.tv_system())?;
    match image.reset_vector() {
        Some(vector) => writeln!(out, "Reset vector:  ${vector:04X}")?,
        None => writeln!(out, "Reset vector:  none")?,
    }
    Ok(out)
}
