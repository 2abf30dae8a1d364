use std::{fs, path};

use anyhow::{Context, Result};
use romforge_core::{BuildConfig, build};
use tracing::info;

use crate::args::BuildArgs;

pub fn run(args: BuildArgs) -> Result<()> {
    let trainer = match &args.trainer {
        Some(path) => Some(
            fs::read(path).with_context(|| format!("reading trainer {}", path.display()))?,
        ),
        None => None,
    };

    let image = build(&config_from_args(&args, trainer)).context("assembling cartridge image")?;

    let output_path = path::absolute(&args.output)
        .with_context(|| format!("resolving {}", args.output.display()))?;
    fs::write(&output_path, &image)
        .with_context(|| format!("writing {}", output_path.display()))?;

    info!("ROM built successfully: {}", output_path.display());
    Ok(())
}

fn config_from_args(args: &BuildArgs, trainer: Option<Vec<u8>>) -> BuildConfig {
    BuildConfig {
        prg_rom_banks: args.prg_banks,
        chr_rom_banks: args.chr_banks,
        mapper: args.mapper,
        mirroring: args.mirroring.into(),
        battery_backed_ram: args.battery,
        trainer,
        reset_vector: args.reset_vector,
        prg_ram_banks: args.prg_ram_banks,
        tv_system: args.tv_system.into(),
        fill: args.fill,
        ..BuildConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use romforge_core::Mirroring;

    use super::*;
    use crate::args::{Args, Command};

    fn build_args(argv: &[&str]) -> BuildArgs {
        let args = Args::try_parse_from(argv).expect("arguments parse");
        match args.command {
            Command::Build(build) => build,
            Command::Inspect(_) => panic!("expected build command"),
        }
    }

    #[test]
    fn default_arguments_map_to_default_config() {
        let args = build_args(&["romforge", "build"]);
        assert_eq!(config_from_args(&args, None), BuildConfig::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let args = build_args(&[
            "romforge",
            "build",
            "--chr-banks",
            "0",
            "--mirroring",
            "vertical",
            "--battery",
            "--fill",
            "0xEA",
        ]);
        let config = config_from_args(&args, Some(vec![0; 512]));

        assert_eq!(config.chr_rom_banks, 0);
        assert_eq!(config.mirroring, Mirroring::Vertical);
        assert!(config.battery_backed_ram);
        assert_eq!(config.fill, 0xEA);
        assert_eq!(config.trainer.as_ref().map(Vec::len), Some(512));
    }
}
