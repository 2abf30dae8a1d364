use proptest::prelude::*;
use romforge_core::{
    BuildConfig, ConsoleType, DecodeError, Header, HeaderFields, Mirroring, Strictness, TvSystem,
    ValidationError, build, cartridge::header::NES_MAGIC, validate,
};

fn mirroring() -> impl Strategy<Value = Mirroring> {
    prop_oneof![
        Just(Mirroring::Horizontal),
        Just(Mirroring::Vertical),
        Just(Mirroring::FourScreen),
    ]
}

fn console_type() -> impl Strategy<Value = ConsoleType> {
    prop_oneof![
        Just(ConsoleType::NesFamicom),
        Just(ConsoleType::VsSystem),
        Just(ConsoleType::PlayChoice10),
        Just(ConsoleType::Extended),
    ]
}

fn tv_system() -> impl Strategy<Value = TvSystem> {
    prop_oneof![Just(TvSystem::Ntsc), Just(TvSystem::Pal)]
}

fn header_fields() -> impl Strategy<Value = HeaderFields> {
    (
        (1usize..=255, 0usize..=255, 0u16..=255, 0usize..=255),
        (mirroring(), any::<bool>(), any::<bool>()),
        (console_type(), tv_system(), any::<u8>(), any::<[u8; 5]>()),
    )
        .prop_map(
            |(
                (prg_rom_banks, chr_rom_banks, mapper, prg_ram_banks),
                (mirroring, battery_backed_ram, trainer_present),
                (console_type, tv_system, flags10, padding),
            )| HeaderFields {
                prg_rom_banks,
                chr_rom_banks,
                mapper,
                mirroring,
                battery_backed_ram,
                trainer_present,
                console_type,
                prg_ram_banks,
                tv_system,
                flags10,
                padding,
            },
        )
}

// Bank counts are kept small so every case allocates at most a few hundred KiB.
fn build_config() -> impl Strategy<Value = BuildConfig> {
    (
        (1usize..=8, 0usize..=8, 0u16..=255),
        (mirroring(), any::<bool>(), any::<bool>()),
        (proptest::option::of(0x8000u16..=0xFFFF), any::<u8>()),
        (0usize..=255, tv_system(), console_type()),
    )
        .prop_map(
            |(
                (prg_rom_banks, chr_rom_banks, mapper),
                (mirroring, battery_backed_ram, with_trainer),
                (reset_vector, fill),
                (prg_ram_banks, tv_system, console_type),
            )| BuildConfig {
                prg_rom_banks,
                chr_rom_banks,
                mapper,
                mirroring,
                battery_backed_ram,
                trainer: with_trainer.then(|| vec![0xEA; 512]),
                reset_vector,
                prg_ram_banks,
                tv_system,
                console_type,
                fill,
            },
        )
}

fn trainer_len(config: &BuildConfig) -> usize {
    if config.trainer.is_some() { 512 } else { 0 }
}

fn expected_len(config: &BuildConfig) -> usize {
    16 + trainer_len(config) + config.prg_rom_banks * 16384 + config.chr_rom_banks * 8192
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn header_fields_round_trip(fields in header_fields()) {
        let bytes = fields.encode().expect("representable fields encode");
        let header = Header::decode(&bytes).expect("encoded header decodes");
        prop_assert_eq!(header.fields(), fields);
    }

    #[test]
    fn header_bytes_round_trip(tail in any::<[u8; 12]>()) {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(NES_MAGIC);
        bytes[4..].copy_from_slice(&tail);

        let header = Header::decode(&bytes).expect("any field values decode");
        prop_assert_eq!(header.to_bytes(), bytes);
        prop_assert_eq!(header.mapper(), (bytes[7] & 0xF0) | (bytes[6] >> 4));
    }

    #[test]
    fn built_header_matches_config(config in build_config()) {
        let image = build(&config).expect("valid config builds");
        let header = Header::decode(&image[..16]).expect("header decodes");
        prop_assert_eq!(header.fields(), config.header_fields());
        prop_assert_eq!(usize::from(header.prg_ram_banks), config.prg_ram_banks);
        prop_assert_eq!(header.tv_system(), config.tv_system);
        prop_assert_eq!(header.console_type(), config.console_type);
        prop_assert_eq!(u16::from(header.mapper()), config.mapper);
        prop_assert_eq!(header.mirroring(), config.mirroring);
    }

    #[test]
    fn built_length_matches_declared_sections(config in build_config()) {
        let image = build(&config).expect("valid config builds");
        prop_assert_eq!(image.len(), expected_len(&config));
    }

    #[test]
    fn reset_vector_sits_at_end_of_prg(config in build_config()) {
        let image = build(&config).expect("valid config builds");
        let prg_end = 16 + trainer_len(&config) + config.prg_rom_banks * 16384;

        let vector = u16::from_le_bytes([image[prg_end - 2], image[prg_end - 1]]);
        prop_assert_eq!(vector, config.reset_vector.unwrap_or(0x8000));
    }

    #[test]
    fn built_images_validate(config in build_config()) {
        let image = build(&config).expect("valid config builds");
        let header = validate(&image, Strictness::Strict).expect("built image validates");
        prop_assert_eq!(header.fields(), config.header_fields());
    }

    #[test]
    fn altered_magic_is_rejected(
        config in build_config(),
        magic in any::<[u8; 4]>().prop_filter("must differ from the signature", |m| m != NES_MAGIC),
    ) {
        let mut image = build(&config).expect("valid config builds");
        image[..4].copy_from_slice(&magic);

        prop_assert_eq!(
            validate(&image, Strictness::Lenient),
            Err(ValidationError::Decode(DecodeError::BadMagic(magic)))
        );
    }

    #[test]
    fn off_by_one_lengths_are_rejected(config in build_config(), extra in any::<u8>()) {
        let image = build(&config).expect("valid config builds");
        let expected = image.len();

        let mut longer = image.clone();
        longer.push(extra);
        prop_assert_eq!(
            validate(&longer, Strictness::Lenient),
            Err(ValidationError::SizeMismatch { expected, actual: expected + 1 })
        );

        let mut shorter = image;
        shorter.pop();
        prop_assert_eq!(
            validate(&shorter, Strictness::Lenient),
            Err(ValidationError::SizeMismatch { expected, actual: expected - 1 })
        );
    }
}
