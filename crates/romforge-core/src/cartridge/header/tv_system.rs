use core::fmt;

/// Video timing hint stored in bit 0 of header byte 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TvSystem {
    /// NTSC (60Hz) timing.
    #[default]
    Ntsc,
    /// PAL (50Hz) timing.
    Pal,
}

impl fmt::Display for TvSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TvSystem::Ntsc => "ntsc",
            TvSystem::Pal => "pal",
        };
        f.write_str(s)
    }
}
