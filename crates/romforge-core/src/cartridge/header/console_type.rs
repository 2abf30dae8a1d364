use core::fmt;

/// Console type advertised by bits 0-1 of header byte 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleType {
    /// Standard NES/Famicom cartridge.
    #[default]
    NesFamicom,
    /// Vs. System arcade hardware.
    VsSystem,
    /// PlayChoice-10 hardware.
    PlayChoice10,
    /// Extended console type (only meaningful for NES 2.0 dumps).
    Extended,
}

impl ConsoleType {
    pub(super) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::NesFamicom,
            1 => Self::VsSystem,
            2 => Self::PlayChoice10,
            3 => Self::Extended,
            _ => unreachable!("masked to 2 bits"),
        }
    }

    pub(super) fn bits(self) -> u8 {
        match self {
            Self::NesFamicom => 0,
            Self::VsSystem => 1,
            Self::PlayChoice10 => 2,
            Self::Extended => 3,
        }
    }
}

impl fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConsoleType::NesFamicom => "NES/Famicom",
            ConsoleType::VsSystem => "Vs. System",
            ConsoleType::PlayChoice10 => "PlayChoice-10",
            ConsoleType::Extended => "extended",
        };
        f.write_str(s)
    }
}
