use bitflags::bitflags;

bitflags! {
    /// Header byte 9. Only the TV system bit is defined for iNES 1.0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags9: u8 {
        const PAL = 0b0000_0001;
    }
}
