use bitflags::bitflags;

bitflags! {
    /// Header byte 7: console type and the high mapper nibble.
    ///
    /// Bits 2-3 carry the NES 2.0 marker in newer dumps. They are not interpreted
    /// here but survive a decode/encode cycle untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags7: u8 {
        const CONSOLE_TYPE_MASK = 0b0000_0011;
        const MAPPER_HIGH_MASK  = 0b1111_0000;
    }
}

impl Flags7 {
    /// High nibble of the mapper number, already shifted into place.
    pub fn mapper_high(self) -> u8 {
        self.bits() & Self::MAPPER_HIGH_MASK.bits()
    }
}
