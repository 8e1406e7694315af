//! # Status Register
//!
//! Packed representation of the 6502 processor status register.
//!
//! The register is a single byte with the layout `N V 1 B D I Z C` (bit 7
//! down to bit 0). Bit 5 has no storage on the real chip and always reads
//! as one; the B flag only exists in bytes pushed to the stack and is
//! ignored when a status byte is pulled back.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    ///
    /// # Bit layout
    ///
    /// | Bit | Flag | Meaning |
    /// |-----|------|---------|
    /// | 7   | N    | Negative (bit 7 of the last result) |
    /// | 6   | V    | Overflow (signed overflow) |
    /// | 5   | U    | Unused, always 1 when packed |
    /// | 4   | B    | Break (only meaningful in pushed bytes) |
    /// | 3   | D    | Decimal mode (BCD arithmetic) |
    /// | 2   | I    | Interrupt disable (blocks IRQ) |
    /// | 1   | Z    | Zero |
    /// | 0   | C    | Carry |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sys6502::StatusRegister;
    ///
    /// let mut p = StatusRegister::on_reset();
    /// assert!(p.contains(StatusRegister::INTERRUPT_DISABLE));
    ///
    /// p.update_zn(0x80);
    /// assert!(p.contains(StatusRegister::NEGATIVE));
    /// assert!(!p.contains(StatusRegister::ZERO));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusRegister: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl StatusRegister {
    /// Power-on / reset value: interrupt disable set, decimal clear.
    pub fn on_reset() -> Self {
        StatusRegister::UNUSED | StatusRegister::INTERRUPT_DISABLE
    }

    /// Pack the register into a byte. Bit 5 is forced to one.
    pub fn to_byte(self) -> u8 {
        (self | StatusRegister::UNUSED).bits()
    }

    /// Unpack a byte into the register. Bit 5 is forced to one; all other
    /// bits are taken from the byte, including B (callers that must ignore
    /// B, such as PLP and RTI, restore it themselves).
    pub fn from_byte(byte: u8) -> Self {
        StatusRegister::from_bits_retain(byte) | StatusRegister::UNUSED
    }

    /// Set Z from an 8-bit result being zero and N from its bit 7.
    pub fn update_zn(&mut self, value: u8) {
        self.set(StatusRegister::ZERO, value == 0);
        self.set(StatusRegister::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::on_reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_value() {
        let p = StatusRegister::on_reset();
        assert_eq!(p.to_byte(), 0b0010_0100);
    }

    #[test]
    fn test_unused_bit_always_packed() {
        let p = StatusRegister::empty();
        assert_eq!(p.to_byte() & 0b0010_0000, 0b0010_0000);
    }

    #[test]
    fn test_round_trip_low_seven_bits() {
        for byte in 0u8..=255 {
            let p = StatusRegister::from_byte(byte | 0b0011_0000);
            let packed = p.to_byte();
            // Everything but bit 5 round-trips; bit 5 is pinned to 1.
            assert_eq!(packed | 0b0010_0000, (byte | 0b0011_0000) | 0b0010_0000);
        }
    }

    #[test]
    fn test_update_zn_zero() {
        let mut p = StatusRegister::on_reset();
        p.update_zn(0x00);
        assert!(p.contains(StatusRegister::ZERO));
        assert!(!p.contains(StatusRegister::NEGATIVE));
    }

    #[test]
    fn test_update_zn_negative() {
        let mut p = StatusRegister::on_reset();
        p.update_zn(0xFF);
        assert!(!p.contains(StatusRegister::ZERO));
        assert!(p.contains(StatusRegister::NEGATIVE));
    }

    #[test]
    fn test_update_zn_positive() {
        let mut p = StatusRegister::on_reset();
        p.set(StatusRegister::ZERO, true);
        p.set(StatusRegister::NEGATIVE, true);
        p.update_zn(0x42);
        assert!(!p.contains(StatusRegister::ZERO));
        assert!(!p.contains(StatusRegister::NEGATIVE));
    }
}
