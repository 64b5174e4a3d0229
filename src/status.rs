//! # Processor Status Register
//!
//! The P register packs eight single-bit flags into one byte (NV-BDIZC).
//! Bit positions are fixed for the lifetime of the engine; everything that
//! pushes, pulls or tests a flag goes through the masks defined here.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::Status;
    ///
    /// let mut p = Status::from_byte(0x00);
    /// assert!(p.contains(Status::UNUSED)); // bit 5 always reads as 1
    ///
    /// p.update_nz(0x80);
    /// assert!(p.contains(Status::NEGATIVE));
    /// assert!(!p.contains(Status::ZERO));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry / not-borrow.
        const CARRY = 0x01;
        /// Result was zero.
        const ZERO = 0x02;
        /// IRQ is masked while set.
        const IRQ_DISABLE = 0x04;
        /// BCD arithmetic for ADC/SBC.
        const DECIMAL = 0x08;
        /// Only exists on the stack: set by BRK/PHP, clear for IRQ/NMI.
        const BREAK = 0x10;
        /// Not wired; always reads as 1.
        const UNUSED = 0x20;
        /// Signed overflow.
        const OVERFLOW = 0x40;
        /// Bit 7 of the result.
        const NEGATIVE = 0x80;
    }
}

impl Status {
    /// Builds a status register from a raw byte, forcing the unused bit on.
    pub const fn from_byte(value: u8) -> Self {
        Self::from_bits_retain(value | Self::UNUSED.bits())
    }

    /// The byte pushed by BRK and PHP (break and unused set).
    pub const fn pushed_by_software(self) -> u8 {
        self.bits() | Self::UNUSED.bits() | Self::BREAK.bits()
    }

    /// The byte pushed on IRQ/NMI entry (unused set, break clear).
    pub const fn pushed_by_interrupt(self) -> u8 {
        (self.bits() | Self::UNUSED.bits()) & !Self::BREAK.bits()
    }

    /// Replaces N and Z from `value` in a single assignment.
    ///
    /// Both bits are cleared, then N is copied from bit 7 and Z is set when
    /// `value == 0`. No other flag is touched.
    pub fn update_nz(&mut self, value: u8) {
        let mut nz = Self::from_bits_retain(value & Self::NEGATIVE.bits());
        if value == 0 {
            nz |= Self::ZERO;
        }
        *self = self.difference(Self::NEGATIVE | Self::ZERO) | nz;
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::UNUSED
    }
}
