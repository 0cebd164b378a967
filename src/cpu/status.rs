use bitflags::bitflags;

bitflags! {
    /// The 8-bit processor status register (P).
    ///
    /// Bit layout:
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// N V _ B D I Z C
    /// ```
    /// The `B` flag only exists in copies of the register pushed to the
    /// stack; it is synthesized at push sites and never stored here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry (C). Set on unsigned overflow out of bit 7 (add) or no
        /// borrow (subtract).
        const CARRY = 0b0000_0001;
        /// Zero (Z). Set when the result of an operation is zero.
        const ZERO = 0b0000_0010;
        /// Interrupt disable (I). Blocks IRQ servicing; never blocks NMI.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal (D). Carried for completeness; the NES 6502 ignores it.
        const DECIMAL = 0b0000_1000;
        /// Break (B). Only meaningful in a pushed copy of the register.
        const BREAK = 0b0001_0000;
        /// Reserved bit. Always 1 in a pushed copy of the register.
        const RESERVED = 0b0010_0000;
        /// Overflow (V). Set on signed overflow for ADC/SBC.
        const OVERFLOW = 0b0100_0000;
        /// Negative (N). Mirrors bit 7 of the last result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Power-on status: I=1, reserved=1, everything else clear.
    pub fn power_on() -> Self {
        Status::INTERRUPT_DISABLE | Status::RESERVED
    }

    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Value pushed to the stack for BRK/PHP: B and reserved both set.
    pub fn to_pushed_byte_with_break(self) -> u8 {
        (self | Status::BREAK | Status::RESERVED).bits()
    }

    /// Value pushed to the stack for IRQ/NMI: B clear, reserved set.
    pub fn to_pushed_byte_without_break(self) -> u8 {
        ((self | Status::RESERVED) & !Status::BREAK).bits()
    }

    /// Restores flags popped from the stack. B and reserved are not part of
    /// the logical register and are discarded.
    pub fn from_popped_byte(byte: u8) -> Self {
        Status::from_bits_retain(byte) & !Status::BREAK & !Status::RESERVED
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::power_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pull_round_trip_drops_break_and_reserved_distinction() {
        let p = Status::CARRY | Status::ZERO | Status::NEGATIVE;
        let pushed = p.to_pushed_byte_without_break();
        let restored = Status::from_popped_byte(pushed);
        assert_eq!(restored, p);
    }

    #[test]
    fn brk_push_sets_break_and_reserved() {
        let p = Status::CARRY;
        let pushed = p.to_pushed_byte_with_break();
        assert_eq!(pushed & 0b0011_0000, 0b0011_0000);
    }
}
