//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operation returns the shifted value. The microcode stores it in A
//! for accumulator mode or writes it back for the memory forms.

use crate::{Registers, Status};

/// Executes ASL (Arithmetic Shift Left).
///
/// Bit 7 goes to carry, bit 0 becomes 0. Updates C, Z and N.
pub fn asl(r: &mut Registers, value: u8) -> u8 {
    r.p.set(Status::CARRY, value & 0x80 != 0);
    let result = value << 1;
    r.p.update_nz(result);
    result
}

/// Executes LSR (Logical Shift Right).
///
/// Bit 0 goes to carry, bit 7 becomes 0, so N is always cleared.
pub fn lsr(r: &mut Registers, value: u8) -> u8 {
    r.p.set(Status::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    r.p.update_nz(result);
    result
}

/// Executes ROL (Rotate Left).
///
/// The old carry enters bit 0, bit 7 becomes the new carry.
pub fn rol(r: &mut Registers, value: u8) -> u8 {
    let carry_in = u8::from(r.p.contains(Status::CARRY));
    r.p.set(Status::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    r.p.update_nz(result);
    result
}

/// Executes ROR (Rotate Right).
///
/// The old carry enters bit 7, bit 0 becomes the new carry.
pub fn ror(r: &mut Registers, value: u8) -> u8 {
    let carry_in = u8::from(r.p.contains(Status::CARRY)) << 7;
    r.p.set(Status::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | carry_in;
    r.p.update_nz(result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asl_carry_out() {
        let mut r = Registers::ready_at(0);
        assert_eq!(asl(&mut r, 0x81), 0x02);
        assert!(r.p.contains(Status::CARRY));
        assert!(!r.p.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_lsr_clears_negative() {
        let mut r = Registers::ready_at(0);
        r.p.insert(Status::NEGATIVE);
        assert_eq!(lsr(&mut r, 0x01), 0x00);
        assert!(r.p.contains(Status::CARRY));
        assert!(r.p.contains(Status::ZERO));
        assert!(!r.p.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_rotates_through_carry() {
        let mut r = Registers::ready_at(0);
        r.p.insert(Status::CARRY);
        assert_eq!(rol(&mut r, 0x40), 0x81);
        assert!(!r.p.contains(Status::CARRY));

        r.p.insert(Status::CARRY);
        assert_eq!(ror(&mut r, 0x02), 0x81);
        assert!(!r.p.contains(Status::CARRY));
        assert!(r.p.contains(Status::NEGATIVE));
    }
}
