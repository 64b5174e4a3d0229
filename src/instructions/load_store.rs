//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load a register from memory (updates N and Z)
//! - STA, STX, STY: Store a register to memory (no flags)
//!
//! Stores return the byte to put on the data bus; the microcode never reads
//! the destination first.

use crate::Registers;

/// LDA: A = M.
pub fn lda(r: &mut Registers, value: u8) -> u8 {
    r.a = value;
    r.p.update_nz(value);
    value
}

/// LDX: X = M.
pub fn ldx(r: &mut Registers, value: u8) -> u8 {
    r.x = value;
    r.p.update_nz(value);
    value
}

/// LDY: Y = M.
pub fn ldy(r: &mut Registers, value: u8) -> u8 {
    r.y = value;
    r.p.update_nz(value);
    value
}

/// STA: M = A.
pub fn sta(r: &mut Registers, _: u8) -> u8 {
    r.a
}

/// STX: M = X.
pub fn stx(r: &mut Registers, _: u8) -> u8 {
    r.x
}

/// STY: M = Y.
pub fn sty(r: &mut Registers, _: u8) -> u8 {
    r.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_loads_set_nz() {
        let mut r = Registers::ready_at(0);
        ldx(&mut r, 0x00);
        assert!(r.p.contains(Status::ZERO));
        ldy(&mut r, 0xC0);
        assert!(r.p.contains(Status::NEGATIVE));
        assert!(!r.p.contains(Status::ZERO));
        assert_eq!(r.y, 0xC0);
    }

    #[test]
    fn test_stores_do_not_touch_flags() {
        let mut r = Registers::ready_at(0);
        r.a = 0x00;
        let before = r.p;
        assert_eq!(sta(&mut r, 0xFF), 0x00);
        assert_eq!(r.p, before);
    }
}
