//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA, TSX: copy and update N/Z
//! - TXS: copy X into S without touching flags

use crate::Registers;

/// TAX: X = A.
pub fn tax(r: &mut Registers, _: u8) -> u8 {
    r.x = r.a;
    r.p.update_nz(r.x);
    r.x
}

/// TAY: Y = A.
pub fn tay(r: &mut Registers, _: u8) -> u8 {
    r.y = r.a;
    r.p.update_nz(r.y);
    r.y
}

/// TXA: A = X.
pub fn txa(r: &mut Registers, _: u8) -> u8 {
    r.a = r.x;
    r.p.update_nz(r.a);
    r.a
}

/// TYA: A = Y.
pub fn tya(r: &mut Registers, _: u8) -> u8 {
    r.a = r.y;
    r.p.update_nz(r.a);
    r.a
}

/// TSX: X = S.
pub fn tsx(r: &mut Registers, _: u8) -> u8 {
    r.x = r.s;
    r.p.update_nz(r.x);
    r.x
}

/// TXS: S = X. Flags unchanged.
pub fn txs(r: &mut Registers, _: u8) -> u8 {
    r.s = r.x;
    r.s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_txs_leaves_flags() {
        let mut r = Registers::ready_at(0);
        r.x = 0x00;
        let before = r.p;
        txs(&mut r, 0);
        assert_eq!(r.s, 0x00);
        assert_eq!(r.p, before);
    }

    #[test]
    fn test_tax_negative() {
        let mut r = Registers::ready_at(0);
        r.a = 0x80;
        tax(&mut r, 0);
        assert_eq!(r.x, 0x80);
        assert!(r.p.contains(Status::NEGATIVE));
        assert!(!r.p.contains(Status::ZERO));
    }
}
