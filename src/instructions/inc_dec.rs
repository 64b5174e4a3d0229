//! # Increment and Decrement Instructions
//!
//! - INC, DEC: memory (read-modify-write)
//! - INX, INY, DEX, DEY: index registers (implied)
//!
//! All wrap at the byte boundary and update N and Z.

use crate::Registers;

/// INC: returns M + 1.
pub fn inc(r: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    r.p.update_nz(result);
    result
}

/// DEC: returns M - 1.
pub fn dec(r: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    r.p.update_nz(result);
    result
}

/// INX: X = X + 1.
pub fn inx(r: &mut Registers, _: u8) -> u8 {
    r.x = r.x.wrapping_add(1);
    r.p.update_nz(r.x);
    r.x
}

/// INY: Y = Y + 1.
pub fn iny(r: &mut Registers, _: u8) -> u8 {
    r.y = r.y.wrapping_add(1);
    r.p.update_nz(r.y);
    r.y
}

/// DEX: X = X - 1.
pub fn dex(r: &mut Registers, _: u8) -> u8 {
    r.x = r.x.wrapping_sub(1);
    r.p.update_nz(r.x);
    r.x
}

/// DEY: Y = Y - 1.
pub fn dey(r: &mut Registers, _: u8) -> u8 {
    r.y = r.y.wrapping_sub(1);
    r.p.update_nz(r.y);
    r.y
}
