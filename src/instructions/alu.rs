//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Test bits
//!
//! ADC and SBC honour the decimal flag with NMOS behaviour: the carry and
//! the accumulator are decimal-corrected, while Z always reflects the binary
//! sum and N/V come from the partially corrected high nibble.

use crate::{Registers, Status};

/// ADC: A = A + M + C.
///
/// # Flag Behavior
///
/// - Carry (C): Set on unsigned (or BCD) overflow
/// - Overflow (V): Set when two operands of equal sign give a result of the other sign
/// - Zero (Z), Negative (N): From the result (see module docs for decimal mode)
pub fn adc(r: &mut Registers, operand: u8) -> u8 {
    if r.p.contains(Status::DECIMAL) {
        add_decimal(r, operand);
    } else {
        add_binary(r, operand);
    }
    r.a
}

/// SBC: A = A - M - !C.
///
/// In binary mode this is ADC of the one's complement.
pub fn sbc(r: &mut Registers, operand: u8) -> u8 {
    if r.p.contains(Status::DECIMAL) {
        subtract_decimal(r, operand);
    } else {
        add_binary(r, !operand);
    }
    r.a
}

fn add_binary(r: &mut Registers, operand: u8) {
    let carry = u16::from(r.p.contains(Status::CARRY));
    let sum = u16::from(r.a) + u16::from(operand) + carry;
    let result = sum as u8;

    r.p.set(Status::CARRY, sum > 0xFF);
    r.p.set(
        Status::OVERFLOW,
        (r.a ^ result) & (operand ^ result) & 0x80 != 0,
    );
    r.p.update_nz(result);
    r.a = result;
}

fn add_decimal(r: &mut Registers, operand: u8) {
    let a = r.a;
    let carry = u8::from(r.p.contains(Status::CARRY));

    let mut lo = (a & 0x0F) + (operand & 0x0F) + carry;
    if lo > 9 {
        lo += 6;
    }
    let mut hi = (a >> 4) + (operand >> 4) + u8::from(lo > 0x0F);

    let mut p = r
        .p
        .difference(Status::NEGATIVE | Status::OVERFLOW | Status::ZERO | Status::CARRY);
    if a.wrapping_add(operand).wrapping_add(carry) == 0 {
        p |= Status::ZERO;
    } else if hi & 0x08 != 0 {
        p |= Status::NEGATIVE;
    }
    if !(a ^ operand) & (a ^ (hi << 4)) & 0x80 != 0 {
        p |= Status::OVERFLOW;
    }
    if hi > 9 {
        hi += 6;
    }
    if hi > 0x0F {
        p |= Status::CARRY;
    }

    r.a = (hi << 4) | (lo & 0x0F);
    r.p = p;
}

fn subtract_decimal(r: &mut Registers, operand: u8) {
    let a = r.a;
    let borrow = u8::from(!r.p.contains(Status::CARRY));
    let diff = u16::from(a)
        .wrapping_sub(u16::from(operand))
        .wrapping_sub(u16::from(borrow));

    let mut lo = (a & 0x0F).wrapping_sub(operand & 0x0F).wrapping_sub(borrow);
    if (lo as i8) < 0 {
        lo = lo.wrapping_sub(6);
    }
    let mut hi = (a >> 4)
        .wrapping_sub(operand >> 4)
        .wrapping_sub(u8::from((lo as i8) < 0));

    let mut p = r
        .p
        .difference(Status::NEGATIVE | Status::OVERFLOW | Status::ZERO | Status::CARRY);
    if diff as u8 == 0 {
        p |= Status::ZERO;
    } else if diff & 0x80 != 0 {
        p |= Status::NEGATIVE;
    }
    if (a ^ operand) & (a ^ diff as u8) & 0x80 != 0 {
        p |= Status::OVERFLOW;
    }
    if diff & 0xFF00 == 0 {
        p |= Status::CARRY;
    }
    if (hi as i8) < 0 {
        hi = hi.wrapping_sub(6);
    }

    r.a = (hi << 4) | (lo & 0x0F);
    r.p = p;
}

/// AND: A = A & M.
pub fn and(r: &mut Registers, operand: u8) -> u8 {
    r.a &= operand;
    r.p.update_nz(r.a);
    r.a
}

/// ORA: A = A | M.
pub fn ora(r: &mut Registers, operand: u8) -> u8 {
    r.a |= operand;
    r.p.update_nz(r.a);
    r.a
}

/// EOR: A = A ^ M.
pub fn eor(r: &mut Registers, operand: u8) -> u8 {
    r.a ^= operand;
    r.p.update_nz(r.a);
    r.a
}

/// Shared body of CMP/CPX/CPY and the DCP/SBX illegals.
pub(crate) fn compare(p: &mut Status, register: u8, operand: u8) {
    p.set(Status::CARRY, register >= operand);
    p.update_nz(register.wrapping_sub(operand));
}

/// CMP: compare A with M.
pub fn cmp(r: &mut Registers, operand: u8) -> u8 {
    compare(&mut r.p, r.a, operand);
    operand
}

/// CPX: compare X with M.
pub fn cpx(r: &mut Registers, operand: u8) -> u8 {
    compare(&mut r.p, r.x, operand);
    operand
}

/// CPY: compare Y with M.
pub fn cpy(r: &mut Registers, operand: u8) -> u8 {
    compare(&mut r.p, r.y, operand);
    operand
}

/// BIT: N and V from M, Z from A & M, as one update.
pub fn bit(r: &mut Registers, operand: u8) -> u8 {
    let nv = (Status::NEGATIVE | Status::OVERFLOW).bits();
    let mut nvz = Status::from_bits_retain(operand & nv);
    if r.a & operand == 0 {
        nvz |= Status::ZERO;
    }
    r.p = r.p.difference(Status::NEGATIVE | Status::OVERFLOW | Status::ZERO) | nvz;
    operand
}
