//! # Undocumented Instructions
//!
//! The NMOS decode ROM activates several documented operations at once for
//! the unassigned opcodes. The stable ones are combinations of documented
//! semantics:
//!
//! | Op  | Equivalent |
//! |-----|------------|
//! | SLO | ASL M, then ORA M |
//! | RLA | ROL M, then AND M |
//! | SRE | LSR M, then EOR M |
//! | RRA | ROR M, then ADC M |
//! | DCP | DEC M, then CMP M |
//! | ISC | INC M, then SBC M |
//! | LAX | LDA M and LDX M |
//! | SAX | M = A & X |
//!
//! The immediate-only group (ANC, ALR, ARR, SBX) is also deterministic.
//! ANE and LXA depend on analogue effects; they are modelled with the
//! commonly observed magic constant `$EE`. The SHA/SHX/SHY/TAS stores AND
//! their value with the target high byte plus one, which the microcode
//! passes in as the operand.

use crate::instructions::{alu, inc_dec, shifts};
use crate::{Registers, Status};

/// Constant ORed into A by ANE and LXA.
pub const MAGIC: u8 = 0xEE;

/// SLO: M = M << 1; A |= M.
pub fn slo(r: &mut Registers, value: u8) -> u8 {
    let result = shifts::asl(r, value);
    alu::ora(r, result);
    result
}

/// RLA: M = rol M; A &= M.
pub fn rla(r: &mut Registers, value: u8) -> u8 {
    let result = shifts::rol(r, value);
    alu::and(r, result);
    result
}

/// SRE: M = M >> 1; A ^= M.
pub fn sre(r: &mut Registers, value: u8) -> u8 {
    let result = shifts::lsr(r, value);
    alu::eor(r, result);
    result
}

/// RRA: M = ror M; A = A + M + C, with C from the rotate.
pub fn rra(r: &mut Registers, value: u8) -> u8 {
    let result = shifts::ror(r, value);
    alu::adc(r, result);
    result
}

/// DCP: M = M - 1; compare A with M.
pub fn dcp(r: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    alu::compare(&mut r.p, r.a, result);
    result
}

/// ISC: M = M + 1; A = A - M - !C.
pub fn isc(r: &mut Registers, value: u8) -> u8 {
    let result = inc_dec::inc(r, value);
    alu::sbc(r, result);
    result
}

/// LAX: A = X = M.
pub fn lax(r: &mut Registers, value: u8) -> u8 {
    r.a = value;
    r.x = value;
    r.p.update_nz(value);
    value
}

/// SAX: M = A & X. Flags unchanged.
pub fn sax(r: &mut Registers, _: u8) -> u8 {
    r.a & r.x
}

/// ANC: A &= M; C = N.
pub fn anc(r: &mut Registers, value: u8) -> u8 {
    alu::and(r, value);
    r.p.set(Status::CARRY, r.a & 0x80 != 0);
    r.a
}

/// ALR: A = (A & M) >> 1.
pub fn alr(r: &mut Registers, value: u8) -> u8 {
    let and = r.a & value;
    r.a = shifts::lsr(r, and);
    r.a
}

/// ARR: A = (A & M) rotated right, with its own carry and overflow rules.
///
/// In binary mode C is bit 6 of the result and V is bit 6 XOR bit 5. In
/// decimal mode N, Z and V come from the binary rotate and both nibbles are
/// then BCD-fixed from the pre-rotate value.
pub fn arr(r: &mut Registers, value: u8) -> u8 {
    let and = r.a & value;
    let carry_in = if r.p.contains(Status::CARRY) { 0x80 } else { 0x00 };
    let mut result = (and >> 1) | carry_in;

    let mut p = r
        .p
        .difference(Status::NEGATIVE | Status::OVERFLOW | Status::ZERO | Status::CARRY);
    if r.p.contains(Status::DECIMAL) {
        if carry_in != 0 {
            p |= Status::NEGATIVE;
        }
        if result == 0 {
            p |= Status::ZERO;
        }
        if (and ^ result) & 0x40 != 0 {
            p |= Status::OVERFLOW;
        }
        if (and & 0x0F) + (and & 0x01) > 5 {
            result = (result & 0xF0) | (result.wrapping_add(6) & 0x0F);
        }
        if u16::from(and & 0xF0) + u16::from(and & 0x10) > 0x50 {
            p |= Status::CARRY;
            result = result.wrapping_add(0x60);
        }
        r.p = p;
    } else {
        r.p = p;
        r.p.update_nz(result);
        r.p.set(Status::CARRY, result & 0x40 != 0);
        r.p.set(Status::OVERFLOW, ((result >> 6) ^ (result >> 5)) & 1 != 0);
    }

    r.a = result;
    result
}

/// ANE (XAA): A = (A | MAGIC) & X & M.
pub fn ane(r: &mut Registers, value: u8) -> u8 {
    r.a = (r.a | MAGIC) & r.x & value;
    r.p.update_nz(r.a);
    r.a
}

/// LXA: A = X = (A | MAGIC) & M.
pub fn lxa(r: &mut Registers, value: u8) -> u8 {
    let result = (r.a | MAGIC) & value;
    lax(r, result)
}

/// SBX (AXS): X = (A & X) - M, flags as CMP, decimal ignored.
pub fn sbx(r: &mut Registers, value: u8) -> u8 {
    let ax = r.a & r.x;
    alu::compare(&mut r.p, ax, value);
    r.x = ax.wrapping_sub(value);
    r.x
}

/// LAS: A = X = S = M & S.
pub fn las(r: &mut Registers, value: u8) -> u8 {
    let result = value & r.s;
    r.s = result;
    lax(r, result)
}

/// TAS (SHS): S = A & X; M = S & (H + 1).
pub fn tas(r: &mut Registers, high_plus_one: u8) -> u8 {
    r.s = r.a & r.x;
    r.s & high_plus_one
}

/// SHA (AHX): M = A & X & (H + 1).
pub fn sha(r: &mut Registers, high_plus_one: u8) -> u8 {
    r.a & r.x & high_plus_one
}

/// SHX: M = X & (H + 1).
pub fn shx(r: &mut Registers, high_plus_one: u8) -> u8 {
    r.x & high_plus_one
}

/// SHY: M = Y & (H + 1).
pub fn shy(r: &mut Registers, high_plus_one: u8) -> u8 {
    r.y & high_plus_one
}
