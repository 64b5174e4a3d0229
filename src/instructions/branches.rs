//! # Branch Conditions
//!
//! Each function returns 1 when its branch is taken and 0 otherwise. The
//! branch micro-operations handle the offset, the extra taken cycle and the
//! page-cross fix-up.

use crate::{Registers, Status};

fn taken(condition: bool) -> u8 {
    u8::from(condition)
}

/// BPL: taken when N = 0.
pub fn bpl(r: &mut Registers, _: u8) -> u8 {
    taken(!r.p.contains(Status::NEGATIVE))
}

/// BMI: taken when N = 1.
pub fn bmi(r: &mut Registers, _: u8) -> u8 {
    taken(r.p.contains(Status::NEGATIVE))
}

/// BVC: taken when V = 0.
pub fn bvc(r: &mut Registers, _: u8) -> u8 {
    taken(!r.p.contains(Status::OVERFLOW))
}

/// BVS: taken when V = 1.
pub fn bvs(r: &mut Registers, _: u8) -> u8 {
    taken(r.p.contains(Status::OVERFLOW))
}

/// BCC: taken when C = 0.
pub fn bcc(r: &mut Registers, _: u8) -> u8 {
    taken(!r.p.contains(Status::CARRY))
}

/// BCS: taken when C = 1.
pub fn bcs(r: &mut Registers, _: u8) -> u8 {
    taken(r.p.contains(Status::CARRY))
}

/// BNE: taken when Z = 0.
pub fn bne(r: &mut Registers, _: u8) -> u8 {
    taken(!r.p.contains(Status::ZERO))
}

/// BEQ: taken when Z = 1.
pub fn beq(r: &mut Registers, _: u8) -> u8 {
    taken(r.p.contains(Status::ZERO))
}
