//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! CLI and SEI change I immediately, but the interrupt poll for the
//! instruction's own boundary has already sampled the old value.

use crate::{Registers, Status};

/// CLC: C = 0.
pub fn clc(r: &mut Registers, _: u8) -> u8 {
    r.p.remove(Status::CARRY);
    0
}

/// SEC: C = 1.
pub fn sec(r: &mut Registers, _: u8) -> u8 {
    r.p.insert(Status::CARRY);
    0
}

/// CLI: I = 0.
pub fn cli(r: &mut Registers, _: u8) -> u8 {
    r.p.remove(Status::IRQ_DISABLE);
    0
}

/// SEI: I = 1.
pub fn sei(r: &mut Registers, _: u8) -> u8 {
    r.p.insert(Status::IRQ_DISABLE);
    0
}

/// CLV: V = 0. There is no SEV.
pub fn clv(r: &mut Registers, _: u8) -> u8 {
    r.p.remove(Status::OVERFLOW);
    0
}

/// CLD: D = 0.
pub fn cld(r: &mut Registers, _: u8) -> u8 {
    r.p.remove(Status::DECIMAL);
    0
}

/// SED: D = 1.
pub fn sed(r: &mut Registers, _: u8) -> u8 {
    r.p.insert(Status::DECIMAL);
    0
}
