//! # Stack Instructions
//!
//! The push/pull bus cycles live in the microcode; these functions only
//! supply the byte pushed or consume the byte pulled.
//!
//! - PHA: push A
//! - PHP: push P with B and the unused bit set
//! - PLA: pull A (updates N and Z)
//! - PLP: pull P, ignoring B

use crate::{Registers, Status};

/// PHA: value pushed is A.
pub fn pha(r: &mut Registers, _: u8) -> u8 {
    r.a
}

/// PHP: value pushed is P | B | U.
pub fn php(r: &mut Registers, _: u8) -> u8 {
    r.p.pushed_by_software()
}

/// PLA: A = pulled byte.
pub fn pla(r: &mut Registers, value: u8) -> u8 {
    r.a = value;
    r.p.update_nz(value);
    value
}

/// PLP: P = pulled byte without B, with U forced on.
pub fn plp(r: &mut Registers, value: u8) -> u8 {
    r.p = Status::from_byte(value) - Status::BREAK;
    r.p.bits()
}
