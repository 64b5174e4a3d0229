//! # Control Instructions
//!
//! The control-flow instructions (JMP, JSR, RTS, RTI, BRK) are pure bus
//! sequencing and live entirely in the microcode. What remains here is NOP
//! and the placeholder paired with cells that have no semantic work.

use crate::Registers;

/// NOP: does nothing. The multi-byte illegal NOPs still perform their
/// operand reads through the microcode.
pub fn nop(_: &mut Registers, value: u8) -> u8 {
    value
}

/// Placeholder paired with sequencing-only cells (fetch, pushes of PC,
/// vector reads, jam).
pub fn none(_: &mut Registers, _: u8) -> u8 {
    0
}
