//! Effective-address cells.
//!
//! One function per clock of address resolution. Each receives the byte read
//! on the previous clock and returns the access for this one. The `WRITE`
//! parameter selects whether the final access of a mode is the store itself
//! (value supplied by the ALU operation) or a read of the operand.

use super::access;
use crate::instructions::Alu;
use crate::{BusInput, BusOutput, Registers};

fn index<const Y: bool>(r: &Registers) -> u8 {
    if Y {
        r.y
    } else {
        r.x
    }
}

/// Operand byte is a zero-page address; access it.
pub(super) fn zero_page<const WRITE: bool>(
    r: &mut Registers,
    input: BusInput,
    alu: Alu,
) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    let address = u16::from(input.data);
    r.addr = address;
    access::<WRITE>(r, address, alu)
}

/// Operand byte is a zero-page base or pointer; dummy read of it.
pub(super) fn zero_page_base(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    r.addr = u16::from(input.data);
    BusOutput::read(r.addr)
}

/// Adds the index to the zero-page base without leaving page zero.
///
/// Also the pointer-indexing clock of `(zp,X)`.
pub(super) fn zero_page_indexed<const Y: bool, const WRITE: bool>(
    r: &mut Registers,
    _: BusInput,
    alu: Alu,
) -> BusOutput {
    let address = (r.addr + u16::from(index::<Y>(r))) & 0x00FF;
    r.addr = address;
    access::<WRITE>(r, address, alu)
}

/// Latches the low address byte and reads the high one.
pub(super) fn absolute_lo(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    r.addr = u16::from(input.data);
    BusOutput::read(r.pc)
}

/// Completes an absolute address and accesses it.
pub(super) fn absolute_hi<const WRITE: bool>(
    r: &mut Registers,
    input: BusInput,
    alu: Alu,
) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    let address = (u16::from(input.data) << 8) | r.addr;
    r.addr = address;
    access::<WRITE>(r, address, alu)
}

/// Adds the index to the low byte while the high byte arrives.
///
/// The access goes to the un-carried address. When `ALWAYS_FIX` is false
/// and no carry occurred, that access already hit the right location and the
/// fix-up column is skipped.
fn index_high<const ALWAYS_FIX: bool>(r: &mut Registers, high: u8, index: u8) -> BusOutput {
    let base = (u16::from(high) << 8) | r.addr;
    let effective = base.wrapping_add(u16::from(index));
    r.data = high;
    r.addr = effective;
    if !ALWAYS_FIX && (effective & 0xFF00) == (base & 0xFF00) {
        r.skip(1);
    }
    BusOutput::read((base & 0xFF00) | (effective & 0x00FF))
}

/// High byte of `abs,X` / `abs,Y`.
pub(super) fn absolute_indexed_hi<const Y: bool, const ALWAYS_FIX: bool>(
    r: &mut Registers,
    input: BusInput,
    _: Alu,
) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    let index = index::<Y>(r);
    index_high::<ALWAYS_FIX>(r, input.data, index)
}

/// Pointer low byte arrives; read the high byte with zero-page wrap.
pub(super) fn indirect_lo(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    let pointer_hi = (r.addr + 1) & 0x00FF;
    r.addr = u16::from(input.data);
    BusOutput::read(pointer_hi)
}

/// Pointer high byte arrives for `(zp,X)`; access the target.
pub(super) fn indirect_hi<const WRITE: bool>(
    r: &mut Registers,
    input: BusInput,
    alu: Alu,
) -> BusOutput {
    let address = (u16::from(input.data) << 8) | r.addr;
    r.addr = address;
    access::<WRITE>(r, address, alu)
}

/// Pointer high byte arrives for `(zp),Y`; Y is added as for `abs,Y`.
pub(super) fn indirect_y_hi<const ALWAYS_FIX: bool>(
    r: &mut Registers,
    input: BusInput,
    _: Alu,
) -> BusOutput {
    let index = r.y;
    index_high::<ALWAYS_FIX>(r, input.data, index)
}

/// Page-crossing fix-up: access the carried address.
pub(super) fn fix<const WRITE: bool>(r: &mut Registers, _: BusInput, alu: Alu) -> BusOutput {
    let address = r.addr;
    access::<WRITE>(r, address, alu)
}

/// Fix-up clock of SHA/SHX/SHY/TAS.
///
/// The stored value is ANDed with the base high byte plus one, and on a page
/// crossing that value also replaces the high byte of the address.
pub(super) fn unstable_store(r: &mut Registers, _: BusInput, alu: Alu) -> BusOutput {
    let base_hi = r.data;
    let value = alu(r, base_hi.wrapping_add(1));
    let mut address = r.addr;
    if (address >> 8) as u8 != base_hi {
        address = (u16::from(value) << 8) | (address & 0x00FF);
    }
    BusOutput::write(address, value)
}
