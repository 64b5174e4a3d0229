//! Execute cells: where the ALU operation of an instruction runs.

use crate::instructions::Alu;
use crate::{BusInput, BusOutput, Registers};

/// Implied instruction; the dummy read byte is ignored by every implied op.
pub(super) fn implied(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    alu(r, input.data);
    BusOutput::read(r.pc)
}

/// `ASL A` and friends.
pub(super) fn accumulator(r: &mut Registers, _: BusInput, alu: Alu) -> BusOutput {
    let a = r.a;
    r.a = alu(r, a);
    BusOutput::read(r.pc)
}

/// Immediate operand: consumes an instruction-stream byte.
pub(super) fn immediate(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    alu(r, input.data);
    BusOutput::read(r.pc)
}

/// Operand arrived from memory (or from the stack for PLA/PLP).
pub(super) fn operand(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    alu(r, input.data);
    BusOutput::read(r.pc)
}

/// First write of a read-modify-write: the unmodified value goes back out
/// while the ALU computes the result.
pub(super) fn modify(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    let original = input.data;
    r.data = alu(r, original);
    BusOutput::write(r.addr, original)
}

/// Second write of a read-modify-write.
pub(super) fn modify_write(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    BusOutput::write(r.addr, r.data)
}

/// Read at PC: the next opcode, or a dummy/operand read where the row needs it.
pub(super) fn read_pc(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    BusOutput::read(r.pc)
}
