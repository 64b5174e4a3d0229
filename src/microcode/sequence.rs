//! Sequencing cells: opcode fetch, jam, stack traffic, jumps, branches and
//! the BRK/IRQ/NMI/RESET row.

use crate::instructions::Alu;
use crate::registers::Interrupt;
use crate::{BusInput, BusOutput, Registers, Status};

/// Terminal cell of every row.
///
/// Receives the opcode read by the previous clock and restarts the cursor
/// on its row. A pending interrupt replaces the opcode with `$00` and leaves
/// PC on the interrupted instruction.
pub(super) fn fetch(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    match r.poll_interrupt() {
        Some(kind) => {
            r.servicing = Some(kind);
            r.dispatch(0x00);
        }
        None => {
            r.servicing = None;
            r.pc = r.pc.wrapping_add(1);
            r.dispatch(input.data);
        }
    }
    BusOutput::read(r.pc).with_sync()
}

/// Halted: same address forever, no sync, until reset.
pub(super) fn jam(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    r.repeat();
    BusOutput::read(r.pc)
}

/// Stack push with post-decrement. During reset the write is suppressed and
/// becomes a read, but S still moves.
fn push_byte(r: &mut Registers, value: u8) -> BusOutput {
    let address = r.stack_address();
    r.s = r.s.wrapping_sub(1);
    if r.servicing == Some(Interrupt::Reset) {
        BusOutput::read(address)
    } else {
        BusOutput::write(address, value)
    }
}

/// PHA / PHP.
pub(super) fn push(r: &mut Registers, _: BusInput, alu: Alu) -> BusOutput {
    let value = alu(r, 0);
    push_byte(r, value)
}

/// Dummy read of the current stack slot.
pub(super) fn stack_peek(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    BusOutput::read(r.stack_address())
}

/// Pre-increment S and read the slot it now points at.
pub(super) fn stack_pull(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    r.s = r.s.wrapping_add(1);
    BusOutput::read(r.stack_address())
}

/// RTI: status arrives, PCL is next.
pub(super) fn pull_status(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    alu(r, input.data);
    r.s = r.s.wrapping_add(1);
    BusOutput::read(r.stack_address())
}

/// PCL arrives from the stack, PCH is next.
pub(super) fn pull_pcl(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.data = input.data;
    r.s = r.s.wrapping_add(1);
    BusOutput::read(r.stack_address())
}

/// PC = incoming byte : data latch.
pub(super) fn load_pc(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.pc = (u16::from(input.data) << 8) | u16::from(r.data);
    BusOutput::read(r.pc)
}

/// RTS: step past the last byte of the JSR.
pub(super) fn increment_pc(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    BusOutput::read(r.pc)
}

/// JSR: target low byte arrives; the high byte is fetched only after the
/// return address is pushed.
pub(super) fn jsr_lo(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    r.addr = u16::from(input.data);
    BusOutput::read(r.stack_address())
}

pub(super) fn push_pch(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    let value = (r.pc >> 8) as u8;
    push_byte(r, value)
}

pub(super) fn push_pcl(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    let value = r.pc as u8;
    push_byte(r, value)
}

/// JMP abs / JSR: PC = incoming high byte : latched low byte.
pub(super) fn jump(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.pc = (u16::from(input.data) << 8) | r.addr;
    BusOutput::read(r.pc)
}

/// JMP (ind): the pointer's high-byte fetch does not carry into the page.
pub(super) fn indirect_jump_lo(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.data = input.data;
    let pointer = r.addr;
    BusOutput::read((pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF))
}

/// Offset arrives; an untaken branch skips both optional columns.
pub(super) fn branch(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    r.pc = r.pc.wrapping_add(1);
    r.data = input.data;
    if alu(r, 0) == 0 {
        r.skip(2);
    }
    BusOutput::read(r.pc)
}

/// Taken branch: the offset is added to PCL first; the page fix-up column
/// only runs when PCH has to change.
pub(super) fn branch_taken(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    let target = r.pc.wrapping_add(r.data as i8 as u16);
    let out = BusOutput::read((r.pc & 0xFF00) | (target & 0x00FF));
    if (target & 0xFF00) == (r.pc & 0xFF00) {
        r.skip(1);
    }
    r.pc = target;
    out
}

/// BRK row, first clock: software BRK skips its signature byte.
pub(super) fn brk_start(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    if r.servicing.is_none() {
        r.pc = r.pc.wrapping_add(1);
    }
    push_pch(r, input, alu)
}

/// Pushes P and selects the vector. An NMI latched by now takes over the
/// vector of a BRK or IRQ.
pub(super) fn push_status(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    let value = match r.servicing {
        None => r.p.pushed_by_software(),
        Some(_) => r.p.pushed_by_interrupt(),
    };
    let vector = match r.servicing {
        Some(Interrupt::Reset) => Interrupt::Reset,
        Some(Interrupt::Nmi) => Interrupt::Nmi,
        _ if r.nmi_pending => {
            r.nmi_pending = false;
            Interrupt::Nmi
        }
        Some(kind) => kind,
        None => Interrupt::Irq,
    };
    r.addr = vector.vector();
    push_byte(r, value)
}

pub(super) fn vector_lo(r: &mut Registers, _: BusInput, _: Alu) -> BusOutput {
    r.p.insert(Status::IRQ_DISABLE);
    BusOutput::read(r.addr)
}

pub(super) fn vector_hi(r: &mut Registers, input: BusInput, _: Alu) -> BusOutput {
    r.data = input.data;
    BusOutput::read(r.addr.wrapping_add(1))
}

pub(super) fn vector_jump(r: &mut Registers, input: BusInput, alu: Alu) -> BusOutput {
    r.servicing = None;
    load_pc(r, input, alu)
}
