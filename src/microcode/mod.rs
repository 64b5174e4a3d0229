//! # Microcode Engine
//!
//! The dispatch table and the stepper that walks it.
//!
//! Every instruction is a row of up to eight cells, one per clock. A cell is
//! a [`MicroOp`]: a *cycle* function that performs the bus/addressing work
//! of that clock, paired with the instruction's *ALU* function (see
//! [`crate::instructions`]) which supplies the semantics. The same cycle
//! functions are therefore shared by every instruction using an addressing
//! mode, and the table row for e.g. `LDA abs,X` differs from `EOR abs,X` only
//! in the ALU half.
//!
//! ## Pipelining
//!
//! The cell invoked on clock *k* receives the byte the host read during clock
//! *k − 1* and returns the access for clock *k*. The last cell of every row
//! is the fetch cell: it receives the next opcode, re-arms the cursor on that
//! opcode's row and asserts sync.
//!
//! ## Construction
//!
//! [`MICROCODE`] is built at compile time by projecting
//! [`OPCODES`](crate::opcodes::OPCODES) through the per-sequence step lists
//! below. A `const` assertion checks every row: cells are contiguous, only
//! the last one fetches, and the row length equals the documented cycle
//! count plus the optional page-crossing/branch columns.

mod addressing;
mod execute;
mod sequence;

use crate::addressing::AddressingMode;
use crate::instructions::Alu;
use crate::opcodes::{Opcode, Sequence, OPCODES};
use crate::{BusInput, BusOutput, Registers, Status};

/// The addressing/sequencing half of a micro-operation.
pub type CycleFn = fn(&mut Registers, BusInput, Alu) -> BusOutput;

/// What a cell does to the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Ordinary clock of work.
    Work,
    /// Opcode fetch: terminal cell of a row, asserts sync.
    Fetch,
    /// Jam: re-arms itself forever.
    Halt,
}

/// One clock of one instruction.
#[derive(Debug, Clone, Copy)]
pub struct MicroOp {
    /// Name of the cycle function, for diagnostics.
    pub name: &'static str,
    /// Bus/addressing work of the clock.
    pub cycle: CycleFn,
    /// Instruction semantics handed to the cycle function.
    pub alu: Alu,
    /// Effect on the instruction stream.
    pub role: Role,
}

/// Cursor of the NOP row's fetch cell.
///
/// A register file parked here treats the next data-bus byte as an opcode.
pub const FETCH_CURSOR: u16 = 0xEA * 8 + 1;

/// The 256 × 8 dispatch table, row = opcode, column = clock.
pub static MICROCODE: [[Option<MicroOp>; 8]; 256] = build();

/// Advances the processor by one clock.
///
/// `input` carries the byte read for the previous [`BusOutput`] and the
/// current request-line levels. The return value is the access the host must
/// perform now. The function is pure: the register file is its only state.
///
/// # Panics
///
/// Panics if the cursor lands on an empty cell. The table is validated at
/// compile time, so this indicates a corrupted register file.
///
/// # Examples
///
/// ```
/// use cycle6502::{step, BusInput, Registers, Status};
///
/// let mut regs = Registers::ready_at(0x0200);
/// regs.p.insert(Status::CARRY);
///
/// // Clock 1: the host read CLC ($18) at $0200
/// let out = step(&mut regs, BusInput::new(0x18));
/// assert!(out.sync);
///
/// // Clock 2: implied instruction completes, next opcode read at $0201
/// let out = step(&mut regs, BusInput::new(0x00));
/// assert_eq!(out.address, 0x0201);
/// assert!(!regs.p.contains(Status::CARRY));
/// ```
pub fn step(regs: &mut Registers, input: BusInput) -> BusOutput {
    if input.rst {
        regs.reset();
        return BusOutput::read(regs.pc);
    }

    let irq_unmasked = input.irq && !regs.p.contains(Status::IRQ_DISABLE);
    let cursor = regs.cursor;
    let op = match cell(cursor) {
        Some(op) => op,
        None => panic!(
            "empty microcode cell at cursor {cursor:#06x} (opcode {:#04x}, column {})",
            cursor >> 3,
            cursor & 7
        ),
    };

    regs.cursor = cursor + 1;
    let out = (op.cycle)(regs, input, op.alu);
    regs.sample_lines(irq_unmasked, input.nmi);
    out
}

/// The cell the cursor points at, if populated.
pub fn cell(cursor: u16) -> Option<MicroOp> {
    MICROCODE
        .get(usize::from(cursor >> 3))
        .and_then(|row| row[usize::from(cursor & 7)])
}

/// Role of the cell at `cursor`; `None` for an empty cell.
pub fn role_at(cursor: u16) -> Option<Role> {
    cell(cursor).map(|op| op.role)
}

/// Final access of an addressing mode: a read of the operand, or the store
/// with the value the ALU operation supplies.
fn access<const WRITE: bool>(r: &mut Registers, address: u16, alu: Alu) -> BusOutput {
    if WRITE {
        BusOutput::write(address, alu(r, 0xFF))
    } else {
        BusOutput::read(address)
    }
}

// ========== Step lists ==========

#[derive(Clone, Copy)]
struct Step {
    name: &'static str,
    cycle: CycleFn,
    role: Role,
}

const fn work(name: &'static str, cycle: CycleFn) -> Step {
    Step {
        name,
        cycle,
        role: Role::Work,
    }
}

const R: bool = false;
const W: bool = true;
const X: bool = false;
const Y: bool = true;

const FETCH: Step = Step {
    name: "fetch",
    cycle: sequence::fetch,
    role: Role::Fetch,
};

const JAM: &[Step] = &[Step {
    name: "jam",
    cycle: sequence::jam,
    role: Role::Halt,
}];

const READ_PC: Step = work("read_pc", execute::read_pc);
const OPERAND: Step = work("operand", execute::operand);
const MODIFY: Step = work("modify", execute::modify);
const MODIFY_WRITE: Step = work("modify_write", execute::modify_write);
const ABS_LO: Step = work("absolute_lo", addressing::absolute_lo);
const ZP_BASE: Step = work("zero_page_base", addressing::zero_page_base);

const IMPLIED: &[Step] = &[work("implied", execute::implied), FETCH];
const ACCUMULATOR: &[Step] = &[work("accumulator", execute::accumulator), FETCH];
const IMMEDIATE: &[Step] = &[work("immediate", execute::immediate), FETCH];

const ZP_READ: &[Step] = &[work("zero_page", addressing::zero_page::<R>), OPERAND, FETCH];
const ZP_STORE: &[Step] = &[work("zero_page", addressing::zero_page::<W>), READ_PC, FETCH];
const ZP_MODIFY: &[Step] = &[
    work("zero_page", addressing::zero_page::<R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];

const ZPX_READ: &[Step] = &[
    ZP_BASE,
    work("zero_page_x", addressing::zero_page_indexed::<X, R>),
    OPERAND,
    FETCH,
];
const ZPY_READ: &[Step] = &[
    ZP_BASE,
    work("zero_page_y", addressing::zero_page_indexed::<Y, R>),
    OPERAND,
    FETCH,
];
const ZPX_STORE: &[Step] = &[
    ZP_BASE,
    work("zero_page_x", addressing::zero_page_indexed::<X, W>),
    READ_PC,
    FETCH,
];
const ZPY_STORE: &[Step] = &[
    ZP_BASE,
    work("zero_page_y", addressing::zero_page_indexed::<Y, W>),
    READ_PC,
    FETCH,
];
const ZPX_MODIFY: &[Step] = &[
    ZP_BASE,
    work("zero_page_x", addressing::zero_page_indexed::<X, R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];

const ABS_READ: &[Step] = &[
    ABS_LO,
    work("absolute_hi", addressing::absolute_hi::<R>),
    OPERAND,
    FETCH,
];
const ABS_STORE: &[Step] = &[
    ABS_LO,
    work("absolute_hi", addressing::absolute_hi::<W>),
    READ_PC,
    FETCH,
];
const ABS_MODIFY: &[Step] = &[
    ABS_LO,
    work("absolute_hi", addressing::absolute_hi::<R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];

const ABSX_READ: &[Step] = &[
    ABS_LO,
    work("absolute_x_hi", addressing::absolute_indexed_hi::<X, false>),
    work("fix", addressing::fix::<R>),
    OPERAND,
    FETCH,
];
const ABSY_READ: &[Step] = &[
    ABS_LO,
    work("absolute_y_hi", addressing::absolute_indexed_hi::<Y, false>),
    work("fix", addressing::fix::<R>),
    OPERAND,
    FETCH,
];
const ABSX_STORE: &[Step] = &[
    ABS_LO,
    work("absolute_x_hi", addressing::absolute_indexed_hi::<X, true>),
    work("fix", addressing::fix::<W>),
    READ_PC,
    FETCH,
];
const ABSY_STORE: &[Step] = &[
    ABS_LO,
    work("absolute_y_hi", addressing::absolute_indexed_hi::<Y, true>),
    work("fix", addressing::fix::<W>),
    READ_PC,
    FETCH,
];
const ABSX_MODIFY: &[Step] = &[
    ABS_LO,
    work("absolute_x_hi", addressing::absolute_indexed_hi::<X, true>),
    work("fix", addressing::fix::<R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];
const ABSY_MODIFY: &[Step] = &[
    ABS_LO,
    work("absolute_y_hi", addressing::absolute_indexed_hi::<Y, true>),
    work("fix", addressing::fix::<R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];
const ABSX_UNSTABLE: &[Step] = &[
    ABS_LO,
    work("absolute_x_hi", addressing::absolute_indexed_hi::<X, true>),
    work("unstable_store", addressing::unstable_store),
    READ_PC,
    FETCH,
];
const ABSY_UNSTABLE: &[Step] = &[
    ABS_LO,
    work("absolute_y_hi", addressing::absolute_indexed_hi::<Y, true>),
    work("unstable_store", addressing::unstable_store),
    READ_PC,
    FETCH,
];

const INDX_READ: &[Step] = &[
    ZP_BASE,
    work("zero_page_x", addressing::zero_page_indexed::<X, R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_hi", addressing::indirect_hi::<R>),
    OPERAND,
    FETCH,
];
const INDX_STORE: &[Step] = &[
    ZP_BASE,
    work("zero_page_x", addressing::zero_page_indexed::<X, R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_hi", addressing::indirect_hi::<W>),
    READ_PC,
    FETCH,
];
const INDX_MODIFY: &[Step] = &[
    ZP_BASE,
    work("zero_page_x", addressing::zero_page_indexed::<X, R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_hi", addressing::indirect_hi::<R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];

const INDY_READ: &[Step] = &[
    work("zero_page", addressing::zero_page::<R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_y_hi", addressing::indirect_y_hi::<false>),
    work("fix", addressing::fix::<R>),
    OPERAND,
    FETCH,
];
const INDY_STORE: &[Step] = &[
    work("zero_page", addressing::zero_page::<R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_y_hi", addressing::indirect_y_hi::<true>),
    work("fix", addressing::fix::<W>),
    READ_PC,
    FETCH,
];
const INDY_MODIFY: &[Step] = &[
    work("zero_page", addressing::zero_page::<R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_y_hi", addressing::indirect_y_hi::<true>),
    work("fix", addressing::fix::<R>),
    MODIFY,
    MODIFY_WRITE,
    READ_PC,
    FETCH,
];
const INDY_UNSTABLE: &[Step] = &[
    work("zero_page", addressing::zero_page::<R>),
    work("indirect_lo", addressing::indirect_lo),
    work("indirect_y_hi", addressing::indirect_y_hi::<true>),
    work("unstable_store", addressing::unstable_store),
    READ_PC,
    FETCH,
];

const BRANCH: &[Step] = &[
    work("branch", sequence::branch),
    work("branch_taken", sequence::branch_taken),
    READ_PC,
    FETCH,
];
const PUSH: &[Step] = &[work("push", sequence::push), READ_PC, FETCH];
const PULL: &[Step] = &[
    work("stack_peek", sequence::stack_peek),
    work("stack_pull", sequence::stack_pull),
    OPERAND,
    FETCH,
];
const JSR: &[Step] = &[
    work("jsr_lo", sequence::jsr_lo),
    work("push_pch", sequence::push_pch),
    work("push_pcl", sequence::push_pcl),
    READ_PC,
    work("jump", sequence::jump),
    FETCH,
];
const RTS: &[Step] = &[
    work("stack_peek", sequence::stack_peek),
    work("stack_pull", sequence::stack_pull),
    work("pull_pcl", sequence::pull_pcl),
    work("load_pc", sequence::load_pc),
    work("increment_pc", sequence::increment_pc),
    FETCH,
];
const RTI: &[Step] = &[
    work("stack_peek", sequence::stack_peek),
    work("stack_pull", sequence::stack_pull),
    work("pull_status", sequence::pull_status),
    work("pull_pcl", sequence::pull_pcl),
    work("load_pc", sequence::load_pc),
    FETCH,
];
const JMP: &[Step] = &[ABS_LO, work("jump", sequence::jump), FETCH];
const JMP_INDIRECT: &[Step] = &[
    ABS_LO,
    work("absolute_hi", addressing::absolute_hi::<R>),
    work("indirect_jump_lo", sequence::indirect_jump_lo),
    work("load_pc", sequence::load_pc),
    FETCH,
];
const BRK: &[Step] = &[
    work("brk_start", sequence::brk_start),
    work("push_pcl", sequence::push_pcl),
    work("push_status", sequence::push_status),
    work("vector_lo", sequence::vector_lo),
    work("vector_hi", sequence::vector_hi),
    work("vector_jump", sequence::vector_jump),
    FETCH,
];

/// Step list for a cycle sequence.
const fn steps(sequence: Sequence) -> &'static [Step] {
    use AddressingMode as M;

    match sequence {
        Sequence::Implied => IMPLIED,
        Sequence::Accumulator => ACCUMULATOR,
        Sequence::Read(M::Immediate) => IMMEDIATE,
        Sequence::Read(M::ZeroPage) => ZP_READ,
        Sequence::Read(M::ZeroPageX) => ZPX_READ,
        Sequence::Read(M::ZeroPageY) => ZPY_READ,
        Sequence::Read(M::Absolute) => ABS_READ,
        Sequence::Read(M::AbsoluteX) => ABSX_READ,
        Sequence::Read(M::AbsoluteY) => ABSY_READ,
        Sequence::Read(M::IndirectX) => INDX_READ,
        Sequence::Read(M::IndirectY) => INDY_READ,
        Sequence::Store(M::ZeroPage) => ZP_STORE,
        Sequence::Store(M::ZeroPageX) => ZPX_STORE,
        Sequence::Store(M::ZeroPageY) => ZPY_STORE,
        Sequence::Store(M::Absolute) => ABS_STORE,
        Sequence::Store(M::AbsoluteX) => ABSX_STORE,
        Sequence::Store(M::AbsoluteY) => ABSY_STORE,
        Sequence::Store(M::IndirectX) => INDX_STORE,
        Sequence::Store(M::IndirectY) => INDY_STORE,
        Sequence::Modify(M::ZeroPage) => ZP_MODIFY,
        Sequence::Modify(M::ZeroPageX) => ZPX_MODIFY,
        Sequence::Modify(M::Absolute) => ABS_MODIFY,
        Sequence::Modify(M::AbsoluteX) => ABSX_MODIFY,
        Sequence::Modify(M::AbsoluteY) => ABSY_MODIFY,
        Sequence::Modify(M::IndirectX) => INDX_MODIFY,
        Sequence::Modify(M::IndirectY) => INDY_MODIFY,
        Sequence::UnstableStore(M::AbsoluteX) => ABSX_UNSTABLE,
        Sequence::UnstableStore(M::AbsoluteY) => ABSY_UNSTABLE,
        Sequence::UnstableStore(M::IndirectY) => INDY_UNSTABLE,
        Sequence::Branch => BRANCH,
        Sequence::Push => PUSH,
        Sequence::Pull => PULL,
        Sequence::Jsr => JSR,
        Sequence::Rts => RTS,
        Sequence::Rti => RTI,
        Sequence::Jmp => JMP,
        Sequence::JmpIndirect => JMP_INDIRECT,
        Sequence::Brk => BRK,
        Sequence::Halt => JAM,
        _ => panic!("no micro-sequence for this access and addressing mode"),
    }
}

// ========== Table construction ==========

const fn row(opcode: Opcode) -> [Option<MicroOp>; 8] {
    let plan = steps(opcode.sequence);
    let mut cells = [None; 8];
    let mut column = 0;
    while column < plan.len() {
        let step = plan[column];
        cells[column] = Some(MicroOp {
            name: step.name,
            cycle: step.cycle,
            alu: opcode.alu,
            role: step.role,
        });
        column += 1;
    }
    cells
}

const fn build() -> [[Option<MicroOp>; 8]; 256] {
    let opcodes = OPCODES;
    let mut table = [[None; 8]; 256];
    let mut index = 0;
    while index < 256 {
        table[index] = row(opcodes[index]);
        index += 1;
    }
    table
}

const fn validate(opcodes: &[Opcode; 256]) {
    let mut index = 0;
    while index < 256 {
        let opcode = opcodes[index];
        let plan = steps(opcode.sequence);
        if plan.is_empty() || plan.len() > 8 {
            panic!("microcode row must hold one to eight cells");
        }

        let last = plan.len() - 1;
        let mut column = 0;
        while column < last {
            if !matches!(plan[column].role, Role::Work) {
                panic!("only the last cell of a row may fetch or halt");
            }
            column += 1;
        }

        match plan[last].role {
            Role::Fetch => {
                let expected =
                    opcode.cycles as usize + opcode.sequence.optional_cycles() as usize;
                if plan.len() != expected {
                    panic!("microcode row length differs from the documented cycle count");
                }
            }
            Role::Halt => {
                if plan.len() != 1 || opcode.cycles != 0 {
                    panic!("halting rows are a single cell with no cycle count");
                }
            }
            Role::Work => panic!("microcode row does not end in an opcode fetch"),
        }
        index += 1;
    }

    let nop = steps(opcodes[(FETCH_CURSOR >> 3) as usize].sequence);
    if !matches!(nop[(FETCH_CURSOR & 7) as usize].role, Role::Fetch) {
        panic!("FETCH_CURSOR does not point at a fetch cell");
    }
}

const _: () = validate(&OPCODES);
