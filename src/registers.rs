//! # Register File
//!
//! Everything the engine remembers between clocks. The programmer-visible
//! registers are public; the internal latches and the micro-step cursor are
//! only mutated by micro-operations and exposed read-only.
//!
//! ## Power-on
//!
//! [`Registers::new`] does not pretend the part has already reset: it arms
//! the reset micro-sequence, which runs on the first seven calls to
//! [`step`](crate::step) and loads PC from the vector at `$FFFC`.

use crate::microcode::FETCH_CURSOR;
use crate::status::Status;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Why the BRK row is running.
///
/// Hardware interrupts and reset share the BRK microcode; this records which
/// variant the row has to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// Maskable interrupt, vector `$FFFE`.
    Irq,
    /// Non-maskable interrupt, vector `$FFFA`.
    Nmi,
    /// Reset, vector `$FFFC`. The stack writes become reads.
    Reset,
}

impl Interrupt {
    /// Address of the low byte of this interrupt's vector.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Irq => 0xFFFE,
            Interrupt::Nmi => 0xFFFA,
            Interrupt::Reset => 0xFFFC,
        }
    }
}

/// The 6502 register file plus the engine's internal latches.
///
/// # Examples
///
/// ```
/// use cycle6502::Registers;
///
/// let regs = Registers::ready_at(0x0200);
/// assert_eq!(regs.pc, 0x0200);
/// assert_eq!(regs.s, 0xFD);
/// assert_eq!(regs.cursor() % 8, 1); // parked on an opcode fetch cell
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (offset into page `$01`)
    pub s: u8,

    /// Processor status
    pub p: Status,

    /// Program counter: the next instruction-stream byte to fetch
    pub pc: u16,

    /// Effective-address latch used while an addressing mode resolves
    pub(crate) addr: u16,

    /// Data latch: RMW result, vector/pointer low byte, or unindexed high byte
    pub(crate) data: u8,

    /// `opcode * 8 + column` of the next cell to execute
    pub(crate) cursor: u16,

    /// IRQ requested and unmasked as of the previous clock
    pub(crate) irq_pending: bool,

    /// NMI edge seen and not yet serviced
    pub(crate) nmi_pending: bool,

    /// NMI line level on the previous clock, for edge detection
    pub(crate) nmi_level: bool,

    /// Interrupt being serviced by the BRK row, `None` for a software BRK
    pub(crate) servicing: Option<Interrupt>,
}

impl Registers {
    /// Power-on state with the reset sequence armed.
    ///
    /// S starts at `$00`; the three suppressed pushes of the reset sequence
    /// leave it at `$FD`.
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0,
            p: Status::UNUSED,
            pc: 0,
            addr: 0,
            data: 0,
            cursor: 0,
            irq_pending: false,
            nmi_pending: false,
            nmi_level: false,
            servicing: Some(Interrupt::Reset),
        }
    }

    /// A register file parked on an opcode fetch at `pc`.
    ///
    /// The next call to [`step`](crate::step) consumes the byte the host read
    /// from `pc` as an opcode. A, X, Y are zero, S is `$FD` and only the
    /// unused status bit is set.
    pub const fn ready_at(pc: u16) -> Self {
        Self {
            s: 0xFD,
            pc,
            cursor: FETCH_CURSOR,
            servicing: None,
            ..Self::new()
        }
    }

    /// Re-arms the reset sequence.
    ///
    /// This is the only way out of a jammed state. A, X, Y, S and P keep
    /// their values; the sequence itself moves S down by three and sets I.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.servicing = Some(Interrupt::Reset);
        self.irq_pending = false;
        self.nmi_pending = false;
    }

    /// The micro-step cursor (`opcode * 8 + column`).
    pub const fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Opcode whose row the cursor is in.
    pub const fn opcode(&self) -> u8 {
        (self.cursor >> 3) as u8
    }

    /// Column of the next cell within the current row.
    pub const fn column(&self) -> u8 {
        (self.cursor & 7) as u8
    }

    /// Internal effective-address latch.
    pub const fn address_latch(&self) -> u16 {
        self.addr
    }

    /// Internal data latch.
    pub const fn data_latch(&self) -> u8 {
        self.data
    }

    /// Interrupt the BRK row is currently servicing, if any.
    pub const fn servicing(&self) -> Option<Interrupt> {
        self.servicing
    }

    /// True when an NMI edge has been latched and not yet taken.
    pub const fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Full address of the current stack slot.
    pub const fn stack_address(&self) -> u16 {
        STACK_PAGE | self.s as u16
    }

    /// Restarts the cursor at column 0 of `opcode`'s row.
    pub(crate) fn dispatch(&mut self, opcode: u8) {
        self.cursor = u16::from(opcode) << 3;
    }

    /// Skips `cells` optional columns of the current row.
    pub(crate) fn skip(&mut self, cells: u16) {
        self.cursor += cells;
    }

    /// Points the cursor back at the cell that is executing.
    pub(crate) fn repeat(&mut self) {
        self.cursor -= 1;
    }

    /// Latches the request lines at the end of a clock.
    ///
    /// `irq_unmasked` is the IRQ line gated by I as it stood *before* the
    /// clock's micro-operation ran, which is what delays CLI/SEI/PLP by one
    /// instruction.
    pub(crate) fn sample_lines(&mut self, irq_unmasked: bool, nmi: bool) {
        self.irq_pending = irq_unmasked;
        if nmi && !self.nmi_level {
            self.nmi_pending = true;
        }
        self.nmi_level = nmi;
    }

    /// Takes the highest-priority interrupt pending at an instruction
    /// boundary.
    pub(crate) fn poll_interrupt(&mut self) -> Option<Interrupt> {
        if self.nmi_pending {
            self.nmi_pending = false;
            Some(Interrupt::Nmi)
        } else if self.irq_pending {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_arms_reset() {
        let regs = Registers::new();
        assert_eq!(regs.cursor(), 0);
        assert_eq!(regs.servicing(), Some(Interrupt::Reset));
        assert!(regs.p.contains(Status::UNUSED));
    }

    #[test]
    fn test_cursor_projection() {
        let mut regs = Registers::new();
        regs.dispatch(0xA9);
        assert_eq!(regs.cursor(), 0xA9 * 8);
        assert_eq!(regs.opcode(), 0xA9);
        assert_eq!(regs.column(), 0);

        regs.skip(3);
        assert_eq!(regs.opcode(), 0xA9);
        assert_eq!(regs.column(), 3);
    }

    #[test]
    fn test_nmi_is_edge_triggered() {
        let mut regs = Registers::new();
        regs.sample_lines(false, true);
        assert!(regs.nmi_pending());
        assert_eq!(regs.poll_interrupt(), Some(Interrupt::Nmi));

        // Line still held: no new edge
        regs.sample_lines(false, true);
        assert_eq!(regs.poll_interrupt(), None);

        regs.sample_lines(false, false);
        regs.sample_lines(false, true);
        assert_eq!(regs.poll_interrupt(), Some(Interrupt::Nmi));
    }

    #[test]
    fn test_nmi_wins_over_irq() {
        let mut regs = Registers::new();
        regs.sample_lines(true, true);
        assert_eq!(regs.poll_interrupt(), Some(Interrupt::Nmi));
        assert_eq!(regs.poll_interrupt(), Some(Interrupt::Irq));
    }

    #[test]
    fn test_stack_address() {
        let mut regs = Registers::ready_at(0x8000);
        assert_eq!(regs.stack_address(), 0x01FD);
        regs.s = 0x00;
        assert_eq!(regs.stack_address(), 0x0100);
    }
}
