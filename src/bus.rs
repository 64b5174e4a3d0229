//! # Bus Contract
//!
//! The records exchanged between the core and the host once per clock.
//!
//! The core never touches memory. Every call to [`step`](crate::step) returns a
//! [`BusOutput`] naming the access the host must perform during the coming
//! cycle; the host performs it and hands the result back inside the next
//! [`BusInput`], together with the current levels of the IRQ, NMI and RESET
//! request lines.
//!
//! ```
//! use cycle6502::{BusInput, BusOutput, Direction};
//!
//! let out = BusOutput::write(0x0200, 0x42);
//! assert_eq!(out.direction, Direction::Write);
//! assert!(!out.sync);
//!
//! let input = BusInput::new(0xEA).with_irq(true);
//! assert_eq!(input.data, 0xEA);
//! assert!(input.irq);
//! ```

/// Direction of a bus cycle, as seen from the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The host drives the data bus; the byte goes into the next [`BusInput`].
    #[default]
    Read,

    /// The processor drives the data bus with [`BusOutput::data`].
    Write,
}

/// What the processor puts on the bus for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BusOutput {
    /// Address bus.
    pub address: u16,

    /// Data bus. Only meaningful when `direction` is [`Direction::Write`].
    pub data: u8,

    /// Read/write line.
    pub direction: Direction,

    /// Set on the cycle that latched a new opcode.
    pub sync: bool,
}

impl BusOutput {
    /// A read of `address`.
    pub const fn read(address: u16) -> Self {
        Self {
            address,
            data: 0,
            direction: Direction::Read,
            sync: false,
        }
    }

    /// A write of `data` to `address`.
    pub const fn write(address: u16, data: u8) -> Self {
        Self {
            address,
            data,
            direction: Direction::Write,
            sync: false,
        }
    }

    /// The same access with the sync line asserted.
    pub const fn with_sync(self) -> Self {
        Self { sync: true, ..self }
    }

    /// Returns true for write cycles.
    pub const fn is_write(&self) -> bool {
        matches!(self.direction, Direction::Write)
    }
}

/// What the host feeds back for one cycle.
///
/// The request lines are modelled as "asserted" booleans; a host wiring real
/// active-low pins inverts them before building the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BusInput {
    /// Byte read during the previous cycle. Ignored after a write cycle.
    pub data: u8,

    /// Maskable interrupt request (level-sensitive).
    pub irq: bool,

    /// Non-maskable interrupt request (edge-sensitive).
    pub nmi: bool,

    /// Reset request. Held asserted, the processor idles; released, it runs
    /// the reset sequence.
    pub rst: bool,
}

impl BusInput {
    /// Input carrying `data` with every request line released.
    pub const fn new(data: u8) -> Self {
        Self {
            data,
            irq: false,
            nmi: false,
            rst: false,
        }
    }

    /// Sets the IRQ line level.
    pub const fn with_irq(self, irq: bool) -> Self {
        Self { irq, ..self }
    }

    /// Sets the NMI line level.
    pub const fn with_nmi(self, nmi: bool) -> Self {
        Self { nmi, ..self }
    }

    /// Sets the RESET line level.
    pub const fn with_rst(self, rst: bool) -> Self {
        Self { rst, ..self }
    }
}
