//! # cycle6502
//!
//! A microcoded, bus-level cycle-accurate NMOS 6502 core.
//!
//! The core never touches memory. Each call to [`step`] advances the
//! processor by exactly one clock: it takes the byte the host read on the
//! previous clock plus the IRQ/NMI/RESET line levels, and returns the
//! address, direction and data of the access the host must perform now.
//! Correctness is measured in that stream of bus transactions, including
//! dummy reads, read-modify-write double writes, undocumented opcodes and
//! jam states.
//!
//! ## Quick Start
//!
//! Drive the engine directly:
//!
//! ```rust
//! use cycle6502::{step, BusInput, Registers};
//!
//! let mut memory = [0u8; 0x10000];
//! memory[0x0200] = 0xA2; // LDX #$00
//! memory[0x0201] = 0x00;
//!
//! let mut regs = Registers::ready_at(0x0200);
//! let mut data = memory[0x0200];
//! for _ in 0..2 {
//!     let out = step(&mut regs, BusInput::new(data));
//!     if out.is_write() {
//!         memory[out.address as usize] = out.data;
//!     } else {
//!         data = memory[out.address as usize];
//!     }
//! }
//! assert_eq!(regs.x, 0x00);
//! assert_eq!(regs.pc, 0x0202);
//! ```
//!
//! Or let [`CPU`] play the host against a [`MemoryBus`]:
//!
//! ```rust
//! use cycle6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.set_reset_vector(0x8000);
//! memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.step(), Ok(2));
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: [`opcodes::OPCODES`] is the single source of
//!   truth. The microcode dispatch table and [`OPCODE_TABLE`] are two
//!   compile-time projections of it.
//! - **Micro-operations**: every clock is a cycle function (addressing and
//!   sequencing) paired with an ALU function (instruction semantics).
//! - **WebAssembly Portability**: no OS dependencies, deterministic execution.
//!
//! ## Modules
//!
//! - `bus` - per-clock bus records
//! - `registers`, `status` - register file and status flags
//! - `microcode` - dispatch table and stepper
//! - `instructions` - ALU operations
//! - `opcodes`, `addressing` - opcode list, metadata table, addressing modes
//! - `disassembler` - byte slices to assembly text
//! - `cpu`, `memory` - host driver and memory contract

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod disassembler;
pub mod instructions;
pub mod memory;
pub mod microcode;
pub mod opcodes;
pub mod registers;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::{BusInput, BusOutput, Direction};
pub use cpu::CPU;
pub use disassembler::{
    disassemble, disassemble_one, format_instruction, format_listing, Disassembly,
    DisassemblyError, DisassemblyOptions, Instruction,
};
pub use memory::{FlatMemory, MemoryBus};
pub use microcode::{step, MicroOp, MICROCODE};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Interrupt, Registers};
pub use status::Status;

/// Errors reported by the whole-instruction host driver.
///
/// The clock-level [`step`] never fails; these describe instructions that
/// cannot complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// A JAM opcode halted the processor. Only a reset recovers.
    #[error("CPU jammed by opcode 0x{opcode:02X} at 0x{address:04X}")]
    Jammed {
        /// The halting opcode
        opcode: u8,
        /// Address the opcode was fetched from
        address: u16,
    },

    /// The RESET line is held, so no instruction can run.
    #[error("RESET line is asserted")]
    ResetAsserted,
}
