//! # 6502 Instruction Semantics
//!
//! This module contains what each instruction *does*, separated from *when*
//! it does it. Every operation has the same shape:
//!
//! ```text
//! fn(&mut Registers, operand: u8) -> u8
//! ```
//!
//! and is paired with a micro-operation by the microcode table:
//!
//! - **reads** receive the byte on the data bus; the return value is unused
//! - **stores** return the byte to drive onto the bus (the operand is the
//!   `H+1` mask used by the unstable SHA/SHX/SHY/TAS stores)
//! - **read-modify-write** operations receive the original byte and return
//!   the modified one
//! - **implied** operations ignore the operand
//! - **branch conditions** return non-zero when the branch is taken
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: NOP and the placeholder used by pure sequencing cells
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **undocumented**: the stable and unstable illegal opcodes

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
pub mod undocumented;

use crate::Registers;

/// The semantic half of a micro-operation.
pub type Alu = fn(&mut Registers, u8) -> u8;
