//! 6502 Disassembler Module
//!
//! Converts binary machine code into assembly text using the same
//! [`OPCODE_TABLE`](crate::OPCODE_TABLE) the core is generated from, so every
//! one of the 256 opcodes (undocumented ones included) has a mnemonic. The
//! disassembler is pure: it never touches the register file or the
//! microcode.

pub mod decoder;
pub mod formatter;

pub use formatter::{format_instruction, format_listing};

use crate::addressing::AddressingMode;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP"), or `.byte`
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

/// Result of decoding one instruction with [`disassemble_one`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    /// Instruction mnemonic
    pub mnemonic: &'static str,
    /// Rendered operand, empty for implied instructions
    pub operand: String,
    /// Instruction length in bytes
    pub size: u8,
}

/// Malformed disassembly input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisassemblyError {
    /// The slice ends before the instruction's operand bytes.
    #[error("opcode 0x{opcode:02X} needs {needed} bytes but only {available} remain")]
    Truncated {
        opcode: u8,
        needed: u8,
        available: usize,
    },

    /// The requested offset is not inside the slice.
    #[error("offset {offset} is outside a {len}-byte buffer")]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display)
    pub start_address: u16,

    /// Whether to include the instruction bytes in listings
    pub hex_dump: bool,

    /// Whether to prefix listing lines with the instruction address
    pub show_offsets: bool,
}

/// Decodes the instruction at `bytes[offset]`.
///
/// `offset` doubles as the instruction's address, which is what relative
/// branch targets are computed from. Like the 6502 address space, that
/// address wraps at 64 KiB: an offset of `$10004` is labelled `$0004`.
///
/// # Errors
///
/// - [`DisassemblyError::OffsetOutOfRange`] if `offset >= bytes.len()`
/// - [`DisassemblyError::Truncated`] if the operand bytes run past the end
///
/// # Examples
///
/// ```
/// use cycle6502::disassemble_one;
///
/// let d = disassemble_one(&[0xA9, 0x10], 0).unwrap();
/// assert_eq!(d.mnemonic, "LDA");
/// assert_eq!(d.operand, "#$10");
/// assert_eq!(d.size, 2);
/// ```
pub fn disassemble_one(bytes: &[u8], offset: usize) -> Result<Disassembly, DisassemblyError> {
    // Wraps at 64 KiB, like the address bus
    let address = (offset & 0xFFFF) as u16;
    let instr = decoder::decode_at(bytes, offset, address)?;
    Ok(Disassembly {
        mnemonic: instr.mnemonic,
        operand: formatter::format_operand(&instr),
        size: instr.size_bytes,
    })
}

/// Disassemble a byte slice into a vector of instructions
///
/// Decoding never reads past the slice: a final instruction whose operands
/// are cut off is emitted as one `.byte` entry per remaining byte.
///
/// # Examples
///
/// ```
/// use cycle6502::{disassemble, DisassemblyOptions};
///
/// let options = DisassemblyOptions { start_address: 0x8000, ..Default::default() };
/// let listing = disassemble(&[0xEA, 0x4C, 0x00], options);
///
/// assert_eq!(listing[0].mnemonic, "NOP");
/// assert_eq!(listing[1].mnemonic, ".byte");
/// assert_eq!(listing[2].address, 0x8002);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = options.start_address;

    while offset < bytes.len() {
        match decoder::decode_at(bytes, offset, address) {
            Ok(instr) => {
                offset += instr.size_bytes as usize;
                address = address.wrapping_add(instr.size_bytes as u16);
                instructions.push(instr);
            }
            Err(_) => {
                // Only the final instruction can be cut off; the rest is data
                for &byte in &bytes[offset..] {
                    instructions.push(decoder::data_byte(byte, address));
                    address = address.wrapping_add(1);
                }
                break;
            }
        }
    }

    instructions
}
