//! Formatting functions for disassembled instructions

use std::fmt::Write as _;

use crate::addressing::AddressingMode;
use crate::disassembler::{DisassemblyOptions, Instruction};

/// Format a single instruction as assembly text
///
/// # Examples
///
/// ```
/// use cycle6502::{disassemble, format_instruction, DisassemblyOptions};
///
/// let listing = disassemble(&[0x8D, 0x00, 0x80], DisassemblyOptions::default());
/// assert_eq!(format_instruction(&listing[0]), "STA $8000");
/// ```
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Render a whole listing, one instruction per line.
///
/// `show_offsets` prefixes each line with the instruction address and
/// `hex_dump` with its raw bytes.
///
/// # Examples
///
/// ```
/// use cycle6502::{disassemble, format_listing, DisassemblyOptions};
///
/// let options = DisassemblyOptions {
///     start_address: 0x8000,
///     hex_dump: true,
///     show_offsets: true,
/// };
/// let listing = disassemble(&[0xA9, 0x42, 0xEA], options);
/// assert_eq!(
///     format_listing(&listing, &options),
///     "8000  A9 42     LDA #$42\n8002  EA        NOP\n"
/// );
/// ```
pub fn format_listing(instructions: &[Instruction], options: &DisassemblyOptions) -> String {
    let mut out = String::new();
    for instr in instructions {
        if options.show_offsets {
            let _ = write!(out, "{:04X}  ", instr.address);
        }
        if options.hex_dump {
            let mut bytes = format!("{:02X}", instr.opcode);
            if instr.mnemonic != ".byte" {
                for byte in &instr.operand_bytes {
                    let _ = write!(bytes, " {byte:02X}");
                }
            }
            let _ = write!(out, "{bytes:<10}");
        }
        out.push_str(&format_instruction(instr));
        out.push('\n');
    }
    out
}

/// Format the operand based on addressing mode
pub(crate) fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    // .byte directive for undecodable data
    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => u16::from(byte),
    };

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${byte:02X}"),
        ZeroPage => format!("${byte:02X}"),
        ZeroPageX => format!("${byte:02X},X"),
        ZeroPageY => format!("${byte:02X},Y"),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add(byte as i8 as u16);
            format!("${target:04X}")
        }
        Absolute => format!("${word:04X}"),
        AbsoluteX => format!("${word:04X},X"),
        AbsoluteY => format!("${word:04X},Y"),
        Indirect => format!("(${word:04X})"),
        IndirectX => format!("(${byte:02X},X)"),
        IndirectY => format!("(${byte:02X}),Y"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(
        address: u16,
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        operand_bytes: Vec<u8>,
    ) -> Instruction {
        Instruction {
            address,
            opcode,
            mnemonic,
            addressing_mode,
            size_bytes: 1 + operand_bytes.len() as u8,
            operand_bytes,
            base_cycles: 2,
        }
    }

    #[test]
    fn test_format_immediate() {
        let instr = instruction(0x8000, 0xA9, "LDA", AddressingMode::Immediate, vec![0x42]);
        assert_eq!(format_instruction(&instr), "LDA #$42");
    }

    #[test]
    fn test_format_absolute() {
        let instr = instruction(0, 0x8D, "STA", AddressingMode::Absolute, vec![0x00, 0x80]);
        assert_eq!(format_instruction(&instr), "STA $8000");
    }

    #[test]
    fn test_format_implied_and_accumulator() {
        let instr = instruction(0x1000, 0xEA, "NOP", AddressingMode::Implicit, vec![]);
        assert_eq!(format_instruction(&instr), "NOP");

        let instr = instruction(0x1000, 0x0A, "ASL", AddressingMode::Accumulator, vec![]);
        assert_eq!(format_instruction(&instr), "ASL A");
    }

    #[test]
    fn test_format_indexed_and_indirect() {
        let cases = [
            (AddressingMode::ZeroPageX, vec![0x10], "$10,X"),
            (AddressingMode::ZeroPageY, vec![0x10], "$10,Y"),
            (AddressingMode::AbsoluteX, vec![0x34, 0x12], "$1234,X"),
            (AddressingMode::AbsoluteY, vec![0x34, 0x12], "$1234,Y"),
            (AddressingMode::Indirect, vec![0xFF, 0x02], "($02FF)"),
            (AddressingMode::IndirectX, vec![0x20], "($20,X)"),
            (AddressingMode::IndirectY, vec![0x20], "($20),Y"),
        ];
        for (mode, bytes, expected) in cases {
            let instr = instruction(0, 0x00, "XXX", mode, bytes);
            assert_eq!(format_operand(&instr), expected, "{mode:?}");
        }
    }

    #[test]
    fn test_format_relative_wraps() {
        let instr = instruction(0xFFFE, 0xD0, "BNE", AddressingMode::Relative, vec![0x04]);
        assert_eq!(format_instruction(&instr), "BNE $0004");

        let instr = instruction(0x0000, 0xD0, "BNE", AddressingMode::Relative, vec![0xFC]);
        assert_eq!(format_instruction(&instr), "BNE $FFFE");
    }

    #[test]
    fn test_format_data_byte() {
        let instr = Instruction {
            address: 0x2000,
            opcode: 0xFF,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: vec![0xFF],
            size_bytes: 1,
            base_cycles: 0,
        };
        assert_eq!(format_instruction(&instr), ".byte $FF");
    }

    #[test]
    fn test_listing_plain() {
        let instrs = vec![
            instruction(0x8000, 0xEA, "NOP", AddressingMode::Implicit, vec![]),
            instruction(0x8001, 0x0A, "ASL", AddressingMode::Accumulator, vec![]),
        ];
        assert_eq!(
            format_listing(&instrs, &DisassemblyOptions::default()),
            "NOP\nASL A\n"
        );
    }
}
