//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::{DisassemblyError, Instruction};
use crate::opcodes::OPCODE_TABLE;

/// Decode the instruction starting at `bytes[offset]`, labelled `address`.
pub fn decode_at(
    bytes: &[u8],
    offset: usize,
    address: u16,
) -> Result<Instruction, DisassemblyError> {
    match bytes.get(offset..) {
        Some(rest) if !rest.is_empty() => decode_instruction(rest, address),
        _ => Err(DisassemblyError::OffsetOutOfRange {
            offset,
            len: bytes.len(),
        }),
    }
}

/// Decode a single instruction from the start of a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
pub fn decode_instruction(bytes: &[u8], address: u16) -> Result<Instruction, DisassemblyError> {
    let Some(&opcode) = bytes.first() else {
        return Err(DisassemblyError::OffsetOutOfRange { offset: 0, len: 0 });
    };
    let metadata = &OPCODE_TABLE[opcode as usize];
    let size = metadata.size_bytes as usize;

    if bytes.len() < size {
        return Err(DisassemblyError::Truncated {
            opcode,
            needed: metadata.size_bytes,
            available: bytes.len(),
        });
    }

    Ok(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes: bytes[1..size].to_vec(),
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}

/// A raw data byte, used where an instruction cannot be decoded.
pub fn data_byte(byte: u8, address: u16) -> Instruction {
    Instruction {
        address,
        opcode: byte,
        mnemonic: ".byte",
        addressing_mode: AddressingMode::Implicit,
        operand_bytes: vec![byte],
        size_bytes: 1,
        base_cycles: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lda_immediate() {
        let instr = decode_instruction(&[0xA9, 0x42], 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let instr = decode_instruction(&[0x8D, 0x00, 0x80], 0x0000).unwrap();

        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_undocumented() {
        let instr = decode_instruction(&[0xA7, 0x10], 0x1000).unwrap();
        assert_eq!(instr.mnemonic, "LAX");
        assert_eq!(instr.addressing_mode, AddressingMode::ZeroPage);

        let instr = decode_instruction(&[0x02], 0x1000).unwrap();
        assert_eq!(instr.mnemonic, "KIL");
        assert_eq!(instr.size_bytes, 1);
    }

    #[test]
    fn test_decode_at_past_end() {
        assert_eq!(
            decode_at(&[0xEA, 0xEA], 5, 0),
            Err(DisassemblyError::OffsetOutOfRange { offset: 5, len: 2 })
        );
    }
}
