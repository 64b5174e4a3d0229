//! # Opcode Descriptors
//!
//! This module contains the 256-entry opcode descriptor list that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! Each descriptor names:
//! - Mnemonic (instruction name)
//! - Cycle sequence (the addressing mode plus how the operand is used)
//! - ALU operation (the instruction semantics)
//! - Documented cycle count (excluding page-crossing and branch penalties)
//!
//! Two independent `const` projections consume the list:
//! - [`MICROCODE`](crate::microcode::MICROCODE), the dispatch table
//! - [`OPCODE_TABLE`], the metadata used by the disassembler
//!
//! The list covers the 151 documented NMOS opcodes and all 105 undocumented
//! ones. Opcodes `$0B/$2B` (ANC), `$4B` (ALR), `$6B` (ARR), `$8B` (ANE),
//! `$AB` (LXA), `$CB` (SBX) and `$EB` (SBC) take an immediate operand.

use crate::addressing::AddressingMode;
use crate::instructions::{
    alu::*, branches::*, control::*, flags::*, inc_dec::*, load_store::*, shifts::*, stack::*,
    transfer::*, undocumented::*, Alu,
};

/// The per-clock shape of an instruction.
///
/// Together with an addressing mode this selects the micro-operation row of
/// an opcode: `Read` ends in an operand read handed to the ALU, `Store` ends
/// in a write of the ALU's value, `Modify` performs the read-modify-write
/// double write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sequence {
    /// Single-byte register operation (2 cycles).
    Implied,
    /// Shift/rotate of A (2 cycles).
    Accumulator,
    /// Operand read (including immediate).
    Read(AddressingMode),
    /// Store without reading the destination.
    Store(AddressingMode),
    /// Read-modify-write with the unmodified value written first.
    Modify(AddressingMode),
    /// SHA/SHX/SHY/TAS: store whose value and address depend on the target
    /// high byte.
    UnstableStore(AddressingMode),
    /// Conditional relative branch.
    Branch,
    /// PHA/PHP.
    Push,
    /// PLA/PLP.
    Pull,
    Jsr,
    Rts,
    Rti,
    /// JMP absolute.
    Jmp,
    /// JMP indirect, with the page-wrap bug.
    JmpIndirect,
    /// BRK, also used for IRQ, NMI and RESET.
    Brk,
    /// JAM/KIL: stops the processor.
    Halt,
}

impl Sequence {
    /// Addressing mode the operand bytes are decoded with.
    pub const fn addressing_mode(self) -> AddressingMode {
        match self {
            Sequence::Read(mode)
            | Sequence::Store(mode)
            | Sequence::Modify(mode)
            | Sequence::UnstableStore(mode) => mode,
            Sequence::Accumulator => AddressingMode::Accumulator,
            Sequence::Branch => AddressingMode::Relative,
            Sequence::Jsr | Sequence::Jmp => AddressingMode::Absolute,
            Sequence::JmpIndirect => AddressingMode::Indirect,
            Sequence::Implied
            | Sequence::Push
            | Sequence::Pull
            | Sequence::Rts
            | Sequence::Rti
            | Sequence::Brk
            | Sequence::Halt => AddressingMode::Implicit,
        }
    }

    /// Columns a row may skip: one page-crossing fix-up for indexed reads,
    /// two for a branch (taken, then page-crossing).
    pub const fn optional_cycles(self) -> u8 {
        match self {
            Sequence::Read(AddressingMode::AbsoluteX)
            | Sequence::Read(AddressingMode::AbsoluteY)
            | Sequence::Read(AddressingMode::IndirectY) => 1,
            Sequence::Branch => 2,
            _ => 0,
        }
    }
}

/// One entry of the descriptor list.
#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    /// Instruction mnemonic.
    pub mnemonic: &'static str,
    /// Per-clock shape of the instruction.
    pub sequence: Sequence,
    /// Instruction semantics.
    pub alu: Alu,
    /// Documented cycle count; 0 for halting opcodes.
    pub cycles: u8,
    /// Not part of the documented instruction set.
    pub undocumented: bool,
}

const fn op(mnemonic: &'static str, sequence: Sequence, alu: Alu, cycles: u8) -> Opcode {
    Opcode {
        mnemonic,
        sequence,
        alu,
        cycles,
        undocumented: false,
    }
}

const fn ill(mnemonic: &'static str, sequence: Sequence, alu: Alu, cycles: u8) -> Opcode {
    Opcode {
        undocumented: true,
        ..op(mnemonic, sequence, alu, cycles)
    }
}

const fn kil() -> Opcode {
    ill("KIL", Sequence::Halt, none, 0)
}

use crate::addressing::AddressingMode::{
    Absolute as Abs, AbsoluteX as AbsX, AbsoluteY as AbsY, Immediate as Imm, IndirectX as IndX,
    IndirectY as IndY, ZeroPage as Zp, ZeroPageX as ZpX, ZeroPageY as ZpY,
};
use self::Sequence::{
    Accumulator as Acc, Branch as Bra, Implied as Imp, Modify as Rmw, Read as Rd, Store as St,
    UnstableStore as Ust,
};

/// The descriptor list, indexed by opcode byte.
#[rustfmt::skip]
pub const OPCODES: [Opcode; 256] = [
    /* 00 */ op("BRK", Sequence::Brk, none, 7),
    /* 01 */ op("ORA", Rd(IndX), ora, 6),
    /* 02 */ kil(),
    /* 03 */ ill("SLO", Rmw(IndX), slo, 8),
    /* 04 */ ill("NOP", Rd(Zp), nop, 3),
    /* 05 */ op("ORA", Rd(Zp), ora, 3),
    /* 06 */ op("ASL", Rmw(Zp), asl, 5),
    /* 07 */ ill("SLO", Rmw(Zp), slo, 5),
    /* 08 */ op("PHP", Sequence::Push, php, 3),
    /* 09 */ op("ORA", Rd(Imm), ora, 2),
    /* 0A */ op("ASL", Acc, asl, 2),
    /* 0B */ ill("ANC", Rd(Imm), anc, 2),
    /* 0C */ ill("NOP", Rd(Abs), nop, 4),
    /* 0D */ op("ORA", Rd(Abs), ora, 4),
    /* 0E */ op("ASL", Rmw(Abs), asl, 6),
    /* 0F */ ill("SLO", Rmw(Abs), slo, 6),

    /* 10 */ op("BPL", Bra, bpl, 2),
    /* 11 */ op("ORA", Rd(IndY), ora, 5),
    /* 12 */ kil(),
    /* 13 */ ill("SLO", Rmw(IndY), slo, 8),
    /* 14 */ ill("NOP", Rd(ZpX), nop, 4),
    /* 15 */ op("ORA", Rd(ZpX), ora, 4),
    /* 16 */ op("ASL", Rmw(ZpX), asl, 6),
    /* 17 */ ill("SLO", Rmw(ZpX), slo, 6),
    /* 18 */ op("CLC", Imp, clc, 2),
    /* 19 */ op("ORA", Rd(AbsY), ora, 4),
    /* 1A */ ill("NOP", Imp, nop, 2),
    /* 1B */ ill("SLO", Rmw(AbsY), slo, 7),
    /* 1C */ ill("NOP", Rd(AbsX), nop, 4),
    /* 1D */ op("ORA", Rd(AbsX), ora, 4),
    /* 1E */ op("ASL", Rmw(AbsX), asl, 7),
    /* 1F */ ill("SLO", Rmw(AbsX), slo, 7),

    /* 20 */ op("JSR", Sequence::Jsr, none, 6),
    /* 21 */ op("AND", Rd(IndX), and, 6),
    /* 22 */ kil(),
    /* 23 */ ill("RLA", Rmw(IndX), rla, 8),
    /* 24 */ op("BIT", Rd(Zp), bit, 3),
    /* 25 */ op("AND", Rd(Zp), and, 3),
    /* 26 */ op("ROL", Rmw(Zp), rol, 5),
    /* 27 */ ill("RLA", Rmw(Zp), rla, 5),
    /* 28 */ op("PLP", Sequence::Pull, plp, 4),
    /* 29 */ op("AND", Rd(Imm), and, 2),
    /* 2A */ op("ROL", Acc, rol, 2),
    /* 2B */ ill("ANC", Rd(Imm), anc, 2),
    /* 2C */ op("BIT", Rd(Abs), bit, 4),
    /* 2D */ op("AND", Rd(Abs), and, 4),
    /* 2E */ op("ROL", Rmw(Abs), rol, 6),
    /* 2F */ ill("RLA", Rmw(Abs), rla, 6),

    /* 30 */ op("BMI", Bra, bmi, 2),
    /* 31 */ op("AND", Rd(IndY), and, 5),
    /* 32 */ kil(),
    /* 33 */ ill("RLA", Rmw(IndY), rla, 8),
    /* 34 */ ill("NOP", Rd(ZpX), nop, 4),
    /* 35 */ op("AND", Rd(ZpX), and, 4),
    /* 36 */ op("ROL", Rmw(ZpX), rol, 6),
    /* 37 */ ill("RLA", Rmw(ZpX), rla, 6),
    /* 38 */ op("SEC", Imp, sec, 2),
    /* 39 */ op("AND", Rd(AbsY), and, 4),
    /* 3A */ ill("NOP", Imp, nop, 2),
    /* 3B */ ill("RLA", Rmw(AbsY), rla, 7),
    /* 3C */ ill("NOP", Rd(AbsX), nop, 4),
    /* 3D */ op("AND", Rd(AbsX), and, 4),
    /* 3E */ op("ROL", Rmw(AbsX), rol, 7),
    /* 3F */ ill("RLA", Rmw(AbsX), rla, 7),

    /* 40 */ op("RTI", Sequence::Rti, plp, 6),
    /* 41 */ op("EOR", Rd(IndX), eor, 6),
    /* 42 */ kil(),
    /* 43 */ ill("SRE", Rmw(IndX), sre, 8),
    /* 44 */ ill("NOP", Rd(Zp), nop, 3),
    /* 45 */ op("EOR", Rd(Zp), eor, 3),
    /* 46 */ op("LSR", Rmw(Zp), lsr, 5),
    /* 47 */ ill("SRE", Rmw(Zp), sre, 5),
    /* 48 */ op("PHA", Sequence::Push, pha, 3),
    /* 49 */ op("EOR", Rd(Imm), eor, 2),
    /* 4A */ op("LSR", Acc, lsr, 2),
    /* 4B */ ill("ALR", Rd(Imm), alr, 2),
    /* 4C */ op("JMP", Sequence::Jmp, none, 3),
    /* 4D */ op("EOR", Rd(Abs), eor, 4),
    /* 4E */ op("LSR", Rmw(Abs), lsr, 6),
    /* 4F */ ill("SRE", Rmw(Abs), sre, 6),

    /* 50 */ op("BVC", Bra, bvc, 2),
    /* 51 */ op("EOR", Rd(IndY), eor, 5),
    /* 52 */ kil(),
    /* 53 */ ill("SRE", Rmw(IndY), sre, 8),
    /* 54 */ ill("NOP", Rd(ZpX), nop, 4),
    /* 55 */ op("EOR", Rd(ZpX), eor, 4),
    /* 56 */ op("LSR", Rmw(ZpX), lsr, 6),
    /* 57 */ ill("SRE", Rmw(ZpX), sre, 6),
    /* 58 */ op("CLI", Imp, cli, 2),
    /* 59 */ op("EOR", Rd(AbsY), eor, 4),
    /* 5A */ ill("NOP", Imp, nop, 2),
    /* 5B */ ill("SRE", Rmw(AbsY), sre, 7),
    /* 5C */ ill("NOP", Rd(AbsX), nop, 4),
    /* 5D */ op("EOR", Rd(AbsX), eor, 4),
    /* 5E */ op("LSR", Rmw(AbsX), lsr, 7),
    /* 5F */ ill("SRE", Rmw(AbsX), sre, 7),

    /* 60 */ op("RTS", Sequence::Rts, none, 6),
    /* 61 */ op("ADC", Rd(IndX), adc, 6),
    /* 62 */ kil(),
    /* 63 */ ill("RRA", Rmw(IndX), rra, 8),
    /* 64 */ ill("NOP", Rd(Zp), nop, 3),
    /* 65 */ op("ADC", Rd(Zp), adc, 3),
    /* 66 */ op("ROR", Rmw(Zp), ror, 5),
    /* 67 */ ill("RRA", Rmw(Zp), rra, 5),
    /* 68 */ op("PLA", Sequence::Pull, pla, 4),
    /* 69 */ op("ADC", Rd(Imm), adc, 2),
    /* 6A */ op("ROR", Acc, ror, 2),
    /* 6B */ ill("ARR", Rd(Imm), arr, 2),
    /* 6C */ op("JMP", Sequence::JmpIndirect, none, 5),
    /* 6D */ op("ADC", Rd(Abs), adc, 4),
    /* 6E */ op("ROR", Rmw(Abs), ror, 6),
    /* 6F */ ill("RRA", Rmw(Abs), rra, 6),

    /* 70 */ op("BVS", Bra, bvs, 2),
    /* 71 */ op("ADC", Rd(IndY), adc, 5),
    /* 72 */ kil(),
    /* 73 */ ill("RRA", Rmw(IndY), rra, 8),
    /* 74 */ ill("NOP", Rd(ZpX), nop, 4),
    /* 75 */ op("ADC", Rd(ZpX), adc, 4),
    /* 76 */ op("ROR", Rmw(ZpX), ror, 6),
    /* 77 */ ill("RRA", Rmw(ZpX), rra, 6),
    /* 78 */ op("SEI", Imp, sei, 2),
    /* 79 */ op("ADC", Rd(AbsY), adc, 4),
    /* 7A */ ill("NOP", Imp, nop, 2),
    /* 7B */ ill("RRA", Rmw(AbsY), rra, 7),
    /* 7C */ ill("NOP", Rd(AbsX), nop, 4),
    /* 7D */ op("ADC", Rd(AbsX), adc, 4),
    /* 7E */ op("ROR", Rmw(AbsX), ror, 7),
    /* 7F */ ill("RRA", Rmw(AbsX), rra, 7),

    /* 80 */ ill("NOP", Rd(Imm), nop, 2),
    /* 81 */ op("STA", St(IndX), sta, 6),
    /* 82 */ ill("NOP", Rd(Imm), nop, 2),
    /* 83 */ ill("SAX", St(IndX), sax, 6),
    /* 84 */ op("STY", St(Zp), sty, 3),
    /* 85 */ op("STA", St(Zp), sta, 3),
    /* 86 */ op("STX", St(Zp), stx, 3),
    /* 87 */ ill("SAX", St(Zp), sax, 3),
    /* 88 */ op("DEY", Imp, dey, 2),
    /* 89 */ ill("NOP", Rd(Imm), nop, 2),
    /* 8A */ op("TXA", Imp, txa, 2),
    /* 8B */ ill("ANE", Rd(Imm), ane, 2),
    /* 8C */ op("STY", St(Abs), sty, 4),
    /* 8D */ op("STA", St(Abs), sta, 4),
    /* 8E */ op("STX", St(Abs), stx, 4),
    /* 8F */ ill("SAX", St(Abs), sax, 4),

    /* 90 */ op("BCC", Bra, bcc, 2),
    /* 91 */ op("STA", St(IndY), sta, 6),
    /* 92 */ kil(),
    /* 93 */ ill("SHA", Ust(IndY), sha, 6),
    /* 94 */ op("STY", St(ZpX), sty, 4),
    /* 95 */ op("STA", St(ZpX), sta, 4),
    /* 96 */ op("STX", St(ZpY), stx, 4),
    /* 97 */ ill("SAX", St(ZpY), sax, 4),
    /* 98 */ op("TYA", Imp, tya, 2),
    /* 99 */ op("STA", St(AbsY), sta, 5),
    /* 9A */ op("TXS", Imp, txs, 2),
    /* 9B */ ill("TAS", Ust(AbsY), tas, 5),
    /* 9C */ ill("SHY", Ust(AbsX), shy, 5),
    /* 9D */ op("STA", St(AbsX), sta, 5),
    /* 9E */ ill("SHX", Ust(AbsY), shx, 5),
    /* 9F */ ill("SHA", Ust(AbsY), sha, 5),

    /* A0 */ op("LDY", Rd(Imm), ldy, 2),
    /* A1 */ op("LDA", Rd(IndX), lda, 6),
    /* A2 */ op("LDX", Rd(Imm), ldx, 2),
    /* A3 */ ill("LAX", Rd(IndX), lax, 6),
    /* A4 */ op("LDY", Rd(Zp), ldy, 3),
    /* A5 */ op("LDA", Rd(Zp), lda, 3),
    /* A6 */ op("LDX", Rd(Zp), ldx, 3),
    /* A7 */ ill("LAX", Rd(Zp), lax, 3),
    /* A8 */ op("TAY", Imp, tay, 2),
    /* A9 */ op("LDA", Rd(Imm), lda, 2),
    /* AA */ op("TAX", Imp, tax, 2),
    /* AB */ ill("LXA", Rd(Imm), lxa, 2),
    /* AC */ op("LDY", Rd(Abs), ldy, 4),
    /* AD */ op("LDA", Rd(Abs), lda, 4),
    /* AE */ op("LDX", Rd(Abs), ldx, 4),
    /* AF */ ill("LAX", Rd(Abs), lax, 4),

    /* B0 */ op("BCS", Bra, bcs, 2),
    /* B1 */ op("LDA", Rd(IndY), lda, 5),
    /* B2 */ kil(),
    /* B3 */ ill("LAX", Rd(IndY), lax, 5),
    /* B4 */ op("LDY", Rd(ZpX), ldy, 4),
    /* B5 */ op("LDA", Rd(ZpX), lda, 4),
    /* B6 */ op("LDX", Rd(ZpY), ldx, 4),
    /* B7 */ ill("LAX", Rd(ZpY), lax, 4),
    /* B8 */ op("CLV", Imp, clv, 2),
    /* B9 */ op("LDA", Rd(AbsY), lda, 4),
    /* BA */ op("TSX", Imp, tsx, 2),
    /* BB */ ill("LAS", Rd(AbsY), las, 4),
    /* BC */ op("LDY", Rd(AbsX), ldy, 4),
    /* BD */ op("LDA", Rd(AbsX), lda, 4),
    /* BE */ op("LDX", Rd(AbsY), ldx, 4),
    /* BF */ ill("LAX", Rd(AbsY), lax, 4),

    /* C0 */ op("CPY", Rd(Imm), cpy, 2),
    /* C1 */ op("CMP", Rd(IndX), cmp, 6),
    /* C2 */ ill("NOP", Rd(Imm), nop, 2),
    /* C3 */ ill("DCP", Rmw(IndX), dcp, 8),
    /* C4 */ op("CPY", Rd(Zp), cpy, 3),
    /* C5 */ op("CMP", Rd(Zp), cmp, 3),
    /* C6 */ op("DEC", Rmw(Zp), dec, 5),
    /* C7 */ ill("DCP", Rmw(Zp), dcp, 5),
    /* C8 */ op("INY", Imp, iny, 2),
    /* C9 */ op("CMP", Rd(Imm), cmp, 2),
    /* CA */ op("DEX", Imp, dex, 2),
    /* CB */ ill("SBX", Rd(Imm), sbx, 2),
    /* CC */ op("CPY", Rd(Abs), cpy, 4),
    /* CD */ op("CMP", Rd(Abs), cmp, 4),
    /* CE */ op("DEC", Rmw(Abs), dec, 6),
    /* CF */ ill("DCP", Rmw(Abs), dcp, 6),

    /* D0 */ op("BNE", Bra, bne, 2),
    /* D1 */ op("CMP", Rd(IndY), cmp, 5),
    /* D2 */ kil(),
    /* D3 */ ill("DCP", Rmw(IndY), dcp, 8),
    /* D4 */ ill("NOP", Rd(ZpX), nop, 4),
    /* D5 */ op("CMP", Rd(ZpX), cmp, 4),
    /* D6 */ op("DEC", Rmw(ZpX), dec, 6),
    /* D7 */ ill("DCP", Rmw(ZpX), dcp, 6),
    /* D8 */ op("CLD", Imp, cld, 2),
    /* D9 */ op("CMP", Rd(AbsY), cmp, 4),
    /* DA */ ill("NOP", Imp, nop, 2),
    /* DB */ ill("DCP", Rmw(AbsY), dcp, 7),
    /* DC */ ill("NOP", Rd(AbsX), nop, 4),
    /* DD */ op("CMP", Rd(AbsX), cmp, 4),
    /* DE */ op("DEC", Rmw(AbsX), dec, 7),
    /* DF */ ill("DCP", Rmw(AbsX), dcp, 7),

    /* E0 */ op("CPX", Rd(Imm), cpx, 2),
    /* E1 */ op("SBC", Rd(IndX), sbc, 6),
    /* E2 */ ill("NOP", Rd(Imm), nop, 2),
    /* E3 */ ill("ISC", Rmw(IndX), isc, 8),
    /* E4 */ op("CPX", Rd(Zp), cpx, 3),
    /* E5 */ op("SBC", Rd(Zp), sbc, 3),
    /* E6 */ op("INC", Rmw(Zp), inc, 5),
    /* E7 */ ill("ISC", Rmw(Zp), isc, 5),
    /* E8 */ op("INX", Imp, inx, 2),
    /* E9 */ op("SBC", Rd(Imm), sbc, 2),
    /* EA */ op("NOP", Imp, nop, 2),
    /* EB */ ill("SBC", Rd(Imm), sbc, 2),
    /* EC */ op("CPX", Rd(Abs), cpx, 4),
    /* ED */ op("SBC", Rd(Abs), sbc, 4),
    /* EE */ op("INC", Rmw(Abs), inc, 6),
    /* EF */ ill("ISC", Rmw(Abs), isc, 6),

    /* F0 */ op("BEQ", Bra, beq, 2),
    /* F1 */ op("SBC", Rd(IndY), sbc, 5),
    /* F2 */ kil(),
    /* F3 */ ill("ISC", Rmw(IndY), isc, 8),
    /* F4 */ ill("NOP", Rd(ZpX), nop, 4),
    /* F5 */ op("SBC", Rd(ZpX), sbc, 4),
    /* F6 */ op("INC", Rmw(ZpX), inc, 6),
    /* F7 */ ill("ISC", Rmw(ZpX), isc, 6),
    /* F8 */ op("SED", Imp, sed, 2),
    /* F9 */ op("SBC", Rd(AbsY), sbc, 4),
    /* FA */ ill("NOP", Imp, nop, 2),
    /* FB */ ill("ISC", Rmw(AbsY), isc, 7),
    /* FC */ ill("NOP", Rd(AbsX), nop, 4),
    /* FD */ op("SBC", Rd(AbsX), sbc, 4),
    /* FE */ op("INC", Rmw(AbsX), inc, 7),
    /* FF */ ill("ISC", Rmw(AbsX), isc, 7),
];

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed for
/// decoding and listing.
///
/// # Fields
///
/// - `mnemonic`: Three-letter instruction name (e.g., "LDA", "STA", "KIL")
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Minimum cycle cost (page-crossing penalties added dynamically)
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
/// - `undocumented`: Not part of the documented instruction set
/// - `halts`: Executing the opcode jams the processor
///
/// # Examples
///
/// ```
/// use cycle6502::{OPCODE_TABLE, AddressingMode};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(!lda_imm.undocumented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "KIL" for halting opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Halting opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether this opcode is outside the documented instruction set.
    pub undocumented: bool,

    /// Whether executing this opcode locks up the processor.
    pub halts: bool,
}

impl OpcodeMetadata {
    const fn project(opcode: Opcode) -> Self {
        let addressing_mode = opcode.sequence.addressing_mode();
        Self {
            mnemonic: opcode.mnemonic,
            addressing_mode,
            base_cycles: opcode.cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
            undocumented: opcode.undocumented,
            halts: matches!(opcode.sequence, Sequence::Halt),
        }
    }
}

const fn metadata_table() -> [OpcodeMetadata; 256] {
    let opcodes = OPCODES;
    let mut table = [OpcodeMetadata::project(opcodes[0]); 256];
    let mut index = 1;
    while index < 256 {
        table[index] = OpcodeMetadata::project(opcodes[index]);
        index += 1;
    }
    table
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Projected from [`OPCODES`] at compile time, so it cannot drift from the
/// dispatch table.
///
/// # Examples
///
/// ```
/// use cycle6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // Halting opcode
/// let kil = &OPCODE_TABLE[0x02];
/// assert_eq!(kil.mnemonic, "KIL");
/// assert!(kil.halts);
/// assert_eq!(kil.base_cycles, 0);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = metadata_table();
