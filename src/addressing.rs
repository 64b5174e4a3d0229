//! # Addressing Modes
//!
//! The 13 NMOS addressing modes. A mode names how the operand bytes after an
//! opcode become an effective address; the per-clock work of resolving it
//! lives in the microcode rows built from [`OPCODES`](crate::opcodes::OPCODES).
//!
//! | Mode | Read | Store | RMW |
//! |------|------|-------|-----|
//! | `#imm` | 2 | - | - |
//! | `zp` | 3 | 3 | 5 |
//! | `zp,X` / `zp,Y` | 4 | 4 | 6 |
//! | `abs` | 4 | 4 | 6 |
//! | `abs,X` / `abs,Y` | 4+1 | 5 | 7 |
//! | `(zp,X)` | 6 | 6 | 8 |
//! | `(zp),Y` | 5+1 | 6 | 8 |
//!
//! `+1` is the page-crossing fix-up clock, skipped by reads that stay on the
//! base page and always spent by stores and read-modify-write.

/// 6502 addressing mode.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand. The byte after the opcode is still read and discarded.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Shift or rotate of A; same bus pattern as implied.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// Operand is the next instruction-stream byte.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in page zero.
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page base plus X, wrapping within page zero. The base is read
    /// once as a dummy access before the index is added.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page base plus Y, wrapping within page zero.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset from the address after the branch.
    ///
    /// 2 cycles untaken, 3 taken, 4 taken onto another page.
    Relative,

    /// Little-endian 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit base plus X. The first access goes to the un-carried address;
    /// a carry costs one fix-up clock.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit base plus Y, timed like [`AbsoluteX`](Self::AbsoluteX).
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// JMP through a 16-bit pointer. The pointer's high byte never carries,
    /// so `JMP ($10FF)` reads its target from `$10FF` and `$1000`.
    Indirect,

    /// Pointer at zero page base plus X, both pointer bytes fetched with
    /// zero-page wrap.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Zero page pointer, then Y added to the fetched base with the same
    /// fix-up rule as [`AbsoluteY`](Self::AbsoluteY).
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode (0, 1 or 2).
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
    /// assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
    /// assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    /// ```
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
