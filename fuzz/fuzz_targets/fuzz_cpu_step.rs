//! Fuzz target for the clock-level stepper and the host driver.
//!
//! Arbitrary register files, memory contents and request-line patterns are
//! run for a bounded number of clocks. The engine must never panic and must
//! keep its bus protocol invariants.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{FlatMemory, MemoryBus, Registers, Status, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    pc: u16,
}

/// Request lines for one clock
#[derive(Debug, Arbitrary)]
struct FuzzLines {
    irq: bool,
    nmi: bool,
    rst: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Bytes placed at PC
    program: Vec<u8>,
    /// Zero page contents
    zero_page: [u8; 256],
    /// Interrupt vectors $FFFA-$FFFF
    vectors: [u8; 6],
    /// Line levels, one entry per clock
    lines: Vec<FuzzLines>,
}

fuzz_target!(|input: FuzzInput| {
    if input.program.len() > 4096 || input.lines.len() > 4096 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page);
    memory.load(0xFFFA, &input.vectors);
    memory.load(input.cpu_state.pc, &input.program);

    let mut regs = Registers::ready_at(input.cpu_state.pc);
    regs.a = input.cpu_state.a;
    regs.x = input.cpu_state.x;
    regs.y = input.cpu_state.y;
    regs.s = input.cpu_state.sp;
    regs.p = Status::from_byte(input.cpu_state.status);

    let mut cpu = CPU::with_registers(regs, memory);

    for lines in &input.lines {
        cpu.set_irq(lines.irq);
        cpu.set_nmi(lines.nmi);
        cpu.set_reset(lines.rst);

        let was_jammed = cpu.is_jammed();
        let out = cpu.tick();

        // Sync only ever accompanies a read
        if out.sync {
            assert!(!out.is_write());
        }
        // A jammed processor holds the address bus
        if was_jammed && !lines.rst {
            assert_eq!(out.address, cpu.pc());
        }
        // The unused status bit is always set
        assert!(cpu.registers().p.contains(Status::UNUSED));
    }

    // Reads are side-effect free on FlatMemory
    let _ = cpu.memory().read(cpu.pc());
});
