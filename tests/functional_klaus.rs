//! Klaus Dormann's 6502 Functional Test
//!
//! Runs the functional test suite from
//! https://github.com/Klaus2m5/6502_65C02_functional_tests
//! against the cycle engine. It checks every documented opcode and
//! addressing mode of the NMOS 6502, including decimal mode.
//!
//! The binary is not shipped with the crate. Assemble it with
//! `disable_decimal = 0` and a load address of `$0000`, then point
//! `KLAUS_FUNCTIONAL_TEST` at it (default `tests/fixtures/6502_functional_test.bin`)
//! and run with `cargo test -- --ignored`.
//!
//! ## Success/Failure Detection
//!
//! The test traps with `JMP *`:
//! - **Success**: PC stops at $3469
//! - **Failure**: PC stops anywhere else; look the address up in the listing

use cycle6502::{FlatMemory, MemoryBus, CPU};
use std::path::PathBuf;

/// Success address - where PC ends up when all tests pass
const SUCCESS_ADDRESS: u16 = 0x3469;

/// Entry point for the functional test
const ENTRY_POINT: u16 = 0x0400;

/// Maximum cycles to run before timing out
const MAX_CYCLES: u64 = 100_000_000;

/// Number of identical PC values in a row needed to detect a trap
const LOOP_DETECTION_THRESHOLD: usize = 3;

fn binary_path() -> PathBuf {
    std::env::var_os("KLAUS_FUNCTIONAL_TEST")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/6502_functional_test.bin"))
}

/// Load the 64KB image and point the reset vector at the entry point
fn load_test_binary() -> FlatMemory {
    let path = binary_path();
    let image = std::fs::read(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to read functional test binary {}: {}. \
             Set KLAUS_FUNCTIONAL_TEST to the assembled image.",
            path.display(),
            e
        )
    });
    assert_eq!(image.len(), 65536, "Test binary must be exactly 64KB");

    let mut memory = FlatMemory::new();
    memory.load(0x0000, &image);
    memory.set_reset_vector(ENTRY_POINT);
    memory
}

/// Run until PC stays put for LOOP_DETECTION_THRESHOLD instructions.
fn run_until_trap(cpu: &mut CPU<FlatMemory>, max_cycles: u64) -> Result<u16, String> {
    let mut pc_history = [0u16; LOOP_DETECTION_THRESHOLD];
    let mut history_idx = 0;

    loop {
        let current_pc = cpu.pc();

        if cpu.cycles() >= max_cycles {
            return Err(format!(
                "Timeout: exceeded {} cycles. PC at ${:04X}",
                max_cycles, current_pc
            ));
        }

        cpu.step()
            .map_err(|e| format!("Execution error at PC ${:04X}: {}", current_pc, e))?;

        pc_history[history_idx] = current_pc;
        history_idx = (history_idx + 1) % LOOP_DETECTION_THRESHOLD;

        if pc_history.iter().all(|&pc| pc == current_pc) {
            return Ok(current_pc);
        }
    }
}

/// Format CPU state for diagnostic output
fn format_cpu_state(cpu: &CPU<FlatMemory>) -> String {
    format!(
        "PC:${:04X} A:${:02X} X:${:02X} Y:${:02X} SP:${:02X} P:[{}{}{}{}{}{}] Cycles:{}",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        if cpu.flag_n() { 'N' } else { '-' },
        if cpu.flag_v() { 'V' } else { '-' },
        if cpu.flag_d() { 'D' } else { '-' },
        if cpu.flag_i() { 'I' } else { '-' },
        if cpu.flag_z() { 'Z' } else { '-' },
        if cpu.flag_c() { 'C' } else { '-' },
        cpu.cycles()
    )
}

#[test]
#[ignore = "needs the assembled functional test image; run with --ignored"]
fn klaus_6502_functional_test() {
    let memory = load_test_binary();
    assert_eq!(memory.read(ENTRY_POINT), 0xD8, "entry point should be CLD");

    let mut cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), ENTRY_POINT);

    let final_pc = match run_until_trap(&mut cpu, MAX_CYCLES) {
        Ok(pc) => pc,
        Err(e) => panic!("{}\nFinal state: {}", e, format_cpu_state(&cpu)),
    };

    if final_pc != SUCCESS_ADDRESS {
        let context: Vec<String> = (-5i16..=5)
            .map(|offset| {
                let addr = final_pc.wrapping_add(offset as u16);
                format!("  ${:04X}: ${:02X}", addr, cpu.memory().read(addr))
            })
            .collect();
        panic!(
            "Trapped at ${:04X} (expected ${:04X})\nFinal state: {}\n{}",
            final_pc,
            SUCCESS_ADDRESS,
            format_cpu_state(&cpu),
            context.join("\n")
        );
    }
}
