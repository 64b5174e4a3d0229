//! Prints every bus cycle of a short program.
//!
//! The program exercises a read-modify-write (double write), a page-crossing
//! indexed read and a subroutine call, then jams.

use cycle6502::{FlatMemory, MemoryBus, OPCODE_TABLE, CPU};

fn main() {
    let program = [
        0xA2, 0xFF, // LDX #$FF
        0xE6, 0x10, // INC $10
        0xBD, 0x01, 0x02, // LDA $0201,X (crosses into $03xx)
        0x20, 0x0C, 0x80, // JSR $800C
        0x02, // KIL
        0xEA, // (padding)
        0x60, // RTS
    ];

    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, &program);
    memory.write(0x0010, 0x7F);

    let mut cpu = CPU::new(memory);

    println!("cycle  addr  data  r/w  sync");
    for _ in 0..40 {
        let out = cpu.tick();
        let data = if out.is_write() {
            out.data
        } else {
            cpu.memory().read(out.address)
        };
        let note = if out.sync {
            OPCODE_TABLE[cpu.registers().opcode() as usize].mnemonic
        } else {
            ""
        };
        println!(
            "{:5}  {:04X}  {:02X}    {}    {}",
            cpu.cycles(),
            out.address,
            data,
            if out.is_write() { "W" } else { "R" },
            note
        );
        if cpu.is_jammed() {
            println!("jammed at ${:04X}", cpu.pc());
            break;
        }
    }
}
