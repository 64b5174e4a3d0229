//! Tests for BRK and RTI.

use cycle6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU running `program` from 0x8000, with the
/// IRQ/BRK vector pointing at 0x9000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0xFFFE, &[0x00, 0x90]);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_brk_vectors_and_pushes() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    assert!(cpu.flag_i());

    // PC + 2 skips the signature byte; P has B and the unused bit set
    assert_eq!(cpu.memory().read(0x01FD), 0x80);
    assert_eq!(cpu.memory().read(0x01FC), 0x02);
    assert_eq!(cpu.memory().read(0x01FB), 0x31);
}

#[test]
fn test_brk_ignores_i_flag() {
    let mut cpu = setup_cpu(&[0x00]);
    assert!(cpu.flag_i());
    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_brk_does_not_touch_decimal_flag() {
    // NMOS parts leave D alone on interrupt entry
    let mut cpu = setup_cpu(&[0x00]);
    cpu.set_flag_d(true);
    cpu.step().unwrap();
    assert!(cpu.flag_d());
}

#[test]
fn test_brk_rti_round_trip() {
    let mut cpu = setup_cpu(&[0x00, 0xFF, 0xE8]); // BRK; .byte $FF; INX
    cpu.memory_mut().write(0x9000, 0x40); // RTI
    cpu.set_status(0xC3);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), 0xE3, "P restored without B");

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 1);
}

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.set_sp(0xFA);
    cpu.memory_mut().load(0x01FB, &[0xFF, 0x34, 0x12]);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.pc(), 0x1234, "RTI does not add one");
    assert_eq!(cpu.status(), 0xEF);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_rti_stack_wraps() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.set_sp(0xFE);
    cpu.memory_mut().write(0x01FF, 0x00); // P
    cpu.memory_mut().write(0x0100, 0x00); // PCL
    cpu.memory_mut().write(0x0101, 0x30); // PCH

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.pc(), 0x3000);
    assert_eq!(cpu.sp(), 0x01);
}
