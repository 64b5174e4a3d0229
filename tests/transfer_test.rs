//! Tests for register transfers and the flag instructions.

use cycle6502::{FlatMemory, CPU};

/// Helper function to create a CPU running `program` from 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu(&[0xAA, 0xA8]);
    cpu.set_a(0x80);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.y(), 0x80);
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu(&[0x8A, 0x98]);
    cpu.set_a(0xFF);
    cpu.set_x(0x00);
    cpu.set_y(0x42);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
}

#[test]
fn test_carry_and_decimal_flags() {
    // SEC; CLC; SED; CLD
    let mut cpu = setup_cpu(&[0x38, 0x18, 0xF8, 0xD8]);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    cpu.step().unwrap();
    assert!(cpu.flag_d());
    cpu.step().unwrap();
    assert!(!cpu.flag_d());
}

#[test]
fn test_interrupt_flag_and_clv() {
    // CLI; SEI; CLV
    let mut cpu = setup_cpu(&[0x58, 0x78, 0xB8]);
    cpu.set_flag_v(true);

    cpu.step().unwrap();
    assert!(!cpu.flag_i());
    cpu.step().unwrap();
    assert!(cpu.flag_i());
    cpu.step().unwrap();
    assert!(!cpu.flag_v());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_nop_changes_nothing_but_pc() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_a(0x12);
    cpu.set_status(0xFF);
    let before = *cpu.registers();

    assert_eq!(cpu.step(), Ok(2));
    let after = cpu.registers();
    assert_eq!(after.a, before.a);
    assert_eq!(after.x, before.x);
    assert_eq!(after.y, before.y);
    assert_eq!(after.s, before.s);
    assert_eq!(after.p, before.p);
    assert_eq!(after.pc, before.pc + 1);
}
