//! JAM/KIL opcodes: the processor halts until reset.

use cycle6502::{
    step, BusInput, ExecutionError, FlatMemory, MemoryBus, Registers, CPU, OPCODE_TABLE,
};

const JAM_OPCODES: [u8; 12] = [
    0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
];

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program);
    CPU::new(memory)
}

#[test]
fn test_halting_opcodes_match_table() {
    let halting: Vec<u8> = (0..=255u8)
        .filter(|&op| OPCODE_TABLE[op as usize].halts)
        .collect();
    assert_eq!(halting, JAM_OPCODES.to_vec());
}

#[test]
fn test_every_jam_opcode_halts() {
    for opcode in JAM_OPCODES {
        let mut cpu = setup_cpu(&[0xEA, opcode, 0xEA]);
        assert_eq!(cpu.step(), Ok(2));
        assert_eq!(
            cpu.step(),
            Err(ExecutionError::Jammed {
                opcode,
                address: 0x8001,
            }),
            "opcode 0x{opcode:02X}"
        );
        assert!(cpu.is_jammed());
    }
}

#[test]
fn test_jammed_bus_is_frozen() {
    let mut cpu = setup_cpu(&[0x02]);

    let first = cpu.tick();
    assert!(first.sync);
    assert_eq!(first.address, 0x8001);

    for _ in 0..1000 {
        let out = cpu.tick();
        assert_eq!(out.address, 0x8001);
        assert!(!out.sync);
        assert!(!out.is_write());
    }
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 1001);
}

#[test]
fn test_repeated_steps_keep_reporting_jam() {
    let mut cpu = setup_cpu(&[0x12]);

    for _ in 0..5 {
        assert_eq!(
            cpu.step(),
            Err(ExecutionError::Jammed {
                opcode: 0x12,
                address: 0x8000,
            })
        );
    }
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_interrupts_do_not_wake_a_jammed_cpu() {
    let mut cpu = setup_cpu(&[0x58, 0x02]); // CLI; KIL
    cpu.memory_mut().load(0xFFFE, &[0x00, 0x90]);
    cpu.memory_mut().load(0xFFFA, &[0x00, 0xA0]);

    cpu.step().unwrap();
    cpu.step().unwrap_err();

    cpu.set_irq(true);
    cpu.set_nmi(true);
    for _ in 0..50 {
        assert!(cpu.step().is_err());
    }
    assert!(cpu.is_jammed());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_reset_line_recovers() {
    let mut cpu = setup_cpu(&[0xA9, 0x07, 0xF2]); // LDA #$07; KIL
    cpu.step().unwrap();
    cpu.step().unwrap_err();

    // Point the reset vector past the jam
    cpu.memory_mut().set_reset_vector(0x8010);
    cpu.memory_mut().write(0x8010, 0xAA); // TAX

    cpu.set_reset(true);
    cpu.tick();
    cpu.set_reset(false);

    assert!(!cpu.is_jammed());
    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.pc(), 0x8010);
    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 0x07);
}

#[test]
fn test_raw_stepper_jam_and_register_reset() {
    let mut memory = [0u8; 0x10000];
    memory[0x0200] = 0x02;
    memory[0xFFFC] = 0x00;
    memory[0xFFFD] = 0x03;
    memory[0x0300] = 0xE8; // INX

    let mut regs = Registers::ready_at(0x0200);
    let mut data = memory[0x0200];
    let mut run = |regs: &mut Registers, clocks: usize| {
        for _ in 0..clocks {
            let out = step(regs, BusInput::new(data));
            if out.is_write() {
                memory[out.address as usize] = out.data;
            } else {
                data = memory[out.address as usize];
            }
        }
    };

    run(&mut regs, 100);
    assert_eq!(regs.pc, 0x0201);
    assert_eq!(regs.opcode(), 0x02);

    regs.reset();
    run(&mut regs, 6);
    assert_eq!(regs.pc, 0x0300);

    // Decode and execute INX
    run(&mut regs, 2);
    assert_eq!(regs.x, 1);
}
