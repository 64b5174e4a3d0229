//! Drives the pure `step` function directly with a hand-rolled bus, without
//! the `CPU` wrapper.

use cycle6502::{step, BusInput, BusOutput, Interrupt, Registers, Status};

/// Minimal host: 64 KiB of RAM and the byte read on the previous clock.
struct Board {
    regs: Registers,
    mem: Vec<u8>,
    data: u8,
}

impl Board {
    fn at(pc: u16, program: &[u8]) -> Self {
        let mut mem = vec![0u8; 0x10000];
        let start = usize::from(pc);
        mem[start..start + program.len()].copy_from_slice(program);
        let data = mem[start];
        Self {
            regs: Registers::ready_at(pc),
            mem,
            data,
        }
    }

    fn clock_with(&mut self, lines: BusInput) -> BusOutput {
        let input = BusInput {
            data: self.data,
            ..lines
        };
        let out = step(&mut self.regs, input);
        let address = usize::from(out.address);
        if out.is_write() {
            self.mem[address] = out.data;
            self.data = out.data;
        } else {
            self.data = self.mem[address];
        }
        out
    }

    fn clock(&mut self) -> BusOutput {
        self.clock_with(BusInput::default())
    }

    fn run(&mut self, clocks: usize) -> Vec<BusOutput> {
        (0..clocks).map(|_| self.clock()).collect()
    }
}

fn r(address: u16) -> BusOutput {
    BusOutput::read(address)
}

fn s(address: u16) -> BusOutput {
    BusOutput::read(address).with_sync()
}

#[test]
fn test_clc_ldx_tax_clock_by_clock() {
    // CLC; LDX #$00; TAX; NOP
    let mut board = Board::at(0x0200, &[0x18, 0xA2, 0x00, 0xAA, 0xEA]);
    board.regs.p.insert(Status::CARRY);
    board.regs.a = 0x80;
    board.regs.x = 0x55;

    assert_eq!(board.clock(), s(0x0201));
    assert_eq!(board.clock(), r(0x0201));
    assert!(!board.regs.p.contains(Status::CARRY));

    assert_eq!(board.clock(), s(0x0202));
    assert_eq!(board.clock(), r(0x0203));
    assert_eq!(board.regs.x, 0x00);
    assert!(board.regs.p.contains(Status::ZERO));

    assert_eq!(board.clock(), s(0x0204));
    assert_eq!(board.clock(), r(0x0204));
    assert_eq!(board.regs.x, 0x80);
    assert!(board.regs.p.contains(Status::NEGATIVE));
    assert!(!board.regs.p.contains(Status::ZERO));

    assert_eq!(board.clock(), s(0x0205));
}

#[test]
fn test_sync_marks_only_decode_clocks() {
    // LDA $1234; STA $10; INX
    let mut board = Board::at(0x0200, &[0xAD, 0x34, 0x12, 0x85, 0x10, 0xE8, 0xEA]);
    let trace = board.run(4 + 3 + 2 + 1);

    let sync_clocks: Vec<usize> = trace
        .iter()
        .enumerate()
        .filter(|(_, out)| out.sync)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(sync_clocks, vec![0, 4, 7, 9]);
    assert!(trace.iter().filter(|out| out.sync).all(|out| !out.is_write()));
}

#[test]
fn test_store_drives_data_bus() {
    // STA $10
    let mut board = Board::at(0x0200, &[0x85, 0x10, 0xEA]);
    board.regs.a = 0x42;

    assert_eq!(
        board.run(4),
        vec![s(0x0201), BusOutput::write(0x0010, 0x42), r(0x0202), s(0x0203)]
    );
    assert_eq!(board.mem[0x0010], 0x42);
}

#[test]
fn test_power_on_runs_reset_sequence() {
    let mut board = Board::at(0x0300, &[0xE8]); // INX
    board.mem[0xFFFC] = 0x00;
    board.mem[0xFFFD] = 0x03;
    board.regs = Registers::new();

    assert_eq!(
        board.run(6),
        vec![r(0x0100), r(0x01FF), r(0x01FE), r(0xFFFC), r(0xFFFD), r(0x0300)]
    );
    assert_eq!(board.regs.pc, 0x0300);
    assert_eq!(board.regs.s, 0xFD);
    assert!(board.regs.p.contains(Status::IRQ_DISABLE));
    assert_eq!(board.regs.servicing(), None);

    assert_eq!(board.clock(), s(0x0301));
    assert_eq!(board.clock(), r(0x0301));
    assert_eq!(board.regs.x, 0x01);
}

#[test]
fn test_step_is_a_pure_function_of_its_inputs() {
    let mut board = Board::at(0x0200, &[0x69, 0x7F, 0xEA]); // ADC #$7F
    board.regs.a = 0x01;
    board.clock();

    let mut first = board.regs;
    let mut second = board.regs;
    let input = BusInput::new(0x7F).with_irq(true);

    assert_eq!(step(&mut first, input), step(&mut second, input));
    assert_eq!(first, second);
    assert_eq!(first.a, 0x80);
    assert!(first.p.contains(Status::OVERFLOW));
}

#[test]
fn test_reset_line_rearms_sequence() {
    let mut board = Board::at(0x0200, &[0xEA, 0xEA, 0xEA]);
    board.mem[0xFFFC] = 0x00;
    board.mem[0xFFFD] = 0x04;
    board.run(3);

    let out = board.clock_with(BusInput::default().with_rst(true));
    assert_eq!(out, r(board.regs.pc));
    assert_eq!(board.regs.cursor(), 0);
    assert_eq!(board.regs.servicing(), Some(Interrupt::Reset));

    let trace = board.run(6);
    assert!(trace.iter().all(|out| !out.is_write()));
    assert_eq!(&trace[3..], &[r(0xFFFC), r(0xFFFD), r(0x0400)]);
    assert_eq!(board.regs.s, 0xFA);
    assert_eq!(board.regs.pc, 0x0400);
}

#[test]
fn test_irq_taken_at_next_fetch() {
    let mut board = Board::at(0x0200, &[0xEA, 0xEA, 0xEA]);
    let irq = BusInput::default().with_irq(true);

    // NOP decodes while the line is first seen, then completes
    assert_eq!(board.clock_with(irq), s(0x0201));
    assert_eq!(board.clock_with(irq), r(0x0201));

    // The next fetch enters the interrupt row without advancing PC
    assert_eq!(board.clock_with(irq), s(0x0201));
    assert_eq!(board.regs.servicing(), Some(Interrupt::Irq));
    assert_eq!(board.regs.opcode(), 0x00);
    assert_eq!(board.regs.pc, 0x0201);
}

#[test]
fn test_masked_irq_is_ignored() {
    let mut board = Board::at(0x0200, &[0xEA, 0xEA, 0xEA]);
    board.regs.p.insert(Status::IRQ_DISABLE);
    let irq = BusInput::default().with_irq(true);

    for _ in 0..6 {
        board.clock_with(irq);
    }
    assert_eq!(board.regs.servicing(), None);
    assert_eq!(board.regs.pc, 0x0203);
}

#[test]
fn test_nmi_edge_latched_between_clocks() {
    let mut board = Board::at(0x0200, &[0xEA, 0xEA, 0xEA]);

    board.clock_with(BusInput::default().with_nmi(true));
    assert!(board.regs.nmi_pending());

    // Line released before the boundary; the edge is not forgotten
    board.clock();
    board.clock();
    assert_eq!(board.regs.servicing(), Some(Interrupt::Nmi));
    assert!(!board.regs.nmi_pending());
}

#[test]
fn test_jam_repeats_without_sync() {
    let mut board = Board::at(0x0200, &[0x02]);

    assert_eq!(board.clock(), s(0x0201));
    let cursor = board.regs.cursor();
    for _ in 0..10 {
        assert_eq!(board.clock(), r(0x0201));
    }
    assert_eq!(board.regs.opcode(), 0x02);
    assert_eq!(board.regs.cursor(), cursor);
}

#[test]
fn test_indexed_address_latches() {
    // LDA $12F0,X crossing into page $13
    let mut board = Board::at(0x0200, &[0xBD, 0xF0, 0x12]);
    board.mem[0x1310] = 0x5A;
    board.regs.x = 0x20;

    assert_eq!(board.clock(), s(0x0201));
    assert_eq!(board.clock(), r(0x0202));
    assert_eq!(board.regs.address_latch(), 0x00F0);

    // Un-carried read first; the latches hold the fixed address and base page
    assert_eq!(board.clock(), r(0x1210));
    assert_eq!(board.regs.address_latch(), 0x1310);
    assert_eq!(board.regs.data_latch(), 0x12);

    assert_eq!(board.clock(), r(0x1310));
    assert_eq!(board.clock(), r(0x0203));
    assert_eq!(board.regs.a, 0x5A);
}

#[test]
fn test_modify_latches_result() {
    // INC $10
    let mut board = Board::at(0x0200, &[0xE6, 0x10]);
    board.mem[0x0010] = 0x41;

    board.run(2);
    assert_eq!(board.clock(), BusOutput::write(0x0010, 0x41));
    assert_eq!(board.regs.data_latch(), 0x42);
    assert_eq!(board.clock(), BusOutput::write(0x0010, 0x42));
}
