//! # Host Driver
//!
//! [`CPU`] plays the host side of the bus protocol: it feeds [`step`] the
//! byte read on the previous clock together with the request-line levels,
//! then services the access `step` returns against a [`MemoryBus`].
//!
//! ## Execution Model
//!
//! - `tick()`: one clock
//! - `step()`: clocks until the next opcode fetch, i.e. one instruction or
//!   one interrupt entry
//! - `run_for_cycles()`: clocks until a cycle budget is exhausted
//!
//! The engine is pipelined: the opcode fetched on an instruction's last
//! clock is decoded on the next one, so between instructions the CPU sits
//! with the next opcode already on its data bus.

use log::{debug, trace, warn};

use crate::microcode::{role_at, step, Role};
use crate::{BusInput, BusOutput, ExecutionError, MemoryBus, Registers, Status, OPCODE_TABLE};

/// 6502 CPU wired to a memory bus.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Runs the reset sequence; PC comes from the vector
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file the engine steps
    pub(crate) regs: Registers,

    /// Byte on the data bus after the previous clock
    pub(crate) data: u8,

    /// IRQ line as driven by the host (ORed with the memory's own line)
    irq_line: bool,

    /// NMI line as driven by the host (ORed with the memory's own line)
    nmi_line: bool,

    /// RESET line
    rst_line: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU and runs the power-on reset sequence.
    ///
    /// The reset sequence performs three suppressed stack pushes (S ends at
    /// `$FD`), sets I and loads PC from `$FFFC/$FFFD`. Its clocks are not
    /// counted: on return the first opcode sits on the data bus and
    /// [`cycles`](Self::cycles) is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        let mut cpu = Self::with_registers(Registers::new(), memory);
        while role_at(cpu.regs.cursor()) != Some(Role::Fetch) {
            cpu.tick();
        }
        cpu.cycles = 0;
        debug!("reset complete, PC=${:04X}", cpu.regs.pc);
        cpu
    }

    /// Wraps an existing register file.
    ///
    /// The byte at `registers.pc` is placed on the data bus, so a register
    /// file from [`Registers::ready_at`] starts executing there on the next
    /// clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus, Registers};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0200, 0xE8); // INX
    ///
    /// let mut cpu = CPU::with_registers(Registers::ready_at(0x0200), mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.x(), 1);
    /// ```
    pub fn with_registers(registers: Registers, memory: M) -> Self {
        let data = memory.read(registers.pc);
        Self {
            regs: registers,
            data,
            irq_line: false,
            nmi_line: false,
            rst_line: false,
            cycles: 0,
            memory,
        }
    }

    /// Runs one clock and services its bus access.
    ///
    /// Returns the access performed, which makes `tick` the building block
    /// for bus traces.
    pub fn tick(&mut self) -> BusOutput {
        let input = BusInput::new(self.data)
            .with_irq(self.irq_line || self.memory.irq_active())
            .with_nmi(self.nmi_line || self.memory.nmi_active())
            .with_rst(self.rst_line);

        let out = step(&mut self.regs, input);
        if out.is_write() {
            self.memory.write(out.address, out.data);
            self.data = out.data;
        } else {
            self.data = self.memory.read(out.address);
        }
        self.cycles += 1;

        if out.sync {
            match self.regs.servicing() {
                Some(kind) => trace!("{:?} entry at PC=${:04X}", kind, self.regs.pc),
                None => {
                    let opcode = self.regs.opcode();
                    trace!(
                        "PC=${:04X} {:02X} {}",
                        self.regs.pc.wrapping_sub(1),
                        opcode,
                        OPCODE_TABLE[opcode as usize].mnemonic
                    );
                }
            }
        }

        out
    }

    /// Executes one instruction (or one interrupt entry) and returns the
    /// clocks it took.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::Jammed`] when the instruction halts the processor.
    ///   Each further call advances one clock and reports the jam again;
    ///   only a reset recovers.
    /// - [`ExecutionError::ResetAsserted`] while the RESET line is held. One
    ///   clock is spent per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // JAM
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::Jammed { opcode: 0x02, address: 0x8001 })
    /// );
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if self.rst_line {
            self.tick();
            return Err(ExecutionError::ResetAsserted);
        }

        let already_jammed = self.is_jammed();
        let mut clocks: u8 = 0;
        loop {
            self.tick();
            clocks += 1;
            match role_at(self.regs.cursor()) {
                Some(Role::Fetch) => return Ok(clocks),
                Some(Role::Halt) => {
                    let opcode = self.regs.opcode();
                    let address = self.regs.pc.wrapping_sub(1);
                    if !already_jammed {
                        warn!("CPU jammed by opcode ${opcode:02X} at ${address:04X}");
                    }
                    return Err(ExecutionError::Jammed { opcode, address });
                }
                _ => {}
            }
        }
    }

    /// Runs whole instructions until at least `cycle_budget` clocks have
    /// elapsed and returns the clocks actually consumed.
    ///
    /// The result may overshoot the budget by the tail of the last
    /// instruction.
    ///
    /// # Errors
    ///
    /// Stops at the first instruction that cannot complete:
    /// [`ExecutionError::Jammed`] or [`ExecutionError::ResetAsserted`]. The
    /// clocks spent up to that point stay counted in [`cycles`](Self::cycles).
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.load(0x8000, &[0xEA; 16]); // NOP sled
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Request lines ==========

    /// Drives the IRQ line (level-sensitive).
    pub fn set_irq(&mut self, active: bool) {
        self.irq_line = active;
    }

    /// Drives the NMI line (edge-triggered on the rising edge).
    pub fn set_nmi(&mut self, active: bool) {
        self.nmi_line = active;
    }

    /// Drives the RESET line.
    ///
    /// While held, every clock re-arms the reset sequence. Releasing it lets
    /// the sequence run; the next [`step`](Self::step) returns once the
    /// first opcode from the reset vector is pending.
    pub fn set_reset(&mut self, active: bool) {
        if self.rst_line && !active {
            debug!("RESET released at cycle {}", self.cycles);
        }
        self.rst_line = active;
    }

    /// True while the processor is halted by a JAM opcode.
    pub fn is_jammed(&self) -> bool {
        role_at(self.regs.cursor()) == Some(Role::Halt)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter.
    ///
    /// Between instructions this is the address of the opcode about to be
    /// decoded.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.s
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    ///
    /// // I flag set (bit 2), bit 5 always 1
    /// assert_eq!(cpu.status() & 0b00100100, 0b00100100);
    /// ```
    pub fn status(&self) -> u8 {
        (self.regs.p | Status::UNUSED).bits()
    }

    /// Returns the total number of clocks run since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The register file, including the micro-step cursor.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// The memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// The memory bus, mutably.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.s = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.regs.p = Status::from_byte(value);
    }

    /// Moves the program counter.
    ///
    /// Between instructions the opcode at the new PC is reloaded onto the
    /// data bus, so execution continues there. Mid-instruction only the
    /// register changes.
    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
        if role_at(self.regs.cursor()) == Some(Role::Fetch) {
            self.data = self.memory.read(pc);
        }
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.contains(Status::OVERFLOW)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.p.contains(Status::IRQ_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.contains(Status::CARRY)
    }

    // ========== Status Flag Setters ==========

    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.p.set(Status::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.p.set(Status::OVERFLOW, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.p.set(Status::DECIMAL, value);
    }

    /// Sets or clears I directly. Unlike CLI/SEI this takes effect on the
    /// next clock.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.p.set(Status::IRQ_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.p.set(Status::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.p.set(Status::CARRY, value);
    }
}
