//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for clock and instruction
//! stepping, request-line control, state inspection and disassembly.

use crate::microcode::{role_at, Role};
use crate::{
    disassemble, format_instruction, BusOutput, DisassemblyOptions, ExecutionError, FlatMemory,
    MemoryBus, CPU,
};
use log::warn;
use wasm_bindgen::prelude::*;

/// Default program origin; the reset vector points here.
const PROGRAM_ORIGIN: u16 = 0x0600;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One clock's bus access, as seen by JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct BusCycle {
    address: u16,
    data: u8,
    write: bool,
    sync: bool,
}

#[wasm_bindgen]
impl BusCycle {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Byte written, or byte read back from memory
    #[wasm_bindgen(getter)]
    pub fn data(&self) -> u8 {
        self.data
    }

    #[wasm_bindgen(getter)]
    pub fn write(&self) -> bool {
        self.write
    }

    #[wasm_bindgen(getter)]
    pub fn sync(&self) -> bool {
        self.sync
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    mnemonic: String,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    /// Full instruction text, e.g. `LDA #$10`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    on_instruction: Option<js_sys::Function>,
    program_start: u16,
    program_end: u16,
}

fn fresh_memory() -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(PROGRAM_ORIGIN);
    memory
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with 64KB of RAM, reset to `$0600`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(fresh_memory()),
            on_instruction: None,
            program_start: PROGRAM_ORIGIN,
            program_end: PROGRAM_ORIGIN,
        }
    }

    /// Install (or clear) a callback invoked as `callback(pc, opcode)` at
    /// every opcode fetch
    pub fn set_trace_callback(&mut self, callback: Option<js_sys::Function>) {
        self.on_instruction = callback;
    }

    fn traced_tick(&mut self) -> BusOutput {
        let out = self.cpu.tick();
        if out.sync && self.cpu.registers().servicing().is_none() {
            if let Some(callback) = &self.on_instruction {
                let pc = self.cpu.pc().wrapping_sub(1);
                let opcode = self.cpu.registers().opcode();
                let result =
                    callback.call2(&JsValue::NULL, &JsValue::from(pc), &JsValue::from(opcode));
                if let Err(thrown) = result {
                    warn!("trace callback threw at PC=${pc:04X}: {thrown:?}");
                }
            }
        }
        out
    }

    /// Run a single clock
    pub fn tick(&mut self) -> BusCycle {
        let out = self.traced_tick();
        BusCycle {
            address: out.address,
            data: if out.is_write() {
                out.data
            } else {
                self.cpu.memory().read(out.address)
            },
            write: out.is_write(),
            sync: out.sync,
        }
    }

    /// Execute a single instruction and return the clocks it took
    pub fn step(&mut self) -> Result<u8, JsError> {
        let mut clocks = 0;
        loop {
            self.traced_tick();
            clocks += 1;
            match role_at(self.cpu.registers().cursor()) {
                Some(Role::Fetch) => return Ok(clocks),
                Some(Role::Halt) => {
                    let error = ExecutionError::Jammed {
                        opcode: self.cpu.registers().opcode(),
                        address: self.cpu.pc().wrapping_sub(1),
                    };
                    return Err(JsError::new(&error.to_string()));
                }
                _ => {}
            }
        }
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_cycles(u64::from(cycles))
            .map(|ran| ran as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Pulse RESET and run the reset sequence. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.set_reset(true);
        self.cpu.tick();
        self.cpu.set_reset(false);
        if let Err(e) = self.cpu.step() {
            warn!("reset sequence did not reach an opcode fetch: {e}");
        }
    }

    /// Drive the IRQ line
    pub fn set_irq(&mut self, active: bool) {
        self.cpu.set_irq(active);
    }

    /// Drive the NMI line
    pub fn set_nmi(&mut self, active: bool) {
        self.cpu.set_nmi(active);
    }

    #[wasm_bindgen(getter)]
    pub fn jammed(&self) -> bool {
        self.cpu.is_jammed()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = u16::from(page) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        // Three bytes per instruction is always enough
        let window: Vec<u8> = (0..num_instructions as usize * 3)
            .map(|i| self.cpu.memory().read(start_addr.wrapping_add(i as u16)))
            .collect();

        let opts = DisassemblyOptions {
            start_address: start_addr,
            ..DisassemblyOptions::default()
        };

        disassemble(&window, opts)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                if instr.mnemonic != ".byte" {
                    bytes.extend_from_slice(&instr.operand_bytes);
                }
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    mnemonic: instr.mnemonic.to_string(),
                    text: format_instruction(instr),
                })
            })
            .collect()
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
