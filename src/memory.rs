//! # Memory Bus Abstraction
//!
//! The contract a host memory system satisfies so that [`CPU`](crate::CPU)
//! can service the bus accesses the engine requests. The engine itself never
//! touches memory: it only names an address and a direction each clock.
//!
//! ## Design Principles
//!
//! The trait follows 6502 hardware behaviour:
//! - No bus errors: reads and writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM or unmapped regions may be ignored
//! - Interrupt request lines are sampled once per clock

/// Memory bus the host driver reads from and writes to.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cycle6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cycle6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Dummy reads issued by the engine go
    /// through here too, so devices with read side effects see them exactly
    /// as the hardware would.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-modify-write instructions call it
    /// twice for the same address: first with the unmodified value, then with
    /// the result.
    fn write(&mut self, addr: u16, value: u8);

    /// Level of the shared IRQ line as driven by memory-mapped devices.
    ///
    /// The 6502 IRQ input is **level-sensitive**: it is serviced at an
    /// instruction boundary for as long as it is held and the I flag is
    /// clear. The host driver ORs this with its own IRQ line every clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{MemoryBus, FlatMemory};
    ///
    /// let mem = FlatMemory::new();
    /// // FlatMemory has no interrupt-capable devices
    /// assert!(!mem.irq_active());
    /// ```
    fn irq_active(&self) -> bool {
        false
    }

    /// Level of the NMI line as driven by memory-mapped devices.
    ///
    /// NMI is **edge-triggered**: only a low-to-high transition of the
    /// combined line requests an interrupt.
    fn nmi_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM initialised to `0x00`. Useful for
/// tests, demos and the WebAssembly bindings.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at `$FFFF`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0200, &[0xA9, 0x10]);
    /// assert_eq!(mem.read(0x0201), 0x10);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Points the reset vector at `addr`.
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.load(0xFFFC, &addr.to_le_bytes());
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        mem.write(0x0000, 0x01);
        mem.write(0x7FFF, 0x7F);
        mem.write(0x8000, 0x80);
        mem.write(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x7FFF), 0x7F);
        assert_eq!(mem.read(0x8000), 0x80);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_load_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFF, &[0x11, 0x22]);
        assert_eq!(mem.read(0xFFFF), 0x11);
        assert_eq!(mem.read(0x0000), 0x22);
    }

    #[test]
    fn test_reset_vector_is_little_endian() {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0xC000);
        assert_eq!(mem.read(0xFFFC), 0x00);
        assert_eq!(mem.read(0xFFFD), 0xC0);
        assert!(!mem.nmi_active());
    }
}
