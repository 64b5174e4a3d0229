//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{disassemble, disassemble_one, format_listing, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    start_address: u16,
    hex_dump: bool,
    show_offsets: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    offset: usize,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.options.start_address,
        hex_dump: input.options.hex_dump,
        show_offsets: input.options.show_offsets,
    };

    let instructions = disassemble(&input.bytes, options);

    let mut total_size: usize = 0;
    let mut expected_address = input.options.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(instr.operand_bytes.len() <= instr.size_bytes as usize);

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    // The listing covers every byte exactly once
    assert_eq!(total_size, input.bytes.len());
    assert_eq!(
        format_listing(&instructions, &options).lines().count(),
        instructions.len()
    );

    // Strict decoding agrees with the listing or reports why it cannot
    match disassemble_one(&input.bytes, input.offset) {
        Ok(d) => assert!(input.offset + d.size as usize <= input.bytes.len()),
        Err(_) => {}
    }
});
