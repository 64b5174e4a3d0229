//! Basic disassembler usage example

use cycle6502::{disassemble, disassemble_one, format_listing, DisassemblyOptions};

fn main() {
    // Example machine code bytes
    let code = &[
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0xA7, 0x10, // LAX $10 (undocumented)
        0xD0, 0xF7, // BNE $8000
        0x4C, 0x00, // JMP, truncated
    ];

    let options = DisassemblyOptions {
        start_address: 0x8000,
        hex_dump: true,
        show_offsets: true,
    };

    println!("Disassembled code:");
    print!("{}", format_listing(&disassemble(code, options), &options));

    // Strict single-instruction decoding reports the truncation instead
    match disassemble_one(code, 9) {
        Ok(d) => println!("{} {}", d.mnemonic, d.operand),
        Err(e) => println!("error: {e}"),
    }
}
