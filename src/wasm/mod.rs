//! WebAssembly bindings for the cycle6502 core.
//!
//! This module provides JavaScript-callable interfaces to the core,
//! enabling browser-based, clock-by-clock execution of 6502 code.

pub mod api;

pub use api::Emulator6502;
