//! rvdasm - RISC-V disassembler
//!
//! Produces objdump-style listings from RISC-V ELF binaries. The opcode
//! tables and matcher live in `rvdasm-isa`; ELF parsing in `rvdasm-elf`.
//!
//! # Example
//!
//! ```ignore
//! use rvdasm::Session;
//!
//! let data = std::fs::read("program.elf")?;
//! let mut session = Session::new(&data, "no-aliases")?;
//! session.list_to(&mut std::io::stdout().lock())?;
//! ```

mod error;
mod options;
mod session;

pub use error::{Error, Result};
pub use options::apply_options;
pub use session::Session;

// Re-export from sub-crates
pub use rvdasm_elf::{ElfError, ElfFile, LoadedSection, Symbol};
pub use rvdasm_isa::{
    ByteSource, DisasmConfig, Disassembler, FetchError, Insn, NullSymbolizer, RegNameMode,
    SliceSource, SubsetSet, Symbolizer, Xlen, insn_length,
};
