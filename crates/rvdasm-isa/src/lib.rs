//! RISC-V opcode tables, instruction matcher, and operand formatter.
//!
//! The decoder is table-driven: a static ordered list of opcode entries
//! (match/mask pairs plus an operand-format string) is scanned for the
//! first entry that matches the fetched instruction word and whose ISA
//! subset is enabled. Table order is a correctness invariant - alias
//! entries and register forms must precede the more general encodings
//! they shadow.

mod bits;
mod csr;
mod disasm;
mod index;
mod opcode;
mod operand;
mod regs;
mod state;
mod subset;
pub mod table;

pub use csr::csr_name;
pub use disasm::{
    ByteSource, DisasmConfig, Disassembler, FetchError, Insn, NullSymbolizer, SliceSource,
    Symbolizer, insn_length,
};
pub use index::OpcodeIndex;
pub use opcode::{IsaRequirement, MatchCond, OpcodeEntry};
pub use operand::Operand;
pub use regs::{GPR_NAMES_ABI, GPR_NAMES_NUMERIC, RegNameMode, X_GP, X_RA, X_SP, X_TP};
pub use state::{DisassemblyState, UpperBits};
pub use subset::{ArchError, SubsetSet, Xlen};
