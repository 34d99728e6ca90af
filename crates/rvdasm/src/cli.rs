//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::Parser;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "rvdasm")]
#[command(about = "RISC-V disassembler - objdump-style listings from ELF binaries")]
#[command(version)]
pub struct Cli {
    /// Input ELF file
    #[arg(value_name = "ELF")]
    pub input: PathBuf,

    /// Disassembler options, comma separated (no-aliases, numeric, march=ARCH)
    #[arg(short = 'M', long = "disassembler-options", default_value = "")]
    pub options: String,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}
