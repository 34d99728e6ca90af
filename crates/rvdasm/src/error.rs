use thiserror::Error;

/// Disassembler session errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("ELF error: {0}")]
    Elf(#[from] rvdasm_elf::ElfError),
    #[error("fetch error: {0}")]
    Fetch(#[from] rvdasm_isa::FetchError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
