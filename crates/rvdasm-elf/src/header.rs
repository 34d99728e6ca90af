//! ELF header structures.
//!
//! Fields are widened to u64 at parse time; the file's class is carried
//! separately as the target register width.

/// ELF header, class-independent view.
#[derive(Clone, Debug)]
pub struct ElfHeader {
    pub class: u8,
    pub data: u8,
    pub entry: u64,
    pub shoff: u64,
    pub flags: u32,
    pub shentsize: u16,
    pub shnum: u16,
    pub shstrndx: u16,
}

/// Section header.
#[derive(Clone, Debug)]
pub struct SectionHeader {
    pub name: u32,
    pub sh_type: u32,
    pub flags: u64,
    pub addr: u64,
    pub offset: u64,
    pub size: u64,
    pub link: u32,
    pub entsize: u64,
}

/// Loaded section with data.
#[derive(Clone, Debug)]
pub struct LoadedSection {
    pub name: String,
    pub addr: u64,
    pub flags: u64,
    pub data: Vec<u8>,
}

impl LoadedSection {
    /// Whether the section holds instructions.
    pub fn is_executable(&self) -> bool {
        self.flags & crate::constants::SHF_EXECINSTR != 0
    }

    /// Whether an address falls inside the section.
    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.addr && addr - self.addr < self.data.len() as u64
    }
}

/// ELF symbol.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub value: u64,
    pub size: u64,
    /// Symbol type (`STT_FUNC`, `STT_OBJECT`, etc.).
    pub sym_type: u8,
    /// Symbol binding (`STB_LOCAL`, `STB_GLOBAL`, etc.).
    pub binding: u8,
    /// Section index.
    pub shndx: u16,
}
