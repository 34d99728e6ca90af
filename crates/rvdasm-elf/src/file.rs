//! ELF file parser.

use rustc_hash::FxHashMap;
use rvdasm_isa::{Symbolizer, Xlen};

use crate::constants::*;
use crate::header::*;
use crate::{ElfError, Result};

/// Read little-endian u16 from bytes.
#[inline]
fn read_le16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Read little-endian u32 from bytes.
#[inline]
fn read_le32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read little-endian u64 from bytes.
#[inline]
fn read_le64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
        data[offset + 4],
        data[offset + 5],
        data[offset + 6],
        data[offset + 7],
    ])
}

/// Parsed ELF file.
#[derive(Clone, Debug)]
pub struct ElfFile {
    xlen: Xlen,
    pub entry_point: u64,
    pub e_flags: u32,
    pub sections: Vec<LoadedSection>,
    pub symbols: Vec<Symbol>,
    by_name: FxHashMap<String, u64>,
}

impl ElfFile {
    /// Parse an ELF file from raw bytes. The register width is taken
    /// from the file's class.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = parse_header(data)?;
        let xlen = match header.class {
            ELF_CLASS_32 => Xlen::Rv32,
            ELF_CLASS_64 => Xlen::Rv64,
            other => return Err(ElfError::UnsupportedClass(other)),
        };

        let all_sections = parse_all_sections(data, &header, xlen)?;
        let shstrtab = all_sections.get(header.shstrndx as usize).cloned();
        let sections = load_alloc_sections(data, &all_sections, shstrtab.as_ref());
        let symbols = parse_symbols(data, &all_sections, xlen);

        let by_name = symbols
            .iter()
            .filter(|s| !s.name.is_empty())
            .map(|s| (s.name.clone(), s.value))
            .collect();

        Ok(Self {
            xlen,
            entry_point: header.entry,
            e_flags: header.flags,
            sections,
            symbols,
            by_name,
        })
    }

    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Whether the file was linked with compressed instructions.
    pub fn is_rvc(&self) -> bool {
        self.e_flags & EF_RISCV_RVC != 0
    }

    /// Look up a symbol's address by name.
    pub fn lookup_symbol(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }

    /// The global-pointer value, when the linker emitted one.
    pub fn gp(&self) -> Option<u64> {
        self.lookup_symbol("_gp")
    }

    /// Executable sections, in file order.
    pub fn executable_sections(&self) -> impl Iterator<Item = &LoadedSection> {
        self.sections.iter().filter(|s| s.is_executable())
    }

    /// The section containing an address, if any.
    pub fn section_containing(&self, addr: u64) -> Option<&LoadedSection> {
        self.sections.iter().find(|s| s.contains(addr))
    }

    /// The named symbol at or nearest below an address.
    pub fn nearest_symbol(&self, addr: u64) -> Option<&Symbol> {
        self.symbols
            .iter()
            .filter(|s| {
                !s.name.is_empty()
                    && matches!(s.sym_type, STT_NOTYPE | STT_OBJECT | STT_FUNC)
                    && s.value <= addr
            })
            .max_by_key(|s| s.value)
    }
}

impl Symbolizer for ElfFile {
    fn describe(&self, addr: u64) -> Option<String> {
        let sym = self.nearest_symbol(addr)?;
        if sym.value == addr {
            Some(sym.name.clone())
        } else {
            Some(format!("{}+{:#x}", sym.name, addr - sym.value))
        }
    }
}

fn parse_header(data: &[u8]) -> Result<ElfHeader> {
    if data.len() < 52 {
        return Err(ElfError::TooSmall);
    }

    let magic = read_le32(data, 0);
    if magic != ELF_MAGIC {
        return Err(ElfError::InvalidMagic);
    }

    let class = data[4];
    let data_encoding = data[5];
    if data_encoding != ELF_DATA_LSB {
        return Err(ElfError::NotLittleEndian);
    }

    if class == ELF_CLASS_64 {
        if data.len() < 64 {
            return Err(ElfError::TooSmall);
        }
        Ok(ElfHeader {
            class,
            data: data_encoding,
            entry: read_le64(data, 24),
            shoff: read_le64(data, 40),
            flags: read_le32(data, 48),
            shentsize: read_le16(data, 58),
            shnum: read_le16(data, 60),
            shstrndx: read_le16(data, 62),
        })
    } else {
        Ok(ElfHeader {
            class,
            data: data_encoding,
            entry: u64::from(read_le32(data, 24)),
            shoff: u64::from(read_le32(data, 32)),
            flags: read_le32(data, 36),
            shentsize: read_le16(data, 46),
            shnum: read_le16(data, 48),
            shstrndx: read_le16(data, 50),
        })
    }
}

fn parse_all_sections(data: &[u8], header: &ElfHeader, xlen: Xlen) -> Result<Vec<SectionHeader>> {
    let shoff = usize::try_from(header.shoff).map_err(|_| ElfError::SectionOutOfBounds)?;
    let mut sections = Vec::with_capacity(header.shnum as usize);
    for i in 0..header.shnum {
        let offset = shoff
            .checked_add(usize::from(i) * usize::from(header.shentsize))
            .ok_or(ElfError::SectionOutOfBounds)?;
        sections.push(parse_section_header(data, offset, xlen)?);
    }
    Ok(sections)
}

fn parse_section_header(data: &[u8], offset: usize, xlen: Xlen) -> Result<SectionHeader> {
    let end = |entsize: usize| offset.checked_add(entsize).ok_or(ElfError::SectionOutOfBounds);
    match xlen {
        Xlen::Rv64 => {
            if end(64)? > data.len() {
                return Err(ElfError::SectionOutOfBounds);
            }
            Ok(SectionHeader {
                name: read_le32(data, offset),
                sh_type: read_le32(data, offset + 4),
                flags: read_le64(data, offset + 8),
                addr: read_le64(data, offset + 16),
                offset: read_le64(data, offset + 24),
                size: read_le64(data, offset + 32),
                link: read_le32(data, offset + 40),
                entsize: read_le64(data, offset + 56),
            })
        }
        Xlen::Rv32 => {
            if end(40)? > data.len() {
                return Err(ElfError::SectionOutOfBounds);
            }
            Ok(SectionHeader {
                name: read_le32(data, offset),
                sh_type: read_le32(data, offset + 4),
                flags: u64::from(read_le32(data, offset + 8)),
                addr: u64::from(read_le32(data, offset + 12)),
                offset: u64::from(read_le32(data, offset + 16)),
                size: u64::from(read_le32(data, offset + 20)),
                link: read_le32(data, offset + 24),
                entsize: u64::from(read_le32(data, offset + 36)),
            })
        }
    }
}

fn load_alloc_sections(
    data: &[u8],
    sections: &[SectionHeader],
    shstrtab: Option<&SectionHeader>,
) -> Vec<LoadedSection> {
    let mut loaded = Vec::new();
    for section in sections {
        if section.flags & SHF_ALLOC == 0 {
            continue;
        }
        let name = match shstrtab {
            Some(tab) => extract_string(data, tab.offset as usize, section.name as usize),
            None => String::new(),
        };
        loaded.push(LoadedSection {
            name,
            addr: section.addr,
            flags: section.flags,
            data: load_section_data(data, section),
        });
    }
    loaded
}

fn load_section_data(data: &[u8], section: &SectionHeader) -> Vec<u8> {
    let size = section.size as usize;
    let offset = section.offset as usize;
    match section.sh_type {
        SHT_PROGBITS => {
            let end = offset.saturating_add(size).min(data.len());
            let mut out = data.get(offset..end).unwrap_or(&[]).to_vec();
            out.resize(size, 0);
            out
        }
        // BSS is zero-filled.
        SHT_NOBITS => vec![0u8; size],
        _ => Vec::new(),
    }
}

fn extract_string(data: &[u8], strtab_offset: usize, string_offset: usize) -> String {
    let start = strtab_offset + string_offset;
    let Some(rest) = data.get(start..) else {
        return String::new();
    };
    rest.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

fn parse_symbols(data: &[u8], sections: &[SectionHeader], xlen: Xlen) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    let Some(symtab) = sections.iter().find(|s| s.sh_type == SHT_SYMTAB) else {
        return symbols;
    };
    let Some(strtab) = sections.get(symtab.link as usize) else {
        return symbols;
    };

    let entsize = symtab.entsize as usize;
    if entsize == 0 {
        return symbols;
    }
    let count = symtab.size as usize / entsize;
    for i in 0..count {
        let offset = symtab.offset as usize + i * entsize;
        if let Some(sym) = parse_symbol(data, offset, strtab.offset as usize, xlen) {
            symbols.push(sym);
        }
    }
    symbols
}

fn parse_symbol(data: &[u8], offset: usize, strtab_offset: usize, xlen: Xlen) -> Option<Symbol> {
    let (name_idx, info, shndx, value, size) = match xlen {
        Xlen::Rv64 => {
            // ELF64 symbol: 24 bytes
            if offset + 24 > data.len() {
                return None;
            }
            (
                read_le32(data, offset) as usize,
                data[offset + 4],
                read_le16(data, offset + 6),
                read_le64(data, offset + 8),
                read_le64(data, offset + 16),
            )
        }
        Xlen::Rv32 => {
            // ELF32 symbol: 16 bytes
            if offset + 16 > data.len() {
                return None;
            }
            (
                read_le32(data, offset) as usize,
                data[offset + 12],
                read_le16(data, offset + 14),
                u64::from(read_le32(data, offset + 4)),
                u64::from(read_le32(data, offset + 8)),
            )
        }
    };

    Some(Symbol {
        name: extract_string(data, strtab_offset, name_idx),
        value,
        size,
        sym_type: info & 0xf,
        binding: info >> 4,
        shndx,
    })
}
