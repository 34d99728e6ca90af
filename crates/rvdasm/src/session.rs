//! Disassembly session over a parsed ELF file.

use std::io::Write;

use rvdasm_elf::ElfFile;
use rvdasm_isa::{DisasmConfig, Disassembler, Insn, SliceSource};

use crate::Result;
use crate::options::apply_options;

/// One disassembly run: the parsed ELF plus a configured decoder.
///
/// The decoder carries address-fusion state across instructions, so
/// each executable section is walked once, in address order.
pub struct Session {
    elf: ElfFile,
    disasm: Disassembler,
}

impl Session {
    /// Parse an ELF image and configure the decoder from it. The
    /// register width comes from the ELF class and the global pointer
    /// from the `_gp` symbol; `options` is a comma-separated option
    /// string (`no-aliases`, `numeric`, `march=...`).
    pub fn new(data: &[u8], options: &str) -> Result<Self> {
        let elf = ElfFile::parse(data)?;
        let mut config = DisasmConfig {
            xlen: elf.xlen(),
            ..DisasmConfig::default()
        };
        apply_options(&mut config, options);

        let mut disasm = Disassembler::new(config);
        if let Some(gp) = elf.gp() {
            disasm.set_gp(gp);
        }
        Ok(Self { elf, disasm })
    }

    pub fn elf(&self) -> &ElfFile {
        &self.elf
    }

    /// Decode the instruction at `pc`. The address must fall inside a
    /// loaded section.
    pub fn disassemble_at(&mut self, pc: u64) -> Result<Insn> {
        let section = self
            .elf
            .section_containing(pc)
            .ok_or(rvdasm_isa::FetchError::OutOfRange { addr: pc, len: 2 })?;
        let src = SliceSource::new(section.addr, &section.data);
        Ok(self.disasm.disassemble(pc, &src, &self.elf)?)
    }

    /// Write an objdump-style listing of every executable section.
    pub fn list_to(&mut self, out: &mut impl Write) -> Result<()> {
        for section in self.elf.executable_sections() {
            writeln!(out, "Disassembly of section {}:", section.name)?;
            let src = SliceSource::new(section.addr, &section.data);
            let end = section.addr + section.data.len() as u64;
            let mut pc = section.addr;
            while pc < end {
                if let Some(sym) = self.elf.nearest_symbol(pc) {
                    if sym.value == pc {
                        writeln!(out, "\n{pc:08x} <{}>:", sym.name)?;
                    }
                }
                let word = self.disasm.fetch(pc, &src)?;
                let insn = self.disasm.disassemble_word(pc, word, &self.elf);
                let bits = if insn.len <= 2 { word & 0xffff } else { word };
                writeln!(
                    out,
                    "{pc:8x}:\t{bits:0width$x}\t{insn}",
                    width = insn.len.min(4) * 2
                )?;
                pc += insn.len as u64;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
