//! Instruction fetch, matching, and rendering.

use std::fmt::{self, Write as _};

use thiserror::Error;

use crate::bits;
use crate::csr::csr_name;
use crate::index::OpcodeIndex;
use crate::opcode::OpcodeEntry;
use crate::operand::{Operand, parse_args};
use crate::regs::RegNameMode;
use crate::state::{DisassemblyState, UpperBits};
use crate::subset::{SubsetSet, Xlen};
use crate::table::{
    MASK_ADDI, MASK_AUIPC, MASK_C_OP, MASK_JALR, MASK_LUI, MATCH_ADDI, MATCH_AUIPC, MATCH_C_LUI,
    MATCH_JALR, MATCH_LUI, OPCODES,
};

/// Instruction length in bytes, from the low bits of the first 16-bit
/// parcel. Lengths of 6 and 8 are recognized for forward compatibility
/// but no encodings of those widths are defined here.
pub fn insn_length(word: u32) -> usize {
    if (word & 0x3) != 0x3 {
        2
    } else if (word & 0x1f) != 0x1f {
        4
    } else if (word & 0x3f) == 0x1f {
        6
    } else {
        8
    }
}

/// Byte-fetch errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    #[error("read of {len} bytes at {addr:#x} is out of range")]
    OutOfRange { addr: u64, len: usize },
}

/// Read-only source of instruction bytes.
pub trait ByteSource {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<(), FetchError>;
}

/// A byte slice mapped at a base address.
pub struct SliceSource<'a> {
    base: u64,
    bytes: &'a [u8],
}

impl<'a> SliceSource<'a> {
    pub fn new(base: u64, bytes: &'a [u8]) -> Self {
        Self { base, bytes }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<(), FetchError> {
        let err = FetchError::OutOfRange {
            addr,
            len: buf.len(),
        };
        let start = addr.checked_sub(self.base).ok_or_else(|| err.clone())?;
        let start = usize::try_from(start).map_err(|_| err.clone())?;
        let end = start.checked_add(buf.len()).ok_or_else(|| err.clone())?;
        let src = self.bytes.get(start..end).ok_or(err)?;
        buf.copy_from_slice(src);
        Ok(())
    }
}

/// Maps addresses back to symbolic names for target annotations.
pub trait Symbolizer {
    fn describe(&self, addr: u64) -> Option<String>;
}

/// Symbolizer that knows nothing.
pub struct NullSymbolizer;

impl Symbolizer for NullSymbolizer {
    fn describe(&self, _addr: u64) -> Option<String> {
        None
    }
}

/// Disassembler configuration.
#[derive(Clone, Debug)]
pub struct DisasmConfig {
    pub xlen: Xlen,
    pub subsets: SubsetSet,
    pub reg_names: RegNameMode,
    pub no_aliases: bool,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            xlen: Xlen::Rv64,
            subsets: SubsetSet::empty(),
            reg_names: RegNameMode::default(),
            no_aliases: false,
        }
    }
}

/// One decoded instruction.
#[derive(Debug)]
pub struct Insn {
    pub len: usize,
    pub mnemonic: String,
    pub operands: String,
    /// Resolved fusion target, rendered through the symbolizer.
    pub annotation: Option<String>,
    pub entry: Option<&'static OpcodeEntry>,
}

impl fmt::Display for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic)?;
        if !self.operands.is_empty() {
            write!(f, "\t{}", self.operands)?;
        }
        if let Some(ann) = &self.annotation {
            write!(f, " # {ann}")?;
        }
        Ok(())
    }
}

/// Table-driven disassembler for one session.
///
/// Carries the fusion state across calls, so a session should walk
/// instructions in address order.
pub struct Disassembler {
    config: DisasmConfig,
    index: OpcodeIndex,
    parsed: Vec<Vec<Operand>>,
    state: DisassemblyState,
}

impl Disassembler {
    pub fn new(config: DisasmConfig) -> Self {
        let index = OpcodeIndex::build(&config.subsets);
        let parsed = OPCODES.iter().map(|e| parse_args(e.args)).collect();
        Self {
            config,
            index,
            parsed,
            state: DisassemblyState::new(),
        }
    }

    pub fn config(&self) -> &DisasmConfig {
        &self.config
    }

    /// Seed the global-pointer value for gp-relative fusion.
    pub fn set_gp(&mut self, gp: u64) {
        self.state.set_gp(gp);
    }

    /// Fetch one instruction word at `pc` as little-endian 16-bit
    /// parcels. A failed read of the first parcel is an error; running
    /// out of bytes mid-instruction is tolerated and yields the parcels
    /// collected so far. At most 4 bytes are fetched.
    pub fn fetch(&self, pc: u64, src: &impl ByteSource) -> Result<u32, FetchError> {
        let mut word: u32 = 0;
        let mut n = 0usize;
        while n < 4 && n < insn_length(word) {
            let mut packet = [0u8; 2];
            if let Err(e) = src.read(pc + n as u64, &mut packet) {
                if n > 0 {
                    break;
                }
                return Err(e);
            }
            word |= u32::from(u16::from_le_bytes(packet)) << (8 * n);
            n += 2;
        }
        Ok(word)
    }

    /// Fetch and decode the instruction at `pc`.
    pub fn disassemble(
        &mut self,
        pc: u64,
        src: &impl ByteSource,
        sym: &dyn Symbolizer,
    ) -> Result<Insn, FetchError> {
        let word = self.fetch(pc, src)?;
        Ok(self.disassemble_word(pc, word, sym))
    }

    /// Decode an already-fetched instruction word.
    pub fn disassemble_word(&mut self, pc: u64, word: u32, sym: &dyn Symbolizer) -> Insn {
        let len = insn_length(word);
        let cands = self.index.candidates(word);
        let start = OPCODES.len() - cands.len();
        for (off, entry) in cands.iter().enumerate() {
            if !self.config.subsets.supports(entry.subset.subset) {
                continue;
            }
            if !entry.matches(word) {
                continue;
            }
            if self.config.no_aliases && entry.is_alias() {
                continue;
            }
            if let Some(xlen) = entry.subset.xlen {
                if xlen != self.config.xlen.bits() {
                    continue;
                }
            }
            let ops = &self.parsed[start + off];
            let operands = render_args(&self.config, &mut self.state, ops, pc, word, sym);
            let annotation = self
                .state
                .take_resolved()
                .map(|addr| format_target(addr, sym));
            return Insn {
                len,
                mnemonic: entry.name.to_string(),
                operands,
                annotation,
                entry: Some(entry),
            };
        }

        // No match: print the raw bits.
        Insn {
            len,
            mnemonic: format!("{word:#x}"),
            operands: String::new(),
            annotation: None,
            entry: None,
        }
    }
}

fn format_target(addr: u64, sym: &dyn Symbolizer) -> String {
    match sym.describe(addr) {
        Some(desc) => format!("{addr:#x} <{desc}>"),
        None => format!("{addr:#x}"),
    }
}

const RM_NAMES: [Option<&str>; 8] = [
    Some("rne"),
    Some("rtz"),
    Some("rdn"),
    Some("rup"),
    Some("rmm"),
    None,
    None,
    Some("dyn"),
];

const PRED_SUCC_NAMES: [Option<&str>; 16] = [
    None,
    Some("w"),
    Some("r"),
    Some("rw"),
    Some("o"),
    Some("ow"),
    Some("or"),
    Some("orw"),
    Some("i"),
    Some("iw"),
    Some("ir"),
    Some("irw"),
    Some("io"),
    Some("iow"),
    Some("ior"),
    Some("iorw"),
];

fn arg_name(val: u32, names: &[Option<&'static str>]) -> &'static str {
    names
        .get(val as usize)
        .copied()
        .flatten()
        .unwrap_or("unknown")
}

fn render_args(
    config: &DisasmConfig,
    state: &mut DisassemblyState,
    ops: &[Operand],
    pc: u64,
    word: u32,
    sym: &dyn Symbolizer,
) -> String {
    let gpr = config.reg_names.gpr_names();
    let fpr = config.reg_names.fpr_names();
    let rd = bits::rd(word);
    let rs1 = bits::rs1(word);
    let mut out = String::new();

    for (i, op) in ops.iter().enumerate() {
        match op {
            Operand::Rd => {
                // An upper-immediate write arms address fusion.
                if (word & MASK_AUIPC) == MATCH_AUIPC {
                    let hi = pc.wrapping_add_signed(i64::from(bits::imm_u(word)));
                    state.record_upper(rd, UpperBits::PcRelative(hi));
                } else if (word & MASK_LUI) == MATCH_LUI {
                    state.record_upper(rd, UpperBits::Absolute(i64::from(bits::imm_u(word)) as u64));
                }
                out.push_str(gpr[rd as usize]);
            }
            Operand::Rs1 => out.push_str(gpr[rs1 as usize]),
            Operand::Rs2 => out.push_str(gpr[bits::rs2(word) as usize]),
            Operand::ImmI => {
                // Only address-forming encodings feed fusion here.
                if (word & MASK_ADDI) == MATCH_ADDI || (word & MASK_JALR) == MATCH_JALR {
                    state.fuse(rs1, bits::imm_i(word));
                }
                let _ = write!(out, "{}", bits::imm_i(word));
            }
            Operand::OffsetI => {
                state.fuse(rs1, bits::imm_i(word));
                let _ = write!(out, "{}", bits::imm_i(word));
            }
            Operand::OffsetS => {
                state.fuse(rs1, bits::imm_s(word));
                let _ = write!(out, "{}", bits::imm_s(word));
            }
            Operand::TargetJ => {
                let target = pc.wrapping_add_signed(i64::from(bits::imm_j(word)));
                out.push_str(&format_target(target, sym));
            }
            Operand::TargetB => {
                let target = pc.wrapping_add_signed(i64::from(bits::imm_b(word)));
                out.push_str(&format_target(target, sym));
            }
            Operand::ImmU => {
                let _ = write!(out, "{:#x}", (word >> 12) & 0xf_ffff);
            }
            Operand::Shamt => {
                let _ = write!(out, "{:#x}", bits::shamt(word));
            }
            Operand::ShamtW => {
                let _ = write!(out, "{:#x}", bits::shamt_w(word));
            }
            Operand::RoundMode => out.push_str(arg_name(bits::rm(word), &RM_NAMES)),
            Operand::FencePred => out.push_str(arg_name(bits::fence_pred(word), &PRED_SUCC_NAMES)),
            Operand::FenceSucc => out.push_str(arg_name(bits::fence_succ(word), &PRED_SUCC_NAMES)),
            Operand::Csr => match csr_name(bits::csr(word)) {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "{:#x}", bits::csr(word));
                }
            },
            Operand::ImmZ => {
                let _ = write!(out, "{rs1}");
            }
            Operand::Zero => {
                if i + 1 == ops.len() {
                    out.push('0');
                }
            }
            Operand::Frd => out.push_str(fpr[rd as usize]),
            Operand::Frs1 => out.push_str(fpr[rs1 as usize]),
            Operand::Frs2 => out.push_str(fpr[bits::rs2(word) as usize]),
            Operand::Frs3 => out.push_str(fpr[bits::rs3(word) as usize]),
            Operand::Crd | Operand::CrdSrc => {
                let crd = bits::crd(word);
                if *op == Operand::Crd && (word & MASK_C_OP) == MATCH_C_LUI {
                    state.record_upper(
                        crd,
                        UpperBits::Absolute(i64::from(bits::rvc_lui_imm(word)) as u64),
                    );
                }
                out.push_str(gpr[crd as usize]);
            }
            Operand::Sp => out.push_str(gpr[crate::regs::X_SP as usize]),
            Operand::Crs2 => out.push_str(gpr[bits::crs2(word) as usize]),
            Operand::Crs1Prime => out.push_str(gpr[bits::crs1s(word) as usize]),
            Operand::Crs2Prime => out.push_str(gpr[bits::crs2s(word) as usize]),
            Operand::CImm => {
                let _ = write!(out, "{}", bits::rvc_imm(word));
            }
            Operand::CLwImm => {
                let _ = write!(out, "{}", bits::rvc_lw_imm(word));
            }
            Operand::CLwspImm => {
                let _ = write!(out, "{}", bits::rvc_lwsp_imm(word));
            }
            Operand::CSwspImm => {
                let _ = write!(out, "{}", bits::rvc_swsp_imm(word));
            }
            Operand::CAddi4spnImm => {
                let _ = write!(out, "{}", bits::rvc_addi4spn_imm(word));
            }
            Operand::CAddi16spImm => {
                let _ = write!(out, "{}", bits::rvc_addi16sp_imm(word));
            }
            Operand::CTargetB => {
                let target = pc.wrapping_add_signed(i64::from(bits::rvc_b_imm(word)));
                out.push_str(&format_target(target, sym));
            }
            Operand::CTargetJ => {
                let target = pc.wrapping_add_signed(i64::from(bits::rvc_j_imm(word)));
                out.push_str(&format_target(target, sym));
            }
            Operand::CImmU => {
                let _ = write!(out, "{:#x}", bits::rvc_imm(word) as u32 & 0xf_ffff);
            }
            Operand::CShamt => {
                let _ = write!(out, "{:#x}", bits::rvc_shamt(word) & 0x3f);
            }
            Operand::CShamtW => {
                let _ = write!(out, "{:#x}", bits::rvc_shamt(word) & 0x1f);
            }
            Operand::XdNum => {
                let _ = write!(out, "{rd}");
            }
            Operand::XsNum => {
                let _ = write!(out, "{rs1}");
            }
            Operand::XtNum => {
                let _ = write!(out, "{}", bits::rs2(word));
            }
            Operand::XjNum => {
                let _ = write!(out, "{}", bits::custom_imm(word));
            }
            Operand::Lit(c) => out.push(*c),
            Operand::Bad(c) => {
                let _ = write!(out, "# internal error, undefined modifier ({c})");
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dasm(config: DisasmConfig) -> Disassembler {
        Disassembler::new(config)
    }

    fn rv32(arch: &str) -> Disassembler {
        dasm(DisasmConfig {
            xlen: Xlen::Rv32,
            subsets: SubsetSet::parse(arch).unwrap(),
            ..DisasmConfig::default()
        })
    }

    fn line(d: &mut Disassembler, pc: u64, word: u32) -> String {
        d.disassemble_word(pc, word, &NullSymbolizer).to_string()
    }

    #[test]
    fn test_insn_length() {
        assert_eq!(insn_length(0x4501), 2); // c.li
        assert_eq!(insn_length(0x0010_0093), 4); // addi
        assert_eq!(insn_length(0x001f), 6);
        assert_eq!(insn_length(0x003f), 8);
        // The length depends only on the first parcel.
        for w in [0u32, 1, 2, 3, 0x1f, 0x3f, 0x4501, 0x0010_0093] {
            assert_eq!(insn_length(w), insn_length((w & 0xffff) | 0xdead_0000));
        }
    }

    #[test]
    fn test_fetch_little_endian_parcels() {
        let bytes = [0x93, 0x00, 0x10, 0x00]; // addi x1, x0, 1
        let src = SliceSource::new(0x80, &bytes);
        let d = dasm(DisasmConfig::default());
        assert_eq!(d.fetch(0x80, &src).unwrap(), 0x0010_0093);
    }

    #[test]
    fn test_fetch_compressed_reads_one_parcel() {
        let bytes = [0x05, 0x45]; // c.li a0, 1
        let src = SliceSource::new(0, &bytes);
        let d = dasm(DisasmConfig::default());
        assert_eq!(d.fetch(0, &src).unwrap(), 0x4505);
    }

    #[test]
    fn test_fetch_first_parcel_failure_is_fatal() {
        let src = SliceSource::new(0, &[]);
        let d = dasm(DisasmConfig::default());
        assert!(d.fetch(0, &src).is_err());
    }

    #[test]
    fn test_fetch_tolerates_truncation_after_first_parcel() {
        // Low parcel of a 4-byte instruction, then end of section.
        let bytes = [0x93, 0x00];
        let src = SliceSource::new(0, &bytes);
        let d = dasm(DisasmConfig::default());
        assert_eq!(d.fetch(0, &src).unwrap(), 0x0093);
    }

    #[test]
    fn test_unmatched_word_prints_bits() {
        let mut d = dasm(DisasmConfig::default());
        // All-ones is no defined encoding.
        assert_eq!(line(&mut d, 0, 0xffff_ffff), "0xffffffff");
    }

    #[test]
    fn test_alias_rendering() {
        let mut d = dasm(DisasmConfig::default());
        // Base register x0 resolves the immediate as a tiny absolute
        // address, so li carries an annotation.
        assert_eq!(line(&mut d, 0, 0x02a0_0093), "li\tra,42 # 0x2a");
        assert_eq!(line(&mut d, 0, 0x0000_8067), "ret");
    }

    #[test]
    fn test_no_aliases_reveals_canonical_form() {
        let mut d = dasm(DisasmConfig {
            no_aliases: true,
            ..DisasmConfig::default()
        });
        // ret decays to the first non-alias jalr-encoding entry.
        assert_eq!(line(&mut d, 0, 0x0000_8067), "jr\tra,0");
        // li decays likewise.
        assert_eq!(line(&mut d, 0, 0x02a0_0093), "addi\tra,zero,42 # 0x2a");
    }

    // Suppression is monotonic over table entries, not mnemonic strings:
    // the canonical spelling that surfaces for a suppressed alias (c.nop,
    // c.addi16sp, jr, ...) may never appear in an alias-preferring pass.
    // The guarantee is that no alias-flagged entry is ever selected.
    #[test]
    fn test_no_aliases_never_selects_alias_entry() {
        use crate::opcode::MatchCond;
        let mut d64 = dasm(DisasmConfig {
            no_aliases: true,
            ..DisasmConfig::default()
        });
        let mut d32 = dasm(DisasmConfig {
            xlen: Xlen::Rv32,
            no_aliases: true,
            ..DisasmConfig::default()
        });
        for e in OPCODES {
            if e.cond == MatchCond::Never || !e.matches(e.match_bits) {
                continue;
            }
            for d in [&mut d32, &mut d64] {
                let insn = d.disassemble_word(0, e.match_bits, &NullSymbolizer);
                if let Some(hit) = insn.entry {
                    assert!(
                        !hit.is_alias(),
                        "word {:#x} selected alias {}",
                        e.match_bits,
                        hit.name
                    );
                }
            }
        }
    }

    // Every entry's own match word must decode, through the index and
    // the gating checks, to the first table entry enabled for that width
    // that matches it.
    #[test]
    fn test_match_words_decode_to_first_match() {
        use crate::opcode::MatchCond;
        let mut d64 = dasm(DisasmConfig::default());
        let mut d32 = dasm(DisasmConfig {
            xlen: Xlen::Rv32,
            ..DisasmConfig::default()
        });
        for e in OPCODES {
            if e.cond == MatchCond::Never || !e.matches(e.match_bits) {
                continue;
            }
            let d = match e.subset.xlen {
                Some(32) => &mut d32,
                _ => &mut d64,
            };
            let xlen = d.config().xlen.bits();
            let expected = OPCODES
                .iter()
                .find(|c| c.matches(e.match_bits) && c.subset.xlen.unwrap_or(xlen) == xlen)
                .map(|c| c.name)
                .unwrap();
            let insn = d.disassemble_word(0, e.match_bits, &NullSymbolizer);
            assert_eq!(insn.mnemonic, expected, "word {:#x}", e.match_bits);
        }
    }

    #[test]
    fn test_numeric_register_names() {
        let mut d = dasm(DisasmConfig {
            reg_names: RegNameMode::Numeric,
            ..DisasmConfig::default()
        });
        assert_eq!(line(&mut d, 0, 0x02a0_0093), "li\tx1,42 # 0x2a");
    }

    #[test]
    fn test_subset_gating_mul() {
        // mul a0, a0, a1
        let word = 0x02b5_0533;
        let mut with_m = rv32("RV32IM");
        assert_eq!(line(&mut with_m, 0, word), "mul\ta0,a0,a1");
        let mut without_m = rv32("RV32I");
        assert_eq!(line(&mut without_m, 0, word), "0x2b50533");
    }

    #[test]
    fn test_xlen_gating_rdcycleh() {
        // rdcycleh a0
        let word = 0xc800_2573;
        let mut d32 = rv32("RV32I");
        assert_eq!(line(&mut d32, 0, word), "rdcycleh\ta0");
        let mut d64 = dasm(DisasmConfig::default());
        // On RV64 the counter-high entry is skipped and the encoding
        // falls back to the canonical CSR read.
        assert_eq!(line(&mut d64, 0, word), "csrr\ta0,cycleh");
    }

    #[test]
    fn test_csr_rendering() {
        let mut d = dasm(DisasmConfig::default());
        // csrr t0, mstatus
        assert_eq!(line(&mut d, 0, 0x3000_22f3), "csrr\tt0,mstatus");
        // Unknown CSR number prints as hex.
        assert_eq!(line(&mut d, 0, 0x8ff0_22f3), "csrr\tt0,0x8ff");
        // Counter pseudo wins over csrr.
        assert_eq!(line(&mut d, 0, 0xc000_2573), "rdcycle\ta0");
    }

    #[test]
    fn test_branch_target() {
        let mut d = dasm(DisasmConfig::default());
        // beq zero, zero, -4 at pc 0x100
        assert_eq!(line(&mut d, 0x100, 0xfe00_0ee3), "beqz\tzero,0xfc");
    }

    #[test]
    fn test_jump_target_symbolized() {
        struct One;
        impl Symbolizer for One {
            fn describe(&self, addr: u64) -> Option<String> {
                (addr == 0x108).then(|| "loop".to_string())
            }
        }
        let mut d = dasm(DisasmConfig::default());
        // jal x0, +8 at 0x100 renders as j
        let insn = d.disassemble_word(0x100, 0x0080_006f, &One);
        assert_eq!(insn.to_string(), "j\t0x108 <loop>");
    }

    #[test]
    fn test_auipc_addi_fusion() {
        let mut d = dasm(DisasmConfig::default());
        // auipc a0, 0x1 at 0x1000
        assert_eq!(line(&mut d, 0x1000, 0x0000_1517), "auipc\ta0,0x1");
        // addi a0, a0, 0x234 resolves to 0x1000 + 0x1000 + 0x234
        assert_eq!(line(&mut d, 0x1004, 0x2345_0513), "addi\ta0,a0,564 # 0x2234");
    }

    #[test]
    fn test_lui_load_fusion_is_absolute() {
        let mut d = dasm(DisasmConfig::default());
        assert_eq!(line(&mut d, 0x4000, 0x0000_1537), "lui\ta0,0x1");
        // lw a0, 0x34(a0)
        assert_eq!(line(&mut d, 0x4004, 0x0345_2503), "lw\ta0,52(a0) # 0x1034");
    }

    #[test]
    fn test_fusion_consumed_once() {
        let mut d = dasm(DisasmConfig::default());
        let _ = line(&mut d, 0x4000, 0x0000_1537); // lui a0, 0x1
        assert_eq!(line(&mut d, 0x4004, 0x0345_2503), "lw\ta0,52(a0) # 0x1034");
        assert_eq!(line(&mut d, 0x4008, 0x0345_2503), "lw\ta0,52(a0)");
    }

    #[test]
    fn test_gp_relative_annotation() {
        let mut d = dasm(DisasmConfig::default());
        d.set_gp(0x1_2000);
        // lw a0, 8(gp)
        let word = 0x0081_a503;
        assert_eq!(line(&mut d, 0, word), "lw\ta0,8(gp) # 0x12008");
        // gp is reusable.
        assert_eq!(line(&mut d, 4, word), "lw\ta0,8(gp) # 0x12008");
    }

    #[test]
    fn test_store_offset_fusion() {
        let mut d = dasm(DisasmConfig::default());
        let _ = line(&mut d, 0, 0x0000_15b7); // lui a1, 0x1
        // sw a0, -4(a1)
        assert_eq!(line(&mut d, 4, 0xfea5_ae23), "sw\ta0,-4(a1) # 0xffc");
    }

    #[test]
    fn test_compressed_rendering() {
        let mut d = rv32("RV32IMC");
        assert_eq!(line(&mut d, 0, 0x4505), "li\ta0,1");
        assert_eq!(line(&mut d, 0, 0x4512), "lw\ta0,4(sp)");
        assert_eq!(line(&mut d, 0, 0x0001), "nop");
        assert_eq!(line(&mut d, 0, 0x9002), "ebreak");
    }

    #[test]
    fn test_c_lui_arms_fusion() {
        let mut d = dasm(DisasmConfig::default());
        // c.lui a0, 0x1 renders as lui under alias rules.
        assert_eq!(line(&mut d, 0, 0x6505), "lui\ta0,0x1");
        // lw a0, 0(a0)
        assert_eq!(line(&mut d, 2, 0x0005_2503), "lw\ta0,0(a0) # 0x1000");
    }

    #[test]
    fn test_c_j_target() {
        let mut d = dasm(DisasmConfig::default());
        assert_eq!(line(&mut d, 0x200, 0xa011), "j\t0x204");
    }

    #[test]
    fn test_fence_sets() {
        let mut d = dasm(DisasmConfig::default());
        // fence (iorw, iorw)
        assert_eq!(line(&mut d, 0, 0x0ff0_000f), "fence");
        // fence rw, w
        assert_eq!(line(&mut d, 0, 0x0310_000f), "fence\trw,w");
    }

    #[test]
    fn test_rounding_mode() {
        let mut d = dasm(DisasmConfig::default());
        // fadd.s fa0, fa1, fa2 with dynamic rounding omits the mode.
        assert_eq!(line(&mut d, 0, 0x00c5_f553), "fadd.s\tfa0,fa1,fa2");
        // Explicit rne is printed.
        assert_eq!(line(&mut d, 0, 0x00c5_8553), "fadd.s\tfa0,fa1,fa2,rne");
    }

    #[test]
    fn test_custom_opcode_operands() {
        let mut d = dasm(DisasmConfig {
            subsets: SubsetSet::parse("RV64IMXcustom").unwrap(),
            ..DisasmConfig::default()
        });
        // custom0 rd=1, rs1=2, rs2=3, funct7=5
        let word = 0x0a31_008b;
        assert_eq!(line(&mut d, 0, word), "custom0\t1,2,3,5");
    }

    #[test]
    fn test_custom_requires_extension() {
        let mut d = rv32("RV32I");
        assert_eq!(line(&mut d, 0, 0x0a31_008b), "0xa31008b");
    }

    #[test]
    fn test_csr_immediate_forms() {
        let mut d = dasm(DisasmConfig::default());
        // csrrwi a0, mstatus, 3; the csrrw register-form entry precedes
        // the csrrwi spelling for the same encoding, so csrrw prints.
        let word = 0x3001_d573;
        assert_eq!(line(&mut d, 0, word), "csrrw\ta0,mstatus,3");
        // rd = x0 form is the csrwi pseudo.
        let word = 0x3001_d073;
        assert_eq!(line(&mut d, 0, word), "csrwi\tmstatus,3");
    }

    #[test]
    fn test_shift_amounts_hex() {
        let mut d = dasm(DisasmConfig::default());
        // slli a0, a0, 0x1f
        assert_eq!(line(&mut d, 0, 0x01f5_1513), "slli\ta0,a0,0x1f");
    }
}
