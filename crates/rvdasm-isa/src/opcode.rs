//! Opcode-table entry types and match predicates.

use crate::bits;

// Semantic flags carried by table entries. ALIAS marks suppressible
// pseudo-instructions; MACRO marks assembler-expansion placeholders that
// the matcher must never select. The register read/write classes document
// each entry's dataflow.
pub const INSN_ALIAS: u32 = 1 << 0;
pub const INSN_MACRO: u32 = 1 << 1;
pub const WR_XD: u32 = 1 << 2;
pub const WR_FD: u32 = 1 << 3;
pub const RD_XS1: u32 = 1 << 4;
pub const RD_XS2: u32 = 1 << 5;
pub const RD_FS1: u32 = 1 << 6;
pub const RD_FS2: u32 = 1 << 7;
pub const RD_FS3: u32 = 1 << 8;

/// ISA requirement of a table entry: a subset name, optionally
/// restricted to one register width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsaRequirement {
    pub xlen: Option<u32>,
    pub subset: &'static str,
}

impl IsaRequirement {
    pub const fn new(subset: &'static str) -> Self {
        Self { xlen: None, subset }
    }

    pub const fn rv32(subset: &'static str) -> Self {
        Self {
            xlen: Some(32),
            subset,
        }
    }

    pub const fn rv64(subset: &'static str) -> Self {
        Self {
            xlen: Some(64),
            subset,
        }
    }
}

/// Match predicate variants.
///
/// A closed set instead of per-entry function pointers; everything beyond
/// `Exact` layers an extra field constraint on top of the match/mask test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchCond {
    /// `(word ^ match) & mask == 0`.
    Exact,
    /// Exact, and the two source-register fields name the same register.
    Rs1EqRs2,
    /// Exact, and the compressed destination field is nonzero.
    CrdNonzero,
    /// CrdNonzero, and the compressed rs2 field is nonzero.
    CAddNonzero,
    /// CrdNonzero, and the destination is not sp (that slot encodes
    /// the stack-pointer-adjust form instead).
    CLuiValid,
    /// Never matches; used by macro placeholder entries.
    Never,
}

/// One row of the opcode table.
#[derive(Debug)]
pub struct OpcodeEntry {
    pub name: &'static str,
    pub subset: IsaRequirement,
    pub args: &'static str,
    pub match_bits: u32,
    pub mask: u32,
    pub cond: MatchCond,
    pub pinfo: u32,
}

impl OpcodeEntry {
    /// Whether this entry matches the instruction word.
    pub fn matches(&self, word: u32) -> bool {
        let exact = ((word ^ self.match_bits) & self.mask) == 0;
        match self.cond {
            MatchCond::Exact => exact,
            MatchCond::Rs1EqRs2 => exact && bits::rs1(word) == bits::rs2(word),
            MatchCond::CrdNonzero => exact && bits::crd(word) != 0,
            MatchCond::CAddNonzero => exact && bits::crd(word) != 0 && bits::crs2(word) != 0,
            MatchCond::CLuiValid => exact && bits::crd(word) != 0 && bits::crd(word) != 2,
            MatchCond::Never => false,
        }
    }

    /// Whether this is a suppressible pseudo-instruction alias.
    pub fn is_alias(&self) -> bool {
        self.pinfo & INSN_ALIAS != 0
    }

    /// Whether this is an assembler-macro placeholder.
    pub fn is_macro(&self) -> bool {
        self.pinfo & INSN_MACRO != 0
    }
}
