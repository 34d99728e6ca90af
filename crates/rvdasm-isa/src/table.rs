//! The instruction table.
//!
//! Entries are ordered: pseudo-instruction aliases precede the canonical
//! encodings they abbreviate, entries sharing a mnemonic are contiguous,
//! and register-operand forms precede immediate-operand forms of the same
//! encoding. The matcher takes the first structural hit, so the order is
//! load-bearing.

use crate::opcode::{
    INSN_ALIAS, INSN_MACRO, IsaRequirement, MatchCond, OpcodeEntry, RD_FS1, RD_FS2, RD_FS3,
    RD_XS1, RD_XS2, WR_FD, WR_XD,
};

// Instruction encodings, 32-bit.
pub const MATCH_LUI: u32 = 0x37;
pub const MASK_LUI: u32 = 0x7f;
pub const MATCH_AUIPC: u32 = 0x17;
pub const MASK_AUIPC: u32 = 0x7f;
pub const MATCH_JAL: u32 = 0x6f;
pub const MASK_JAL: u32 = 0x7f;
pub const MATCH_JALR: u32 = 0x67;
pub const MASK_JALR: u32 = 0x707f;
pub const MATCH_BEQ: u32 = 0x63;
pub const MATCH_BNE: u32 = 0x1063;
pub const MATCH_BLT: u32 = 0x4063;
pub const MATCH_BGE: u32 = 0x5063;
pub const MATCH_BLTU: u32 = 0x6063;
pub const MATCH_BGEU: u32 = 0x7063;
pub const MASK_BRANCH: u32 = 0x707f;
pub const MATCH_LB: u32 = 0x3;
pub const MATCH_LH: u32 = 0x1003;
pub const MATCH_LW: u32 = 0x2003;
pub const MATCH_LD: u32 = 0x3003;
pub const MATCH_LBU: u32 = 0x4003;
pub const MATCH_LHU: u32 = 0x5003;
pub const MATCH_LWU: u32 = 0x6003;
pub const MASK_LOAD: u32 = 0x707f;
pub const MATCH_SB: u32 = 0x23;
pub const MATCH_SH: u32 = 0x1023;
pub const MATCH_SW: u32 = 0x2023;
pub const MATCH_SD: u32 = 0x3023;
pub const MASK_STORE: u32 = 0x707f;
pub const MATCH_ADDI: u32 = 0x13;
pub const MASK_ADDI: u32 = 0x707f;
pub const MATCH_SLTI: u32 = 0x2013;
pub const MATCH_SLTIU: u32 = 0x3013;
pub const MATCH_XORI: u32 = 0x4013;
pub const MATCH_ORI: u32 = 0x6013;
pub const MATCH_ANDI: u32 = 0x7013;
pub const MASK_OP_IMM: u32 = 0x707f;
pub const MATCH_SLLI: u32 = 0x1013;
pub const MATCH_SRLI: u32 = 0x5013;
pub const MATCH_SRAI: u32 = 0x4000_5013;
pub const MASK_SHIFT_IMM: u32 = 0xfc00_707f;
pub const MATCH_ADD: u32 = 0x33;
pub const MATCH_SUB: u32 = 0x4000_0033;
pub const MATCH_SLL: u32 = 0x1033;
pub const MATCH_SLT: u32 = 0x2033;
pub const MATCH_SLTU: u32 = 0x3033;
pub const MATCH_XOR: u32 = 0x4033;
pub const MATCH_SRL: u32 = 0x5033;
pub const MATCH_SRA: u32 = 0x4000_5033;
pub const MATCH_OR: u32 = 0x6033;
pub const MATCH_AND: u32 = 0x7033;
pub const MASK_OP: u32 = 0xfe00_707f;
pub const MATCH_FENCE: u32 = 0xf;
pub const MASK_FENCE: u32 = 0x707f;
pub const MATCH_FENCE_I: u32 = 0x100f;
pub const MATCH_ECALL: u32 = 0x73;
pub const MATCH_EBREAK: u32 = 0x10_0073;
pub const MATCH_CSRRW: u32 = 0x1073;
pub const MATCH_CSRRS: u32 = 0x2073;
pub const MATCH_CSRRC: u32 = 0x3073;
pub const MATCH_CSRRWI: u32 = 0x5073;
pub const MATCH_CSRRSI: u32 = 0x6073;
pub const MATCH_CSRRCI: u32 = 0x7073;
pub const MASK_CSR_OP: u32 = 0x707f;
pub const MATCH_RDCYCLE: u32 = 0xc000_2073;
pub const MATCH_RDTIME: u32 = 0xc010_2073;
pub const MATCH_RDINSTRET: u32 = 0xc020_2073;
pub const MATCH_RDCYCLEH: u32 = 0xc800_2073;
pub const MATCH_RDTIMEH: u32 = 0xc810_2073;
pub const MATCH_RDINSTRETH: u32 = 0xc820_2073;
pub const MASK_RDCOUNTER: u32 = 0xffff_f07f;
pub const MATCH_MRET: u32 = 0x3020_0073;
pub const MATCH_WFI: u32 = 0x1050_0073;
pub const MATCH_MUL: u32 = 0x0200_0033;
pub const MATCH_MULH: u32 = 0x0200_1033;
pub const MATCH_MULHSU: u32 = 0x0200_2033;
pub const MATCH_MULHU: u32 = 0x0200_3033;
pub const MATCH_DIV: u32 = 0x0200_4033;
pub const MATCH_DIVU: u32 = 0x0200_5033;
pub const MATCH_REM: u32 = 0x0200_6033;
pub const MATCH_REMU: u32 = 0x0200_7033;
pub const MATCH_FLW: u32 = 0x2007;
pub const MATCH_FSW: u32 = 0x2027;
pub const MATCH_FADD_S: u32 = 0x53;
pub const MATCH_FSUB_S: u32 = 0x0800_0053;
pub const MATCH_FMUL_S: u32 = 0x1000_0053;
pub const MATCH_FDIV_S: u32 = 0x1800_0053;
pub const MASK_FP_OP: u32 = 0xfe00_007f;
pub const MATCH_FMADD_S: u32 = 0x43;
pub const MASK_FMADD_S: u32 = 0x0600_007f;
pub const MATCH_CUSTOM0: u32 = 0x0b;
pub const MATCH_CUSTOM1: u32 = 0x2b;
pub const MATCH_CUSTOM2: u32 = 0x5b;
pub const MATCH_CUSTOM3: u32 = 0x7b;
pub const MASK_CUSTOM: u32 = 0x7f;

// Instruction encodings, compressed.
pub const MATCH_C_ADDI4SPN: u32 = 0x0;
pub const MATCH_C_LW: u32 = 0x4000;
pub const MATCH_C_SW: u32 = 0xc000;
pub const MATCH_C_ADDI: u32 = 0x1;
pub const MATCH_C_JAL: u32 = 0x2001;
pub const MATCH_C_LI: u32 = 0x4001;
pub const MATCH_C_ADDI16SP: u32 = 0x6101;
pub const MASK_C_ADDI16SP: u32 = 0xef83;
pub const MATCH_C_LUI: u32 = 0x6001;
pub const MATCH_C_SRLI: u32 = 0x8001;
pub const MATCH_C_SRAI: u32 = 0x8401;
pub const MASK_C_SHIFT: u32 = 0xec03;
pub const MATCH_C_ANDI: u32 = 0x8801;
pub const MASK_C_ANDI: u32 = 0xec03;
pub const MATCH_C_SUB: u32 = 0x8c01;
pub const MATCH_C_XOR: u32 = 0x8c21;
pub const MATCH_C_OR: u32 = 0x8c41;
pub const MATCH_C_AND: u32 = 0x8c61;
pub const MASK_C_ALU: u32 = 0xfc63;
pub const MATCH_C_J: u32 = 0xa001;
pub const MATCH_C_BEQZ: u32 = 0xc001;
pub const MATCH_C_BNEZ: u32 = 0xe001;
pub const MATCH_C_SLLI: u32 = 0x2;
pub const MATCH_C_LWSP: u32 = 0x4002;
pub const MATCH_C_JR: u32 = 0x8002;
pub const MASK_C_JR: u32 = 0xf07f;
pub const MATCH_C_MV: u32 = 0x8002;
pub const MASK_C_MV: u32 = 0xf003;
pub const MATCH_C_EBREAK: u32 = 0x9002;
pub const MASK_C_EBREAK: u32 = 0xffff;
pub const MATCH_C_JALR: u32 = 0x9002;
pub const MASK_C_JALR: u32 = 0xf07f;
pub const MATCH_C_ADD: u32 = 0x9002;
pub const MASK_C_ADD: u32 = 0xf003;
pub const MATCH_C_SWSP: u32 = 0xc002;
pub const MASK_C_OP: u32 = 0xe003;

// Operand-field masks, for narrowing pseudo-instruction matches.
pub const MASK_RD: u32 = 0xf80;
pub const MASK_RS1: u32 = 0xf_8000;
pub const MASK_RS2: u32 = 0x1f0_0000;
pub const MASK_IMM: u32 = 0xfff0_0000;
pub const MASK_UIMM: u32 = 0xffff_f000;
pub const MASK_PRED: u32 = 0x0f00_0000;
pub const MASK_SUCC: u32 = 0x00f0_0000;
pub const MASK_RM: u32 = 0x7000;
pub const MASK_CRD: u32 = 0xf80;
pub const MASK_CRS2: u32 = 0x7c;
pub const MASK_RVC_IMM: u32 = 0x107c;

const X_RA_RS1: u32 = crate::regs::X_RA << 15;
const X_RA_RD: u32 = crate::regs::X_RA << 7;
const X_RA_CRD: u32 = crate::regs::X_RA << 7;
const X_T1_RS1: u32 = crate::regs::X_T1 << 15;
const CSR_CYCLE_FIELD: u32 = 0xc00 << 20;

const fn op(
    name: &'static str,
    subset: IsaRequirement,
    args: &'static str,
    match_bits: u32,
    mask: u32,
    cond: MatchCond,
    pinfo: u32,
) -> OpcodeEntry {
    OpcodeEntry {
        name,
        subset,
        args,
        match_bits,
        mask,
        cond,
        pinfo,
    }
}

const I: IsaRequirement = IsaRequirement::new("I");
const I32: IsaRequirement = IsaRequirement::rv32("I");
const I64: IsaRequirement = IsaRequirement::rv64("I");
const M: IsaRequirement = IsaRequirement::new("M");
const F: IsaRequirement = IsaRequirement::new("F");
const C: IsaRequirement = IsaRequirement::new("C");
const C32: IsaRequirement = IsaRequirement::rv32("C");
const XCUSTOM: IsaRequirement = IsaRequirement::new("Xcustom");

use MatchCond::{CAddNonzero, CLuiValid, CrdNonzero, Exact, Never};

/// The builtin instruction table.
pub static OPCODES: &[OpcodeEntry] = &[
    op("unimp", C, "", 0, 0xffff, Exact, 0),
    // csrw cycle, x0
    op("unimp", I, "", MATCH_CSRRW | CSR_CYCLE_FIELD, 0xffff_ffff, Exact, 0),
    op("ebreak", C, "", MATCH_C_EBREAK, MASK_C_EBREAK, Exact, INSN_ALIAS),
    op("ebreak", I, "", MATCH_EBREAK, 0xffff_ffff, Exact, 0),
    op("sbreak", C, "", MATCH_C_EBREAK, MASK_C_EBREAK, Exact, INSN_ALIAS),
    op("sbreak", I, "", MATCH_EBREAK, 0xffff_ffff, Exact, INSN_ALIAS),
    op("ret", C, "", MATCH_C_JR | X_RA_CRD, MASK_C_JR | MASK_CRD, Exact, INSN_ALIAS),
    op("ret", I, "", MATCH_JALR | X_RA_RS1, MASK_JALR | MASK_RD | MASK_RS1 | MASK_IMM, Exact, INSN_ALIAS | RD_XS1),
    op("jr", C, "Cd", MATCH_C_JR, MASK_C_JR, CrdNonzero, INSN_ALIAS),
    op("jr", I, "s", MATCH_JALR, MASK_JALR | MASK_RD | MASK_IMM, Exact, INSN_ALIAS | RD_XS1),
    op("jr", I, "s,j", MATCH_JALR, MASK_JALR | MASK_RD, Exact, RD_XS1),
    op("jalr", C, "Cd", MATCH_C_JALR, MASK_C_JALR, CrdNonzero, INSN_ALIAS),
    op("jalr", I, "s", MATCH_JALR | X_RA_RD, MASK_JALR | MASK_RD | MASK_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("jalr", I, "s,j", MATCH_JALR | X_RA_RD, MASK_JALR | MASK_RD, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("jalr", I, "d,s", MATCH_JALR, MASK_JALR | MASK_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("jalr", I, "d,s,j", MATCH_JALR, MASK_JALR, Exact, WR_XD | RD_XS1),
    op("j", C, "Ca", MATCH_C_J, MASK_C_OP, Exact, INSN_ALIAS),
    op("j", I, "a", MATCH_JAL, MASK_JAL | MASK_RD, Exact, 0),
    op("jal", C32, "Ca", MATCH_C_JAL, MASK_C_OP, Exact, INSN_ALIAS),
    op("jal", I, "a", MATCH_JAL | X_RA_RD, MASK_JAL | MASK_RD, Exact, INSN_ALIAS | WR_XD),
    op("jal", I, "d,a", MATCH_JAL, MASK_JAL, Exact, WR_XD),
    op("call", I, "c", X_T1_RS1 | X_RA_RD, 0, Never, INSN_MACRO),
    op("call", I, "d,c", X_T1_RS1, 0, Never, INSN_MACRO),
    op("tail", I, "c", X_T1_RS1, 0, Never, INSN_MACRO),
    op("jump", I, "c,s", 0, 0, Never, INSN_MACRO),
    op("nop", C, "", MATCH_C_ADDI, 0xffff, Exact, INSN_ALIAS),
    op("nop", I, "", MATCH_ADDI, MASK_ADDI | MASK_RD | MASK_RS1 | MASK_IMM, Exact, INSN_ALIAS),
    op("lui", C, "Cd,Cu", MATCH_C_LUI, MASK_C_OP, CLuiValid, INSN_ALIAS),
    op("lui", I, "d,u", MATCH_LUI, MASK_LUI, Exact, WR_XD),
    op("li", C, "Cd,Cu", MATCH_C_LUI, MASK_C_OP, CLuiValid, INSN_ALIAS),
    op("li", C, "Cd,Cj", MATCH_C_LI, MASK_C_OP, CrdNonzero, INSN_ALIAS),
    op("li", C, "Cd,0", MATCH_C_LI, MASK_C_OP | MASK_RVC_IMM, CrdNonzero, INSN_ALIAS),
    op("li", I, "d,j", MATCH_ADDI, MASK_ADDI | MASK_RS1, Exact, INSN_ALIAS | WR_XD),
    op("li", I, "d,I", 0, 0, Never, INSN_MACRO),
    op("mv", C, "Cd,CV", MATCH_C_MV, MASK_C_MV, CAddNonzero, INSN_ALIAS),
    op("mv", I, "d,s", MATCH_ADDI, MASK_ADDI | MASK_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("move", C, "Cd,CV", MATCH_C_MV, MASK_C_MV, CAddNonzero, INSN_ALIAS),
    op("move", I, "d,s", MATCH_ADDI, MASK_ADDI | MASK_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("andi", C, "Cs,Cw,Cj", MATCH_C_ANDI, MASK_C_ANDI, Exact, INSN_ALIAS),
    op("andi", I, "d,s,j", MATCH_ANDI, MASK_OP_IMM, Exact, WR_XD | RD_XS1),
    op("and", C, "Cs,Cw,Ct", MATCH_C_AND, MASK_C_ALU, Exact, INSN_ALIAS),
    op("and", C, "Cs,Ct,Cw", MATCH_C_AND, MASK_C_ALU, Exact, INSN_ALIAS),
    op("and", C, "Cs,Cw,Cj", MATCH_C_ANDI, MASK_C_ANDI, Exact, INSN_ALIAS),
    op("and", I, "d,s,t", MATCH_AND, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("and", I, "d,s,j", MATCH_ANDI, MASK_OP_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("beqz", C, "Cs,Cp", MATCH_C_BEQZ, MASK_C_OP, Exact, INSN_ALIAS),
    op("beqz", I, "s,p", MATCH_BEQ, MASK_BRANCH | MASK_RS2, Exact, INSN_ALIAS | RD_XS1),
    op("beq", I, "s,t,p", MATCH_BEQ, MASK_BRANCH, Exact, RD_XS1 | RD_XS2),
    op("blez", I, "t,p", MATCH_BGE, MASK_BRANCH | MASK_RS1, Exact, INSN_ALIAS | RD_XS2),
    op("bgez", I, "s,p", MATCH_BGE, MASK_BRANCH | MASK_RS2, Exact, INSN_ALIAS | RD_XS1),
    op("ble", I, "t,s,p", MATCH_BGE, MASK_BRANCH, Exact, INSN_ALIAS | RD_XS1 | RD_XS2),
    op("bleu", I, "t,s,p", MATCH_BGEU, MASK_BRANCH, Exact, INSN_ALIAS | RD_XS1 | RD_XS2),
    op("bge", I, "s,t,p", MATCH_BGE, MASK_BRANCH, Exact, RD_XS1 | RD_XS2),
    op("bgeu", I, "s,t,p", MATCH_BGEU, MASK_BRANCH, Exact, RD_XS1 | RD_XS2),
    op("bltz", I, "s,p", MATCH_BLT, MASK_BRANCH | MASK_RS2, Exact, INSN_ALIAS | RD_XS1),
    op("bgtz", I, "t,p", MATCH_BLT, MASK_BRANCH | MASK_RS1, Exact, INSN_ALIAS | RD_XS2),
    op("blt", I, "s,t,p", MATCH_BLT, MASK_BRANCH, Exact, RD_XS1 | RD_XS2),
    op("bltu", I, "s,t,p", MATCH_BLTU, MASK_BRANCH, Exact, RD_XS1 | RD_XS2),
    op("bgt", I, "t,s,p", MATCH_BLT, MASK_BRANCH, Exact, INSN_ALIAS | RD_XS1 | RD_XS2),
    op("bgtu", I, "t,s,p", MATCH_BLTU, MASK_BRANCH, Exact, INSN_ALIAS | RD_XS1 | RD_XS2),
    op("bnez", C, "Cs,Cp", MATCH_C_BNEZ, MASK_C_OP, Exact, INSN_ALIAS),
    op("bnez", I, "s,p", MATCH_BNE, MASK_BRANCH | MASK_RS2, Exact, INSN_ALIAS | RD_XS1),
    op("bne", I, "s,t,p", MATCH_BNE, MASK_BRANCH, Exact, RD_XS1 | RD_XS2),
    op("addi", C, "Ct,Cc,CK", MATCH_C_ADDI4SPN, MASK_C_OP, Exact, INSN_ALIAS),
    op("addi", C, "Cd,CU,Cj", MATCH_C_ADDI, MASK_C_OP, CrdNonzero, INSN_ALIAS),
    op("addi", C, "Cc,Cc,CL", MATCH_C_ADDI16SP, MASK_C_ADDI16SP, Exact, INSN_ALIAS),
    op("addi", I, "d,s,j", MATCH_ADDI, MASK_ADDI, Exact, WR_XD | RD_XS1),
    op("add", C, "Cd,CU,CV", MATCH_C_ADD, MASK_C_ADD, CAddNonzero, INSN_ALIAS),
    op("add", C, "Cd,CV,CU", MATCH_C_ADD, MASK_C_ADD, CAddNonzero, INSN_ALIAS),
    op("add", C, "Cd,CU,Cj", MATCH_C_ADDI, MASK_C_OP, CrdNonzero, INSN_ALIAS),
    op("add", C, "Ct,Cc,CK", MATCH_C_ADDI4SPN, MASK_C_OP, Exact, INSN_ALIAS),
    op("add", C, "Cc,Cc,CL", MATCH_C_ADDI16SP, MASK_C_ADDI16SP, Exact, INSN_ALIAS),
    op("add", I, "d,s,t", MATCH_ADD, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("add", I, "d,s,t,0", MATCH_ADD, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("add", I, "d,s,j", MATCH_ADDI, MASK_ADDI, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("la", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("lla", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("la.tls.gd", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("la.tls.ie", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("neg", I, "d,t", MATCH_SUB, MASK_OP | MASK_RS1, Exact, INSN_ALIAS | WR_XD | RD_XS2),
    op("slli", C, "Cd,CU,C>", MATCH_C_SLLI, MASK_C_OP, CrdNonzero, INSN_ALIAS),
    op("slli", I, "d,s,>", MATCH_SLLI, MASK_SHIFT_IMM, Exact, WR_XD | RD_XS1),
    op("sll", C, "Cd,CU,C>", MATCH_C_SLLI, MASK_C_OP, CrdNonzero, INSN_ALIAS),
    op("sll", I, "d,s,t", MATCH_SLL, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("sll", I, "d,s,>", MATCH_SLLI, MASK_SHIFT_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("srli", C, "Cs,Cw,C>", MATCH_C_SRLI, MASK_C_SHIFT, Exact, INSN_ALIAS),
    op("srli", I, "d,s,>", MATCH_SRLI, MASK_SHIFT_IMM, Exact, WR_XD | RD_XS1),
    op("srl", C, "Cs,Cw,C>", MATCH_C_SRLI, MASK_C_SHIFT, Exact, INSN_ALIAS),
    op("srl", I, "d,s,t", MATCH_SRL, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("srl", I, "d,s,>", MATCH_SRLI, MASK_SHIFT_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("srai", C, "Cs,Cw,C>", MATCH_C_SRAI, MASK_C_SHIFT, Exact, INSN_ALIAS),
    op("srai", I, "d,s,>", MATCH_SRAI, MASK_SHIFT_IMM, Exact, WR_XD | RD_XS1),
    op("sra", C, "Cs,Cw,C>", MATCH_C_SRAI, MASK_C_SHIFT, Exact, INSN_ALIAS),
    op("sra", I, "d,s,t", MATCH_SRA, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("sra", I, "d,s,>", MATCH_SRAI, MASK_SHIFT_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("sub", C, "Cs,Cw,Ct", MATCH_C_SUB, MASK_C_ALU, Exact, INSN_ALIAS),
    op("sub", I, "d,s,t", MATCH_SUB, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("lb", I, "d,o(s)", MATCH_LB, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("lb", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("lbu", I, "d,o(s)", MATCH_LBU, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("lbu", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("lh", I, "d,o(s)", MATCH_LH, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("lh", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("lhu", I, "d,o(s)", MATCH_LHU, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("lhu", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("lw", C, "Cd,Cm(Cc)", MATCH_C_LWSP, MASK_C_OP, CrdNonzero, INSN_ALIAS),
    op("lw", C, "Ct,Ck(Cs)", MATCH_C_LW, MASK_C_OP, Exact, INSN_ALIAS),
    op("lw", I, "d,o(s)", MATCH_LW, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("lw", I, "d,A", 0, 0, Never, INSN_MACRO),
    op("lwu", I64, "d,o(s)", MATCH_LWU, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("ld", I64, "d,o(s)", MATCH_LD, MASK_LOAD, Exact, WR_XD | RD_XS1),
    op("not", I, "d,s", MATCH_XORI | MASK_IMM, MASK_OP_IMM | MASK_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("ori", I, "d,s,j", MATCH_ORI, MASK_OP_IMM, Exact, WR_XD | RD_XS1),
    op("or", C, "Cs,Cw,Ct", MATCH_C_OR, MASK_C_ALU, Exact, INSN_ALIAS),
    op("or", C, "Cs,Ct,Cw", MATCH_C_OR, MASK_C_ALU, Exact, INSN_ALIAS),
    op("or", I, "d,s,t", MATCH_OR, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("or", I, "d,s,j", MATCH_ORI, MASK_OP_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("auipc", I, "d,u", MATCH_AUIPC, MASK_AUIPC, Exact, WR_XD),
    op("seqz", I, "d,s", MATCH_SLTIU | (1 << 20), MASK_OP_IMM | MASK_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("snez", I, "d,t", MATCH_SLTU, MASK_OP | MASK_RS1, Exact, INSN_ALIAS | WR_XD | RD_XS2),
    op("sltz", I, "d,s", MATCH_SLT, MASK_OP | MASK_RS2, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("sgtz", I, "d,t", MATCH_SLT, MASK_OP | MASK_RS1, Exact, INSN_ALIAS | WR_XD | RD_XS2),
    op("slti", I, "d,s,j", MATCH_SLTI, MASK_OP_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("slt", I, "d,s,t", MATCH_SLT, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("slt", I, "d,s,j", MATCH_SLTI, MASK_OP_IMM, Exact, WR_XD | RD_XS1),
    op("sltiu", I, "d,s,j", MATCH_SLTIU, MASK_OP_IMM, Exact, WR_XD | RD_XS1),
    op("sltu", I, "d,s,t", MATCH_SLTU, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("sltu", I, "d,s,j", MATCH_SLTIU, MASK_OP_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    op("sgt", I, "d,t,s", MATCH_SLT, MASK_OP, Exact, INSN_ALIAS | WR_XD | RD_XS1 | RD_XS2),
    op("sgtu", I, "d,t,s", MATCH_SLTU, MASK_OP, Exact, INSN_ALIAS | WR_XD | RD_XS1 | RD_XS2),
    op("sb", I, "t,q(s)", MATCH_SB, MASK_STORE, Exact, RD_XS1 | RD_XS2),
    op("sb", I, "t,A,s", 0, 0, Never, INSN_MACRO),
    op("sh", I, "t,q(s)", MATCH_SH, MASK_STORE, Exact, RD_XS1 | RD_XS2),
    op("sh", I, "t,A,s", 0, 0, Never, INSN_MACRO),
    op("sw", C, "CV,CM(Cc)", MATCH_C_SWSP, MASK_C_OP, Exact, INSN_ALIAS),
    op("sw", C, "Ct,Ck(Cs)", MATCH_C_SW, MASK_C_OP, Exact, INSN_ALIAS),
    op("sw", I, "t,q(s)", MATCH_SW, MASK_STORE, Exact, RD_XS1 | RD_XS2),
    op("sw", I, "t,A,s", 0, 0, Never, INSN_MACRO),
    op("sd", I64, "t,q(s)", MATCH_SD, MASK_STORE, Exact, RD_XS1 | RD_XS2),
    op("fence", I, "", MATCH_FENCE | MASK_PRED | MASK_SUCC, MASK_FENCE | MASK_RD | MASK_RS1 | MASK_IMM, Exact, INSN_ALIAS),
    op("fence", I, "P,Q", MATCH_FENCE, MASK_FENCE | MASK_RD | MASK_RS1 | (MASK_IMM & !MASK_PRED & !MASK_SUCC), Exact, 0),
    op("fence.i", I, "", MATCH_FENCE_I, MASK_FENCE | MASK_RD | MASK_RS1 | MASK_IMM, Exact, 0),
    op("rdcycle", I, "d", MATCH_RDCYCLE, MASK_RDCOUNTER, Exact, WR_XD),
    op("rdinstret", I, "d", MATCH_RDINSTRET, MASK_RDCOUNTER, Exact, WR_XD),
    op("rdtime", I, "d", MATCH_RDTIME, MASK_RDCOUNTER, Exact, WR_XD),
    op("rdcycleh", I32, "d", MATCH_RDCYCLEH, MASK_RDCOUNTER, Exact, WR_XD),
    op("rdinstreth", I32, "d", MATCH_RDINSTRETH, MASK_RDCOUNTER, Exact, WR_XD),
    op("rdtimeh", I32, "d", MATCH_RDTIMEH, MASK_RDCOUNTER, Exact, WR_XD),
    op("ecall", I, "", MATCH_ECALL, 0xffff_ffff, Exact, 0),
    op("scall", I, "", MATCH_ECALL, 0xffff_ffff, Exact, 0),
    op("xori", I, "d,s,j", MATCH_XORI, MASK_OP_IMM, Exact, WR_XD | RD_XS1),
    op("xor", C, "Cs,Cw,Ct", MATCH_C_XOR, MASK_C_ALU, Exact, INSN_ALIAS),
    op("xor", C, "Cs,Ct,Cw", MATCH_C_XOR, MASK_C_ALU, Exact, INSN_ALIAS),
    op("xor", I, "d,s,t", MATCH_XOR, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("xor", I, "d,s,j", MATCH_XORI, MASK_OP_IMM, Exact, INSN_ALIAS | WR_XD | RD_XS1),
    // Control and status registers.
    op("csrr", I, "d,E", MATCH_CSRRS, MASK_CSR_OP | MASK_RS1, Exact, WR_XD),
    op("csrwi", I, "E,Z", MATCH_CSRRWI, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrw", I, "E,s", MATCH_CSRRW, MASK_CSR_OP | MASK_RD, Exact, RD_XS1),
    op("csrw", I, "E,Z", MATCH_CSRRWI, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrsi", I, "E,Z", MATCH_CSRRSI, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrs", I, "E,s", MATCH_CSRRS, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrs", I, "E,Z", MATCH_CSRRSI, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrci", I, "E,Z", MATCH_CSRRCI, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrc", I, "E,s", MATCH_CSRRC, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrc", I, "E,Z", MATCH_CSRRCI, MASK_CSR_OP | MASK_RD, Exact, WR_XD | RD_XS1),
    op("csrrw", I, "d,E,s", MATCH_CSRRW, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrw", I, "d,E,Z", MATCH_CSRRWI, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrs", I, "d,E,s", MATCH_CSRRS, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrs", I, "d,E,Z", MATCH_CSRRSI, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrc", I, "d,E,s", MATCH_CSRRC, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrc", I, "d,E,Z", MATCH_CSRRCI, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrwi", I, "d,E,Z", MATCH_CSRRWI, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrsi", I, "d,E,Z", MATCH_CSRRSI, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    op("csrrci", I, "d,E,Z", MATCH_CSRRCI, MASK_CSR_OP, Exact, WR_XD | RD_XS1),
    // Machine-mode instructions.
    op("mret", I, "", MATCH_MRET, 0xffff_ffff, Exact, 0),
    op("wfi", I, "", MATCH_WFI, 0xffff_ffff, Exact, 0),
    // Multiply/divide subset.
    op("mul", M, "d,s,t", MATCH_MUL, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("mulh", M, "d,s,t", MATCH_MULH, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("mulhu", M, "d,s,t", MATCH_MULHU, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("mulhsu", M, "d,s,t", MATCH_MULHSU, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("div", M, "d,s,t", MATCH_DIV, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("divu", M, "d,s,t", MATCH_DIVU, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("rem", M, "d,s,t", MATCH_REM, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    op("remu", M, "d,s,t", MATCH_REMU, MASK_OP, Exact, WR_XD | RD_XS1 | RD_XS2),
    // Single-precision float subset.
    op("flw", F, "D,o(s)", MATCH_FLW, MASK_LOAD, Exact, WR_FD | RD_XS1),
    op("fsw", F, "T,q(s)", MATCH_FSW, MASK_STORE, Exact, RD_XS1 | RD_FS2),
    op("fadd.s", F, "D,S,T", MATCH_FADD_S | MASK_RM, MASK_FP_OP | MASK_RM, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fadd.s", F, "D,S,T,m", MATCH_FADD_S, MASK_FP_OP, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fsub.s", F, "D,S,T", MATCH_FSUB_S | MASK_RM, MASK_FP_OP | MASK_RM, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fsub.s", F, "D,S,T,m", MATCH_FSUB_S, MASK_FP_OP, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fmul.s", F, "D,S,T", MATCH_FMUL_S | MASK_RM, MASK_FP_OP | MASK_RM, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fmul.s", F, "D,S,T,m", MATCH_FMUL_S, MASK_FP_OP, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fdiv.s", F, "D,S,T", MATCH_FDIV_S | MASK_RM, MASK_FP_OP | MASK_RM, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fdiv.s", F, "D,S,T,m", MATCH_FDIV_S, MASK_FP_OP, Exact, WR_FD | RD_FS1 | RD_FS2),
    op("fmadd.s", F, "D,S,T,R", MATCH_FMADD_S | MASK_RM, MASK_FMADD_S | MASK_RM, Exact, WR_FD | RD_FS1 | RD_FS2 | RD_FS3),
    op("fmadd.s", F, "D,S,T,R,m", MATCH_FMADD_S, MASK_FMADD_S, Exact, WR_FD | RD_FS1 | RD_FS2 | RD_FS3),
    // Custom-extension opcode space.
    op("custom0", XCUSTOM, "^d,^s,^t,^j", MATCH_CUSTOM0, MASK_CUSTOM, Exact, 0),
    op("custom1", XCUSTOM, "^d,^s,^t,^j", MATCH_CUSTOM1, MASK_CUSTOM, Exact, 0),
    op("custom2", XCUSTOM, "^d,^s,^t,^j", MATCH_CUSTOM2, MASK_CUSTOM, Exact, 0),
    op("custom3", XCUSTOM, "^d,^s,^t,^j", MATCH_CUSTOM3, MASK_CUSTOM, Exact, 0),
    // Compressed instructions, canonical spellings.
    op("c.ebreak", C, "", MATCH_C_EBREAK, MASK_C_EBREAK, Exact, 0),
    op("c.jr", C, "Cd", MATCH_C_JR, MASK_C_JR, CrdNonzero, 0),
    op("c.jalr", C, "Cd", MATCH_C_JALR, MASK_C_JALR, CrdNonzero, 0),
    op("c.j", C, "Ca", MATCH_C_J, MASK_C_OP, Exact, 0),
    op("c.jal", C32, "Ca", MATCH_C_JAL, MASK_C_OP, Exact, 0),
    op("c.nop", C, "", MATCH_C_ADDI, 0xffff, Exact, 0),
    op("c.lui", C, "Cd,Cu", MATCH_C_LUI, MASK_C_OP, CLuiValid, 0),
    op("c.li", C, "Cd,Cj", MATCH_C_LI, MASK_C_OP, CrdNonzero, 0),
    op("c.mv", C, "Cd,CV", MATCH_C_MV, MASK_C_MV, CAddNonzero, 0),
    op("c.andi", C, "Cs,Cj", MATCH_C_ANDI, MASK_C_ANDI, Exact, 0),
    op("c.and", C, "Cs,Ct", MATCH_C_AND, MASK_C_ALU, Exact, 0),
    op("c.beqz", C, "Cs,Cp", MATCH_C_BEQZ, MASK_C_OP, Exact, 0),
    op("c.bnez", C, "Cs,Cp", MATCH_C_BNEZ, MASK_C_OP, Exact, 0),
    op("c.addi4spn", C, "Ct,Cc,CK", MATCH_C_ADDI4SPN, MASK_C_OP, Exact, 0),
    op("c.addi", C, "Cd,Cj", MATCH_C_ADDI, MASK_C_OP, CrdNonzero, 0),
    op("c.addi16sp", C, "Cc,CL", MATCH_C_ADDI16SP, MASK_C_ADDI16SP, Exact, 0),
    op("c.add", C, "Cd,CV", MATCH_C_ADD, MASK_C_ADD, CAddNonzero, 0),
    op("c.slli", C, "Cd,C>", MATCH_C_SLLI, MASK_C_OP, CrdNonzero, 0),
    op("c.srli", C, "Cs,C>", MATCH_C_SRLI, MASK_C_SHIFT, Exact, 0),
    op("c.srai", C, "Cs,C>", MATCH_C_SRAI, MASK_C_SHIFT, Exact, 0),
    op("c.sub", C, "Cs,Ct", MATCH_C_SUB, MASK_C_ALU, Exact, 0),
    op("c.lwsp", C, "Cd,Cm(Cc)", MATCH_C_LWSP, MASK_C_OP, CrdNonzero, 0),
    op("c.lw", C, "Ct,Ck(Cs)", MATCH_C_LW, MASK_C_OP, Exact, 0),
    op("c.or", C, "Cs,Ct", MATCH_C_OR, MASK_C_ALU, Exact, 0),
    op("c.swsp", C, "CV,CM(Cc)", MATCH_C_SWSP, MASK_C_OP, Exact, 0),
    op("c.sw", C, "Ct,Ck(Cs)", MATCH_C_SW, MASK_C_OP, Exact, 0),
    op("c.xor", C, "Cs,Ct", MATCH_C_XOR, MASK_C_ALU, Exact, 0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::{Operand, parse_args};
    use std::collections::HashSet;

    // Mnemonic-sharing entries must be contiguous so the matcher's
    // first-hit rule picks among them deterministically.
    #[test]
    fn test_mnemonic_contiguity() {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut prev = "";
        for e in OPCODES {
            if e.name != prev {
                assert!(seen.insert(e.name), "mnemonic {} not contiguous", e.name);
                prev = e.name;
            }
        }
    }

    // Matchable entries must carry only directives the renderer knows.
    #[test]
    fn test_matchable_entries_parse_clean() {
        for e in OPCODES {
            if e.cond == MatchCond::Never {
                continue;
            }
            let ops = parse_args(e.args);
            assert!(
                !ops.iter().any(|o| matches!(o, Operand::Bad(_))),
                "entry {} has unparseable args {:?}",
                e.name,
                e.args
            );
        }
    }

    // match/mask consistency: the match bits must survive their own mask.
    #[test]
    fn test_entries_self_match() {
        for e in OPCODES {
            if e.cond == MatchCond::Never {
                continue;
            }
            assert_eq!(
                e.match_bits & e.mask,
                e.match_bits,
                "entry {} has match bits outside its mask",
                e.name
            );
        }
    }

    // Register-before-immediate ordering among same-encoding aliases:
    // the form listing a register operand precedes the one listing an
    // immediate in its place (jalr "d,s" before "d,s,j" and so on).
    #[test]
    fn test_register_forms_precede_immediate_forms() {
        let order: Vec<&str> = OPCODES
            .iter()
            .filter(|e| e.name == "jalr" && e.subset.xlen.is_none() && !e.args.starts_with('C'))
            .map(|e| e.args)
            .collect();
        assert_eq!(order, ["s", "s,j", "d,s", "d,s,j"]);
    }

    #[test]
    fn test_canonical_add_matches() {
        // add x1, x2, x3
        let word = 0x0031_00b3;
        let hit = OPCODES.iter().find(|e| e.matches(word)).unwrap();
        assert_eq!(hit.name, "add");
        assert_eq!(hit.args, "d,s,t");
    }

    #[test]
    fn test_alias_wins_over_canonical() {
        // addi x1, x0, 42 disassembles as li under alias rules.
        let word = 0x02a0_0093;
        let hit = OPCODES.iter().find(|e| e.matches(word)).unwrap();
        assert_eq!(hit.name, "li");
        assert!(hit.is_alias());
    }

    #[test]
    fn test_ret_matches_before_jr() {
        // jalr x0, 0(ra)
        let word = 0x0000_8067;
        let hit = OPCODES.iter().find(|e| e.matches(word)).unwrap();
        assert_eq!(hit.name, "ret");
    }

    #[test]
    fn test_c_lui_sp_slot_is_addi16sp() {
        // rd = sp selects the stack-adjust encoding, not c.lui.
        let word = 0x6101; // c.addi16sp sp, 32 pattern base
        let hit = OPCODES.iter().find(|e| e.matches(word)).unwrap();
        assert_eq!(hit.name, "addi");
        assert_eq!(hit.args, "Cc,Cc,CL");
    }

    #[test]
    fn test_macro_entries_never_match() {
        for e in OPCODES.iter().filter(|e| e.is_macro()) {
            assert_eq!(e.cond, MatchCond::Never);
            assert!(!e.matches(e.match_bits));
        }
    }
}
