//! Instruction-word bitfield and immediate extraction.
//!
//! RISC-V immediates are scattered across the word; each format (I/S/B/U/J
//! and the compressed sub-formats) has its own bit order and sign width.

/// Sign-extend the low `bits` bits of `value`.
#[inline]
const fn sign_extend(value: u32, bits: u32) -> i32 {
    ((value << (32 - bits)) as i32) >> (32 - bits)
}

// 32-bit register fields.

#[inline]
pub fn rd(word: u32) -> u32 {
    (word >> 7) & 0x1f
}

#[inline]
pub fn rs1(word: u32) -> u32 {
    (word >> 15) & 0x1f
}

#[inline]
pub fn rs2(word: u32) -> u32 {
    (word >> 20) & 0x1f
}

#[inline]
pub fn rs3(word: u32) -> u32 {
    (word >> 27) & 0x1f
}

// 32-bit immediates.

/// I-type immediate: imm[11:0] at bit 20, signed.
#[inline]
pub fn imm_i(word: u32) -> i32 {
    (word as i32) >> 20
}

/// S-type immediate: imm[11:5|4:0], signed.
#[inline]
pub fn imm_s(word: u32) -> i32 {
    (((word as i32) >> 25) << 5) | ((word >> 7) & 0x1f) as i32
}

/// B-type immediate: imm[12|10:5|4:1|11], signed, even.
#[inline]
pub fn imm_b(word: u32) -> i32 {
    let imm = ((word >> 31) & 0x1) << 12
        | ((word >> 7) & 0x1) << 11
        | ((word >> 25) & 0x3f) << 5
        | ((word >> 8) & 0xf) << 1;
    sign_extend(imm, 13)
}

/// U-type immediate: imm[31:12] already in place, signed.
#[inline]
pub fn imm_u(word: u32) -> i32 {
    (word & 0xffff_f000) as i32
}

/// J-type immediate: imm[20|10:1|11|19:12], signed, even.
#[inline]
pub fn imm_j(word: u32) -> i32 {
    let imm = ((word >> 31) & 0x1) << 20
        | ((word >> 12) & 0xff) << 12
        | ((word >> 20) & 0x1) << 11
        | ((word >> 21) & 0x3ff) << 1;
    sign_extend(imm, 21)
}

/// Shift amount, 6 bits (RV64 form; RV32 uses the low 5).
#[inline]
pub fn shamt(word: u32) -> u32 {
    (word >> 20) & 0x3f
}

/// Shift amount for 32-bit-operand shifts, 5 bits.
#[inline]
pub fn shamt_w(word: u32) -> u32 {
    (word >> 20) & 0x1f
}

/// Rounding-mode field.
#[inline]
pub fn rm(word: u32) -> u32 {
    (word >> 12) & 0x7
}

/// Fence predecessor set.
#[inline]
pub fn fence_pred(word: u32) -> u32 {
    (word >> 24) & 0xf
}

/// Fence successor set.
#[inline]
pub fn fence_succ(word: u32) -> u32 {
    (word >> 20) & 0xf
}

/// CSR number field.
#[inline]
pub fn csr(word: u32) -> u32 {
    (word >> 20) & 0xfff
}

/// Custom-extension immediate (funct7 field).
#[inline]
pub fn custom_imm(word: u32) -> u32 {
    (word >> 25) & 0x7f
}

// Compressed register fields.

/// Full 5-bit rd/rs1 field of CI/CR formats.
#[inline]
pub fn crd(word: u32) -> u32 {
    (word >> 7) & 0x1f
}

/// Full 5-bit rs2 field of CR/CSS formats.
#[inline]
pub fn crs2(word: u32) -> u32 {
    (word >> 2) & 0x1f
}

/// 3-bit rs1' field (x8-x15), already rebased.
#[inline]
pub fn crs1s(word: u32) -> u32 {
    ((word >> 7) & 0x7) + 8
}

/// 3-bit rs2'/rd' field (x8-x15), already rebased.
#[inline]
pub fn crs2s(word: u32) -> u32 {
    ((word >> 2) & 0x7) + 8
}

// Compressed immediates.

/// CI-format 6-bit signed immediate: imm[5] at bit 12, imm[4:0] at bit 2.
#[inline]
pub fn rvc_imm(word: u32) -> i32 {
    sign_extend(((word >> 12) & 0x1) << 5 | ((word >> 2) & 0x1f), 6)
}

/// C.LUI immediate, shifted into place: imm[17:12], signed.
#[inline]
pub fn rvc_lui_imm(word: u32) -> i32 {
    sign_extend((((word >> 12) & 0x1) << 5 | ((word >> 2) & 0x1f)) << 12, 18)
}

/// CI-format shift amount (unsigned 6 bits).
#[inline]
pub fn rvc_shamt(word: u32) -> u32 {
    ((word >> 12) & 0x1) << 5 | ((word >> 2) & 0x1f)
}

/// C.LW / C.SW offset: uimm[5:3|2|6].
#[inline]
pub fn rvc_lw_imm(word: u32) -> u32 {
    ((word >> 6) & 0x1) << 2 | ((word >> 10) & 0x7) << 3 | ((word >> 5) & 0x1) << 6
}

/// C.LWSP offset: uimm[5|4:2|7:6].
#[inline]
pub fn rvc_lwsp_imm(word: u32) -> u32 {
    ((word >> 4) & 0x7) << 2 | ((word >> 12) & 0x1) << 5 | ((word >> 2) & 0x3) << 6
}

/// C.SWSP offset: uimm[5:2|7:6].
#[inline]
pub fn rvc_swsp_imm(word: u32) -> u32 {
    ((word >> 9) & 0xf) << 2 | ((word >> 7) & 0x3) << 6
}

/// C.ADDI4SPN immediate: nzuimm[5:4|9:6|2|3].
#[inline]
pub fn rvc_addi4spn_imm(word: u32) -> u32 {
    ((word >> 6) & 0x1) << 2
        | ((word >> 5) & 0x1) << 3
        | ((word >> 11) & 0x3) << 4
        | ((word >> 7) & 0xf) << 6
}

/// C.ADDI16SP immediate: nzimm[9|4|6|8:7|5], signed.
#[inline]
pub fn rvc_addi16sp_imm(word: u32) -> i32 {
    let imm = ((word >> 6) & 0x1) << 4
        | ((word >> 2) & 0x1) << 5
        | ((word >> 5) & 0x1) << 6
        | ((word >> 3) & 0x3) << 7
        | ((word >> 12) & 0x1) << 9;
    sign_extend(imm, 10)
}

/// CB-format branch offset: imm[8|4:3|7:6|2:1|5], signed.
#[inline]
pub fn rvc_b_imm(word: u32) -> i32 {
    let imm = ((word >> 3) & 0x3) << 1
        | ((word >> 10) & 0x3) << 3
        | ((word >> 2) & 0x1) << 5
        | ((word >> 5) & 0x3) << 6
        | ((word >> 12) & 0x1) << 8;
    sign_extend(imm, 9)
}

/// CJ-format jump offset: imm[11|4|9:8|10|6|7|3:1|5], signed.
#[inline]
pub fn rvc_j_imm(word: u32) -> i32 {
    let imm = ((word >> 3) & 0x7) << 1
        | ((word >> 11) & 0x1) << 4
        | ((word >> 2) & 0x1) << 5
        | ((word >> 7) & 0x1) << 6
        | ((word >> 6) & 0x1) << 7
        | ((word >> 9) & 0x3) << 8
        | ((word >> 8) & 0x1) << 10
        | ((word >> 12) & 0x1) << 11;
    sign_extend(imm, 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reg_fields() {
        // add x1, x2, x3
        let word = 0x0031_00b3;
        assert_eq!(rd(word), 1);
        assert_eq!(rs1(word), 2);
        assert_eq!(rs2(word), 3);
    }

    #[test]
    fn test_imm_i_sign() {
        // addi x1, x0, -1
        assert_eq!(imm_i(0xfff0_0093), -1);
        // addi x1, x0, 1
        assert_eq!(imm_i(0x0010_0093), 1);
    }

    #[test]
    fn test_imm_s() {
        // sw x3, -4(x2) => imm[11:5]=0x7f, imm[4:0]=0x1c
        let word = 0xfe31_2e23;
        assert_eq!(imm_s(word), -4);
    }

    #[test]
    fn test_imm_b() {
        // beq x0, x0, -4 (backward branch)
        let word = 0xfe00_0ee3;
        assert_eq!(imm_b(word), -4);
    }

    #[test]
    fn test_imm_u() {
        // lui x1, 0x12345
        assert_eq!(imm_u(0x1234_50b7), 0x1234_5000);
        // Negative upper immediate sign-extends.
        assert_eq!(imm_u(0xffff_f0b7), -4096);
    }

    #[test]
    fn test_imm_j() {
        // jal x0, +8
        let word = 0x0080_006f;
        assert_eq!(imm_j(word), 8);
    }

    #[test]
    fn test_rvc_imm() {
        // c.addi x10, 1 = 0x0505
        assert_eq!(rvc_imm(0x0505), 1);
        // c.addi x10, -1 = 0x157d
        assert_eq!(rvc_imm(0x157d), -1);
    }

    #[test]
    fn test_rvc_lui_imm() {
        // c.lui x10, 1 = 0x6505
        assert_eq!(rvc_lui_imm(0x6505), 0x1000);
        // c.lui x10, 0x3f (imm[5]=1 -> negative)
        assert_eq!(rvc_lui_imm(0x757d), -0x1000);
    }

    #[test]
    fn test_rvc_j_imm() {
        // c.j +4 => imm[3:1]=010 at bits 3..5
        let word = 0xa011;
        assert_eq!(rvc_j_imm(word), 4);
    }
}
