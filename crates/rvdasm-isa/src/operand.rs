//! Operand format-string parsing.
//!
//! Each opcode entry carries a compact format string such as `d,s,t` or
//! `Ct,Ck(Cs)`. The string is parsed once into a sequence of [`Operand`]
//! directives; rendering then walks the sequence against the instruction
//! word. Keeping the directive set a closed enum means an entry with a
//! typo fails loudly at table-validation time instead of printing
//! garbage at disassembly time.

/// A single operand directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Destination register; records upper-bits state on lui/auipc.
    Rd,
    /// First source register.
    Rs1,
    /// Second source register.
    Rs2,
    /// I-type immediate; feeds address fusion on addi/jalr.
    ImmI,
    /// I-type load offset; always feeds address fusion.
    OffsetI,
    /// S-type store offset; always feeds address fusion.
    OffsetS,
    /// J-type jump target.
    TargetJ,
    /// B-type branch target.
    TargetB,
    /// Upper-immediate value, printed as the raw 20-bit field in hex.
    ImmU,
    /// 6-bit shift amount.
    Shamt,
    /// 5-bit shift amount for word-width shifts.
    ShamtW,
    /// Floating-point rounding mode.
    RoundMode,
    /// Fence predecessor set.
    FencePred,
    /// Fence successor set.
    FenceSucc,
    /// CSR number, printed by name when one is known.
    Csr,
    /// rs1 field printed as a bare immediate (CSR immediate forms).
    ImmZ,
    /// Literal `0`, elided unless it is the final directive.
    Zero,
    /// Floating-point destination register.
    Frd,
    /// Floating-point first source register.
    Frs1,
    /// Floating-point second source register.
    Frs2,
    /// Floating-point third source register.
    Frs3,
    /// Compressed: full rd field.
    Crd,
    /// Compressed: rd field as the constrained-equal source.
    CrdSrc,
    /// Compressed: implicit stack pointer.
    Sp,
    /// Compressed: full rs2 field.
    Crs2,
    /// Compressed: rs1' field (x8-x15).
    Crs1Prime,
    /// Compressed: rs2'/rd' field (x8-x15).
    Crs2Prime,
    /// Compressed: CI-format signed immediate.
    CImm,
    /// Compressed: word load/store offset.
    CLwImm,
    /// Compressed: stack-relative load offset.
    CLwspImm,
    /// Compressed: stack-relative store offset.
    CSwspImm,
    /// Compressed: addi4spn scaled immediate.
    CAddi4spnImm,
    /// Compressed: addi16sp scaled immediate.
    CAddi16spImm,
    /// Compressed: branch target.
    CTargetB,
    /// Compressed: jump target.
    CTargetJ,
    /// Compressed: lui immediate field, printed in hex.
    CImmU,
    /// Compressed: 6-bit shift amount.
    CShamt,
    /// Compressed: 5-bit shift amount.
    CShamtW,
    /// Custom extension: rd field as a bare number.
    XdNum,
    /// Custom extension: rs1 field as a bare number.
    XsNum,
    /// Custom extension: rs2 field as a bare number.
    XtNum,
    /// Custom extension: funct7 field as a bare immediate.
    XjNum,
    /// Punctuation copied through verbatim.
    Lit(char),
    /// Unknown directive; renders as a diagnostic marker.
    Bad(char),
}

/// Parse a format string into directives.
///
/// An unknown directive character terminates parsing with a trailing
/// [`Operand::Bad`], mirroring how rendering stops at the first
/// undefined modifier.
pub fn parse_args(args: &str) -> Vec<Operand> {
    let mut out = Vec::new();
    let mut chars = args.chars();
    while let Some(c) = chars.next() {
        let op = match c {
            'd' => Operand::Rd,
            's' => Operand::Rs1,
            't' => Operand::Rs2,
            'j' => Operand::ImmI,
            'o' => Operand::OffsetI,
            'q' => Operand::OffsetS,
            'a' => Operand::TargetJ,
            'p' => Operand::TargetB,
            'u' => Operand::ImmU,
            '>' => Operand::Shamt,
            '<' => Operand::ShamtW,
            'm' => Operand::RoundMode,
            'P' => Operand::FencePred,
            'Q' => Operand::FenceSucc,
            'E' => Operand::Csr,
            'Z' => Operand::ImmZ,
            '0' => Operand::Zero,
            'D' => Operand::Frd,
            'S' => Operand::Frs1,
            'T' => Operand::Frs2,
            'R' => Operand::Frs3,
            ',' | '(' | ')' | '[' | ']' | '!' => Operand::Lit(c),
            'C' => match chars.next() {
                Some('d') => Operand::Crd,
                Some('U') => Operand::CrdSrc,
                Some('c') => Operand::Sp,
                Some('V') => Operand::Crs2,
                Some('s' | 'w') => Operand::Crs1Prime,
                Some('t' | 'x') => Operand::Crs2Prime,
                Some('j') => Operand::CImm,
                Some('k') => Operand::CLwImm,
                Some('m') => Operand::CLwspImm,
                Some('M') => Operand::CSwspImm,
                Some('K') => Operand::CAddi4spnImm,
                Some('L') => Operand::CAddi16spImm,
                Some('p') => Operand::CTargetB,
                Some('a') => Operand::CTargetJ,
                Some('u') => Operand::CImmU,
                Some('>') => Operand::CShamt,
                Some('<') => Operand::CShamtW,
                other => Operand::Bad(other.unwrap_or('C')),
            },
            '^' => match chars.next() {
                Some('d') => Operand::XdNum,
                Some('s') => Operand::XsNum,
                Some('t') => Operand::XtNum,
                Some('j') => Operand::XjNum,
                other => Operand::Bad(other.unwrap_or('^')),
            },
            other => Operand::Bad(other),
        };
        let stop = matches!(op, Operand::Bad(_));
        out.push(op);
        if stop {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rtype() {
        assert_eq!(
            parse_args("d,s,t"),
            [
                Operand::Rd,
                Operand::Lit(','),
                Operand::Rs1,
                Operand::Lit(','),
                Operand::Rs2
            ]
        );
    }

    #[test]
    fn test_parse_load() {
        assert_eq!(
            parse_args("d,o(s)"),
            [
                Operand::Rd,
                Operand::Lit(','),
                Operand::OffsetI,
                Operand::Lit('('),
                Operand::Rs1,
                Operand::Lit(')')
            ]
        );
    }

    #[test]
    fn test_parse_compressed() {
        assert_eq!(
            parse_args("Ct,Ck(Cs)"),
            [
                Operand::Crs2Prime,
                Operand::Lit(','),
                Operand::CLwImm,
                Operand::Lit('('),
                Operand::Crs1Prime,
                Operand::Lit(')')
            ]
        );
    }

    #[test]
    fn test_parse_custom() {
        assert_eq!(
            parse_args("^d,^s,^t,^j"),
            [
                Operand::XdNum,
                Operand::Lit(','),
                Operand::XsNum,
                Operand::Lit(','),
                Operand::XtNum,
                Operand::Lit(','),
                Operand::XjNum
            ]
        );
    }

    #[test]
    fn test_unknown_directive_terminates() {
        assert_eq!(
            parse_args("d,?s"),
            [Operand::Rd, Operand::Lit(','), Operand::Bad('?')]
        );
    }

    #[test]
    fn test_empty_args() {
        assert!(parse_args("").is_empty());
    }
}
