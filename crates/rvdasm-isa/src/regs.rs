//! Register name tables and well-known register indices.

/// Register-naming mode for rendered operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegNameMode {
    /// ABI names (`zero`, `ra`, `sp`, ...).
    #[default]
    Abi,
    /// Numeric names (`x0`, `x1`, ...).
    Numeric,
}

pub const GPR_NAMES_NUMERIC: [&str; 32] = [
    "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", //
    "x8", "x9", "x10", "x11", "x12", "x13", "x14", "x15", //
    "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23", //
    "x24", "x25", "x26", "x27", "x28", "x29", "x30", "x31",
];

pub const GPR_NAMES_ABI: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", //
    "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5", //
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", //
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

pub const FPR_NAMES_NUMERIC: [&str; 32] = [
    "f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7", //
    "f8", "f9", "f10", "f11", "f12", "f13", "f14", "f15", //
    "f16", "f17", "f18", "f19", "f20", "f21", "f22", "f23", //
    "f24", "f25", "f26", "f27", "f28", "f29", "f30", "f31",
];

pub const FPR_NAMES_ABI: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", //
    "fs0", "fs1", "fa0", "fa1", "fa2", "fa3", "fa4", "fa5", //
    "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", //
    "fs8", "fs9", "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

pub const X_RA: u32 = 1;
pub const X_SP: u32 = 2;
pub const X_GP: u32 = 3;
pub const X_TP: u32 = 4;
pub const X_T1: u32 = 6;

impl RegNameMode {
    /// GPR name table for this mode.
    pub const fn gpr_names(self) -> &'static [&'static str; 32] {
        match self {
            Self::Abi => &GPR_NAMES_ABI,
            Self::Numeric => &GPR_NAMES_NUMERIC,
        }
    }

    /// FPR name table for this mode.
    pub const fn fpr_names(self) -> &'static [&'static str; 32] {
        match self {
            Self::Abi => &FPR_NAMES_ABI,
            Self::Numeric => &FPR_NAMES_NUMERIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_names() {
        assert_eq!(GPR_NAMES_ABI[X_SP as usize], "sp");
        assert_eq!(GPR_NAMES_ABI[X_GP as usize], "gp");
        assert_eq!(GPR_NAMES_ABI[31], "t6");
        assert_eq!(FPR_NAMES_ABI[10], "fa0");
    }

    #[test]
    fn test_mode_selects_table() {
        assert_eq!(RegNameMode::Abi.gpr_names()[0], "zero");
        assert_eq!(RegNameMode::Numeric.gpr_names()[0], "x0");
        assert_eq!(RegNameMode::Numeric.fpr_names()[31], "f31");
    }
}
