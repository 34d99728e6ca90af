//! Control/status register names.

/// Canonical name for a CSR number, if one is defined.
///
/// Unknown CSRs are rendered by the caller as hex literals.
pub fn csr_name(csr: u32) -> Option<&'static str> {
    let name = match csr {
        0x001 => "fflags",
        0x002 => "frm",
        0x003 => "fcsr",
        0xC00 => "cycle",
        0xC01 => "time",
        0xC02 => "instret",
        0xC80 => "cycleh",
        0xC81 => "timeh",
        0xC82 => "instreth",
        0x100 => "sstatus",
        0x104 => "sie",
        0x105 => "stvec",
        0x140 => "sscratch",
        0x141 => "sepc",
        0x142 => "scause",
        0x143 => "sbadaddr",
        0x144 => "sip",
        0x180 => "sptbr",
        0x300 => "mstatus",
        0x301 => "misa",
        0x302 => "medeleg",
        0x303 => "mideleg",
        0x304 => "mie",
        0x305 => "mtvec",
        0x340 => "mscratch",
        0x341 => "mepc",
        0x342 => "mcause",
        0x343 => "mbadaddr",
        0x344 => "mip",
        0xB00 => "mcycle",
        0xB02 => "minstret",
        0xF11 => "mvendorid",
        0xF12 => "marchid",
        0xF13 => "mimpid",
        0xF14 => "mhartid",
        _ => return None,
    };
    Some(name)
}
