//! Cross-instruction address-fusion state.
//!
//! `lui`/`auipc` deposit the upper bits of an address in a register; the
//! following load, store, or `jalr` supplies the low bits. Tracking the
//! pending upper bits per register lets the renderer annotate the fused
//! instruction with the full target address. The state is deliberately
//! per-disassembly-session: it mirrors linear sweep order, not dataflow.

use crate::regs::{X_GP, X_TP};

/// Pending upper bits recorded for a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpperBits {
    /// From `auipc`: already combined with the recording pc.
    PcRelative(u64),
    /// From `lui` or `c.lui`: an absolute upper immediate.
    Absolute(u64),
}

impl UpperBits {
    pub fn value(self) -> u64 {
        match self {
            Self::PcRelative(v) | Self::Absolute(v) => v,
        }
    }
}

/// Per-session fusion state.
#[derive(Debug, Default)]
pub struct DisassemblyState {
    hi_addr: [Option<UpperBits>; 32],
    gp: Option<u64>,
    print_addr: Option<u64>,
}

impl DisassemblyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global-pointer value, normally resolved from `_gp`.
    pub fn set_gp(&mut self, gp: u64) {
        self.gp = Some(gp);
    }

    /// Record upper bits written to `rd`.
    pub fn record_upper(&mut self, rd: u32, bits: UpperBits) {
        self.hi_addr[rd as usize] = Some(bits);
    }

    /// Offer a base register and low-bits offset for fusion.
    ///
    /// Consumes any pending upper bits for the base register. The gp
    /// base is not consumed; gp-relative addressing is valid for every
    /// instruction in the session. Bases of x0 and tp resolve from the
    /// offset alone.
    pub fn fuse(&mut self, base: u32, offset: i32) {
        let offset = offset as i64;
        if base == 0 {
            self.print_addr = Some(offset as u64);
        } else if let Some(hi) = self.hi_addr[base as usize].take() {
            self.print_addr = Some(hi.value().wrapping_add_signed(offset));
        } else if base == X_GP {
            if let Some(gp) = self.gp {
                self.print_addr = Some(gp.wrapping_add_signed(offset));
            }
        } else if base == X_TP {
            self.print_addr = Some(offset as u64);
        }
    }

    /// Take the resolved address pending from the last fusion, if any.
    pub fn take_resolved(&mut self) -> Option<u64> {
        self.print_addr.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auipc_then_load_fuses_once() {
        let mut st = DisassemblyState::new();
        st.record_upper(10, UpperBits::PcRelative(0x1000));
        st.fuse(10, 0x234);
        assert_eq!(st.take_resolved(), Some(0x1234));
        // Consumed: a second use of the same base does not resolve.
        st.fuse(10, 0x234);
        assert_eq!(st.take_resolved(), None);
    }

    #[test]
    fn test_lui_negative_offset() {
        let mut st = DisassemblyState::new();
        st.record_upper(5, UpperBits::Absolute(0x2000));
        st.fuse(5, -4);
        assert_eq!(st.take_resolved(), Some(0x1ffc));
    }

    #[test]
    fn test_gp_base_is_reusable() {
        let mut st = DisassemblyState::new();
        st.set_gp(0x1_2000);
        st.fuse(X_GP, 8);
        assert_eq!(st.take_resolved(), Some(0x1_2008));
        st.fuse(X_GP, -8);
        assert_eq!(st.take_resolved(), Some(0x1_1ff8));
    }

    #[test]
    fn test_recorded_upper_shadows_gp() {
        let mut st = DisassemblyState::new();
        st.set_gp(0x1_2000);
        st.record_upper(X_GP, UpperBits::Absolute(0x5000));
        st.fuse(X_GP, 4);
        assert_eq!(st.take_resolved(), Some(0x5004));
        // After consumption the gp fallback applies again.
        st.fuse(X_GP, 4);
        assert_eq!(st.take_resolved(), Some(0x1_2004));
    }

    #[test]
    fn test_x0_and_tp_bases() {
        let mut st = DisassemblyState::new();
        st.fuse(0, 0x100);
        assert_eq!(st.take_resolved(), Some(0x100));
        st.fuse(X_TP, 0x40);
        assert_eq!(st.take_resolved(), Some(0x40));
    }

    #[test]
    fn test_unknown_base_does_not_resolve() {
        let mut st = DisassemblyState::new();
        st.fuse(11, 0x10);
        assert_eq!(st.take_resolved(), None);
    }

    #[test]
    fn test_latest_record_wins() {
        let mut st = DisassemblyState::new();
        st.record_upper(7, UpperBits::Absolute(0x1000));
        st.record_upper(7, UpperBits::Absolute(0x3000));
        st.fuse(7, 0);
        assert_eq!(st.take_resolved(), Some(0x3000));
    }
}
