//! Disassembler option-string parsing.
//!
//! Options are comma separated, objdump-style: `no-aliases` suppresses
//! pseudo-instruction aliases, `numeric` selects `x0`-style register
//! names, and `march=RV32IMC` restricts the enabled ISA subsets.

use rvdasm_isa::{DisasmConfig, RegNameMode, SubsetSet};

/// Apply a comma-separated option string to a configuration.
///
/// Unknown options and malformed arch strings are reported and skipped;
/// a bad `march` leaves the fail-open subset set in place.
pub fn apply_options(config: &mut DisasmConfig, options: &str) {
    for opt in options.split(',').map(str::trim) {
        if opt.is_empty() {
            continue;
        }
        if opt == "no-aliases" {
            config.no_aliases = true;
        } else if opt == "numeric" {
            config.reg_names = RegNameMode::Numeric;
        } else if let Some(arch) = opt.strip_prefix("march=") {
            match SubsetSet::parse(arch) {
                Ok(subsets) => config.subsets = subsets,
                Err(e) => {
                    tracing::warn!("invalid architecture string {arch:?}: {e}");
                    config.subsets = SubsetSet::empty();
                }
            }
        } else {
            tracing::warn!("unrecognized disassembler option: {opt}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_flags() {
        let mut config = DisasmConfig::default();
        apply_options(&mut config, "no-aliases,numeric");
        assert!(config.no_aliases);
        assert_eq!(config.reg_names, RegNameMode::Numeric);
    }

    #[test]
    fn test_apply_march() {
        let mut config = DisasmConfig::default();
        apply_options(&mut config, "march=RV32IM");
        assert!(config.subsets.supports("M"));
        assert!(!config.subsets.supports("F"));
    }

    #[test]
    fn test_bad_march_fails_open() {
        let mut config = DisasmConfig::default();
        apply_options(&mut config, "march=RV32Q");
        assert!(config.subsets.is_empty());
        assert!(config.subsets.supports("F"));
    }

    #[test]
    fn test_unknown_option_skipped() {
        let mut config = DisasmConfig::default();
        apply_options(&mut config, "bogus, no-aliases ,");
        assert!(config.no_aliases);
    }
}
