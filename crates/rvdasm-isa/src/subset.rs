//! ISA-subset registry: architecture-string parsing and subset gating.

use thiserror::Error;

/// Target integer register width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Xlen {
    Rv32,
    Rv64,
}

impl Xlen {
    /// Width in bits (32 or 64).
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }
}

/// Architecture-string parse errors.
///
/// These are recoverable by design: the caller falls back to an empty
/// registry, which gates nothing (see [`SubsetSet::supports`]).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArchError {
    #[error("`I' must be the first ISA subset name (got {0})")]
    UnsupportedBaseIsa(char),
    #[error("only one eXtension is supported (found {first} and {second})")]
    MultipleCustomExtensions { first: String, second: String },
    #[error("unsupported ISA subset {0}")]
    UnknownSubset(char),
}

/// A registered instruction-set subset.
///
/// Versions are fixed at 1.0 until versioned arch strings exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subset {
    pub name: String,
    pub version_major: u32,
    pub version_minor: u32,
}

impl Subset {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_major: 1,
            version_minor: 0,
        }
    }
}

/// The canonical single-letter extensions, in required order.
const ALL_SUBSETS: &str = "IMAFDC";

/// An ordered set of enabled ISA subsets, parsed from an arch string.
///
/// An empty set means "no arch configured" and reports every requirement
/// as supported. Parse failures also produce the empty set, so a bad
/// `-march` degrades to the permissive default instead of disabling
/// disassembly outright. That fail-open behavior is intentional and is
/// asserted by tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubsetSet {
    subsets: Vec<Subset>,
}

impl SubsetSet {
    /// The permissive empty set: every requirement is supported.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse an architecture-selection string such as `RV32IMC` or
    /// `RV64G` or `RV32IMXhwacha`.
    ///
    /// Grammar: an optional `RV32`/`RV64`/`RV` prefix, then `I` (base),
    /// `G` (shorthand for IMAFDC), or end-of-string (implies `G`);
    /// then single-letter extensions in canonical order, `_` separators,
    /// and at most one `X`-prefixed custom extension name. `C` is
    /// registered even when not requested; compressed decoding is always
    /// available.
    pub fn parse(arch: &str) -> Result<Self, ArchError> {
        let upper = arch.to_ascii_uppercase();
        let mut p = upper.as_str();
        for prefix in ["RV32", "RV64", "RV"] {
            if let Some(rest) = p.strip_prefix(prefix) {
                p = rest;
                break;
            }
        }

        let mut set = Self::empty();
        let mut rvc = false;

        match p.chars().next() {
            Some('I') => {}
            Some('G') | None => {
                if p.starts_with('G') {
                    p = &p[1..];
                }
                for c in ALL_SUBSETS.chars() {
                    set.add(c.to_string());
                }
                rvc = true;
            }
            Some(other) => return Err(ArchError::UnsupportedBaseIsa(other)),
        }

        // Extensions may only appear in canonical order, each at most once.
        let mut remaining = ALL_SUBSETS;
        let mut custom: Option<String> = None;
        let mut chars = p.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == 'X' {
                let token: String = p[i..]
                    .chars()
                    .take_while(|&c| c != '_')
                    .collect();
                if let Some(first) = custom {
                    return Err(ArchError::MultipleCustomExtensions {
                        first,
                        second: token,
                    });
                }
                set.add(token.clone());
                // Skip the rest of the token.
                for _ in 0..token.len() - 1 {
                    chars.next();
                }
                custom = Some(token);
            } else if c == '_' {
                continue;
            } else if let Some(pos) = remaining.find(c) {
                set.add(c.to_string());
                if c == 'C' {
                    rvc = true;
                }
                remaining = &remaining[pos + 1..];
            } else {
                return Err(ArchError::UnknownSubset(c));
            }
        }

        if !rvc {
            // RVC is always decodable; a separate option toggles it.
            set.add("C".to_string());
        }

        Ok(set)
    }

    fn add(&mut self, name: String) {
        self.subsets.push(Subset::new(name));
    }

    /// Whether the set is the permissive empty set.
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Whether a subset name is registered.
    ///
    /// Always true for the empty set. Lookup is case-insensitive.
    pub fn supports(&self, name: &str) -> bool {
        if self.subsets.is_empty() {
            return true;
        }
        self.subsets.iter().any(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Registered subsets, in registration order.
    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }
}
