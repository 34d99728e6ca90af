//! First-match index over the opcode table.
//!
//! Instruction words are bucketed by their low bits: compressed words by
//! the two length bits, full-size words by the seven-bit major opcode.
//! The two key spaces are disjoint because every full-size opcode has
//! `0b11` in its low two bits, so one 128-slot array serves both. Each
//! slot holds the position of the first enabled entry whose match bits
//! land in that bucket; a lookup scans from there to the end of the
//! table, preserving first-match order.

use crate::disasm::insn_length;
use crate::opcode::OpcodeEntry;
use crate::subset::SubsetSet;
use crate::table::OPCODES;

const BUCKETS: usize = 0x80;

/// Lookup index built for one subset configuration.
#[derive(Debug)]
pub struct OpcodeIndex {
    first: [Option<u16>; BUCKETS],
}

fn bucket(match_bits: u32) -> usize {
    if insn_length(match_bits) == 2 {
        (match_bits & 0x3) as usize
    } else {
        (match_bits & 0x7f) as usize
    }
}

impl OpcodeIndex {
    /// Index the builtin table, skipping entries whose subset is not
    /// enabled. Entries of other widths stay in; width is a per-word
    /// property checked at match time.
    pub fn build(subsets: &SubsetSet) -> Self {
        let mut first = [None; BUCKETS];
        for (i, e) in OPCODES.iter().enumerate() {
            if !subsets.supports(e.subset.subset) {
                continue;
            }
            let slot = &mut first[bucket(e.match_bits)];
            if slot.is_none() {
                *slot = Some(i as u16);
            }
        }
        Self { first }
    }

    /// Candidate entries for a word: the table tail starting at the
    /// word's bucket, or an empty slice when the bucket is unpopulated.
    pub fn candidates(&self, word: u32) -> &'static [OpcodeEntry] {
        match self.first[bucket(word)] {
            Some(i) => &OPCODES[i as usize..],
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_disjointness() {
        // 2-byte keys are 0..=2; 4-byte keys all have low bits 0b11.
        assert_eq!(bucket(0x4001), 1); // c.li
        assert_eq!(bucket(0x8002), 2); // c.jr
        assert_eq!(bucket(0x13), 0x13); // addi
        assert_eq!(bucket(0x4000_5013), 0x13); // srai shares the bucket
    }

    #[test]
    fn test_candidates_preserve_order() {
        let idx = OpcodeIndex::build(&SubsetSet::empty());
        let cands = idx.candidates(0x0010_0093); // addi
        let in_table = OPCODES
            .iter()
            .position(|e| e.name == "nop" && e.mask == 0xffff_ffff)
            .unwrap();
        // The bucket starts no later than the first OP_IMM entry.
        assert!(OPCODES.len() - cands.len() <= in_table);
        // Scanning candidates finds the same entry a full scan would.
        let via_index = cands.iter().find(|e| e.matches(0x0010_0093)).unwrap();
        let via_scan = OPCODES.iter().find(|e| e.matches(0x0010_0093)).unwrap();
        assert!(std::ptr::eq(via_index, via_scan));
    }

    #[test]
    fn test_disabled_subset_prunes_bucket_head() {
        // With only RV32I enabled, buckets whose first entry is an
        // M-extension instruction start later or not at all.
        let all = OpcodeIndex::build(&SubsetSet::empty());
        let base = OpcodeIndex::build(&SubsetSet::parse("RV32I").unwrap());
        let mul = 0x0220_0033; // mul x0, x0, x2 pattern, bucket 0x33
        assert!(all.candidates(mul).iter().any(|e| e.matches(mul)));
        // The entry is still scanned (pruning is at match time), but the
        // bucket itself must exist for base I as well since add shares it.
        assert!(!base.candidates(mul).is_empty());
    }
}
