// src/checkers/forbidden_sequence.rs
// Screens for sequences that must never appear in a synthetic CDS:
// 8-nt homopolymer runs and common cloning/assembly recognition sites.
// Both strands are checked.

use tracing::debug;

use crate::helper_functions::reverse_complement;

const FORBIDDEN_SITES: &[&str] = &[
    "AAAAAAAA", // poly(A)
    "TTTTTTTT", // poly(T)
    "CCCCCCCC", // poly(C)
    "GGGGGGGG", // poly(G)
    "GAATTC",   // EcoRI
    "GGATCC",   // BamHI
    "AGATCT",   // BglII
    "ACTAGT",   // SpeI
    "TCTAGA",   // XbaI
    "GGTACC",   // KpnI
    "CTGCAG",   // PstI
    "CTCGAG",   // XhoI
    "AAGCTT",   // HindIII
    "GCGGCCGC", // NotI
    "GGTCTC",   // BsaI
    "CACCTGC",  // AarI
    "CAATTG",   // MfeI
];

#[derive(Debug, Clone, Default)]
pub struct ForbiddenSequenceChecker;

impl ForbiddenSequenceChecker {
    pub fn new() -> Self {
        ForbiddenSequenceChecker
    }

    /// Passes iff no forbidden site occurs on either strand.
    pub fn run(&self, sequence: &str) -> bool {
        let forward = sequence.to_ascii_uppercase();
        let reverse = reverse_complement(&forward);
        for site in FORBIDDEN_SITES {
            if forward.contains(site) || reverse.contains(site) {
                debug!("forbidden site {} found in candidate", site);
                return false;
            }
        }
        true
    }
}
