// src/checkers/codon_checker.rs
// Codon usage screen over a candidate's codon list: at most one rare codon,
// and a codon adaptation index (geometric mean of per-codon relative
// adaptiveness) above a floor.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::data_handling::codon_usage::CodonUsage;

/// Codons used less often than this fraction of the time are rare.
const RARE_FREQUENCY: f64 = 0.1;
const MAX_RARE_CODONS: usize = 1;
const MIN_CAI: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct CodonChecker {
    adaptiveness: HashMap<String, f64>,
    rare: HashSet<String>,
}

impl CodonChecker {
    pub fn new(usage: &CodonUsage) -> Self {
        let rare = usage
            .frequency_map()
            .into_iter()
            .filter(|(_, f)| *f < RARE_FREQUENCY)
            .map(|(codon, _)| codon)
            .collect();
        CodonChecker {
            adaptiveness: usage.adaptiveness_map(),
            rare,
        }
    }

    /// Passes iff the codon list carries at most one rare codon and its CAI
    /// clears the floor. Codons outside the table are skipped for the CAI.
    pub fn run(&self, codons: &[String]) -> bool {
        if codons.is_empty() {
            return true;
        }

        let rare_count = codons.iter().filter(|c| self.rare.contains(c.as_str())).count();
        if rare_count > MAX_RARE_CODONS {
            debug!("candidate rejected: {} rare codons", rare_count);
            return false;
        }

        let mut log_sum = 0.0;
        let mut scored = 0usize;
        for codon in codons {
            if let Some(w) = self.adaptiveness.get(codon.as_str()) {
                log_sum += w.max(f64::MIN_POSITIVE).ln();
                scored += 1;
            }
        }
        if scored == 0 {
            return true;
        }
        let cai = (log_sum / scored as f64).exp();
        if cai < MIN_CAI {
            debug!("candidate rejected: CAI {:.3} below {}", cai, MIN_CAI);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn checker() -> CodonChecker {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../data/codon_usage.txt"
        ));
        CodonChecker::new(&CodonUsage::load(path).unwrap())
    }

    fn codons(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preferred_codons_pass() {
        let checker = checker();
        assert!(checker.run(&codons(&["ATG", "AAA", "CGT"])));
        assert!(checker.run(&codons(&["CTG", "GAA", "GGC"])));
    }

    #[test]
    fn one_rare_codon_is_tolerated() {
        let checker = checker();
        // CTA (0.04) is rare; the other two are preferred.
        assert!(checker.run(&codons(&["CTA", "ATG", "AAA"])));
    }

    #[test]
    fn two_rare_codons_fail() {
        let checker = checker();
        // CTA (0.04) and AGG (0.04) are both rare.
        assert!(!checker.run(&codons(&["CTA", "AGG", "ATG"])));
    }

    #[test]
    fn empty_candidate_passes() {
        assert!(checker().run(&[]));
    }
}
