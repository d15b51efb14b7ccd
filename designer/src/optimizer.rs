// src/optimizer.rs
// Guided-random, sliding-window codon optimization. Each 3-residue window
// draws K candidates from the usage-weighted sampler, keeps the first one
// that clears every checker, and otherwise falls back to the best weighted
// score. Validation is window-local; already-committed codons are not
// re-checked against new windows.

use rand::Rng;
use tracing::{debug, warn};

use crate::checkers::codon_checker::CodonChecker;
use crate::checkers::forbidden_sequence::ForbiddenSequenceChecker;
use crate::checkers::hairpin::hairpin_checker;
use crate::checkers::internal_rbs::InternalRbsChecker;
use crate::checkers::promoter::PromoterChecker;
use crate::data_handling::codon_usage::CodonUsage;
use crate::models::DesignError;

pub const WINDOW_SIZE: usize = 3;
pub const CANDIDATES_PER_WINDOW: usize = 10;

// Fallback score weights, one per checker.
const WEIGHT_FORBIDDEN: u32 = 6;
const WEIGHT_HAIRPIN: u32 = 4;
const WEIGHT_PROMOTER: u32 = 1;
const WEIGHT_INTERNAL_RBS: u32 = 1;
const WEIGHT_CODON_USAGE: u32 = 4;

/// Frequency-weighted codon sampler over the loaded usage table.
#[derive(Debug, Clone)]
pub struct CodonSampler {
    usage: CodonUsage,
}

impl CodonSampler {
    pub fn new(usage: CodonUsage) -> Self {
        CodonSampler { usage }
    }

    pub fn usage(&self) -> &CodonUsage {
        &self.usage
    }

    /// Draws one codon for `amino_acid`. `position` is the residue's index
    /// in the peptide, carried only for error reporting.
    pub fn sample<R: Rng>(
        &self,
        amino_acid: char,
        position: usize,
        rng: &mut R,
    ) -> Result<String, DesignError> {
        let codons = self
            .usage
            .codons_for(amino_acid)
            .ok_or(DesignError::UnknownAminoAcid {
                amino_acid,
                position,
            })?;

        let total: f64 = codons.iter().map(|(_, f)| f).sum();
        if !(total > 0.0) {
            return Err(DesignError::MissingCodonEntry { amino_acid });
        }

        let draw = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        for (codon, frequency) in codons {
            cumulative += frequency;
            if draw <= cumulative {
                return Ok(codon.clone());
            }
        }
        // Floating-point fall-through: keep the last option.
        codons
            .last()
            .map(|(codon, _)| codon.clone())
            .ok_or(DesignError::MissingCodonEntry { amino_acid })
    }
}

/// Sliding-window search over the peptide.
pub struct WindowOptimizer {
    sampler: CodonSampler,
    forbidden: ForbiddenSequenceChecker,
    promoter: PromoterChecker,
    internal_rbs: InternalRbsChecker,
    codon: CodonChecker,
}

impl WindowOptimizer {
    pub fn new(usage: CodonUsage) -> Self {
        let codon = CodonChecker::new(&usage);
        WindowOptimizer {
            sampler: CodonSampler::new(usage),
            forbidden: ForbiddenSequenceChecker::new(),
            promoter: PromoterChecker::new(),
            internal_rbs: InternalRbsChecker::new(),
            codon,
        }
    }

    pub fn sampler(&self) -> &CodonSampler {
        &self.sampler
    }

    /// Builds the CDS for `peptide`, without the stop codon. An amino acid
    /// missing from the usage table aborts the whole call; no partial CDS
    /// is ever returned.
    pub fn optimize<R: Rng>(&self, peptide: &str, rng: &mut R) -> Result<String, DesignError> {
        let residues: Vec<char> = peptide.chars().collect();
        let mut cds: Vec<String> = Vec::with_capacity(residues.len());

        for (w, window) in residues.chunks(WINDOW_SIZE).enumerate() {
            let start = w * WINDOW_SIZE;

            let mut candidates: Vec<Vec<String>> = Vec::with_capacity(CANDIDATES_PER_WINDOW);
            for _ in 0..CANDIDATES_PER_WINDOW {
                let mut candidate = Vec::with_capacity(window.len());
                for (offset, &amino_acid) in window.iter().enumerate() {
                    candidate.push(self.sampler.sample(amino_acid, start + offset, rng)?);
                }
                candidates.push(candidate);
            }

            // First candidate that clears every checker wins; otherwise the
            // highest-scoring one (earliest generated on ties).
            let winner = match candidates.iter().find(|c| self.validate_window(c)) {
                Some(candidate) => candidate.clone(),
                None => {
                    warn!(
                        "window {}: no candidate passed every checker, using scored fallback",
                        w
                    );
                    self.best_scored(&candidates).to_vec()
                }
            };

            cds.extend(winner.into_iter().take(window.len()));
            debug!("window {} committed, CDS now {} nt", w, cds.len() * 3);
        }

        Ok(cds.concat())
    }

    fn validate_window(&self, candidate: &[String]) -> bool {
        let dna = candidate.concat();
        self.forbidden.run(&dna)
            && hairpin_checker(&dna)
            && self.promoter.run(&dna)
            && self.internal_rbs.run(&dna).0
            && self.codon.run(candidate)
    }

    fn score(&self, candidate: &[String]) -> u32 {
        let dna = candidate.concat();
        let mut score = 0;
        if self.forbidden.run(&dna) {
            score += WEIGHT_FORBIDDEN;
        }
        if hairpin_checker(&dna) {
            score += WEIGHT_HAIRPIN;
        }
        if self.promoter.run(&dna) {
            score += WEIGHT_PROMOTER;
        }
        if self.internal_rbs.run(&dna).0 {
            score += WEIGHT_INTERNAL_RBS;
        }
        if self.codon.run(candidate) {
            score += WEIGHT_CODON_USAGE;
        }
        score
    }

    fn best_scored<'a>(&self, candidates: &'a [Vec<String>]) -> &'a [String] {
        let mut best = &candidates[0];
        let mut best_score = self.score(best);
        for candidate in &candidates[1..] {
            let score = self.score(candidate);
            if score > best_score {
                best = candidate;
                best_score = score;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::translate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;

    fn usage() -> CodonUsage {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../data/codon_usage.txt"
        ));
        CodonUsage::load(path).unwrap()
    }

    #[test]
    fn single_codon_amino_acids_are_deterministic() {
        let sampler = CodonSampler::new(usage());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(sampler.sample('M', 0, &mut rng).unwrap(), "ATG");
            assert_eq!(sampler.sample('W', 0, &mut rng).unwrap(), "TGG");
        }
    }

    #[test]
    fn sampler_reports_unknown_amino_acid_with_position() {
        let sampler = CodonSampler::new(usage());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            sampler.sample('X', 5, &mut rng).unwrap_err(),
            DesignError::UnknownAminoAcid {
                amino_acid: 'X',
                position: 5
            }
        );
    }

    #[test]
    fn sampler_only_emits_codons_of_the_requested_amino_acid() {
        let sampler = CodonSampler::new(usage());
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let codon = sampler.sample('L', 0, &mut rng).unwrap();
            assert_eq!(crate::translate::codon_to_amino_acid(&codon), Some('L'));
        }
    }

    #[test]
    fn same_seed_reproduces_the_sample_stream() {
        let sampler = CodonSampler::new(usage());
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for aa in "MYPFIRTARMTV".chars() {
            assert_eq!(
                sampler.sample(aa, 0, &mut a).unwrap(),
                sampler.sample(aa, 0, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn cds_length_is_three_times_peptide_length() {
        let optimizer = WindowOptimizer::new(usage());
        let mut rng = StdRng::seed_from_u64(42);
        for peptide in ["M", "MV", "MYPFIRTARMTV", "MKATKLVLGAVILGSTLLAG"] {
            let cds = optimizer.optimize(peptide, &mut rng).unwrap();
            assert_eq!(cds.len(), 3 * peptide.len(), "peptide {peptide}");
        }
    }

    #[test]
    fn cds_translates_back_to_the_peptide() {
        let optimizer = WindowOptimizer::new(usage());
        let mut rng = StdRng::seed_from_u64(1234);
        let peptide = "MYPFIRTARMTV";
        let cds = optimizer.optimize(peptide, &mut rng).unwrap();
        assert_eq!(translate(&cds).unwrap(), peptide);
    }

    #[test]
    fn optimization_is_reproducible_under_a_fixed_seed() {
        let optimizer = WindowOptimizer::new(usage());
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        let peptide = "MKATKLVLGAVILGST";
        assert_eq!(
            optimizer.optimize(peptide, &mut a).unwrap(),
            optimizer.optimize(peptide, &mut b).unwrap()
        );
    }

    #[test]
    fn unknown_amino_acid_aborts_with_no_partial_cds() {
        let optimizer = WindowOptimizer::new(usage());
        let mut rng = StdRng::seed_from_u64(3);
        let err = optimizer.optimize("MVXK", &mut rng).unwrap_err();
        assert_eq!(
            err,
            DesignError::UnknownAminoAcid {
                amino_acid: 'X',
                position: 2
            }
        );
    }

    #[test]
    fn short_final_window_is_truncated_to_the_peptide() {
        let optimizer = WindowOptimizer::new(usage());
        let mut rng = StdRng::seed_from_u64(5);
        // 4 residues: one full window plus a 1-residue tail.
        let cds = optimizer.optimize("MVKL", &mut rng).unwrap();
        assert_eq!(cds.len(), 12);
        assert_eq!(translate(&cds).unwrap(), "MVKL");
    }
}
