// src/data_handling/codon_usage.rs
// Loads the whitespace-delimited codon usage table (CODON AA FREQ per line)
// into the per-amino-acid weight lists the sampler and codon checker share.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::models::DesignError;

/// The 20 single-letter codes the table must cover before any design runs.
pub const STANDARD_AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Per-amino-acid codon usage weights. Built once at startup, read-only
/// afterward; the order of each codon list follows the source file.
#[derive(Debug, Clone, Default)]
pub struct CodonUsage {
    by_amino_acid: HashMap<char, Vec<(String, f64)>>,
}

impl CodonUsage {
    /// Reads and parses the table, then verifies all 20 standard amino
    /// acids are covered.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading codon usage table {}", path.display()))?;
        let usage = Self::parse(&text)
            .with_context(|| format!("parsing codon usage table {}", path.display()))?;
        usage.verify_coverage()?;
        info!(
            "codon usage table loaded: {} amino acids from {}",
            usage.by_amino_acid.len(),
            path.display()
        );
        Ok(usage)
    }

    /// Parses `CODON AA FREQ` lines. Lines with fewer than three fields are
    /// skipped; a malformed frequency is an error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut by_amino_acid: HashMap<char, Vec<(String, f64)>> = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                continue;
            }
            let codon = parts[0].to_ascii_uppercase();
            let amino_acid = match parts[1].chars().next() {
                Some(c) => c.to_ascii_uppercase(),
                None => continue,
            };
            let frequency: f64 = parts[2]
                .parse()
                .with_context(|| format!("bad frequency '{}' on line {}", parts[2], lineno + 1))?;
            if codon.len() != 3 {
                bail!("bad codon '{}' on line {}", codon, lineno + 1);
            }
            by_amino_acid
                .entry(amino_acid)
                .or_default()
                .push((codon, frequency));
        }
        Ok(CodonUsage { by_amino_acid })
    }

    /// Configuration check: every standard amino acid must have at least one
    /// codon with a positive weight.
    pub fn verify_coverage(&self) -> Result<(), DesignError> {
        for amino_acid in STANDARD_AMINO_ACIDS.chars() {
            let usable = self
                .by_amino_acid
                .get(&amino_acid)
                .map(|codons| codons.iter().any(|(_, f)| *f > 0.0))
                .unwrap_or(false);
            if !usable {
                return Err(DesignError::MissingCodonEntry { amino_acid });
            }
        }
        Ok(())
    }

    /// Ordered codon/weight list for one amino acid.
    pub fn codons_for(&self, amino_acid: char) -> Option<&[(String, f64)]> {
        self.by_amino_acid.get(&amino_acid).map(|v| v.as_slice())
    }

    /// Flat codon -> usage frequency view, used to flag rare codons.
    pub fn frequency_map(&self) -> HashMap<String, f64> {
        let mut map = HashMap::new();
        for codons in self.by_amino_acid.values() {
            for (codon, frequency) in codons {
                map.insert(codon.clone(), *frequency);
            }
        }
        map
    }

    /// Codon -> relative adaptiveness (frequency over the maximum frequency
    /// among its synonyms), the per-codon term of the CAI.
    pub fn adaptiveness_map(&self) -> HashMap<String, f64> {
        let mut map = HashMap::new();
        for codons in self.by_amino_acid.values() {
            let max = codons.iter().fold(0.0f64, |acc, (_, f)| acc.max(*f));
            if max <= 0.0 {
                continue;
            }
            for (codon, frequency) in codons {
                map.insert(codon.clone(), frequency / max);
            }
        }
        map
    }
}
