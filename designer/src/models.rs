// src/models.rs
// Value types shared across the designer: the RBS library entries, the
// finished transcript, and the error taxonomy surfaced to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One leader/RBS choice from the reference library.
///
/// Equality and hashing cover every field so options can live in the
/// caller-owned ignore set across repeated selection rounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RbsOption {
    pub gene_name: String,
    /// 5' leader containing the Shine-Dalgarno region.
    pub utr: String,
    /// Coding sequence of the source gene.
    pub cds: String,
    /// First six amino acids of the source CDS, precomputed at load time.
    pub first_six_aas: String,
}

/// Final design result: the chosen RBS paired with the optimized CDS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub rbs: RbsOption,
    pub peptide: String,
    /// Codons of the final CDS, stop codon included.
    pub codons: Vec<String>,
}

impl Transcript {
    /// Pure assembly of the design result; the CDS is chunked into codon
    /// triples and stored alongside the peptide and the selected RBS.
    pub fn compose(peptide: &str, cds: &str, rbs: RbsOption) -> Self {
        let codons = cds
            .as_bytes()
            .chunks(3)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        Transcript {
            rbs,
            peptide: peptide.to_string(),
            codons,
        }
    }

    /// Concatenated CDS, stop codon included.
    pub fn cds(&self) -> String {
        self.codons.concat()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.rbs.gene_name, self.rbs.utr, self.cds())
    }
}

/// Errors a design request can surface. The scored window fallback is
/// resolved internally and never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// Peptide contains an amino-acid code absent from the usage table.
    UnknownAminoAcid { amino_acid: char, position: usize },
    /// Usage table is missing (or carries unusable weights for) an amino acid.
    MissingCodonEntry { amino_acid: char },
    /// Every library option was excluded by the ignore set.
    RbsLibraryExhausted { ignored: usize },
    /// Translation requested on a sequence whose length is not a multiple of 3.
    OutOfFrame { length: usize },
    /// Translation hit a triplet outside the DNA alphabet.
    InvalidCodon { codon: String },
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignError::UnknownAminoAcid {
                amino_acid,
                position,
            } => write!(
                f,
                "amino acid '{amino_acid}' at peptide position {position} has no codon usage entry"
            ),
            DesignError::MissingCodonEntry { amino_acid } => write!(
                f,
                "codon usage table has no usable entry for amino acid '{amino_acid}'"
            ),
            DesignError::RbsLibraryExhausted { ignored } => write!(
                f,
                "no RBS options remain after excluding {ignored} ignored entries"
            ),
            DesignError::OutOfFrame { length } => {
                write!(f, "sequence length {length} is not a multiple of 3")
            }
            DesignError::InvalidCodon { codon } => {
                write!(f, "'{codon}' is not a valid DNA codon")
            }
        }
    }
}

impl std::error::Error for DesignError {}
