// src/designer.rs
// Top-level entry point: reverse-translate a peptide, append the stop
// codon, pair the CDS with a library RBS, and hand back the transcript.

use std::collections::HashSet;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::data_handling::codon_usage::CodonUsage;
use crate::data_handling::rbs_library::load_rbs_library;
use crate::helper_functions::project_root;
use crate::models::{DesignError, RbsOption, Transcript};
use crate::optimizer::WindowOptimizer;
use crate::rbs_chooser::RbsChooser;

pub const STOP_CODON: &str = "TAA";

/// Owns the two read-only tables, the checkers wired into the optimizer,
/// and the session RNG. Tables never change after construction; the RNG is
/// the only mutable state.
pub struct TranscriptDesigner {
    optimizer: WindowOptimizer,
    chooser: RbsChooser,
    rng: StdRng,
}

impl TranscriptDesigner {
    /// Loads `data/codon_usage.txt` and `data/rbs_library.csv` from the
    /// project root. Pass a seed to make codon sampling reproducible.
    pub fn new(seed: Option<u64>) -> Result<Self> {
        let root = project_root();
        let usage = CodonUsage::load(&root.join("data/codon_usage.txt"))?;
        let library = load_rbs_library(&root.join("data/rbs_library.csv"))?;
        Ok(Self::from_parts(usage, library, seed))
    }

    /// Wires a designer from already-built tables.
    pub fn from_parts(usage: CodonUsage, library: Vec<RbsOption>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        TranscriptDesigner {
            optimizer: WindowOptimizer::new(usage),
            chooser: RbsChooser::new(library),
            rng,
        }
    }

    /// Optimized CDS for `peptide`, stop codon not included.
    pub fn optimize(&mut self, peptide: &str) -> Result<String, DesignError> {
        self.optimizer.optimize(peptide, &mut self.rng)
    }

    /// RBS selection for an already-built CDS.
    pub fn select(&self, cds: &str, ignores: &HashSet<RbsOption>) -> Result<RbsOption, DesignError> {
        self.chooser.select(cds, ignores)
    }

    /// Full design request: optimize, append the stop codon, choose an RBS,
    /// compose. Either fully succeeds or fails with no partial result.
    pub fn design(
        &mut self,
        peptide: &str,
        ignores: &HashSet<RbsOption>,
    ) -> Result<Transcript, DesignError> {
        info!(
            "designing transcript for a {}-residue peptide",
            peptide.chars().count()
        );
        let mut cds = self.optimizer.optimize(peptide, &mut self.rng)?;
        cds.push_str(STOP_CODON);
        let rbs = self.chooser.select(&cds, ignores)?;
        info!("CDS finished ({} nt), paired with {}", cds.len(), rbs.gene_name);
        Ok(Transcript::compose(peptide, &cds, rbs))
    }
}
