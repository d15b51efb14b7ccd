// src/rbs_chooser.rs
// Picks the library leader that best pairs with a finished CDS. Candidates
// whose leader folds against the CDS (more than 4 hairpin sites over the
// joint sequence) are demoted; among the rest the closest six-amino-acid
// match wins. A single pass tracks both the primary and the fallback
// minimum, and the library order makes ties deterministic.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::checkers::hairpin::hairpin_counter;
use crate::helper_functions::edit_distance;
use crate::models::{DesignError, RbsOption};
use crate::translate::translate;

pub const MAX_LEADER_HAIRPINS: usize = 4;
const SNIPPET_LEN: usize = 6;

/// Ordered, immutable RBS reference library.
pub struct RbsChooser {
    options: Vec<RbsOption>,
}

impl RbsChooser {
    pub fn new(options: Vec<RbsOption>) -> Self {
        RbsChooser { options }
    }

    pub fn options(&self) -> &[RbsOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Selects an RBS for `cds`, skipping every option in `ignores`.
    /// Fails only when the exclusion empties the candidate set.
    pub fn select(
        &self,
        cds: &str,
        ignores: &HashSet<RbsOption>,
    ) -> Result<RbsOption, DesignError> {
        let candidates: Vec<&RbsOption> = self
            .options
            .iter()
            .filter(|option| !ignores.contains(option))
            .collect();
        if candidates.is_empty() {
            return Err(DesignError::RbsLibraryExhausted {
                ignored: ignores.len(),
            });
        }

        let query_snippet: String = translate(cds)?.chars().take(SNIPPET_LEN).collect();

        let mut best: Option<(&RbsOption, usize)> = None;
        let mut fallback: Option<(&RbsOption, usize)> = None;
        for option in candidates {
            let joint = format!("{}{}", option.utr, cds);
            let (hairpins, _) = hairpin_counter(&joint);
            let distance = edit_distance(&query_snippet, &option.first_six_aas);
            debug!(
                "RBS candidate {}: {} hairpins, edit distance {}",
                option.gene_name, hairpins, distance
            );

            // Strict '<' keeps the earliest candidate on ties.
            if fallback.map_or(true, |(_, d)| distance < d) {
                fallback = Some((option, distance));
            }
            if hairpins <= MAX_LEADER_HAIRPINS && best.map_or(true, |(_, d)| distance < d) {
                best = Some((option, distance));
            }
        }

        let (chosen, distance) = best.or(fallback).ok_or(DesignError::RbsLibraryExhausted {
            ignored: ignores.len(),
        })?;
        info!(
            "selected RBS from {} (edit distance {})",
            chosen.gene_name, distance
        );
        Ok(chosen.clone())
    }
}
