// src/checkers/hairpin.rs
// Stem-loop detection: a hairpin is a 3-nt stem whose reverse complement
// reappears after a 4-9 nt loop. The counter reports every such site; the
// boolean checker passes only on a count of zero.

use crate::helper_functions::reverse_complement;

const STEM_LEN: usize = 3;
const MIN_LOOP: usize = 4;
const MAX_LOOP: usize = 9;

/// Counts candidate hairpin sites in `sequence` and renders the first one
/// found (`stem(loop)stem`). Only the count is consumed by the designer.
pub fn hairpin_counter(sequence: &str) -> (usize, Option<String>) {
    let seq = sequence.to_ascii_uppercase();
    let n = seq.len();
    let mut count = 0;
    let mut first: Option<String> = None;

    for i in 0..n {
        for loop_len in MIN_LOOP..=MAX_LOOP {
            let j = i + STEM_LEN + loop_len;
            if j + STEM_LEN > n {
                continue;
            }
            let stem1 = &seq[i..i + STEM_LEN];
            let stem2 = &seq[j..j + STEM_LEN];
            if stem1 == reverse_complement(stem2) {
                count += 1;
                if first.is_none() {
                    first = Some(format!("{}({}){}", stem1, &seq[i + STEM_LEN..j], stem2));
                }
            }
        }
    }
    (count, first)
}

/// Passes iff the sequence contains no hairpin site at all.
pub fn hairpin_checker(sequence: &str) -> bool {
    hairpin_counter(sequence).0 == 0
}
