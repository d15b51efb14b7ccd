// src/checkers/promoter.rs
// Sigma-70 constitutive promoter screen. A promoter is called when a -35
// box (TTGACA) and a -10 box (TATAAT) occur with a 15-21 nt spacer, each
// box tolerating one mismatch from consensus.

use tracing::debug;

const MINUS_35: &str = "TTGACA";
const MINUS_10: &str = "TATAAT";
const MIN_SPACER: usize = 15;
const MAX_SPACER: usize = 21;
const MAX_BOX_MISMATCHES: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct PromoterChecker;

fn mismatches(window: &[u8], motif: &str) -> usize {
    window
        .iter()
        .zip(motif.as_bytes())
        .filter(|(a, b)| a != b)
        .count()
}

impl PromoterChecker {
    pub fn new() -> Self {
        PromoterChecker
    }

    /// Passes iff no -35/-10 pair is found anywhere in the sequence.
    pub fn run(&self, sequence: &str) -> bool {
        let seq = sequence.to_ascii_uppercase();
        let bytes = seq.as_bytes();
        let box_len = MINUS_35.len();
        if bytes.len() < box_len {
            return true;
        }

        for i in 0..=bytes.len() - box_len {
            if mismatches(&bytes[i..i + box_len], MINUS_35) > MAX_BOX_MISMATCHES {
                continue;
            }
            for spacer in MIN_SPACER..=MAX_SPACER {
                let j = i + box_len + spacer;
                if j + box_len > bytes.len() {
                    break;
                }
                if mismatches(&bytes[j..j + box_len], MINUS_10) <= MAX_BOX_MISMATCHES {
                    debug!("promoter-like -35/-10 pair at {}..{}", i, j + box_len);
                    return false;
                }
            }
        }
        true
    }
}
