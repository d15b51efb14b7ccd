// src/checkers/internal_rbs.rs
// Flags internal ribosome entry: a Shine-Dalgarno motif followed, after a
// 6-10 nt spacer, by a bacterial start codon. Unlike the other checkers
// this one also reports the offending stretch so callers can log it.

const SHINE_DALGARNO_MOTIFS: &[&str] = &["AGGAGG", "GGAGG"];
const START_CODONS: &[&str] = &["ATG", "GTG", "TTG"];
/// Start-codon search window relative to the motif end: [end+6, end+11).
const SPACER_OFFSET: usize = 6;
const SPACER_WINDOW: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct InternalRbsChecker;

impl InternalRbsChecker {
    pub fn new() -> Self {
        InternalRbsChecker
    }

    /// Returns `(true, None)` when the sequence is clean; otherwise
    /// `(false, Some(offender))` where the offender is the motif plus the
    /// downstream stretch through the start codon.
    pub fn run(&self, sequence: &str) -> (bool, Option<String>) {
        let seq = sequence.to_ascii_uppercase();

        for motif in SHINE_DALGARNO_MOTIFS {
            let mut from = 0;
            while let Some(rel) = seq[from..].find(motif) {
                let pos = from + rel;
                let end = pos + motif.len();
                let win_start = (end + SPACER_OFFSET).min(seq.len());
                let win_end = (end + SPACER_OFFSET + SPACER_WINDOW).min(seq.len());
                let window = &seq[win_start..win_end];

                for k in 0..window.len().saturating_sub(2) {
                    let triplet = &window[k..k + 3];
                    if START_CODONS.contains(&triplet) {
                        let offender = format!("{}{}", motif, &window[..k + 3]);
                        return (false, Some(offender));
                    }
                }
                from = pos + 1;
            }
        }
        (true, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shine_dalgarno_with_downstream_start_is_flagged() {
        let checker = InternalRbsChecker::new();
        let (ok, offender) = checker.run("AAAGGAGGTAGGGGTGATGAAA");
        assert!(!ok);
        assert_eq!(offender.as_deref(), Some("AGGAGGTGATG"));
    }

    #[test]
    fn sequence_without_motif_is_clean() {
        let checker = InternalRbsChecker::new();
        assert_eq!(checker.run("TTTCCCGTGGGCACTGAGCACTG"), (true, None));
    }

    #[test]
    fn motif_without_nearby_start_codon_is_clean() {
        let checker = InternalRbsChecker::new();
        // Spacer window past the motif holds no ATG/GTG/TTG.
        assert_eq!(checker.run("AGGAGGCCCCCCCCACCACC"), (true, None));
    }

    #[test]
    fn motif_at_the_tail_is_clean() {
        // Search window collapses to nothing past the end of the sequence.
        let checker = InternalRbsChecker::new();
        assert_eq!(checker.run("CCCAGGAGG"), (true, None));
    }

    #[test]
    fn lowercase_input_is_normalized() {
        let checker = InternalRbsChecker::new();
        let (ok, offender) = checker.run("aaaggaggtaggggtgatgaaa");
        assert!(!ok);
        assert_eq!(offender.as_deref(), Some("AGGAGGTGATG"));
    }
}
