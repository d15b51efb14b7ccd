// src/helper_functions.rs

use std::env;
use std::path::PathBuf;

/// Root directory for data files. Honors `PROJECT_ROOT`, falling back to the
/// current working directory.
pub fn project_root() -> PathBuf {
    match env::var_os("PROJECT_ROOT") {
        Some(val) => PathBuf::from(val),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Reverse complement of a DNA sequence. Non-ACGT characters pass through
/// unchanged (positionally reversed).
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match c.to_ascii_uppercase() {
            'A' => 'T',
            'T' => 'A',
            'G' => 'C',
            'C' => 'G',
            other => other,
        })
        .collect()
}

/// Levenshtein distance with unit insert/delete/substitute costs.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];
    for i in 1..=n {
        curr[0] = i;
        for j in 1..=m {
            let subst = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + subst);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_complement_basics() {
        assert_eq!(reverse_complement("ATGC"), "GCAT");
        assert_eq!(reverse_complement("AAGGAGG"), "CCTCCTT");
        assert_eq!(reverse_complement("atg"), "CAT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn edit_distance_identity_is_zero() {
        for s in ["", "M", "MYPFIR", "AGGAGGTGATG"] {
            assert_eq!(edit_distance(s, s), 0);
        }
    }

    #[test]
    fn edit_distance_is_symmetric() {
        let pairs = [("MKATKL", "MSITKD"), ("", "MV"), ("MYPFIR", "MYP")];
        for (x, y) in pairs {
            assert_eq!(edit_distance(x, y), edit_distance(y, x));
        }
    }

    #[test]
    fn edit_distance_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("MKATKL", "MKATKV"), 1);
        assert_eq!(edit_distance("", "MMM"), 3);
    }
}
