// src/translate.rs
// Standard-genetic-code translation. Stop codons translate to '*'; the
// caller decides whether a trailing stop is meaningful.

use crate::models::DesignError;

/// Amino acid for a single uppercase DNA codon, `None` outside the table.
pub fn codon_to_amino_acid(codon: &str) -> Option<char> {
    let aa = match codon {
        "TTT" | "TTC" => 'F',
        "TTA" | "TTG" | "CTT" | "CTC" | "CTA" | "CTG" => 'L',
        "ATT" | "ATC" | "ATA" => 'I',
        "ATG" => 'M',
        "GTT" | "GTC" | "GTA" | "GTG" => 'V',
        "TCT" | "TCC" | "TCA" | "TCG" | "AGT" | "AGC" => 'S',
        "CCT" | "CCC" | "CCA" | "CCG" => 'P',
        "ACT" | "ACC" | "ACA" | "ACG" => 'T',
        "GCT" | "GCC" | "GCA" | "GCG" => 'A',
        "TAT" | "TAC" => 'Y',
        "TAA" | "TAG" | "TGA" => '*',
        "CAT" | "CAC" => 'H',
        "CAA" | "CAG" => 'Q',
        "AAT" | "AAC" => 'N',
        "AAA" | "AAG" => 'K',
        "GAT" | "GAC" => 'D',
        "GAA" | "GAG" => 'E',
        "TGT" | "TGC" => 'C',
        "TGG" => 'W',
        "CGT" | "CGC" | "CGA" | "CGG" | "AGA" | "AGG" => 'R',
        "GGT" | "GGC" | "GGA" | "GGG" => 'G',
        _ => return None,
    };
    Some(aa)
}

/// Translates an in-frame DNA sequence into single-letter amino acids.
/// Out-of-frame input is an error, never silently truncated.
pub fn translate(dna: &str) -> Result<String, DesignError> {
    let seq = dna.to_ascii_uppercase();
    if seq.len() % 3 != 0 {
        return Err(DesignError::OutOfFrame { length: seq.len() });
    }

    let mut peptide = String::with_capacity(seq.len() / 3);
    for chunk in seq.as_bytes().chunks(3) {
        let codon = std::str::from_utf8(chunk).map_err(|_| DesignError::InvalidCodon {
            codon: String::from_utf8_lossy(chunk).into_owned(),
        })?;
        let aa = codon_to_amino_acid(codon).ok_or_else(|| DesignError::InvalidCodon {
            codon: codon.to_string(),
        })?;
        peptide.push(aa);
    }
    Ok(peptide)
}
