// src/data_handling/rbs_library.rs
// Loads the RBS reference library from a headered CSV (gene,UTR,CDS). Row
// order is preserved so downstream tie-breaking stays deterministic.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::models::RbsOption;
use crate::translate::translate;

#[derive(Debug, Deserialize)]
struct RbsRow {
    gene: String,
    #[serde(rename = "UTR")]
    utr: String,
    #[serde(rename = "CDS")]
    cds: String,
}

/// Reads the library, deriving each option's six-amino-acid snippet by
/// translating its CDS.
pub fn load_rbs_library(path: &Path) -> Result<Vec<RbsOption>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening RBS library {}", path.display()))?;

    let mut options = Vec::new();
    for (i, record) in reader.deserialize::<RbsRow>().enumerate() {
        let row = record.with_context(|| format!("parsing RBS library row {}", i + 1))?;
        let cds = row.cds.to_ascii_uppercase();
        let peptide = translate(&cds)
            .with_context(|| format!("translating CDS of '{}' (row {})", row.gene, i + 1))?;
        options.push(RbsOption {
            gene_name: row.gene,
            utr: row.utr.to_ascii_uppercase(),
            first_six_aas: peptide.chars().take(6).collect(),
            cds,
        });
    }

    if options.is_empty() {
        bail!("RBS library {} contains no rows", path.display());
    }
    info!("RBS library loaded: {} options from {}", options.len(), path.display());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_rows_in_file_order_with_snippets() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gene,UTR,CDS").unwrap();
        writeln!(file, "lpp,AAGGAGGTATTACC,ATGAAAGCTACTAAACTG").unwrap();
        writeln!(file, "ompA,TTAAGGAGGACAAACA,atgaaaaagacagctatc").unwrap();
        let options = load_rbs_library(file.path()).unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].gene_name, "lpp");
        assert_eq!(options[0].first_six_aas, "MKATKL");
        // Lowercase input rows are normalized.
        assert_eq!(options[1].cds, "ATGAAAAAGACAGCTATC");
        assert_eq!(options[1].first_six_aas, "MKKTAI");
    }

    #[test]
    fn out_of_frame_cds_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gene,UTR,CDS").unwrap();
        writeln!(file, "bad,AAGGAGG,ATGA").unwrap();
        assert!(load_rbs_library(file.path()).is_err());
    }

    #[test]
    fn empty_library_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gene,UTR,CDS").unwrap();
        assert!(load_rbs_library(file.path()).is_err());
    }

    #[test]
    fn repo_library_loads_and_keeps_order() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../data/rbs_library.csv"
        ));
        let options = load_rbs_library(path).unwrap();
        assert!(options.len() >= 2);
        assert_eq!(options[0].gene_name, "lpp");
        for option in &options {
            assert_eq!(option.first_six_aas.chars().count(), 6);
            assert!(option.cds.starts_with("ATG"));
        }
    }
}
