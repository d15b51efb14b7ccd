// src/main.rs

use std::collections::HashSet;
use std::env;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use designer::TranscriptDesigner;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let peptide = env::args().nth(1).unwrap_or_else(|| "MYPFIRTARMTV".to_string());
    let seed = env::var("DESIGNER_SEED").ok().and_then(|s| s.parse().ok());

    info!("Starting transcript design for {}", peptide);
    let mut designer = TranscriptDesigner::new(seed)?;

    let ignores = HashSet::new();
    let transcript = designer.design(&peptide, &ignores)?;

    println!("{transcript}");
    println!("{}", serde_json::to_string_pretty(&transcript)?);
    Ok(())
}
