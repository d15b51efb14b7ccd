//! Reverse-translation transcript design: a guided-random, sliding-window
//! codon optimizer constrained by five sequence checkers, paired with RBS
//! selection from a reference library.

pub mod checkers;
pub mod data_handling;
pub mod designer;
pub mod helper_functions;
pub mod models;
pub mod optimizer;
pub mod rbs_chooser;
pub mod translate;

pub use designer::{TranscriptDesigner, STOP_CODON};
pub use models::{DesignError, RbsOption, Transcript};
