pub mod codon_usage;
pub mod rbs_library;
