pub mod codon_checker;
pub mod forbidden_sequence;
pub mod hairpin;
pub mod internal_rbs;
pub mod promoter;
