//! Codon tables and codon-usage tabulation.
//!
//! - [`table`]: the standard code as 21 synonymous groups, plus compile-time
//!   lookup tables derived from them
//! - [`usage`]: per-codon counts over FASTA-like text

pub mod table;
pub mod usage;

pub use table::{SYNONYMOUS_GROUPS, SynonymousGroup, codon_index, translate_codon};
pub use usage::{CodonCounts, codon_usage};
