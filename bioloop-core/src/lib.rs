//! # Bioloop - Sequence Analysis Toolkit
//!
//! Analysis primitives for nucleotide and protein sequences, written to sit
//! behind a thin front end (command line, browser, Python web app) that
//! decodes user input and renders the reports.
//!
//! ## Features
//!
//! - **Motif search**: `X` wildcards expanded over the DNA or protein
//!   alphabet, every occurrence reported by line and offset
//! - **Codon usage**: per-codon counts and shares over FASTA-like text
//! - **CpG islands**: sliding-window GC and observed/expected CpG scoring
//! - **Composition**: GC content
//! - **Six-frame translation** with the standard genetic code
//! - **Random sequences**, optionally seeded
//!
//! ## Quick Start
//!
//! ```rust
//! use bioloop_core::{BioloopAnalyzer, config::BioloopConfig};
//!
//! let analyzer = BioloopAnalyzer::new(BioloopConfig::default());
//!
//! let report = analyzer.search_dna_motif("AXG", "line1\nATGATG\n")?;
//! assert_eq!(report.matches.len(), 2);
//!
//! let usage = analyzer.codon_usage(">seq1\nATGATGATG")?;
//! assert_eq!(usage.total_codons, 3);
//! # Ok::<(), bioloop_core::types::BioloopError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: analyzer configuration and output formats
//! - [`engine`]: the [`BioloopAnalyzer`] facade
//! - [`alphabet`]: DNA and protein symbol sets
//! - [`sequence`]: composition, generation and input handling
//! - [`motif`]: wildcard expansion and multi-line search
//! - [`codon`]: codon tables and codon usage
//! - [`cpg`]: CpG island detection
//! - [`translation`]: six-frame translation
//! - [`validate`]: caller parameter bounds
//! - [`types`]: record types and [`BioloopError`]
//! - [`results`]: report types
//! - [`output`]: text and TSV writers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, BioloopError>`](types::BioloopError):
//!
//! - Sequences without any A, C, G or T
//! - Codon usage with nothing to count
//! - Empty motifs and motifs that expand past the configured limit
//! - Out-of-range numeric parameters
//! - I/O errors while writing reports

pub mod alphabet;
pub mod codon;
pub mod config;
pub mod constants;
pub mod cpg;
pub mod engine;
pub mod motif;
pub mod output;
pub mod results;
pub mod sequence;
pub mod translation;
pub mod types;
pub mod validate;

pub use engine::BioloopAnalyzer;
pub use types::BioloopError;
