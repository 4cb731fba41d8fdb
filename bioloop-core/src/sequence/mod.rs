//! Sequence composition, generation and input handling.
//!
//! ## Modules
//!
//! - [`composition`]: base counting and GC percentage
//! - [`generate`]: uniform random DNA sequences
//! - [`io`]: in-memory FASTA-like text handling (header skipping, record parsing)
//!
//! ## Examples
//!
//! ### GC content of a sequence
//!
//! ```rust
//! use bioloop_core::sequence::gc_content;
//!
//! let gc = gc_content(b"ATGC")?;
//! assert_eq!(gc, 50.0);
//! # Ok::<(), bioloop_core::types::BioloopError>(())
//! ```
//!
//! ### Reproducible random sequence
//!
//! ```rust
//! use bioloop_core::sequence::{create_rng, generate_sequence};
//!
//! let mut rng = create_rng(Some(7));
//! let seq = generate_sequence(12, &mut rng);
//! assert_eq!(seq.len(), 12);
//! ```

pub mod composition;
pub mod generate;
pub mod io;

pub use composition::*;
pub use generate::*;
pub use io::*;

/// Upper-case a sequence for analysis.
///
/// Callers normalize DNA input before counting, since every counter in this
/// crate matches upper-case bases only.
#[must_use]
pub fn normalize(sequence: &[u8]) -> Vec<u8> {
    sequence.to_ascii_uppercase()
}

/// Sequence data of a FASTA-like text: headers and line breaks removed,
/// upper-cased.
///
/// Every front end prepares pasted or file input with this before counting
/// bases.
#[must_use]
pub fn sequence_from_text(text: &str) -> Vec<u8> {
    normalize(&concatenate_sequence(text))
}
