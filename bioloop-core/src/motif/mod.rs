//! Wildcard motif expansion and multi-line motif search.
//!
//! A motif such as `AXG` is first expanded into the literal patterns it
//! stands for ([`expand_motif`]), then every line of the text is scanned for
//! any of them ([`search_patterns`]).
//!
//! ## Examples
//!
//! ```rust
//! use bioloop_core::alphabet::Alphabet;
//! use bioloop_core::motif::search_motif;
//!
//! let report = search_motif("AXG", ">seq\nTTACGAAG", Alphabet::Dna, 1024)?;
//! assert_eq!(report.pattern_count, 4);
//! assert_eq!(report.matches.len(), 2);
//! assert_eq!(report.matches[0].to_string(), "Line 2, position 2: ACG");
//! # Ok::<(), bioloop_core::types::BioloopError>(())
//! ```

pub mod expand;
pub mod search;

pub use expand::*;
pub use search::*;

use crate::alphabet::Alphabet;
use crate::results::MotifReport;
use crate::types::BioloopError;

/// Expand a motif over `alphabet` and search the text for it.
///
/// # Errors
///
/// Propagates [`expand_motif`] failures: an empty motif or an expansion
/// larger than `limit`.
pub fn search_motif(
    motif: &str,
    text: &str,
    alphabet: Alphabet,
    limit: usize,
) -> Result<MotifReport, BioloopError> {
    let patterns = expand_motif(motif, alphabet, limit)?;
    let matches = search_patterns(&patterns, text);

    log::debug!(
        "{} motif {} expanded to {} patterns, {} matches",
        alphabet,
        motif.trim(),
        patterns.len(),
        matches.len()
    );

    Ok(MotifReport {
        motif: normalize_motif(motif)?,
        alphabet,
        pattern_count: patterns.len(),
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchRecord;

    #[test]
    fn test_search_motif_dna() {
        let report = search_motif("axg", "line1\nATGATG\nCCAGG", Alphabet::Dna, 1024).unwrap();
        assert_eq!(report.motif, "AXG");
        assert_eq!(report.pattern_count, 4);
        assert_eq!(
            report.matches,
            vec![
                MatchRecord::new(2, 0, "ATG"),
                MatchRecord::new(2, 3, "ATG"),
                MatchRecord::new(3, 2, "AGG"),
            ]
        );
    }

    #[test]
    fn test_search_motif_protein() {
        let text = ">sp|P1\nMKWVTFISLL\nMKWAAA";
        let report = search_motif("MKWX", text, Alphabet::Protein, 1024).unwrap();
        assert_eq!(report.pattern_count, 20);
        assert_eq!(
            report.matches,
            vec![MatchRecord::new(2, 0, "MKWV"), MatchRecord::new(3, 0, "MKWA")]
        );
    }

    #[test]
    fn test_search_motif_no_matches_is_empty_report() {
        let report = search_motif("GGG", "ATATAT", Alphabet::Dna, 1024).unwrap();
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_search_motif_errors() {
        assert!(matches!(
            search_motif("", "ATG", Alphabet::Dna, 1024),
            Err(BioloopError::EmptyMotif)
        ));
        assert!(matches!(
            search_motif("XXXXXX", "ATG", Alphabet::Dna, 1024),
            Err(BioloopError::PatternExplosion { .. })
        ));
    }
}
