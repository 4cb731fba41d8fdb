use log::info;

use crate::alphabet::Alphabet;
use crate::config::BioloopConfig;
use crate::cpg::find_islands;
use crate::motif::search_motif;
use crate::results::{CodonUsageReport, CpgReport, MotifReport, TranslationReport};
use crate::sequence::{create_rng, generate_sequence, sequence_from_text};
use crate::translation::six_frame_translation;
use crate::types::BioloopError;
use crate::{codon, sequence, validate};

/// High-level entry point for every analysis.
///
/// `BioloopAnalyzer` holds only configuration; each call is independent and
/// leaves no state behind, so one analyzer can serve any number of
/// requests.
///
/// # Examples
///
/// ## Motif search
///
/// ```rust
/// use bioloop_core::{BioloopAnalyzer, config::BioloopConfig};
///
/// let analyzer = BioloopAnalyzer::new(BioloopConfig::default());
/// let report = analyzer.search_dna_motif("AXG", "line1\nATGATG\n")?;
///
/// for m in &report.matches {
///     println!("{m}");
/// }
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
///
/// ## CpG islands in a FASTA text
///
/// ```rust
/// use bioloop_core::{BioloopAnalyzer, config::BioloopConfig};
///
/// let analyzer = BioloopAnalyzer::new(BioloopConfig { quiet: true, ..Default::default() });
/// let fasta = format!(">chr1\n{}\n", "cg".repeat(200));
/// let report = analyzer.cpg_islands(&fasta, 1000, 200)?;
/// assert_eq!(report.islands.len(), 201);
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
#[derive(Debug, Default)]
pub struct BioloopAnalyzer {
    /// Configuration applied to every call
    pub config: BioloopConfig,
}

impl BioloopAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    pub const fn new(config: BioloopConfig) -> Self {
        Self { config }
    }

    /// Generates a random DNA sequence of `length` bases.
    ///
    /// Output differs on every call unless [`BioloopConfig::seed`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::InvalidParameter`] above 10,000,000 bases.
    pub fn generate_sequence(&self, length: usize) -> Result<String, BioloopError> {
        validate::sequence_length(length)?;
        let mut rng = create_rng(self.config.seed);
        let seq = generate_sequence(length, &mut rng);
        self.log_summary(format_args!("Generated {length} bp sequence"));
        Ok(seq)
    }

    /// Computes the GC percentage of a sequence.
    ///
    /// Only upper-case bases are counted; normalize first with
    /// [`sequence::normalize`] if the input may be lower-case.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::EmptyComposition`] if no A, C, G or T is present.
    pub fn gc_content(&self, sequence: &[u8]) -> Result<f64, BioloopError> {
        let gc = sequence::gc_content(sequence)?;
        self.log_summary(format_args!("GC content {gc:.2}% over {} bytes", sequence.len()));
        Ok(gc)
    }

    /// Searches a multi-line text for a DNA motif with `X` wildcards.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::EmptyMotif`] or
    /// [`BioloopError::PatternExplosion`].
    pub fn search_dna_motif(&self, motif: &str, text: &str) -> Result<MotifReport, BioloopError> {
        self.search(motif, text, Alphabet::Dna)
    }

    /// Searches a multi-line text for a protein motif with `X` wildcards.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::EmptyMotif`] or
    /// [`BioloopError::PatternExplosion`].
    pub fn search_protein_motif(
        &self,
        motif: &str,
        text: &str,
    ) -> Result<MotifReport, BioloopError> {
        self.search(motif, text, Alphabet::Protein)
    }

    fn search(
        &self,
        motif: &str,
        text: &str,
        alphabet: Alphabet,
    ) -> Result<MotifReport, BioloopError> {
        let report = search_motif(motif, text, alphabet, self.config.max_expanded_patterns)?;
        self.log_summary(format_args!(
            "Found {} occurrences of {} motif {} ({} patterns)",
            report.matches.len(),
            alphabet,
            report.motif,
            report.pattern_count
        ));
        Ok(report)
    }

    /// Tabulates codon usage over a FASTA-like text.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::NoCodonsFound`] if no valid codon is present.
    pub fn codon_usage(&self, text: &str) -> Result<CodonUsageReport, BioloopError> {
        let report = codon::codon_usage(text)?;
        self.log_summary(format_args!("Counted {} codons", report.total_codons));
        Ok(report)
    }

    /// Scans the start of a FASTA-like text for CpG islands.
    ///
    /// Header lines and line breaks are removed and the sequence is
    /// upper-cased; the first `search_window` bases of the result are
    /// scanned with windows of `search_frame` bases.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::InvalidParameter`] if `search_window` is not in
    /// `(0, 5,000,000]` or `search_frame` is not in `[200, 10,000]`.
    pub fn cpg_islands(
        &self,
        text: &str,
        search_window: usize,
        search_frame: usize,
    ) -> Result<CpgReport, BioloopError> {
        validate::search_window(search_window)?;
        validate::search_frame(search_frame)?;

        let seq = sequence_from_text(text);
        let report = find_islands(&seq, search_window, search_frame)?;
        self.log_summary(format_args!(
            "Flagged {} of {} windows as CpG islands",
            report.islands.len(),
            report.windows_scanned
        ));
        Ok(report)
    }

    /// Translates all six reading frames of a sequence.
    ///
    /// Header lines and line breaks are removed and the sequence is
    /// upper-cased before translation.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::EmptyComposition`] if no A, C, G or T is present.
    pub fn six_frame_translation(&self, text: &str) -> Result<TranslationReport, BioloopError> {
        let seq = sequence_from_text(text);
        let report = six_frame_translation(&seq)?;
        self.log_summary(format_args!("Translated {} bp in six frames", seq.len()));
        Ok(report)
    }

    fn log_summary(&self, message: std::fmt::Arguments<'_>) {
        if !self.config.quiet {
            info!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEST_SEQUENCE_REPEAT_FACTOR;
    use crate::types::MatchRecord;

    fn analyzer() -> BioloopAnalyzer {
        BioloopAnalyzer::new(BioloopConfig {
            quiet: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_generate_sequence() {
        let seq = analyzer().generate_sequence(1_000).unwrap();
        assert_eq!(seq.len(), 1_000);
        assert!(seq.bytes().all(|b| b"ACGT".contains(&b)));
        assert_eq!(analyzer().generate_sequence(0).unwrap(), "");
    }

    #[test]
    fn test_generate_sequence_seeded() {
        let seeded = BioloopAnalyzer::new(BioloopConfig {
            seed: Some(7),
            ..Default::default()
        });
        assert_eq!(
            seeded.generate_sequence(200).unwrap(),
            seeded.generate_sequence(200).unwrap()
        );
    }

    #[test]
    fn test_generate_sequence_too_long() {
        assert!(matches!(
            analyzer().generate_sequence(10_000_001),
            Err(BioloopError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_gc_content() {
        assert_eq!(analyzer().gc_content(b"GCGC").unwrap(), 100.0);
        assert_eq!(analyzer().gc_content(b"ATGC").unwrap(), 50.0);
        assert!(analyzer().gc_content(b"").is_err());
    }

    #[test]
    fn test_search_dna_motif() {
        let report = analyzer()
            .search_dna_motif("atg", "line1\nATGATG\n")
            .unwrap();
        assert_eq!(
            report.matches,
            vec![MatchRecord::new(2, 0, "ATG"), MatchRecord::new(2, 3, "ATG")]
        );
    }

    #[test]
    fn test_search_protein_motif_respects_pattern_limit() {
        let limited = BioloopAnalyzer::new(BioloopConfig {
            max_expanded_patterns: 400,
            quiet: true,
            ..Default::default()
        });
        assert!(limited.search_protein_motif("MXX", "MKW").is_ok());
        assert!(matches!(
            limited.search_protein_motif("MXXX", "MKW"),
            Err(BioloopError::PatternExplosion { limit: 400, .. })
        ));
    }

    #[test]
    fn test_codon_usage() {
        let report = analyzer().codon_usage(">seq1\nATGATGATG").unwrap();
        assert_eq!(report.total_codons, 3);
        assert!(matches!(
            analyzer().codon_usage(">seq1\n"),
            Err(BioloopError::NoCodonsFound)
        ));
    }

    #[test]
    fn test_cpg_islands_all_cg_and_all_a() {
        let cg = "CG".repeat(TEST_SEQUENCE_REPEAT_FACTOR);
        let report = analyzer().cpg_islands(&cg, 1000, 200).unwrap();
        assert_eq!(report.windows_scanned, 801);
        assert_eq!(report.islands.len(), 801);

        let a = "A".repeat(2 * TEST_SEQUENCE_REPEAT_FACTOR);
        let report = analyzer().cpg_islands(&a, 1000, 200).unwrap();
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_cpg_islands_strips_fasta_layout() {
        let body: Vec<String> = (0..5).map(|_| "cgcgcgcgcg".repeat(6)).collect();
        let fasta = format!(">chr1 test\n{}\n", body.join("\n"));
        let report = analyzer().cpg_islands(&fasta, 1000, 200).unwrap();
        assert_eq!(report.windows_scanned, 101);
        assert_eq!(report.islands.len(), 101);
    }

    #[test]
    fn test_cpg_islands_validates_bounds() {
        let seq = "CG".repeat(300);
        assert!(analyzer().cpg_islands(&seq, 1000, 199).is_err());
        assert!(analyzer().cpg_islands(&seq, 1000, 10_001).is_err());
        assert!(analyzer().cpg_islands(&seq, 0, 200).is_err());
        assert!(analyzer().cpg_islands(&seq, 5_000_001, 200).is_err());
    }

    #[test]
    fn test_six_frame_translation() {
        let report = analyzer()
            .six_frame_translation(">orf\natggcc\ntaa\n")
            .unwrap();
        assert_eq!(report.frames.len(), 6);
        assert_eq!(report.frames[0].protein, "MA*");
    }

    #[test]
    fn test_analyses_are_idempotent() {
        let a = analyzer();
        let text = ">s\nATGCGCGTAXGCTAG\nCGCGATGAGG";
        assert_eq!(
            a.search_dna_motif("AXG", text).unwrap(),
            a.search_dna_motif("AXG", text).unwrap()
        );
        assert_eq!(a.codon_usage(text).unwrap(), a.codon_usage(text).unwrap());
        assert_eq!(
            a.six_frame_translation(text).unwrap(),
            a.six_frame_translation(text).unwrap()
        );
    }
}
