use crate::alphabet::Alphabet;
use crate::types::{CodonUsage, CpgIsland, MatchRecord, TranslatedFrame};

/// Common shape of every analysis report.
///
/// A report renders as ordered human-readable lines for display, or as TSV
/// rows for downstream tools. See [`write_report`](crate::output::write_report).
pub trait Report {
    /// Human-readable lines, in report order
    fn lines(&self) -> Vec<String>;

    /// TSV column names
    fn tsv_header(&self) -> &'static [&'static str];

    /// TSV rows, one per reported item, each matching [`Report::tsv_header`]
    fn tsv_rows(&self) -> Vec<Vec<String>>;

    /// Number of reported items, without rendering them
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of a motif search.
///
/// # Examples
///
/// ```rust
/// use bioloop_core::{BioloopAnalyzer, config::BioloopConfig};
/// use bioloop_core::results::Report;
///
/// let analyzer = BioloopAnalyzer::new(BioloopConfig::default());
/// let report = analyzer.search_dna_motif("AXG", "line1\nATGATG\n")?;
///
/// assert_eq!(report.lines(), ["Line 2, position 0: ATG", "Line 2, position 3: ATG"]);
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifReport {
    /// Normalized (trimmed, upper-case) motif
    pub motif: String,
    /// Alphabet wildcards were expanded over
    pub alphabet: Alphabet,
    /// Number of literal patterns searched for
    pub pattern_count: usize,
    /// Matches ordered by line, then offset
    pub matches: Vec<MatchRecord>,
}

impl Report for MotifReport {
    fn lines(&self) -> Vec<String> {
        self.matches.iter().map(ToString::to_string).collect()
    }

    fn tsv_header(&self) -> &'static [&'static str] {
        &["line", "offset", "match"]
    }

    fn len(&self) -> usize {
        self.matches.len()
    }

    fn tsv_rows(&self) -> Vec<Vec<String>> {
        self.matches
            .iter()
            .map(|m| vec![m.line.to_string(), m.offset.to_string(), m.text.clone()])
            .collect()
    }
}

/// Result of codon-usage tabulation.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonUsageReport {
    /// One row per codon, grouped by amino acid, stop group last
    pub usage: Vec<CodonUsage>,
    /// Number of codons counted
    pub total_codons: u64,
}

impl Report for CodonUsageReport {
    fn lines(&self) -> Vec<String> {
        self.usage.iter().map(ToString::to_string).collect()
    }

    fn tsv_header(&self) -> &'static [&'static str] {
        &["amino_acid", "codon", "count", "percentage"]
    }

    fn len(&self) -> usize {
        self.usage.len()
    }

    fn tsv_rows(&self) -> Vec<Vec<String>> {
        self.usage
            .iter()
            .map(|u| {
                vec![
                    u.group.to_string(),
                    u.codon.to_string(),
                    u.count.to_string(),
                    u.percentage.to_string(),
                ]
            })
            .collect()
    }
}

/// Result of a CpG island scan.
#[derive(Debug, Clone, PartialEq)]
pub struct CpgReport {
    /// Number of leading characters examined
    pub search_window: usize,
    /// Width of each scored window
    pub search_frame: usize,
    /// Number of windows scored
    pub windows_scanned: usize,
    /// Flagged windows, by start offset
    pub islands: Vec<CpgIsland>,
}

impl Report for CpgReport {
    fn lines(&self) -> Vec<String> {
        self.islands.iter().map(ToString::to_string).collect()
    }

    fn tsv_header(&self) -> &'static [&'static str] {
        &["start", "end", "obs_exp_ratio", "gc_fraction"]
    }

    fn len(&self) -> usize {
        self.islands.len()
    }

    fn tsv_rows(&self) -> Vec<Vec<String>> {
        self.islands
            .iter()
            .map(|island| {
                vec![
                    island.start.to_string(),
                    island.end.to_string(),
                    island.obs_exp_ratio.to_string(),
                    island.gc_fraction.to_string(),
                ]
            })
            .collect()
    }
}

/// Six-frame translation of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationReport {
    /// Frames +1, +2, +3, -1, -2, -3
    pub frames: Vec<TranslatedFrame>,
    /// GC percentage of the translated sequence
    pub gc_content: f64,
}

impl Report for TranslationReport {
    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.frames.iter().map(ToString::to_string).collect();
        lines.push(format!("GC content: {}%", self.gc_content));
        lines
    }

    fn tsv_header(&self) -> &'static [&'static str] {
        &["frame", "protein", "gc_content"]
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn tsv_rows(&self) -> Vec<Vec<String>> {
        self.frames
            .iter()
            .map(|f| {
                vec![
                    f.frame.to_string(),
                    f.protein.clone(),
                    self.gc_content.to_string(),
                ]
            })
            .collect()
    }
}
