use std::fmt;

use thiserror::Error;

/// Occurrence of a literal motif pattern inside a multi-line text.
///
/// Records are created by the search engine and never mutated. They sort
/// line-major, then by offset within the line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchRecord {
    /// 1-based line number within the searched text
    pub line: usize,
    /// 0-based byte offset of the match within its line
    pub offset: usize,
    /// The literal pattern that matched
    pub text: String,
}

impl MatchRecord {
    pub fn new(line: usize, offset: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            offset,
            text: text.into(),
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, position {}: {}",
            self.line, self.offset, self.text
        )
    }
}

/// Usage of one codon within a codon-usage report.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonUsage {
    /// Three-letter label of the synonymous group (`MET`, `STOP`, ...)
    pub group: &'static str,
    /// The codon itself
    pub codon: &'static str,
    /// Number of times the codon was seen
    pub count: u64,
    /// Share of all counted codons, as a percentage (unrounded)
    pub percentage: f64,
}

impl fmt::Display for CodonUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ({}%)",
            self.group, self.codon, self.count, self.percentage
        )
    }
}

/// Window flagged by the CpG island detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpgIsland {
    /// 0-based start offset of the window
    pub start: usize,
    /// Exclusive end offset of the window
    pub end: usize,
    /// Fraction of C and G bases in the window (0.0 to 1.0)
    pub gc_fraction: f64,
    /// Observed over expected CG dinucleotide ratio
    pub obs_exp_ratio: f64,
}

impl fmt::Display for CpgIsland {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CpG island at {}-{}: Obs/Exp {:.2}%, GC {:.2}%",
            self.start,
            self.end,
            self.obs_exp_ratio * 100.0,
            self.gc_fraction * 100.0
        )
    }
}

/// Reading frame of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingFrame {
    /// Forward strand, starting at offset 0, 1 or 2
    Forward(u8),
    /// Reverse-complement strand, starting at offset 0, 1 or 2
    Reverse(u8),
}

impl ReadingFrame {
    /// The six frames in conventional order: +1, +2, +3, -1, -2, -3
    pub const ALL: [ReadingFrame; 6] = [
        ReadingFrame::Forward(0),
        ReadingFrame::Forward(1),
        ReadingFrame::Forward(2),
        ReadingFrame::Reverse(0),
        ReadingFrame::Reverse(1),
        ReadingFrame::Reverse(2),
    ];

    /// Offset of the first codon on the frame's strand
    pub const fn offset(self) -> usize {
        match self {
            ReadingFrame::Forward(o) | ReadingFrame::Reverse(o) => o as usize,
        }
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingFrame::Forward(o) => write!(f, "+{}", o + 1),
            ReadingFrame::Reverse(o) => write!(f, "-{}", o + 1),
        }
    }
}

/// Protein translation of one reading frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedFrame {
    pub frame: ReadingFrame,
    /// One-letter amino acids, `*` for stop, `X` for untranslatable triplets
    pub protein: String,
}

impl fmt::Display for TranslatedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}: {}", self.frame, self.protein)
    }
}

/// Error types that can occur during sequence analysis
#[derive(Error, Debug)]
pub enum BioloopError {
    /// Composition requested for a sequence without any A, C, G or T
    #[error("Sequence contains no A, C, G or T bases")]
    EmptyComposition,
    /// Codon usage found no recognizable codon
    #[error("No valid codons found")]
    NoCodonsFound,
    /// Wildcard expansion would exceed the configured pattern limit
    #[error("Motif {motif} expands to {patterns} patterns (limit {limit})")]
    PatternExplosion {
        motif: String,
        patterns: u128,
        limit: usize,
    },
    /// Motif is empty after trimming whitespace
    #[error("Motif is empty")]
    EmptyMotif,
    /// Numeric parameter outside its accepted range
    #[error("Invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        expected: &'static str,
    },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}
