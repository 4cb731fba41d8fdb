use crate::codon::table::{SYNONYMOUS_GROUPS, codon_index};
use crate::constants::{CODON_COUNT, CODON_LENGTH};
use crate::results::CodonUsageReport;
use crate::sequence::sequence_lines;
use crate::types::{BioloopError, CodonUsage};

/// Per-codon tallies for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonCounts {
    counts: [u64; CODON_COUNT],
    total: u64,
}

impl Default for CodonCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl CodonCounts {
    /// All 64 codons at zero
    pub const fn new() -> Self {
        Self {
            counts: [0; CODON_COUNT],
            total: 0,
        }
    }

    /// Tally the codons of one line of sequence data.
    ///
    /// The line is read in non-overlapping triplets from offset 0. A
    /// trailing fragment shorter than a codon is dropped and triplets that
    /// are not upper-case `ACGT` codons are skipped.
    pub fn add_line(&mut self, line: &[u8]) {
        for triplet in line.chunks_exact(CODON_LENGTH) {
            if let Some(idx) = codon_index(triplet) {
                self.counts[idx] += 1;
                self.total += 1;
            }
        }
    }

    /// Count of a codon; 0 for strings that are not codons
    pub fn count(&self, codon: &str) -> u64 {
        codon_index(codon.as_bytes()).map_or(0, |idx| self.counts[idx])
    }

    /// Number of codons tallied across all lines
    pub const fn total(&self) -> u64 {
        self.total
    }
}

/// Tabulate codon usage over a FASTA-like text.
///
/// Header lines (starting with `>`) are skipped. Every other line is
/// scanned on its own; codons never continue across a line break. Each
/// report row gives a codon's count and its share of *all* counted codons,
/// listed group by group in [`SYNONYMOUS_GROUPS`] order.
///
/// # Errors
///
/// Returns [`BioloopError::NoCodonsFound`] when no line holds a valid codon.
///
/// # Examples
///
/// ```rust
/// use bioloop_core::codon::codon_usage;
///
/// let report = codon_usage(">seq1\nATGATGATG")?;
/// let atg = report.usage.iter().find(|u| u.codon == "ATG").unwrap();
/// assert_eq!((atg.group, atg.count, atg.percentage), ("MET", 3, 100.0));
/// assert_eq!(report.total_codons, 3);
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
pub fn codon_usage(text: &str) -> Result<CodonUsageReport, BioloopError> {
    let mut counts = CodonCounts::new();
    for line in sequence_lines(text) {
        counts.add_line(line.as_bytes());
    }

    let total = counts.total();
    if total == 0 {
        return Err(BioloopError::NoCodonsFound);
    }
    log::debug!("Counted {total} codons");

    let usage = SYNONYMOUS_GROUPS
        .iter()
        .flat_map(|group| {
            let counts = &counts;
            group.codons.iter().map(move |&codon| {
                let count = counts.count(codon);
                CodonUsage {
                    group: group.label,
                    codon,
                    count,
                    percentage: count as f64 / total as f64 * 100.0,
                }
            })
        })
        .collect();

    Ok(CodonUsageReport {
        usage,
        total_codons: total,
    })
}
