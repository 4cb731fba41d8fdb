use crate::types::BioloopError;

/// Occurrences of each DNA base in a sequence.
///
/// Only exact upper-case `A`, `C`, `G` and `T` are counted; every other byte
/// (lower-case bases, `N`, whitespace) is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseCounts {
    /// Count the bases of a sequence
    pub fn from_sequence(sequence: &[u8]) -> Self {
        let mut counts = Self::default();
        for &base in sequence {
            match base {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                _ => {}
            }
        }
        counts
    }

    /// Number of recognized bases
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Number of G and C bases
    #[must_use]
    pub const fn gc(&self) -> usize {
        self.g + self.c
    }

    /// GC share of the recognized bases as a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`BioloopError::EmptyComposition`] when no base was counted.
    pub fn gc_percentage(&self) -> Result<f64, BioloopError> {
        let total = self.total();
        if total == 0 {
            return Err(BioloopError::EmptyComposition);
        }
        Ok(self.gc() as f64 / total as f64 * 100.0)
    }
}

/// Calculate the GC content of a sequence as a percentage.
///
/// Computes `(G + C) / (A + C + G + T) * 100` over exact upper-case matches.
///
/// # Errors
///
/// Returns [`BioloopError::EmptyComposition`] if the sequence holds no
/// upper-case `A`, `C`, `G` or `T`.
///
/// # Examples
///
/// ```rust
/// use bioloop_core::sequence::gc_content;
///
/// assert_eq!(gc_content(b"GCGC")?, 100.0);
/// assert_eq!(gc_content(b"AAAA")?, 0.0);
/// assert!(gc_content(b"NNNN").is_err());
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
pub fn gc_content(sequence: &[u8]) -> Result<f64, BioloopError> {
    BaseCounts::from_sequence(sequence).gc_percentage()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_counts() {
        let counts = BaseCounts::from_sequence(b"AACGTTTN");
        assert_eq!(
            counts,
            BaseCounts {
                a: 2,
                c: 1,
                g: 1,
                t: 3
            }
        );
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.gc(), 2);
    }

    #[test]
    fn test_gc_content_extremes() {
        assert_eq!(gc_content(b"AAAA").unwrap(), 0.0);
        assert_eq!(gc_content(b"GCGC").unwrap(), 100.0);
    }

    #[test]
    fn test_gc_content_matches_direct_count() {
        let seq = b"ATGCGCGATTTACGN\nGGA";
        let a = seq.iter().filter(|&&b| b == b'A').count();
        let c = seq.iter().filter(|&&b| b == b'C').count();
        let g = seq.iter().filter(|&&b| b == b'G').count();
        let t = seq.iter().filter(|&&b| b == b'T').count();
        let expected = (g + c) as f64 / (a + c + g + t) as f64 * 100.0;
        assert_eq!(gc_content(seq).unwrap(), expected);
    }

    #[test]
    fn test_gc_content_counts_exact_case_only() {
        // Lower-case bases are not counted
        assert_eq!(gc_content(b"gcgcAT").unwrap(), 0.0);
        assert_eq!(gc_content(b"atatGC").unwrap(), 100.0);
    }

    #[test]
    fn test_gc_content_empty_composition() {
        assert!(matches!(
            gc_content(b""),
            Err(BioloopError::EmptyComposition)
        ));
        assert!(matches!(
            gc_content(b"acgt"),
            Err(BioloopError::EmptyComposition)
        ));
    }

    #[test]
    fn test_gc_content_is_idempotent() {
        let seq = b"ACGTTGCAAGGCT";
        assert_eq!(gc_content(seq).unwrap(), gc_content(seq).unwrap());
    }
}
