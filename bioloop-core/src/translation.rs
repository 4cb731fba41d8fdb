//! Six-frame translation with the standard genetic code.

use bio::alphabets::dna::revcomp;

use crate::codon::translate_codon;
use crate::constants::{CODON_LENGTH, UNKNOWN_AMINO_ACID};
use crate::results::TranslationReport;
use crate::sequence::gc_content;
use crate::types::{BioloopError, ReadingFrame, TranslatedFrame};

/// Translate one strand starting at `offset`.
///
/// Triplets that are not upper-case `ACGT` codons become `X`; a trailing
/// partial codon is dropped.
pub fn translate(strand: &[u8], offset: usize) -> String {
    strand
        .get(offset..)
        .unwrap_or_default()
        .chunks_exact(CODON_LENGTH)
        .map(|codon| char::from(translate_codon(codon).unwrap_or(UNKNOWN_AMINO_ACID)))
        .collect()
}

/// Translate all six reading frames of a sequence.
///
/// The sequence is used as given; callers strip headers and line breaks and
/// upper-case it first.
///
/// # Errors
///
/// Returns [`BioloopError::EmptyComposition`] if the sequence contains no
/// `A`, `C`, `G` or `T`.
///
/// # Examples
///
/// ```rust
/// use bioloop_core::translation::six_frame_translation;
///
/// let report = six_frame_translation(b"ATGGCCTAA")?;
/// assert_eq!(report.frames[0].protein, "MA*");
/// assert_eq!(report.frames[3].protein, "LGH");
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
pub fn six_frame_translation(sequence: &[u8]) -> Result<TranslationReport, BioloopError> {
    let gc_content = gc_content(sequence)?;
    let reverse = revcomp(sequence);

    let frames = ReadingFrame::ALL
        .iter()
        .map(|&frame| {
            let strand: &[u8] = match frame {
                ReadingFrame::Forward(_) => sequence,
                ReadingFrame::Reverse(_) => &reverse,
            };
            TranslatedFrame {
                frame,
                protein: translate(strand, frame.offset()),
            }
        })
        .collect();

    Ok(TranslationReport { frames, gc_content })
}
