//! Bounds checks for caller-supplied parameters.
//!
//! Front ends run these before calling the analyzer so users get a clear
//! message; [`BioloopAnalyzer`](crate::BioloopAnalyzer) runs them again.

use crate::constants::{
    MAX_EXPANDED_PATTERNS_CEILING, MAX_SEARCH_FRAME, MAX_SEARCH_WINDOW, MAX_SEQUENCE_LENGTH,
    MIN_SEARCH_FRAME,
};
use crate::sequence::BaseCounts;
use crate::types::BioloopError;

/// Generated sequences may not exceed [`MAX_SEQUENCE_LENGTH`] bases
pub fn sequence_length(length: usize) -> Result<usize, BioloopError> {
    if length > MAX_SEQUENCE_LENGTH {
        return Err(BioloopError::InvalidParameter {
            name: "sequence length",
            value: length,
            expected: "at most 10,000,000 bases",
        });
    }
    Ok(length)
}

/// CpG frames must lie in `[MIN_SEARCH_FRAME, MAX_SEARCH_FRAME]`
pub fn search_frame(frame: usize) -> Result<usize, BioloopError> {
    if !(MIN_SEARCH_FRAME..=MAX_SEARCH_FRAME).contains(&frame) {
        return Err(BioloopError::InvalidParameter {
            name: "search_frame",
            value: frame,
            expected: "between 200 and 10,000",
        });
    }
    Ok(frame)
}

/// CpG search windows must lie in `(0, MAX_SEARCH_WINDOW]`
pub fn search_window(window: usize) -> Result<usize, BioloopError> {
    if window == 0 || window > MAX_SEARCH_WINDOW {
        return Err(BioloopError::InvalidParameter {
            name: "search_window",
            value: window,
            expected: "greater than 0 and at most 5,000,000",
        });
    }
    Ok(window)
}

/// Expansion caps must lie in `(0, MAX_EXPANDED_PATTERNS_CEILING]`
pub fn max_expanded_patterns(limit: usize) -> Result<usize, BioloopError> {
    if limit == 0 || limit > MAX_EXPANDED_PATTERNS_CEILING {
        return Err(BioloopError::InvalidParameter {
            name: "max_expanded_patterns",
            value: limit,
            expected: "greater than 0 and at most 16,777,216",
        });
    }
    Ok(limit)
}

/// A sequence must contain at least one upper-case A, C, G or T
pub fn has_nucleotides(sequence: &[u8]) -> Result<(), BioloopError> {
    if BaseCounts::from_sequence(sequence).total() == 0 {
        return Err(BioloopError::EmptyComposition);
    }
    Ok(())
}
