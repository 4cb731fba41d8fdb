use crate::alphabet::Alphabet;
use crate::constants::{MAX_EXPANDED_PATTERNS_CEILING, WILDCARD};
use crate::types::BioloopError;

const WILDCARD_CHAR: char = WILDCARD as char;

/// Trim and upper-case a motif.
///
/// Only ASCII letters change case, so the motif keeps its length.
///
/// # Errors
///
/// Returns [`BioloopError::EmptyMotif`] if nothing is left after trimming.
pub fn normalize_motif(motif: &str) -> Result<String, BioloopError> {
    let normalized = motif.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(BioloopError::EmptyMotif);
    }
    Ok(normalized)
}

/// Number of literal patterns a normalized motif expands to.
///
/// `alphabet_size ^ wildcard_count`, saturating at `u128::MAX`.
pub fn expansion_size(motif: &str, alphabet: Alphabet) -> u128 {
    let wildcards = motif.chars().filter(|&c| c == WILDCARD_CHAR).count();
    u32::try_from(wildcards)
        .ok()
        .and_then(|k| (alphabet.size() as u128).checked_pow(k))
        .unwrap_or(u128::MAX)
}

/// Expand a wildcard motif into every literal pattern it denotes.
///
/// Each `X` is an independent slot filled with every symbol of `alphabet`;
/// literal positions are never touched. Patterns come out in odometer
/// order: the rightmost wildcard varies fastest and symbols follow
/// [`Alphabet::symbols`] order, so `AXG` over DNA gives
/// `AAG, ACG, AGG, ATG`.
///
/// The result has exactly `alphabet.size() ^ k` members for `k` wildcards,
/// so work and memory grow exponentially with `k`.
///
/// # Errors
///
/// - [`BioloopError::EmptyMotif`] for a blank motif
/// - [`BioloopError::PatternExplosion`] if the set would exceed `limit`
///   (itself clamped to [`MAX_EXPANDED_PATTERNS_CEILING`]) or cannot be
///   allocated
///
/// # Examples
///
/// ```rust
/// use bioloop_core::alphabet::Alphabet;
/// use bioloop_core::motif::expand_motif;
///
/// let patterns = expand_motif(" axg ", Alphabet::Dna, 1024)?;
/// assert_eq!(patterns, ["AAG", "ACG", "AGG", "ATG"]);
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
pub fn expand_motif(
    motif: &str,
    alphabet: Alphabet,
    limit: usize,
) -> Result<Vec<String>, BioloopError> {
    let motif = normalize_motif(motif)?;
    let limit = limit.min(MAX_EXPANDED_PATTERNS_CEILING);

    let size = expansion_size(&motif, alphabet);
    if size > limit as u128 {
        return Err(BioloopError::PatternExplosion {
            motif,
            patterns: size,
            limit,
        });
    }

    let template: Vec<char> = motif.chars().collect();
    let slots: Vec<usize> = template
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == WILDCARD_CHAR)
        .map(|(i, _)| i)
        .collect();

    if slots.is_empty() {
        return Ok(vec![motif]);
    }

    let symbols = alphabet.symbols();
    let mut patterns: Vec<String> = Vec::new();
    if patterns.try_reserve_exact(size as usize).is_err() {
        return Err(BioloopError::PatternExplosion {
            motif,
            patterns: size,
            limit,
        });
    }
    let mut digits = vec![0usize; slots.len()];
    let mut current = template;

    loop {
        for (&slot, &digit) in slots.iter().zip(&digits) {
            current[slot] = char::from(symbols[digit]);
        }
        patterns.push(current.iter().collect());

        // Advance the odometer, rightmost slot first
        let mut position = digits.len();
        loop {
            if position == 0 {
                return Ok(patterns);
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < symbols.len() {
                break;
            }
            digits[position] = 0;
        }
    }
}
