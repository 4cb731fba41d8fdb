use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::DNA_BASES;

/// Create a random number generator, optionally seeded for reproducibility.
///
/// `None` seeds from OS entropy, so each generator yields a different
/// sequence.
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a random DNA sequence.
///
/// Each of the `length` bases is drawn independently and uniformly from
/// `ACGT`. The caller bounds `length`.
pub fn generate_sequence<R: Rng>(length: usize, rng: &mut R) -> String {
    let mut seq = String::with_capacity(length);
    for _ in 0..length {
        seq.push(char::from(DNA_BASES[rng.random_range(0..DNA_BASES.len())]));
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sequence_length_and_alphabet() {
        let mut rng = create_rng(Some(42));
        for length in [0, 1, 3, 100, 10_000] {
            let seq = generate_sequence(length, &mut rng);
            assert_eq!(seq.len(), length);
            assert!(seq.bytes().all(|b| DNA_BASES.contains(&b)));
        }
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let seq1 = generate_sequence(500, &mut create_rng(Some(42)));
        let seq2 = generate_sequence(500, &mut create_rng(Some(42)));
        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_different_seeds_different_sequences() {
        let seq1 = generate_sequence(500, &mut create_rng(Some(42)));
        let seq2 = generate_sequence(500, &mut create_rng(Some(43)));
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_generation_uses_all_bases() {
        let seq = generate_sequence(4_000, &mut create_rng(Some(1)));
        for base in DNA_BASES {
            let count = seq.bytes().filter(|&b| b == base).count();
            // Expected 1000 each; loose bound to stay seed independent
            assert!(count > 800 && count < 1200, "{} seen {count}", base as char);
        }
    }

    #[test]
    fn test_unseeded_rng_works() {
        let seq = generate_sequence(10, &mut create_rng(None));
        assert_eq!(seq.len(), 10);
    }
}
