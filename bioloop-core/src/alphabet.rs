//! Symbol sets used for wildcard substitution.
//!
//! The alphabet is a plain selector: it only decides which symbols an `X`
//! in a motif may stand for.

use std::fmt;

use crate::constants::{AMINO_ACIDS, DNA_BASES};

/// Target alphabet of a motif search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// Nucleotides `ACGT`
    Dna,
    /// The 20 standard amino acids
    Protein,
}

impl Alphabet {
    /// Symbols substituted for a wildcard, in table order.
    #[must_use]
    pub const fn symbols(self) -> &'static [u8] {
        match self {
            Alphabet::Dna => &DNA_BASES,
            Alphabet::Protein => &AMINO_ACIDS,
        }
    }

    /// Number of symbols in the alphabet
    #[must_use]
    pub const fn size(self) -> usize {
        self.symbols().len()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Dna => f.write_str("DNA"),
            Alphabet::Protein => f.write_str("Protein"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Dna.size(), 4);
        assert_eq!(Alphabet::Protein.size(), 20);
    }

    #[test]
    fn test_dna_symbols_in_order() {
        assert_eq!(Alphabet::Dna.symbols(), b"ACGT");
    }

    #[test]
    fn test_protein_excludes_wildcard_and_ambiguity_codes() {
        for &b in b"XBZJUO*" {
            assert!(!Alphabet::Protein.symbols().contains(&b), "unexpected {}", b as char);
        }
        for &b in b"ACDEFGHIKLMNPQRSTVWY" {
            assert!(Alphabet::Protein.symbols().contains(&b));
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        for alphabet in [Alphabet::Dna, Alphabet::Protein] {
            let mut symbols = alphabet.symbols().to_vec();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), alphabet.size());
        }
    }
}
