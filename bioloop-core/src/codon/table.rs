//! Standard genetic code as synonymous codon groups.
//!
//! Every table here is `const` and built at compile time; there is no write
//! path.

use crate::constants::{CODON_COUNT, CODON_LENGTH, STOP_SYMBOL, SYNONYMOUS_GROUP_COUNT};

/// Codons encoding the same amino acid (or stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymousGroup {
    /// Three-letter upper-case label, `STOP` for the stop group
    pub label: &'static str,
    /// One-letter symbol, `*` for the stop group
    pub symbol: u8,
    /// Member codons in report order
    pub codons: &'static [&'static str],
}

const fn group(
    label: &'static str,
    symbol: u8,
    codons: &'static [&'static str],
) -> SynonymousGroup {
    SynonymousGroup {
        label,
        symbol,
        codons,
    }
}

/// The 21 synonymous groups of the standard code, in report order.
pub const SYNONYMOUS_GROUPS: [SynonymousGroup; SYNONYMOUS_GROUP_COUNT] = [
    group("ALA", b'A', &["GCT", "GCC", "GCA", "GCG"]),
    group("ARG", b'R', &["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"]),
    group("ASN", b'N', &["AAT", "AAC"]),
    group("ASP", b'D', &["GAT", "GAC"]),
    group("CYS", b'C', &["TGT", "TGC"]),
    group("GLN", b'Q', &["CAA", "CAG"]),
    group("GLU", b'E', &["GAA", "GAG"]),
    group("GLY", b'G', &["GGT", "GGC", "GGA", "GGG"]),
    group("HIS", b'H', &["CAT", "CAC"]),
    group("ILE", b'I', &["ATT", "ATC", "ATA"]),
    group("LEU", b'L', &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"]),
    group("LYS", b'K', &["AAA", "AAG"]),
    group("MET", b'M', &["ATG"]),
    group("PHE", b'F', &["TTT", "TTC"]),
    group("PRO", b'P', &["CCT", "CCC", "CCA", "CCG"]),
    group("SER", b'S', &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"]),
    group("THR", b'T', &["ACT", "ACC", "ACA", "ACG"]),
    group("TRP", b'W', &["TGG"]),
    group("TYR", b'Y', &["TAT", "TAC"]),
    group("VAL", b'V', &["GTT", "GTC", "GTA", "GTG"]),
    group("STOP", STOP_SYMBOL, &["TAA", "TAG", "TGA"]),
];

const fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Index in `[0, 64)` of an upper-case DNA codon.
///
/// Matching is case-sensitive: lower-case bases, `U`, `N` and anything else
/// yield `None`, as does a slice that is not exactly three bytes long.
pub const fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != CODON_LENGTH {
        return None;
    }
    match (
        base_index(codon[0]),
        base_index(codon[1]),
        base_index(codon[2]),
    ) {
        (Some(b1), Some(b2), Some(b3)) => Some(b1 * 16 + b2 * 4 + b3),
        _ => None,
    }
}

const fn build_group_index() -> [usize; CODON_COUNT] {
    let mut table = [usize::MAX; CODON_COUNT];
    let mut g = 0;
    while g < SYNONYMOUS_GROUPS.len() {
        let codons = SYNONYMOUS_GROUPS[g].codons;
        let mut c = 0;
        while c < codons.len() {
            match codon_index(codons[c].as_bytes()) {
                Some(idx) => {
                    assert!(table[idx] == usize::MAX, "codon listed twice");
                    table[idx] = g;
                }
                None => panic!("invalid codon in group table"),
            }
            c += 1;
        }
        g += 1;
    }
    let mut i = 0;
    while i < CODON_COUNT {
        assert!(table[i] != usize::MAX, "codon missing from group table");
        i += 1;
    }
    table
}

/// Synonymous group (index into [`SYNONYMOUS_GROUPS`]) of every codon index.
///
/// Built at compile time; a codon listed twice or left out fails the build.
pub const GROUP_OF_CODON: [usize; CODON_COUNT] = build_group_index();

const fn build_standard_code() -> [u8; CODON_COUNT] {
    let mut code = [0u8; CODON_COUNT];
    let mut i = 0;
    while i < CODON_COUNT {
        code[i] = SYNONYMOUS_GROUPS[GROUP_OF_CODON[i]].symbol;
        i += 1;
    }
    code
}

/// One-letter translation of every codon index under the standard code.
pub const STANDARD_CODE: [u8; CODON_COUNT] = build_standard_code();

/// Translate a codon to its one-letter amino acid (`*` for stop).
pub const fn translate_codon(codon: &[u8]) -> Option<u8> {
    match codon_index(codon) {
        Some(idx) => Some(STANDARD_CODE[idx]),
        None => None,
    }
}
