// =============================================================================
// Alphabets
// =============================================================================

/// DNA bases in table order
pub const DNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// The 20 standard amino acids in one-letter code, alphabetical
pub const AMINO_ACIDS: [u8; 20] = [
    b'A', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'K', b'L', b'M', b'N', b'P', b'Q', b'R',
    b'S', b'T', b'V', b'W', b'Y',
];

/// Wildcard symbol accepted in motif patterns
pub const WILDCARD: u8 = b'X';

/// Marker that starts a FASTA header line
pub const FASTA_HEADER_MARKER: char = '>';

// =============================================================================
// Caller bounds
// =============================================================================

/// Maximum length accepted for sequence generation
pub const MAX_SEQUENCE_LENGTH: usize = 10_000_000;

/// Smallest accepted CpG scoring frame
pub const MIN_SEARCH_FRAME: usize = 200;

/// Largest accepted CpG scoring frame
pub const MAX_SEARCH_FRAME: usize = 10_000;

/// Largest accepted CpG search window
pub const MAX_SEARCH_WINDOW: usize = 5_000_000;

/// Default cap on the size of an expanded motif pattern set
pub const DEFAULT_MAX_EXPANDED_PATTERNS: usize = 1 << 20;

/// Hard ceiling on any configured expansion cap
pub const MAX_EXPANDED_PATTERNS_CEILING: usize = 1 << 24;

// =============================================================================
// Codons
// =============================================================================

/// Length of a codon in bases
pub const CODON_LENGTH: usize = 3;

/// Number of distinct DNA codons
pub const CODON_COUNT: usize = 64;

/// Number of synonymous codon groups (20 amino acids plus stop)
pub const SYNONYMOUS_GROUP_COUNT: usize = 21;

/// One-letter symbol used for stop codons in translations
pub const STOP_SYMBOL: u8 = b'*';

/// One-letter symbol used for untranslatable triplets
pub const UNKNOWN_AMINO_ACID: u8 = b'X';

// =============================================================================
// CpG islands
// =============================================================================

/// Minimum GC fraction of a window flagged as a CpG island
pub const CPG_MIN_GC_FRACTION: f64 = 0.5;

/// Minimum observed/expected CpG ratio of a window flagged as a CpG island
pub const CPG_MIN_OBS_EXP_RATIO: f64 = 0.6;

// =============================================================================
// Tests
// =============================================================================

/// Repeat count used to build longer fixtures in tests
pub const TEST_SEQUENCE_REPEAT_FACTOR: usize = 500;
