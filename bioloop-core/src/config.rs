use crate::constants::DEFAULT_MAX_EXPANDED_PATTERNS;

/// Output format options for analysis reports.
///
/// # Formats
///
/// - **Text**: one human-readable sentence per item, as shown to end users
/// - **Tsv**: tab-separated columns with a header row, for downstream tools
///
/// # Examples
///
/// ```rust
/// use bioloop_core::config::{BioloopConfig, OutputFormat};
///
/// let config = BioloopConfig {
///     output_format: OutputFormat::Tsv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report lines.
    #[default]
    Text,

    /// Tab-separated values with a header row.
    ///
    /// Numbers are written unrounded where the text format rounds them.
    Tsv,
}

/// Configuration settings for a [`BioloopAnalyzer`](crate::BioloopAnalyzer).
///
/// Every field has a sensible default; front ends override the ones their
/// users can set.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use bioloop_core::config::BioloopConfig;
///
/// let config = BioloopConfig::default();
/// assert!(config.seed.is_none());
/// ```
///
/// ## Reproducible sequence generation
///
/// ```rust
/// use bioloop_core::config::BioloopConfig;
///
/// let config = BioloopConfig {
///     seed: Some(42),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BioloopConfig {
    /// Suppress informational log output from the analyzer.
    ///
    /// Errors are still returned; only `info` level summaries are skipped.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Format used when reports are written with
    /// [`write_report`](crate::output::write_report).
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,

    /// Upper bound on the number of literal patterns a wildcard motif may
    /// expand to.
    ///
    /// A motif with `k` wildcards over an alphabet of size `a` expands to
    /// `a^k` patterns. Motifs above this bound fail with
    /// [`BioloopError::PatternExplosion`](crate::types::BioloopError::PatternExplosion).
    /// Values above
    /// [`MAX_EXPANDED_PATTERNS_CEILING`](crate::constants::MAX_EXPANDED_PATTERNS_CEILING)
    /// are clamped to it.
    ///
    /// **Default**: 1,048,576 (ten DNA wildcards, four protein wildcards)
    pub max_expanded_patterns: usize,

    /// Seed for random sequence generation.
    ///
    /// `None` draws from OS entropy so every call differs. `Some(seed)` makes
    /// generation reproducible.
    ///
    /// **Default**: `None`
    pub seed: Option<u64>,
}

impl Default for BioloopConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            output_format: OutputFormat::Text,
            max_expanded_patterns: DEFAULT_MAX_EXPANDED_PATTERNS,
            seed: None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "tsv" => Ok(Self::Tsv),
            other => Err(format!("Invalid output format: {other} (expected text or tsv)")),
        }
    }
}
