use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use bioloop_core::BioloopAnalyzer;
use bioloop_core::config::{BioloopConfig, OutputFormat};
use bioloop_core::constants::DEFAULT_MAX_EXPANDED_PATTERNS;
use bioloop_core::output::write_report;
use bioloop_core::results::Report;
use bioloop_core::sequence::sequence_from_text;
use bioloop_core::types::BioloopError;
use bioloop_core::validate;

/// Options shared by every bioloop analysis
#[pyclass]
#[derive(Clone)]
pub struct BioloopOptions {
    #[pyo3(get, set)]
    /// Output format: "text" or "tsv"
    pub format: String,

    #[pyo3(get, set)]
    /// Largest number of patterns a wildcard motif may expand to
    pub max_expanded_patterns: usize,

    #[pyo3(get, set)]
    /// Seed for reproducible random sequences (None for fresh entropy)
    pub seed: Option<u64>,

    #[pyo3(get, set)]
    /// Suppress informational output
    pub quiet: bool,
}

impl Default for BioloopOptions {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            max_expanded_patterns: DEFAULT_MAX_EXPANDED_PATTERNS,
            seed: None,
            quiet: true,
        }
    }
}

#[pymethods]
impl BioloopOptions {
    #[new]
    #[pyo3(signature = (
        format="text",
        max_expanded_patterns=DEFAULT_MAX_EXPANDED_PATTERNS,
        seed=None,
        quiet=true
    ))]
    fn new(format: &str, max_expanded_patterns: usize, seed: Option<u64>, quiet: bool) -> Self {
        BioloopOptions {
            format: format.to_string(),
            max_expanded_patterns,
            seed,
            quiet,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "BioloopOptions(format='{}', max_expanded_patterns={}, seed={:?}, quiet={})",
            self.format, self.max_expanded_patterns, self.seed, self.quiet
        )
    }
}

/// A rendered analysis report
#[pyclass]
pub struct BioloopResult {
    #[pyo3(get)]
    /// The formatted report (text or TSV)
    pub output: String,

    #[pyo3(get)]
    /// Matches, codons, islands or frames in the report
    pub item_count: usize,
}

#[pymethods]
impl BioloopResult {
    fn __repr__(&self) -> String {
        format!(
            "BioloopResult(item_count={}, output_length={})",
            self.item_count,
            self.output.len()
        )
    }
}

fn to_py_err(e: BioloopError) -> PyErr {
    match e {
        BioloopError::IoError(_) => PyIOError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Convert BioloopOptions to an analyzer
fn analyzer_from(options: Option<BioloopOptions>) -> PyResult<BioloopAnalyzer> {
    let options = options.unwrap_or_default();

    let output_format: OutputFormat = options.format.parse().map_err(|_| {
        PyValueError::new_err("Invalid output format. Must be one of: text, tsv")
    })?;

    Ok(BioloopAnalyzer::new(BioloopConfig {
        quiet: options.quiet,
        output_format,
        max_expanded_patterns: validate::max_expanded_patterns(options.max_expanded_patterns)
            .map_err(to_py_err)?,
        seed: options.seed,
    }))
}

fn render<R: Report>(report: &R, format: OutputFormat) -> PyResult<BioloopResult> {
    let mut output = Vec::new();
    write_report(&mut output, report, format).map_err(to_py_err)?;

    let output = String::from_utf8(output)
        .map_err(|e| PyValueError::new_err(format!("UTF-8 conversion error: {}", e)))?;

    Ok(BioloopResult {
        output,
        item_count: report.len(),
    })
}

fn read_file(file_path: &str) -> PyResult<String> {
    std::fs::read_to_string(file_path)
        .map_err(|e| PyIOError::new_err(format!("Failed to read file '{}': {}", file_path, e)))
}

/// Generate a random DNA sequence
///
/// Args:
///     length (int): Number of bases, at most 10,000,000
///     options (BioloopOptions, optional): set `seed` for reproducible output
///
/// Returns:
///     str: Sequence over A, C, G, T
#[pyfunction]
#[pyo3(signature = (length, options=None))]
fn generate_sequence(length: usize, options: Option<BioloopOptions>) -> PyResult<String> {
    let length = validate::sequence_length(length).map_err(to_py_err)?;
    analyzer_from(options)?
        .generate_sequence(length)
        .map_err(to_py_err)
}

/// GC content of a sequence as a percentage
///
/// Header lines and line breaks are ignored and lower-case bases are
/// counted.
///
/// Example:
///     >>> import bioloop
///     >>> bioloop.gc_content("ATGC")
///     50.0
#[pyfunction]
fn gc_content(sequence: &str) -> PyResult<f64> {
    let seq = sequence_from_text(sequence);
    validate::has_nucleotides(&seq).map_err(to_py_err)?;
    BioloopAnalyzer::default().gc_content(&seq).map_err(to_py_err)
}

/// Search a DNA motif with `X` wildcards
///
/// Args:
///     motif (str): Motif such as "AXG"
///     text (str): Multi-line text to search
///     options (BioloopOptions, optional): Output format and expansion limit
///
/// Returns:
///     BioloopResult: One line per match, "Line N, position P: MATCH"
///
/// Example:
///     >>> import bioloop
///     >>> result = bioloop.search_dna_motif("AXG", "line1\\nATGATG")
///     >>> print(result.item_count)
///     2
#[pyfunction]
#[pyo3(signature = (motif, text, options=None))]
fn search_dna_motif(
    motif: &str,
    text: &str,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    let analyzer = analyzer_from(options)?;
    let report = analyzer.search_dna_motif(motif, text).map_err(to_py_err)?;
    render(&report, analyzer.config.output_format)
}

/// Search a protein motif with `X` wildcards
#[pyfunction]
#[pyo3(signature = (motif, text, options=None))]
fn search_protein_motif(
    motif: &str,
    text: &str,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    let analyzer = analyzer_from(options)?;
    let report = analyzer
        .search_protein_motif(motif, text)
        .map_err(to_py_err)?;
    render(&report, analyzer.config.output_format)
}

/// Search a DNA motif in a file
#[pyfunction]
#[pyo3(signature = (motif, file_path, options=None))]
fn search_dna_motif_file(
    motif: &str,
    file_path: &str,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    search_dna_motif(motif, &read_file(file_path)?, options)
}

/// Search a protein motif in a file
#[pyfunction]
#[pyo3(signature = (motif, file_path, options=None))]
fn search_protein_motif_file(
    motif: &str,
    file_path: &str,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    search_protein_motif(motif, &read_file(file_path)?, options)
}

/// Codon usage of FASTA-formatted text
///
/// Returns:
///     BioloopResult: 64 rows, "GROUP CODON: COUNT (PERCENT%)"
#[pyfunction]
#[pyo3(signature = (fasta_content, options=None))]
fn codon_usage(fasta_content: &str, options: Option<BioloopOptions>) -> PyResult<BioloopResult> {
    let analyzer = analyzer_from(options)?;
    let report = analyzer.codon_usage(fasta_content).map_err(to_py_err)?;
    render(&report, analyzer.config.output_format)
}

/// Codon usage of a FASTA file
#[pyfunction]
#[pyo3(signature = (file_path, options=None))]
fn codon_usage_file(file_path: &str, options: Option<BioloopOptions>) -> PyResult<BioloopResult> {
    codon_usage(&read_file(file_path)?, options)
}

/// Find CpG islands
///
/// Args:
///     fasta_content (str): FASTA-formatted sequence
///     search_window (int): Leading bases to scan, 1 to 5,000,000
///     search_frame (int): Width of each scored window, 200 to 10,000
///     options (BioloopOptions, optional): Output format
///
/// Raises:
///     ValueError: if a parameter is out of range
#[pyfunction]
#[pyo3(signature = (fasta_content, search_window, search_frame, options=None))]
fn cpg_islands(
    fasta_content: &str,
    search_window: usize,
    search_frame: usize,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    validate::search_window(search_window).map_err(to_py_err)?;
    validate::search_frame(search_frame).map_err(to_py_err)?;

    let analyzer = analyzer_from(options)?;
    let report = analyzer
        .cpg_islands(fasta_content, search_window, search_frame)
        .map_err(to_py_err)?;
    render(&report, analyzer.config.output_format)
}

/// Find CpG islands in a FASTA file
#[pyfunction]
#[pyo3(signature = (file_path, search_window, search_frame, options=None))]
fn cpg_islands_file(
    file_path: &str,
    search_window: usize,
    search_frame: usize,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    cpg_islands(&read_file(file_path)?, search_window, search_frame, options)
}

/// Translate all six reading frames and report GC content
#[pyfunction]
#[pyo3(signature = (sequence, options=None))]
fn six_frame_translation(
    sequence: &str,
    options: Option<BioloopOptions>,
) -> PyResult<BioloopResult> {
    let analyzer = analyzer_from(options)?;
    let report = analyzer
        .six_frame_translation(sequence)
        .map_err(to_py_err)?;
    render(&report, analyzer.config.output_format)
}

/// Bioloop - Sequence analysis toolkit
///
/// Motif search with wildcards, codon usage, CpG island detection,
/// six-frame translation and GC content.
#[pymodule]
fn bioloop(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<BioloopOptions>()?;
    m.add_class::<BioloopResult>()?;
    m.add_function(wrap_pyfunction!(generate_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(gc_content, m)?)?;
    m.add_function(wrap_pyfunction!(search_dna_motif, m)?)?;
    m.add_function(wrap_pyfunction!(search_protein_motif, m)?)?;
    m.add_function(wrap_pyfunction!(search_dna_motif_file, m)?)?;
    m.add_function(wrap_pyfunction!(search_protein_motif_file, m)?)?;
    m.add_function(wrap_pyfunction!(codon_usage, m)?)?;
    m.add_function(wrap_pyfunction!(codon_usage_file, m)?)?;
    m.add_function(wrap_pyfunction!(cpg_islands, m)?)?;
    m.add_function(wrap_pyfunction!(cpg_islands_file, m)?)?;
    m.add_function(wrap_pyfunction!(six_frame_translation, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Bioloop sequence analysis toolkit")?;

    Ok(())
}
