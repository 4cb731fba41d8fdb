use bioloop_core::BioloopAnalyzer;
use bioloop_core::config::{BioloopConfig, OutputFormat};
use bioloop_core::constants::DEFAULT_MAX_EXPANDED_PATTERNS;
use bioloop_core::output::write_report;
use bioloop_core::results::Report;
use bioloop_core::sequence::sequence_from_text;
use bioloop_core::validate;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WasmBioloopOptions {
    pub format: String,                       // "text" or "tsv"
    pub max_expanded_patterns: Option<usize>, // Wildcard expansion limit
    pub seed: Option<u64>,                    // Seed for generate_sequence
}

impl Default for WasmBioloopOptions {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            max_expanded_patterns: None,
            seed: None,
        }
    }
}

#[wasm_bindgen]
pub struct BioloopResult {
    output: String,
    item_count: usize,
}

#[wasm_bindgen]
impl BioloopResult {
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.output.clone()
    }

    /// Matches, codons, islands or frames in the report
    #[wasm_bindgen(getter)]
    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{context}: {e}"))
}

fn analyzer_from(options_js: JsValue) -> Result<BioloopAnalyzer, JsValue> {
    // Missing or malformed options fall back to defaults
    let wasm_options: WasmBioloopOptions =
        serde_wasm_bindgen::from_value(options_js).unwrap_or_default();

    let output_format: OutputFormat = wasm_options
        .format
        .parse()
        .map_err(|e: String| JsValue::from_str(&e))?;

    Ok(BioloopAnalyzer::new(BioloopConfig {
        quiet: true,
        output_format,
        max_expanded_patterns: validate::max_expanded_patterns(
            wasm_options
                .max_expanded_patterns
                .unwrap_or(DEFAULT_MAX_EXPANDED_PATTERNS),
        )
        .map_err(|e| js_error("Invalid input", e))?,
        seed: wasm_options.seed,
    }))
}

fn render<R: Report>(report: &R, format: OutputFormat) -> Result<BioloopResult, JsValue> {
    let mut output = Vec::new();
    write_report(&mut output, report, format).map_err(|e| js_error("Output error", e))?;

    Ok(BioloopResult {
        output: String::from_utf8(output).map_err(|e| js_error("UTF-8 error", e))?,
        item_count: report.len(),
    })
}

#[wasm_bindgen]
pub fn generate_sequence(length: usize, options_js: JsValue) -> Result<String, JsValue> {
    let length = validate::sequence_length(length).map_err(|e| js_error("Invalid input", e))?;
    analyzer_from(options_js)?
        .generate_sequence(length)
        .map_err(|e| js_error("Analysis error", e))
}

#[wasm_bindgen]
pub fn gc_content(sequence: &str) -> Result<f64, JsValue> {
    let seq = sequence_from_text(sequence);
    validate::has_nucleotides(&seq).map_err(|e| js_error("Invalid input", e))?;
    BioloopAnalyzer::default()
        .gc_content(&seq)
        .map_err(|e| js_error("Analysis error", e))
}

#[wasm_bindgen]
pub fn search_dna_motif(
    motif: &str,
    text: &str,
    options_js: JsValue,
) -> Result<BioloopResult, JsValue> {
    let analyzer = analyzer_from(options_js)?;
    let report = analyzer
        .search_dna_motif(motif, text)
        .map_err(|e| js_error("Analysis error", e))?;
    render(&report, analyzer.config.output_format)
}

#[wasm_bindgen]
pub fn search_protein_motif(
    motif: &str,
    text: &str,
    options_js: JsValue,
) -> Result<BioloopResult, JsValue> {
    let analyzer = analyzer_from(options_js)?;
    let report = analyzer
        .search_protein_motif(motif, text)
        .map_err(|e| js_error("Analysis error", e))?;
    render(&report, analyzer.config.output_format)
}

#[wasm_bindgen]
pub fn codon_usage(text: &str, options_js: JsValue) -> Result<BioloopResult, JsValue> {
    let analyzer = analyzer_from(options_js)?;
    let report = analyzer
        .codon_usage(text)
        .map_err(|e| js_error("Analysis error", e))?;
    render(&report, analyzer.config.output_format)
}

#[wasm_bindgen]
pub fn cpg_islands(
    text: &str,
    search_window: usize,
    search_frame: usize,
    options_js: JsValue,
) -> Result<BioloopResult, JsValue> {
    validate::search_window(search_window).map_err(|e| js_error("Invalid input", e))?;
    validate::search_frame(search_frame).map_err(|e| js_error("Invalid input", e))?;

    let analyzer = analyzer_from(options_js)?;
    let report = analyzer
        .cpg_islands(text, search_window, search_frame)
        .map_err(|e| js_error("Analysis error", e))?;
    render(&report, analyzer.config.output_format)
}

#[wasm_bindgen]
pub fn six_frame_translation(text: &str, options_js: JsValue) -> Result<BioloopResult, JsValue> {
    let analyzer = analyzer_from(options_js)?;
    let report = analyzer
        .six_frame_translation(text)
        .map_err(|e| js_error("Analysis error", e))?;
    render(&report, analyzer.config.output_format)
}
