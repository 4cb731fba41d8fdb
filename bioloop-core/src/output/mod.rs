//! Output formatting for analysis reports.
//!
//! Every report type implements [`Report`]; [`write_report`] renders any of
//! them in the requested [`OutputFormat`].
//!
//! ## Supported Formats
//!
//! - **Text**: one human-readable line per item
//! - **TSV**: header row plus tab-separated rows, numbers unrounded
//!
//! ## Examples
//!
//! ```rust
//! use bioloop_core::{BioloopAnalyzer, config::{BioloopConfig, OutputFormat}};
//! use bioloop_core::output::write_report;
//!
//! let analyzer = BioloopAnalyzer::new(BioloopConfig::default());
//! let report = analyzer.codon_usage(">seq1\nATGATGATG")?;
//!
//! let mut tsv = Vec::new();
//! write_report(&mut tsv, &report, OutputFormat::Tsv)?;
//! assert!(String::from_utf8(tsv)?.contains("MET\tATG\t3\t100\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{BioloopError, config::OutputFormat, results::Report};
use std::io::Write;

mod formats {
    pub mod text;
    pub mod tsv;
}

use formats::{text::write_text_format, tsv::write_tsv_format};

/// Writes a report in the specified format.
///
/// # Errors
///
/// Returns [`BioloopError::IoError`] if writing fails.
pub fn write_report<W: Write, R: Report + ?Sized>(
    writer: &mut W,
    report: &R,
    format: OutputFormat,
) -> Result<(), BioloopError> {
    match format {
        OutputFormat::Text => write_text_format(writer, report),
        OutputFormat::Tsv => write_tsv_format(writer, report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::codon_usage;

    #[test]
    fn test_write_report_dispatches_on_format() {
        let report = codon_usage(">seq1\nATGATGATG").unwrap();

        let mut text = Vec::new();
        write_report(&mut text, &report, OutputFormat::Text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert_eq!(text.lines().count(), 64);
        assert!(text.contains("MET ATG: 3 (100%)\n"));
        assert!(text.starts_with("ALA GCT: 0 (0%)\n"));

        let mut tsv = Vec::new();
        write_report(&mut tsv, &report, OutputFormat::Tsv).unwrap();
        let tsv = String::from_utf8(tsv).unwrap();
        assert_eq!(tsv.lines().count(), 65);
        assert!(tsv.starts_with("amino_acid\tcodon\tcount\tpercentage\n"));
    }

    #[test]
    fn test_write_report_io_error() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let report = codon_usage("ATG").unwrap();
        let result = write_report(&mut FailingWriter, &report, OutputFormat::Text);
        assert!(matches!(result, Err(BioloopError::IoError(_))));
    }
}
