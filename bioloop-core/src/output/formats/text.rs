use std::io::Write;

use crate::{BioloopError, results::Report};

/// Write one human-readable line per reported item
pub fn write_text_format<W: Write, R: Report + ?Sized>(
    writer: &mut W,
    report: &R,
) -> Result<(), BioloopError> {
    for line in report.lines() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
