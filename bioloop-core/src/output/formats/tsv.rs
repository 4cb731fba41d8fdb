use std::io::Write;

use crate::{BioloopError, results::Report};

/// Write a header row followed by one tab-separated row per reported item
pub fn write_tsv_format<W: Write, R: Report + ?Sized>(
    writer: &mut W,
    report: &R,
) -> Result<(), BioloopError> {
    writeln!(writer, "{}", report.tsv_header().join("\t"))?;
    for row in report.tsv_rows() {
        writeln!(writer, "{}", row.join("\t"))?;
    }
    Ok(())
}
