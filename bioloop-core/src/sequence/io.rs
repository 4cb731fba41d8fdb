use crate::constants::FASTA_HEADER_MARKER;
use crate::types::*;
use bio::io::fasta;
use std::io::Cursor;

/// Sequence record: identifier, optional description, sequence bytes
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Identifier given to text that carries no FASTA header
pub const UNNAMED_RECORD_ID: &str = "sequence";

/// Check whether a line is a FASTA header
pub fn is_header(line: &str) -> bool {
    line.starts_with(FASTA_HEADER_MARKER)
}

/// Iterate over the non-header lines of a FASTA-like text.
///
/// Lines are yielded as-is (no trimming), so column offsets stay meaningful.
pub fn sequence_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !is_header(line))
}

/// Join the sequence data of a FASTA-like text into one sequence.
///
/// Header lines are dropped and every remaining line is stripped of
/// surrounding whitespace before concatenation.
pub fn concatenate_sequence(text: &str) -> Vec<u8> {
    let mut seq = Vec::with_capacity(text.len());
    for line in sequence_lines(text) {
        seq.extend_from_slice(line.trim().as_bytes());
    }
    seq
}

/// Parse FASTA records from an in-memory text using rust-bio.
///
/// Text that does not start with a header is treated as a single record
/// named [`UNNAMED_RECORD_ID`], so pasted bare sequences are accepted.
pub fn read_records(text: &str) -> Result<Vec<FastaRecord>, BioloopError> {
    if !is_header(text.trim_start()) {
        let seq = concatenate_sequence(text);
        if seq.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![(UNNAMED_RECORD_ID.to_string(), None, seq)]);
    }

    let reader = fasta::Reader::new(Cursor::new(text.trim_start().as_bytes()));
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| BioloopError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_lines_skips_headers() {
        let text = ">seq1\nATCG\n\n>seq2 desc\nGCTA";
        let lines: Vec<&str> = sequence_lines(text).collect();
        assert_eq!(lines, vec!["ATCG", "", "GCTA"]);
    }

    #[test]
    fn test_concatenate_sequence() {
        let text = ">seq1\nATCG \r\nGCTA\n>seq2\nTTAA\n";
        assert_eq!(concatenate_sequence(text), b"ATCGGCTATTAA".to_vec());
    }

    #[test]
    fn test_read_records_basic() {
        let records = read_records(">test_sequence\nATCG\nGCTA\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "test_sequence");
        assert_eq!(records[0].2, b"ATCGGCTA".to_vec());
    }

    #[test]
    fn test_read_records_multiple_with_description() {
        let text = ">seq1 This is a test sequence\nATCG\n>seq2\nGCTA\n>seq3\nTTAA\n";
        let records = read_records(text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].0, "seq1");
        assert_eq!(records[0].1, Some("This is a test sequence".to_string()));
        assert_eq!(records[1].0, "seq2");
        assert_eq!(records[1].1, None);
        assert_eq!(records[2].2, b"TTAA".to_vec());
    }

    #[test]
    fn test_read_records_bare_sequence() {
        let records = read_records("ATCG\nGCTA\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, UNNAMED_RECORD_ID);
        assert_eq!(records[0].2, b"ATCGGCTA".to_vec());
    }

    #[test]
    fn test_read_records_empty() {
        assert!(read_records("").unwrap().is_empty());
        assert!(read_records("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_read_records_leading_blank_lines() {
        let records = read_records("\n\n>seq1 first\nACGT\nac\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "seq1");
        assert_eq!(records[0].1.as_deref(), Some("first"));
        assert_eq!(records[0].2, b"ACGTac".to_vec());
    }
}
