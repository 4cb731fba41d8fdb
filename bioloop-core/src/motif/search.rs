use std::collections::{BTreeMap, HashSet};

use crate::types::MatchRecord;

/// Find every occurrence of any pattern in a multi-line text.
///
/// Each line is searched on its own, so matches never span a line break.
/// Lines are numbered from 1 and every line counts, blank ones included.
/// Overlapping occurrences are all reported.
///
/// Records come out ordered by line, then by offset; patterns of different
/// lengths starting at the same offset are ordered shortest first. The text
/// is scanned once per distinct pattern length, independent of the number
/// of patterns.
///
/// # Examples
///
/// ```rust
/// use bioloop_core::motif::search_patterns;
/// use bioloop_core::types::MatchRecord;
///
/// let matches = search_patterns(&["ATG".to_string()], "line1\nATGATG\n");
/// assert_eq!(
///     matches,
///     vec![MatchRecord::new(2, 0, "ATG"), MatchRecord::new(2, 3, "ATG")]
/// );
/// ```
pub fn search_patterns<S: AsRef<str>>(patterns: &[S], text: &str) -> Vec<MatchRecord> {
    let mut by_length: BTreeMap<usize, HashSet<&[u8]>> = BTreeMap::new();
    for pattern in patterns {
        let bytes = pattern.as_ref().as_bytes();
        if !bytes.is_empty() {
            by_length.entry(bytes.len()).or_default().insert(bytes);
        }
    }

    let mut matches = Vec::new();
    if by_length.is_empty() {
        return matches;
    }

    for (index, line) in text.lines().enumerate() {
        let bytes = line.as_bytes();
        for offset in 0..bytes.len() {
            for (&length, set) in &by_length {
                let Some(window) = bytes.get(offset..offset + length) else {
                    break;
                };
                if let Some(&hit) = set.get(window) {
                    matches.push(MatchRecord {
                        line: index + 1,
                        offset,
                        text: String::from_utf8_lossy(hit).into_owned(),
                    });
                }
            }
        }
    }

    matches
}
