//! Sliding-window CpG island detection.
//!
//! A window of `frame` bases slides one base at a time over the first
//! `window` bases of a sequence. Each window is scored by its GC fraction
//! and its observed/expected CpG ratio (Gardiner-Garden and Frommer, 1987):
//!
//! ```text
//! gc      = (C + G) / frame
//! obs/exp = CG / ((C * G) / frame)      0 when C or G is 0
//! ```
//!
//! Windows with `gc >= 0.5` and `obs/exp >= 0.6` are reported.
//!
//! Counts are rolled forward as the window moves, so a scan costs
//! O(window) instead of O(window * frame). Scores are always computed from
//! the integer counts with the same expression a full rescan would use,
//! which keeps threshold decisions and rounding identical.

use crate::constants::{CPG_MIN_GC_FRACTION, CPG_MIN_OBS_EXP_RATIO};
use crate::results::CpgReport;
use crate::types::{BioloopError, CpgIsland};

/// C, G and CG-dinucleotide counts of one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WindowCounts {
    c: usize,
    g: usize,
    cg: usize,
}

impl WindowCounts {
    fn of(window: &[u8]) -> Self {
        let mut counts = Self::default();
        for (i, &base) in window.iter().enumerate() {
            match base {
                b'C' => {
                    counts.c += 1;
                    if window.get(i + 1) == Some(&b'G') {
                        counts.cg += 1;
                    }
                }
                b'G' => counts.g += 1,
                _ => {}
            }
        }
        counts
    }

    fn gc_fraction(&self, frame: usize) -> f64 {
        (self.c + self.g) as f64 / frame as f64
    }

    fn obs_exp_ratio(&self, frame: usize) -> f64 {
        if self.c == 0 || self.g == 0 {
            return 0.0;
        }
        self.cg as f64 / ((self.c * self.g) as f64 / frame as f64)
    }
}

fn is_cpg(seq: &[u8], i: usize) -> bool {
    seq[i] == b'C' && seq.get(i + 1) == Some(&b'G')
}

/// Score one window and keep it if it passes both thresholds
fn score(counts: &WindowCounts, start: usize, frame: usize) -> Option<CpgIsland> {
    let gc_fraction = counts.gc_fraction(frame);
    let obs_exp_ratio = counts.obs_exp_ratio(frame);
    (gc_fraction >= CPG_MIN_GC_FRACTION && obs_exp_ratio >= CPG_MIN_OBS_EXP_RATIO).then_some(
        CpgIsland {
            start,
            end: start + frame,
            gc_fraction,
            obs_exp_ratio,
        },
    )
}

/// Scan the first `window` bases of `sequence` for CpG islands.
///
/// Bases are matched as exact upper-case `C` and `G`. A sequence shorter
/// than `frame` (after truncation to `window`) has no windows and yields an
/// empty report.
///
/// # Errors
///
/// Returns [`BioloopError::InvalidParameter`] if `frame` or `window` is 0.
/// The tighter caller bounds live in [`validate`](crate::validate).
///
/// # Examples
///
/// ```rust
/// use bioloop_core::cpg::find_islands;
///
/// let seq = "CG".repeat(150);
/// let report = find_islands(seq.as_bytes(), 1000, 200)?;
/// assert_eq!(report.windows_scanned, 101);
/// assert_eq!(report.islands.len(), 101);
/// # Ok::<(), bioloop_core::types::BioloopError>(())
/// ```
pub fn find_islands(
    sequence: &[u8],
    window: usize,
    frame: usize,
) -> Result<CpgReport, BioloopError> {
    if frame == 0 {
        return Err(BioloopError::InvalidParameter {
            name: "search_frame",
            value: frame,
            expected: "a positive width",
        });
    }
    if window == 0 {
        return Err(BioloopError::InvalidParameter {
            name: "search_window",
            value: window,
            expected: "a positive length",
        });
    }

    let seq = &sequence[..window.min(sequence.len())];
    let mut report = CpgReport {
        search_window: window,
        search_frame: frame,
        windows_scanned: 0,
        islands: Vec::new(),
    };
    if seq.len() < frame {
        return Ok(report);
    }

    let last_start = seq.len() - frame;
    let mut counts = WindowCounts::of(&seq[..frame]);

    for start in 0..=last_start {
        if start > 0 {
            // Add the base entering on the right before dropping the one
            // leaving on the left; with a 1-base frame both touch the same pair
            let leaving = start - 1;
            let entering = start + frame - 1;
            match seq[entering] {
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                _ => {}
            }
            if is_cpg(seq, entering - 1) {
                counts.cg += 1;
            }
            match seq[leaving] {
                b'C' => counts.c -= 1,
                b'G' => counts.g -= 1,
                _ => {}
            }
            if is_cpg(seq, leaving) {
                counts.cg -= 1;
            }
        }

        if let Some(island) = score(&counts, start, frame) {
            report.islands.push(island);
        }
    }
    report.windows_scanned = last_start + 1;

    log::debug!(
        "Scored {} windows of {} bases, {} CpG islands",
        report.windows_scanned,
        frame,
        report.islands.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{create_rng, generate_sequence};

    /// Rescan every window from scratch
    fn naive_islands(sequence: &[u8], window: usize, frame: usize) -> Vec<CpgIsland> {
        let seq = &sequence[..window.min(sequence.len())];
        if seq.len() < frame {
            return Vec::new();
        }
        (0..=seq.len() - frame)
            .filter_map(|start| {
                let counts = WindowCounts::of(&seq[start..start + frame]);
                score(&counts, start, frame)
            })
            .collect()
    }

    #[test]
    fn test_all_cg_flags_every_window() {
        let seq = "CG".repeat(600);
        let report = find_islands(seq.as_bytes(), 1000, 200).unwrap();
        assert_eq!(report.windows_scanned, 801);
        assert_eq!(report.islands.len(), 801);
        for (i, island) in report.islands.iter().enumerate() {
            assert_eq!(island.start, i);
            assert_eq!(island.end, i + 200);
            assert_eq!(island.gc_fraction, 1.0);
            assert!(island.obs_exp_ratio >= 0.6);
        }
        // Even start: 100 C, 100 G, 100 CG -> 100 / (100 * 100 / 200) = 2
        assert_eq!(report.islands[0].obs_exp_ratio, 2.0);
    }

    #[test]
    fn test_all_a_flags_nothing() {
        let seq = "A".repeat(1500);
        let report = find_islands(seq.as_bytes(), 1000, 200).unwrap();
        assert_eq!(report.windows_scanned, 801);
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_gc_without_cpg_is_not_island() {
        // All C then all G: high GC but only one CG junction
        let seq = format!("{}{}", "C".repeat(100), "G".repeat(100));
        let report = find_islands(seq.as_bytes(), 1000, 200).unwrap();
        assert_eq!(report.windows_scanned, 1);
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_window_truncates_sequence() {
        let seq = format!("{}{}", "A".repeat(300), "CG".repeat(300));
        let report = find_islands(seq.as_bytes(), 300, 200).unwrap();
        assert_eq!(report.windows_scanned, 101);
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_sequence_shorter_than_frame() {
        let report = find_islands(b"CGCG", 1000, 200).unwrap();
        assert_eq!(report.windows_scanned, 0);
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_single_base_frame() {
        let report = find_islands(b"CGCG", 4, 1).unwrap();
        assert_eq!(report.windows_scanned, 4);
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_lowercase_not_counted() {
        let seq = "cg".repeat(150);
        let report = find_islands(seq.as_bytes(), 1000, 200).unwrap();
        assert!(report.islands.is_empty());
    }

    #[test]
    fn test_zero_parameters_rejected() {
        assert!(matches!(
            find_islands(b"CG", 10, 0),
            Err(BioloopError::InvalidParameter {
                name: "search_frame",
                ..
            })
        ));
        assert!(matches!(
            find_islands(b"CG", 0, 200),
            Err(BioloopError::InvalidParameter {
                name: "search_window",
                ..
            })
        ));
    }

    #[test]
    fn test_rolling_counts_match_naive_rescan() {
        let mut rng = create_rng(Some(2024));
        for frame in [200, 201, 257] {
            // Random background with a CpG-rich stretch in the middle
            let mut seq = generate_sequence(600, &mut rng);
            seq.push_str(&"CGCAGCGT".repeat(60));
            seq.push_str(&generate_sequence(600, &mut rng));

            let report = find_islands(seq.as_bytes(), 1500, frame).unwrap();
            let naive = naive_islands(seq.as_bytes(), 1500, frame);
            assert!(!naive.is_empty());
            assert_eq!(report.islands, naive);
        }
    }

    /// One window of `frame` bases: `cg` CG pairs, then extra G and C runs,
    /// padded with A. G before C adds no CG junction.
    fn window_with(cg: usize, extra_g: usize, extra_c: usize, frame: usize) -> Vec<u8> {
        let mut seq = "CG".repeat(cg);
        seq.push_str(&"G".repeat(extra_g));
        seq.push_str(&"C".repeat(extra_c));
        seq.push_str(&"A".repeat(frame - seq.len()));
        seq.into_bytes()
    }

    #[test]
    fn test_gc_threshold_is_inclusive() {
        // C = 50, G = 50, CG = 9 over 200: gc exactly 0.5, obs/exp 0.72
        let seq = window_with(9, 41, 41, 200);
        assert_eq!(WindowCounts::of(&seq), WindowCounts { c: 50, g: 50, cg: 9 });
        let report = find_islands(&seq, 200, 200).unwrap();
        assert_eq!(
            report.islands,
            vec![CpgIsland {
                start: 0,
                end: 200,
                gc_fraction: 0.5,
                obs_exp_ratio: 0.72,
            }]
        );

        // One G fewer drops gc below 0.5
        let seq = window_with(9, 40, 41, 200);
        assert!(find_islands(&seq, 200, 200).unwrap().islands.is_empty());
    }

    #[test]
    fn test_obs_exp_threshold_is_inclusive() {
        // C = 50, G = 75, CG = 9 over 250: gc 0.5, obs/exp 9 / (3750 / 250) = 0.6
        let seq = window_with(9, 66, 41, 250);
        assert_eq!(WindowCounts::of(&seq), WindowCounts { c: 50, g: 75, cg: 9 });
        let report = find_islands(&seq, 250, 250).unwrap();
        assert_eq!(report.islands.len(), 1);
        assert_eq!(report.islands[0].gc_fraction, 0.5);
        assert_eq!(report.islands[0].obs_exp_ratio, 0.6);

        // Same composition with one CG fewer: obs/exp 8 / 15
        let seq = window_with(8, 67, 42, 250);
        assert_eq!(WindowCounts::of(&seq), WindowCounts { c: 50, g: 75, cg: 8 });
        assert!(find_islands(&seq, 250, 250).unwrap().islands.is_empty());
    }

    #[test]
    fn test_window_counts_of() {
        assert_eq!(
            WindowCounts::of(b"ACGCGTTC"),
            WindowCounts { c: 3, g: 2, cg: 2 }
        );
        // A trailing C has no partner inside the window
        assert_eq!(WindowCounts::of(b"GC"), WindowCounts { c: 1, g: 1, cg: 0 });
    }

    #[test]
    fn test_find_islands_is_idempotent() {
        let seq = "CGATCGGC".repeat(100);
        assert_eq!(
            find_islands(seq.as_bytes(), 800, 200).unwrap(),
            find_islands(seq.as_bytes(), 800, 200).unwrap()
        );
    }
}
