//! Line transform - the shift/merge/shift pass over a single row or column.
//!
//! A line is an ordered slice of tile values with zeros for empty cells.
//! One move applies three sub-steps in order: compact out the zeros, merge
//! adjacent equal pairs toward the packing target, compact again to close
//! the gaps merging left behind.

use tui_2048_types::Tile;

/// Apply one full shift/merge/shift pass to `line`, in place.
///
/// `toward_start` packs values toward index 0 (an Up or Left move); the
/// opposite packing is done by reversing, packing toward 0, and reversing
/// back. Returns true if any of the three sub-steps changed a cell.
pub fn shift_merge_shift(line: &mut [Tile], toward_start: bool) -> bool {
    if toward_start {
        let shifted = compact(line);
        let merged = merge_adjacent(line);
        let packed = compact(line);
        shifted || merged || packed
    } else {
        line.reverse();
        let shifted = compact(line);
        let merged = merge_adjacent(line);
        let packed = compact(line);
        line.reverse();
        shifted || merged || packed
    }
}

/// Slide every nonzero value toward index 0, preserving order.
///
/// Two-pointer, in place. The write cursor lags the read cursor exactly
/// when a zero sat in front of a nonzero value, so the lag doubles as the
/// changed flag.
fn compact(line: &mut [Tile]) -> bool {
    let mut changed = false;
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] == 0 {
            continue;
        }
        if write != read {
            line[write] = line[read];
            line[read] = 0;
            changed = true;
        }
        write += 1;
    }
    changed
}

/// Merge adjacent equal nonzero pairs in a single left-to-right pass.
///
/// The earlier index takes the sum, the later one becomes zero. A cell
/// produced by a merge is never merged again in the same pass: the scan
/// moves strictly rightward and the zeroed slot breaks the chain.
fn merge_adjacent(line: &mut [Tile]) -> bool {
    let mut changed = false;
    for i in 0..line.len().saturating_sub(1) {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] += line[i + 1];
            line[i + 1] = 0;
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_merges_toward_start() {
        let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
        assert!(shift_merge_shift(&mut line, true));
        assert_eq!(line, [4, 8, 16, 5, 3, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn packs_and_merges_toward_end() {
        let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
        assert!(shift_merge_shift(&mut line, false));
        assert_eq!(line, [0, 0, 0, 0, 0, 0, 2, 8, 16, 5, 3]);
    }

    #[test]
    fn packed_line_without_pairs_is_a_fixed_point() {
        let mut line = [2, 4, 8, 16];
        assert!(!shift_merge_shift(&mut line, true));
        assert_eq!(line, [2, 4, 8, 16]);

        let mut line = [2, 4, 8, 16];
        assert!(!shift_merge_shift(&mut line, false));
        assert_eq!(line, [2, 4, 8, 16]);
    }

    #[test]
    fn empty_line_is_a_noop() {
        let mut line: [Tile; 0] = [];
        assert!(!shift_merge_shift(&mut line, true));
        assert!(!shift_merge_shift(&mut line, false));
    }

    #[test]
    fn all_zero_line_is_a_noop() {
        let mut line = [0, 0, 0, 0];
        assert!(!shift_merge_shift(&mut line, true));
        assert_eq!(line, [0, 0, 0, 0]);
    }

    #[test]
    fn merge_only_change_still_reports_changed() {
        // Already packed, so the first compaction does not fire.
        let mut line = [2, 2, 4, 0];
        assert!(shift_merge_shift(&mut line, true));
        assert_eq!(line, [4, 4, 0, 0]);
    }

    #[test]
    fn one_merge_per_cell_per_pass() {
        // The leftmost pair wins the tie; the freshly merged 4 does not
        // merge again with the remaining 2.
        let mut line = [2, 2, 2, 0];
        assert!(shift_merge_shift(&mut line, true));
        assert_eq!(line, [4, 2, 0, 0]);

        let mut line = [0, 2, 2, 2];
        assert!(shift_merge_shift(&mut line, false));
        assert_eq!(line, [0, 0, 2, 4]);

        let mut line = [4, 4, 4, 4];
        assert!(shift_merge_shift(&mut line, true));
        assert_eq!(line, [8, 8, 0, 0]);
    }

    #[test]
    fn tile_sum_is_preserved() {
        let cases: [&[Tile]; 4] = [
            &[0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3],
            &[2, 2, 2, 2],
            &[0, 0, 4, 4],
            &[16, 0, 16, 2],
        ];
        for case in cases {
            for toward_start in [true, false] {
                let mut line = case.to_vec();
                let before: Tile = line.iter().sum();
                shift_merge_shift(&mut line, toward_start);
                let after: Tile = line.iter().sum();
                assert_eq!(before, after, "sum changed for {case:?}");
            }
        }
    }

    #[test]
    fn nonzero_order_survives_compaction() {
        let mut line = [0, 2, 0, 4, 0, 8];
        assert!(shift_merge_shift(&mut line, true));
        assert_eq!(line, [2, 4, 8, 0, 0, 0]);
    }
}
