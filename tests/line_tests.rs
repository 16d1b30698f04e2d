//! Line transform tests - known-answer cases the engine must match exactly.

use tui_2048::core::shift_merge_shift;
use tui_2048::types::Tile;

#[test]
fn long_line_packs_and_merges_toward_start() {
    let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
    let changed = shift_merge_shift(&mut line, true);
    assert!(changed);
    assert_eq!(line, [4, 8, 16, 5, 3, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn long_line_packs_and_merges_toward_end() {
    let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
    let changed = shift_merge_shift(&mut line, false);
    assert!(changed);
    assert_eq!(line, [0, 0, 0, 0, 0, 0, 2, 8, 16, 5, 3]);
}

#[test]
fn packed_pairless_lines_report_no_change() {
    for toward_start in [true, false] {
        let mut line = [2, 4, 2, 4];
        assert!(!shift_merge_shift(&mut line, toward_start));
        assert_eq!(line, [2, 4, 2, 4]);
    }
}

#[test]
fn sum_never_decreases() {
    let cases: [&[Tile]; 5] = [
        &[0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3],
        &[2, 2, 2, 2],
        &[0, 0, 0, 0],
        &[1024, 1024, 2, 2],
        &[2],
    ];
    for case in cases {
        for toward_start in [true, false] {
            let mut line = case.to_vec();
            let before: Tile = line.iter().sum();
            shift_merge_shift(&mut line, toward_start);
            let after: Tile = line.iter().sum();
            assert_eq!(before, after);
        }
    }
}

#[test]
fn merge_tie_break_favors_the_packing_target() {
    // Toward the start the leftmost pair merges; toward the end the
    // rightmost pair does.
    let mut line = [2, 2, 2, 0];
    assert!(shift_merge_shift(&mut line, true));
    assert_eq!(line, [4, 2, 0, 0]);

    let mut line = [2, 2, 2, 0];
    assert!(shift_merge_shift(&mut line, false));
    assert_eq!(line, [0, 0, 2, 4]);
}
