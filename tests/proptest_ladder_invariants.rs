//! Property-based invariant tests for board generation and path resolution.
//!
//! 1. Generated boards are well formed (line count, rung endpoints, heights, goals).
//! 2. Same seed, same board.
//! 3. Distinct rung heights give a permutation of terminal lines.
//! 4. Path shape: alternating vertical / horizontal segments, y never decreases.
//! 5. resolve(i) equals resolve_all()[i], and repeated calls agree.
//! 6. Out-of-range start indices are rejected.
//! 7. Playback always finishes on every walker's terminal point.
//! 8. Roster parsing never yields blank names.

use std::collections::BTreeSet;

use amidakuji::board::generator::{RUNG_Y_MAX, RUNG_Y_MIN};
use amidakuji::board::{parse_names, BoardGenerator};
use amidakuji::render::animator::Playback;
use amidakuji::{resolve, resolve_all, AmidaError, Board};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

/// Line count plus rungs with pairwise distinct heights.
fn distinct_layout() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (2usize..=8)
        .prop_flat_map(|n| {
            let pair = (0..n, 1..n).prop_map(move |(a, offset)| (a, (a + offset) % n));
            (
                Just(n),
                proptest::collection::vec(pair, 0..40),
                proptest::collection::btree_set(1u32..1000, 40),
            )
        })
        .prop_map(|(n, pairs, heights)| {
            let rungs = pairs
                .into_iter()
                .zip(heights)
                .map(|((a, b), h)| (a, b, f64::from(h) / 1000.0))
                .collect();
            (n, rungs)
        })
}

fn terminals(board: &Board) -> Vec<usize> {
    resolve_all(board)
        .iter()
        .filter_map(|p| p.terminal_index(board))
        .collect()
}

fn has_shared_height(board: &Board) -> bool {
    let mut ys: Vec<f64> = board.horizontal_lines.iter().map(|r| r.y).collect();
    ys.sort_by(f64::total_cmp);
    ys.windows(2).any(|w| w[0] == w[1])
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Generated boards are well formed
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generated_board_is_well_formed(n in 0usize..10, rungs in 0usize..60, seed in any::<u64>()) {
        let board = BoardGenerator::seeded(seed).generate(&names(n), rungs);

        prop_assert_eq!(board.line_count(), n);
        prop_assert_eq!(board.goals.len(), n);
        let expected = if n < 2 { 0 } else { rungs };
        prop_assert_eq!(board.horizontal_lines.len(), expected);

        for (i, line) in board.vertical_lines.iter().enumerate() {
            prop_assert_eq!(line.line_index, i);
            prop_assert!(line.x > 0.0 && line.x < 1.0);
        }
        for rung in &board.horizontal_lines {
            prop_assert!(rung.index1 < n && rung.index2 < n);
            prop_assert_ne!(rung.index1, rung.index2);
            prop_assert!(rung.y >= RUNG_Y_MIN && rung.y < RUNG_Y_MAX, "y = {}", rung.y);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism under a fixed seed
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_seed_same_board(n in 2usize..8, rungs in 0usize..30, seed in any::<u64>()) {
        let a = BoardGenerator::seeded(seed).generate(&names(n), rungs);
        let b = BoardGenerator::seeded(seed).generate(&names(n), rungs);
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Permutation of terminals
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn distinct_heights_permute_lines((n, rungs) in distinct_layout()) {
        let board = Board::from_layout(&names(n), rungs).unwrap();
        let ends = terminals(&board);
        prop_assert_eq!(ends.len(), n);
        let unique: BTreeSet<usize> = ends.iter().copied().collect();
        prop_assert_eq!(unique.len(), n, "terminals {:?}", ends);
    }

    #[test]
    fn generated_boards_permute_lines(n in 2usize..8, rungs in 0usize..40, seed in any::<u64>()) {
        let board = BoardGenerator::seeded(seed).generate(&names(n), rungs);
        prop_assume!(!has_shared_height(&board));
        let unique: BTreeSet<usize> = terminals(&board).into_iter().collect();
        prop_assert_eq!(unique.len(), n);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Path shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn path_alternates_vertical_and_horizontal((n, rungs) in distinct_layout()) {
        let board = Board::from_layout(&names(n), rungs).unwrap();
        for (start, path) in resolve_all(&board).iter().enumerate() {
            let pts = &path.points;
            prop_assert!(pts.len() >= 2);
            prop_assert_eq!(pts.len() % 2, 0);
            prop_assert_eq!(pts[0].x, board.vertical_lines[start].x);
            prop_assert_eq!(pts[0].y, 0.0);
            prop_assert_eq!(pts[pts.len() - 1].y, 1.0);

            for (k, seg) in pts.windows(2).enumerate() {
                prop_assert!(seg[1].y >= seg[0].y);
                if k % 2 == 0 {
                    prop_assert_eq!(seg[0].x, seg[1].x, "segment {} not vertical", k);
                } else {
                    prop_assert_eq!(seg[0].y, seg[1].y, "segment {} not horizontal", k);
                    prop_assert_ne!(seg[0].x, seg[1].x);
                }
            }
            prop_assert!(path.rungs_crossed() <= board.horizontal_lines.len());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Single resolution agrees with the batch
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_matches_resolve_all(n in 2usize..8, rungs in 0usize..40, seed in any::<u64>()) {
        let board = BoardGenerator::seeded(seed).generate(&names(n), rungs);
        let all = resolve_all(&board);
        for (i, expected) in all.iter().enumerate() {
            let once = resolve(&board, i).unwrap();
            let twice = resolve(&board, i).unwrap();
            prop_assert_eq!(&once, expected);
            prop_assert_eq!(once, twice);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Out-of-range start
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_start_is_rejected(n in 0usize..8, extra in 0usize..100) {
        let board = Board::from_names(&names(n));
        let index = n + extra;
        prop_assert_eq!(
            resolve(&board, index),
            Err(AmidaError::IndexOutOfRange { index, count: n })
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Playback terminates on the terminal points
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn playback_finishes_on_terminals(
        (n, rungs) in distinct_layout(),
        speed in 0.05f64..1.0,
    ) {
        let board = Board::from_layout(&names(n), rungs).unwrap();
        let paths = resolve_all(&board);
        let longest = paths.iter().map(|p| p.points.len()).max().unwrap_or(0);
        let steps_per_segment = (1.0 / speed).ceil() as usize + 1;
        let bound = longest * steps_per_segment + 2;

        let mut playback = Playback::new(0, speed);
        let mut frame = playback.step(&paths);
        for _ in 0..bound {
            if frame.finished {
                break;
            }
            frame = playback.step(&paths);
        }
        prop_assert!(frame.finished, "not finished after {} steps", bound);
        for (walker, path) in frame.walkers.iter().zip(&paths) {
            prop_assert_eq!(walker.pos, path.end());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Roster parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parsed_names_are_trimmed_and_non_empty(input in "[ a-zA-Zあ-ん\\n\\t]{0,80}") {
        for name in parse_names(&input) {
            prop_assert!(!name.is_empty());
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }
}
