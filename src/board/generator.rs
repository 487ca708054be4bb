//! Random board generation.
//!
//! Rungs are placed uniformly at random: two distinct lines (not necessarily
//! adjacent) and a height kept away from the start and end caps. Nothing
//! prevents two rungs from sharing a height or overlapping.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{build_vertical_lines, Board, Goal, HorizontalLine, RungId};

/// Lower bound of rung heights. Heights are drawn from the half-open
/// range `[RUNG_Y_MIN, RUNG_Y_MAX)`, so the bound itself can in principle
/// be returned; either way it stays clear of the start cap at `y = 0`.
pub const RUNG_Y_MIN: f64 = 0.1;
/// Upper bound of rung heights, never reached.
pub const RUNG_Y_MAX: f64 = 0.9;

/// Generate a board from participant names and a rung count.
///
/// With fewer than two names no rung can be placed, so the rung list is
/// empty whatever `rung_count` says.
pub fn generate<S, R>(names: &[S], rung_count: usize, rng: &mut R) -> Board
where
    S: AsRef<str>,
    R: Rng,
{
    let count = names.len();
    let vertical_lines = build_vertical_lines(names);

    let horizontal_lines = if count < 2 {
        Vec::new()
    } else {
        (0..rung_count)
            .map(|k| {
                let index1 = rng.random_range(0..count);
                let mut index2 = rng.random_range(0..count);
                while index2 == index1 {
                    index2 = rng.random_range(0..count);
                }
                HorizontalLine {
                    id: RungId(k),
                    index1,
                    index2,
                    y: rng.random_range(RUNG_Y_MIN..RUNG_Y_MAX),
                }
            })
            .collect()
    };

    let goals = (0..count)
        .map(|_| if rng.random_bool(0.5) { Goal::Atari } else { Goal::Hazure })
        .collect();

    Board {
        vertical_lines,
        horizontal_lines,
        goals,
    }
}

/// Board generator owning its random source.
pub struct BoardGenerator<R: Rng = StdRng> {
    rng: R,
}

impl BoardGenerator<StdRng> {
    /// Reproducible generator: same seed, same sequence of boards.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> BoardGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate<S: AsRef<str>>(&mut self, names: &[S], rung_count: usize) -> Board {
        let board = generate(names, rung_count, &mut self.rng);
        log::debug!(
            "generated board: {} lines, {} rungs",
            board.line_count(),
            board.horizontal_lines.len()
        );
        board
    }
}
