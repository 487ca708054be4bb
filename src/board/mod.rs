//! Board data model: vertical lines, rungs, goals.
//!
//! All geometry lives in the normalized `[0,1] x [0,1]` space. `y = 0` is the
//! start cap (names), `y = 1` the end cap (goals); rungs never sit on either.

pub mod generator;
pub mod roster;

use std::fmt;

use crate::error::{AmidaError, Result};
use crate::render::color::{palette_color, Rgba};

pub use generator::{generate, BoardGenerator};
pub use roster::{parse_names, validate_roster, MIN_PARTICIPANTS};

/// Identity of a vertical line. Stable for the lifetime of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v-{}", self.0)
    }
}

/// Identity of a rung, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RungId(pub usize);

impl fmt::Display for RungId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h-{}", self.0)
    }
}

/// A coordinate in normalized board space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// One participant column.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalLine {
    pub id: LineId,
    pub line_index: usize,
    /// Horizontal position, `(line_index + 1) / (count + 1)`
    pub x: f64,
    pub name: String,
    pub color: Rgba,
}

/// A rung joining two distinct vertical lines at height `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalLine {
    pub id: RungId,
    pub index1: usize,
    pub index2: usize,
    pub y: f64,
}

impl HorizontalLine {
    /// The opposite end when entering from `index`, or `None` if the rung
    /// does not touch that line.
    #[inline]
    pub fn other_end(&self, index: usize) -> Option<usize> {
        if self.index1 == index {
            Some(self.index2)
        } else if self.index2 == index {
            Some(self.index1)
        } else {
            None
        }
    }
}

/// Outcome label shown under a terminal line. Unrelated to the rung layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Winner
    Atari,
    /// Blank
    Hazure,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::Atari => "当たり",
            Goal::Hazure => "はずれ",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete board snapshot. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub vertical_lines: Vec<VerticalLine>,
    pub horizontal_lines: Vec<HorizontalLine>,
    /// One goal per vertical line, by position
    pub goals: Vec<Goal>,
}

/// Evenly spaced column position with a margin at both edges.
#[inline]
pub fn column_x(line_index: usize, count: usize) -> f64 {
    (line_index + 1) as f64 / (count + 1) as f64
}

/// Build the vertical lines for a roster, in input order.
pub(crate) fn build_vertical_lines<S: AsRef<str>>(names: &[S]) -> Vec<VerticalLine> {
    let count = names.len();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| VerticalLine {
            id: LineId(i),
            line_index: i,
            x: column_x(i, count),
            name: name.as_ref().to_string(),
            color: palette_color(i),
        })
        .collect()
}

impl Board {
    /// Build a board from an explicit rung list `(index1, index2, y)`.
    ///
    /// Rung ids follow the order given. Goals default to [`Goal::Hazure`].
    pub fn from_layout<S, I>(names: &[S], rungs: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let count = names.len();
        let horizontal_lines = rungs
            .into_iter()
            .enumerate()
            .map(|(k, (index1, index2, y))| {
                let valid = index1 < count
                    && index2 < count
                    && index1 != index2
                    && y > 0.0
                    && y < 1.0;
                if !valid {
                    return Err(AmidaError::InvalidRung {
                        index1,
                        index2,
                        y,
                        count,
                    });
                }
                Ok(HorizontalLine {
                    id: RungId(k),
                    index1,
                    index2,
                    y,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vertical_lines: build_vertical_lines(names),
            horizontal_lines,
            goals: vec![Goal::Hazure; count],
        })
    }

    /// Board with the given columns and no rungs.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            vertical_lines: build_vertical_lines(names),
            horizontal_lines: Vec::new(),
            goals: vec![Goal::Hazure; names.len()],
        }
    }

    /// Replace the goal labels (one per line).
    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    pub fn line_count(&self) -> usize {
        self.vertical_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical_lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&VerticalLine> {
        self.vertical_lines.get(index)
    }

    /// Goal at a terminal position.
    pub fn goal(&self, index: usize) -> Option<Goal> {
        self.goals.get(index).copied()
    }

    /// Line whose column sits at `x`, if any.
    pub fn line_at_x(&self, x: f64) -> Option<&VerticalLine> {
        self.vertical_lines
            .iter()
            .find(|line| (line.x - x).abs() < 1e-9)
    }
}
