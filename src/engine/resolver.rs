//! Path resolution: follow a start line down through the rungs.
//!
//! Rungs are visited in ascending `y` (stable, so equal heights keep their
//! generation order). A rung is only considered while strictly below the
//! walker's last crossing, which means rungs sharing a height with one just
//! crossed are skipped and evaluated against the pre-crossing line only.

use crate::board::{Board, Goal, HorizontalLine, LineId, Point, VerticalLine};
use crate::error::{AmidaError, Result};
use crate::render::color::Rgba;

/// Resolved trajectory of one walker, from `y = 0` to `y = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkerPath {
    /// Origin line
    pub line_id: LineId,
    pub color: Rgba,
    /// `2 + 2 * rungs_crossed` waypoints
    pub points: Vec<Point>,
}

impl WalkerPath {
    /// Final waypoint (on the terminal line at `y = 1`).
    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or_default()
    }

    pub fn rungs_crossed(&self) -> usize {
        self.points.len().saturating_sub(2) / 2
    }

    /// Index of the line the walker lands on.
    pub fn terminal_index(&self, board: &Board) -> Option<usize> {
        board.line_at_x(self.end().x).map(|line| line.line_index)
    }
}

/// Rungs in traversal order.
fn sorted_rungs(board: &Board) -> Vec<&HorizontalLine> {
    let mut rungs: Vec<&HorizontalLine> = board.horizontal_lines.iter().collect();
    rungs.sort_by(|a, b| a.y.total_cmp(&b.y));
    rungs
}

fn walk(lines: &[VerticalLine], rungs: &[&HorizontalLine], start: usize) -> WalkerPath {
    let origin = &lines[start];
    let mut current = start;
    let mut current_y = 0.0;
    let mut points = vec![Point::new(origin.x, 0.0)];

    for rung in rungs {
        if rung.y <= current_y {
            continue;
        }
        let Some(other) = rung.other_end(current) else {
            continue;
        };
        points.push(Point::new(lines[current].x, rung.y));
        points.push(Point::new(lines[other].x, rung.y));
        current = other;
        current_y = rung.y;
    }

    points.push(Point::new(lines[current].x, 1.0));

    WalkerPath {
        line_id: origin.id,
        color: origin.color,
        points,
    }
}

/// Resolve the path taken from `start`.
///
/// Starts map one-to-one onto terminals only when rung heights are
/// distinct; two rungs at one height sharing a line can send two starts to
/// the same terminal.
pub fn resolve(board: &Board, start: usize) -> Result<WalkerPath> {
    let count = board.line_count();
    if start >= count {
        return Err(AmidaError::IndexOutOfRange { index: start, count });
    }
    let path = walk(&board.vertical_lines, &sorted_rungs(board), start);
    log::debug!(
        "resolved {}: {} rungs crossed",
        path.line_id,
        path.rungs_crossed()
    );
    Ok(path)
}

/// Resolve every start line independently, in line order.
pub fn resolve_all(board: &Board) -> Vec<WalkerPath> {
    let rungs = sorted_rungs(board);
    (0..board.line_count())
        .map(|start| walk(&board.vertical_lines, &rungs, start))
        .collect()
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub name: String,
    pub start: usize,
    pub terminal: usize,
    pub goal: Option<Goal>,
}

/// Pair every participant with the goal under the line they land on.
pub fn outcomes(board: &Board) -> Vec<Outcome> {
    resolve_all(board)
        .iter()
        .zip(&board.vertical_lines)
        .filter_map(|(path, line)| {
            let terminal = path.terminal_index(board)?;
            Some(Outcome {
                name: line.name.clone(),
                start: line.line_index,
                terminal,
                goal: board.goal(terminal),
            })
        })
        .collect()
}
