//! Flat (2D) board projection: normalized board space onto a screen rect.

use crate::board::{Board, Point};

/// Screen rectangle the board is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLayout {
    /// Top-left corner in screen pixels
    pub origin: [f32; 2],
    /// Width and height in screen pixels
    pub size: [f32; 2],
}

impl FlatLayout {
    pub fn new(origin: [f32; 2], size: [f32; 2]) -> Self {
        Self { origin, size }
    }

    /// Normalized point → screen position.
    #[inline]
    pub fn to_screen(&self, p: Point) -> [f32; 2] {
        [
            self.origin[0] + p.x as f32 * self.size[0],
            self.origin[1] + p.y as f32 * self.size[1],
        ]
    }

    /// Screen position → normalized point (may fall outside `[0,1]`).
    pub fn from_screen(&self, s: [f32; 2]) -> Point {
        let w = self.size[0].max(f32::EPSILON);
        let h = self.size[1].max(f32::EPSILON);
        Point::new(
            ((s[0] - self.origin[0]) / w) as f64,
            ((s[1] - self.origin[1]) / h) as f64,
        )
    }

    /// Line whose column is closest to `screen_x`, within half a column gap.
    pub fn nearest_line(&self, board: &Board, screen_x: f32) -> Option<usize> {
        let count = board.line_count();
        if count == 0 {
            return None;
        }
        let x = self.from_screen([screen_x, self.origin[1]]).x;
        let half_gap = 0.5 / (count + 1) as f64;
        board
            .vertical_lines
            .iter()
            .map(|line| (line.line_index, (line.x - x).abs()))
            .filter(|(_, d)| *d <= half_gap)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}
