//! Walker playback.
//!
//! Turns resolved paths into per-frame walker positions.
//! - `position_at`: pure interpolation along a waypoint list
//! - `Playback`: per-frame stepper shared by every walker of one run
//!
//! A run ends when its segment cursor reaches the last waypoint of the
//! longest path; every walker is then snapped onto its exact terminal point.

use crate::board::{LineId, Point};
use crate::engine::resolver::WalkerPath;
use crate::render::color::Rgba;

/// Smallest accepted per-frame advance; keeps every run finite.
const MIN_SPEED: f64 = 1e-4;

/// Position along `points` at `cursor` (segment index + fraction).
///
/// Clamps to the first point below zero and to the last point at or past
/// the final segment.
pub fn position_at(points: &[Point], cursor: f64) -> Point {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Point::default();
    };
    if cursor <= 0.0 || points.len() == 1 {
        return *first;
    }
    if cursor >= (points.len() - 1) as f64 {
        return *last;
    }
    let segment = cursor.floor() as usize;
    points[segment].lerp(points[segment + 1], cursor - segment as f64)
}

/// Waypoints already visited at `cursor`, ending on the walker itself.
pub fn trail(points: &[Point], cursor: f64) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let visited = if cursor <= 0.0 {
        1
    } else if cursor >= (points.len() - 1) as f64 {
        points.len()
    } else {
        cursor.floor() as usize + 1
    };
    let mut out = points[..visited].to_vec();
    let head = position_at(points, cursor);
    if out.last() != Some(&head) {
        out.push(head);
    }
    out
}

/// One walker's on-screen state for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerPos {
    pub line_id: LineId,
    pub color: Rgba,
    pub pos: Point,
}

/// Positions of every walker for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackFrame {
    pub walkers: Vec<WalkerPos>,
    /// True once every walker rests on its terminal point
    pub finished: bool,
}

/// Animation state for one run over a set of paths.
#[derive(Debug, Clone)]
pub struct Playback {
    /// Session epoch the paths belong to
    epoch: u64,
    segment: usize,
    /// Fraction of the current segment, 0.0..1.0
    progress: f64,
    speed: f64,
    finished: bool,
}

impl Playback {
    pub fn new(epoch: u64, speed: f64) -> Self {
        Self {
            epoch,
            segment: 0,
            progress: 0.0,
            speed: speed.max(MIN_SPEED),
            finished: false,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The paths this run animates have been replaced.
    pub fn is_stale(&self, current_epoch: u64) -> bool {
        self.epoch != current_epoch
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Segment index plus fraction.
    pub fn cursor(&self) -> f64 {
        self.segment as f64 + self.progress
    }

    /// Advance one frame and return the new walker positions.
    pub fn step(&mut self, paths: &[WalkerPath]) -> PlaybackFrame {
        let last_segment = longest(paths).saturating_sub(1);
        if !self.finished && self.segment < last_segment {
            self.progress += self.speed;
            if self.progress >= 1.0 {
                self.progress = 0.0;
                self.segment += 1;
            }
        }
        if self.segment >= last_segment {
            self.finished = true;
        }
        self.frame(paths)
    }

    /// Walker positions at the current cursor, without advancing.
    pub fn frame(&self, paths: &[WalkerPath]) -> PlaybackFrame {
        let cursor = self.cursor();
        let walkers = paths
            .iter()
            .map(|path| WalkerPos {
                line_id: path.line_id,
                color: path.color,
                pos: if self.finished {
                    path.end()
                } else {
                    position_at(&path.points, cursor)
                },
            })
            .collect();
        PlaybackFrame {
            walkers,
            finished: self.finished,
        }
    }
}

fn longest(paths: &[WalkerPath]) -> usize {
    paths.iter().map(|p| p.points.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::engine::resolver::{resolve, resolve_all};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn interpolates_within_a_segment() {
        let pts = [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0)];
        assert!(close(position_at(&pts, 0.5), Point::new(0.0, 0.5)));
        assert!(close(position_at(&pts, 1.25), Point::new(0.25, 1.0)));
    }

    #[test]
    fn clamps_at_both_ends() {
        let pts = [Point::new(0.2, 0.0), Point::new(0.2, 1.0)];
        assert_eq!(position_at(&pts, -3.0), pts[0]);
        assert_eq!(position_at(&pts, 1.0), pts[1]);
        assert_eq!(position_at(&pts, 42.0), pts[1]);
        assert_eq!(position_at(&[], 0.5), Point::default());
    }

    #[test]
    fn trail_ends_on_the_walker() {
        let pts = [Point::new(0.2, 0.0), Point::new(0.2, 0.5), Point::new(0.8, 0.5)];
        assert_eq!(trail(&pts, 0.0), vec![pts[0]]);
        let mid = trail(&pts, 1.5);
        assert_eq!(mid.len(), 3);
        assert!(close(mid[2], Point::new(0.5, 0.5)));
        assert_eq!(trail(&pts, 9.0), pts.to_vec());
        assert!(trail(&[], 1.0).is_empty());
    }

    #[test]
    fn single_walker_reaches_exact_terminal() {
        let board = Board::from_layout(&["A", "B"], [(0, 1, 0.5)]).unwrap();
        let paths = vec![resolve(&board, 0).unwrap()];
        let mut playback = Playback::new(0, 0.05);

        let mut last = None;
        for _ in 0..1_000 {
            let frame = playback.step(&paths);
            for w in &frame.walkers {
                assert!(w.pos.y >= 0.0 && w.pos.y <= 1.0);
            }
            if frame.finished {
                last = Some(frame);
                break;
            }
        }
        let frame = last.expect("playback should finish");
        assert_eq!(frame.walkers[0].pos, paths[0].end());
        assert!(playback.is_finished());
    }

    #[test]
    fn y_never_moves_backwards() {
        let board = Board::from_layout(&["A", "B", "C"], [(0, 1, 0.3), (1, 2, 0.6)]).unwrap();
        let paths = resolve_all(&board);
        let mut playback = Playback::new(0, 0.1);
        let mut prev: Vec<f64> = vec![0.0; paths.len()];
        loop {
            let frame = playback.step(&paths);
            for (i, w) in frame.walkers.iter().enumerate() {
                assert!(w.pos.y + 1e-12 >= prev[i]);
                prev[i] = w.pos.y;
            }
            if frame.finished {
                break;
            }
        }
        assert!(prev.iter().all(|y| *y == 1.0));
    }

    #[test]
    fn shorter_paths_rest_at_terminal() {
        let board = Board::from_layout(&["A", "B", "C"], [(0, 1, 0.3), (1, 2, 0.6)]).unwrap();
        let paths = resolve_all(&board);
        // path from C has 4 points, from A has 6
        let mut playback = Playback::new(0, 0.5);
        for _ in 0..8 {
            playback.step(&paths);
        }
        assert!(!playback.is_finished());
        let frame = playback.frame(&paths);
        assert_eq!(frame.walkers[2].pos, paths[2].end());
    }

    #[test]
    fn finished_playback_stays_put() {
        let board = Board::from_names(&["A", "B"]);
        let paths = resolve_all(&board);
        let mut playback = Playback::new(3, 1.0);
        let frame = playback.step(&paths);
        assert!(frame.finished);
        let cursor = playback.cursor();
        playback.step(&paths);
        assert_eq!(playback.cursor(), cursor);
    }

    #[test]
    fn empty_path_set_finishes_immediately() {
        let mut playback = Playback::new(0, 0.01);
        let frame = playback.step(&[]);
        assert!(frame.finished);
        assert!(frame.walkers.is_empty());
    }

    #[test]
    fn stale_after_epoch_change() {
        let playback = Playback::new(4, 0.01);
        assert!(!playback.is_stale(4));
        assert!(playback.is_stale(5));
        assert_eq!(playback.epoch(), 4);
    }
}
