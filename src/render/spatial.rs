//! Circular 3D presentation.
//!
//! Vertical lines stand on the wall of a cylinder, evenly spread by angle,
//! start cap on top. A normalized x between two columns maps to an angle
//! between theirs, so rungs become arcs and a crossing walker slides along
//! the same arc. The scene is viewed through an orbit camera and projected
//! to normalized device coordinates for painting.

use std::f32::consts::TAU;

use crate::board::{Board, HorizontalLine, Point};

/// Orbit camera around the cylinder axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Horizontal orbit angle in radians (0 = front)
    pub azimuth: f32,
    /// Vertical orbit angle in radians (positive = looking down)
    pub elevation: f32,
    /// Distance from the camera to the target point
    pub distance: f32,
    /// Target point the camera looks at [x, y, z]
    pub target: [f32; 3],
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.25,
            distance: 14.0,
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Elevation limit; beyond it the ladder flips over the pole.
pub const MAX_ELEVATION: f32 = 1.4;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 80.0;
/// Vertical field of view (radians)
pub const FOV_Y: f32 = 50.0 * std::f32::consts::PI / 180.0;
const NEAR: f32 = 0.1;

impl CameraParams {
    /// Drag-to-rotate.
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(TAU);
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Scroll-to-zoom; `factor > 1` moves away.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Camera that frames a whole cylinder.
    pub fn framing(cylinder: &Cylinder) -> Self {
        let extent = cylinder.radius.max(cylinder.height * 0.5);
        Self {
            distance: (extent * 2.6).clamp(MIN_DISTANCE, MAX_DISTANCE),
            ..Self::default()
        }
    }
}

/// Cylinder the lines are mounted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub radius: f32,
    /// Distance from the start cap to the end cap
    pub height: f32,
    pub count: usize,
}

impl Cylinder {
    /// Cylinder for `count` lines; `column_height` is the user-facing
    /// length setting.
    pub fn new(count: usize, column_height: u32) -> Self {
        Self {
            radius: (count as f32 * 0.6).max(3.0),
            height: column_height as f32 * 0.5,
            count,
        }
    }

    pub fn for_board(board: &Board, column_height: u32) -> Self {
        Self::new(board.line_count(), column_height)
    }

    /// Angle of a normalized x. Column `i` sits at `TAU * i / count`.
    pub fn angle_of(&self, x: f64) -> f32 {
        let n = self.count.max(1) as f64;
        let slot = x * (n + 1.0) - 1.0;
        (slot / n) as f32 * TAU
    }

    /// World position of a board point.
    pub fn world(&self, p: Point) -> [f32; 3] {
        let a = self.angle_of(p.x);
        [
            self.radius * a.sin(),
            (0.5 - p.y as f32) * self.height,
            self.radius * a.cos(),
        ]
    }

    /// World polyline of a rung, `segments` chords long.
    pub fn rung_arc(&self, board: &Board, rung: &HorizontalLine, segments: usize) -> Vec<[f32; 3]> {
        let (Some(a), Some(b)) = (board.line(rung.index1), board.line(rung.index2)) else {
            return Vec::new();
        };
        let segments = segments.max(1);
        (0..=segments)
            .map(|k| {
                let t = k as f64 / segments as f64;
                self.world(Point::new(a.x + (b.x - a.x) * t, rung.y))
            })
            .collect()
    }

    /// World polyline of a walker trail up to `cursor`, following arcs.
    pub fn trail(&self, points: &[Point], cursor: f64, arc_segments: usize) -> Vec<[f32; 3]> {
        let mut out = Vec::new();
        let Some(first) = points.first() else {
            return out;
        };
        out.push(self.world(*first));
        for (i, pair) in points.windows(2).enumerate() {
            let done = (cursor - i as f64).clamp(0.0, 1.0);
            if done <= 0.0 {
                break;
            }
            let steps = if pair[0].x == pair[1].x { 1 } else { arc_segments.max(1) };
            for k in 1..=steps {
                let t = k as f64 / steps as f64 * done;
                out.push(self.world(pair[0].lerp(pair[1], t)));
            }
        }
        out
    }
}

/// A world point after projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Normalized device coordinates, y up, visible range -1..1
    pub ndc: [f32; 2],
    /// Distance in front of the camera
    pub depth: f32,
}

/// Perspective-project a world point. `None` when behind the camera.
pub fn project(cam: &CameraParams, world: [f32; 3], aspect: f32) -> Option<Projected> {
    let wx = world[0] - cam.target[0];
    let wy = world[1] - cam.target[1];
    let wz = world[2] - cam.target[2];

    let (sin_az, cos_az) = cam.azimuth.sin_cos();
    let (sin_el, cos_el) = cam.elevation.sin_cos();

    // Camera rotation: azimuth (Y-axis) then elevation (X-axis)
    let rx1 = wx * cos_az - wz * sin_az;
    let ry1 = wy;
    let rz1 = wx * sin_az + wz * cos_az;

    let rx = rx1;
    let ry = ry1 * cos_el - rz1 * sin_el;
    let rz = ry1 * sin_el + rz1 * cos_el;

    // Camera sits on +z looking towards the target
    let depth = cam.distance - rz;
    if depth < NEAR {
        return None;
    }

    let tan_half = (FOV_Y * 0.5).tan();
    Some(Projected {
        ndc: [
            rx / (depth * tan_half * aspect.max(f32::EPSILON)),
            ry / (depth * tan_half),
        ],
        depth,
    })
}

/// NDC → screen pixels inside a rect given by its center and half extents.
#[inline]
pub fn ndc_to_screen(ndc: [f32; 2], center: [f32; 2], half: [f32; 2]) -> [f32; 2] {
    [center[0] + ndc[0] * half[0], center[1] - ndc[1] * half[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn columns_are_spread_around_the_circle() {
        let board = Board::from_names(&["A", "B", "C", "D"]);
        let cyl = Cylinder::for_board(&board, 10);
        for line in &board.vertical_lines {
            let expected = TAU * line.line_index as f32 / 4.0;
            assert!(close(cyl.angle_of(line.x), expected));
        }
    }

    #[test]
    fn caps_map_to_top_and_bottom() {
        let cyl = Cylinder::new(3, 20);
        let top = cyl.world(Point::new(0.25, 0.0));
        let bottom = cyl.world(Point::new(0.25, 1.0));
        assert!(close(top[1], 5.0));
        assert!(close(bottom[1], -5.0));
        // first column faces the default camera
        assert!(close(top[0], 0.0));
        assert!(close(top[2], cyl.radius));
    }

    #[test]
    fn rung_arc_stays_on_the_wall() {
        let board = Board::from_layout(&["A", "B", "C"], [(0, 2, 0.5)]).unwrap();
        let cyl = Cylinder::for_board(&board, 15);
        let arc = cyl.rung_arc(&board, &board.horizontal_lines[0], 8);
        assert_eq!(arc.len(), 9);
        for p in &arc {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!(close(r, cyl.radius));
            assert!(close(p[1], 0.0));
        }
    }

    #[test]
    fn trail_grows_with_cursor() {
        let cyl = Cylinder::new(2, 10);
        let pts = [
            Point::new(1.0 / 3.0, 0.0),
            Point::new(1.0 / 3.0, 0.5),
            Point::new(2.0 / 3.0, 0.5),
            Point::new(2.0 / 3.0, 1.0),
        ];
        assert_eq!(cyl.trail(&pts, 0.0, 4).len(), 1);
        assert_eq!(cyl.trail(&pts, 1.0, 4).len(), 2);
        assert_eq!(cyl.trail(&pts, 2.0, 4).len(), 6);
        assert_eq!(cyl.trail(&pts, 3.0, 4).len(), 7);
        assert!(cyl.trail(&[], 1.0, 4).is_empty());
    }

    #[test]
    fn target_projects_to_center() {
        let cam = CameraParams::default();
        let p = project(&cam, cam.target, 1.5).unwrap();
        assert!(close(p.ndc[0], 0.0));
        assert!(close(p.ndc[1], 0.0));
        assert!(close(p.depth, cam.distance));
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let cam = CameraParams { elevation: 0.0, ..CameraParams::default() };
        assert!(project(&cam, [0.0, 0.0, cam.distance + 1.0], 1.0).is_none());
        assert!(project(&cam, [0.0, 0.0, -5.0], 1.0).is_some());
    }

    #[test]
    fn orbiting_half_turn_swaps_near_and_far() {
        let mut cam = CameraParams { elevation: 0.0, ..CameraParams::default() };
        let front = [0.0, 0.0, 3.0];
        let near = project(&cam, front, 1.0).unwrap().depth;
        cam.orbit(std::f32::consts::PI, 0.0);
        let far = project(&cam, front, 1.0).unwrap().depth;
        assert!(far > near);
    }

    #[test]
    fn orbit_and_zoom_are_clamped() {
        let mut cam = CameraParams::default();
        cam.orbit(0.0, 10.0);
        assert!(close(cam.elevation, MAX_ELEVATION));
        cam.zoom(0.0);
        assert!(close(cam.distance, MIN_DISTANCE));
        cam.zoom(1e6);
        assert!(close(cam.distance, MAX_DISTANCE));
    }

    #[test]
    fn ndc_maps_into_rect() {
        assert_eq!(ndc_to_screen([0.0, 0.0], [100.0, 50.0], [100.0, 50.0]), [100.0, 50.0]);
        assert_eq!(ndc_to_screen([1.0, 1.0], [100.0, 50.0], [100.0, 50.0]), [200.0, 0.0]);
    }
}
