use crate::game_logic::constants::{
    KART_RADIUS, TRACK_POINTS, TRACK_RADIUS_X, TRACK_RADIUS_Z, TRACK_WIDTH,
};
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_4, TAU};

/// Distance in the horizontal plane, ignoring elevation.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

// Elevation profile: three sinusoids of the path angle, each term clamped
// to ground level so the loop never dips below y = 0.
fn elevation(theta: f32) -> f32 {
    (1.5 * (2.0 * theta).sin()).max(0.0)
        + (1.0 * (3.0 * theta + 0.8).sin()).max(0.0)
        + (0.75 * (5.0 * theta + 2.1).sin()).max(0.0)
}

/// Closed-loop track geometry: the centerline points with elevation plus the
/// inner/outer wall offset points, generated once at race setup and queried
/// by the simulation every frame.
///
/// Index arithmetic wraps; point N-1 connects back to point 0.
#[derive(Resource, Clone)]
pub struct TrackModel {
    centerline: Vec<Vec3>,
    inner: Vec<Vec3>,
    outer: Vec<Vec3>,
}

impl TrackModel {
    /// Reference configuration: TRACK_POINTS points on a horizontal ellipse.
    /// Index 0 sits at (0, rz) where the racing direction is +x, matching
    /// the starting-grid heading of pi/2.
    pub fn new() -> Self {
        let mut centerline = Vec::with_capacity(TRACK_POINTS);
        for i in 0..TRACK_POINTS {
            let theta = TAU * i as f32 / TRACK_POINTS as f32;
            centerline.push(Vec3::new(
                TRACK_RADIUS_X * theta.sin(),
                elevation(theta),
                TRACK_RADIUS_Z * theta.cos(),
            ));
        }
        Self::from_centerline(centerline)
    }

    fn from_centerline(centerline: Vec<Vec3>) -> Self {
        assert!(!centerline.is_empty(), "track centerline must be non-empty");

        let n = centerline.len();
        let half = TRACK_WIDTH / 2.0;
        let mut inner = Vec::with_capacity(n);
        let mut outer = Vec::with_capacity(n);
        for i in 0..n {
            let p = centerline[i];
            let next = centerline[(i + 1) % n];
            let perp = perpendicular(p, next);
            inner.push(p - perp * half);
            outer.push(p + perp * half);
        }

        Self {
            centerline,
            inner,
            outer,
        }
    }

    pub fn len(&self) -> usize {
        self.centerline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centerline.is_empty()
    }

    /// Centerline point by index, wrapping around the loop.
    pub fn point(&self, index: usize) -> Vec3 {
        self.centerline[index % self.centerline.len()]
    }

    pub fn centerline(&self) -> &[Vec3] {
        &self.centerline
    }

    pub fn inner_boundary(&self) -> &[Vec3] {
        &self.inner
    }

    pub fn outer_boundary(&self) -> &[Vec3] {
        &self.outer
    }

    fn nearest(&self, x: f32, z: f32) -> usize {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, p) in self.centerline.iter().enumerate() {
            let d = Vec2::new(p.x - x, p.z - z).length();
            // strict comparison keeps the lowest index on ties
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        best
    }

    /// Index of the nearest centerline point and the one after it.
    pub fn nearest_index(&self, x: f32, z: f32) -> (usize, usize) {
        let i = self.nearest(x, z);
        (i, (i + 1) % self.centerline.len())
    }

    /// Track surface elevation at a horizontal position. Nearest-neighbor
    /// lookup, no interpolation between centerline points.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        self.centerline[self.nearest(x, z)].y
    }

    /// Bank angle under a kart facing `heading`: samples the surface one
    /// unit to each side and banks toward the higher one. Pitch stays 0,
    /// karts never tilt along the direction of travel. Returns
    /// (pitch, roll), roll clamped to a quarter-pi each way.
    pub fn slope_at(&self, x: f32, z: f32, heading: f32) -> (f32, f32) {
        let (sin, cos) = heading.sin_cos();
        let left_h = self.height_at(x + cos, z - sin);
        let right_h = self.height_at(x - cos, z + sin);
        let roll = (right_h - left_h).atan2(2.0).clamp(-FRAC_PI_4, FRAC_PI_4);
        (0.0, roll)
    }

    /// Whether a kart center is on the track. The centerline distance is
    /// point-to-point against the nearest centerline point, and the wall
    /// checks compare against the nearest boundary points rather than the
    /// wall segments, so the test gets coarser near sharp curvature.
    pub fn is_within_bounds(&self, x: f32, z: f32) -> bool {
        let i = self.nearest(x, z);
        let here = Vec3::new(x, 0.0, z);
        let half = TRACK_WIDTH / 2.0;

        horizontal_distance(here, self.centerline[i]) <= half - KART_RADIUS
            && horizontal_distance(here, self.inner[i]) > KART_RADIUS
            && horizontal_distance(here, self.outer[i]) > KART_RADIUS
    }
}

impl Default for TrackModel {
    fn default() -> Self {
        Self::new()
    }
}

// Horizontal unit perpendicular of the segment from `p` toward `next`;
// degenerate segments collapse to zero instead of propagating NaN.
fn perpendicular(p: Vec3, next: Vec3) -> Vec3 {
    let dir = Vec3::new(next.x - p.x, 0.0, next.z - p.z).normalize_or_zero();
    Vec3::new(-dir.z, 0.0, dir.x)
}
