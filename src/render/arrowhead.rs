//! Arrowhead geometry.

use glam::DVec2;

use super::path::ArrowPath;
use crate::types::Point;

/// Isosceles triangle with its apex on the arrow's end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    pub apex: Point,
    /// Base vertex behind the apex along `angle - half_angle`.
    pub left: Point,
    /// Base vertex behind the apex along `angle + half_angle`.
    pub right: Point,
}

impl Arrowhead {
    /// Head at `apex`, pointing along `angle` (radians, screen orientation).
    ///
    /// `half_angle_deg` is the angle between each wing and the shaft, so the
    /// included angle at the tip is twice that.
    pub fn new(apex: Point, angle: f64, size: f64, half_angle_deg: f64) -> Self {
        let half = half_angle_deg.to_radians();
        let wing = |theta: f64| apex - DVec2::from_angle(theta) * size;
        Arrowhead {
            apex,
            left: wing(angle - half),
            right: wing(angle + half),
        }
    }

    /// Head oriented along the direction of travel at the end of `path`.
    ///
    /// Falls back to the chord direction when the path has no tangent (which
    /// for a zero-length path is `atan2(0, 0) = 0`).
    pub fn at_end_of(path: &ArrowPath, size: f64, half_angle_deg: f64) -> Self {
        let angle = match path.end_tangent() {
            Some(tangent) => tangent.y.atan2(tangent.x),
            None => {
                let chord = path.end() - path.start();
                chord.y.atan2(chord.x)
            }
        };
        Arrowhead::new(path.end(), angle, size, half_angle_deg)
    }

    /// Vertices in drawing order: apex, left, right.
    pub fn points(&self) -> [Point; 3] {
        [self.apex, self.left, self.right]
    }
}
