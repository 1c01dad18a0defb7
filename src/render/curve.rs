//! Curve construction: one variant per path-building algorithm.
//!
//! [`CurveShape`] is derived from an [`ArrowStyle`] once per paint and carries
//! only the parameters its algorithm needs. Custom control points take
//! precedence over the named curve style.

use enum_dispatch::enum_dispatch;

use super::path::ArrowPath;
use crate::style::{ArrowStyle, CurveStyle};
use crate::types::Point;

/// Builds the path between two endpoints.
#[enum_dispatch]
pub trait BuildPath {
    fn build(&self, start: Point, end: Point) -> ArrowPath;
}

/// A single line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Straight;

/// Quadratic with its control point at `start + (dx / 2, dy * intensity)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smooth {
    pub intensity: f64,
}

/// Cubic with control points at a quarter and three quarters of the run,
/// pushed to opposite sides of the vertical midline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SCurve {
    pub intensity: f64,
}

/// Quadratic whose control point sits off the chord midpoint, along its
/// perpendicular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub intensity: f64,
    /// Use `(dy, -dx)` instead of `(-dy, dx)` as the perpendicular.
    pub reversed: bool,
}

/// Control points given as fractions of `end - start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomBezier {
    Quadratic(Point),
    Cubic(Point, Point),
}

#[enum_dispatch(BuildPath)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveShape {
    Straight,
    Smooth,
    SCurve,
    Arc,
    CustomBezier,
}

impl CurveShape {
    /// The construction algorithm a style selects.
    pub fn from_style(style: &ArrowStyle) -> CurveShape {
        if let Some(points) = style.control_points() {
            return match points {
                [only] => CustomBezier::Quadratic(*only).into(),
                [first, second, ..] => CustomBezier::Cubic(*first, *second).into(),
                [] => Straight.into(),
            };
        }

        let intensity = style.curve_intensity;
        match style.curve_style {
            CurveStyle::Straight => Straight.into(),
            CurveStyle::Smooth => Smooth { intensity }.into(),
            CurveStyle::SCurve => SCurve { intensity }.into(),
            CurveStyle::Arc => Arc {
                intensity,
                reversed: false,
            }
            .into(),
            CurveStyle::ReversedArc => Arc {
                intensity,
                reversed: true,
            }
            .into(),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CurveShape::Straight(_) => "straight",
            CurveShape::Smooth(_) => "smooth",
            CurveShape::SCurve(_) => "s-curve",
            CurveShape::Arc(Arc { reversed: false, .. }) => "arc",
            CurveShape::Arc(Arc { reversed: true, .. }) => "reversed-arc",
            CurveShape::CustomBezier(_) => "custom",
        }
    }
}

impl BuildPath for Straight {
    fn build(&self, start: Point, end: Point) -> ArrowPath {
        ArrowPath::line(start, end)
    }
}

impl BuildPath for Smooth {
    fn build(&self, start: Point, end: Point) -> ArrowPath {
        let d = end - start;
        let ctrl = start + Point::new(d.x * 0.5, d.y * self.intensity);
        ArrowPath::quad(start, ctrl, end)
    }
}

impl BuildPath for SCurve {
    fn build(&self, start: Point, end: Point) -> ArrowPath {
        let d = end - start;
        let bend = self.intensity * 0.3;
        let ctrl1 = start + Point::new(d.x * 0.25, d.y * (0.5 + bend));
        let ctrl2 = start + Point::new(d.x * 0.75, d.y * (0.5 - bend));
        ArrowPath::cubic(start, ctrl1, ctrl2, end)
    }
}

impl BuildPath for Arc {
    fn build(&self, start: Point, end: Point) -> ArrowPath {
        let d = end - start;
        let distance = d.length();
        // No chord, no perpendicular.
        if distance <= f64::EPSILON {
            return ArrowPath::line(start, end);
        }

        let normal = if self.reversed {
            Point::new(d.y, -d.x)
        } else {
            Point::new(-d.y, d.x)
        };
        let perpendicular = normal / distance;
        let radius = distance * (0.5 + self.intensity);
        let offset = radius * self.intensity * 0.5;
        let mid = (start + end) * 0.5;
        ArrowPath::quad(start, mid + perpendicular * offset, end)
    }
}

impl BuildPath for CustomBezier {
    fn build(&self, start: Point, end: Point) -> ArrowPath {
        let d = end - start;
        let absolute = |relative: Point| start + d * relative;
        match *self {
            CustomBezier::Quadratic(ctrl) => ArrowPath::quad(start, absolute(ctrl), end),
            CustomBezier::Cubic(ctrl1, ctrl2) => {
                ArrowPath::cubic(start, absolute(ctrl1), absolute(ctrl2), end)
            }
        }
    }
}
