//! Single-segment arrow paths.
//!
//! Every curve style produces exactly one line, quadratic or cubic segment,
//! so [`ArrowPath`] is a thin wrapper over [`kurbo::PathSeg`] that speaks in
//! glam points and adds the queries the stroker needs: arc length, arc-length
//! sub-paths and the direction of travel at the end.

use std::ops::Range;

use glam::DVec2;
use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, PathSeg, QuadBez};

use super::defaults;
use crate::types::Point;

#[inline]
fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

#[inline]
fn from_kurbo(p: kurbo::Point) -> Point {
    DVec2::new(p.x, p.y)
}

/// One path segment from an arrow's start to its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPath(PathSeg);

impl ArrowPath {
    pub fn line(start: Point, end: Point) -> Self {
        ArrowPath(PathSeg::Line(Line::new(to_kurbo(start), to_kurbo(end))))
    }

    pub fn quad(start: Point, ctrl: Point, end: Point) -> Self {
        ArrowPath(PathSeg::Quad(QuadBez::new(
            to_kurbo(start),
            to_kurbo(ctrl),
            to_kurbo(end),
        )))
    }

    pub fn cubic(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        ArrowPath(PathSeg::Cubic(CubicBez::new(
            to_kurbo(start),
            to_kurbo(ctrl1),
            to_kurbo(ctrl2),
            to_kurbo(end),
        )))
    }

    /// The underlying kurbo segment.
    pub fn segment(&self) -> PathSeg {
        self.0
    }

    pub fn start(&self) -> Point {
        from_kurbo(self.0.start())
    }

    pub fn end(&self) -> Point {
        from_kurbo(self.0.end())
    }

    /// Point at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        from_kurbo(self.0.eval(t))
    }

    /// Endpoints and control points, in path order.
    pub fn points(&self) -> Vec<Point> {
        match self.0 {
            PathSeg::Line(l) => vec![from_kurbo(l.p0), from_kurbo(l.p1)],
            PathSeg::Quad(q) => vec![from_kurbo(q.p0), from_kurbo(q.p1), from_kurbo(q.p2)],
            PathSeg::Cubic(c) => vec![
                from_kurbo(c.p0),
                from_kurbo(c.p1),
                from_kurbo(c.p2),
                from_kurbo(c.p3),
            ],
        }
    }

    /// Control points only (empty for a line).
    pub fn control_points(&self) -> Vec<Point> {
        let points = self.points();
        points[1..points.len() - 1].to_vec()
    }

    /// Total arc length; 0 when every point coincides.
    pub fn length(&self) -> f64 {
        let start = self.start();
        if self.points().iter().all(|p| *p == start) {
            // kurbo's closed-form quadratic length is NaN here
            return 0.0;
        }
        let length = self.0.arclen(defaults::ARCLEN_ACCURACY);
        if length.is_finite() { length } else { 0.0 }
    }

    /// The part of the path between two arc-length offsets from the start.
    ///
    /// Offsets are clamped to `[0, length]`.
    pub fn subpath(&self, range: Range<f64>) -> ArrowPath {
        let total = self.length();
        if total.is_nan() || total <= 0.0 {
            return *self;
        }
        let t_at = |s: f64| {
            let s = s.clamp(0.0, total);
            match self.0 {
                _ if s >= total => 1.0,
                // arc length is linear in t
                PathSeg::Line(_) => s / total,
                seg => seg.inv_arclen(s, defaults::ARCLEN_ACCURACY),
            }
        };
        ArrowPath(self.0.subsegment(t_at(range.start)..t_at(range.end)))
    }

    /// Unit direction of travel at the end point.
    ///
    /// When the last control point coincides with the end the derivative
    /// vanishes there, so the nearest distinct earlier point gives the limit
    /// direction instead. `None` if every point coincides with the end.
    pub fn end_tangent(&self) -> Option<DVec2> {
        let points = self.points();
        let (end, rest) = points.split_last()?;
        rest.iter()
            .rev()
            .find_map(|p| (*end - *p).try_normalize())
    }
}
