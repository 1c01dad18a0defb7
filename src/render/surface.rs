//! Drawing surfaces.
//!
//! The engine only needs two primitives from its host: stroke a path and
//! fill a polygon. [`RecordingSurface`] keeps the calls as data, which is
//! what tests and retained-scene hosts want.

use super::path::ArrowPath;
use crate::types::{LineCap, Point, Rgba};

/// Pen used for the shaft (or each dash of it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    pub cap: LineCap,
}

/// Host drawing surface.
pub trait Surface {
    fn stroke_path(&mut self, path: &ArrowPath, stroke: &Stroke);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Stroke { path: ArrowPath, stroke: Stroke },
    Fill { points: Vec<Point>, color: Rgba },
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroked paths, in call order.
    pub fn strokes(&self) -> impl Iterator<Item = (&ArrowPath, &Stroke)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Stroke { path, stroke } => Some((path, stroke)),
            DrawOp::Fill { .. } => None,
        })
    }

    /// Filled polygons, in call order.
    pub fn fills(&self) -> impl Iterator<Item = (&[Point], Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill { points, color } => Some((points.as_slice(), *color)),
            DrawOp::Stroke { .. } => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn stroke_path(&mut self, path: &ArrowPath, stroke: &Stroke) {
        self.ops.push(DrawOp::Stroke {
            path: *path,
            stroke: *stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.ops.push(DrawOp::Fill {
            points: points.to_vec(),
            color,
        });
    }
}
