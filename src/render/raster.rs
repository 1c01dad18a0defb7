//! Raster output through tiny-skia (feature `raster`).

use kurbo::PathSeg;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use super::path::ArrowPath;
use super::surface::{Stroke, Surface};
use crate::errors::SurfaceError;
use crate::types::{LineCap, Point, Rgba};

/// Surface backed by an RGBA pixmap.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// A transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(RasterSurface { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn skia_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

fn skia_path(path: &ArrowPath) -> Option<tiny_skia::Path> {
    let f = |v: f64| v as f32;
    let mut pb = PathBuilder::new();
    match path.segment() {
        PathSeg::Line(l) => {
            pb.move_to(f(l.p0.x), f(l.p0.y));
            pb.line_to(f(l.p1.x), f(l.p1.y));
        }
        PathSeg::Quad(q) => {
            pb.move_to(f(q.p0.x), f(q.p0.y));
            pb.quad_to(f(q.p1.x), f(q.p1.y), f(q.p2.x), f(q.p2.y));
        }
        PathSeg::Cubic(c) => {
            pb.move_to(f(c.p0.x), f(c.p0.y));
            pb.cubic_to(
                f(c.p1.x),
                f(c.p1.y),
                f(c.p2.x),
                f(c.p2.y),
                f(c.p3.x),
                f(c.p3.y),
            );
        }
    }
    pb.finish()
}

impl Surface for RasterSurface {
    fn stroke_path(&mut self, path: &ArrowPath, stroke: &Stroke) {
        // tiny-skia rejects paths with empty bounds; nothing to draw then.
        let Some(skia) = skia_path(path) else {
            return;
        };
        let pen = tiny_skia::Stroke {
            width: stroke.width as f32,
            line_cap: skia_cap(stroke.cap),
            ..tiny_skia::Stroke::default()
        };
        self.pixmap
            .stroke_path(&skia, &paint(stroke.color), &pen, Transform::identity(), None);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        let Some(skia) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &skia,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
