//! SVG output: a [`Surface`] that serializes its calls into an SVG document.

use kurbo::PathSeg;

use super::path::ArrowPath;
use super::surface::{Stroke, Surface};
use crate::types::{Point, Rgba};

/// Surface that accumulates `<path>` and `<polygon>` elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        SvgSurface {
            width,
            height,
            body: String::new(),
        }
    }

    /// The elements drawn so far, one per line, without the `<svg>` wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Close the document.
    pub fn finish(self) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n{}</svg>\n",
            self.body
        )
    }
}

impl Surface for SvgSurface {
    fn stroke_path(&mut self, path: &ArrowPath, stroke: &Stroke) {
        let opacity = if stroke.color.is_opaque() {
            String::new()
        } else {
            format!(";stroke-opacity:{}", fmt_num(stroke.color.opacity()))
        };
        self.body.push_str(&format!(
            "<path d=\"{}\" style=\"fill:none;stroke-width:{};stroke:{};stroke-linecap:{}{}\" />\n",
            path_data(path),
            fmt_num(stroke.width),
            stroke.color,
            stroke.cap.as_str(),
            opacity,
        ));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let points = points
            .iter()
            .map(|p| fmt_point(*p))
            .collect::<Vec<_>>()
            .join(" ");
        let opacity = if color.is_opaque() {
            String::new()
        } else {
            format!(";fill-opacity:{}", fmt_num(color.opacity()))
        };
        self.body.push_str(&format!(
            "<polygon points=\"{points}\" style=\"fill:{color}{opacity}\" />\n"
        ));
    }
}

/// SVG path data (`d` attribute) for a single segment, absolute commands.
pub fn path_data(path: &ArrowPath) -> String {
    let k = |p: kurbo::Point| fmt_point(Point::new(p.x, p.y));
    match path.segment() {
        PathSeg::Line(l) => format!("M{}L{}", k(l.p0), k(l.p1)),
        PathSeg::Quad(q) => format!("M{}Q{} {}", k(q.p0), k(q.p1), k(q.p2)),
        PathSeg::Cubic(c) => format!("M{}C{} {} {}", k(c.p0), k(c.p1), k(c.p2), k(c.p3)),
    }
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    // Round to the requested significant figures
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    if !scale.is_finite() {
        // subnormal input
        return "0".to_string();
    }
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
