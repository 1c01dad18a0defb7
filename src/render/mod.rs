//! The arrow path engine.
//!
//! Each paint builds a path from the style's curve, splits it into dashes if
//! the style is dotted, strokes it, and fills an arrowhead oriented along the
//! path's final tangent. Nothing is cached between calls.

pub mod arrowhead;
pub mod curve;
pub mod dash;
pub mod defaults;
pub mod path;
#[cfg(feature = "raster")]
pub mod raster;
pub mod surface;
pub mod svg;

use std::borrow::Borrow;

pub use arrowhead::Arrowhead;
pub use curve::{BuildPath, CurveShape};
pub use dash::DashPattern;
pub use path::ArrowPath;
#[cfg(feature = "raster")]
pub use raster::RasterSurface;
pub use surface::{DrawOp, RecordingSurface, Stroke, Surface};
pub use svg::SvgSurface;

use crate::anchor::{self, EndpointSpec, LayoutLookup};
use crate::log::{debug, warn};
use crate::style::ArrowStyle;
use crate::types::{Point, Rect, Rgba};

/// Everything needed to draw one arrow, computed without a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGeometry {
    /// The full path from start to end.
    pub path: ArrowPath,
    /// What gets stroked: the whole path when solid, one entry per dash when dotted.
    pub strokes: Vec<ArrowPath>,
    pub stroke: Stroke,
    pub arrowhead: Option<Arrowhead>,
    pub fill: Rgba,
}

impl ArrowGeometry {
    pub fn compute(start: Point, end: Point, style: &ArrowStyle) -> Self {
        let shape = CurveShape::from_style(style);
        let path = shape.build(start, end);
        debug!(kind = shape.kind(), ?start, ?end, "built arrow path");

        let strokes = if style.dotted {
            let pattern = DashPattern::new(style.dash_length, style.dash_gap);
            if pattern.is_drawable() {
                dash::dash_path(&path, pattern)
            } else {
                warn!(
                    dash = style.dash_length,
                    gap = style.dash_gap,
                    "dash pattern makes no progress, stroking solid"
                );
                vec![path]
            }
        } else {
            vec![path]
        };

        let arrowhead = style
            .show_arrowhead
            .then(|| Arrowhead::at_end_of(&path, style.arrowhead_size, style.arrowhead_angle));

        ArrowGeometry {
            path,
            strokes,
            stroke: Stroke {
                color: style.color,
                width: style.thickness,
                cap: style.line_cap,
            },
            arrowhead,
            fill: style.color,
        }
    }

    /// Area the arrow may touch: the path's control hull and the arrowhead,
    /// grown by half the stroke width.
    pub fn bounds(&self) -> Rect {
        let head = self.arrowhead.iter().flat_map(Arrowhead::points);
        Rect::from_points(self.path.points().into_iter().chain(head))
            .unwrap_or_default()
            .inflate(self.stroke.width * 0.5)
    }

    /// Stroke the shaft, then fill the head.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for stroke in &self.strokes {
            surface.stroke_path(stroke, &self.stroke);
        }
        if let Some(head) = &self.arrowhead {
            surface.fill_polygon(&head.points(), self.fill);
        }
        debug!(
            strokes = self.strokes.len(),
            arrowhead = self.arrowhead.is_some(),
            "drew arrow"
        );
    }
}

/// Draw an arrow from `start` to `end` onto `surface`.
pub fn render<S: Surface + ?Sized>(surface: &mut S, start: Point, end: Point, style: &ArrowStyle) {
    ArrowGeometry::compute(start, end, style).draw(surface);
}

/// When an [`ArrowPainter`] redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepaintPolicy {
    /// Every call draws.
    #[default]
    Always,
    /// Draw only when the endpoints or style differ from the last drawn call.
    OnChange,
}

/// Renderer for hosts with retained surfaces, remembering what it last drew.
#[derive(Debug, Clone, Default)]
pub struct ArrowPainter {
    policy: RepaintPolicy,
    last: Option<(Point, Point, ArrowStyle)>,
}

impl ArrowPainter {
    pub fn new(policy: RepaintPolicy) -> Self {
        ArrowPainter { policy, last: None }
    }

    pub fn policy(&self) -> RepaintPolicy {
        self.policy
    }

    /// Whether painting these inputs would change the output.
    pub fn needs_repaint(&self, start: Point, end: Point, style: &ArrowStyle) -> bool {
        match (self.policy, &self.last) {
            (RepaintPolicy::Always, _) | (_, None) => true,
            (RepaintPolicy::OnChange, Some((s, e, st))) => *s != start || *e != end || st != style,
        }
    }

    /// Render if needed; returns whether anything was drawn.
    pub fn paint<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        start: Point,
        end: Point,
        style: &ArrowStyle,
    ) -> bool {
        if !self.needs_repaint(start, end, style) {
            return false;
        }
        render(surface, start, end, style);
        self.last = Some((start, end, style.clone()));
        true
    }

    /// Forget the last inputs so the next call draws.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

/// An arrow between two laid-out elements, resolved on every paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector<E> {
    pub from: E,
    pub to: E,
    pub start: EndpointSpec,
    pub end: EndpointSpec,
    pub style: ArrowStyle,
}

impl<E> Connector<E> {
    /// Default endpoints (right side of `from` to left side of `to`) and style.
    pub fn new(from: E, to: E) -> Self {
        Connector {
            from,
            to,
            start: EndpointSpec::default(),
            end: EndpointSpec::default(),
            style: ArrowStyle::default(),
        }
    }

    #[must_use]
    pub fn with_start(self, start: EndpointSpec) -> Self {
        Connector { start, ..self }
    }

    #[must_use]
    pub fn with_end(self, end: EndpointSpec) -> Self {
        Connector { end, ..self }
    }

    #[must_use]
    pub fn with_style(self, style: ArrowStyle) -> Self {
        Connector { style, ..self }
    }

    /// Current endpoints in `frame`'s coordinate space, if both elements are laid out.
    pub fn endpoints<L>(&self, lookup: &L, frame: &L::Element) -> Option<(Point, Point)>
    where
        L: LayoutLookup + ?Sized,
        E: Borrow<L::Element>,
    {
        anchor::resolve(
            lookup,
            self.from.borrow(),
            self.to.borrow(),
            frame,
            &self.start,
            &self.end,
        )
    }

    /// Resolve and draw. Element positions may change between frames
    /// without notice, so a resolved connector always draws.
    ///
    /// Returns `false` (drawing nothing) while either element is unresolved.
    pub fn paint<L, S>(&self, surface: &mut S, lookup: &L, frame: &L::Element) -> bool
    where
        L: LayoutLookup + ?Sized,
        S: Surface + ?Sized,
        E: Borrow<L::Element>,
    {
        let Some((start, end)) = self.endpoints(lookup, frame) else {
            return false;
        };
        render(surface, start, end, &self.style);
        true
    }
}
