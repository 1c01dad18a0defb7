//! Decorative connector arrows for 2D canvases.
//!
//! An arrow goes from a start point to an end point: either literal points,
//! or anchor points on two laid-out elements resolved every frame through a
//! host-provided [`LayoutLookup`]. The path engine shapes the connection
//! (straight, smooth, S-curve, arc, reversed arc or custom bezier), strokes it
//! solid or dashed, and fills an arrowhead along the path's final tangent.
//!
//! ```
//! use arrowkit::{ArrowStyle, CurveStyle, RecordingSurface, pt, render};
//!
//! let style = ArrowStyle::default().with_curve_style(CurveStyle::Arc);
//! let mut surface = RecordingSurface::new();
//! render(&mut surface, pt(0.0, 0.0), pt(120.0, 40.0), &style);
//! assert_eq!(surface.fills().count(), 1);
//! ```

pub mod anchor;
pub mod errors;
mod log;
pub mod render;
pub mod style;
pub mod types;

pub use anchor::{AnchorPosition, End, EndpointSpec, LayoutLookup, resolve};
pub use errors::{ColorError, StyleError, SurfaceError};
#[cfg(feature = "raster")]
pub use render::RasterSurface;
pub use render::{
    ArrowGeometry, ArrowPainter, ArrowPath, Arrowhead, Connector, DrawOp, RecordingSurface,
    RepaintPolicy, Stroke, Surface, SvgSurface, render,
};
pub use style::{ArrowStyle, CurveStyle};
pub use types::{LineCap, Point, Rect, Rgba, pt};
