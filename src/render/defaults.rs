//! Default sizes and settings (all in surface pixels)

use crate::types::{Point, Rgba};

pub const DOTTED: bool = true;
pub const DASH_LENGTH: f64 = 8.0;
pub const DASH_GAP: f64 = 6.0;
pub const THICKNESS: f64 = 2.0;
pub const COLOR: Rgba = Rgba::SLATE_GRAY;
pub const SHOW_ARROWHEAD: bool = true;
pub const ARROWHEAD_SIZE: f64 = 12.0;
/// Degrees between each wing and the shaft.
pub const ARROWHEAD_ANGLE: f64 = 25.0;
pub const CURVE_INTENSITY: f64 = 0.5;

/// Where an arrow leaves its source element when no anchor is given.
pub const START_FRACTION: Point = Point::new(0.8, 0.5);
/// Where an arrow meets its target element when no anchor is given.
pub const END_FRACTION: Point = Point::new(0.2, 0.5);

/// Tolerance (px) for arc-length measurement and inversion.
pub const ARCLEN_ACCURACY: f64 = 1e-4;
/// Upper bound on dash runs when the period is below `MIN_DASH_PERIOD`.
pub const MAX_DASHES: usize = 10_000;
/// Dash periods (px) at or above this are never capped.
pub const MIN_DASH_PERIOD: f64 = 0.5;
