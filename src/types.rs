//! Plain value types shared by the resolver and the path engine.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::ColorError;

/// A point (or offset) in surface-local pixels, y pointing down.
pub type Point = DVec2;

/// Shorthand for building a [`Point`].
#[inline]
pub const fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// Axis-aligned rectangle: an origin (top-left) and a size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: DVec2,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Rect {
            origin: min,
            size: max - min,
        })
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Point {
        self.origin + self.size
    }

    /// The point at `fraction` of the size, measured from the origin.
    ///
    /// `(0, 0)` is the top-left corner, `(1, 1)` the bottom-right one.
    pub fn point_at(&self, fraction: DVec2) -> Point {
        self.origin + self.size * fraction
    }

    /// Same rectangle expressed relative to `frame`'s origin.
    pub fn relative_to(&self, frame: &Rect) -> Rect {
        Rect {
            origin: self.origin - frame.origin,
            size: self.size,
        }
    }

    /// Grow by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect {
            origin: self.origin - DVec2::splat(amount),
            size: self.size + DVec2::splat(amount * 2.0),
        }
    }
}

/// 8-bit RGBA color (straight alpha).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    /// `#708090`
    pub const SLATE_GRAY: Rgba = Rgba::rgb(112, 128, 144);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Copy with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// Alpha as a float in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Rgba, ColorError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let mut nibbles = Vec::with_capacity(8);
        for c in hex.chars() {
            let digit = c.to_digit(16).ok_or_else(|| ColorError::InvalidDigit {
                input: input.to_string(),
                found: c,
            })?;
            // to_digit(16) is always < 16
            nibbles.push(digit as u8);
        }

        let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];
        match nibbles.len() {
            3 => Ok(Rgba::rgb(
                nibbles[0] * 17,
                nibbles[1] * 17,
                nibbles[2] * 17,
            )),
            6 => Ok(Rgba::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Rgba::new(byte(0), byte(2), byte(4), byte(6))),
            digits => Err(ColorError::InvalidLength {
                input: input.to_string(),
                digits,
            }),
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::SLATE_GRAY
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    /// CSS `rgb(r,g,b)` notation; alpha is emitted separately as an opacity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Shape drawn at the open ends of a stroked path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    /// Keyword used by SVG's `stroke-linecap`.
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}
