//! Error types with diagnostics using miette
//!
//! Rendering itself never fails; these cover the fallible edges of the crate:
//! parsing colors, opt-in style validation, and allocating raster surfaces.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Color Errors
// ============================================================================

/// Errors from parsing a hex color string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("hex color `{input}` has {digits} digits")]
    #[diagnostic(
        code(arrowkit::color::invalid_length),
        help("use #rgb, #rrggbb or #rrggbbaa")
    )]
    InvalidLength { input: String, digits: usize },

    #[error("invalid hex digit `{found}` in color `{input}`")]
    #[diagnostic(code(arrowkit::color::invalid_digit))]
    InvalidDigit { input: String, found: char },
}

// ============================================================================
// Style Errors
// ============================================================================

/// Constraint violations reported by [`ArrowStyle::validate`](crate::ArrowStyle::validate)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("{field} must be finite, got {value}")]
    #[diagnostic(code(arrowkit::style::non_finite))]
    NonFinite { field: &'static str, value: f64 },

    #[error("thickness must be positive, got {0}")]
    #[diagnostic(code(arrowkit::style::thickness))]
    NonPositiveThickness(f64),

    #[error("dash length must be positive for a dotted arrow, got {0}")]
    #[diagnostic(
        code(arrowkit::style::dash_length),
        help("set `dotted` to false for a solid line")
    )]
    NonPositiveDash(f64),

    #[error("dash gap must be positive for a dotted arrow, got {0}")]
    #[diagnostic(
        code(arrowkit::style::dash_gap),
        help("set `dotted` to false for a solid line")
    )]
    NonPositiveGap(f64),

    #[error("arrowhead size must not be negative, got {0}")]
    #[diagnostic(code(arrowkit::style::arrowhead_size))]
    NegativeArrowheadSize(f64),

    #[error("arrowhead angle must lie strictly between 0 and 90 degrees, got {0}")]
    #[diagnostic(
        code(arrowkit::style::arrowhead_angle),
        help("the angle is measured between each wing and the shaft")
    )]
    ArrowheadAngleOutOfRange(f64),
}

// ============================================================================
// Surface Errors
// ============================================================================

/// Errors creating a drawing surface
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("cannot allocate a {width}x{height} surface")]
    #[diagnostic(
        code(arrowkit::surface::invalid_size),
        help("both dimensions must be non-zero")
    )]
    InvalidSize { width: u32, height: u32 },
}
