//! Arrow style configuration.
//!
//! [`ArrowStyle`] is an immutable value: every `with_*` method consumes the
//! style and returns a modified copy, leaving all other fields untouched.

use crate::errors::StyleError;
use crate::render::defaults;
use crate::types::{LineCap, Point, Rgba};

/// Which construction algorithm shapes the path between the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CurveStyle {
    /// A single line segment.
    Straight,
    /// One quadratic bend, biased vertically by the intensity.
    Smooth,
    /// An inflected cubic S-shape.
    #[default]
    SCurve,
    /// A quadratic bulge along the perpendicular `(-dy, dx)` of the chord.
    Arc,
    /// [`CurveStyle::Arc`] mirrored across the chord.
    ReversedArc,
}

/// How an arrow is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowStyle {
    pub dotted: bool,
    pub dash_length: f64,
    pub dash_gap: f64,
    pub thickness: f64,
    pub color: Rgba,
    pub show_arrowhead: bool,
    pub arrowhead_size: f64,
    /// Degrees between each wing of the head and the shaft (a half-angle).
    pub arrowhead_angle: f64,
    pub curve_style: CurveStyle,
    /// Expected in `[0, 1]`; not clamped.
    pub curve_intensity: f64,
    /// Control points as fractions of `end - start`, added to `start`.
    ///
    /// When present and non-empty these replace `curve_style`: one point
    /// gives a quadratic curve, two or more a cubic (extra points ignored).
    pub custom_control_points: Option<Vec<Point>>,
    pub line_cap: LineCap,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            dotted: defaults::DOTTED,
            dash_length: defaults::DASH_LENGTH,
            dash_gap: defaults::DASH_GAP,
            thickness: defaults::THICKNESS,
            color: defaults::COLOR,
            show_arrowhead: defaults::SHOW_ARROWHEAD,
            arrowhead_size: defaults::ARROWHEAD_SIZE,
            arrowhead_angle: defaults::ARROWHEAD_ANGLE,
            curve_style: CurveStyle::default(),
            curve_intensity: defaults::CURVE_INTENSITY,
            custom_control_points: None,
            line_cap: LineCap::default(),
        }
    }
}

impl ArrowStyle {
    /// A solid, straight arrow; a convenient base for diagrams.
    pub fn solid_straight() -> Self {
        ArrowStyle {
            dotted: false,
            curve_style: CurveStyle::Straight,
            ..ArrowStyle::default()
        }
    }

    #[must_use]
    pub fn with_dotted(self, dotted: bool) -> Self {
        ArrowStyle { dotted, ..self }
    }

    #[must_use]
    pub fn with_dash_length(self, dash_length: f64) -> Self {
        ArrowStyle { dash_length, ..self }
    }

    #[must_use]
    pub fn with_dash_gap(self, dash_gap: f64) -> Self {
        ArrowStyle { dash_gap, ..self }
    }

    #[must_use]
    pub fn with_thickness(self, thickness: f64) -> Self {
        ArrowStyle { thickness, ..self }
    }

    #[must_use]
    pub fn with_color(self, color: Rgba) -> Self {
        ArrowStyle { color, ..self }
    }

    #[must_use]
    pub fn with_arrowhead(self, show_arrowhead: bool) -> Self {
        ArrowStyle {
            show_arrowhead,
            ..self
        }
    }

    #[must_use]
    pub fn with_arrowhead_size(self, arrowhead_size: f64) -> Self {
        ArrowStyle {
            arrowhead_size,
            ..self
        }
    }

    #[must_use]
    pub fn with_arrowhead_angle(self, arrowhead_angle: f64) -> Self {
        ArrowStyle {
            arrowhead_angle,
            ..self
        }
    }

    #[must_use]
    pub fn with_curve_style(self, curve_style: CurveStyle) -> Self {
        ArrowStyle {
            curve_style,
            ..self
        }
    }

    #[must_use]
    pub fn with_curve_intensity(self, curve_intensity: f64) -> Self {
        ArrowStyle {
            curve_intensity,
            ..self
        }
    }

    /// Replace the custom control points; `None` falls back to `curve_style`.
    #[must_use]
    pub fn with_custom_control_points(self, points: Option<Vec<Point>>) -> Self {
        ArrowStyle {
            custom_control_points: points,
            ..self
        }
    }

    #[must_use]
    pub fn with_line_cap(self, line_cap: LineCap) -> Self {
        ArrowStyle { line_cap, ..self }
    }

    /// Custom control points, if any are set.
    pub fn control_points(&self) -> Option<&[Point]> {
        self.custom_control_points
            .as_deref()
            .filter(|points| !points.is_empty())
    }

    /// Check the documented constraints.
    ///
    /// Rendering never calls this; it is meant for styles built from
    /// untrusted configuration.
    pub fn validate(&self) -> Result<(), StyleError> {
        let numeric = [
            ("dash_length", self.dash_length),
            ("dash_gap", self.dash_gap),
            ("thickness", self.thickness),
            ("arrowhead_size", self.arrowhead_size),
            ("arrowhead_angle", self.arrowhead_angle),
            ("curve_intensity", self.curve_intensity),
        ];
        if let Some((field, value)) = numeric.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(StyleError::NonFinite { field, value });
        }

        if self.thickness <= 0.0 {
            return Err(StyleError::NonPositiveThickness(self.thickness));
        }
        if self.dotted && self.dash_length <= 0.0 {
            return Err(StyleError::NonPositiveDash(self.dash_length));
        }
        if self.dotted && self.dash_gap <= 0.0 {
            return Err(StyleError::NonPositiveGap(self.dash_gap));
        }
        if self.arrowhead_size < 0.0 {
            return Err(StyleError::NegativeArrowheadSize(self.arrowhead_size));
        }
        if self.arrowhead_angle <= 0.0 || self.arrowhead_angle >= 90.0 {
            return Err(StyleError::ArrowheadAngleOutOfRange(self.arrowhead_angle));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    #[test]
    fn defaults_match_documented_table() {
        let style = ArrowStyle::default();
        assert!(style.dotted);
        assert_eq!(style.dash_length, 8.0);
        assert_eq!(style.dash_gap, 6.0);
        assert_eq!(style.thickness, 2.0);
        assert_eq!(style.color, Rgba::SLATE_GRAY);
        assert!(style.show_arrowhead);
        assert_eq!(style.arrowhead_size, 12.0);
        assert_eq!(style.arrowhead_angle, 25.0);
        assert_eq!(style.curve_style, CurveStyle::SCurve);
        assert_eq!(style.curve_intensity, 0.5);
        assert_eq!(style.custom_control_points, None);
        assert_eq!(style.line_cap, LineCap::Round);
        assert_eq!(style.validate(), Ok(()));
    }

    #[test]
    fn modified_copy_touches_one_field() {
        let base = ArrowStyle::default();

        let thicker = base.clone().with_thickness(5.0);
        assert_eq!(thicker.thickness, 5.0);
        assert_eq!(
            ArrowStyle {
                thickness: base.thickness,
                ..thicker.clone()
            },
            base
        );

        let arced = base.clone().with_curve_style(CurveStyle::Arc);
        assert_eq!(
            ArrowStyle {
                curve_style: base.curve_style,
                ..arced
            },
            base
        );

        let capped = base.clone().with_line_cap(LineCap::Square);
        assert_eq!(
            ArrowStyle {
                line_cap: LineCap::Round,
                ..capped
            },
            base
        );
    }

    #[test]
    fn empty_control_points_count_as_absent() {
        let style = ArrowStyle::default().with_custom_control_points(Some(Vec::new()));
        assert_eq!(style.control_points(), None);

        let style = style.with_custom_control_points(Some(vec![pt(0.5, 0.0)]));
        assert_eq!(style.control_points(), Some(&[pt(0.5, 0.0)][..]));
    }

    #[test]
    fn validate_reports_first_violation() {
        let style = ArrowStyle::default().with_thickness(0.0);
        assert_eq!(style.validate(), Err(StyleError::NonPositiveThickness(0.0)));

        let style = ArrowStyle::default().with_dash_gap(-1.0);
        assert_eq!(style.validate(), Err(StyleError::NonPositiveGap(-1.0)));

        // Dash settings are irrelevant for solid arrows.
        let style = ArrowStyle::default().with_dotted(false).with_dash_length(0.0);
        assert_eq!(style.validate(), Ok(()));

        let style = ArrowStyle::default().with_arrowhead_angle(90.0);
        assert_eq!(
            style.validate(),
            Err(StyleError::ArrowheadAngleOutOfRange(90.0))
        );

        let style = ArrowStyle::default().with_curve_intensity(f64::NAN);
        assert!(matches!(
            style.validate(),
            Err(StyleError::NonFinite {
                field: "curve_intensity",
                ..
            })
        ));
    }
}
