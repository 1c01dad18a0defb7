//! Anchor resolution: turning two laid-out elements into arrow endpoints.
//!
//! Element rectangles are queried from the host at paint time through
//! [`LayoutLookup`], so nothing here is cached; call [`resolve`] every frame.

use glam::DVec2;

use crate::log::debug;
use crate::render::defaults;
use crate::types::{Point, Rect};

/// Named point on a rectangle, as a fraction of its width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorPosition {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Caller-supplied fraction; center when none is given.
    Custom,
}

impl AnchorPosition {
    pub const ALL: [AnchorPosition; 10] = [
        AnchorPosition::TopLeft,
        AnchorPosition::TopCenter,
        AnchorPosition::TopRight,
        AnchorPosition::CenterLeft,
        AnchorPosition::Center,
        AnchorPosition::CenterRight,
        AnchorPosition::BottomLeft,
        AnchorPosition::BottomCenter,
        AnchorPosition::BottomRight,
        AnchorPosition::Custom,
    ];

    /// Fixed fraction for this anchor; `(0, 0)` is top-left.
    pub fn fraction(self) -> DVec2 {
        match self {
            AnchorPosition::TopLeft => DVec2::new(0.0, 0.0),
            AnchorPosition::TopCenter => DVec2::new(0.5, 0.0),
            AnchorPosition::TopRight => DVec2::new(1.0, 0.0),
            AnchorPosition::CenterLeft => DVec2::new(0.0, 0.5),
            AnchorPosition::Center | AnchorPosition::Custom => DVec2::new(0.5, 0.5),
            AnchorPosition::CenterRight => DVec2::new(1.0, 0.5),
            AnchorPosition::BottomLeft => DVec2::new(0.0, 1.0),
            AnchorPosition::BottomCenter => DVec2::new(0.5, 1.0),
            AnchorPosition::BottomRight => DVec2::new(1.0, 1.0),
        }
    }
}

/// Which end of the arrow an [`EndpointSpec`] describes.
///
/// Only matters when an endpoint names no anchor: the two ends then default to
/// different sides of their elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Start,
    End,
}

impl End {
    fn default_fraction(self) -> DVec2 {
        match self {
            End::Start => defaults::START_FRACTION,
            End::End => defaults::END_FRACTION,
        }
    }
}

/// Where on an element an arrow endpoint sits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EndpointSpec {
    pub anchor: Option<AnchorPosition>,
    /// Explicit fraction; used with [`AnchorPosition::Custom`] or when no anchor is named.
    pub fraction: Option<DVec2>,
    /// Pixel offset added after the fraction is applied.
    pub offset: DVec2,
}

impl EndpointSpec {
    pub fn anchored(anchor: AnchorPosition) -> Self {
        EndpointSpec {
            anchor: Some(anchor),
            ..EndpointSpec::default()
        }
    }

    /// A [`AnchorPosition::Custom`] anchor at `fraction`.
    pub fn custom(fraction: DVec2) -> Self {
        EndpointSpec {
            anchor: Some(AnchorPosition::Custom),
            fraction: Some(fraction),
            offset: DVec2::ZERO,
        }
    }

    #[must_use]
    pub fn with_offset(self, offset: DVec2) -> Self {
        EndpointSpec { offset, ..self }
    }

    /// Fraction actually applied to the element rectangle.
    pub fn effective_fraction(&self, end: End) -> DVec2 {
        match (self.anchor, self.fraction) {
            (Some(AnchorPosition::Custom), Some(fraction)) => fraction,
            (Some(anchor), _) => anchor.fraction(),
            (None, Some(fraction)) => fraction,
            (None, None) => end.default_fraction(),
        }
    }

    /// `rect.origin + rect.size * fraction + offset`
    pub fn locate(&self, rect: &Rect, end: End) -> Point {
        rect.point_at(self.effective_fraction(end)) + self.offset
    }
}

/// Host capability: absolute rectangles of laid-out elements.
///
/// Returns `None` while an element is not laid out yet or has been detached.
pub trait LayoutLookup {
    type Element: ?Sized;

    fn element_rect(&self, element: &Self::Element) -> Option<Rect>;
}

impl<L: LayoutLookup + ?Sized> LayoutLookup for &L {
    type Element = L::Element;

    fn element_rect(&self, element: &Self::Element) -> Option<Rect> {
        (**self).element_rect(element)
    }
}

/// Resolve both endpoints into the coordinate space of `surface`.
///
/// `None` means "not ready yet": skip painting this frame.
pub fn resolve<L: LayoutLookup + ?Sized>(
    lookup: &L,
    start_element: &L::Element,
    end_element: &L::Element,
    surface: &L::Element,
    start: &EndpointSpec,
    end: &EndpointSpec,
) -> Option<(Point, Point)> {
    let (Some(start_rect), Some(end_rect), Some(frame)) = (
        lookup.element_rect(start_element),
        lookup.element_rect(end_element),
        lookup.element_rect(surface),
    ) else {
        debug!("endpoints unresolved, skipping frame");
        return None;
    };

    let from = start.locate(&start_rect.relative_to(&frame), End::Start);
    let to = end.locate(&end_rect.relative_to(&frame), End::End);
    debug!(?from, ?to, "resolved endpoints");
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;
    use std::collections::HashMap;

    struct FakeLayout(HashMap<&'static str, Rect>);

    impl LayoutLookup for FakeLayout {
        type Element = str;

        fn element_rect(&self, element: &str) -> Option<Rect> {
            self.0.get(element).copied()
        }
    }

    fn layout() -> FakeLayout {
        FakeLayout(HashMap::from([
            ("canvas", Rect::new(0.0, 0.0, 800.0, 600.0)),
            ("a", Rect::new(10.0, 10.0, 100.0, 50.0)),
            ("b", Rect::new(300.0, 200.0, 80.0, 40.0)),
        ]))
    }

    #[test]
    fn anchor_table_against_rect() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        let at = |anchor| EndpointSpec::anchored(anchor).locate(&rect, End::Start);
        assert_eq!(at(AnchorPosition::TopLeft), pt(10.0, 10.0));
        assert_eq!(at(AnchorPosition::BottomRight), pt(110.0, 60.0));
        assert_eq!(at(AnchorPosition::Center), pt(60.0, 35.0));
        assert_eq!(at(AnchorPosition::TopCenter), pt(60.0, 10.0));
        assert_eq!(at(AnchorPosition::CenterRight), pt(110.0, 35.0));
        assert_eq!(at(AnchorPosition::BottomLeft), pt(10.0, 60.0));
    }

    #[test]
    fn every_fraction_in_unit_square() {
        for anchor in AnchorPosition::ALL {
            let f = anchor.fraction();
            assert!((0.0..=1.0).contains(&f.x) && (0.0..=1.0).contains(&f.y), "{anchor:?}");
        }
    }

    #[test]
    fn custom_anchor_uses_override_or_center() {
        let custom = EndpointSpec::custom(DVec2::new(0.25, 1.0));
        assert_eq!(custom.effective_fraction(End::Start), DVec2::new(0.25, 1.0));

        let bare = EndpointSpec::anchored(AnchorPosition::Custom);
        assert_eq!(bare.effective_fraction(End::End), DVec2::splat(0.5));

        // An override only applies to the custom anchor.
        let named = EndpointSpec {
            fraction: Some(DVec2::ZERO),
            ..EndpointSpec::anchored(AnchorPosition::BottomRight)
        };
        assert_eq!(named.effective_fraction(End::Start), DVec2::ONE);
    }

    #[test]
    fn unnamed_endpoints_default_per_side() {
        let spec = EndpointSpec::default();
        assert_eq!(spec.effective_fraction(End::Start), DVec2::new(0.8, 0.5));
        assert_eq!(spec.effective_fraction(End::End), DVec2::new(0.2, 0.5));
    }

    #[test]
    fn resolve_applies_offset_and_surface_frame() {
        let mut layout = layout();
        layout.0.insert("canvas", Rect::new(5.0, 5.0, 800.0, 600.0));

        let start = EndpointSpec::anchored(AnchorPosition::CenterRight).with_offset(DVec2::new(4.0, 0.0));
        let end = EndpointSpec::anchored(AnchorPosition::TopCenter).with_offset(DVec2::new(0.0, -4.0));
        let (from, to) = resolve(&layout, "a", "b", "canvas", &start, &end).unwrap();
        assert_eq!(from, pt(109.0, 30.0));
        assert_eq!(to, pt(335.0, 191.0));
    }

    #[test]
    fn resolve_defaults_when_unanchored() {
        let layout = layout();
        let spec = EndpointSpec::default();
        let (from, to) = resolve(&layout, "a", "b", "canvas", &spec, &spec).unwrap();
        assert_eq!(from, pt(90.0, 35.0));
        assert_eq!(to, pt(316.0, 220.0));
    }

    #[test]
    fn unresolved_when_any_rect_missing() {
        let layout = layout();
        let spec = EndpointSpec::default();
        assert_eq!(resolve(&layout, "a", "missing", "canvas", &spec, &spec), None);
        assert_eq!(resolve(&layout, "missing", "b", "canvas", &spec, &spec), None);
        assert_eq!(resolve(&layout, "a", "b", "detached", &spec, &spec), None);
    }
}
