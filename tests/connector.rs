//! Resolver-driven arrows: endpoints come from a fake layout every frame.

use std::cell::RefCell;
use std::collections::HashMap;

use arrowkit::{
    AnchorPosition, ArrowPainter, ArrowStyle, Connector, CurveStyle, EndpointSpec, LayoutLookup,
    RecordingSurface, Rect, RepaintPolicy, pt,
};
use glam::DVec2;

/// Layout whose rectangles can move between frames.
#[derive(Default)]
struct Layout {
    rects: RefCell<HashMap<String, Rect>>,
}

impl Layout {
    fn place(&self, id: &str, rect: Rect) {
        self.rects.borrow_mut().insert(id.to_string(), rect);
    }

    fn remove(&self, id: &str) {
        self.rects.borrow_mut().remove(id);
    }
}

impl LayoutLookup for Layout {
    type Element = str;

    fn element_rect(&self, element: &str) -> Option<Rect> {
        self.rects.borrow().get(element).copied()
    }
}

fn connector() -> Connector<String> {
    Connector::new("source".to_string(), "target".to_string())
        .with_start(EndpointSpec::anchored(AnchorPosition::CenterRight))
        .with_end(EndpointSpec::anchored(AnchorPosition::CenterLeft).with_offset(DVec2::new(-4.0, 0.0)))
        .with_style(ArrowStyle::solid_straight())
}

#[test]
fn skips_frames_until_laid_out() {
    let layout = Layout::default();
    let connector = connector();
    let mut surface = RecordingSurface::new();

    layout.place("canvas", Rect::new(0.0, 0.0, 400.0, 300.0));
    layout.place("source", Rect::new(20.0, 20.0, 100.0, 40.0));
    assert!(!connector.paint(&mut surface, &layout, "canvas"));
    assert!(surface.is_empty());

    layout.place("target", Rect::new(250.0, 120.0, 100.0, 40.0));
    assert!(connector.paint(&mut surface, &layout, "canvas"));
    let (path, _) = surface.strokes().next().unwrap();
    assert_eq!(path.start(), pt(120.0, 40.0));
    assert_eq!(path.end(), pt(246.0, 140.0));
}

#[test]
fn follows_moving_elements_every_frame() {
    let layout = Layout::default();
    layout.place("canvas", Rect::new(10.0, 10.0, 400.0, 300.0));
    layout.place("source", Rect::new(20.0, 20.0, 100.0, 40.0));
    layout.place("target", Rect::new(250.0, 120.0, 100.0, 40.0));
    let connector = connector();

    let mut surface = RecordingSurface::new();
    assert!(connector.paint(&mut surface, &layout, "canvas"));
    let first = surface.strokes().next().unwrap().0.end();
    assert_eq!(first, pt(236.0, 130.0));

    layout.place("target", Rect::new(250.0, 200.0, 100.0, 40.0));
    surface.clear();
    assert!(connector.paint(&mut surface, &layout, "canvas"));
    let second = surface.strokes().next().unwrap().0.end();
    assert_eq!(second, pt(236.0, 210.0));

    layout.remove("source");
    surface.clear();
    assert!(!connector.paint(&mut surface, &layout, "canvas"));
    assert!(surface.is_empty());
}

#[test]
fn unanchored_connector_uses_side_defaults() {
    let layout = Layout::default();
    layout.place("canvas", Rect::new(0.0, 0.0, 400.0, 300.0));
    layout.place("source", Rect::new(0.0, 0.0, 100.0, 40.0));
    layout.place("target", Rect::new(200.0, 0.0, 100.0, 40.0));

    let connector = Connector::new("source", "target");
    assert_eq!(
        connector.endpoints(&layout, "canvas"),
        Some((pt(80.0, 20.0), pt(220.0, 20.0)))
    );
}

#[test]
fn custom_fraction_endpoint() {
    let layout = Layout::default();
    layout.place("canvas", Rect::new(0.0, 0.0, 400.0, 300.0));
    layout.place("source", Rect::new(0.0, 0.0, 100.0, 40.0));
    layout.place("target", Rect::new(200.0, 0.0, 100.0, 40.0));

    let connector = Connector::new("source", "target")
        .with_start(EndpointSpec::custom(DVec2::new(0.25, 1.0)))
        .with_end(EndpointSpec::anchored(AnchorPosition::Custom));
    assert_eq!(
        connector.endpoints(&layout, "canvas"),
        Some((pt(25.0, 40.0), pt(250.0, 20.0)))
    );
}

#[test]
fn literal_points_with_change_detection() {
    let style = ArrowStyle::default().with_curve_style(CurveStyle::Arc);
    let mut painter = ArrowPainter::new(RepaintPolicy::OnChange);
    let mut surface = RecordingSurface::new();

    let mut frames_drawn = 0;
    for end in [pt(100.0, 0.0), pt(100.0, 0.0), pt(100.0, 10.0), pt(100.0, 10.0)] {
        if painter.paint(&mut surface, pt(0.0, 0.0), end, &style) {
            frames_drawn += 1;
        }
    }
    assert_eq!(frames_drawn, 2);
}
