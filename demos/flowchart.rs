//! Three boxes wired together with connectors, printed as SVG.
//!
//! Run with `RUST_LOG=debug cargo run --example flowchart --features tracing`
//! to see the engine's decisions on stderr.

use std::collections::HashMap;

use arrowkit::{
    AnchorPosition, ArrowStyle, Connector, CurveStyle, EndpointSpec, LayoutLookup, Rect, Rgba,
    Surface, SvgSurface, pt,
};
use glam::DVec2;

struct Layout(HashMap<&'static str, Rect>);

impl LayoutLookup for Layout {
    type Element = str;

    fn element_rect(&self, element: &str) -> Option<Rect> {
        self.0.get(element).copied()
    }
}

fn outline(svg: &mut SvgSurface, rect: Rect) {
    let corners = [
        rect.origin,
        pt(rect.max().x, rect.origin.y),
        rect.max(),
        pt(rect.origin.x, rect.max().y),
    ];
    svg.fill_polygon(&corners, Rgba::rgb(230, 236, 242));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let layout = Layout(HashMap::from([
        ("canvas", Rect::new(0.0, 0.0, 480.0, 300.0)),
        ("start", Rect::new(30.0, 30.0, 120.0, 50.0)),
        ("check", Rect::new(300.0, 30.0, 140.0, 50.0)),
        ("done", Rect::new(300.0, 210.0, 140.0, 50.0)),
    ]));

    let connectors = [
        Connector::new("start", "check").with_style(ArrowStyle::default()),
        Connector::new("check", "done")
            .with_start(EndpointSpec::anchored(AnchorPosition::BottomCenter))
            .with_end(
                EndpointSpec::anchored(AnchorPosition::TopCenter).with_offset(DVec2::new(0.0, -4.0)),
            )
            .with_style(ArrowStyle::solid_straight()),
        Connector::new("done", "start")
            .with_start(EndpointSpec::anchored(AnchorPosition::CenterLeft))
            .with_end(EndpointSpec::anchored(AnchorPosition::BottomCenter))
            .with_style(
                ArrowStyle::default()
                    .with_curve_style(CurveStyle::ReversedArc)
                    .with_color(Rgba::rgb(200, 60, 60)),
            ),
        // "legend" is never laid out, so this one is skipped.
        Connector::new("legend", "done"),
    ];

    let mut svg = SvgSurface::new(480.0, 300.0);
    for id in ["start", "check", "done"] {
        if let Some(rect) = layout.element_rect(id) {
            outline(&mut svg, rect);
        }
    }

    let drawn = connectors
        .iter()
        .filter(|connector| connector.paint(&mut svg, &layout, "canvas"))
        .count();
    tracing::info!(drawn, total = connectors.len(), "painted connectors");

    print!("{}", svg.finish());
}
