//! Every curve style, solid and dashed, side by side in one SVG.

use arrowkit::{ArrowStyle, CurveStyle, SvgSurface, pt, render};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let curves = [
        CurveStyle::Straight,
        CurveStyle::Smooth,
        CurveStyle::SCurve,
        CurveStyle::Arc,
        CurveStyle::ReversedArc,
    ];

    let mut svg = SvgSurface::new(640.0, 120.0 * (curves.len() as f64 + 1.0));
    for (row, curve) in curves.into_iter().enumerate() {
        let y = 40.0 + 120.0 * row as f64;
        for (column, dotted) in [false, true].into_iter().enumerate() {
            let x = 40.0 + 320.0 * column as f64;
            let style = ArrowStyle::default()
                .with_curve_style(curve)
                .with_dotted(dotted);
            render(&mut svg, pt(x, y), pt(x + 240.0, y + 60.0), &style);
        }
    }

    // Custom control points take precedence over the named curve.
    let y = 40.0 + 120.0 * curves.len() as f64;
    let custom = ArrowStyle::default()
        .with_dotted(false)
        .with_custom_control_points(Some(vec![pt(0.1, -0.8), pt(0.9, 1.8)]));
    render(&mut svg, pt(40.0, y), pt(600.0, y + 40.0), &custom);

    print!("{}", svg.finish());
}
