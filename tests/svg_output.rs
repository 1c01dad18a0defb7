//! Whole-document SVG output, checked with inline snapshots.

use arrowkit::{ArrowStyle, CurveStyle, LineCap, Rgba, SvgSurface, pt, render};

#[test]
fn straight_arrow_with_wide_head() {
    let style = ArrowStyle::solid_straight().with_arrowhead_angle(45.0);
    let mut svg = SvgSurface::new(120.0, 40.0);
    render(&mut svg, pt(0.0, 20.0), pt(100.0, 20.0), &style);

    insta::assert_snapshot!(svg.finish(), @r#"
    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 120 40" width="120" height="40">
    <path d="M0,20L100,20" style="fill:none;stroke-width:2;stroke:rgb(112,128,144);stroke-linecap:round" />
    <polygon points="100,20 91.5147,28.4853 91.5147,11.5147" style="fill:rgb(112,128,144)" />
    </svg>
    "#);
}

#[test]
fn arc_head_follows_the_curve() {
    let style = ArrowStyle::default()
        .with_dotted(false)
        .with_curve_style(CurveStyle::Arc);
    let mut svg = SvgSurface::new(100.0, 30.0);
    render(&mut svg, pt(0.0, 0.0), pt(100.0, 0.0), &style);

    insta::assert_snapshot!(svg.body(), @r#"
    <path d="M0,0Q50,25 100,0" style="fill:none;stroke-width:2;stroke:rgb(112,128,144);stroke-linecap:round" />
    <polygon points="100,0 92.5405,9.39977 88.0045,0.327743" style="fill:rgb(112,128,144)" />
    "#);
}

#[test]
fn dashes_become_separate_paths() {
    let style = ArrowStyle::default()
        .with_curve_style(CurveStyle::Straight)
        .with_arrowhead(false)
        .with_line_cap(LineCap::Butt);
    let mut svg = SvgSurface::new(40.0, 10.0);
    render(&mut svg, pt(0.0, 0.0), pt(40.0, 0.0), &style);

    insta::assert_snapshot!(svg.body(), @r#"
    <path d="M0,0L8,0" style="fill:none;stroke-width:2;stroke:rgb(112,128,144);stroke-linecap:butt" />
    <path d="M14,0L22,0" style="fill:none;stroke-width:2;stroke:rgb(112,128,144);stroke-linecap:butt" />
    <path d="M28,0L36,0" style="fill:none;stroke-width:2;stroke:rgb(112,128,144);stroke-linecap:butt" />
    "#);
}

#[test]
fn translucent_hex_color() {
    let color: Rgba = "#ff000080".parse().unwrap();
    let style = ArrowStyle::solid_straight()
        .with_color(color)
        .with_thickness(1.5)
        .with_arrowhead(false);
    let mut svg = SvgSurface::new(10.0, 10.0);
    render(&mut svg, pt(0.0, 5.0), pt(10.0, 5.0), &style);

    insta::assert_snapshot!(svg.body().trim_end(), @r#"<path d="M0,5L10,5" style="fill:none;stroke-width:1.5;stroke:rgb(255,0,0);stroke-linecap:round;stroke-opacity:0.501961" />"#);
}
