use std::fmt::Write as _;

use crate::scene::gradient::{GradientAxis, GradientSpec};
use crate::scene::snapshot::SceneSnapshot;

/// Id of the horizontal-only blur filter applied to every shape.
pub const EDGE_BLUR_FILTER_ID: &str = "edgeBlur";

const PANEL_FILL: &str = "#FFFFFF";

/// Serialize a snapshot into a standalone SVG document.
///
/// Paint order is background, shapes (in snapshot order), glide, panel.
pub fn to_svg(snapshot: &SceneSnapshot) -> String {
    let w = snapshot.viewport.width;
    let h = snapshot.viewport.height;
    let mut out = String::with_capacity(4096);

    // `write!` into a String cannot fail.
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    out.push_str("<defs>");
    write_gradient(&mut out, &snapshot.background);
    for g in &snapshot.gradients {
        write_gradient(&mut out, g);
    }
    let _ = write!(
        out,
        r#"<filter id="{EDGE_BLUR_FILTER_ID}" x="-250%" y="0%" width="550%" height="100%"><feGaussianBlur in="SourceGraphic" stdDeviation="{},0"/></filter>"#,
        fmt_num(snapshot.blur_std_dev)
    );
    out.push_str("</defs>");

    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="url(#{})"/>"#,
        snapshot.background.id
    );

    for shape in &snapshot.shapes {
        let _ = write!(
            out,
            r#"<path class="shape {side}" d="{d}" fill="url(#{id})" opacity="{op}" filter="url(#{EDGE_BLUR_FILTER_ID})"/>"#,
            side = shape.side.as_str(),
            d = shape.path.to_svg(),
            id = shape.gradient_id,
            op = fmt_num(shape.opacity),
        );
    }

    if let Some(glide) = &snapshot.glide {
        let _ = write!(
            out,
            r#"<circle class="glide" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(glide.center.x),
            fmt_num(glide.center.y),
            fmt_num(glide.radius),
            glide.fill
        );
    }

    if let Some(panel) = &snapshot.panel {
        let r = panel.shape.rect();
        let _ = write!(
            out,
            r#"<rect class="panel" x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{PANEL_FILL}" opacity="{}"/>"#,
            fmt_num(r.x0),
            fmt_num(r.y0),
            fmt_num(r.width()),
            fmt_num(r.height()),
            fmt_num(panel.shape.radii().top_left),
            fmt_num(panel.opacity)
        );
    }

    out.push_str("</svg>");
    out
}

fn write_gradient(out: &mut String, g: &GradientSpec) {
    let (x2, y2) = match g.axis {
        GradientAxis::Horizontal => ("100%", "0%"),
        GradientAxis::Vertical => ("0%", "100%"),
    };
    let _ = write!(
        out,
        r#"<linearGradient id="{}" x1="0%" y1="0%" x2="{x2}" y2="{y2}">"#,
        g.id
    );
    for stop in &g.stops {
        let _ = write!(
            out,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            fmt_num(stop.offset * 100.0),
            stop.color
        );
    }
    out.push_str("</linearGradient>");
}

/// Fixed precision keeps documents stable across platforms; trailing zeros are dropped.
fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
