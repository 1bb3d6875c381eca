use std::fmt::Write as _;

use kurbo::Affine;

use crate::{
    foundation::error::{WardrobeError, WardrobeResult},
    scene::{
        color::Color,
        model::{GradientKind, LineCap, LineJoin, Node, Paint, PaintDef, Scene, Shape, Style},
    },
};

const XML_DECL: &str = "<?xml version='1.0' encoding='UTF-8'?>\n";

impl Scene {
    /// Serializes to standalone SVG text. Validation runs first, so the output never references
    /// an unregistered gradient.
    pub fn to_svg(&self) -> WardrobeResult<String> {
        self.validate()?;

        let mut out = String::with_capacity(4096);
        write_scene(&mut out, self)
            .map_err(|e| WardrobeError::serde(format!("format svg: {e}")))?;
        Ok(out)
    }
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Formats a coordinate without a trailing `.0` and with at most three decimals.
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn write_scene(out: &mut String, scene: &Scene) -> std::fmt::Result {
    out.push_str(XML_DECL);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    )?;

    out.push_str("<defs>\n");
    for def in &scene.defs {
        write_paint_def(out, def)?;
    }
    out.push_str("</defs>\n");

    for node in &scene.nodes {
        write_node(out, node, 0)?;
    }

    out.push_str("</svg>\n");
    Ok(())
}

fn write_paint_def(out: &mut String, def: &PaintDef) -> std::fmt::Result {
    let id = escape_attr(&def.id);
    let tag = match def.kind {
        GradientKind::Linear => {
            writeln!(
                out,
                r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%">"#
            )?;
            "linearGradient"
        }
        GradientKind::Radial => {
            writeln!(out, r#"<radialGradient id="{id}" cx="50%" cy="50%" r="50%">"#)?;
            "radialGradient"
        }
    };
    for stop in &def.stops {
        writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
            fmt_num(stop.offset_pct),
            stop.color,
            fmt_num(stop.color.alpha())
        )?;
    }
    writeln!(out, "</{tag}>")
}

fn write_node(out: &mut String, node: &Node, depth: usize) -> std::fmt::Result {
    let indent = "  ".repeat(depth + 1);
    match node {
        Node::Group(g) => {
            out.push_str(&indent);
            out.push_str("<g");
            write_transform(out, g.transform)?;
            out.push_str(">\n");
            for child in &g.children {
                write_node(out, child, depth + 1)?;
            }
            out.push_str(&indent);
            out.push_str("</g>\n");
        }
        Node::Shape { shape, style } => {
            out.push_str(&indent);
            write_shape(out, shape)?;
            write_style(out, style)?;
            out.push_str("/>\n");
        }
    }
    Ok(())
}

fn write_transform(out: &mut String, t: Affine) -> std::fmt::Result {
    let [a, b, c, d, e, f] = t.as_coeffs();
    if t == Affine::IDENTITY {
        return Ok(());
    }
    if a == 1.0 && b == 0.0 && c == 0.0 && d == 1.0 {
        return write!(out, r#" transform="translate({},{})""#, fmt_num(e), fmt_num(f));
    }
    write!(
        out,
        r#" transform="matrix({} {} {} {} {} {})""#,
        fmt_num(a),
        fmt_num(b),
        fmt_num(c),
        fmt_num(d),
        fmt_num(e),
        fmt_num(f)
    )
}

fn write_shape(out: &mut String, shape: &Shape) -> std::fmt::Result {
    match shape {
        Shape::Path(p) => write!(out, r#"<path d="{}""#, escape_attr(&p.to_svg())),
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height)
            )?;
            if *rx > 0.0 {
                write!(out, r#" rx="{}""#, fmt_num(*rx))?;
            }
            Ok(())
        }
        Shape::Circle { center, r } => write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*r)
        ),
        Shape::Ellipse { center, rx, ry } => write!(
            out,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*rx),
            fmt_num(*ry)
        ),
        Shape::Line { from, to } => write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y)
        ),
        Shape::Polygon(points) => {
            out.push_str(r#"<polygon points=""#);
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y))?;
            }
            out.push('"');
            Ok(())
        }
    }
}

fn write_style(out: &mut String, style: &Style) -> std::fmt::Result {
    write_paint(out, "fill", &style.fill)?;
    if style.stroke != Paint::None {
        write_paint(out, "stroke", &style.stroke)?;
        write!(out, r#" stroke-width="{}""#, fmt_num(style.stroke_width))?;
        if style.line_cap == LineCap::Round {
            out.push_str(r#" stroke-linecap="round""#);
        }
        if style.line_join == LineJoin::Round {
            out.push_str(r#" stroke-linejoin="round""#);
        }
    }
    if style.opacity < 1.0 {
        write!(out, r#" opacity="{}""#, fmt_num(style.opacity.max(0.0)))?;
    }
    Ok(())
}

fn write_paint(out: &mut String, attr: &str, paint: &Paint) -> std::fmt::Result {
    match paint {
        Paint::None => write!(out, r#" {attr}="none""#),
        Paint::Solid(c) => write_solid(out, attr, *c),
        Paint::Gradient(id) => write!(out, r##" {attr}="url(#{})""##, escape_attr(id)),
    }
}

fn write_solid(out: &mut String, attr: &str, c: Color) -> std::fmt::Result {
    write!(out, r#" {attr}="{c}""#)?;
    if !c.is_opaque() {
        write!(out, r#" {attr}-opacity="{}""#, fmt_num(c.alpha()))?;
    }
    Ok(())
}
