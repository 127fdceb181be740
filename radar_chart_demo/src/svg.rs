// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a `RetainedSurface`.

use kurbo::Size;
use peniko::Brush;
use radar_core::{Mark, MarkPayload, RetainedSurface, TextAnchor, TextBaseline, TextMark};

const GLOW_FILTER: &str = r#"<defs><filter id="glow"><feGaussianBlur stdDeviation="2.5" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter></defs>"#;

/// Serializes the live marks of `surface`, in paint order.
pub(crate) fn to_svg_string(surface: &RetainedSurface) -> String {
    let canvas = surface.canvas().unwrap_or(Size::new(100.0, 100.0));
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="radar" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    ));
    out.push('\n');
    out.push_str(GLOW_FILTER);
    out.push('\n');

    for mark in surface.marks_in_paint_order() {
        write_mark(&mut out, mark);
    }

    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            out.push_str(&format!(
                r#"<rect data-id="{}" x="{}" y="{}" width="{}" height="{}""#,
                mark.id.raw(),
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_paint_attr(out, "fill", Some(&r.fill), r.fill_opacity);
            out.push_str("/>\n");
        }
        MarkPayload::Circle(c) => {
            out.push_str(&format!(
                r#"<circle data-id="{}" cx="{}" cy="{}" r="{}""#,
                mark.id.raw(),
                c.circle.center.x,
                c.circle.center.y,
                c.circle.radius,
            ));
            write_paint_attr(out, "fill", c.fill.as_ref(), c.fill_opacity);
            if c.stroke.is_some() {
                write_paint_attr(out, "stroke", c.stroke.as_ref(), 1.0);
                out.push_str(&format!(r#" stroke-width="{}""#, c.stroke_width));
            }
            write_common(out, mark, c.glow);
            out.push_str("/>\n");
        }
        MarkPayload::Path(p) => {
            out.push_str(&format!(
                r#"<path data-id="{}" d="{}""#,
                mark.id.raw(),
                p.path.to_svg()
            ));
            write_paint_attr(out, "fill", p.fill.as_ref(), p.fill_opacity);
            if p.stroke.is_some() {
                write_paint_attr(out, "stroke", p.stroke.as_ref(), 1.0);
                out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
            }
            write_common(out, mark, p.glow);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => write_text(out, mark, t),
    }
}

fn write_text(out: &mut String, mark: &Mark, t: &TextMark) {
    let baseline = match t.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
    };
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    out.push_str(&format!(
        r#"<text data-id="{}" x="{}" y="{}" font-size="{}px" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
        mark.id.raw(),
        t.pos.x,
        t.pos.y,
        t.font_size,
    ));
    write_paint_attr(out, "fill", Some(&t.fill), 1.0);
    if !t.visible {
        out.push_str(r#" display="none""#);
    }
    write_common(out, mark, false);
    out.push('>');
    for line in &t.lines {
        out.push_str(&format!(
            r#"<tspan x="{}" y="{}" dy="{}em">{}</tspan>"#,
            t.pos.x,
            t.pos.y,
            line.dy,
            escape_xml(&line.text)
        ));
    }
    out.push_str("</text>\n");
}

fn write_common(out: &mut String, mark: &Mark, glow: bool) {
    if glow {
        out.push_str(r#" filter="url(#glow)""#);
    }
    if mark.interactive {
        out.push_str(r#" pointer-events="all""#);
    }
}

fn svg_paint(brush: &Brush) -> (String, f64) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            (paint, f64::from(rgba.a) / 255.0)
        }
        _ => ("none".to_string(), 1.0),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: Option<&Brush>, opacity: f64) {
    let Some(brush) = brush else {
        out.push_str(&format!(r#" {name}="none""#));
        return;
    };
    let (value, alpha) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    let opacity = alpha * opacity;
    if opacity < 1.0 {
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
