// File: crates/dashplot-core/src/svg.rs
// Summary: Serializes a `Scene` to a standalone SVG document.

use std::fmt::{self, Write as _};
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::scene::{Node, PathCmd, PathData, Scene, Style, Text, TextAnchor};

/// Display adapter; `Svg(&scene).to_string()` yields the document.
pub struct Svg<'a>(pub &'a Scene);

pub fn to_string(scene: &Scene) -> String {
    Svg(scene).to_string()
}

/// Write `scene` to `path`, creating parent directories as needed.
pub fn write(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, to_string(scene)).map_err(io_err)
}

/// Shortest decimal with at most 3 fractional digits; never prints `-0`.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 || !r.is_finite() {
        return "0".to_string();
    }
    let s = format!("{r:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

fn escape(s: &str) -> String {
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

pub fn path_d(data: &PathData) -> String {
    let mut d = String::new();
    for cmd in &data.cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) => { let _ = write!(d, "M{},{}", num(x), num(y)); }
            PathCmd::LineTo(x, y) => { let _ = write!(d, "L{},{}", num(x), num(y)); }
            PathCmd::CubicTo(x1, y1, x2, y2, x, y) => {
                let _ = write!(d, "C{},{},{},{},{},{}", num(x1), num(y1), num(x2), num(y2), num(x), num(y));
            }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

fn style_attrs(f: &mut fmt::Formatter<'_>, style: &Style) -> fmt::Result {
    match style.fill {
        Some(c) => {
            write!(f, r#" fill="{}""#, c.to_hex())?;
            if c.a < 255 {
                write!(f, r#" fill-opacity="{}""#, num(c.a as f64 / 255.0))?;
            }
        }
        None => f.write_str(r#" fill="none""#)?,
    }
    if let Some(c) = style.stroke {
        write!(f, r#" stroke="{}" stroke-width="{}""#, c.to_hex(), num(style.stroke_width))?;
        if c.a < 255 {
            write!(f, r#" stroke-opacity="{}""#, num(c.a as f64 / 255.0))?;
        }
    }
    if let Some(dash) = &style.dash {
        let parts = dash.iter().map(|v| num(*v)).collect::<Vec<_>>().join(",");
        write!(f, r#" stroke-dasharray="{parts}""#)?;
    }
    if style.opacity < 1.0 {
        write!(f, r#" opacity="{}""#, num(style.opacity))?;
    }
    Ok(())
}

fn write_text(f: &mut fmt::Formatter<'_>, t: &Text, indent: &str) -> fmt::Result {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    if t.rotate != 0.0 {
        write!(
            f,
            r#"{indent}<text transform="translate({},{}) rotate({})" x="{}" y="{}""#,
            num(t.x), num(t.y), num(t.rotate), num(t.dx), num(t.dy)
        )?;
    } else {
        write!(f, r#"{indent}<text x="{}" y="{}""#, num(t.x + t.dx), num(t.y + t.dy))?;
    }
    write!(f, r#" text-anchor="{anchor}" font-size="{}""#, num(t.font_size))?;
    if t.bold {
        f.write_str(r#" font-weight="bold""#)?;
    }
    style_attrs(f, &t.style)?;
    writeln!(f, ">{}</text>", escape(&t.content))
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        Node::Group { translate, class, children } => {
            write!(f, "{indent}<g")?;
            if let Some(c) = class {
                write!(f, r#" class="{}""#, escape(c))?;
            }
            if *translate != (0.0, 0.0) {
                write!(f, r#" transform="translate({},{})""#, num(translate.0), num(translate.1))?;
            }
            writeln!(f, ">")?;
            for c in children {
                write_node(f, c, depth + 1)?;
            }
            writeln!(f, "{indent}</g>")
        }
        Node::Rect { x, y, width, height, rx, style } => {
            write!(
                f,
                r#"{indent}<rect x="{}" y="{}" width="{}" height="{}""#,
                num(*x), num(*y), num(width.max(0.0)), num(height.max(0.0))
            )?;
            if *rx > 0.0 {
                write!(f, r#" rx="{}""#, num(*rx))?;
            }
            style_attrs(f, style)?;
            writeln!(f, "/>")
        }
        Node::Line { x1, y1, x2, y2, style } => {
            write!(
                f,
                r#"{indent}<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                num(*x1), num(*y1), num(*x2), num(*y2)
            )?;
            style_attrs(f, style)?;
            writeln!(f, "/>")
        }
        Node::Path { data, style } => {
            write!(f, r#"{indent}<path d="{}""#, path_d(data))?;
            style_attrs(f, style)?;
            writeln!(f, "/>")
        }
        Node::Circle { cx, cy, r, style } => {
            write!(f, r#"{indent}<circle cx="{}" cy="{}" r="{}""#, num(*cx), num(*cy), num(*r))?;
            style_attrs(f, style)?;
            writeln!(f, "/>")
        }
        Node::Text(t) => write_text(f, t, &indent),
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let (w, h) = (num(s.width), num(s.height));
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" class="d3-chart" font-family="sans-serif">"#
        )?;
        if let Some(bg) = s.background {
            writeln!(f, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.to_hex())?;
        }
        for n in &s.nodes {
            write_node(f, n, 1)?;
        }
        writeln!(f, "</svg>")
    }
}
