// File: crates/dashplot-render-skia/src/raster.rs
// Summary: Headless PNG rendering of a dashplot `Scene` using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use dashplot_core::scene::{Color, Node, PathCmd, PathData, Scene, Style, Text};
use dashplot_core::{ChartError, SceneWriter};

use crate::text::TextShaper;

fn to_skia(c: Color, opacity: f64) -> skia::Color {
    let a = (c.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn to_path(data: &PathData) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in &data.cmds {
        match *cmd {
            PathCmd::MoveTo(x, y) => { path.move_to((x as f32, y as f32)); }
            PathCmd::LineTo(x, y) => { path.line_to((x as f32, y as f32)); }
            PathCmd::CubicTo(x1, y1, x2, y2, x, y) => {
                path.cubic_to((x1 as f32, y1 as f32), (x2 as f32, y2 as f32), (x as f32, y as f32));
            }
            PathCmd::Close => { path.close(); }
        }
    }
    path
}

fn fill_paint(style: &Style) -> Option<skia::Paint> {
    let c = style.fill?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(c, style.opacity));
    Some(paint)
}

fn stroke_paint(style: &Style) -> Option<skia::Paint> {
    let c = style.stroke?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.stroke_width as f32);
    paint.set_color(to_skia(c, style.opacity));
    if let Some(dash) = &style.dash {
        let intervals = dash.iter().map(|v| *v as f32).collect::<Vec<_>>();
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    Some(paint)
}

/// Fill first, then stroke, like SVG.
fn paints(style: &Style) -> impl Iterator<Item = skia::Paint> {
    fill_paint(style).into_iter().chain(stroke_paint(style))
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, t: &Text) {
    let Some(fill) = t.style.fill else { return };
    canvas.save();
    canvas.translate((t.x as f32, t.y as f32));
    if t.rotate != 0.0 {
        canvas.rotate(t.rotate as f32, None);
    }
    shaper.draw(
        canvas,
        &t.content,
        (t.dx as f32, t.dy as f32),
        t.anchor,
        t.font_size as f32,
        to_skia(fill, t.style.opacity),
        t.bold,
    );
    canvas.restore();
}

fn draw_node(canvas: &skia::Canvas, shaper: &TextShaper, node: &Node) {
    match node {
        Node::Group { translate, children, .. } => {
            canvas.save();
            canvas.translate((translate.0 as f32, translate.1 as f32));
            for c in children {
                draw_node(canvas, shaper, c);
            }
            canvas.restore();
        }
        Node::Rect { x, y, width, height, rx, style } => {
            let rect = skia::Rect::from_xywh(*x as f32, *y as f32, width.max(0.0) as f32, height.max(0.0) as f32);
            for paint in paints(style) {
                if *rx > 0.0 {
                    canvas.draw_round_rect(rect, *rx as f32, *rx as f32, &paint);
                } else {
                    canvas.draw_rect(rect, &paint);
                }
            }
        }
        Node::Line { x1, y1, x2, y2, style } => {
            if let Some(paint) = stroke_paint(style) {
                canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
            }
        }
        Node::Path { data, style } => {
            let path = to_path(data);
            for paint in paints(style) {
                canvas.draw_path(&path, &paint);
            }
        }
        Node::Circle { cx, cy, r, style } => {
            for paint in paints(style) {
                canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, &paint);
            }
        }
        Node::Text(t) => draw_text(canvas, shaper, t),
    }
}

/// Rasterize `scene` and encode it as PNG.
pub fn render_to_png_bytes(scene: &Scene, shaper: &TextShaper) -> Result<Vec<u8>> {
    let (w, h) = (scene.width.ceil() as i32, scene.height.ceil() as i32);
    if w <= 0 || h <= 0 {
        return Err(anyhow!("empty scene ({w}x{h})"));
    }
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(scene.background.map_or(skia::Color::TRANSPARENT, |c| to_skia(c, 1.0)));
    for node in &scene.nodes {
        draw_node(canvas, shaper, node);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG at `path`, creating parent directories.
pub fn render_to_png(scene: &Scene, shaper: &TextShaper, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_to_png_bytes(scene, shaper)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), "wrote PNG");
    Ok(())
}

/// `SceneWriter` producing `.png` files.
#[derive(Default)]
pub struct PngWriter {
    shaper: TextShaper,
}

impl PngWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneWriter for PngWriter {
    fn extension(&self) -> &'static str { "png" }

    fn write(&self, scene: &Scene, path: &Path) -> dashplot_core::Result<()> {
        render_to_png(scene, &self.shaper, path).map_err(|e| ChartError::Render {
            path: path.to_path_buf(),
            message: format!("{e:#}"),
        })
    }
}
