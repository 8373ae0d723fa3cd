// File: crates/dashplot-render-skia/src/lib.rs
// Summary: Skia raster backend for dashplot scenes (CPU surfaces + text shaping).

pub mod raster;
pub mod text;

pub use raster::{render_to_png, render_to_png_bytes, PngWriter};
pub use text::TextShaper;
