// File: crates/dashplot-render-skia/tests/png.rs
// Purpose: PNG backend smoke tests plus a golden snapshot with bless flow.
// Behavior:
// - The golden scene has no text, so it does not depend on installed fonts.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels exactly.
// - Else, logs a note and returns (skips) without failing.

use std::path::PathBuf;

use dashplot_core::dashboard::BAR_ID;
use dashplot_core::scene::{PathData, Style};
use dashplot_core::{Color, Dashboard, Node, Scene, SceneWriter};
use dashplot_render_skia::{render_to_png_bytes, PngWriter, TextShaper};

fn shapes_scene() -> Scene {
    let mut scene = Scene::new(120.0, 80.0);
    scene.background = Some(Color::WHITE);
    let red = Color::rgb(0xe1, 0x57, 0x59);
    let blue = Color::rgb(0x46, 0x82, 0xb4);
    let mut line = PathData::new();
    line.move_to(0.0, 40.0).cubic_to(30.0, 0.0, 60.0, 80.0, 100.0, 40.0);
    scene.push(Node::group(
        (10.0, 10.0),
        "plot",
        vec![
            Node::rect(0.0, 0.0, 30.0, 30.0, Style::fill(red)),
            Node::circle(70.0, 20.0, 8.0, Style::fill(blue).with_opacity(0.8)),
            Node::path(line, Style::stroke(Color::BLACK, 2.0).dashed(&[5.0, 5.0])),
        ],
    ));
    scene
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

#[test]
fn png_matches_scene_size_and_paints_shapes() {
    let bytes = render_to_png_bytes(&shapes_scene(), &TextShaper::new()).expect("render");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (120, 80));
    assert_eq!(img.get_pixel(119, 79).0, [255, 255, 255, 255]);
    // inside the rect, offset by the group translation
    assert_eq!(img.get_pixel(25, 25).0, [0xe1, 0x57, 0x59, 255]);
}

#[test]
fn empty_scene_is_an_error() {
    assert!(render_to_png_bytes(&Scene::new(0.0, 10.0), &TextShaper::new()).is_err());
}

#[test]
fn shaper_measures_without_panicking() {
    let shaper = TextShaper::new();
    assert_eq!(shaper.measure_width("", 12.0, false), 0.0);
    assert!(shaper.measure_width("WWWW", 12.0, true) >= shaper.measure_width("W", 12.0, true));
}

#[test]
fn png_writer_exports_dashboard_charts() {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("png_export");
    let mut dash = Dashboard::default();
    dash.load_sample_data();
    let writer = PngWriter::new();
    assert_eq!(writer.extension(), "png");
    let path = dash.export(BAR_ID, &dir, &writer).expect("export png");
    assert_eq!(path, dir.join("chart1.png"));
    let img = decode(&std::fs::read(&path).expect("read png"));
    assert_eq!(img.dimensions(), (dash.width, dash.height));
}

#[test]
fn golden_shapes() {
    let bytes = render_to_png_bytes(&shapes_scene(), &TextShaper::new()).expect("render");
    let snap_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("shapes.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // decoded pixels, not bytes: PNG encoders may differ
        assert_eq!(
            decode(&bytes).as_raw(),
            decode(&want).as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
