// File: crates/dashplot-core/src/theme.rs
// Summary: Light/Dark theming and categorical palettes for chart rendering.

use crate::scene::Color;

/// d3 `schemeCategory10`.
pub const CATEGORY10: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

/// d3 `schemeTableau10`.
pub const TABLEAU10: [Color; 10] = [
    Color::rgb(0x4e, 0x79, 0xa7),
    Color::rgb(0xf2, 0x8e, 0x2c),
    Color::rgb(0xe1, 0x57, 0x59),
    Color::rgb(0x76, 0xb7, 0xb2),
    Color::rgb(0x59, 0xa1, 0x4f),
    Color::rgb(0xed, 0xc9, 0x49),
    Color::rgb(0xaf, 0x7a, 0xa1),
    Color::rgb(0xff, 0x9d, 0xa7),
    Color::rgb(0x9c, 0x75, 0x5f),
    Color::rgb(0xba, 0xb0, 0xab),
];

/// Donut slice colors.
pub const DONUT_PRESET: [Color; 3] = [
    Color::rgb(0x63, 0x66, 0xf1),
    Color::rgb(0x8b, 0x5c, 0xf6),
    Color::rgb(0x06, 0xb6, 0xd4),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Value labels, legend entries, donut total.
    pub text: Color,
    /// Axis titles and annotations.
    pub muted_text: Color,
    pub axis: Color,
    pub grid: Color,
    pub point: Color,
    pub trend: Color,
    pub slice_stroke: Color,
    pub error: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            text: Color::rgb(0x33, 0x33, 0x33),
            muted_text: Color::rgb(0x66, 0x66, 0x66),
            axis: Color::BLACK,
            grid: Color::BLACK,
            point: Color::rgb(0x46, 0x82, 0xb4),
            trend: Color::rgb(0xff, 0x6b, 0x6b),
            slice_stroke: Color::WHITE,
            error: Color::rgb(0xe5, 0x3e, 0x3e),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            text: Color::rgb(235, 235, 245),
            muted_text: Color::rgb(150, 150, 160),
            axis: Color::rgb(180, 180, 190),
            grid: Color::rgb(120, 120, 130),
            point: Color::rgb(64, 160, 255),
            trend: Color::rgb(255, 120, 120),
            slice_stroke: Color::rgb(18, 18, 20),
            error: Color::rgb(240, 90, 90),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
