// File: crates/dashplot-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, chart dimensions).

/// Default surface width in pixels.
pub const WIDTH: u32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;
/// Charts never render shorter than this.
pub const MIN_HEIGHT: u32 = 500;

/// Space around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(40, 30, 60, 60)
    }
}

/// Outer size of a chart plus its margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl Dimensions {
    /// Height is raised to `MIN_HEIGHT` when smaller.
    pub fn new(width: u32, height: u32, margin: Margin) -> Self {
        Self { width, height: height.max(MIN_HEIGHT), margin }
    }

    pub fn with_margin(self, margin: Margin) -> Self {
        Self { margin, ..self }
    }

    /// Plot width; zero when the margin is wider than the chart.
    pub fn inner_width(&self) -> f64 {
        self.width.saturating_sub(self.margin.hsum()) as f64
    }

    pub fn inner_height(&self) -> f64 {
        self.height.saturating_sub(self.margin.vsum()) as f64
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Margin::default())
    }
}
