// File: crates/dashplot-core/src/donut.rs
// Summary: Donut / pie chart with centroid labels, bottom-left legend and optional center total.

use crate::chart::{message_scene, plot_scene};
use crate::data::Category;
use crate::geometry::{arc_centroid, arc_path, pie};
use crate::scale::OrdinalScale;
use crate::scene::{Color, Node, Scene, Style, Text, TextAnchor};
use crate::source::format_number;
use crate::theme::{Theme, DONUT_PRESET};
use crate::types::{Dimensions, Margin};

/// Hole size of the donut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InnerRadius {
    /// Absolute radius in pixels.
    Fixed(f64),
    /// Fraction of the outer radius.
    Ratio(f64),
}

impl InnerRadius {
    pub fn resolve(self, outer: f64) -> f64 {
        match self {
            InnerRadius::Fixed(r) => r.clamp(0.0, outer),
            InnerRadius::Ratio(k) => outer * k.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutChart {
    pub data: Vec<Category>,
    pub inner_radius: InnerRadius,
    pub show_total: bool,
}

impl DonutChart {
    pub const MARGIN: Margin = Margin::new(40, 20, 40, 20);
    pub const DEFAULT_INNER_RADIUS: f64 = 50.0;
    const LEGEND_ROW: f64 = 20.0;

    pub fn new(data: Vec<Category>) -> Self {
        Self { data, inner_radius: InnerRadius::Fixed(Self::DEFAULT_INNER_RADIUS), show_total: false }
    }

    pub fn update_data(&mut self, data: Vec<Category>) {
        self.data = data;
    }

    /// Hole of `ratio`·outer radius; `show_total` prints the value sum in the middle.
    pub fn set_donut_mode(&mut self, ratio: f64, show_total: bool) {
        self.inner_radius = InnerRadius::Ratio(ratio);
        self.show_total = show_total;
    }

    /// Solid pie without a center total.
    pub fn set_pie_mode(&mut self) {
        self.inner_radius = InnerRadius::Fixed(0.0);
        self.show_total = false;
    }

    /// Sum of the finite values.
    pub fn total(&self) -> f64 {
        self.data.iter().map(|c| c.value).filter(|v| v.is_finite()).sum()
    }

    /// Outer radius for a chart of the given size.
    pub fn outer_radius(dims: &Dimensions) -> f64 {
        (dims.inner_width().min(dims.inner_height()) / 2.0 - 20.0).max(0.0)
    }

    pub fn render(&self, width: u32, height: u32, theme: &Theme) -> Scene {
        let dims = Dimensions::new(width, height, Self::MARGIN);
        if self.data.is_empty() {
            return message_scene(dims, "No data available for donut chart", theme.muted_text, theme);
        }
        let outer = Self::outer_radius(&dims);
        let inner = self.inner_radius.resolve(outer);
        let mut colors = OrdinalScale::with_domain(&DONUT_PRESET, self.data.iter().map(|c| c.label.clone()));

        let values = self.data.iter().map(|c| c.value).collect::<Vec<_>>();
        let mut arcs = Vec::with_capacity(self.data.len());
        for slice in pie(&values) {
            let c = &self.data[slice.index];
            let style = Style::fill(colors.color(&c.label))
                .with_stroke(theme.slice_stroke, 2.0)
                .with_opacity(0.8);
            let (cx, cy) = arc_centroid(inner, outer, slice.start_angle, slice.end_angle);
            let label = Text::new(cx, cy, c.label.clone(), 12.0, Color::WHITE)
                .anchor(TextAnchor::Middle)
                .shift_em(0.0, 0.35)
                .bold();
            arcs.push(Node::group(
                (0.0, 0.0),
                "arc",
                vec![
                    Node::path(arc_path(inner, outer, slice.start_angle, slice.end_angle), style),
                    Node::Text(label),
                ],
            ));
        }
        if self.show_total {
            let total = format_number(self.total());
            arcs.push(Node::Text(
                Text::new(0.0, 0.0, format!("{total}%"), 24.0, theme.text)
                    .anchor(TextAnchor::Middle)
                    .shift_em(0.0, 0.35)
                    .bold(),
            ));
            arcs.push(Node::Text(
                Text::new(0.0, 0.0, "Total", 12.0, theme.muted_text)
                    .anchor(TextAnchor::Middle)
                    .shift_em(0.0, 1.5),
            ));
        }

        let n = self.data.len() as f64;
        let legend_top = dims.height as f64 - dims.margin.bottom as f64 - n * Self::LEGEND_ROW;
        let items = self
            .data
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let swatch = Node::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 12.0,
                    height: 12.0,
                    rx: 2.0,
                    style: Style::fill(colors.color(&c.label)),
                };
                let text = Text::new(18.0, 6.0, format!("{} ({:.1})", c.label, c.value), 11.0, theme.text)
                    .shift_em(0.0, 0.35);
                Node::group((0.0, i as f64 * Self::LEGEND_ROW), "legend-item", vec![swatch, Node::Text(text)])
            })
            .collect();

        let mut scene = plot_scene(&dims, theme);
        scene.push(Node::group((dims.width as f64 / 2.0, dims.height as f64 / 2.0), "arcs", arcs));
        scene.push(Node::group((20.0, legend_top), "legend", items));
        scene
    }
}
