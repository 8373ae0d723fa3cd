// File: crates/dashplot-core/src/bar.rs
// Summary: Vertical bar chart over labeled categories with value labels.

use crate::axis::{Axis, AxisOrient};
use crate::chart::{message_scene, plot_scene, x_title, y_title, AxisLabels};
use crate::data::Category;
use crate::scale::{BandScale, LinearScale, OrdinalScale};
use crate::scene::{Node, Scene, Style, Text, TextAnchor};
use crate::theme::{Theme, CATEGORY10};
use crate::types::{Dimensions, Margin};

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub data: Vec<Category>,
    pub labels: AxisLabels,
}

impl BarChart {
    pub const MARGIN: Margin = Margin::new(40, 30, 60, 60);
    pub const PADDING: f64 = 0.1;

    pub fn new(data: Vec<Category>) -> Self {
        Self { data, labels: AxisLabels::new("Category", "Value") }
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.labels = AxisLabels::new(x, y);
        self
    }

    pub fn update_data(&mut self, data: Vec<Category>) {
        self.data = data;
    }

    pub fn render(&self, width: u32, height: u32, theme: &Theme) -> Scene {
        let dims = Dimensions::new(width, height, Self::MARGIN);
        if self.data.is_empty() {
            return message_scene(dims, "No data available for bar chart", theme.muted_text, theme);
        }
        let (iw, ih) = (dims.inner_width(), dims.inner_height());
        let m = dims.margin;

        let labels = self.data.iter().map(|c| c.label.clone()).collect::<Vec<_>>();
        let x = BandScale::new(labels.clone(), (0.0, iw), Self::PADDING);
        let max = self
            .data
            .iter()
            .map(|c| c.value)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let y = LinearScale::new((0.0, max), (ih, 0.0));
        let mut colors = OrdinalScale::with_domain(&CATEGORY10, labels);

        let mut g = Vec::new();
        g.push(
            Axis::band(AxisOrient::Bottom, &x)
                .with_label_rotation(-45.0)
                .render((0.0, ih), "x-axis", theme.axis),
        );
        g.push(Axis::linear(AxisOrient::Left, &y, 10).render((0.0, 0.0), "y-axis", theme.axis));

        g.push(Node::Text(y_title(&self.labels.y, -(m.left as f64), ih, theme.muted_text).shift_em(0.0, 1.0)));
        g.push(Node::Text(x_title(&self.labels.x, iw, ih + m.bottom as f64 - 10.0, theme.muted_text)));

        let bw = x.bandwidth();
        let mut bars = Vec::with_capacity(self.data.len());
        let mut values = Vec::with_capacity(self.data.len());
        for (i, c) in self.data.iter().enumerate() {
            let v = if c.value.is_finite() { c.value } else { 0.0 };
            let top = y.map(v);
            let style = Style::fill(colors.color(&c.label)).with_opacity(0.8);
            bars.push(Node::rect(x.at(i), top, bw, ih - top, style));
            values.push(Node::Text(
                Text::new(x.center(i), top - 5.0, format!("{:.2}", c.value), 11.0, theme.text)
                    .anchor(TextAnchor::Middle),
            ));
        }
        g.push(Node::group((0.0, 0.0), "bars", bars));
        g.push(Node::group((0.0, 0.0), "value-labels", values));

        let mut scene = plot_scene(&dims, theme);
        scene.push(Node::group((m.left as f64, m.top as f64), "plot", g));
        scene
    }
}
