// File: crates/dashplot-core/src/line.rs
// Summary: Multi-series line chart over a categorical x axis with a legend row.

use crate::axis::{Axis, AxisOrient};
use crate::chart::{message_scene, plot_scene, x_title, y_title, AxisLabels};
use crate::data::LineTable;
use crate::geometry::{defined_runs, monotone_x_path};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Node, Scene, Style, Text};
use crate::theme::{Theme, TABLEAU10};
use crate::types::{Dimensions, Margin};

/// Horizontal distance between legend entries.
const LEGEND_SPACING: f64 = 120.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub data: LineTable,
    pub labels: AxisLabels,
}

impl LineChart {
    pub const MARGIN: Margin = Margin::new(40, 30, 60, 60);

    pub fn new(data: LineTable) -> Self {
        Self { data, labels: AxisLabels::new("Category", "Value") }
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.labels = AxisLabels::new(x, y);
        self
    }

    pub fn update_data(&mut self, data: LineTable) {
        self.data = data;
    }

    pub fn render(&self, width: u32, height: u32, theme: &Theme) -> Scene {
        let dims = Dimensions::new(width, height, Self::MARGIN);
        if self.data.is_empty() {
            return message_scene(dims, "No data available for line chart", theme.muted_text, theme);
        }
        let (iw, ih) = (dims.inner_width(), dims.inner_height());
        let m = dims.margin;

        let x = BandScale::new(self.data.categories.clone(), (0.0, iw), 0.1);
        let max = self.data.max_value().unwrap_or(0.0).max(0.0);
        let y = LinearScale::new((0.0, max), (ih, 0.0)).nice(10);

        let mut g = vec![
            Axis::band(AxisOrient::Bottom, &x).render((0.0, ih), "x-axis", theme.axis),
            Axis::linear(AxisOrient::Left, &y, 10).render((0.0, 0.0), "y-axis", theme.axis),
            Node::Text(y_title(&self.labels.y, -(m.left as f64) + 20.0, ih, theme.text)),
            Node::Text(x_title(&self.labels.x, iw, ih + m.bottom as f64 - 10.0, theme.text)),
        ];

        let mut lines = Vec::with_capacity(self.data.series.len());
        for (i, s) in self.data.series.iter().enumerate() {
            let color = TABLEAU10[i % TABLEAU10.len()];
            let points = (0..self.data.categories.len())
                .map(|j| {
                    let v = s.values.get(j).copied().unwrap_or(f64::NAN);
                    (x.center(j), if v.is_finite() { y.map(v) } else { f64::NAN })
                })
                .collect::<Vec<_>>();
            for run in defined_runs(&points) {
                lines.push(Node::path(monotone_x_path(&run), Style::stroke(color, 2.0)));
            }
        }
        g.push(Node::group((0.0, 0.0), "line-series", lines));

        let legend = self
            .data
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let color = TABLEAU10[i % TABLEAU10.len()];
                Node::Text(Text::new(i as f64 * LEGEND_SPACING, 0.0, s.name.clone(), 12.0, color))
            })
            .collect();

        let mut scene = plot_scene(&dims, theme);
        scene.push(Node::group((m.left as f64, m.top as f64), "plot", g));
        scene.push(Node::group((m.left as f64, 20.0), "legend", legend));
        scene
    }
}
