// File: crates/dashplot-core/src/scatter.rs
// Summary: Scatter plot over (x, y) samples with dashed grid and optional regression overlay.

use crate::axis::{Axis, AxisOrient};
use crate::chart::{message_scene, plot_scene, x_title, y_title, AxisLabels};
use crate::overlay::{Overlay, OverlayContext, TrendLine};
use crate::scale::LinearScale;
use crate::scene::{Node, Scene, Style};
use crate::stats::{extent, Sample};
use crate::theme::Theme;
use crate::types::{Dimensions, Margin};

pub const NO_DATA: &str = "No data available for scatter plot";

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
    pub data: Vec<Sample>,
    pub labels: AxisLabels,
    pub show_trend_line: bool,
}

impl ScatterPlot {
    pub const MARGIN: Margin = Margin::new(40, 100, 60, 60);
    pub const POINT_RADIUS: f64 = 4.0;

    pub fn new(data: Vec<Sample>) -> Self {
        Self { data, labels: AxisLabels::new("x", "y"), show_trend_line: false }
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.labels = AxisLabels::new(x, y);
        self
    }

    pub fn with_trend_line(mut self, on: bool) -> Self {
        self.show_trend_line = on;
        self
    }

    pub fn update_data(&mut self, data: Vec<Sample>) {
        self.data = data;
    }

    /// Flip the trend line; returns the new state.
    pub fn toggle_trend_line(&mut self) -> bool {
        self.show_trend_line = !self.show_trend_line;
        self.show_trend_line
    }

    pub fn render(&self, width: u32, height: u32, theme: &Theme) -> Scene {
        let dims = Dimensions::new(width, height, Self::MARGIN);
        let finite = self
            .data
            .iter()
            .copied()
            .filter(|s| s.x.is_finite() && s.y.is_finite())
            .collect::<Vec<_>>();
        let (Some(xd), Some(yd)) = (extent(finite.iter().map(|s| s.x)), extent(finite.iter().map(|s| s.y)))
        else {
            return message_scene(dims, NO_DATA, theme.error, theme);
        };
        let (iw, ih) = (dims.inner_width(), dims.inner_height());
        let m = dims.margin;

        let x = LinearScale::new(xd, (0.0, iw)).nice(10);
        let y = LinearScale::new(yd, (ih, 0.0)).nice(10);
        let x_axis = Axis::linear(AxisOrient::Bottom, &x, 10);
        let y_axis = Axis::linear(AxisOrient::Left, &y, 10);

        let mut g = vec![
            x_axis.render((0.0, ih), "x-axis", theme.axis),
            y_axis.render((0.0, 0.0), "y-axis", theme.axis),
            Node::Text(y_title(&self.labels.y, -(m.left as f64) + 15.0, ih, theme.muted_text)),
            Node::Text(x_title(&self.labels.x, iw, ih + m.bottom as f64 - 10.0, theme.muted_text)),
            x_axis.grid((0.0, ih), ih, theme.grid),
            y_axis.grid((0.0, 0.0), iw, theme.grid),
        ];

        let dot = Style::fill(theme.point).with_opacity(0.8);
        let dots = finite
            .iter()
            .map(|s| Node::circle(x.map(s.x), y.map(s.y), Self::POINT_RADIUS, dot.clone()))
            .collect();
        g.push(Node::group((0.0, 0.0), "dots", dots));

        if self.show_trend_line {
            // unfiltered: a non-finite sample fails the fit
            let ctx = OverlayContext {
                samples: &self.data,
                x: &x,
                y: &y,
                inner_width: iw,
                inner_height: ih,
                theme,
            };
            g.extend(TrendLine.compute(&ctx));
        }

        let mut scene = plot_scene(&dims, theme);
        scene.push(Node::group((m.left as f64, m.top as f64), "plot", g));
        scene
    }
}
