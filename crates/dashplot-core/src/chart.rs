// File: crates/dashplot-core/src/chart.rs
// Summary: Chart enum over the four chart kinds plus message placeholders, and shared render helpers.

use std::fmt;

use crate::bar::BarChart;
use crate::data::ChartData;
use crate::donut::DonutChart;
use crate::error::{ChartError, Result};
use crate::line::LineChart;
use crate::scatter::ScatterPlot;
use crate::scene::{Color, Node, Scene, Text, TextAnchor};
use crate::theme::Theme;
use crate::types::Dimensions;

/// Axis titles of a cartesian chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Donut,
    Scatter,
    Message,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Donut => "donut",
            ChartKind::Scatter => "scatter",
            ChartKind::Message => "message",
        })
    }
}

impl ChartData {
    /// Chart kind that consumes this payload.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Bars(_) => ChartKind::Bar,
            ChartData::Lines(_) => ChartKind::Line,
            ChartData::Slices(_) => ChartKind::Donut,
            ChartData::Points(_) => ChartKind::Scatter,
        }
    }
}

/// Centered text shown instead of a chart (load errors, missing data).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageChart {
    pub message: String,
    pub is_error: bool,
}

impl MessageChart {
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: true }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false }
    }

    pub fn render(&self, width: u32, height: u32, theme: &Theme) -> Scene {
        let color = if self.is_error { theme.error } else { theme.muted_text };
        message_scene(Dimensions::new(width, height, Default::default()), &self.message, color, theme)
    }
}

/// One line of centered text per `\n`-separated line of `message`.
pub(crate) fn message_scene(dims: Dimensions, message: &str, color: Color, theme: &Theme) -> Scene {
    let mut scene = Scene::new(dims.width as f64, dims.height as f64);
    scene.background = Some(theme.background);
    let lines = message.lines().collect::<Vec<_>>();
    let line_height = 20.0;
    let top = dims.height as f64 / 2.0 - line_height * (lines.len() as f64 - 1.0) / 2.0;
    let children = lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            Node::Text(
                Text::new(dims.width as f64 / 2.0, top + line_height * i as f64, *l, 16.0, color)
                    .anchor(TextAnchor::Middle)
                    .shift_em(0.0, 0.35),
            )
        })
        .collect();
    scene.push(Node::group((0.0, 0.0), "message", children));
    scene
}

/// Empty scene with the theme background.
pub(crate) fn plot_scene(dims: &Dimensions, theme: &Theme) -> Scene {
    let mut scene = Scene::new(dims.width as f64, dims.height as f64);
    scene.background = Some(theme.background);
    scene
}

/// Vertical title left of the plot, centered on its height.
pub(crate) fn y_title(label: &str, x: f64, inner_height: f64, color: Color) -> Text {
    Text::new(x, inner_height / 2.0, label, 12.0, color)
        .rotated(-90.0)
        .anchor(TextAnchor::Middle)
}

/// Horizontal title under the plot, centered on its width.
pub(crate) fn x_title(label: &str, inner_width: f64, y: f64, color: Color) -> Text {
    Text::new(inner_width / 2.0, y, label, 12.0, color).anchor(TextAnchor::Middle)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
    Donut(DonutChart),
    Scatter(ScatterPlot),
    Message(MessageChart),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Bar(_) => ChartKind::Bar,
            Chart::Line(_) => ChartKind::Line,
            Chart::Donut(_) => ChartKind::Donut,
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::Message(_) => ChartKind::Message,
        }
    }

    /// Chart for a data payload, with default titles.
    pub fn from_data(data: ChartData) -> Self {
        match data {
            ChartData::Bars(v) => Chart::Bar(BarChart::new(v)),
            ChartData::Lines(t) => Chart::Line(LineChart::new(t)),
            ChartData::Slices(v) => Chart::Donut(DonutChart::new(v)),
            ChartData::Points(p) => Chart::Scatter(ScatterPlot::new(p)),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Chart::Message(MessageChart::error(message))
    }

    pub fn render(&self, width: u32, height: u32, theme: &Theme) -> Scene {
        match self {
            Chart::Bar(c) => c.render(width, height, theme),
            Chart::Line(c) => c.render(width, height, theme),
            Chart::Donut(c) => c.render(width, height, theme),
            Chart::Scatter(c) => c.render(width, height, theme),
            Chart::Message(c) => c.render(width, height, theme),
        }
    }

    /// Replace the chart's data. The payload must match the chart kind.
    pub fn update_data(&mut self, data: ChartData) -> Result<()> {
        match (self, data) {
            (Chart::Bar(c), ChartData::Bars(v)) => c.update_data(v),
            (Chart::Line(c), ChartData::Lines(t)) => c.update_data(t),
            (Chart::Donut(c), ChartData::Slices(v)) => c.update_data(v),
            (Chart::Scatter(c), ChartData::Points(p)) => c.update_data(p),
            (chart, data) => {
                return Err(ChartError::KindMismatch { expected: chart.kind(), got: data.kind() });
            }
        }
        Ok(())
    }
}

impl From<BarChart> for Chart {
    fn from(c: BarChart) -> Self { Chart::Bar(c) }
}

impl From<LineChart> for Chart {
    fn from(c: LineChart) -> Self { Chart::Line(c) }
}

impl From<DonutChart> for Chart {
    fn from(c: DonutChart) -> Self { Chart::Donut(c) }
}

impl From<ScatterPlot> for Chart {
    fn from(c: ScatterPlot) -> Self { Chart::Scatter(c) }
}
