// File: crates/dashplot-core/src/lib.rs
// Summary: Core library entry point; exports regression, data loading, chart scenes and the dashboard.

pub mod stats;
pub mod data;
pub mod source;
pub mod error;
pub mod types;
pub mod grid;
pub mod scale;
pub mod axis;
pub mod geometry;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod chart;
pub mod bar;
pub mod line;
pub mod donut;
pub mod scatter;
pub mod overlay;
pub mod config;
pub mod dashboard;

pub use stats::{extent, fit_linear, fit_quality, LinearFit, Sample, StatsError, Variable};
pub use data::{Category, ChartData, LineTable, NamedSeries};
pub use source::{load_categories, load_line_table, load_samples, SeriesColumn, SourceError, Table};
pub use error::{ChartError, Result};
pub use types::{Dimensions, Margin};
pub use scene::{Color, Node, Scene};
pub use theme::Theme;
pub use chart::{AxisLabels, Chart, ChartKind, MessageChart};
pub use bar::BarChart;
pub use line::LineChart;
pub use donut::{DonutChart, InnerRadius};
pub use scatter::ScatterPlot;
pub use overlay::{Overlay, OverlayContext, TrendLine};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, LoadReport, SceneWriter, SvgWriter};
