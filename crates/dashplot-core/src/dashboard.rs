// File: crates/dashplot-core/src/dashboard.rs
// Summary: Dashboard controller owning chart instances by id; CSV loading, sample data and export.
// Notes:
// - Charts live in an explicit ordered map; there is no global registry.
// - A chart that fails to load is replaced by an error placeholder; other charts still load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::bar::BarChart;
use crate::chart::Chart;
use crate::config::DashboardConfig;
use crate::data::{Category, ChartData, LineTable, NamedSeries};
use crate::donut::DonutChart;
use crate::error::{ChartError, Result};
use crate::line::LineChart;
use crate::scatter::ScatterPlot;
use crate::scene::Scene;
use crate::source::{load_categories, load_line_table, load_samples, SourceError};
use crate::stats::Sample;
use crate::svg;
use crate::theme::{self, Theme};
use crate::types::{HEIGHT, WIDTH};

pub const BAR_ID: &str = "chart1";
pub const LINE_ID: &str = "chart2";
pub const DONUT_ID: &str = "chart3";
pub const SCATTER_ID: &str = "chart4";

/// Output backend for `Dashboard::export`.
pub trait SceneWriter {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;
    fn write(&self, scene: &Scene, path: &Path) -> Result<()>;
}

/// Standalone SVG documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgWriter;

impl SceneWriter for SvgWriter {
    fn extension(&self) -> &'static str { "svg" }

    fn write(&self, scene: &Scene, path: &Path) -> Result<()> {
        svg::write(scene, path)
    }
}

/// Outcome of `Dashboard::load`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    /// `(chart id, error message)`
    pub failed: Vec<(String, String)>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    charts: BTreeMap<String, Chart>,
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Theme::default())
    }
}

impl Dashboard {
    pub fn new(width: u32, height: u32, theme: Theme) -> Self {
        Self { charts: BTreeMap::new(), width, height, theme }
    }

    /// Empty dashboard sized and themed from `config`.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.width, config.height, theme::find(&config.theme))
    }

    /// Add or replace the chart stored under `id`.
    pub fn insert(&mut self, id: impl Into<String>, chart: impl Into<Chart>) -> Option<Chart> {
        self.charts.insert(id.into(), chart.into())
    }

    pub fn get(&self, id: &str) -> Option<&Chart> {
        self.charts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Chart> {
        self.charts.get_mut(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Replace the data of an existing chart.
    pub fn update_chart_data(&mut self, id: &str, data: ChartData) -> Result<()> {
        match self.charts.get_mut(id) {
            Some(chart) => chart.update_data(data),
            None => {
                warn!(chart = id, "chart not found or doesn't support data updates");
                Err(ChartError::UnknownChart(id.to_string()))
            }
        }
    }

    /// Destroy one chart, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Chart> {
        self.charts.remove(id)
    }

    pub fn destroy_all(&mut self) {
        debug!(count = self.charts.len(), "destroying all charts");
        self.charts.clear();
    }

    /// Subsequent renders use the new size (height is still floored at the minimum).
    pub fn resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "resizing charts");
        self.width = width;
        self.height = height;
    }

    pub fn render(&self, id: &str) -> Result<Scene> {
        self.charts
            .get(id)
            .map(|c| c.render(self.width, self.height, &self.theme))
            .ok_or_else(|| ChartError::UnknownChart(id.to_string()))
    }

    /// Render `id` into `dir/<id>.<ext>`.
    pub fn export(&self, id: &str, dir: &Path, writer: &dyn SceneWriter) -> Result<PathBuf> {
        let scene = self.render(id)?;
        let path = dir.join(format!("{id}.{}", writer.extension()));
        writer.write(&scene, &path)?;
        info!(chart = id, path = %path.display(), "exported");
        Ok(path)
    }

    pub fn export_svg(&self, id: &str, dir: &Path) -> Result<PathBuf> {
        self.export(id, dir, &SvgWriter)
    }

    /// Export every chart with every writer, in id order.
    pub fn export_all(&self, dir: &Path, writers: &[&dyn SceneWriter]) -> Result<Vec<PathBuf>> {
        let mut out = Vec::with_capacity(self.charts.len() * writers.len());
        for id in self.charts.keys() {
            for w in writers {
                out.push(self.export(id, dir, *w)?);
            }
        }
        Ok(out)
    }

    /// Load every enabled chart of `config`. Failures become error placeholders
    /// and are listed in the report.
    pub fn load(&mut self, config: &DashboardConfig) -> LoadReport {
        self.width = config.width;
        self.height = config.height;
        self.theme = theme::find(&config.theme);

        let mut report = LoadReport::default();
        if config.bar.enabled {
            let s = &config.bar;
            let chart = load_categories(config.resolve(&s.file), &s.label_column, &s.value_column)
                .map(|data| BarChart::new(data).with_labels(s.x_label.clone(), s.y_label.clone()).into());
            self.record(BAR_ID, chart, &mut report);
        }
        if config.line.enabled {
            let s = &config.line;
            let chart = load_line_table(config.resolve(&s.file), &s.category_column, &s.series)
                .map(|data| LineChart::new(data).with_labels(s.x_label.clone(), s.y_label.clone()).into());
            self.record(LINE_ID, chart, &mut report);
        }
        if config.donut.enabled {
            let s = &config.donut;
            let chart = load_categories(config.resolve(&s.file), &s.label_column, &s.value_column).map(|data| {
                let mut donut = DonutChart::new(data);
                if s.pie {
                    donut.set_pie_mode();
                } else if let Some(ratio) = s.inner_ratio {
                    donut.set_donut_mode(ratio, s.show_total);
                } else {
                    donut.show_total = s.show_total;
                }
                donut.into()
            });
            self.record(DONUT_ID, chart, &mut report);
        }
        if config.scatter.enabled {
            let s = &config.scatter;
            let chart = load_samples(config.resolve(&s.file), &s.x_column, &s.y_column).map(|data| {
                ScatterPlot::new(data)
                    .with_labels(s.x_label.clone(), s.y_label.clone())
                    .with_trend_line(config.trend_line)
                    .into()
            });
            self.record(SCATTER_ID, chart, &mut report);
        }
        report
    }

    fn record(&mut self, id: &str, chart: std::result::Result<Chart, SourceError>, report: &mut LoadReport) {
        match chart {
            Ok(chart) => {
                info!(chart = id, kind = %chart.kind(), "chart loaded");
                self.charts.insert(id.to_string(), chart);
                report.loaded.push(id.to_string());
            }
            Err(e) => {
                error!(chart = id, error = %e, "error loading CSV data");
                self.charts.insert(id.to_string(), Chart::error(format!("Error loading chart:\n{e}")));
                report.failed.push((id.to_string(), e.to_string()));
            }
        }
    }

    /// Swap every chart's data for the built-in sample sets. Charts that are
    /// missing or of another kind (e.g. error placeholders) are recreated.
    pub fn load_sample_data(&mut self) {
        for (id, data) in sample_data() {
            let same_kind = self.charts.get(id).map(Chart::kind) == Some(data.kind());
            if same_kind {
                if let Err(e) = self.update_chart_data(id, data) {
                    warn!(chart = id, error = %e, "sample data rejected");
                }
            } else {
                self.charts.insert(id.to_string(), Chart::from_data(data));
            }
        }
    }
}

/// Built-in demo data keyed by chart id.
pub fn sample_data() -> Vec<(&'static str, ChartData)> {
    let bars = [("Q1 Sales", 120.0), ("Q2 Sales", 190.0), ("Q3 Sales", 150.0), ("Q4 Sales", 210.0)]
        .into_iter()
        .map(|(l, v)| Category::new(l, v))
        .collect();
    let months = (1..=6).map(|m| format!("2024-{m:02}-01")).collect();
    let line = LineTable::new(months)
        .with_series(NamedSeries::new("Value", vec![1000.0, 1200.0, 1100.0, 1400.0, 1600.0, 1800.0]));
    let slices = [("Desktop", 40.0), ("Mobile", 35.0), ("Tablet", 20.0), ("Other", 5.0)]
        .into_iter()
        .map(|(l, v)| Category::new(l, v))
        .collect();
    let points = [(20.0, 30.0), (40.0, 50.0), (60.0, 40.0), (80.0, 70.0)]
        .into_iter()
        .map(Sample::from)
        .collect();
    vec![
        (BAR_ID, ChartData::Bars(bars)),
        (LINE_ID, ChartData::Lines(line)),
        (DONUT_ID, ChartData::Slices(slices)),
        (SCATTER_ID, ChartData::Points(points)),
    ]
}
