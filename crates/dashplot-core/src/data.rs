// File: crates/dashplot-core/src/data.rs
// Summary: Chart input models (categories, multi-series line tables, scatter samples).

use crate::stats::Sample;

/// Labeled value used by bar and donut charts.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub label: String,
    pub value: f64,
}

impl Category {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// One named line; `values[i]` belongs to `LineTable::categories[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }
}

/// Several series sharing one categorical x axis (e.g. years).
/// Missing values are stored as NaN and break the drawn line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineTable {
    pub categories: Vec<String>,
    pub series: Vec<NamedSeries>,
}

impl LineTable {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories, series: Vec::new() }
    }

    pub fn with_series(mut self, series: NamedSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Largest finite value over every series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty()
    }
}

/// Data payload accepted by `Chart::update_data`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Bars(Vec<Category>),
    Lines(LineTable),
    Slices(Vec<Category>),
    Points(Vec<Sample>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Bars(v) | ChartData::Slices(v) => v.len(),
            ChartData::Lines(t) => t.categories.len(),
            ChartData::Points(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
