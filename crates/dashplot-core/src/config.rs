// File: crates/dashplot-core/src/config.rs
// Summary: Dashboard configuration (TOML) naming data files, column mappings and output size.
// Notes:
// - Every field has a default; an empty file yields the stock energy dashboard.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::source::SeriesColumn;
use crate::types::{HEIGHT, WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory the chart `file`s are resolved against.
    pub data_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub theme: String,
    /// Start the scatter plot with its regression line shown.
    pub trend_line: bool,
    pub bar: CategorySection,
    pub line: LineSection,
    pub donut: DonutSection,
    pub scatter: ScatterSection,
}

/// Label + value columns (bar chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySection {
    pub enabled: bool,
    pub file: PathBuf,
    pub label_column: String,
    pub value_column: String,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutSection {
    pub enabled: bool,
    pub file: PathBuf,
    pub label_column: String,
    pub value_column: String,
    /// `Some(ratio)` switches to donut mode with a hole of `ratio`·radius.
    pub inner_ratio: Option<f64>,
    pub show_total: bool,
    /// Draw a full pie (no hole).
    pub pie: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSection {
    pub enabled: bool,
    pub file: PathBuf,
    pub category_column: String,
    pub series: Vec<SeriesColumn>,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterSection {
    pub enabled: bool,
    pub file: PathBuf,
    pub x_column: String,
    pub y_column: String,
    pub x_label: String,
    pub y_label: String,
}

const SCREEN_FILE: &str = "Ex5_TV_energy_Allsizes_byScreenType.csv";
const SCREEN_LABEL: &str = "Screen_Tech";
const SCREEN_VALUE: &str = "Mean(Labelled energy consumption (kWh/year))";

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            width: WIDTH,
            height: HEIGHT,
            theme: "light".to_string(),
            trend_line: false,
            bar: CategorySection::default(),
            line: LineSection::default(),
            donut: DonutSection::default(),
            scatter: ScatterSection::default(),
        }
    }
}

impl Default for CategorySection {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(SCREEN_FILE),
            label_column: SCREEN_LABEL.to_string(),
            value_column: SCREEN_VALUE.to_string(),
            x_label: "Screen Technology".to_string(),
            y_label: SCREEN_VALUE.to_string(),
        }
    }
}

impl Default for DonutSection {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(SCREEN_FILE),
            label_column: SCREEN_LABEL.to_string(),
            value_column: SCREEN_VALUE.to_string(),
            inner_ratio: None,
            show_total: false,
            pie: false,
        }
    }
}

impl Default for LineSection {
    fn default() -> Self {
        let series = [
            ("Queensland ($ per megawatt hour)", "Queensland"),
            ("New South Wales ($ per megawatt hour)", "NSW"),
            ("South Australia ($ per megawatt hour)", "South Australia"),
            ("Tasmania ($ per megawatt hour)", "Tasmania"),
            ("Snowy ($ per megawatt hour)", "Snowy"),
            ("Average Price (notTas-Snowy)", "Average"),
        ];
        Self {
            enabled: true,
            file: PathBuf::from("Ex5_ARE_Spot_Prices.csv"),
            category_column: "Year".to_string(),
            series: series.iter().map(|(c, l)| SeriesColumn::new(*c, *l)).collect(),
            x_label: "Year".to_string(),
            y_label: "$ per megawatt hour".to_string(),
        }
    }
}

impl Default for ScatterSection {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("Ex5_TV_energy.csv"),
            x_column: "star2".to_string(),
            y_column: "energy_consumpt".to_string(),
            x_label: "Star Rating".to_string(),
            y_label: "Energy Consumption (W)".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML file; missing keys keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&text).map_err(|source| ChartError::Config { path: path.to_path_buf(), source })
    }

    /// `file` resolved against `data_dir` (absolute paths are kept).
    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.data_dir.join(file)
    }
}
