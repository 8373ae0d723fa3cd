// File: crates/dashplot-core/src/source.rs
// Summary: CSV ingestion with per-cell type inference and loaders for each chart input.
// Notes:
// - Cell inference follows the usual "auto type" rules: empty, number, boolean,
//   ISO date, otherwise text.
// - Loaders resolve columns by exact header first, then case-insensitively.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::data::{Category, LineTable, NamedSeries};
use crate::stats::Sample;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
    #[error("row {row}, column '{column}': expected a number, got '{value}'")]
    InvalidValue { row: usize, column: String, value: String },
    #[error("no data rows in {path}")]
    Empty { path: PathBuf },
}

/// A single inferred CSV value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    Text(String),
}

impl Cell {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Cell::Empty;
        }
        match s {
            "true" => return Cell::Bool(true),
            "false" => return Cell::Bool(false),
            "NaN" => return Cell::Number(f64::NAN),
            _ => {}
        }
        if let Ok(v) = s.parse::<f64>() {
            // "inf"/"infinity" stay text
            if v.is_finite() {
                return Cell::Number(v);
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Cell::Date(d);
        }
        Cell::Text(s.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Cell::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display label: whole numbers lose their `.0` (years), dates are ISO.
    pub fn label(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(v) => format_number(*v),
            Cell::Bool(b) => b.to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Text(t) => t.clone(),
        }
    }
}

pub(crate) fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

static EMPTY: Cell = Cell::Empty;

/// Parsed CSV: trimmed headers plus inferred rows.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;
        let mut table = Self::from_reader(file)
            .map_err(|source| SourceError::Csv { path: path.to_path_buf(), source })?;
        table.path = path.to_path_buf();
        debug!(path = %path.display(), rows = table.rows.len(), "loaded CSV");
        Ok(table)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(rec.iter().map(Cell::parse).collect());
        }
        Ok(Self { path: PathBuf::new(), headers, rows })
    }

    /// Exact header match.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// First case-insensitive match among `names`.
    pub fn column_any(&self, names: &[&str]) -> Option<usize> {
        for want in names {
            for (i, h) in self.headers.iter().enumerate() {
                if h.eq_ignore_ascii_case(want) {
                    return Some(i);
                }
            }
        }
        None
    }

    fn require(&self, name: &str) -> Result<usize, SourceError> {
        self.column(name)
            .or_else(|| self.column_any(&[name]))
            .ok_or_else(|| SourceError::MissingColumn {
                column: name.to_string(),
                path: self.path.clone(),
            })
    }

    fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows[row].get(col).unwrap_or(&EMPTY)
    }

    fn number(&self, row: usize, col: usize) -> Result<Option<f64>, SourceError> {
        match self.cell(row, col) {
            Cell::Empty => Ok(None),
            Cell::Number(v) => Ok(Some(*v)),
            other => Err(SourceError::InvalidValue {
                // 1-based, counting the header line
                row: row + 2,
                column: self.headers[col].clone(),
                value: other.label(),
            }),
        }
    }

    fn ensure_rows(&self) -> Result<(), SourceError> {
        if self.rows.is_empty() {
            return Err(SourceError::Empty { path: self.path.clone() });
        }
        Ok(())
    }

    /// Scatter samples from two numeric columns. Rows missing either value are skipped.
    pub fn samples(&self, x_col: &str, y_col: &str) -> Result<Vec<Sample>, SourceError> {
        self.ensure_rows()?;
        let (ix, iy) = (self.require(x_col)?, self.require(y_col)?);
        let mut out = Vec::with_capacity(self.rows.len());
        for r in 0..self.rows.len() {
            match (self.number(r, ix)?, self.number(r, iy)?) {
                (Some(x), Some(y)) => out.push(Sample::new(x, y)),
                _ => debug!(row = r + 2, "skipping row with missing x/y"),
            }
        }
        Ok(out)
    }

    /// Labeled values. Rows with an empty value are skipped.
    pub fn categories(&self, label_col: &str, value_col: &str) -> Result<Vec<Category>, SourceError> {
        self.ensure_rows()?;
        let (il, iv) = (self.require(label_col)?, self.require(value_col)?);
        let mut out = Vec::with_capacity(self.rows.len());
        for r in 0..self.rows.len() {
            match self.number(r, iv)? {
                Some(v) => out.push(Category::new(self.cell(r, il).label(), v)),
                None => debug!(row = r + 2, "skipping row with missing value"),
            }
        }
        Ok(out)
    }

    /// One series per `columns` entry over the categories in `category_col`.
    pub fn line_table(&self, category_col: &str, columns: &[SeriesColumn]) -> Result<LineTable, SourceError> {
        self.ensure_rows()?;
        let ic = self.require(category_col)?;
        let categories = (0..self.rows.len()).map(|r| self.cell(r, ic).label()).collect();
        let mut table = LineTable::new(categories);
        for sc in columns {
            let i = self.require(&sc.column)?;
            let mut values = Vec::with_capacity(self.rows.len());
            for r in 0..self.rows.len() {
                values.push(self.number(r, i)?.unwrap_or(f64::NAN));
            }
            table.series.push(NamedSeries::new(sc.label.clone(), values));
        }
        Ok(table)
    }
}

/// CSV column feeding one line series, with its legend label.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeriesColumn {
    pub column: String,
    pub label: String,
}

impl SeriesColumn {
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self { column: column.into(), label: label.into() }
    }
}

pub fn load_samples(path: impl AsRef<Path>, x_col: &str, y_col: &str) -> Result<Vec<Sample>, SourceError> {
    Table::from_path(path)?.samples(x_col, y_col)
}

pub fn load_categories(path: impl AsRef<Path>, label_col: &str, value_col: &str) -> Result<Vec<Category>, SourceError> {
    Table::from_path(path)?.categories(label_col, value_col)
}

pub fn load_line_table(
    path: impl AsRef<Path>,
    category_col: &str,
    columns: &[SeriesColumn],
) -> Result<LineTable, SourceError> {
    Table::from_path(path)?.line_table(category_col, columns)
}
