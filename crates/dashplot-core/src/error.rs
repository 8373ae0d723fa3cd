// File: crates/dashplot-core/src/error.rs
// Summary: Crate-level error type for chart construction, dashboard and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::chart::ChartKind;
use crate::source::SourceError;
use crate::stats::StatsError;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("chart '{0}' not found")]
    UnknownChart(String),

    #[error("{expected} chart cannot take {got} data")]
    KindMismatch { expected: ChartKind, got: ChartKind },

    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("invalid config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
