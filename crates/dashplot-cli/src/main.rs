// File: crates/dashplot-cli/src/main.rs
// Summary: `dashplot` CLI: render the dashboard from CSV files, fit a line to two columns, render sample data.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use dashplot_core::{
    fit_linear, fit_quality, load_samples, Dashboard, DashboardConfig, SceneWriter, StatsError, SvgWriter,
};
use dashplot_render_skia::PngWriter;

#[derive(Parser, Debug)]
#[command(name = "dashplot", version, about = "Render CSV data as bar, line, donut and scatter charts")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the configured CSV files and export every chart.
    Render(RenderArgs),
    /// Fit y = slope·x + intercept to two CSV columns and print r².
    Fit(FitArgs),
    /// Export the built-in sample dashboard.
    Samples(SamplesArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// TOML dashboard config; defaults reproduce the energy dashboard.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory holding the CSV files.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Theme preset name (light, dark).
    #[arg(long)]
    theme: Option<String>,
    /// Draw the regression line on the scatter plot; `--trend-line=false`
    /// hides it even when the config turns it on.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    trend_line: Option<bool>,
    /// Replace loaded data with the built-in samples before exporting.
    #[arg(long)]
    sample: bool,
}

#[derive(Args, Debug)]
struct FitArgs {
    csv: PathBuf,
    /// Independent-variable column.
    #[arg(long)]
    x: String,
    /// Dependent-variable column.
    #[arg(long)]
    y: String,
}

#[derive(Args, Debug)]
struct SamplesArgs {
    #[arg(short, long, default_value = "target/out/samples")]
    out_dir: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Svg,
    Png,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Render(args) => render(args),
        Command::Fit(args) => fit(&args),
        Command::Samples(args) => samples(&args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "info,dashplot=debug,dashplot_core=debug,dashplot_render_skia=debug"
    } else {
        "warn,dashplot=info,dashplot_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

impl RenderArgs {
    /// Flags given on the command line replace the config values.
    fn apply_to(&self, config: &mut DashboardConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(t) = &self.theme {
            config.theme = t.clone();
        }
        if let Some(on) = self.trend_line {
            config.trend_line = on;
        }
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_path(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => DashboardConfig::default(),
    };
    args.apply_to(&mut config);

    let mut dashboard = Dashboard::from_config(&config);
    let report = dashboard.load(&config);
    for (id, err) in &report.failed {
        warn!(chart = %id, "{err}");
    }
    if args.sample {
        dashboard.load_sample_data();
    }
    export(&dashboard, &args.out_dir, args.format)?;
    info!(loaded = report.loaded.len(), failed = report.failed.len(), "dashboard rendered");
    Ok(())
}

fn samples(args: &SamplesArgs) -> Result<()> {
    let mut dashboard = Dashboard::default();
    dashboard.load_sample_data();
    export(&dashboard, &args.out_dir, args.format)
}

fn export(dashboard: &Dashboard, out_dir: &Path, format: Format) -> Result<()> {
    let (svg, png) = (SvgWriter, PngWriter::new());
    let mut writers: Vec<&dyn SceneWriter> = Vec::new();
    if matches!(format, Format::Svg | Format::Both) {
        writers.push(&svg);
    }
    if matches!(format, Format::Png | Format::Both) {
        writers.push(&png);
    }
    let written = dashboard
        .export_all(out_dir, &writers)
        .with_context(|| format!("exporting charts to '{}'", out_dir.display()))?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn fit(args: &FitArgs) -> Result<()> {
    let samples = load_samples(&args.csv, &args.x, &args.y)
        .with_context(|| format!("failed to load CSV '{}'", args.csv.display()))?;
    println!("samples:   {}", samples.len());
    let line = fit_linear(&samples).context("cannot fit a line")?;
    println!("slope:     {}", line.slope);
    println!("intercept: {}", line.intercept);
    match fit_quality(&samples) {
        Ok(r2) => println!("r2:        {r2:.6}"),
        Err(e @ StatsError::DegenerateInput { .. }) => println!("r2:        n/a ({e})"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_args(argv: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(argv).expect("parse args");
        match cli.command {
            Command::Render(args) => args,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn trend_line_flag_overrides_the_config_both_ways() {
        let on = DashboardConfig { trend_line: true, ..DashboardConfig::default() };

        let mut config = on.clone();
        render_args(&["dashplot", "render", "--trend-line=false"]).apply_to(&mut config);
        assert!(!config.trend_line);

        let mut config = DashboardConfig::default();
        render_args(&["dashplot", "render", "--trend-line"]).apply_to(&mut config);
        assert!(config.trend_line);

        let mut config = on.clone();
        render_args(&["dashplot", "render"]).apply_to(&mut config);
        assert!(config.trend_line);
    }

    #[test]
    fn size_and_theme_flags_replace_config_values() {
        let mut config = DashboardConfig::default();
        render_args(&["dashplot", "render", "--width", "1024", "--theme", "dark", "--data-dir", "csv"])
            .apply_to(&mut config);
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, DashboardConfig::default().height);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.data_dir, PathBuf::from("csv"));
    }
}
