// File: crates/dashplot-examples/src/bin/trend.rs
// Summary: Minimal example that fits a trend line to a scatter plot and writes it as SVG and PNG.

use anyhow::Result;
use dashplot_core::{fit_linear, fit_quality, svg, Sample, ScatterPlot, Theme};
use dashplot_render_skia::{render_to_png, TextShaper};

fn main() -> Result<()> {
    let data = [(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8), (5.0, 10.1), (6.0, 12.2)]
        .into_iter()
        .map(Sample::from)
        .collect::<Vec<_>>();

    let line = fit_linear(&data)?;
    let r2 = fit_quality(&data)?;
    println!("y = {:.3}x + {:.3}  (r2 = {:.4})", line.slope, line.intercept, r2);

    let chart = ScatterPlot::new(data)
        .with_labels("Hours", "Output")
        .with_trend_line(true);
    let scene = chart.render(800, 500, &Theme::light());

    svg::write(&scene, "target/out/example_trend.svg")?;
    render_to_png(&scene, &TextShaper::new(), "target/out/example_trend.png")?;
    println!("Wrote target/out/example_trend.svg and target/out/example_trend.png");
    Ok(())
}
