// File: crates/dashplot-core/src/overlay.rs
// Summary: Overlay trait (extra marks drawn over a cartesian plot) and the regression trend line.

use tracing::warn;

use crate::scale::LinearScale;
use crate::scene::{Node, PathData, Style, Text};
use crate::stats::{extent, fit_linear, fit_quality, LinearFit, Sample, StatsError};
use crate::theme::Theme;

/// What an overlay sees of the plot it draws on. Coordinates of returned
/// nodes are relative to the plot area (margin already applied).
pub struct OverlayContext<'a> {
    pub samples: &'a [Sample],
    pub x: &'a LinearScale,
    pub y: &'a LinearScale,
    pub inner_width: f64,
    pub inner_height: f64,
    pub theme: &'a Theme,
}

/// Overlays render custom marks on top of a chart.
pub trait Overlay {
    fn id(&self) -> &'static str;
    /// Nodes to draw above the data marks; empty when there is nothing to show.
    fn compute(&self, ctx: &OverlayContext<'_>) -> Vec<Node>;
}

/// Least-squares line across the x extent of the samples, with an `R²` note
/// in the right margin.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrendLine;

impl TrendLine {
    /// Endpoints of the fitted line at the min and max x, in data units.
    pub fn segment(samples: &[Sample]) -> Result<((f64, f64), (f64, f64)), StatsError> {
        let fit: LinearFit = fit_linear(samples)?;
        // fit_linear rejected empty and non-finite input, so an extent exists
        let (x0, x1) = extent(samples.iter().map(|s| s.x)).unwrap_or((0.0, 0.0));
        let (y0, y1) = (fit.predict(x0), fit.predict(x1));
        if !y0.is_finite() || !y1.is_finite() {
            return Err(StatsError::Overflow);
        }
        Ok(((x0, y0), (x1, y1)))
    }

    pub fn annotation(r2: f64) -> String {
        format!("R\u{b2} = {r2:.3}")
    }
}

impl Overlay for TrendLine {
    fn id(&self) -> &'static str { "trend_line" }

    fn compute(&self, ctx: &OverlayContext<'_>) -> Vec<Node> {
        let ((x0, y0), (x1, y1)) = match Self::segment(ctx.samples) {
            Ok(seg) => seg,
            Err(e) => {
                warn!(error = %e, samples = ctx.samples.len(), "trend line skipped");
                return Vec::new();
            }
        };
        let line = PathData::polyline(&[(ctx.x.map(x0), ctx.y.map(y0)), (ctx.x.map(x1), ctx.y.map(y1))]);
        let style = Style::stroke(ctx.theme.trend, 2.0).dashed(&[5.0, 5.0]).with_opacity(0.8);
        let mut nodes = vec![Node::path(line, style)];

        match fit_quality(ctx.samples) {
            Ok(r2) => nodes.push(Node::Text(Text::new(
                ctx.inner_width + 10.0,
                20.0,
                Self::annotation(r2),
                10.0,
                ctx.theme.muted_text,
            ))),
            Err(e) => warn!(error = %e, "fit quality unavailable; annotation omitted"),
        }
        vec![Node::group((0.0, 0.0), self.id(), nodes)]
    }
}
