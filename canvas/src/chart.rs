//! Results bar chart: a pure model, a canvas-bound renderer, and the slot
//! that keeps at most one chart instance alive.
//!
//! ARCHITECTURE
//! ============
//! [`ChartModel`] holds the reconciled labels and counts and computes all
//! geometry without touching the DOM, so it can be tested natively.
//! [`Chart`] binds a model to a `<canvas>` and draws it. [`ChartSlot`] owns
//! the live chart: installing a new one releases the previous one first, so
//! repeated renders never leave two charts on screen.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::engine::context_2d;
use crate::geom::Rect;
use crate::render::fit_text_with_ellipsis;

/// Heading drawn above the plot.
pub const CHART_TITLE: &str = "Live Poll Results";

/// Upper bound on the number of y-axis intervals.
const MAX_Y_INTERVALS: u64 = 5;

/// Bar width as a fraction of its slot.
const BAR_FILL_RATIO: f64 = 0.7;

/// Fill and border colours, cycled per bar.
const PALETTE: [(&str, &str); 5] = [
    ("rgba(255, 99, 132, 0.7)", "rgba(255, 99, 132, 1)"),
    ("rgba(54, 162, 235, 0.7)", "rgba(54, 162, 235, 1)"),
    ("rgba(255, 206, 86, 0.7)", "rgba(255, 206, 86, 1)"),
    ("rgba(75, 192, 192, 0.7)", "rgba(75, 192, 192, 1)"),
    ("rgba(153, 102, 255, 0.7)", "rgba(153, 102, 255, 1)"),
];

const INK: &str = "rgb(30, 30, 30)";
const GRID: &str = "rgba(0, 0, 0, 0.1)";
const FONT: &str = "sans-serif";

// Plot insets inside the canvas, in CSS pixels.
const INSET_LEFT: f64 = 44.0;
const INSET_TOP: f64 = 72.0;
const INSET_RIGHT: f64 = 12.0;
const INSET_BOTTOM: f64 = 48.0;

/// One bar per label, plus the total-votes annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub total_votes: u64,
}

impl ChartModel {
    /// Build a model from `(label, value)` rows in display order.
    #[must_use]
    pub fn new(rows: impl IntoIterator<Item = (String, u64)>, total_votes: u64) -> Self {
        let (labels, values) = rows.into_iter().unzip();
        Self { labels, values, total_votes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Legend text, e.g. `Votes (Total: 5)`.
    #[must_use]
    pub fn series_label(&self) -> String {
        format!("Votes (Total: {})", self.total_votes)
    }

    /// Y-axis ticks: whole numbers from zero up to a top that covers the largest bar.
    #[must_use]
    pub fn y_ticks(&self) -> Vec<u64> {
        let max = self.values.iter().copied().max().unwrap_or(0).max(1);
        let step = max.div_ceil(MAX_Y_INTERVALS).max(1);
        let top = step * max.div_ceil(step);
        (0..=top).step_by(usize::try_from(step).unwrap_or(usize::MAX)).collect()
    }

    /// Top of the y axis.
    #[must_use]
    pub fn y_max(&self) -> u64 {
        self.y_ticks().last().copied().unwrap_or(1).max(1)
    }

    /// Bar rectangles inside `plot`, one per label, bottoms on the x axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bars(&self, plot: Rect) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        let slot = plot.w / self.len() as f64;
        let bar_w = slot * BAR_FILL_RATIO;
        let y_max = self.y_max() as f64;
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let h = plot.h * (*value as f64 / y_max);
                let x = plot.x + i as f64 * slot + (slot - bar_w) / 2.0;
                Rect::new(x, plot.bottom() - h, bar_w, h)
            })
            .collect()
    }
}

/// Plot area for a canvas of the given CSS size.
#[must_use]
pub fn plot_area(width: f64, height: f64) -> Rect {
    Rect::new(
        INSET_LEFT,
        INSET_TOP,
        (width - INSET_LEFT - INSET_RIGHT).max(1.0),
        (height - INSET_TOP - INSET_BOTTOM).max(1.0),
    )
}

/// Something that holds drawn pixels and can give them back.
pub trait Release {
    /// Clear whatever this instance drew and drop its resources.
    fn release(self);
}

/// Holds the single live chart instance.
pub struct ChartSlot<T: Release> {
    live: Option<T>,
}

impl<T: Release> Default for ChartSlot<T> {
    fn default() -> Self {
        Self { live: None }
    }
}

impl<T: Release> ChartSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the current chart (if any), then make `chart` the live one.
    pub fn install(&mut self, chart: T) -> &mut T {
        self.clear();
        self.live.insert(chart)
    }

    /// Release the current chart, leaving the slot empty.
    pub fn clear(&mut self) {
        if let Some(old) = self.live.take() {
            old.release();
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

impl<T: Release> Drop for ChartSlot<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A chart bound to a `<canvas>` element.
pub struct Chart {
    canvas: HtmlCanvasElement,
    model: ChartModel,
    width: f64,
    height: f64,
    dpr: f64,
}

impl Chart {
    /// Bind `model` to `canvas`, sizing the backing store for `dpr`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement, model: ChartModel, width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        canvas.set_width((width * dpr).round() as u32);
        canvas.set_height((height * dpr).round() as u32);
        Self { canvas, model, width, height, dpr }
    }

    /// Draw title, legend, axes and bars.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        let plot = plot_area(self.width, self.height);
        self.draw_header(&ctx)?;
        self.draw_axes(&ctx, plot)?;
        self.draw_bars(&ctx, plot)?;
        Ok(())
    }

    fn draw_header(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        ctx.save();
        ctx.set_fill_style_str(INK);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_font(&format!("bold 16px {FONT}"));
        ctx.fill_text(CHART_TITLE, self.width / 2.0, 18.0)?;

        // Legend: swatch + series label.
        ctx.set_font(&format!("13px {FONT}"));
        let label = self.model.series_label();
        let text_w = ctx.measure_text(&label).map_or(0.0, |m| m.width());
        let swatch_x = self.width / 2.0 - (text_w + 24.0) / 2.0;
        let (fill, border) = PALETTE[0];
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(swatch_x, 37.0, 18.0, 10.0);
        ctx.set_stroke_style_str(border);
        ctx.stroke_rect(swatch_x, 37.0, 18.0, 10.0);
        ctx.set_fill_style_str(INK);
        ctx.set_text_align("left");
        ctx.fill_text(&label, swatch_x + 24.0, 42.0)?;
        ctx.restore();
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_axes(&self, ctx: &CanvasRenderingContext2d, plot: Rect) -> Result<(), JsValue> {
        let y_max = self.model.y_max() as f64;
        ctx.save();
        ctx.set_font(&format!("11px {FONT}"));
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(1.0);
        for tick in self.model.y_ticks() {
            let y = plot.bottom() - plot.h * (tick as f64 / y_max);
            ctx.set_stroke_style_str(GRID);
            ctx.begin_path();
            ctx.move_to(plot.x, y);
            ctx.line_to(plot.x + plot.w, y);
            ctx.stroke();
            ctx.set_fill_style_str(INK);
            ctx.fill_text(&tick.to_string(), plot.x - 6.0, y)?;
        }
        ctx.set_stroke_style_str(INK);
        ctx.begin_path();
        ctx.move_to(plot.x, plot.y);
        ctx.line_to(plot.x, plot.bottom());
        ctx.line_to(plot.x + plot.w, plot.bottom());
        ctx.stroke();
        ctx.restore();
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_bars(&self, ctx: &CanvasRenderingContext2d, plot: Rect) -> Result<(), JsValue> {
        let bars = self.model.bars(plot);
        if bars.is_empty() {
            return Ok(());
        }
        let slot = plot.w / bars.len() as f64;
        ctx.save();
        ctx.set_line_width(1.0);
        ctx.set_font(&format!("11px {FONT}"));
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for (i, (bar, label)) in bars.iter().zip(&self.model.labels).enumerate() {
            let (fill, border) = PALETTE[i % PALETTE.len()];
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(bar.x, bar.y, bar.w, bar.h);
            ctx.set_stroke_style_str(border);
            ctx.stroke_rect(bar.x, bar.y, bar.w, bar.h);

            ctx.set_fill_style_str(INK);
            let fitted = fit_text_with_ellipsis(ctx, label, (slot - 4.0).max(1.0));
            ctx.fill_text(&fitted, bar.center().x, plot.bottom() + 6.0)?;
        }
        ctx.restore();
        Ok(())
    }
}

impl Release for Chart {
    fn release(self) {
        if let Ok(ctx) = context_2d(&self.canvas) {
            if ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).is_ok() {
                ctx.clear_rect(0.0, 0.0, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
            }
        }
    }
}
