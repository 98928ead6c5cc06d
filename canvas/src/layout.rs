//! Responsive placement of the poll's drawable regions.
//!
//! The canvas width follows the window (clamped to a readable range) while
//! the height stays fixed. Everything else is derived from the width: side
//! margins are a fraction of it, option regions span the space between the
//! margins, and the results button sits just below the vertical centre.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    CANVAS_HEIGHT, MARGIN_RATIO, MAX_CANVAS_WIDTH, MIN_CANVAS_WIDTH, OPTION_GAP, OPTION_HEIGHT, OPTIONS_TOP,
    QUESTION_FONT_MAX, QUESTION_FONT_MIN, QUESTION_HEIGHT, QUESTION_TOP, RESULTS_BUTTON_HEIGHT,
    RESULTS_BUTTON_OFFSET_Y, RESULTS_BUTTON_WIDTH, WINDOW_GUTTER_PX,
};
use crate::geom::Rect;

/// Canvas width for a given window width, in CSS pixels.
#[must_use]
pub fn canvas_width(window_width: f64) -> f64 {
    if !window_width.is_finite() {
        return MIN_CANVAS_WIDTH;
    }
    (window_width - WINDOW_GUTTER_PX).clamp(MIN_CANVAS_WIDTH, MAX_CANVAS_WIDTH)
}

/// Computed regions for one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub question: Rect,
    pub options: Vec<Rect>,
    pub results_button: Rect,
}

impl Layout {
    /// Lay out `option_count` option regions on a canvas `width` pixels wide.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: f64, option_count: usize) -> Self {
        let width = width.clamp(MIN_CANVAS_WIDTH, MAX_CANVAS_WIDTH);
        let height = CANVAS_HEIGHT;
        let margin = width * MARGIN_RATIO;
        let inner_w = width - 2.0 * margin;

        let options = (0..option_count)
            .map(|i| {
                let y = OPTIONS_TOP + i as f64 * (OPTION_HEIGHT + OPTION_GAP);
                Rect::new(margin, y, inner_w, OPTION_HEIGHT)
            })
            .collect();

        let results_button = Rect::new(
            width / 2.0 - RESULTS_BUTTON_WIDTH / 2.0,
            height / 2.0 + RESULTS_BUTTON_OFFSET_Y,
            RESULTS_BUTTON_WIDTH,
            RESULTS_BUTTON_HEIGHT,
        );

        Self {
            width,
            height,
            margin,
            question: Rect::new(margin, QUESTION_TOP, inner_w, QUESTION_HEIGHT),
            options,
            results_button,
        }
    }

    /// Question font size, scaled linearly with the canvas width.
    #[must_use]
    pub fn question_font_px(&self) -> f64 {
        let t = (self.width - MIN_CANVAS_WIDTH) / (MAX_CANVAS_WIDTH - MIN_CANVAS_WIDTH);
        QUESTION_FONT_MIN + (QUESTION_FONT_MAX - QUESTION_FONT_MIN) * t.clamp(0.0, 1.0)
    }
}
