//! Shared numeric constants for the canvas crate.

// ── Canvas bounds ───────────────────────────────────────────────

/// Horizontal space reserved around the canvas when sizing from the window width.
pub const WINDOW_GUTTER_PX: f64 = 40.0;

/// Narrowest canvas width, in CSS pixels.
pub const MIN_CANVAS_WIDTH: f64 = 300.0;

/// Widest canvas width, in CSS pixels.
pub const MAX_CANVAS_WIDTH: f64 = 600.0;

/// Fixed canvas height, in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 650.0;

/// Side margin as a fraction of the canvas width.
pub const MARGIN_RATIO: f64 = 0.05;

// ── Question ────────────────────────────────────────────────────

/// Top of the question text block.
pub const QUESTION_TOP: f64 = 25.0;

/// Height reserved for the wrapped question text.
pub const QUESTION_HEIGHT: f64 = 100.0;

/// Question font size at [`MIN_CANVAS_WIDTH`].
pub const QUESTION_FONT_MIN: f64 = 18.0;

/// Question font size at [`MAX_CANVAS_WIDTH`].
pub const QUESTION_FONT_MAX: f64 = 24.0;

// ── Options ─────────────────────────────────────────────────────

/// Top of the first option region.
pub const OPTIONS_TOP: f64 = 145.0;

/// Height of each option region.
pub const OPTION_HEIGHT: f64 = 60.0;

/// Vertical gap between option regions.
pub const OPTION_GAP: f64 = 15.0;

/// Option label font size.
pub const OPTION_FONT_PX: f64 = 18.0;

// ── Results button ──────────────────────────────────────────────

/// Width of the "take me to stats" button.
pub const RESULTS_BUTTON_WIDTH: f64 = 160.0;

/// Height of the "take me to stats" button.
pub const RESULTS_BUTTON_HEIGHT: f64 = 40.0;

/// Offset of the button's top edge below the vertical centre.
pub const RESULTS_BUTTON_OFFSET_Y: f64 = 100.0;

/// Extra pointer slop around the results button, in CSS pixels.
pub const RESULTS_BUTTON_SLOP_PX: f64 = 5.0;

// ── Sketch effects ──────────────────────────────────────────────

/// Maximum per-vertex jitter for wobbly rectangles.
pub const WOBBLE_PX: f64 = 0.5;

/// Phase advance per animation frame for the question and doodle sway.
pub const SWAY_STEP: f64 = 0.1;

/// Fraction of the remaining distance the doodle covers per frame.
pub const DOODLE_EASE: f64 = 0.08;

/// Offset of the doodle from the pointer, in CSS pixels.
pub const DOODLE_OFFSET_PX: f64 = 10.0;
