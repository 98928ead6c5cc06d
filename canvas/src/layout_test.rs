#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// canvas_width
// =============================================================

#[test]
fn canvas_width_subtracts_gutter() {
    assert_eq!(canvas_width(440.0), 400.0);
}

#[test]
fn canvas_width_clamps_wide_windows() {
    assert_eq!(canvas_width(1920.0), 600.0);
}

#[test]
fn canvas_width_clamps_narrow_windows() {
    assert_eq!(canvas_width(200.0), 300.0);
}

#[test]
fn canvas_width_handles_non_finite_input() {
    assert_eq!(canvas_width(f64::NAN), 300.0);
    assert_eq!(canvas_width(f64::INFINITY), 300.0);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn layout_places_options_in_a_column() {
    let layout = Layout::new(600.0, 5);
    assert_eq!(layout.options.len(), 5);
    assert_eq!(layout.options[0], Rect::new(30.0, 145.0, 540.0, 60.0));
    assert_eq!(layout.options[1].y, 220.0);
    assert_eq!(layout.options[4].y, 445.0);
}

#[test]
fn layout_options_fit_inside_canvas() {
    let layout = Layout::new(300.0, 5);
    let last = layout.options.last().copied().unwrap_or_default();
    assert!(last.bottom() < layout.height);
    for rect in &layout.options {
        assert_eq!(rect.x, layout.margin);
        assert_eq!(rect.x + rect.w, layout.width - layout.margin);
    }
}

#[test]
fn layout_options_do_not_overlap() {
    let layout = Layout::new(500.0, 5);
    for pair in layout.options.windows(2) {
        assert!(pair[0].bottom() < pair[1].y);
    }
}

#[test]
fn layout_results_button_is_centered_below_middle() {
    let layout = Layout::new(600.0, 5);
    assert_eq!(layout.results_button, Rect::new(220.0, 425.0, 160.0, 40.0));
}

#[test]
fn layout_zero_options() {
    let layout = Layout::new(600.0, 0);
    assert!(layout.options.is_empty());
}

#[test]
fn layout_clamps_width() {
    assert_eq!(Layout::new(10_000.0, 1).width, 600.0);
    assert_eq!(Layout::new(10.0, 1).width, 300.0);
}

#[test]
fn question_font_scales_with_width() {
    assert_eq!(Layout::new(300.0, 0).question_font_px(), 18.0);
    assert_eq!(Layout::new(600.0, 0).question_font_px(), 24.0);
    assert_eq!(Layout::new(450.0, 0).question_font_px(), 21.0);
}
