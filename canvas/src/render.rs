//! Rendering: draws the hand-drawn poll sketch to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`]
//! for the poll face. It receives a read-only view of [`EngineCore`] and
//! produces pixels. It does not mutate any application state.
//!
//! The sketchy look comes from small per-frame vertex jitter and a slow sway
//! of headline text. Jitter is derived from the frame counter rather than a
//! random source so a given frame always draws the same way.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{OPTION_FONT_PX, SWAY_STEP, WOBBLE_PX};
use crate::engine::EngineCore;
use crate::geom::{Point, Rect};
use crate::hit::HitTarget;
use crate::input::Scene;

const INK: &str = "rgb(30, 30, 30)";
const CHECK_GREEN: &str = "rgb(0, 150, 0)";
const BUTTON_FILL: &str = "rgb(255, 150, 150)";
const BUTTON_FILL_HOVER: &str = "rgb(255, 100, 100)";
const FOCUS_RING: &str = "rgb(40, 90, 200)";

const QUESTION_FONT: &str = "'Permanent Marker', cursive";
const OPTION_FONT: &str = "Kalam, cursive";
const MESSAGE_FONT: &str = "Caveat, cursive";

const VOTED_HEADLINE: &str = "Oh, you think you're clever. 😈";
const VOTED_LINE_1: &str = "We've archived your guess.";
const VOTED_LINE_2: &str = "Check back next month for the sad truth.";
const RESULTS_BUTTON_LABEL: &str = "TAKE ME TO STATS";

/// Draw the full scene: question and options on the ballot, or the post-vote
/// message (and results button), followed by the pointer doodle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let layout = &core.layout;
    let dpr = core.dpr;

    // Layer 1: clear to paper white in CSS-pixel space.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str("white");
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    // Layer 2: the current face.
    match core.ui.scene {
        Scene::Ballot => draw_ballot(ctx, core)?,
        Scene::Voted { results_ready } => draw_voted(ctx, core, results_ready)?,
    }

    // Layer 3: the doodle trailing the pointer.
    if core.ui.pointer.is_some() {
        draw_doodle(ctx, core)?;
    }

    Ok(())
}

// =============================================================
// Ballot
// =============================================================

fn draw_ballot(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let layout = &core.layout;
    let phase = phase(core.ui.frame);

    // Question, gently swaying.
    let font_px = layout.question_font_px();
    ctx.save();
    ctx.set_fill_style_str(INK);
    ctx.set_font(&format!("{font_px:.1}px {QUESTION_FONT}"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    let sway = Point::new(phase.sin() * 0.5, phase.cos() * 0.5);
    let line_height = font_px * 1.3;
    for (i, line) in wrap_text_lines(ctx, &core.question, layout.question.w).iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = layout.question.y + sway.y + i as f64 * line_height;
        if y + line_height > layout.question.bottom() {
            break;
        }
        ctx.fill_text(line, layout.question.x + sway.x, y)?;
    }
    ctx.restore();

    // Options.
    for (i, (rect, text)) in layout.options.iter().zip(&core.options).enumerate() {
        let hovered = core.ui.hover == Some(HitTarget::Option(i));
        draw_option(ctx, *rect, text, hovered, core.ui.frame, i)?;
        if core.ui.focus == Some(i) {
            draw_focus_ring(ctx, *rect)?;
        }
    }
    Ok(())
}

fn draw_option(
    ctx: &CanvasRenderingContext2d,
    rect: Rect,
    text: &str,
    hovered: bool,
    frame: u64,
    index: usize,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(INK);
    ctx.set_line_width(if hovered { 2.5 } else { 1.2 });
    #[allow(clippy::cast_precision_loss)]
    let seed = index as f64 * 97.0;
    draw_wobbly_rect(ctx, rect, frame, seed);

    ctx.set_fill_style_str(INK);
    ctx.set_font(&format!("{OPTION_FONT_PX}px {OPTION_FONT}"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    let label = fit_text_with_ellipsis(ctx, text, (rect.w - 50.0).max(1.0));
    ctx.fill_text(&label, rect.x + 15.0, rect.y + rect.h / 2.0)?;

    if hovered {
        draw_checkmark(ctx, Point::new(rect.x + rect.w - 30.0, rect.y + rect.h / 2.0), frame, seed);
    }
    ctx.restore();
    Ok(())
}

fn draw_checkmark(ctx: &CanvasRenderingContext2d, at: Point, frame: u64, seed: f64) {
    let j = |k: f64| jitter(frame, seed + k);
    ctx.set_stroke_style_str(CHECK_GREEN);
    ctx.set_line_width(4.0);
    ctx.begin_path();
    ctx.move_to(at.x, at.y);
    ctx.line_to(at.x + 8.0 + j(1.0), at.y + 8.0 + j(2.0));
    ctx.move_to(at.x + 8.0, at.y + 8.0);
    ctx.line_to(at.x + 20.0 + j(3.0), at.y - 10.0 + j(4.0));
    ctx.stroke();
}

fn draw_focus_ring(ctx: &CanvasRenderingContext2d, rect: Rect) -> Result<(), JsValue> {
    let ring = rect.inflate(4.0);
    ctx.save();
    ctx.set_stroke_style_str(FOCUS_RING);
    ctx.set_line_width(2.0);
    ctx.set_line_dash(&dash_pattern(&[6.0, 4.0]))?;
    ctx.stroke_rect(ring.x, ring.y, ring.w, ring.h);
    ctx.restore();
    Ok(())
}

// =============================================================
// Voted
// =============================================================

fn draw_voted(ctx: &CanvasRenderingContext2d, core: &EngineCore, results_ready: bool) -> Result<(), JsValue> {
    let layout = &core.layout;
    let phase = phase(core.ui.frame);
    let cx = layout.width / 2.0;
    let cy = layout.height / 2.0;

    ctx.save();
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_font(&format!("36px {MESSAGE_FONT}"));
    ctx.set_fill_style_str(CHECK_GREEN);
    let headline = fit_text_with_ellipsis(ctx, VOTED_HEADLINE, layout.width - 2.0 * layout.margin);
    ctx.fill_text(&headline, cx + phase.sin() * 2.0, cy - 30.0 + phase.cos() * 2.0)?;

    ctx.set_font(&format!("24px {MESSAGE_FONT}"));
    ctx.set_fill_style_str(INK);
    let max_w = layout.width - 2.0 * layout.margin;
    ctx.fill_text(&fit_text_with_ellipsis(ctx, VOTED_LINE_1, max_w), cx, cy + 15.0)?;
    ctx.fill_text(&fit_text_with_ellipsis(ctx, VOTED_LINE_2, max_w), cx, cy + 50.0)?;
    ctx.restore();

    if results_ready {
        let hovered = core.ui.hover == Some(HitTarget::ResultsButton);
        draw_results_button(ctx, layout.results_button, hovered)?;
    }
    Ok(())
}

fn draw_results_button(ctx: &CanvasRenderingContext2d, rect: Rect, hovered: bool) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(if hovered { BUTTON_FILL_HOVER } else { BUTTON_FILL });
    rounded_rect_path(ctx, rect, 10.0)?;
    ctx.fill();

    ctx.set_fill_style_str(INK);
    ctx.set_font(&format!("14px {MESSAGE_FONT}"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let center = rect.center();
    ctx.fill_text(RESULTS_BUTTON_LABEL, center.x, center.y)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Doodle
// =============================================================

fn draw_doodle(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let wobble = phase(core.ui.frame).sin() * 2.0;
    let origin = core.ui.doodle;
    let pointer = core.ui.pointer.unwrap_or(origin);

    // Head leans toward the pointer.
    let lean = |d: f64| (d / 100.0 * 4.0).clamp(-4.0, 4.0);
    let head_x = lean(pointer.x - origin.x);
    let head_y = lean(pointer.y - origin.y);

    ctx.save();
    ctx.translate(origin.x + wobble, origin.y + wobble)?;
    ctx.set_stroke_style_str(INK);
    ctx.set_line_width(3.0);

    ctx.begin_path();
    ctx.arc(head_x, -25.0 + head_y, 10.0, 0.0, 2.0 * PI)?;
    ctx.stroke();

    ctx.begin_path();
    // Body.
    ctx.move_to(0.0, -15.0);
    ctx.line_to(0.0, 10.0);
    // Arms.
    ctx.move_to(0.0, 0.0);
    ctx.line_to(-10.0 + wobble, -5.0);
    ctx.move_to(0.0, 0.0);
    ctx.line_to(10.0 - wobble, -5.0);
    // Legs.
    ctx.move_to(0.0, 10.0);
    ctx.line_to(-5.0, 20.0);
    ctx.move_to(0.0, 10.0);
    ctx.line_to(5.0, 20.0);
    ctx.stroke();

    ctx.restore();
    Ok(())
}

// =============================================================
// Sketch helpers
// =============================================================

#[allow(clippy::cast_precision_loss)]
fn phase(frame: u64) -> f64 {
    frame as f64 * SWAY_STEP
}

/// Deterministic pseudo-random offset in `[-WOBBLE_PX, WOBBLE_PX]`.
#[allow(clippy::cast_precision_loss)]
fn jitter(frame: u64, seed: f64) -> f64 {
    let x = ((frame as f64) * 78.233 + seed * 12.9898).sin() * 43_758.545_3;
    x.fract() * WOBBLE_PX
}

fn draw_wobbly_rect(ctx: &CanvasRenderingContext2d, rect: Rect, frame: u64, seed: f64) {
    let corners = [
        (rect.x, rect.y),
        (rect.x + rect.w, rect.y),
        (rect.x + rect.w, rect.y + rect.h),
        (rect.x, rect.y + rect.h),
        (rect.x, rect.y),
    ];
    ctx.begin_path();
    for (k, (x, y)) in corners.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let s = seed + k as f64 * 2.0;
        let px = x + jitter(frame, s);
        let py = y + jitter(frame, s + 1.0);
        if k == 0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
    }
    ctx.stroke();
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0);
    let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}

fn dash_pattern(segments: &[f64]) -> JsValue {
    segments
        .iter()
        .map(|v| JsValue::from_f64(*v))
        .collect::<js_sys::Array>()
        .into()
}

// =============================================================
// Text helpers
// =============================================================

pub(crate) fn wrap_text_lines(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> Vec<String> {
    let mut out = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measured_text_width(ctx, &candidate) <= max_w {
                current = candidate;
            } else {
                out.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        out.push(current);
    }
    out
}

pub(crate) fn fit_text_with_ellipsis(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if measured_text_width(ctx, trimmed) <= max_w {
        return trimmed.to_owned();
    }

    let ellipsis = "...";
    let mut chars: Vec<char> = trimmed.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}{}", chars.iter().collect::<String>().trim_end(), ellipsis);
        if measured_text_width(ctx, &candidate) <= max_w {
            return candidate;
        }
    }
    ellipsis.to_owned()
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => f64::INFINITY,
    }
}
