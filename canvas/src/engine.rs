use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{DOODLE_EASE, DOODLE_OFFSET_PX, MAX_CANVAS_WIDTH};
use crate::geom::Point;
use crate::hit::{HitTarget, hit_test};
use crate::input::{Button, Key, Scene, UiState};
use crate::layout::Layout;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user picked the option at this index.
    Vote(usize),
    /// The user asked to see the results chart.
    ShowResults,
    /// The CSS cursor the canvas should show.
    SetCursor(&'static str),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub question: String,
    /// Display text of each option, in layout order.
    pub options: Vec<String>,
    pub layout: Layout,
    pub ui: UiState,
    pub dpr: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        let layout = Layout::new(MAX_CANVAS_WIDTH, options.len());
        Self { question: question.into(), options, layout, ui: UiState::default(), dpr: 1.0 }
    }

    // --- Data inputs ---

    /// Re-lay out for a new canvas width and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, dpr: f64) {
        self.layout = Layout::new(width_css, self.options.len());
        self.dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        self.refresh_hover();
    }

    /// Switch between the ballot and the post-vote face.
    pub fn set_scene(&mut self, scene: Scene) -> Vec<Action> {
        if self.ui.scene == scene {
            return Vec::new();
        }
        self.ui.scene = scene;
        if !scene.is_ballot() {
            self.ui.focus = None;
        }
        self.refresh_hover();
        vec![Action::SetCursor(cursor_for(self.ui.hover)), Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.ui.pointer = Some(pt);
        let hover = hit_test(pt, &self.layout, self.ui.scene);
        if hover == self.ui.hover {
            return Vec::new();
        }
        self.ui.hover = hover;
        vec![Action::SetCursor(cursor_for(hover)), Action::RenderNeeded]
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.ui.pointer = None;
        if self.ui.hover.take().is_none() {
            return Vec::new();
        }
        vec![Action::SetCursor(cursor_for(None)), Action::RenderNeeded]
    }

    /// Pointer press. Hit-tests at the press position so taps work without a prior hover.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.ui.pointer = Some(pt);
        match hit_test(pt, &self.layout, self.ui.scene) {
            Some(HitTarget::Option(i)) => vec![Action::Vote(i)],
            Some(HitTarget::ResultsButton) => vec![Action::ShowResults],
            None => Vec::new(),
        }
    }

    /// Keyboard access: arrows move focus across options, Enter/Space activates.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match self.ui.scene {
            Scene::Ballot => self.ballot_key(key),
            Scene::Voted { results_ready: true } if key.is_activate() => vec![Action::ShowResults],
            Scene::Voted { .. } => Vec::new(),
        }
    }

    fn ballot_key(&mut self, key: &Key) -> Vec<Action> {
        let count = self.options.len();
        if count == 0 {
            return Vec::new();
        }
        if key.is_next() {
            self.ui.focus = Some(self.ui.focus.map_or(0, |i| (i + 1) % count));
            return vec![Action::RenderNeeded];
        }
        if key.is_previous() {
            self.ui.focus = Some(self.ui.focus.map_or(count - 1, |i| (i + count - 1) % count));
            return vec![Action::RenderNeeded];
        }
        if key.is_activate() {
            return self.ui.focus.map(Action::Vote).into_iter().collect();
        }
        Vec::new()
    }

    // --- Animation ---

    /// Advance the animation clock and ease the doodle toward the pointer.
    pub fn tick(&mut self) {
        self.ui.frame = self.ui.frame.wrapping_add(1);
        if let Some(pt) = self.ui.pointer {
            let target = Point::new(pt.x + DOODLE_OFFSET_PX, pt.y + DOODLE_OFFSET_PX);
            self.ui.doodle = self.ui.doodle.lerp(target, DOODLE_EASE);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.ui.scene
    }

    #[must_use]
    pub fn hover(&self) -> Option<HitTarget> {
        self.ui.hover
    }

    #[must_use]
    pub fn focus(&self) -> Option<usize> {
        self.ui.focus
    }

    fn refresh_hover(&mut self) {
        self.ui.hover = self
            .ui
            .pointer
            .and_then(|pt| hit_test(pt, &self.layout, self.ui.scene));
    }
}

fn cursor_for(hover: Option<HitTarget>) -> &'static str {
    if hover.is_some() { "pointer" } else { "default" }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, question: impl Into<String>, options: Vec<String>) -> Self {
        Self { canvas, core: EngineCore::new(question, options) }
    }

    // --- Viewport ---

    /// Update the canvas width and device pixel ratio, resizing the backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, dpr);
        let layout = &self.core.layout;
        self.canvas.set_width((layout.width * self.core.dpr).round() as u32);
        self.canvas.set_height((layout.height * self.core.dpr).round() as u32);
    }

    /// Canvas size in CSS pixels.
    #[must_use]
    pub fn css_size(&self) -> (f64, f64) {
        (self.core.layout.width, self.core.layout.height)
    }

    // --- Delegated inputs ---

    pub fn set_scene(&mut self, scene: Scene) -> Vec<Action> {
        self.core.set_scene(scene)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        render::draw(&ctx, &self.core)
    }
}

/// Fetch the 2D rendering context of `canvas`.
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
