//! Bridge component between poll state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns layout, hit-testing and drawing. This host feeds it
//! DOM pointer/keyboard events and the current [`Scene`], runs the animation
//! ticker, and turns the engine's [`Action`]s into callbacks the page acts on.

use canvas::consts::{CANVAS_HEIGHT, MAX_CANVAS_WIDTH};
use canvas::input::Scene;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use canvas::layout::canvas_width;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{map_button, map_key, pointer_point, should_prevent_default_key};

/// Animation tick, roughly 30 fps.
#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 33;

#[cfg(feature = "hydrate")]
type EngineCell = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
fn render_logged(engine: &Engine) {
    if let Err(e) = engine.render() {
        leptos::logging::warn!("poll canvas render failed: {e:?}");
    }
}

/// Size the engine from the window. Only touches the backing store when the
/// width or pixel ratio actually changed, unless `force` is set.
#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &mut Engine, css_size: RwSignal<(f64, f64)>, force: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(MAX_CANVAS_WIDTH, canvas_width);
    let dpr = window.device_pixel_ratio().max(1.0);
    let unchanged = (engine.css_size().0 - width).abs() < f64::EPSILON && (engine.core.dpr - dpr).abs() < f64::EPSILON;
    if unchanged && !force {
        return;
    }
    engine.set_viewport(width, dpr);
    css_size.set(engine.css_size());
}

/// Apply engine actions. Runs with the engine borrow released, since the
/// callbacks may update state that feeds back into the engine.
#[cfg(feature = "hydrate")]
fn run_actions(
    actions: Vec<Action>,
    engine: &EngineCell,
    cursor: RwSignal<&'static str>,
    on_vote: Callback<usize>,
    on_show_results: Callback<()>,
) {
    let mut render = false;
    for action in actions {
        match action {
            Action::Vote(index) => on_vote.run(index),
            Action::ShowResults => on_show_results.run(()),
            Action::SetCursor(name) => cursor.set(name),
            Action::RenderNeeded => render = true,
        }
    }
    if render {
        if let Some(engine) = engine.borrow().as_ref() {
            render_logged(engine);
        }
    }
}

/// The hand-drawn ballot / post-vote canvas.
#[component]
pub fn PollCanvas(
    question: String,
    options: Vec<String>,
    #[prop(into)] scene: Signal<Scene>,
    on_vote: Callback<usize>,
    on_show_results: Callback<()>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let cursor = RwSignal::new("default");
    let css_size = RwSignal::new((MAX_CANVAS_WIDTH, CANVAS_HEIGHT));
    let aria_label = question.clone();

    #[cfg(feature = "hydrate")]
    let engine: EngineCell = Rc::new(RefCell::new(None));
    #[cfg(feature = "hydrate")]
    let ticker = StoredValue::new_local(None::<Interval>);

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas, question.clone(), options.clone());
            sync_viewport(&mut instance, css_size, true);
            instance.set_scene(scene.get_untracked());
            render_logged(&instance);
            *engine.borrow_mut() = Some(instance);

            let engine_for_tick = Rc::clone(&engine);
            ticker.set_value(Some(Interval::new(TICK_MS, move || {
                if let Some(engine) = engine_for_tick.borrow_mut().as_mut() {
                    sync_viewport(engine, css_size, false);
                    engine.tick();
                    render_logged(engine);
                }
            })));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&question, &options, &scene, &on_vote, &on_show_results);
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let next = scene.get();
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.set_scene(next))
                .unwrap_or_default();
            run_actions(actions, &engine, cursor, on_vote, on_show_results);
        });
    }

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(Some(interval)) = ticker.try_update_value(Option::take) {
            drop(interval);
        }
    });

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(|e| e.on_pointer_move(point))
                    .unwrap_or_default();
                run_actions(actions, &engine, cursor, on_vote, on_show_results);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(Engine::on_pointer_leave)
                    .unwrap_or_default();
                run_actions(actions, &engine, cursor, on_vote, on_show_results);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.focus();
                }
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(|e| e.on_pointer_down(point, button))
                    .unwrap_or_default();
                run_actions(actions, &engine, cursor, on_vote, on_show_results);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::KeyboardEvent| {
                if should_prevent_default_key(&ev.key()) {
                    ev.prevent_default();
                }
                let key = map_key(&ev);
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(|e| e.on_key_down(&key))
                    .unwrap_or_default();
                run_actions(actions, &engine, cursor, on_vote, on_show_results);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let style = move || {
        let (w, h) = css_size.get();
        format!("width: {w:.0}px; height: {h:.0}px; cursor: {};", cursor.get())
    };

    view! {
        <canvas
            class="poll-canvas"
            node_ref=canvas_ref
            tabindex="0"
            role="application"
            aria-label=aria_label
            style=style
            on:pointermove=on_pointer_move
            on:pointerleave=on_pointer_leave
            on:pointerdown=on_pointer_down
            on:keydown=on_key_down
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
