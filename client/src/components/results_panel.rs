//! Results view: truth headline, live bar chart, or the load-failure notice.
//!
//! The chart canvas stays mounted while the panel is; each time the results
//! state turns `Ready` a fresh [`canvas::chart::Chart`] is installed into the
//! panel's [`ChartSlot`], which clears the previous one first.

use leptos::prelude::*;

use crate::state::results::{ResultsState, ResultsView};

#[cfg(feature = "hydrate")]
use canvas::chart::{Chart, ChartSlot};
#[cfg(feature = "hydrate")]
use canvas::layout::canvas_width;

/// Chart height in CSS pixels.
const CHART_HEIGHT: f64 = 400.0;

#[cfg(feature = "hydrate")]
fn chart_viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (canvas::consts::MAX_CANVAS_WIDTH, 1.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(canvas::consts::MAX_CANVAS_WIDTH, canvas_width);
    (width, window.device_pixel_ratio())
}

#[component]
pub fn ResultsPanel(results: RwSignal<ResultsState>, #[prop(into)] truth: Signal<Option<String>>) -> impl IntoView {
    let chart_ref = NodeRef::<leptos::html::Canvas>::new();
    let css_width = RwSignal::new(canvas::consts::MAX_CANVAS_WIDTH);

    #[cfg(feature = "hydrate")]
    {
        let slot = StoredValue::new_local(ChartSlot::<Chart>::new());
        Effect::new(move || {
            let current = results.with(|r| r.view.clone());
            let Some(canvas_el) = chart_ref.get() else {
                return;
            };
            let ResultsView::Ready(model) = current else {
                slot.update_value(ChartSlot::clear);
                return;
            };
            let (width, dpr) = chart_viewport();
            css_width.set(width);
            slot.update_value(|slot| {
                let chart = slot.install(Chart::new(canvas_el, model, width, CHART_HEIGHT, dpr));
                if let Err(e) = chart.render() {
                    leptos::logging::warn!("results chart render failed: {e:?}");
                }
            });
        });
        on_cleanup(move || {
            slot.try_update_value(ChartSlot::clear);
        });
    }

    // Drop any fetch still in flight.
    on_cleanup(move || {
        results.try_update(ResultsState::reset);
    });

    let status = move || match results.with(|r| r.view.clone()) {
        ResultsView::Loading => Some(view! { <p class="results-status">"Loading live results\u{2026}"</p> }.into_any()),
        ResultsView::Failed(message) => Some(view! { <p class="results-status results-status--error">{message}</p> }.into_any()),
        ResultsView::Idle | ResultsView::Ready(_) => None,
    };
    let chart_style = move || {
        let shown = results.with(|r| r.chart().is_some());
        format!(
            "width: {:.0}px; height: {CHART_HEIGHT:.0}px; display: {};",
            css_width.get(),
            if shown { "block" } else { "none" }
        )
    };

    view! {
        <section class="results-panel" aria-live="polite">
            {move || truth.get().map(|message| view! { <h2 class="results-truth">{message}</h2> })}
            {status}
            <canvas class="results-chart" node_ref=chart_ref style=chart_style aria-label="Live poll results chart"></canvas>
        </section>
    }
}
