//! DOM event to canvas-engine input mapping.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::{Button as CanvasButton, Key as CanvasKey};

#[cfg(feature = "hydrate")]
use canvas::geom::Point as CanvasPoint;

/// `PointerEvent.button` to engine button.
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

/// Keys the canvas consumes; the browser must not scroll or click on them.
pub fn should_prevent_default_key(key: &str) -> bool {
    let key = CanvasKey::new(key);
    key.is_next() || key.is_previous() || key.is_activate()
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn map_key(ev: &leptos::ev::KeyboardEvent) -> CanvasKey {
    CanvasKey::new(ev.key())
}
