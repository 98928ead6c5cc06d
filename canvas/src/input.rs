//! Input model: mouse buttons, keys, and the scene state the renderer reads.
//!
//! `Scene` captures which face of the widget is showing: the ballot with
//! selectable options, or the post-vote message (with or without the results
//! button). `UiState` is the transient interaction state layered on top:
//! hover, keyboard focus, the last pointer position, and the animation clock.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::hit::HitTarget;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"ArrowDown"`, `"Enter"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    fn is(&self, name: &str) -> bool {
        self.0 == name
    }

    /// Move keyboard focus to the next option.
    #[must_use]
    pub fn is_next(&self) -> bool {
        self.is("ArrowDown") || self.is("ArrowRight")
    }

    /// Move keyboard focus to the previous option.
    #[must_use]
    pub fn is_previous(&self) -> bool {
        self.is("ArrowUp") || self.is("ArrowLeft")
    }

    /// Activate the focused option or button.
    #[must_use]
    pub fn is_activate(&self) -> bool {
        self.is("Enter") || self.is(" ") || self.is("Spacebar")
    }
}

/// Which face of the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Options are selectable.
    #[default]
    Ballot,
    /// A vote has been cast; the results button shows once results are ready.
    Voted { results_ready: bool },
}

impl Scene {
    #[must_use]
    pub fn is_ballot(self) -> bool {
        matches!(self, Self::Ballot)
    }
}

/// Interaction state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub scene: Scene,
    /// Region under the pointer, if any.
    pub hover: Option<HitTarget>,
    /// Option index holding keyboard focus, if any.
    pub focus: Option<usize>,
    /// Last known pointer position; `None` once the pointer leaves.
    pub pointer: Option<Point>,
    /// Animation frame counter.
    pub frame: u64,
    /// Eased position of the stick-figure doodle that trails the pointer.
    pub doodle: Point,
}
