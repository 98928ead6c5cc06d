#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::RESULTS_BUTTON_SLOP_PX;
use crate::geom::Point;
use crate::input::Scene;
use crate::layout::Layout;

/// Which interactive region was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An option region, by index into the layout's options.
    Option(usize),
    /// The "take me to stats" button.
    ResultsButton,
}

/// Test which region (if any) is under `pt` for the given scene.
///
/// Options are only live on the ballot. The results button is only live
/// after voting once results are ready, and accepts a few pixels of slop
/// around its drawn bounds.
#[must_use]
pub fn hit_test(pt: Point, layout: &Layout, scene: Scene) -> Option<HitTarget> {
    match scene {
        Scene::Ballot => layout
            .options
            .iter()
            .position(|rect| rect.contains(pt))
            .map(HitTarget::Option),
        Scene::Voted { results_ready: true } => layout
            .results_button
            .inflate(RESULTS_BUTTON_SLOP_PX)
            .contains(pt)
            .then_some(HitTarget::ResultsButton),
        Scene::Voted { results_ready: false } => None,
    }
}
