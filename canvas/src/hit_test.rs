use super::*;

fn layout() -> Layout {
    Layout::new(600.0, 5)
}

fn center_of_option(layout: &Layout, index: usize) -> Point {
    layout.options[index].center()
}

// =============================================================
// Ballot
// =============================================================

#[test]
fn ballot_hits_each_option() {
    let layout = layout();
    for i in 0..5 {
        let hit = hit_test(center_of_option(&layout, i), &layout, Scene::Ballot);
        assert_eq!(hit, Some(HitTarget::Option(i)));
    }
}

#[test]
fn ballot_gap_between_options_misses() {
    let layout = layout();
    let gap_y = layout.options[0].bottom() + 5.0;
    assert_eq!(hit_test(Point::new(300.0, gap_y), &layout, Scene::Ballot), None);
}

#[test]
fn ballot_margin_misses() {
    let layout = layout();
    let y = layout.options[0].center().y;
    assert_eq!(hit_test(Point::new(5.0, y), &layout, Scene::Ballot), None);
}

#[test]
fn ballot_ignores_results_button_region() {
    let layout = layout();
    // The button sits over the option column; it is not live on the ballot.
    let pt = layout.results_button.center();
    assert!(!matches!(hit_test(pt, &layout, Scene::Ballot), Some(HitTarget::ResultsButton)));
}

// =============================================================
// Voted
// =============================================================

#[test]
fn voted_without_results_hits_nothing() {
    let layout = layout();
    let scene = Scene::Voted { results_ready: false };
    assert_eq!(hit_test(center_of_option(&layout, 0), &layout, scene), None);
    assert_eq!(hit_test(layout.results_button.center(), &layout, scene), None);
}

#[test]
fn voted_with_results_hits_button() {
    let layout = layout();
    let scene = Scene::Voted { results_ready: true };
    assert_eq!(
        hit_test(layout.results_button.center(), &layout, scene),
        Some(HitTarget::ResultsButton)
    );
}

#[test]
fn voted_results_button_accepts_slop() {
    let layout = layout();
    let scene = Scene::Voted { results_ready: true };
    let b = layout.results_button;
    let just_outside = Point::new(b.x - 3.0, b.center().y);
    assert_eq!(hit_test(just_outside, &layout, scene), Some(HitTarget::ResultsButton));
    let far_outside = Point::new(b.x - 10.0, b.center().y);
    assert_eq!(hit_test(far_outside, &layout, scene), None);
}

#[test]
fn voted_options_are_not_selectable() {
    let layout = layout();
    let scene = Scene::Voted { results_ready: true };
    assert_eq!(hit_test(center_of_option(&layout, 0), &layout, scene), None);
}

// =============================================================
// HitTarget
// =============================================================

#[test]
fn hit_target_equality() {
    assert_eq!(HitTarget::Option(1), HitTarget::Option(1));
    assert_ne!(HitTarget::Option(1), HitTarget::Option(2));
    assert_ne!(HitTarget::Option(0), HitTarget::ResultsButton);
}
