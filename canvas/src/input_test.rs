use super::*;

// =============================================================
// Key
// =============================================================

#[test]
fn key_navigation_names() {
    assert!(Key::new("ArrowDown").is_next());
    assert!(Key::new("ArrowRight").is_next());
    assert!(Key::new("ArrowUp").is_previous());
    assert!(Key::new("ArrowLeft").is_previous());
    assert!(!Key::new("ArrowUp").is_next());
}

#[test]
fn key_activation_names() {
    assert!(Key::new("Enter").is_activate());
    assert!(Key::new(" ").is_activate());
    assert!(Key::new("Spacebar").is_activate());
    assert!(!Key::new("Escape").is_activate());
}

#[test]
fn key_equality() {
    assert_eq!(Key::new("Enter"), Key("Enter".to_owned()));
    assert_ne!(Key::new("Enter"), Key::new("Escape"));
}

// =============================================================
// Scene
// =============================================================

#[test]
fn scene_default_is_ballot() {
    assert_eq!(Scene::default(), Scene::Ballot);
    assert!(Scene::default().is_ballot());
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_idle() {
    let ui = UiState::default();
    assert_eq!(ui.scene, Scene::Ballot);
    assert!(ui.hover.is_none());
    assert!(ui.focus.is_none());
    assert!(ui.pointer.is_none());
    assert_eq!(ui.frame, 0);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}
