use super::*;

#[test]
fn map_button_follows_dom_numbering() {
    assert_eq!(map_button(0), CanvasButton::Primary);
    assert_eq!(map_button(1), CanvasButton::Middle);
    assert_eq!(map_button(2), CanvasButton::Secondary);
    assert_eq!(map_button(4), CanvasButton::Primary);
}

#[test]
fn navigation_and_activation_keys_are_consumed() {
    for key in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "Enter", " "] {
        assert!(should_prevent_default_key(key), "{key:?} should be consumed");
    }
}

#[test]
fn other_keys_pass_through() {
    assert!(!should_prevent_default_key("Tab"));
    assert!(!should_prevent_default_key("Escape"));
    assert!(!should_prevent_default_key("a"));
}
