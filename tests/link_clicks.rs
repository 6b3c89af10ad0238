use std::sync::Arc;

use wayfarer::{
    ClickModifiers, LinkHandler, LocationSource, MemoryLocation, MouseButton, NavigateOptions,
    NodeProps, PointerClick, Router, click_navigates, decorate,
};

fn handler_for(location: &Arc<MemoryLocation>, href: &str) -> LinkHandler {
    let router = Router::with_defaults(location.clone());
    LinkHandler::new(router.navigator(), href)
}

#[test]
fn link_when_primary_click_has_no_modifiers_then_it_navigates() {
    let location = Arc::new(MemoryLocation::new("/"));
    let handler = handler_for(&location, "/about");

    let intercepted = handler.handle(&PointerClick::primary());

    assert!(intercepted);
    assert_eq!(location.entries(), ["/", "/about"]);
}

#[test]
fn link_when_ctrl_is_held_then_the_click_passes_through() {
    let location = Arc::new(MemoryLocation::new("/"));
    let handler = handler_for(&location, "/about");

    let intercepted = handler.handle(&PointerClick::with_modifiers(ClickModifiers::CTRL));

    assert!(!intercepted);
    assert_eq!(location.entries(), ["/"]);
}

#[test]
fn link_when_any_modifier_is_held_then_the_click_passes_through() {
    for modifier in [
        ClickModifiers::CTRL,
        ClickModifiers::META,
        ClickModifiers::ALT,
        ClickModifiers::SHIFT,
        ClickModifiers::CTRL | ClickModifiers::SHIFT,
    ] {
        assert!(!click_navigates(&PointerClick::with_modifiers(modifier)));
    }
}

#[test]
fn link_when_non_primary_button_is_clicked_then_the_click_passes_through() {
    for button in [MouseButton::Auxiliary, MouseButton::Secondary] {
        let click = PointerClick {
            button,
            modifiers: ClickModifiers::empty(),
        };
        assert!(!click_navigates(&click));
    }
}

#[test]
fn link_when_replace_is_requested_then_navigation_replaces_the_entry() {
    let location = Arc::new(MemoryLocation::new("/login"));
    let router = Router::with_defaults(location.clone());
    let handler = LinkHandler::with_options(router.navigator(), "/home", NavigateOptions::replacing());

    assert!(handler.handle(&PointerClick::primary()));
    assert_eq!(location.entries(), ["/home"]);
}

#[test]
fn link_interception_does_not_depend_on_the_wrapped_node_kind() {
    // the handler decides, so a wrapped non-anchor node behaves like an anchor
    let location = Arc::new(MemoryLocation::new("/"));
    let handler = handler_for(&location, "/wrapped");

    let base: NodeProps = NodeProps::from([("class".to_string(), "card".to_string())]);
    let added: NodeProps = NodeProps::from([("href".to_string(), handler.href().to_string())]);
    let decorated = decorate(&base, &added);

    assert_eq!(decorated.get("href").map(String::as_str), Some("/wrapped"));
    assert!(handler.handle(&PointerClick::primary()));
    assert_eq!(location.path(), "/wrapped");
}

#[test]
fn decorate_when_keys_conflict_then_added_properties_win() {
    let base = NodeProps::from([
        ("href".to_string(), "/old".to_string()),
        ("class".to_string(), "nav".to_string()),
    ]);
    let added = NodeProps::from([("href".to_string(), "/new".to_string())]);

    let merged = decorate(&base, &added);

    assert_eq!(merged.get("href").map(String::as_str), Some("/new"));
    assert_eq!(merged.get("class").map(String::as_str), Some("nav"));
    // the original node properties are untouched
    assert_eq!(base.get("href").map(String::as_str), Some("/old"));
}
