use super::test_helpers::SharedTitle;
use super::*;
use crate::routing::nav::{NavigationEvent, NavigationTracker};
use crate::routing::route::{RouteData, RouteParams};

fn navigate(bus: &NavigationBus, tracker: &mut NavigationTracker, state: RouteState) {
    if let Some(event) = tracker.transition(state, RouteParams::new()) {
        bus.publish(&event);
    }
}

// =============================================================
// derive_page_title
// =============================================================

#[test]
fn derive_appends_suffix() {
    let state = RouteState::new("home", "/home").with_title("Home");
    assert_eq!(derive_page_title(&state).as_deref(), Some("Home | eCommerce Admin"));
}

#[test]
fn derive_none_without_data() {
    let state = RouteState::new("plain", "/plain");
    assert_eq!(derive_page_title(&state), None);
}

#[test]
fn derive_none_with_data_but_no_title() {
    let mut state = RouteState::new("plain", "/plain");
    state.data = Some(RouteData { page_title: None });
    assert_eq!(derive_page_title(&state), None);
}

#[test]
fn derive_keeps_empty_title() {
    let state = RouteState::new("blank", "/blank").with_title("");
    assert_eq!(derive_page_title(&state).as_deref(), Some(" | eCommerce Admin"));
}

// =============================================================
// PageTitle
// =============================================================

#[test]
fn page_title_defaults_to_app_name() {
    let title = PageTitle::default();
    assert_eq!(title.get(), None);
    assert_eq!(title.display(), DEFAULT_TITLE);
}

#[test]
fn apply_none_leaves_value_unchanged() {
    let mut title = PageTitle::default();
    title.set("Home | eCommerce Admin".to_owned());
    assert!(!title.apply(None));
    assert_eq!(title.display(), "Home | eCommerce Admin");
}

#[test]
fn apply_some_replaces_value() {
    let mut title = PageTitle::default();
    assert!(title.apply(Some("About | eCommerce Admin".to_owned())));
    assert_eq!(title.get(), Some("About | eCommerce Admin"));
}

// =============================================================
// install_title_listener
// =============================================================

#[test]
fn listener_sets_title_on_navigation() {
    let title = SharedTitle::default();
    let mut bus = NavigationBus::new();
    install_title_listener(&mut bus, title.clone());

    let mut tracker = NavigationTracker::default();
    navigate(&bus, &mut tracker, RouteState::new("home", "/home").with_title("Home"));

    assert_eq!(title.current().as_deref(), Some("Home | eCommerce Admin"));
}

#[test]
fn listener_skips_untitled_state() {
    let title = SharedTitle::default();
    let mut bus = NavigationBus::new();
    install_title_listener(&mut bus, title.clone());

    let mut tracker = NavigationTracker::default();
    navigate(&bus, &mut tracker, RouteState::new("home", "/home").with_title("Home"));
    navigate(&bus, &mut tracker, RouteState::new("untitled", "/untitled"));

    assert_eq!(title.current().as_deref(), Some("Home | eCommerce Admin"));
}

#[test]
fn listener_on_fresh_scope_with_untitled_state_keeps_default() {
    let title = SharedTitle::default();
    let mut bus = NavigationBus::new();
    install_title_listener(&mut bus, title.clone());

    bus.publish(&NavigationEvent {
        to: RouteState::new("untitled", "/untitled"),
        to_params: RouteParams::new(),
        from: None,
        from_params: RouteParams::new(),
    });

    assert_eq!(title.current(), None);
}

#[test]
fn listener_hands_every_derived_title_to_sink() {
    let title = SharedTitle::default();
    let mut bus = NavigationBus::new();
    install_title_listener(&mut bus, title.clone());

    let mut tracker = NavigationTracker::default();
    navigate(&bus, &mut tracker, RouteState::new("home", "/home").with_title("Home"));
    navigate(&bus, &mut tracker, RouteState::new("untitled", "/untitled"));

    assert_eq!(title.received(), [Some("Home | eCommerce Admin".to_owned()), None]);
    assert_eq!(title.current().as_deref(), Some("Home | eCommerce Admin"));
}

#[test]
fn signal_sink_keeps_title_when_none_applied() {
    leptos::prelude::Owner::new().with(|| {
        let signal = RwSignal::new(PageTitle::default());
        signal.apply_title(Some("About | eCommerce Admin".to_owned()));
        signal.apply_title(None);
        assert_eq!(signal.with_untracked(|t| t.display().to_owned()), "About | eCommerce Admin");
    });
}
