use super::*;
use crate::routing::RouteState;
use crate::state::session::SessionUser;

fn table() -> RouteTable {
    let mut table = RouteTable::new();
    table.declare(RouteState::new("home", "/home").with_title("Home")).unwrap();
    table.declare(RouteState::new("reports", "/reports")).unwrap();
    table
}

// =============================================================
// nav_items
// =============================================================

#[test]
fn nav_items_use_title_then_name() {
    let items = nav_items(&table());
    assert_eq!(
        items,
        vec![
            NavItem { url: "/home".to_owned(), label: "Home".to_owned() },
            NavItem { url: "/reports".to_owned(), label: "reports".to_owned() },
        ]
    );
}

#[test]
fn nav_items_empty_table() {
    assert!(nav_items(&RouteTable::new()).is_empty());
}

// =============================================================
// is_active / link_class
// =============================================================

#[test]
fn active_ignores_trailing_slash_and_query() {
    assert!(is_active("/home/", "/home"));
    assert!(is_active("/home?tab=1", "/home"));
    assert!(!is_active("/about", "/home"));
}

#[test]
fn link_class_marks_active() {
    assert!(link_class(true).contains("--active"));
    assert!(!link_class(false).contains("--active"));
}

// =============================================================
// session_badge
// =============================================================

#[test]
fn badge_for_guest() {
    assert_eq!(session_badge(&SessionData::initial()), "Guest");
}

#[test]
fn badge_for_signed_in_user() {
    let mut session = SessionData::initial();
    session.sign_in(SessionUser::new(1, "grace"));
    assert_eq!(session_badge(&session), "Signed in as grace");
}
