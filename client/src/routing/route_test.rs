use super::*;

// =============================================================
// RouteState
// =============================================================

#[test]
fn new_state_has_no_data() {
    let state = RouteState::new("home", "/home");
    assert_eq!(state.name, "home");
    assert_eq!(state.url, "/home");
    assert!(state.data.is_none());
    assert_eq!(state.page_title(), None);
}

#[test]
fn with_title_creates_data() {
    let state = RouteState::new("home", "/home").with_title("Home");
    assert_eq!(state.page_title(), Some("Home"));
}

#[test]
fn page_title_none_when_data_has_no_title() {
    let mut state = RouteState::new("orders", "/orders");
    state.data = Some(RouteData::default());
    assert_eq!(state.page_title(), None);
}

#[test]
fn with_title_replaces_previous_title() {
    let state = RouteState::new("about", "/about").with_title("First").with_title("Second");
    assert_eq!(state.page_title(), Some("Second"));
}

// =============================================================
// parse_query
// =============================================================

#[test]
fn parse_query_empty() {
    assert!(parse_query("").is_empty());
    assert!(parse_query("?").is_empty());
}

#[test]
fn parse_query_pairs() {
    let params = parse_query("?page=2&sort=name");
    assert_eq!(params.get("page").map(String::as_str), Some("2"));
    assert_eq!(params.get("sort").map(String::as_str), Some("name"));
}

#[test]
fn parse_query_flag_without_value() {
    let params = parse_query("debug");
    assert_eq!(params.get("debug").map(String::as_str), Some(""));
}

#[test]
fn parse_query_later_duplicate_wins() {
    let params = parse_query("a=1&a=2");
    assert_eq!(params.get("a").map(String::as_str), Some("2"));
}

#[test]
fn parse_query_skips_empty_segments() {
    let params = parse_query("?&a=1&&");
    assert_eq!(params.len(), 1);
}

#[test]
fn parse_query_decodes_escapes_and_plus() {
    assert_eq!(parse_query("?q=a%20b"), parse_query("?q=a+b"));
    assert_eq!(parse_query("?q=a+b").get("q").map(String::as_str), Some("a b"));
}

#[test]
fn parse_query_decodes_keys() {
    let params = parse_query("?sort%20by=name%2Casc");
    assert_eq!(params.get("sort by").map(String::as_str), Some("name,asc"));
}
