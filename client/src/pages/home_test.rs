use super::*;
use crate::state::session::SessionUser;

#[test]
fn module_declares_titled_home_state() {
    let module = module();
    assert_eq!(module.name, "home");
    assert_eq!(module.states.len(), 1);
    assert_eq!(module.states[0].url, URL);
    assert_eq!(module.states[0].page_title(), Some("Home"));
}

#[test]
fn url_matches_router_segment() {
    assert_eq!(URL, format!("/{SEGMENT}"));
}

#[test]
fn greeting_for_guest() {
    assert_eq!(greeting(&SessionData::initial()), "Welcome. You are browsing as a guest.");
}

#[test]
fn greeting_for_signed_in_user() {
    let mut session = SessionData::initial();
    session.sign_in(SessionUser::new(2, "frank"));
    assert_eq!(greeting(&session), "Welcome back, frank.");
}
