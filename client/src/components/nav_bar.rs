//! Top bar with links to every declared route and the session badge.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::bootstrap::APP_NAME;
use crate::routing::RouteTable;
use crate::routing::table::normalize_path;
use crate::state::session::SessionData;

/// A single link in the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavItem {
    pub url: String,
    pub label: String,
}

/// One item per declared state, labelled by page title or state name.
pub(crate) fn nav_items(routes: &RouteTable) -> Vec<NavItem> {
    routes
        .states()
        .iter()
        .map(|state| NavItem {
            url: state.url.clone(),
            label: state.page_title().unwrap_or(&state.name).to_owned(),
        })
        .collect()
}

pub(crate) fn is_active(pathname: &str, url: &str) -> bool {
    normalize_path(pathname) == url
}

fn link_class(active: bool) -> &'static str {
    if active { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
}

pub(crate) fn session_badge(session: &SessionData) -> String {
    if session.is_authenticated {
        format!("Signed in as {}", session.user.username)
    } else {
        "Guest".to_owned()
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let routes = expect_context::<RouteTable>();
    let session = expect_context::<RwSignal<SessionData>>();
    let pathname = use_location().pathname;

    let links = nav_items(&routes)
        .into_iter()
        .map(|item| {
            let url = item.url.clone();
            view! {
                <li>
                    <a href=item.url class=move || link_class(is_active(&pathname.get(), &url))>
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">{APP_NAME}</span>
            <ul class="nav-bar__links">{links}</ul>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__session">{move || session_badge(&session.get())}</span>
            <Show when=move || session.get().is_authenticated>
                <button class="btn nav-bar__sign-out" on:click=move |_| session.update(SessionData::sign_out)>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
