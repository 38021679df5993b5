//! Home module: the console landing page and default route target.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::modules::FeatureModule;
use crate::routing::RouteState;
use crate::state::session::SessionData;

pub const MODULE_NAME: &str = "home";
/// Router path segment for the home page.
pub const SEGMENT: &str = "home";
pub const URL: &str = "/home";
pub const PAGE_TITLE: &str = "Home";

#[must_use]
pub fn module() -> FeatureModule {
    FeatureModule::new(MODULE_NAME, vec![RouteState::new("home", URL).with_title(PAGE_TITLE)])
}

fn greeting(session: &SessionData) -> String {
    if session.is_authenticated {
        format!("Welcome back, {}.", session.user.username)
    } else {
        "Welcome. You are browsing as a guest.".to_owned()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionData>>();

    view! {
        <section class="page page--home">
            <h1>"eCommerce Admin"</h1>
            <p class="page__lead">{move || greeting(&session.get())}</p>
            <p>"Manage catalog, orders and customers from one place."</p>
        </section>
    }
}
