//! About module: what the console is for.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::modules::FeatureModule;
use crate::routing::RouteState;

pub const MODULE_NAME: &str = "about";
pub const SEGMENT: &str = "about";
pub const URL: &str = "/about";
pub const PAGE_TITLE: &str = "What is It?";

#[must_use]
pub fn module() -> FeatureModule {
    FeatureModule::new(MODULE_NAME, vec![RouteState::new("about", URL).with_title(PAGE_TITLE)])
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1>"What is It?"</h1>
            <p>
                "The eCommerce Admin console is the back-office front end for the store: "
                "catalog upkeep, order handling and customer support."
            </p>
        </section>
    }
}
