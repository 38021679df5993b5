//! # admin-client
//!
//! Leptos + WASM frontend for the eCommerce admin console.
//!
//! Startup is owned by [`bootstrap`]: it registers the feature modules,
//! configures the `/home` default route, seeds the session context and
//! attaches the page-title listener to the navigation bus. The [`app`]
//! module turns the bootstrapped configuration into the router and views.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod modules;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// Browser entry point: hydrate the server-rendered console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
