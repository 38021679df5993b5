//! Route configuration, navigation events and title derivation.
//!
//! ARCHITECTURE
//! ============
//! `leptos_router` renders views and tracks the browser location. This layer
//! holds the metadata the router does not: which states exist, where an
//! unmatched location falls back to, and which listeners hear about a
//! successful navigation. All of it is plain data so it can be exercised
//! without a live router.

pub mod nav;
pub mod route;
pub mod table;
pub mod title;

pub use nav::{ListenerId, NavigationBus, NavigationEvent, NavigationTracker};
pub use route::{RouteData, RouteParams, RouteState, parse_query};
pub use table::{Resolution, RouteError, RouteTable};
pub use title::{PageTitle, TitleSink, derive_page_title, install_title_listener};

use crate::modules::FeatureModule;

/// Name under which the routing layer registers itself.
pub const MODULE_NAME: &str = "router";

/// The routing layer as a feature module. It contributes no states of its
/// own; registering it satisfies the `router` dependency.
#[must_use]
pub fn module() -> FeatureModule {
    FeatureModule::new(MODULE_NAME, Vec::new())
}
