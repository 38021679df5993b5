//! One-time console startup.
//!
//! LIFECYCLE
//! =========
//! 1. Register feature modules and check the declared dependency set.
//! 2. Configure the default route for unmatched locations.
//! 3. Seed the session state.
//! 4. Attach the page-title listener to the navigation bus.
//!
//! `bootstrap` builds everything from scratch on each call and touches no
//! global state, so running it again yields the same starting point.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::modules::{FeatureModule, ModuleRegistry};
use crate::pages::{about, home};
use crate::routing::{self, NavigationBus, RouteError, RouteTable, TitleSink, install_title_listener};
use crate::state::session::SessionData;

/// Product name shown in the navigation bar and default title.
pub const APP_NAME: &str = "eCommerce Admin";

/// Module names the console cannot start without.
pub const REQUIRED_MODULES: [&str; 3] = [home::MODULE_NAME, about::MODULE_NAME, routing::MODULE_NAME];

/// Where unmatched locations are sent.
pub const DEFAULT_ROUTE: &str = home::URL;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("module `{0}` is a declared dependency but was never registered")]
    MissingModule(String),
    #[error("module `{0}` is registered more than once")]
    DuplicateModule(String),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Everything startup produces, ready to hand to the view layer.
#[derive(Debug)]
pub struct Bootstrapped {
    pub routes: RouteTable,
    pub session: SessionData,
    pub bus: NavigationBus,
}

/// The modules the console ships with.
#[must_use]
pub fn default_modules() -> Vec<FeatureModule> {
    vec![home::module(), about::module(), routing::module()]
}

/// Run startup against [`REQUIRED_MODULES`], sending titles to `titles`.
///
/// # Errors
///
/// Fails fast with the first [`BootstrapError`]; nothing is recovered.
pub fn bootstrap<S: TitleSink>(modules: Vec<FeatureModule>, titles: S) -> Result<Bootstrapped, BootstrapError> {
    bootstrap_with(modules, &REQUIRED_MODULES, titles)
}

/// Run startup with an explicit dependency set.
///
/// # Errors
///
/// Fails fast with the first [`BootstrapError`]; nothing is recovered.
pub fn bootstrap_with<S: TitleSink>(
    modules: Vec<FeatureModule>,
    dependencies: &[&str],
    titles: S,
) -> Result<Bootstrapped, BootstrapError> {
    let mut registry = ModuleRegistry::new();
    for module in modules {
        registry.register(module)?;
    }
    registry.require(dependencies)?;

    let mut routes = registry.into_route_table()?;
    routes.otherwise(DEFAULT_ROUTE)?;
    log::debug!("default route set to {DEFAULT_ROUTE}");

    let session = SessionData::initial();

    let mut bus = NavigationBus::new();
    install_title_listener(&mut bus, titles);

    log::info!("{APP_NAME} bootstrapped with {} routes", routes.states().len());
    Ok(Bootstrapped { routes, session, bus })
}
