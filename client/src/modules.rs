//! Feature-module declaration and dependency checking.
//!
//! A feature module is a named bundle of route states. The console declares
//! the module names it depends on; startup fails if any of them was never
//! registered.

#[cfg(test)]
#[path = "modules_test.rs"]
mod modules_test;

use crate::bootstrap::BootstrapError;
use crate::routing::{RouteState, RouteTable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureModule {
    pub name: &'static str,
    pub states: Vec<RouteState>,
}

impl FeatureModule {
    pub fn new(name: &'static str, states: Vec<RouteState>) -> Self {
        Self { name, states }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<FeatureModule>,
}

impl ModuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`BootstrapError::DuplicateModule`] if a module with the same
    /// name is already registered.
    pub fn register(&mut self, module: FeatureModule) -> Result<(), BootstrapError> {
        if self.contains(module.name) {
            return Err(BootstrapError::DuplicateModule(module.name.to_owned()));
        }
        log::debug!("registered module `{}` ({} states)", module.name, module.states.len());
        self.modules.push(module);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.name == name)
    }

    /// Check that every name in `dependencies` is registered.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::MissingModule`] naming the first absent
    /// dependency.
    pub fn require(&self, dependencies: &[&str]) -> Result<(), BootstrapError> {
        match dependencies.iter().find(|name| !self.contains(name)) {
            Some(missing) => Err(BootstrapError::MissingModule((*missing).to_owned())),
            None => Ok(()),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.iter().map(|m| m.name)
    }

    /// Declare every module's states, in registration order.
    ///
    /// # Errors
    ///
    /// Returns a [`BootstrapError::Route`] if two modules declare the same
    /// state name or URL.
    pub fn into_route_table(self) -> Result<RouteTable, BootstrapError> {
        let mut table = RouteTable::new();
        for state in self.modules.into_iter().flat_map(|m| m.states) {
            table.declare(state)?;
        }
        Ok(table)
    }
}
