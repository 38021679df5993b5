//! Feature modules and their route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page module exposes `module()`, declaring the states it owns, and
//! the component rendered for them. Bootstrap registers the modules; the
//! app binds the components to the router.

pub mod about;
pub mod home;
