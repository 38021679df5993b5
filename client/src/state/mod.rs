//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided to components as `RwSignal` contexts rather than a
//! global bag, so every consumer names the state it depends on.

pub mod session;
