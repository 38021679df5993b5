//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context and stay free of route-level
//! orchestration, which lives in `app` and `pages`.

pub mod nav_bar;
pub mod startup_failure;
