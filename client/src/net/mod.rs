//! Network helpers for talking to the console host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server renders the console and answers a small JSON API. These
//! helpers only perform requests in the browser (`hydrate`); on the server
//! they are inert.

pub mod api;
