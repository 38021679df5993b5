//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! doubles as the Leptos router state through `FromRef`. The server keeps no
//! per-user state; sessions live in the browser.

use axum::extract::FromRef;
use leptos::config::LeptosOptions;

use crate::config::ServerConfig;

/// Clone is required by Axum; inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
}

impl AppState {
    /// Build state, applying the `SITE_ROOT` override to the Leptos options.
    #[must_use]
    pub fn new(config: &ServerConfig, mut leptos_options: LeptosOptions) -> Self {
        if let Some(site_root) = &config.site_root {
            leptos_options.site_root = site_root.as_str().into();
        }
        Self { leptos_options }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_root_override_replaces_leptos_default() {
        let config = ServerConfig { host: "127.0.0.1".into(), port: 3000, site_root: Some("dist".into()) };
        let options = LeptosOptions::builder().output_name("ecommerce-admin").build();
        let state = AppState::new(&config, options);
        assert_eq!(state.leptos_options.site_root.as_ref(), "dist");
    }

    #[test]
    fn without_override_site_root_is_untouched() {
        let options = LeptosOptions::builder().output_name("ecommerce-admin").build();
        let expected = options.site_root.clone();
        let config = ServerConfig { host: "0.0.0.0".into(), port: 3000, site_root: None };
        let state = AppState::new(&config, options);
        assert_eq!(state.leptos_options.site_root, expected);
    }

    #[test]
    fn leptos_options_from_ref() {
        let state = test_helpers::test_app_state();
        let options = LeptosOptions::from_ref(&state);
        assert_eq!(options.output_name.as_ref(), "ecommerce-admin");
    }
}
