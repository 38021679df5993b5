//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::bootstrap::{Bootstrapped, DEFAULT_ROUTE, bootstrap, default_modules};
use crate::components::{nav_bar::NavBar, startup_failure::StartupFailure};
use crate::pages::{about, about::AboutPage, home, home::HomePage};
use crate::routing::title::DEFAULT_TITLE;
use crate::routing::{NavigationBus, NavigationTracker, PageTitle, Resolution, RouteTable, parse_query};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Runs bootstrap, then either mounts the console or reports why it could
/// not start.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page_title = RwSignal::new(PageTitle::default());

    match bootstrap(default_modules(), page_title) {
        Ok(app) => view! { <Console app page_title/> }.into_any(),
        Err(e) => {
            log::error!("bootstrap failed: {e}");
            view! {
                <Title text=DEFAULT_TITLE/>
                <StartupFailure message=e.to_string()/>
            }
            .into_any()
        }
    }
}

/// The bootstrapped console: contexts, title binding and routes.
#[component]
fn Console(app: Bootstrapped, page_title: RwSignal<PageTitle>) -> impl IntoView {
    let Bootstrapped { routes, session, bus } = app;

    let session = RwSignal::new(session);
    provide_context(session);
    provide_context(routes.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_session().await {
            Ok(snapshot) => session.update(|s| s.apply(snapshot)),
            Err(e) => log::warn!("keeping startup session: {e}"),
        }
    });

    let bus = StoredValue::new(bus);

    view! {
        <Stylesheet id="leptos" href="/pkg/ecommerce-admin.css"/>
        <Title text=move || page_title.get().display().to_owned()/>

        <Router>
            <NavigationReporter routes bus/>
            <NavBar/>
            <main class="console__main">
                <Routes fallback=|| view! { <Redirect path=DEFAULT_ROUTE/> }>
                    <Route path=StaticSegment(home::SEGMENT) view=HomePage/>
                    <Route path=StaticSegment(about::SEGMENT) view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Publishes a navigation event whenever the location settles on a
/// declared state. Fallback redirects publish nothing; the redirected-to
/// location does.
#[component]
fn NavigationReporter(routes: RouteTable, bus: StoredValue<NavigationBus>) -> impl IntoView {
    let location = use_location();
    let tracker = StoredValue::new(NavigationTracker::default());

    let report = move |routes: &RouteTable, path: &str, search: &str| {
        let Resolution::Matched(state) = routes.resolve(path) else {
            return;
        };
        let mut event = None;
        tracker.update_value(|t| event = t.transition(state.clone(), parse_query(search)));
        if let Some(event) = event {
            bus.with_value(|b| b.publish(&event));
        }
    };

    // Initial location, so the server-rendered title already matches.
    report(&routes, &location.pathname.get_untracked(), &location.search.get_untracked());

    Effect::new(move || {
        report(&routes, &location.pathname.get(), &location.search.get());
    });
}
