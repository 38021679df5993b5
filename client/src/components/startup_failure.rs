//! Shown in place of the console when bootstrap fails.

use leptos::prelude::*;

#[component]
pub fn StartupFailure(message: String) -> impl IntoView {
    view! {
        <div class="startup-failure" role="alert">
            <h1>"The console could not start"</h1>
            <p class="startup-failure__message">{message}</p>
        </div>
    }
}
