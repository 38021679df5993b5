mod config;
mod routes;
mod state;

use admin_client::bootstrap::default_modules;
use leptos::config::get_configuration;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = routes::verify_console(default_modules()) {
        tracing::error!(error = %e, "console bootstrap failed");
        std::process::exit(1);
    }

    let leptos_options = get_configuration(None)
        .expect("leptos configuration missing from Cargo.toml")
        .leptos_options;

    let addr = config.bind_addr();
    let state = state::AppState::new(&config, leptos_options);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "ecommerce-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
