// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use jsonresponse::config::{response_config::ResponseConfig, state::AppState};
use jsonresponse::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let state: AppState = AppState::from_env()?;

    // JSON_RESPONSE_* variables tune the process-wide response settings
    ResponseConfig::global().apply_env()?;

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    let app: Router = server::create_app(state);

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
