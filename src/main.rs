use std::sync::Arc;

use coronet::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "coronet=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::prepare_storage(&config)
        .await
        .expect("Failed to prepare upload storage");

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to set up database");

    let state = AppState {
        db,
        config: Arc::new(config),
    };

    let router = router::routes(&state.config.storage_root).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.config.bind_address)
        .await
        .expect("Failed to bind listener");

    tracing::info!(address = %state.config.bind_address, "Starting server");

    axum::serve(listener, router)
        .await
        .expect("Server exited with an error");
}
