//! AQI HTTP Server Binary
//!
//! This is the main entry point for the AQI web front-end.
//! It loads the regression model and the dataset, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin aqi-server
//!
//! AQI_MODEL_PATH=models/stack_aqi_model.json PORT=8080 cargo run --bin aqi-server
//! ```
//!
//! # Environment Variables
//!
//! - `AQI_CONFIG`: TOML configuration file (default: `aqi.toml` if present)
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 5000)
//! - `AQI_MODEL_PATH`: Model artifact (default: stack_aqi_model.json)
//! - `AQI_DATASET_PATH`: Dataset CSV (default: final_dataset.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use aqi_web::config::AppConfig;
use aqi_web::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting AQI HTTP Server");

    let config = AppConfig::load()?;
    let addr = config.socket_addr()?;

    // Both resources finish loading (or are marked unavailable) before we bind
    let state = AppState::load(&config);
    info!(
        model_ready = state.predictor.is_ready(),
        dataset_loaded = state.dataset.is_some(),
        "Resources initialized"
    );

    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Trends page: http://{}/trends", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
