//! Folder store service: persists the web client's folders and documents as a
//! single JSON file and offers search over them.
//!
//! Default: http://127.0.0.1:3000/

mod config;
mod error;
mod routes;
mod search;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use std::time::Instant;
use store::JsonStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let store = JsonStore::new(&config.data_path);
    if store.exists().await {
        log::info!("Using existing data file {}", store.path().display());
    } else {
        log::info!(
            "No data file at {} yet; it will be created on first save",
            store.path().display()
        );
    }

    let state = Arc::new(AppState {
        store,
        start_time: Instant::now(),
    });

    let app = routes::router(state, &config.static_dir)
        .layer(tower_http::cors::CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    log::info!("Folder store listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
