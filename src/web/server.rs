//! Axum server setup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::Config;

use super::routes::api_router;
use super::state::{spawn_broadcast_loop, AppState};
use super::websocket::ws_handler;

/// Build the application router around shared state
pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // The page is loaded from anywhere during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(ws_handler))
        // REST API
        .merge(api_router())
        // Static front-end
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state)
}

/// Run the web server
pub async fn run_server(config: Config, bind: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    // One engine for the whole process
    let state = Arc::new(AppState::new(&config));
    {
        let engine = state.engine.lock().await;
        log::info!(
            "Simulation ready: particles={}, canvas={}x{}, seed={}",
            engine.particles.len(),
            engine.width(),
            engine.height(),
            engine.seed()
        );
    }

    // Start the broadcast loop
    spawn_broadcast_loop(state.clone());

    let app = build_router(state, &config.server.static_dir);

    log::info!("Starting web server on http://{}", bind);
    println!("Vapor simulation available at http://{}", bind);

    // Create listener and serve
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
