//! Web front-end for the boiling simulation.
//!
//! Serves the static page and streams simulation state using Axum + WebSocket.
//!
//! ## Architecture
//!
//! - **Engine**: a single [`SimulationEngine`](crate::SimulationEngine) behind a
//!   mutex in [`AppState`]. Ticks and client commands never interleave.
//! - **Broadcast loop**: every tick (50ms by default), while the heater is on,
//!   advances the engine and fans the snapshot out to every client.
//! - **WebSocket**: `/ws` carries commands in and state out.
//! - **REST API**: `/api/*` mirrors the WebSocket commands.
//!
//! ## Usage
//!
//! ```no_run
//! use vapor::Config;
//! use vapor::web::run_server;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     run_server(config, "127.0.0.1:5000".parse().unwrap()).await.unwrap();
//! }
//! ```

mod routes;
mod server;
mod state;
mod websocket;

pub use server::{build_router, run_server};
pub use state::{spawn_broadcast_loop, AppState};
