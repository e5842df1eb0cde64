//! REST API routes mirroring the WebSocket commands.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::protocol::{ClientMessage, ServerMessage};

use super::state::AppState;

/// Create the API router
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/heating/toggle", post(toggle_heating))
        .route("/api/temperature", post(update_temperature))
        .route("/api/energy", post(calculate_energy))
}

type ApiResponse = (StatusCode, Json<ServerMessage>);

/// Error frames map to 400, everything else to 200
fn respond(msg: ServerMessage) -> ApiResponse {
    let status = if msg.is_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(msg))
}

async fn get_state(State(state): State<Arc<AppState>>) -> ApiResponse {
    respond(ServerMessage::SimulationUpdate(state.snapshot().await))
}

async fn toggle_heating(State(state): State<Arc<AppState>>) -> ApiResponse {
    respond(state.handle(ClientMessage::StartHeating).await)
}

#[derive(Deserialize)]
struct TemperatureRequest {
    #[serde(default)]
    temperature: Option<Value>,
}

async fn update_temperature(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TemperatureRequest>,
) -> ApiResponse {
    let msg = ClientMessage::UpdateTemperature {
        temperature: payload.temperature,
    };
    respond(state.handle(msg).await)
}

#[derive(Deserialize)]
struct EnergyRequest {
    #[serde(default)]
    mass: Option<Value>,
}

async fn calculate_energy(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EnergyRequest>,
) -> ApiResponse {
    let msg = ClientMessage::CalculateEnergy { mass: payload.mass };
    respond(state.handle(msg).await)
}
