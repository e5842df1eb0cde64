//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::commands::handle_message;
use crate::config::Config;
use crate::engine::SimulationEngine;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::snapshot::SimulationSnapshot;

/// Application state shared between all handlers and the broadcast loop
pub struct AppState {
    /// The one simulation instance; every read and write goes through this lock
    pub engine: Mutex<SimulationEngine>,
    /// Broadcast channel for snapshots to WebSocket clients
    pub snapshot_tx: broadcast::Sender<Arc<SimulationSnapshot>>,
    /// Period of the broadcast loop
    pub tick_interval: Duration,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_engine(
            SimulationEngine::from_config(config),
            Duration::from_millis(config.server.tick_interval_ms),
            config.server.broadcast_capacity,
        )
    }

    /// Wrap an existing engine
    pub fn with_engine(engine: SimulationEngine, tick_interval: Duration, capacity: usize) -> Self {
        let (snapshot_tx, _) = broadcast::channel(capacity);

        Self {
            engine: Mutex::new(engine),
            snapshot_tx,
            tick_interval,
        }
    }

    /// Validate and apply a client message, returning the reply for the requester
    pub async fn handle(&self, msg: ClientMessage) -> ServerMessage {
        let mut engine = self.engine.lock().await;
        handle_message(&mut engine, msg)
    }

    /// Current state without advancing the simulation
    pub async fn snapshot(&self) -> SimulationSnapshot {
        self.engine.lock().await.get_state()
    }

    /// One broadcast tick: advance and publish if the heater is on.
    ///
    /// Returns whether the simulation advanced.
    pub async fn tick(&self) -> bool {
        let snapshot = {
            let mut engine = self.engine.lock().await;
            if !engine.is_heating() {
                return false;
            }
            engine.update();
            Arc::new(engine.get_state())
        };

        self.broadcast_snapshot(snapshot);
        true
    }

    /// Broadcast a snapshot to all WebSocket clients
    pub fn broadcast_snapshot(&self, snapshot: Arc<SimulationSnapshot>) {
        // No receivers is ok
        let _ = self.snapshot_tx.send(snapshot);
    }

    /// Subscribe to snapshot broadcasts
    pub fn subscribe_snapshots(&self) -> broadcast::Receiver<Arc<SimulationSnapshot>> {
        self.snapshot_tx.subscribe()
    }
}

/// Spawns the task that drives simulation time while the heater is on
pub fn spawn_broadcast_loop(state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(state.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            state.tick().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> Arc<AppState> {
        let engine = SimulationEngine::new_with_seed(10, 800.0, 400.0, 21);
        Arc::new(AppState::with_engine(engine, Duration::from_millis(5), 64))
    }

    #[tokio::test]
    async fn test_tick_idle_without_heating() {
        let state = state();
        let mut rx = state.subscribe_snapshots();

        assert!(!state.tick().await);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.engine.lock().await.tick(), 0);
    }

    #[tokio::test]
    async fn test_tick_broadcasts_while_heating() {
        let state = state();
        let mut rx = state.subscribe_snapshots();

        let reply = state.handle(ClientMessage::StartHeating).await;
        assert_eq!(reply, ServerMessage::HeatingStatus { is_heating: true });

        assert!(state.tick().await);
        let snapshot = rx.try_recv().unwrap();
        assert!(snapshot.is_heating);
        assert_eq!(snapshot.particles.len(), 10);
        assert_eq!(state.engine.lock().await.tick(), 1);
    }

    #[tokio::test]
    async fn test_temperature_reply_not_broadcast() {
        let state = state();
        let mut rx = state.subscribe_snapshots();

        let reply = state
            .handle(ClientMessage::UpdateTemperature {
                temperature: Some(json!(130)),
            })
            .await;
        match reply {
            ServerMessage::SimulationUpdate(snapshot) => assert_eq!(snapshot.temperature, 130.0),
            other => panic!("unexpected reply: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_loop_runs_while_heating() {
        let state = state();
        let mut rx = state.subscribe_snapshots();
        state.handle(ClientMessage::StartHeating).await;

        let handle = spawn_broadcast_loop(state.clone());
        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("no snapshot within timeout")
            .unwrap();
        let second = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("no snapshot within timeout")
            .unwrap();
        handle.abort();

        assert!(first.is_heating && second.is_heating);
        assert!(state.engine.lock().await.tick() >= 2);
    }
}
