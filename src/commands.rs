//! Commands that drive the simulation.
//!
//! Client frames are validated into a [`SimCommand`] first, then applied to the
//! engine. Validation failures become an `error` frame for the requester only.

use serde_json::Value;

use crate::energy::calculate_energy;
use crate::engine::{SimulationEngine, MAX_TEMPERATURE};
use crate::protocol::{ClientMessage, ServerMessage};

/// Lowest temperature a client may request (room temperature)
pub const MIN_REQUESTED_TEMPERATURE: f64 = 25.0;
/// Highest temperature a client may request
pub const MAX_REQUESTED_TEMPERATURE: f64 = MAX_TEMPERATURE;

/// A validated command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    /// Flip the heater
    ToggleHeating,
    /// Set the temperature, already clamped to the requestable range
    SetTemperature(f64),
    /// Mass-energy calculation for a mass in grams
    CalculateEnergy(f64),
}

/// Errors that can occur while validating a client request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    InvalidTemperature,
    InvalidMass,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTemperature => write!(f, "Invalid temperature value"),
            Self::InvalidMass => write!(f, "Invalid mass value"),
        }
    }
}

impl std::error::Error for CommandError {}

impl TryFrom<ClientMessage> for SimCommand {
    type Error = CommandError;

    fn try_from(msg: ClientMessage) -> Result<Self, Self::Error> {
        match msg {
            ClientMessage::StartHeating => Ok(Self::ToggleHeating),
            ClientMessage::UpdateTemperature { temperature } => {
                let t = parse_number(temperature.as_ref()).ok_or(CommandError::InvalidTemperature)?;
                Ok(Self::SetTemperature(
                    t.clamp(MIN_REQUESTED_TEMPERATURE, MAX_REQUESTED_TEMPERATURE),
                ))
            }
            ClientMessage::CalculateEnergy { mass } => {
                let m = parse_number(mass.as_ref()).ok_or(CommandError::InvalidMass)?;
                Ok(Self::CalculateEnergy(m))
            }
        }
    }
}

/// Read a finite float from a JSON number or numeric string
pub fn parse_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Apply a command and build the reply for the requester
pub fn apply(engine: &mut SimulationEngine, command: SimCommand) -> ServerMessage {
    match command {
        SimCommand::ToggleHeating => ServerMessage::HeatingStatus {
            is_heating: engine.toggle_heating(),
        },
        SimCommand::SetTemperature(t) => {
            engine.set_temperature(t);
            ServerMessage::SimulationUpdate(engine.get_state())
        }
        SimCommand::CalculateEnergy(mass) => ServerMessage::EnergyResult {
            energy: calculate_energy(mass),
            mass,
            units: "joules".to_string(),
        },
    }
}

/// Validate and apply a client message
pub fn handle_message(engine: &mut SimulationEngine, msg: ClientMessage) -> ServerMessage {
    match SimCommand::try_from(msg) {
        Ok(command) => apply(engine, command),
        Err(e) => {
            log::warn!("Rejected client request: {}", e);
            ServerMessage::Error {
                message: e.to_string(),
            }
        }
    }
}
