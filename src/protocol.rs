//! JSON messages exchanged with the browser.
//!
//! Every frame is an object tagged by its `"type"` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::energy::EnergyResult;
use crate::snapshot::SimulationSnapshot;

/// Message from client to server
///
/// Payload fields stay untyped so that a missing or malformed value can be
/// answered with an `error` frame instead of dropping the whole message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Toggle the heater
    StartHeating,
    /// Change the temperature (Celsius)
    UpdateTemperature {
        #[serde(default)]
        temperature: Option<Value>,
    },
    /// Compute E = mc² for a mass in grams
    CalculateEnergy {
        #[serde(default)]
        mass: Option<Value>,
    },
}

/// Message from server to client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full simulation state
    SimulationUpdate(SimulationSnapshot),
    /// Heater state after a toggle
    HeatingStatus { is_heating: bool },
    /// A request could not be processed
    Error { message: String },
    /// Mass-energy calculation result
    EnergyResult {
        energy: EnergyResult,
        mass: f64,
        units: String,
    },
}

impl ServerMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::calculate_energy;
    use serde_json::json;

    #[test]
    fn test_parse_client_messages() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"start_heating"}"#).unwrap();
        assert_eq!(msg, ClientMessage::StartHeating);

        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"update_temperature","temperature":"88.5"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::UpdateTemperature {
                temperature: Some(json!("88.5"))
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"calculate_energy"}"#).unwrap();
        assert_eq!(msg, ClientMessage::CalculateEnergy { mass: None });
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"boil_over"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
    }

    #[test]
    fn test_server_message_tags() {
        let msg = ServerMessage::HeatingStatus { is_heating: true };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"type": "heating_status", "is_heating": true})
        );

        let msg = ServerMessage::Error {
            message: "Invalid temperature value".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"type": "error", "message": "Invalid temperature value"})
        );
    }

    #[test]
    fn test_energy_result_shape() {
        let msg = ServerMessage::EnergyResult {
            energy: calculate_energy(1000.0),
            mass: 1000.0,
            units: "joules".to_string(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "energy_result");
        assert_eq!(value["units"], "joules");
        assert_eq!(value["mass"], 1000.0);
        assert_eq!(value["energy"]["energy_scientific"], "8.99e+16");
        assert_eq!(value["energy"]["mass_kg"], 1.0);
    }
}
