//! Mass-energy equivalence calculator (E = mc²).

use serde::{Deserialize, Serialize};

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Result of a mass-energy calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    pub energy_joules: f64,
    /// Energy with two decimals and a signed exponent, e.g. `9.00e+13`
    pub energy_scientific: String,
    pub mass_kg: f64,
    pub mass_grams: f64,
}

/// Energy equivalent of `mass_grams` grams
pub fn calculate_energy(mass_grams: f64) -> EnergyResult {
    let mass_kg = mass_grams / 1000.0;
    let energy_joules = mass_kg * SPEED_OF_LIGHT * SPEED_OF_LIGHT;

    EnergyResult {
        energy_joules,
        energy_scientific: format_scientific(energy_joules, 2),
        mass_kg,
        mass_grams,
    }
}

/// Scientific notation with a sign and at least two exponent digits.
///
/// Rust's `{:e}` prints `8.99e16`; the front-end expects `8.99e+16`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => formatted,
        },
        // inf / NaN have no exponent
        None => formatted,
    }
}
