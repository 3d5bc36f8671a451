//! Air density from altitude and ambient temperature.
//!
//! Pressure follows the ISA troposphere barometric formula while density is taken from the
//! ideal gas law at the *ambient* temperature the user supplied, not the lapse-rate
//! temperature. This approximates a non-standard day at the pressure of the given altitude.

use drone_core::constants::G0;
use drone_core::units::c_to_k;
use serde::Serialize;

/// Sea-level standard pressure (Pa).
pub const P0_PA: f64 = 101_325.0;
/// Sea-level standard temperature (K).
pub const T0_K: f64 = 288.15;
/// Troposphere temperature lapse rate (K/m).
pub const LAPSE_RATE_K_M: f64 = 0.0065;
/// Molar mass of dry air (kg/mol).
pub const MOLAR_MASS_AIR: f64 = 0.028_964_4;
/// Universal gas constant (J/(mol·K)).
pub const R_UNIVERSAL: f64 = 8.314_47;
/// Specific gas constant of dry air (J/(kg·K)).
pub const R_SPECIFIC_AIR: f64 = 287.058;
/// Upper bound of the troposphere model (m).
pub const TROPOPAUSE_M: f64 = 11_000.0;

/// Snapshot of the air properties used by the performance model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirState {
    pub altitude_m: f64,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub density_kg_m3: f64,
}

/// Clamp an altitude into the range covered by the troposphere model.
#[inline]
pub fn clamp_altitude(altitude_m: f64) -> f64 {
    if altitude_m.is_nan() {
        return 0.0;
    }
    altitude_m.clamp(0.0, TROPOPAUSE_M)
}

/// Static pressure (Pa) at the given altitude, clamped to [0, 11 km].
pub fn pressure_at_altitude(altitude_m: f64) -> f64 {
    let h = clamp_altitude(altitude_m);
    let exponent = G0 * MOLAR_MASS_AIR / (R_UNIVERSAL * LAPSE_RATE_K_M);
    P0_PA * (1.0 - LAPSE_RATE_K_M * h / T0_K).powf(exponent)
}

/// Air density (kg/m³) at `altitude_m` for an ambient temperature of `temp_c`.
pub fn air_density(altitude_m: f64, temp_c: f64) -> f64 {
    sample(altitude_m, temp_c).density_kg_m3
}

/// Full air state at `altitude_m` for an ambient temperature of `temp_c`.
pub fn sample(altitude_m: f64, temp_c: f64) -> AirState {
    let altitude_m = clamp_altitude(altitude_m);
    let pressure_pa = pressure_at_altitude(altitude_m);
    let temperature_k = c_to_k(temp_c);
    let density_kg_m3 = if temperature_k > 0.0 {
        pressure_pa / (R_SPECIFIC_AIR * temperature_k)
    } else {
        0.0
    };
    AirState {
        altitude_m,
        pressure_pa,
        temperature_k,
        density_kg_m3,
    }
}
