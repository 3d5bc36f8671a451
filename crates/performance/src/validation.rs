//! Pass/fail checklist over a simulated operating envelope.

use serde::Serialize;

/// Minimum thrust-to-weight ratio for controllable flight.
pub const MIN_TWR: f64 = 2.0;
/// Winding temperature ceiling after five minutes of hover (°C).
pub const MAX_MOTOR_TEMP_C: f64 = 80.0;
/// Hover throttle ceiling leaving headroom for manoeuvring (%).
pub const MAX_HOVER_THROTTLE: f64 = 60.0;

/// Named checks; every one must hold for the build to be considered sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validations {
    pub motor_current_ok: bool,
    pub esc_current_ok: bool,
    pub battery_discharge_ok: bool,
    pub battery_burst_ok: bool,
    pub prop_size_ok: bool,
    pub twr_ok: bool,
    pub motor_temp_ok: bool,
    pub hover_throttle_ok: bool,
    pub esc_voltage_ok: bool,
    pub motor_voltage_ok: bool,
}

impl Validations {
    /// Checks paired with their field names, in declaration order.
    pub fn checks(&self) -> [(&'static str, bool); 10] {
        [
            ("motor_current_ok", self.motor_current_ok),
            ("esc_current_ok", self.esc_current_ok),
            ("battery_discharge_ok", self.battery_discharge_ok),
            ("battery_burst_ok", self.battery_burst_ok),
            ("prop_size_ok", self.prop_size_ok),
            ("twr_ok", self.twr_ok),
            ("motor_temp_ok", self.motor_temp_ok),
            ("hover_throttle_ok", self.hover_throttle_ok),
            ("esc_voltage_ok", self.esc_voltage_ok),
            ("motor_voltage_ok", self.motor_voltage_ok),
        ]
    }

    pub fn all_valid(&self) -> bool {
        self.checks().iter().all(|(_, ok)| *ok)
    }

    /// Names of the checks that failed.
    pub fn failures(&self) -> Vec<&'static str> {
        self.checks()
            .iter()
            .filter(|(_, ok)| !*ok)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Whether a series cell count falls inside an inclusive supported range.
#[inline]
pub fn cells_within(cells: u32, min_cells: u32, max_cells: u32) -> bool {
    (min_cells..=max_cells).contains(&cells)
}
