//! Brushless motor speed and power relations.

/// Loaded motor speed (RPM): Kv times the voltage left after the winding drop.
///
/// Floors at zero when the resistive drop exceeds the supply.
pub fn motor_rpm(kv: f64, voltage: f64, current_a: f64, resistance_ohm: f64) -> f64 {
    kv * (voltage - current_a * resistance_ohm).max(0.0)
}

/// Electrical input power (W).
#[inline]
pub fn motor_elec_power(voltage: f64, current_a: f64) -> f64 {
    voltage * current_a
}

/// Mechanical over electrical power, clamped to [0, 1]; zero when no power flows in.
pub fn motor_efficiency(mech_power_w: f64, elec_power_w: f64) -> f64 {
    if elec_power_w <= 0.0 {
        return 0.0;
    }
    (mech_power_w / elec_power_w).clamp(0.0, 1.0)
}
