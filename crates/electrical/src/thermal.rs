//! First-order motor winding temperature rise.

/// Lumped thermal time constant of a hobby outrunner (s).
pub const MOTOR_TIME_CONSTANT_S: f64 = 120.0;

/// Motor temperature (°C) after `duration_s` of constant copper loss, starting at ambient.
pub fn motor_temp(
    ambient_c: f64,
    copper_loss_w: f64,
    thermal_resistance_c_per_w: f64,
    duration_s: f64,
) -> f64 {
    let steady_rise = copper_loss_w * thermal_resistance_c_per_w;
    ambient_c + steady_rise * (1.0 - (-duration_s / MOTOR_TIME_CONSTANT_S).exp())
}
