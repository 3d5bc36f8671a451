//! Scalar performance figures shared by the aggregator and the sweep tooling.

use drone_core::force::weight_n;

/// Endurance (minutes) drawing `current_a` from `capacity_mah` of which `discharge_fraction`
/// is usable. Infinite when nothing is drawn.
pub fn flight_time(capacity_mah: f64, discharge_fraction: f64, current_a: f64) -> f64 {
    if current_a <= 0.0 {
        return f64::INFINITY;
    }
    let usable_mah = capacity_mah * discharge_fraction;
    usable_mah / (current_a * 1_000.0) * 60.0
}

/// Thrust-to-weight ratio for `thrust_n` lifting `weight_kg`; zero for a massless airframe.
pub fn thrust_to_weight_ratio(thrust_n: f64, weight_kg: f64) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }
    thrust_n / weight_n(weight_kg)
}

/// Hover throttle in percent, assuming thrust grows with the square of throttle.
///
/// Pinned at 100 when the rotor produces no thrust at full throttle.
pub fn hover_throttle(required_per_motor_n: f64, max_per_motor_n: f64) -> f64 {
    if max_per_motor_n <= 0.0 {
        return 100.0;
    }
    let fraction = (required_per_motor_n.max(0.0) / max_per_motor_n).sqrt();
    (fraction * 100.0).clamp(0.0, 100.0)
}
