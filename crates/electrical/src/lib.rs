//! Electrical and thermal models for the multirotor power train.
//!
//! Every function here is total over finite inputs: starvation floors to zero, sag floors to
//! the chemistry cutoff, and divisions by non-positive quantities return a sentinel.

pub mod battery;
pub mod motor;
pub mod thermal;
pub mod wiring;

pub use battery::{BatterySag, CellVoltages, Chemistry, battery_voltage_under_load};
pub use motor::{motor_efficiency, motor_elec_power, motor_rpm};
pub use thermal::{MOTOR_TIME_CONSTANT_S, motor_temp};
pub use wiring::{WireGauge, WireLoss, esc_power_loss, wire_loss};
