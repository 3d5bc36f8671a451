//! Performance aggregation crate: composes the atmosphere, electrical, and propulsion
//! models into hover and full-throttle estimates.

pub mod metrics;
pub mod simulation;
pub mod sweep;
pub mod validation;

pub use metrics::{flight_time, hover_throttle, thrust_to_weight_ratio};
pub use simulation::{ASSUMED_MOTOR_EFFICIENCY, SimulationResult, run_full_simulation};
pub use sweep::{PayloadSweep, SweepError, SweepSample, payload_sweep};
pub use validation::Validations;

pub use drone_atmosphere as atmosphere;
pub use drone_config as config;
pub use drone_electrical as electrical;
pub use drone_propulsion as propulsion;
