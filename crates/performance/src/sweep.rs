//! Payload sweeps: re-run the estimate across a range of payload masses.

use drone_config::DroneConfig;
use serde::Serialize;
use tracing::debug;

use crate::simulation::run_full_simulation;

/// Upper bound on samples in a single sweep.
pub const MAX_SWEEP_SAMPLES: usize = 10_000;

/// One payload sample of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSample {
    pub payload_g: f64,
    pub total_weight_g: f64,
    pub flight_time_min: f64,
    pub hover_throttle: f64,
    pub twr: f64,
    pub hover_total_current: f64,
    pub motor_temp_5min: f64,
    pub all_valid: bool,
    /// Thrust margin and hover headroom checks both hold.
    pub viable: bool,
}

/// Samples in ascending payload order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSweep {
    pub samples: Vec<SweepSample>,
    /// Heaviest swept payload that still meets the TWR and hover-throttle limits.
    pub max_viable_payload_g: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("sweep bounds must be finite (start {start}, end {end}, step {step})")]
    NonFinite { start: f64, end: f64, step: f64 },
    #[error("sweep step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("sweep end {end} g is below start {start} g")]
    InvertedRange { start: f64, end: f64 },
    #[error("sweep would produce {0} samples (limit {limit})", limit = MAX_SWEEP_SAMPLES)]
    TooManySamples(usize),
}

/// Evaluate `base` at payloads `start_g, start_g + step_g, …` up to and including `end_g`.
///
/// The configured payload of `base` is replaced at every sample; everything else is kept.
pub fn payload_sweep(
    base: &DroneConfig,
    start_g: f64,
    end_g: f64,
    step_g: f64,
) -> Result<PayloadSweep, SweepError> {
    if !(start_g.is_finite() && end_g.is_finite() && step_g.is_finite()) {
        return Err(SweepError::NonFinite {
            start: start_g,
            end: end_g,
            step: step_g,
        });
    }
    if step_g <= 0.0 {
        return Err(SweepError::InvalidStep(step_g));
    }
    if end_g < start_g {
        return Err(SweepError::InvertedRange {
            start: start_g,
            end: end_g,
        });
    }

    let intervals = ((end_g - start_g) / step_g + 1e-9).floor();
    if intervals >= MAX_SWEEP_SAMPLES as f64 {
        return Err(SweepError::TooManySamples(intervals as usize + 1));
    }
    let count = intervals as usize + 1;

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let payload_g = start_g + step_g * i as f64;
        let mut config = base.clone();
        config.frame.payload_weight_g = payload_g;
        let result = run_full_simulation(config);
        samples.push(SweepSample {
            payload_g,
            total_weight_g: result.total_weight_g,
            flight_time_min: result.flight_time_min,
            hover_throttle: result.hover_throttle,
            twr: result.twr,
            hover_total_current: result.hover_total_current,
            motor_temp_5min: result.motor_temp_5min,
            all_valid: result.all_valid,
            viable: result.validations.twr_ok && result.validations.hover_throttle_ok,
        });
    }

    let max_viable_payload_g = samples
        .iter()
        .filter(|s| s.viable)
        .map(|s| s.payload_g)
        .fold(None, |best: Option<f64>, p| Some(best.map_or(p, |b| b.max(p))));
    debug!(samples = samples.len(), ?max_viable_payload_g, "payload sweep complete");

    Ok(PayloadSweep {
        samples,
        max_viable_payload_g,
    })
}
