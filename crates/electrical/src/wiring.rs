//! Copper lead and ESC conduction losses.

use drone_core::units::mohm_to_ohm;
use serde::Serialize;

/// American wire gauges with tabulated copper resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireGauge {
    Awg10,
    Awg12,
    Awg14,
    Awg16,
    Awg18,
    Awg20,
    Awg22,
    Awg26,
}

impl WireGauge {
    /// Map a gauge number to the table; unknown gauges fall back to 14 AWG.
    pub fn from_awg(awg: u32) -> Self {
        match awg {
            10 => WireGauge::Awg10,
            12 => WireGauge::Awg12,
            14 => WireGauge::Awg14,
            16 => WireGauge::Awg16,
            18 => WireGauge::Awg18,
            20 => WireGauge::Awg20,
            22 => WireGauge::Awg22,
            26 => WireGauge::Awg26,
            _ => WireGauge::Awg14,
        }
    }

    /// Copper resistance per metre (Ω/m).
    pub fn ohm_per_m(self) -> f64 {
        match self {
            WireGauge::Awg10 => 0.003_28,
            WireGauge::Awg12 => 0.005_21,
            WireGauge::Awg14 => 0.008_29,
            WireGauge::Awg16 => 0.013_2,
            WireGauge::Awg18 => 0.020_9,
            WireGauge::Awg20 => 0.033_3,
            WireGauge::Awg22 => 0.053_0,
            WireGauge::Awg26 => 0.133_9,
        }
    }
}

/// Resistance and dissipation of one lead run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WireLoss {
    pub resistance_ohm: f64,
    pub power_loss_w: f64,
}

/// I²R loss of `length_cm` of `gauge` wire carrying `current_a`.
pub fn wire_loss(gauge: WireGauge, length_cm: f64, current_a: f64) -> WireLoss {
    let resistance_ohm = gauge.ohm_per_m() * (length_cm / 100.0);
    WireLoss {
        resistance_ohm,
        power_loss_w: current_a * current_a * resistance_ohm,
    }
}

/// Conduction loss (W) of one ESC with on-resistance `resistance_mohm`.
pub fn esc_power_loss(resistance_mohm: f64, current_a: f64) -> f64 {
    current_a * current_a * mohm_to_ohm(resistance_mohm)
}
