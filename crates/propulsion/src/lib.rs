//! Propeller thrust/power relations and frame layout descriptors.
//!
//! Thrust and shaft power follow the static propeller laws `T = Ct·ρ·n²·D⁴` and
//! `P = Cp·ρ·n³·D⁵` with `n` in revolutions per second and `D` in metres.

use serde::{Deserialize, Serialize};

/// Rotor arrangement of the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum FrameLayout {
    /// One rotor per arm.
    #[default]
    Flat,
    /// Stacked rotor pairs sharing downwash.
    Coaxial,
}

impl FrameLayout {
    pub fn label(self) -> &'static str {
        match self {
            FrameLayout::Flat => "flat",
            FrameLayout::Coaxial => "coaxial",
        }
    }

    /// Unknown labels are treated as a flat layout.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("coaxial") {
            FrameLayout::Coaxial
        } else {
            FrameLayout::Flat
        }
    }

    pub fn is_coaxial(self) -> bool {
        matches!(self, FrameLayout::Coaxial)
    }
}

impl From<String> for FrameLayout {
    fn from(value: String) -> Self {
        FrameLayout::from_label(&value)
    }
}

impl From<FrameLayout> for &'static str {
    fn from(value: FrameLayout) -> Self {
        value.label()
    }
}

/// Dimensionless thrust and power coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropCoefficients {
    pub ct: f64,
    pub cp: f64,
}

const CT_RANGE: (f64, f64) = (0.04, 0.22);
const CP_RANGE: (f64, f64) = (0.015, 0.12);
const THREE_BLADE_CT_GAIN: f64 = 1.15;
const THREE_BLADE_CP_GAIN: f64 = 1.25;

/// Static thrust (N).
#[inline]
pub fn thrust(ct: f64, rho: f64, rps: f64, diameter_m: f64) -> f64 {
    ct * rho * rps * rps * diameter_m.powi(4)
}

/// Shaft power absorbed by the propeller (W).
#[inline]
pub fn prop_power(cp: f64, rho: f64, rps: f64, diameter_m: f64) -> f64 {
    cp * rho * rps.powi(3) * diameter_m.powi(5)
}

/// Geometry-based coefficient estimate for props without measured data.
///
/// Both coefficients grow linearly with pitch/diameter; three-blade props get a fixed
/// gain applied before the coefficients are clamped to their plausible range.
pub fn estimate_prop_coefficients(diameter_in: f64, pitch_in: f64, blades: u32) -> PropCoefficients {
    let pitch_ratio = if diameter_in > 0.0 {
        pitch_in / diameter_in
    } else {
        0.0
    };
    let mut ct = 0.075 + 0.045 * pitch_ratio;
    let mut cp = 0.025 + 0.035 * pitch_ratio;
    if blades == 3 {
        ct *= THREE_BLADE_CT_GAIN;
        cp *= THREE_BLADE_CP_GAIN;
    }
    PropCoefficients {
        ct: ct.clamp(CT_RANGE.0, CT_RANGE.1),
        cp: cp.clamp(CP_RANGE.0, CP_RANGE.1),
    }
}

/// Resolve coefficients, preferring explicit values; each missing one is estimated on its own.
pub fn resolve_prop_coefficients(
    ct: Option<f64>,
    cp: Option<f64>,
    diameter_in: f64,
    pitch_in: f64,
    blades: u32,
) -> PropCoefficients {
    let estimate = estimate_prop_coefficients(diameter_in, pitch_in, blades);
    PropCoefficients {
        ct: ct.unwrap_or(estimate.ct),
        cp: cp.unwrap_or(estimate.cp),
    }
}

/// Effective-rotor derating for coaxial stacks.
#[inline]
pub fn coaxial_factor(is_coaxial: bool) -> f64 {
    if is_coaxial { 0.85 } else { 1.0 }
}

/// Fraction of the wheelbase available to one propeller diameter before tips overlap.
pub fn geometry_factor(motor_count: u32) -> f64 {
    match motor_count {
        3 => 0.866,
        4 => 0.707,
        6 => 0.5,
        8 => 0.38,
        _ => 0.5,
    }
}

/// Largest propeller diameter (mm) a frame of `wheelbase_mm` can swing.
pub fn max_prop_diameter_mm(wheelbase_mm: f64, motor_count: u32) -> f64 {
    wheelbase_mm * geometry_factor(motor_count)
}
