//! Core units, constants, and shared primitives for the Drone Performance Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Offset between degrees Celsius and kelvin.
    pub const ZERO_CELSIUS_K: f64 = 273.15;
    /// Millimetres per inch.
    pub const MM_PER_INCH: f64 = 25.4;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{MM_PER_INCH, ZERO_CELSIUS_K};

    /// Convert grams to kilograms.
    #[inline]
    pub fn g_to_kg(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert inches to metres.
    #[inline]
    pub fn in_to_m(v: f64) -> f64 {
        v * MM_PER_INCH / 1_000.0
    }

    /// Convert inches to millimetres.
    #[inline]
    pub fn in_to_mm(v: f64) -> f64 {
        v * MM_PER_INCH
    }

    /// Convert degrees Celsius to kelvin.
    #[inline]
    pub fn c_to_k(v: f64) -> f64 {
        v + ZERO_CELSIUS_K
    }

    /// Convert milliohms to ohms.
    #[inline]
    pub fn mohm_to_ohm(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Force helpers between newtons and gram-force, the unit hobby thrust tables use.
pub mod force {
    use super::constants::G0;

    /// Weight force (N) of a mass given in kilograms.
    #[inline]
    pub fn weight_n(mass_kg: f64) -> f64 {
        mass_kg * G0
    }

    /// Convert newtons to gram-force.
    #[inline]
    pub fn n_to_gf(v: f64) -> f64 {
        v / G0 * 1_000.0
    }
}

/// Small numeric helpers.
pub mod math {
    /// Division that returns `fallback` when the denominator is not strictly positive.
    #[inline]
    pub fn ratio_or(num: f64, den: f64, fallback: f64) -> f64 {
        if den > 0.0 { num / den } else { fallback }
    }
}
