//! Cell chemistry table and pack sag under load.

use drone_core::units::mohm_to_ohm;
use serde::{Deserialize, Serialize};

/// Per-cell voltage envelope of a chemistry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVoltages {
    pub nominal: f64,
    pub max: f64,
    pub min: f64,
}

/// Supported lithium cell chemistries.
///
/// Parsed leniently from free-form labels; anything unrecognised is treated as LiPo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Chemistry {
    #[default]
    LiPo,
    LiIon,
    LiHv,
}

impl Chemistry {
    pub fn voltages(self) -> CellVoltages {
        match self {
            Chemistry::LiPo => CellVoltages {
                nominal: 3.7,
                max: 4.2,
                min: 3.3,
            },
            Chemistry::LiIon => CellVoltages {
                nominal: 3.6,
                max: 4.2,
                min: 2.8,
            },
            Chemistry::LiHv => CellVoltages {
                nominal: 3.85,
                max: 4.35,
                min: 3.3,
            },
        }
    }

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Chemistry::LiPo => "LiPo",
            Chemistry::LiIon => "Li-ion",
            Chemistry::LiHv => "LiHV",
        }
    }

    /// Resolve a label such as `"Li-ion"`, `"lihv"` or `"LIPO"`; unknown labels map to LiPo.
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "liion" => Chemistry::LiIon,
            "lihv" => Chemistry::LiHv,
            _ => Chemistry::LiPo,
        }
    }

    /// Nominal pack voltage for `cells` in series.
    pub fn nominal_pack_voltage(self, cells: u32) -> f64 {
        self.voltages().nominal * f64::from(cells)
    }

    /// Fully charged pack voltage for `cells` in series.
    pub fn max_pack_voltage(self, cells: u32) -> f64 {
        self.voltages().max * f64::from(cells)
    }

    /// Cutoff pack voltage for `cells` in series.
    pub fn min_pack_voltage(self, cells: u32) -> f64 {
        self.voltages().min * f64::from(cells)
    }
}

impl From<String> for Chemistry {
    fn from(value: String) -> Self {
        Chemistry::from_label(&value)
    }
}

impl From<Chemistry> for &'static str {
    fn from(value: Chemistry) -> Self {
        value.label()
    }
}

/// Pack terminal voltage under load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatterySag {
    pub voltage: f64,
    pub sag_volts: f64,
}

/// Terminal voltage of a `cells`-series pack delivering `current_a`.
///
/// Sag is the resistive drop across the series string; the result never falls below the
/// chemistry cutoff voltage.
pub fn battery_voltage_under_load(
    cells: u32,
    chemistry: Chemistry,
    current_a: f64,
    internal_resistance_mohm_per_cell: f64,
) -> BatterySag {
    let nominal = chemistry.nominal_pack_voltage(cells);
    let floor = chemistry.min_pack_voltage(cells);
    let sag_volts = current_a * (mohm_to_ohm(internal_resistance_mohm_per_cell) * f64::from(cells));
    BatterySag {
        voltage: (nominal - sag_volts).max(floor),
        sag_volts,
    }
}
