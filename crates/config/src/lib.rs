//! Configuration models and loaders for the Drone Performance Calculator.
//!
//! Every section and every field carries a default, so a partial file (or an empty one)
//! describes a complete airframe. Free-form labels for chemistry and layout resolve to
//! enums at deserialisation time with LiPo / flat fallbacks.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use drone_electrical::Chemistry;
pub use drone_propulsion::FrameLayout;

/// Complete airframe description fed to the performance model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub environment: EnvironmentConfig,
    pub frame: FrameConfig,
    pub battery: BatteryConfig,
    pub esc: EscConfig,
    pub motor: MotorConfig,
    pub propeller: PropellerConfig,
}

/// Ambient conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub altitude_m: f64,
    pub temperature_c: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            altitude_m: 0.0,
            temperature_c: 25.0,
        }
    }
}

/// Airframe and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub motor_count: u32,
    pub layout: FrameLayout,
    pub frame_weight_g: f64,
    pub payload_weight_g: f64,
    /// Constant draw of payload electronics (A).
    pub payload_current_a: f64,
    pub wheelbase_mm: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            motor_count: 4,
            layout: FrameLayout::Flat,
            frame_weight_g: 500.0,
            payload_weight_g: 0.0,
            payload_current_a: 0.0,
            wheelbase_mm: 450.0,
        }
    }
}

/// Battery pack. Capacity is per parallel group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    pub chemistry: Chemistry,
    pub cells_s: u32,
    pub cells_p: u32,
    pub capacity_mah: f64,
    pub c_rating: f64,
    pub burst_c: f64,
    /// Internal resistance of a single cell (mΩ).
    pub internal_resistance_mohm: f64,
    pub weight_g: f64,
    /// Usable share of capacity in percent.
    pub discharge_depth: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            chemistry: Chemistry::LiPo,
            cells_s: 4,
            cells_p: 1,
            capacity_mah: 5_000.0,
            c_rating: 20.0,
            burst_c: 40.0,
            internal_resistance_mohm: 5.0,
            weight_g: 480.0,
            discharge_depth: 80.0,
        }
    }
}

impl BatteryConfig {
    /// Pack capacity across all parallel groups (mAh).
    pub fn total_capacity_mah(&self) -> f64 {
        self.capacity_mah * f64::from(self.cells_p)
    }
}

/// Brushless motor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    pub kv: f64,
    pub resistance_ohm: f64,
    pub no_load_current_a: f64,
    pub max_current_a: f64,
    pub max_power_w: f64,
    pub weight_g: f64,
    pub thermal_resistance_c_per_w: f64,
    pub min_cells: u32,
    pub max_cells: u32,
    pub stator_diameter_mm: f64,
    pub stator_height_mm: f64,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            kv: 920.0,
            resistance_ohm: 0.1,
            no_load_current_a: 0.5,
            max_current_a: 20.0,
            max_power_w: 300.0,
            weight_g: 55.0,
            thermal_resistance_c_per_w: 4.0,
            min_cells: 3,
            max_cells: 4,
            stator_diameter_mm: 28.0,
            stator_height_mm: 12.0,
        }
    }
}

/// Electronic speed controller, one per motor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscConfig {
    pub continuous_a: f64,
    pub burst_a: f64,
    pub resistance_mohm: f64,
    pub weight_g: f64,
    pub wire_awg: u32,
    /// Motor lead length (cm).
    pub wire_length_cm: f64,
    pub min_cells: u32,
    pub max_cells: u32,
}

impl Default for EscConfig {
    fn default() -> Self {
        Self {
            continuous_a: 30.0,
            burst_a: 40.0,
            resistance_mohm: 10.0,
            weight_g: 25.0,
            wire_awg: 16,
            wire_length_cm: 10.0,
            min_cells: 2,
            max_cells: 6,
        }
    }
}

/// Propeller geometry with optional measured coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropellerConfig {
    pub diameter_in: f64,
    pub pitch_in: f64,
    pub blades: u32,
    pub weight_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp: Option<f64>,
}

impl Default for PropellerConfig {
    fn default() -> Self {
        Self {
            diameter_in: 10.0,
            pitch_in: 4.5,
            blades: 2,
            weight_g: 15.0,
            ct: None,
            cp: None,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("preset '{0}' not found in catalog")]
    PresetNotFound(String),
    #[error("preset catalog is empty")]
    EmptyCatalog,
}

impl DroneConfig {
    /// Reject values the performance model cannot give a meaningful answer for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive_count("frame.motor_count", self.frame.motor_count)?;
        positive_count("battery.cells_s", self.battery.cells_s)?;
        positive_count("battery.cells_p", self.battery.cells_p)?;
        positive_count("propeller.blades", self.propeller.blades)?;

        if !(0.0..=100.0).contains(&self.battery.discharge_depth) {
            return Err(ConfigError::Invalid {
                field: "battery.discharge_depth",
                reason: format!("{} is outside 0-100 %", self.battery.discharge_depth),
            });
        }

        for (field, value) in [
            ("environment.altitude_m", self.environment.altitude_m),
            ("environment.temperature_c", self.environment.temperature_c),
        ] {
            finite(field, value)?;
        }

        let physical_fields = [
            ("frame.frame_weight_g", self.frame.frame_weight_g),
            ("frame.payload_weight_g", self.frame.payload_weight_g),
            ("frame.payload_current_a", self.frame.payload_current_a),
            ("frame.wheelbase_mm", self.frame.wheelbase_mm),
            ("battery.capacity_mah", self.battery.capacity_mah),
            ("battery.c_rating", self.battery.c_rating),
            ("battery.burst_c", self.battery.burst_c),
            ("battery.internal_resistance_mohm", self.battery.internal_resistance_mohm),
            ("battery.weight_g", self.battery.weight_g),
            ("motor.kv", self.motor.kv),
            ("motor.resistance_ohm", self.motor.resistance_ohm),
            ("motor.no_load_current_a", self.motor.no_load_current_a),
            ("motor.max_current_a", self.motor.max_current_a),
            ("motor.max_power_w", self.motor.max_power_w),
            ("motor.weight_g", self.motor.weight_g),
            ("motor.thermal_resistance_c_per_w", self.motor.thermal_resistance_c_per_w),
            ("esc.continuous_a", self.esc.continuous_a),
            ("esc.burst_a", self.esc.burst_a),
            ("esc.resistance_mohm", self.esc.resistance_mohm),
            ("esc.weight_g", self.esc.weight_g),
            ("esc.wire_length_cm", self.esc.wire_length_cm),
            ("propeller.diameter_in", self.propeller.diameter_in),
            ("propeller.pitch_in", self.propeller.pitch_in),
            ("propeller.weight_g", self.propeller.weight_g),
        ];
        for (field, value) in physical_fields {
            finite(field, value)?;
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} must not be negative"),
                });
            }
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    Ok(())
}

fn positive_count(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Load and validate a single configuration (`.toml` as TOML, anything else as YAML).
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DroneConfig, ConfigError> {
    let path = path.as_ref();
    let config: DroneConfig = if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}

/// Load named presets from a directory of TOML files or a YAML list.
///
/// Presets without a `name` are named after their file stem (directory form only).
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<DroneConfig>, ConfigError> {
    let path = path.as_ref();
    let presets: Vec<DroneConfig> = if path.is_dir() {
        read_dir_presets(path)?
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let mut preset: DroneConfig = toml::from_str(&contents)?;
        preset.name.get_or_insert_with(|| file_stem(path));
        vec![preset]
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    for preset in &presets {
        preset.validate()?;
    }
    Ok(presets)
}

/// Select a preset by case-insensitive name, defaulting to the first entry.
pub fn select_preset(
    presets: &[DroneConfig],
    requested: Option<&str>,
) -> Result<DroneConfig, ConfigError> {
    if presets.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }
    let chosen = match requested {
        Some(name) => {
            presets
                .iter()
                .find(|p| p.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
                .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))?
        }
        None => &presets[0],
    };
    Ok(chosen.clone())
}

fn read_dir_presets(dir: &Path) -> Result<Vec<DroneConfig>, ConfigError> {
    let mut presets = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let mut preset: DroneConfig = toml::from_str(&contents)?;
        preset.name.get_or_insert_with(|| file_stem(&path));
        presets.push(preset);
    }
    Ok(presets)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("preset")
        .to_string()
}
