//! End-to-end performance estimate for a single configuration.
//!
//! The pipeline resolves the full-throttle rotor state first, then derives hover as a
//! throttle fraction of it. Motor current is back-calculated from shaft power with a fixed
//! motor efficiency rather than solved iteratively against the motor's own curve.

use drone_atmosphere as atmosphere;
use drone_config::DroneConfig;
use drone_core::force::{n_to_gf, weight_n};
use drone_core::math::ratio_or;
use drone_core::units::{g_to_kg, in_to_m, in_to_mm};
use drone_electrical::{
    BatterySag, Chemistry, WireGauge, battery_voltage_under_load, esc_power_loss, motor_efficiency,
    motor_elec_power, motor_rpm, motor_temp, wire_loss,
};
use drone_propulsion::{
    coaxial_factor, max_prop_diameter_mm, prop_power, resolve_prop_coefficients, thrust,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::metrics::{flight_time, hover_throttle, thrust_to_weight_ratio};
use crate::validation::{
    MAX_HOVER_THROTTLE, MAX_MOTOR_TEMP_C, MIN_TWR, Validations, cells_within,
};

/// Motor efficiency assumed when converting shaft power back to current.
pub const ASSUMED_MOTOR_EFFICIENCY: f64 = 0.85;
/// Hover duration used for the thermal check (s).
pub const THERMAL_CHECK_DURATION_S: f64 = 300.0;

/// Every derived figure for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub air_density: f64,
    pub ct: f64,
    pub cp: f64,

    pub total_weight_g: f64,
    pub total_weight_kg: f64,

    pub battery_cells: u32,
    pub nominal_voltage: f64,
    pub max_voltage: f64,
    pub total_capacity_mah: f64,
    pub max_continuous_current: f64,
    pub max_burst_current: f64,

    pub max_rpm: f64,
    pub max_thrust_per_motor_g: f64,
    pub max_total_thrust_g: f64,
    pub max_current_per_motor: f64,
    pub max_total_current_draw: f64,
    pub max_battery_voltage: f64,
    pub max_battery_sag: f64,
    pub twr: f64,

    pub hover_throttle: f64,
    pub hover_rpm: f64,
    pub hover_thrust_per_motor_g: f64,
    pub hover_mech_power_per_motor: f64,
    pub hover_current_per_motor: f64,
    pub hover_total_current: f64,
    pub hover_battery_voltage: f64,
    pub hover_battery_sag: f64,
    pub hover_total_power: f64,
    /// Grams of thrust per watt drawn from the pack.
    pub hover_efficiency: f64,
    pub motor_efficiency: f64,
    pub flight_time_min: f64,

    pub wire_loss_per_motor: f64,
    pub total_wire_loss: f64,
    pub esc_power_loss: f64,
    pub copper_loss_per_motor: f64,
    pub motor_temp_5min: f64,

    pub prop_diameter_mm: f64,
    pub max_prop_diameter_mm: f64,
    pub motor_min_cells: u32,
    pub motor_max_cells: u32,
    pub esc_min_cells: u32,
    pub esc_max_cells: u32,

    pub validations: Validations,
    pub all_valid: bool,
}

/// Rotor and pack state at one propeller speed.
#[derive(Debug, Clone, Copy)]
struct OperatingPoint {
    thrust_per_motor_n: f64,
    mech_power_per_motor_w: f64,
    current_per_motor_a: f64,
    total_current_a: f64,
    battery: BatterySag,
}

struct Powertrain {
    rho: f64,
    ct: f64,
    cp: f64,
    diameter_m: f64,
    motor_count: f64,
    nominal_voltage: f64,
    no_load_current_a: f64,
    payload_current_a: f64,
    cells: u32,
    chemistry: Chemistry,
    internal_resistance_mohm: f64,
}

impl Powertrain {
    fn operating_point(&self, rps: f64) -> OperatingPoint {
        let thrust_per_motor_n = thrust(self.ct, self.rho, rps, self.diameter_m);
        let mech_power_per_motor_w = prop_power(self.cp, self.rho, rps, self.diameter_m);
        let current_per_motor_a = ratio_or(
            mech_power_per_motor_w,
            self.nominal_voltage * ASSUMED_MOTOR_EFFICIENCY,
            0.0,
        ) + self.no_load_current_a;
        let total_current_a = current_per_motor_a * self.motor_count + self.payload_current_a;
        let battery = battery_voltage_under_load(
            self.cells,
            self.chemistry,
            total_current_a,
            self.internal_resistance_mohm,
        );
        OperatingPoint {
            thrust_per_motor_n,
            mech_power_per_motor_w,
            current_per_motor_a,
            total_current_a,
            battery,
        }
    }
}

/// Run the complete performance estimate for `config`.
///
/// Pure and total: identical inputs give identical results and no finite input panics.
pub fn run_full_simulation(config: DroneConfig) -> SimulationResult {
    let DroneConfig {
        environment,
        frame,
        battery,
        esc,
        motor,
        propeller,
        ..
    } = config;

    let rho = atmosphere::air_density(environment.altitude_m, environment.temperature_c);
    let coefficients = resolve_prop_coefficients(
        propeller.ct,
        propeller.cp,
        propeller.diameter_in,
        propeller.pitch_in,
        propeller.blades,
    );

    let motor_count_u = frame.motor_count.max(1);
    let motor_count = f64::from(motor_count_u);
    let effective_motors = motor_count * coaxial_factor(frame.layout.is_coaxial());

    let per_arm_g = motor.weight_g + esc.weight_g + propeller.weight_g;
    let total_weight_g = frame.frame_weight_g
        + frame.payload_weight_g
        + battery.weight_g
        + per_arm_g * motor_count;
    let total_weight_kg = g_to_kg(total_weight_g);

    let cells = battery.cells_s;
    let chemistry = battery.chemistry;
    let nominal_voltage = chemistry.nominal_pack_voltage(cells);
    let max_voltage = chemistry.max_pack_voltage(cells);
    let total_capacity_mah = battery.total_capacity_mah();
    let capacity_ah = total_capacity_mah / 1_000.0;
    let max_continuous_current = capacity_ah * battery.c_rating;
    let max_burst_current = capacity_ah * battery.burst_c;

    let powertrain = Powertrain {
        rho,
        ct: coefficients.ct,
        cp: coefficients.cp,
        diameter_m: in_to_m(propeller.diameter_in),
        motor_count,
        nominal_voltage,
        no_load_current_a: motor.no_load_current_a,
        payload_current_a: frame.payload_current_a,
        cells,
        chemistry,
        internal_resistance_mohm: battery.internal_resistance_mohm,
    };

    // Full throttle: back-EMF evaluated at no-load current.
    let max_rpm = motor_rpm(
        motor.kv,
        max_voltage,
        motor.no_load_current_a,
        motor.resistance_ohm,
    );
    let max_rps = max_rpm / 60.0;
    let max_point = powertrain.operating_point(max_rps);
    let max_total_thrust_n = max_point.thrust_per_motor_n * effective_motors;
    let twr = thrust_to_weight_ratio(max_total_thrust_n, total_weight_kg);
    debug!(
        max_rpm,
        thrust_per_motor_n = max_point.thrust_per_motor_n,
        total_current_a = max_point.total_current_a,
        "full-throttle operating point"
    );

    let required_per_motor_n = ratio_or(weight_n(total_weight_kg), effective_motors, 0.0);
    let throttle = hover_throttle(required_per_motor_n, max_point.thrust_per_motor_n);
    if throttle >= 100.0 {
        warn!(
            required_per_motor_n,
            available_per_motor_n = max_point.thrust_per_motor_n,
            "hover not achievable at full throttle"
        );
    }
    let hover_rps = max_rps * throttle / 100.0;
    let hover = powertrain.operating_point(hover_rps);
    debug!(
        throttle,
        hover_rpm = hover_rps * 60.0,
        total_current_a = hover.total_current_a,
        "hover operating point"
    );

    let hover_thrust_per_motor_g = n_to_gf(hover.thrust_per_motor_n);
    let hover_total_power = motor_elec_power(hover.battery.voltage, hover.total_current_a);
    let hover_efficiency =
        ratio_or(hover_thrust_per_motor_g * effective_motors, hover_total_power, 0.0);
    let flight_time_min = flight_time(
        total_capacity_mah,
        battery.discharge_depth / 100.0,
        hover.total_current_a,
    );
    let motor_efficiency = motor_efficiency(
        hover.mech_power_per_motor_w,
        motor_elec_power(hover.battery.voltage, hover.current_per_motor_a),
    );

    let lead = wire_loss(
        WireGauge::from_awg(esc.wire_awg),
        esc.wire_length_cm,
        hover.current_per_motor_a,
    );
    let esc_power_loss =
        esc_power_loss(esc.resistance_mohm, hover.current_per_motor_a) * motor_count;
    let copper_loss_per_motor =
        hover.current_per_motor_a * hover.current_per_motor_a * motor.resistance_ohm;
    let motor_temp_5min = motor_temp(
        environment.temperature_c,
        copper_loss_per_motor,
        motor.thermal_resistance_c_per_w,
        THERMAL_CHECK_DURATION_S,
    );

    let prop_diameter_mm = in_to_mm(propeller.diameter_in);
    let max_prop_diameter_mm = max_prop_diameter_mm(frame.wheelbase_mm, motor_count_u);

    let validations = Validations {
        motor_current_ok: hover.current_per_motor_a < motor.max_current_a,
        esc_current_ok: hover.current_per_motor_a < esc.continuous_a,
        battery_discharge_ok: hover.total_current_a < max_continuous_current,
        battery_burst_ok: max_point.total_current_a < max_burst_current,
        prop_size_ok: prop_diameter_mm <= max_prop_diameter_mm,
        twr_ok: twr >= MIN_TWR,
        motor_temp_ok: motor_temp_5min < MAX_MOTOR_TEMP_C,
        hover_throttle_ok: throttle < MAX_HOVER_THROTTLE,
        esc_voltage_ok: cells_within(cells, esc.min_cells, esc.max_cells),
        motor_voltage_ok: cells_within(cells, motor.min_cells, motor.max_cells),
    };
    let all_valid = validations.all_valid();
    if !all_valid {
        debug!(failed = ?validations.failures(), "validation checks failed");
    }

    SimulationResult {
        air_density: rho,
        ct: coefficients.ct,
        cp: coefficients.cp,
        total_weight_g,
        total_weight_kg,
        battery_cells: cells,
        nominal_voltage,
        max_voltage,
        total_capacity_mah,
        max_continuous_current,
        max_burst_current,
        max_rpm,
        max_thrust_per_motor_g: n_to_gf(max_point.thrust_per_motor_n),
        max_total_thrust_g: n_to_gf(max_total_thrust_n),
        max_current_per_motor: max_point.current_per_motor_a,
        max_total_current_draw: max_point.total_current_a,
        max_battery_voltage: max_point.battery.voltage,
        max_battery_sag: max_point.battery.sag_volts,
        twr,
        hover_throttle: throttle,
        hover_rpm: hover_rps * 60.0,
        hover_thrust_per_motor_g,
        hover_mech_power_per_motor: hover.mech_power_per_motor_w,
        hover_current_per_motor: hover.current_per_motor_a,
        hover_total_current: hover.total_current_a,
        hover_battery_voltage: hover.battery.voltage,
        hover_battery_sag: hover.battery.sag_volts,
        hover_total_power,
        hover_efficiency,
        motor_efficiency,
        flight_time_min,
        wire_loss_per_motor: lead.power_loss_w,
        total_wire_loss: lead.power_loss_w * motor_count,
        esc_power_loss,
        copper_loss_per_motor,
        motor_temp_5min,
        prop_diameter_mm,
        max_prop_diameter_mm,
        motor_min_cells: motor.min_cells,
        motor_max_cells: motor.max_cells,
        esc_min_cells: esc.min_cells,
        esc_max_cells: esc.max_cells,
        validations,
        all_valid,
    }
}
