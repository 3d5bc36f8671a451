use std::path::PathBuf;

use clap::Parser;
use drone_performance_calculator::config::{DroneConfig, FrameLayout};
use drone_performance_calculator::export::report::{ReportMetadata, write_json};
use drone_performance_calculator::{
    SimulationResult, load_config, load_presets, logging, run_full_simulation, select_preset,
};
use tracing::info;

/// Estimate hover time, thrust margin, and component loading for a multirotor build.
#[derive(Parser, Debug)]
#[command(author, version, about = "Multirotor performance estimator")]
struct Cli {
    /// Configuration file (YAML, or TOML by extension). Built-in defaults when omitted.
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Preset name from the preset catalog (case-insensitive)
    #[arg(long)]
    preset: Option<String>,

    /// Preset catalog: directory of TOML files or a YAML list
    #[arg(long, default_value = "configs/presets")]
    presets: PathBuf,

    /// Altitude above sea level in metres
    #[arg(long)]
    altitude: Option<f64>,

    /// Ambient temperature in °C
    #[arg(long)]
    temperature: Option<f64>,

    /// Payload mass in grams
    #[arg(long)]
    payload: Option<f64>,

    /// Battery series cell count
    #[arg(long)]
    cells: Option<u32>,

    /// Battery capacity per parallel group in mAh
    #[arg(long)]
    capacity: Option<f64>,

    /// Motor Kv (RPM/V)
    #[arg(long)]
    kv: Option<f64>,

    /// Propeller diameter in inches
    #[arg(long)]
    prop_diameter: Option<f64>,

    /// Propeller pitch in inches
    #[arg(long)]
    prop_pitch: Option<f64>,

    /// Propeller blade count
    #[arg(long)]
    blades: Option<u32>,

    /// Number of motors
    #[arg(long)]
    motors: Option<u32>,

    /// Treat the frame as coaxial (stacked rotor pairs)
    #[arg(long, default_value_t = false)]
    coaxial: bool,

    /// Write a JSON report to this path ('-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = if let Some(path) = &cli.config {
        load_config(path)?
    } else if cli.preset.is_some() {
        let presets = load_presets(&cli.presets)?;
        select_preset(&presets, cli.preset.as_deref())?
    } else {
        DroneConfig::default()
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let name = config
        .name
        .clone()
        .unwrap_or_else(|| "custom".to_string());
    let result = run_full_simulation(config.clone());

    if let Some(path) = &cli.json {
        let generated_at = chrono::Utc::now().to_rfc3339();
        let metadata = ReportMetadata {
            config_name: &name,
            generated_at: &generated_at,
            tool_version: drone_performance_calculator::version(),
        };
        write_json(path, &metadata, &config, &result)?;
        info!(path = %path.display(), "wrote JSON report");
        if path.as_os_str() == "-" {
            return Ok(());
        }
    }

    print_report(&name, &config, &result);
    Ok(())
}

fn apply_overrides(config: &mut DroneConfig, cli: &Cli) {
    if let Some(v) = cli.altitude {
        config.environment.altitude_m = v;
    }
    if let Some(v) = cli.temperature {
        config.environment.temperature_c = v;
    }
    if let Some(v) = cli.payload {
        config.frame.payload_weight_g = v;
    }
    if let Some(v) = cli.cells {
        config.battery.cells_s = v;
    }
    if let Some(v) = cli.capacity {
        config.battery.capacity_mah = v;
    }
    if let Some(v) = cli.kv {
        config.motor.kv = v;
    }
    if let Some(v) = cli.prop_diameter {
        config.propeller.diameter_in = v;
    }
    if let Some(v) = cli.prop_pitch {
        config.propeller.pitch_in = v;
    }
    if let Some(v) = cli.blades {
        config.propeller.blades = v;
    }
    if let Some(v) = cli.motors {
        config.frame.motor_count = v;
    }
    if cli.coaxial {
        config.frame.layout = FrameLayout::Coaxial;
    }
}

fn print_report(name: &str, config: &DroneConfig, r: &SimulationResult) {
    let b = &config.battery;
    let p = &config.propeller;
    println!("=== Performance Estimate: {} ===", name);
    println!(
        "Airframe       : {} x {} motors, {:.0} mm wheelbase, AUW = {:.0} g",
        config.frame.motor_count,
        config.frame.layout.label(),
        config.frame.wheelbase_mm,
        r.total_weight_g
    );
    println!(
        "Battery        : {} {}S{}P {:.0} mAh ({:.1} V nominal, {:.1} V full)",
        b.chemistry.label(),
        b.cells_s,
        b.cells_p,
        r.total_capacity_mah,
        r.nominal_voltage,
        r.max_voltage
    );
    println!(
        "Propeller      : {:.1}x{:.1} {}-blade, Ct = {:.4}, Cp = {:.4}, rho = {:.4} kg/m^3",
        p.diameter_in, p.pitch_in, p.blades, r.ct, r.cp, r.air_density
    );
    println!(
        "Full throttle  : {:.0} RPM, {:.0} g/motor, {:.0} g total, TWR = {:.2}, draw = {:.1} A",
        r.max_rpm, r.max_thrust_per_motor_g, r.max_total_thrust_g, r.twr, r.max_total_current_draw
    );
    println!(
        "Hover          : {:.1} % throttle, {:.0} RPM, {:.2} A/motor, {:.2} A total, {:.1} W",
        r.hover_throttle, r.hover_rpm, r.hover_current_per_motor, r.hover_total_current, r.hover_total_power
    );
    println!(
        "Pack at hover  : {:.2} V (sag {:.3} V), efficiency = {:.2} g/W, motor eff = {:.0} %",
        r.hover_battery_voltage,
        r.hover_battery_sag,
        r.hover_efficiency,
        r.motor_efficiency * 100.0
    );
    println!(
        "Losses         : wire {:.2} W, ESC {:.2} W, copper {:.2} W/motor, motor @5min = {:.1} °C",
        r.total_wire_loss, r.esc_power_loss, r.copper_loss_per_motor, r.motor_temp_5min
    );
    if r.flight_time_min.is_finite() {
        println!("Flight time    : {:.1} min", r.flight_time_min);
    } else {
        println!("Flight time    : unbounded (no current drawn)");
    }
    println!("--- Checks ---");
    for (check, ok) in r.validations.checks() {
        println!("  [{}] {}", if ok { "ok" } else { "FAIL" }, check);
    }
    println!(
        "Overall        : {}",
        if r.all_valid { "all checks passed" } else { "some checks failed" }
    );
}
