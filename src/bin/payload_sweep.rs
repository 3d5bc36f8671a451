use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use drone_performance_calculator::export::{self, sweep as export_sweep};
use drone_performance_calculator::{
    DroneConfig, load_config, load_presets, logging, payload_sweep, select_preset,
};
use tracing::info;

/// Sweep payload mass and tabulate endurance and thrust margin (CSV).
#[derive(Parser, Debug)]
#[command(author, version, about = "Payload sweep CSV generator")]
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

    /// First payload in grams
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Last payload in grams (inclusive)
    #[arg(long, default_value_t = 2_000.0)]
    end: f64,

    /// Payload increment in grams
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/payload_sweep.csv")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = if let Some(path) = &cli.config {
        load_config(path)?
    } else if cli.preset.is_some() {
        let presets = load_presets(&cli.presets)?;
        select_preset(&presets, cli.preset.as_deref())?
    } else {
        DroneConfig::default()
    };

    let sweep = payload_sweep(&config, cli.start, cli.end, cli.step)?;

    let mut writer = export::writer_for_path(&cli.output)?;
    export_sweep::write_header(&mut *writer)?;
    for sample in &sweep.samples {
        export_sweep::Record {
            payload_g: sample.payload_g,
            total_weight_g: sample.total_weight_g,
            flight_time_min: sample.flight_time_min,
            hover_throttle_pct: sample.hover_throttle,
            twr: sample.twr,
            hover_current_a: sample.hover_total_current,
            motor_temp_5min_c: sample.motor_temp_5min,
            all_valid: sample.all_valid,
            viable: sample.viable,
        }
        .write_to(&mut *writer)?;
    }
    writer.flush()?;

    match sweep.max_viable_payload_g {
        Some(payload) => info!(payload_g = payload, "heaviest viable payload in sweep"),
        None => info!("no swept payload meets the TWR and hover-throttle limits"),
    }
    info!(
        samples = sweep.samples.len(),
        output = %cli.output.display(),
        "payload sweep written"
    );
    Ok(())
}
