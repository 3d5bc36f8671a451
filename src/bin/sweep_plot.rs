use clap::Parser;
use csv::ReaderBuilder;
use drone_performance_calculator::logging;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a payload sweep metric from CSV (flight time, throttle, TWR, ...)"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/payload_sweep.png")]
    output: PathBuf,
    #[arg(long, default_value = "flight_time_min")]
    metric: String,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
struct Point {
    payload_g: f64,
    value: f64,
    viable: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (points, metric_column) = read_points(&cli.input, &cli.metric)?;
    if points.is_empty() {
        return Err(anyhow::anyhow!("No finite samples in the provided CSV"));
    }

    let x_min = points.iter().map(|p| p.payload_g).fold(f64::INFINITY, f64::min);
    let mut x_max = points.iter().map(|p| p.payload_g).fold(f64::NEG_INFINITY, f64::max);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }
    let y_max_raw = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let y_min_raw = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let y_min = y_min_raw.min(0.0);
    let mut y_max = y_max_raw * 1.1;
    if y_max <= y_min {
        y_max = y_min + 1.0;
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("{} vs payload", metric_axis_label(&metric_column)),
            caption_font,
        )
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Payload (g)")
        .y_desc(metric_axis_label(&metric_column))
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .y_label_formatter(&|v| format!("{v:.1}"))
        .draw()?;

    let line_color = RGBColor(30, 90, 180);
    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.payload_g, p.value)),
        ShapeStyle::from(&line_color).stroke_width(2),
    ))?;

    let fail_color = RGBColor(210, 60, 40);
    chart.draw_series(points.iter().map(|p| {
        let color = if p.viable { line_color } else { fail_color };
        Circle::new((p.payload_g, p.value), 4, color.filled())
    }))?;

    if let Some(limit) = points.iter().filter(|p| p.viable).map(|p| p.payload_g).reduce(f64::max) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(limit, y_min), (limit, y_max)],
            ShapeStyle::from(&BLACK.mix(0.5)).stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("max viable = {limit:.0} g"),
            (limit, y_max * 0.95),
            label_font.clone().color(&BLACK),
        )))?;
    }

    root.present()?;
    info!(output = %cli.output.display(), samples = points.len(), "sweep plot rendered");
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str, metric_name: &str) -> anyhow::Result<(Vec<Point>, String)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let payload_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("payload_g"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'payload_g' column"))?;
    let viable_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("viable"));
    let metric_idx = resolve_metric_column(&headers, metric_name)
        .ok_or_else(|| anyhow::anyhow!("CSV missing metric column matching '{}'", metric_name))?;
    let metric_column = headers
        .get(metric_idx)
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Invalid metric column index"))?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let payload_g: f64 = r.get(payload_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let value: f64 = r.get(metric_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let viable = viable_idx
            .and_then(|idx| r.get(idx))
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);
        if payload_g.is_finite() && value.is_finite() {
            points.push(Point {
                payload_g,
                value,
                viable,
            });
        }
    }
    points.sort_by(|a, b| a.payload_g.total_cmp(&b.payload_g));
    Ok((points, metric_column))
}

fn resolve_metric_column(headers: &csv::StringRecord, metric_name: &str) -> Option<usize> {
    let direct = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(metric_name));
    if direct.is_some() {
        return direct;
    }
    let fallback = match metric_name.to_lowercase().as_str() {
        "flight_time" | "endurance" => "flight_time_min",
        "throttle" | "hover_throttle" => "hover_throttle_pct",
        "current" => "hover_current_a",
        "temp" | "motor_temp" => "motor_temp_5min_c",
        _ => return None,
    };
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(fallback))
}

fn metric_axis_label(metric_column: &str) -> String {
    match metric_column.to_lowercase().as_str() {
        "flight_time_min" => "Flight time (min)".to_string(),
        "hover_throttle_pct" => "Hover throttle (%)".to_string(),
        "twr" => "Thrust-to-weight".to_string(),
        "hover_current_a" => "Hover current (A)".to_string(),
        "motor_temp_5min_c" => "Motor temp @5 min (°C)".to_string(),
        "total_weight_g" => "All-up weight (g)".to_string(),
        other => other.to_string(),
    }
}
