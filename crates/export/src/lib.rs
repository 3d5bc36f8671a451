//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod sweep {
    use std::io::{self, Write};

    pub const HEADER: &str = "payload_g,total_weight_g,flight_time_min,hover_throttle_pct,twr,hover_current_a,motor_temp_5min_c,all_valid,viable";

    /// Write the standard payload sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the payload sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub payload_g: f64,
        pub total_weight_g: f64,
        pub flight_time_min: f64,
        pub hover_throttle_pct: f64,
        pub twr: f64,
        pub hover_current_a: f64,
        pub motor_temp_5min_c: f64,
        pub all_valid: bool,
        pub viable: bool,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.1},{:.1},{:.3},{:.2},{:.3},{:.3},{:.2},{},{}",
                self.payload_g,
                self.total_weight_g,
                self.flight_time_min,
                self.hover_throttle_pct,
                self.twr,
                self.hover_current_a,
                self.motor_temp_5min_c,
                self.all_valid,
                self.viable,
            )
        }
    }
}

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Provenance stamped on every exported report.
    #[derive(Debug, Clone, Serialize)]
    pub struct ReportMetadata<'a> {
        pub config_name: &'a str,
        pub generated_at: &'a str,
        pub tool_version: &'a str,
    }

    #[derive(Serialize)]
    struct ReportEnvelope<'a, C: Serialize, R: Serialize> {
        #[serde(flatten)]
        metadata: &'a ReportMetadata<'a>,
        config: &'a C,
        result: &'a R,
    }

    /// Write a pretty-printed JSON report of `config` and its `result`.
    ///
    /// Non-finite numbers (an unbounded flight time, for instance) are written as `null`.
    pub fn write_json<C: Serialize, R: Serialize>(
        path: &Path,
        metadata: &ReportMetadata<'_>,
        config: &C,
        result: &R,
    ) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        write_json_to(&mut writer, metadata, config, result)?;
        writer.flush()
    }

    /// Same as [`write_json`] into an arbitrary writer.
    pub fn write_json_to<W: Write, C: Serialize, R: Serialize>(
        writer: &mut W,
        metadata: &ReportMetadata<'_>,
        config: &C,
        result: &R,
    ) -> io::Result<()> {
        let envelope = ReportEnvelope {
            metadata,
            config,
            result,
        };
        to_writer_pretty(&mut *writer, &envelope)?;
        writeln!(writer)
    }
}
