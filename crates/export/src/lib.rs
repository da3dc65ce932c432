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

pub mod window {
    use std::io::Write;

    use serde::Serialize;

    /// CSV row describing one evaluated departure candidate.
    #[derive(Debug, Clone, Serialize)]
    pub struct ScanRecord<'a> {
        pub day: f64,
        pub closeness_m: f64,
        pub closeness_au: f64,
        pub collision: bool,
        pub selected: bool,
        pub model: &'a str,
        pub origin_body: &'a str,
        pub dest_body: &'a str,
    }

    /// Write scan rows with a header derived from [`ScanRecord`].
    pub fn write_scan_csv<W: Write>(writer: W, records: &[ScanRecord<'_>]) -> csv::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub mod trajectory {
    use std::collections::BTreeMap;
    use std::io::{self, Write};
    use std::path::Path;

    use chrono::{SecondsFormat, Utc};
    use serde::{Deserialize, Serialize};

    pub const TRAJECTORY_DOCUMENT_VERSION: u32 = 1;

    /// Rocket position at one playback frame.
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct RocketFrame {
        pub day: f64,
        pub x_m: f64,
        pub y_m: f64,
    }

    /// Envelope written for playback tools.
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct TrajectoryDocument {
        pub version: u32,
        pub generated_utc: String,
        pub origin: String,
        pub destination: String,
        pub departure_day: f64,
        pub arrival_day: f64,
        pub total_time_s: f64,
        pub rocket: Vec<RocketFrame>,
        /// Per-body `[x, y]` positions, index-aligned with `rocket`.
        pub bodies: BTreeMap<String, Vec<[f64; 2]>>,
    }

    impl TrajectoryDocument {
        /// New document stamped with the current UTC time.
        pub fn new(
            origin: &str,
            destination: &str,
            departure_day: f64,
            arrival_day: f64,
            total_time_s: f64,
        ) -> Self {
            Self {
                version: TRAJECTORY_DOCUMENT_VERSION,
                generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure_day,
                arrival_day,
                total_time_s,
                rocket: Vec::new(),
                bodies: BTreeMap::new(),
            }
        }
    }

    /// Serialize the document as pretty JSON.
    pub fn write_to<W: Write>(writer: W, document: &TrajectoryDocument) -> io::Result<()> {
        serde_json::to_writer_pretty(writer, document)?;
        Ok(())
    }

    /// Write the document to `path` (`-` for stdout), creating parent directories.
    pub fn write_json(path: &Path, document: &TrajectoryDocument) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        write_to(&mut writer, document)?;
        writer.flush()
    }
}
