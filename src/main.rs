//! Heartfield frame dumper
//!
//! Builds a heart from an optional JSON config and writes every frame to
//! stdout as JSON, ready for an external renderer.
//!
//! Usage: `heartfield [config.json]`
//!
//! Set `HEARTFIELD_LOG` to a level (`error`, `warn`, `info`, `debug`,
//! `trace`) to see the library's build log on stderr.

use heartfield::prelude::*;
use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

const LOG_ENV: &str = "HEARTFIELD_LOG";

/// Writes log records to stderr, one line each.
struct StderrLog;

impl Log for StderrLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLog = StderrLog;

/// Parse the log level from the environment value. Unset or unknown means off.
fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Off)
}

fn init_logging() {
    let level = log_level(env::var(LOG_ENV).ok().as_deref());
    if level == LevelFilter::Off {
        return;
    }
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => HeartConfig::load(&path)?,
        None => HeartConfig::default(),
    };

    let heart = HeartGenerator::from_config(config)?;

    for (index, frame) in heart.frames().iter().enumerate() {
        eprintln!(
            "frame {:>3}: {} particles ({} halo)",
            index,
            frame.len(),
            frame.halo_len()
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer(&mut out, heart.frames())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("heartfield: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(log_level(None), LevelFilter::Off);
        assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(log_level(Some("loud")), LevelFilter::Off);
    }

    #[test]
    fn test_logger_respects_max_level() {
        log::set_max_level(LevelFilter::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let trace = Metadata::builder().level(log::Level::Trace).build();
        assert!(StderrLog.enabled(&info));
        assert!(!StderrLog.enabled(&trace));
    }
}
