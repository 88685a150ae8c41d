//! Report file persistence.
//!
//! Reports are written as pretty-printed JSON to
//! `<dir>/<host>_compliance_report_<YYYYMMDD-HHMM>.json`. The timestamp has
//! minute resolution, so every report produced by the same run lands in the
//! same file: the first write seeds it, later writes merge into it and
//! recompute the overall verdict.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{Error, Result};

/// Current run timestamp, minute resolution.
pub fn run_stamp() -> String {
    Local::now().format("%Y%m%d-%H%M").to_string()
}

/// Full path of the report file for a host and run timestamp.
pub fn report_path(host: &str, directory: &Path, stamp: &str) -> PathBuf {
    directory.join(format!("{host}_compliance_report_{stamp}.json"))
}

/// Persists one report fragment for the current run.
///
/// `fragment` holds the per-command verdicts only; the `complies` and
/// `skipped` envelope keys are maintained here.
pub fn report_file(
    host: &str,
    directory: &Path,
    fragment: &Map<String, Value>,
    is_new_run: bool,
    skipped: &[Value],
) -> Result<PathBuf> {
    report_file_at(host, directory, fragment, is_new_run, skipped, &run_stamp())
}

/// [`report_file`] with an explicit run timestamp.
pub fn report_file_at(
    host: &str,
    directory: &Path,
    fragment: &Map<String, Value>,
    is_new_run: bool,
    skipped: &[Value],
    stamp: &str,
) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(Error::ReportDirMissing(directory.to_path_buf()));
    }
    let path = report_path(host, directory, stamp);

    let report = if is_new_run {
        let mut report = Map::new();
        report.insert("complies".into(), Value::Bool(fragment_complies(fragment)));
        report.insert("skipped".into(), Value::Array(skipped.to_vec()));
        report.extend(fragment.clone());
        report
    } else {
        let mut report = read_report(&path)?;
        report.extend(fragment.clone());
        if let Some(Value::Array(existing)) = report.get_mut("skipped") {
            existing.extend(skipped.iter().cloned());
        } else {
            report.insert("skipped".into(), Value::Array(skipped.to_vec()));
        }
        let complies = report
            .iter()
            .filter(|(key, _)| *key != "complies" && *key != "skipped")
            .all(|(_, verdict)| verdict_complies(verdict));
        report.insert("complies".into(), Value::Bool(complies));
        report
    };

    let json = serde_json::to_string_pretty(&Value::Object(report)).map_err(|err| {
        Error::ReportWrite {
            path: path.clone(),
            message: err.to_string(),
        }
    })?;
    fs::write(&path, json).map_err(|err| Error::ReportWrite {
        path: path.clone(),
        message: err.to_string(),
    })?;
    info!(host, path = %path.display(), "compliance report saved");
    Ok(path)
}

fn read_report(path: &Path) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path).map_err(|err| Error::ReportRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|err| Error::ReportRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::ReportRead {
            path: path.to_path_buf(),
            message: "report is not a JSON object".to_string(),
        }),
    }
}

fn fragment_complies(fragment: &Map<String, Value>) -> bool {
    fragment.values().all(verdict_complies)
}

fn verdict_complies(verdict: &Value) -> bool {
    verdict
        .get("complies")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
