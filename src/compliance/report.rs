//! Report envelope construction.
//!
//! Wraps the comparator output for one host into the envelope consumed by
//! the printing layer and, when a directory is supplied, persists it via
//! [`report_file`](super::report_file).

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{compare, report_file, report_path, run_stamp};
use crate::error::Result;
use crate::state::{is_unusable, State};

/// Message used as `result` when the whole report complies.
const COMPLIES_MSG: &str = "✅ Validation report complies, desired state and actual state match.";

/// Top-level report envelope for one host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEnvelope {
    /// True when any compared command does not comply.
    pub failed: bool,
    /// The full verdict tree on failure, a short success message otherwise.
    pub result: Value,
    /// The verdict tree: `complies`, one entry per compared command, and the
    /// `skipped` command list.
    pub report: Value,
    /// Pointer at the persisted report file, empty when nothing was saved.
    pub report_text: String,
}

/// Builds the compliance report for one host and optionally persists it.
///
/// Every command in `desired` is compared against its actual-state entry.
/// Commands with a null desired entry have nothing to validate and are
/// dropped; commands whose actual entry is absent or carries no usable data
/// are listed under `skipped` and excluded from the compliance computation.
///
/// With a `directory`, the verdict tree is written to the per-host, per-run
/// report file: the first report of a run seeds the file, later reports for
/// the same run merge into it.
pub fn compliance_report(
    desired: &State,
    actual: &State,
    host: &str,
    directory: Option<&Path>,
) -> Result<ReportEnvelope> {
    let mut commands = Map::new();
    let mut skipped: Vec<Value> = Vec::new();
    let mut complies = true;

    for (cmd, desired_node) in desired {
        if desired_node.is_null() {
            continue;
        }
        if is_unusable(actual.get(cmd)) {
            debug!(command = %cmd, host, "no usable actual state, skipping");
            skipped.push(Value::String(cmd.clone()));
            continue;
        }
        let verdict = compare(desired_node, &actual[cmd]).into_result();
        complies &= verdict.complies;
        commands.insert(cmd.clone(), serde_json::to_value(&verdict)?);
    }

    let mut report = Map::new();
    report.insert("complies".into(), Value::Bool(complies));
    report.extend(commands);
    report.insert("skipped".into(), Value::Array(skipped.clone()));
    let report = Value::Object(report);

    let mut report_text = String::new();
    if let Some(directory) = directory {
        let stamp = run_stamp();
        let path = report_path(host, directory, &stamp);
        // Commands already reported in this run stay in the file; only the
        // first write of a run seeds it.
        let is_new_run = !path.exists();
        let fragment = report
            .as_object()
            .map(|map| {
                map.iter()
                    .filter(|(key, _)| *key != "complies" && *key != "skipped")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect::<Map<String, Value>>()
            })
            .unwrap_or_default();
        let path = report_file(host, directory, &fragment, is_new_run, &skipped)?;
        report_text = format!(
            "💾 The report can be viewed at '{}'",
            path.display()
        );
    }

    let result = if complies {
        Value::String(COMPLIES_MSG.to_string())
    } else {
        report.clone()
    };

    Ok(ReportEnvelope {
        failed: !complies,
        result,
        report,
        report_text,
    })
}
