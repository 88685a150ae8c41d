//! Compliance engine.
//!
//! Compares a desired-state tree against an actual-state tree and produces a
//! per-command verdict tree plus a report envelope that can be printed and
//! persisted. The comparison is a pure function over its two input trees;
//! persistence is the only part that touches the filesystem.
//!
//! ## Verdict shape
//!
//! Each compared command yields `{complies, present, missing, extra}`:
//!
//! - `present`: per-key outcome for desired keys found in the actual state
//! - `missing`: desired keys absent from the actual state
//! - `extra`: actual keys not in the desired key set, only reported when the
//!   desired node carries `_mode: strict`
//!
//! Commands whose actual state carries no usable data are excluded from the
//! compliance computation and listed under `skipped` instead.

mod compare;
mod persistence;
mod report;

pub use compare::{compare, Compared};
pub use persistence::{report_file, report_file_at, report_path, run_stamp};
pub use report::{compliance_report, ReportEnvelope};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome for one desired key found in the actual state.
///
/// A failing key records only `complies: false`; a passing key also records
/// whether the match was a nested container or a leaf scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentEntry {
    /// Whether this key's subtree complies.
    pub complies: bool,
    /// True when the comparison recursed into a further container, absent on
    /// failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<bool>,
}

impl PresentEntry {
    fn pass(nested: bool) -> Self {
        PresentEntry {
            complies: true,
            nested: Some(nested),
        }
    }

    fn fail() -> Self {
        PresentEntry {
            complies: false,
            nested: None,
        }
    }
}

/// The `present` detail of a comparison: keyed for mapping comparisons,
/// element-wise for sequence comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Present {
    /// Per-key outcomes of a mapping comparison.
    Keys(IndexMap<String, PresentEntry>),
    /// Desired elements matched during a sequence comparison.
    Items(Vec<Value>),
}

impl Present {
    fn keys() -> Self {
        Present::Keys(IndexMap::new())
    }
}

/// Verdict for one compared node (a command, or a nested container).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    /// True only when nothing is missing, nothing is extra and every present
    /// key complies.
    pub complies: bool,
    /// Outcomes for desired keys/elements found in the actual state.
    pub present: Present,
    /// Desired keys/elements absent from the actual state.
    pub missing: Vec<Value>,
    /// Actual keys/elements outside the desired set (strict mode only).
    pub extra: Vec<Value>,
}

impl CompareResult {
    fn new(present: Present) -> Self {
        CompareResult {
            complies: true,
            present,
            missing: Vec::new(),
            extra: Vec::new(),
        }
    }
}
