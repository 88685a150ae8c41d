//! # Netvalidate - Network State Compliance Validation
//!
//! Netvalidate compares the operational state of network devices against a
//! declared desired state and produces a per-host compliance report. It is a
//! pure computation over two data trees: device transport and command
//! execution live outside this crate, which consumes their captured output.
//!
//! ## Core Concepts
//!
//! - **Desired state**: YAML input scoped by `all`/`groups`/`hosts`, keyed by
//!   the command whose output proves each requirement
//! - **Actual state**: raw per-command output (structured records or text)
//!   normalized into the same canonical shapes as the desired state
//! - **Compliance report**: a recursive structural diff per command with
//!   `present`/`missing`/`extra` detail, plus an overall verdict
//!
//! ## Pipeline
//!
//! ```text
//! input YAML ──▶ desired state ──┐
//!                                ├──▶ compare ──▶ report ──▶ file / stdout
//! raw output ──▶ actual state ───┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use netvalidate::{validate, PlatformFamily, ValidateConfig};
//!
//! fn main() -> netvalidate::Result<()> {
//!     let input = netvalidate::load_input_file("input_val.yml".as_ref())?;
//!     let cmd_output = serde_json::from_str(&captured_json)?;
//!
//!     let config = ValidateConfig::new("HME-SWI-VSS01", PlatformFamily::Ios)
//!         .with_groups(vec!["ios".into()]);
//!     let envelope = validate(&config, &input, &cmd_output)?;
//!
//!     println!("{}", envelope.report);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod compliance;
pub mod config;
pub mod desired;
pub mod error;
pub mod formatter;
pub mod platform;
pub mod state;

pub use compliance::{compare, compliance_report, CompareResult, ReportEnvelope};
pub use config::ValidateConfig;
pub use desired::{desired_state, load_input_file};
pub use error::{Error, Result};
pub use formatter::actual_state_engine;
pub use platform::PlatformFamily;
pub use state::State;

use serde_json::Value;
use tracing::info;

/// Runs the full validation pipeline for one host.
///
/// `input` is the loaded desired-state input file; `cmd_output` maps each
/// command to its captured raw output. The raw output is formatted into the
/// canonical actual state for the configured platform family, compared
/// against the host's merged desired state, and assembled into a report
/// envelope (persisted when the config carries a report directory).
///
/// Fails with [`Error::NoDesiredState`] when the input file yields no desired
/// state for the host.
pub fn validate(
    config: &ValidateConfig,
    input: &Value,
    cmd_output: &State,
) -> Result<ReportEnvelope> {
    let desired = desired_state(input, &config.host, &config.groups);
    if desired.is_empty() {
        return Err(Error::NoDesiredState(config.host.clone()));
    }
    info!(
        host = %config.host,
        platform = %config.platform,
        commands = desired.len(),
        "validating host"
    );
    let actual = actual_state_engine(config.platform, cmd_output);
    compliance_report(&desired, &actual, &config.host, config.report_dir.as_deref())
}
