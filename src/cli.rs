//! CLI argument parsing.
//!
//! The binary runs one validation: desired-state input file plus a captured
//! command-output JSON file in, compliance verdict out. Device access happens
//! elsewhere; this surface only consumes its captures.

use clap::Parser;
use std::path::PathBuf;

/// Netvalidate - network state compliance validation
///
/// Compares captured device command output against a declared desired state
/// and reports per-command compliance.
#[derive(Parser, Debug, Clone)]
#[command(name = "netvalidate")]
#[command(version)]
#[command(about = "Network state compliance validation", long_about = None)]
pub struct Cli {
    /// Path to the desired-state input file (YAML with all/groups/hosts)
    #[arg(short = 'i', long, env = "NETVALIDATE_INPUT", default_value = "input_val.yml")]
    pub input: PathBuf,

    /// Path to the captured command-output file (JSON, command -> raw output)
    #[arg(short = 'o', long = "cmd-output")]
    pub cmd_output: PathBuf,

    /// Host name, used for desired-state lookup and report naming
    #[arg(short = 'n', long)]
    pub host: String,

    /// Platform alias of the host (e.g. cisco_ios, nxos, asa)
    #[arg(short = 'p', long)]
    pub platform: String,

    /// Group contributing desired state, repeatable, lowest precedence first
    #[arg(short = 'g', long = "group", action = clap::ArgAction::Append)]
    pub groups: Vec<String>,

    /// Directory to save the compliance report in
    #[arg(short = 'd', long = "directory", env = "NETVALIDATE_REPORT_DIR")]
    pub report_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}
