//! Actual-state formatter.
//!
//! Converts raw command output into the canonical nested-mapping actual
//! state, keyed by command string. Output arrives in one of two shapes:
//!
//! - a sequence of flat records (field to value), one per repeated row, when
//!   an extraction template exists for the command
//! - a multi-line string for commands with no extraction template
//!
//! String output is only line-split for a recognized allow-list of commands
//! with dedicated line parsers; any other string output (and null output) is
//! recorded as an empty mapping, the "no usable data" sentinel the comparator
//! turns into a skipped command.
//!
//! Parsing rules are selected per platform family, then per command by
//! first-match-wins substring/regex chains. Transforms never fail: malformed
//! rows and lines are skipped individually and missing optional fields are
//! simply left out of the output.

mod asa;
mod common;
mod ios;
mod nxos;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::platform::PlatformFamily;
use crate::state::{empty_node, State};

/// Commands whose raw string output has a dedicated line parser.
const LINE_PARSED_CMDS: &[&str] = &[
    "show bgp all summary",
    "show run ssh",
    "show run http",
    "show ip ospf database database-summary | in Total",
    "show ip eigrp interfaces",
    "show switch",
    "show  redundancy state | in state",
    "show nve vni",
    "show nve peers",
    "show crypto session brief",
    "show authentication sessions | count mab",
    "show authentication sessions | count dot1x",
];

/// Command patterns (anchored at the start) whose string output is also
/// line parsed. Covers the variable parts of the route and mac-table checks.
static LINE_PARSED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:show ip route .* summary \| in Total|show ip  route.*|show mac address-table .*)",
    )
    .expect("line-parsed command pattern is valid")
});

/// A per-command view of the raw output once its shape is known.
pub(crate) enum CmdOutput<'a> {
    /// Flat records produced by an extraction template.
    Records(&'a [Value]),
    /// Lines of raw output for the allow-listed non-templated commands.
    Lines(Vec<String>),
}

/// Formats every command's raw output into a fresh actual-state mapping.
///
/// Every command present in `cmd_output` gets an entry in the result, the
/// empty-mapping sentinel when the output was unusable.
pub fn actual_state_engine(family: PlatformFamily, cmd_output: &State) -> State {
    let mut actual_state = State::new();
    for (cmd, raw) in cmd_output {
        format_actual_state(family, cmd, raw, &mut actual_state);
    }
    actual_state
}

/// Formats a single command's raw output and merges it into `actual_state`.
pub fn format_actual_state(
    family: PlatformFamily,
    cmd: &str,
    raw: &Value,
    actual_state: &mut State,
) {
    let output = match raw {
        Value::Array(records) => CmdOutput::Records(records),
        Value::String(text) if is_line_parsed(cmd) => {
            CmdOutput::Lines(text.trim().lines().map(str::to_string).collect())
        }
        Value::String(_) => {
            // String output for a command with no line parser carries no
            // usable data; record the skip sentinel.
            warn!(command = cmd, "no parser for raw string output, skipping");
            actual_state.insert(cmd.to_string(), empty_node());
            return;
        }
        _ => {
            warn!(command = cmd, "no usable output, skipping");
            actual_state.insert(cmd.to_string(), empty_node());
            return;
        }
    };

    debug!(command = cmd, platform = %family, "formatting actual state");
    let node = match family {
        PlatformFamily::Ios => ios::format(cmd, output),
        PlatformFamily::Nxos => nxos::format(cmd, output),
        PlatformFamily::Asa => asa::format(cmd, output),
    };
    actual_state.insert(cmd.to_string(), node);
}

fn is_line_parsed(cmd: &str) -> bool {
    LINE_PARSED_CMDS.contains(&cmd) || LINE_PARSED_RE.is_match(cmd)
}
