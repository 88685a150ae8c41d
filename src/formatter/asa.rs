//! ASA command formatting.
//!
//! ASA management-access rules come from running-config lines rather than a
//! templated extraction, so these parsers work on raw text and synthesize
//! sequence numbers.

use serde_json::{json, Map, Value};

use super::common::addr_mask_to_cidr;
use super::CmdOutput;
use crate::state::StateNode;

/// Formats one ASA command's output into its canonical state node.
pub(crate) fn format(cmd: &str, output: CmdOutput<'_>) -> StateNode {
    let mut state = Map::new();

    if cmd.contains("show run ssh") || cmd.contains("show run http") {
        access_rules(cmd, &output, &mut state);
    }

    Value::Object(state)
}

/// `show run ssh` / `show run http` - `{SSH|HTTP: {seq: {src, intf}}}`
///
/// Access rules are the `<proto> <ip> <mask> <intf>` lines; everything else
/// in the output (version pins, timeouts, key-exchange settings) fails the
/// address parse and is skipped. Sequence numbers are synthetic, starting at
/// 10 and incrementing by 10 per rule.
fn access_rules(cmd: &str, output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    let mut rules = Map::new();
    let mut seq = 10u32;
    for line in lines {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(addr), Some(mask), Some(intf)) = (words.get(1), words.get(2), words.get(3))
        else {
            continue;
        };
        let Some(cidr) = addr_mask_to_cidr(addr, mask) else { continue };
        let src = if cidr == "0.0.0.0/0" { "any".to_string() } else { cidr };
        rules.insert(seq.to_string(), json!({"src": src, "intf": intf}));
        seq += 10;
    }
    if !rules.is_empty() {
        let key = cmd.split_whitespace().last().unwrap_or_default().to_uppercase();
        state.insert(key, Value::Object(rules));
    }
}
