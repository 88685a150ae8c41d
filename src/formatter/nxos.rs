//! NX-OS command formatting.
//!
//! Same canonical shapes as the IOS formatter where commands overlap, but the
//! extraction-template field names differ and remark rows are emitted as
//! explicit records that must be excluded.

use serde_json::{json, Map, Value};

use super::common::clean_record;
use super::CmdOutput;
use crate::state::{vivify_map, StateNode};

/// Formats one NX-OS command's output into its canonical state node.
pub(crate) fn format(cmd: &str, output: CmdOutput<'_>) -> StateNode {
    let mut state = Map::new();

    if cmd.contains("show access-lists") {
        access_lists(&output, &mut state);
    }

    Value::Object(state)
}

/// `show access-lists <name>` -
/// `{acl_name: {seq: {action, protocol, src, dst, [dst_port|icmp_type]}}}`
///
/// NX-OS lists remarks as ordinary rows with `action: "remark"`; they are not
/// access-control entries and are dropped.
fn access_lists(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let ace = clean_record(record);
        if ace.get("action") == Some(&json!("remark")) {
            continue;
        }
        let (Some(Value::String(name)), Some(Value::String(seq))) =
            (ace.get("name"), ace.get("sn"))
        else {
            continue;
        };
        let name = name.clone();
        let seq = seq.clone();
        let entry = vivify_map(vivify_map(state, &name), &seq);
        if let Some(Value::String(action)) = ace.get("action") {
            entry.insert("action".into(), json!(action));
        }
        if let Some(Value::String(protocol)) = ace.get("protocol") {
            entry.insert("protocol".into(), json!(protocol));
        }
        if let Some(Value::String(source)) = ace.get("source") {
            entry.insert("src".into(), json!(source));
        }
        if let Some(Value::String(destination)) = ace.get("destination") {
            entry.insert("dst".into(), json!(destination));
        }
        if let Some(Value::String(modifier)) = ace.get("modifier") {
            if ace.get("protocol") == Some(&json!("icmp")) {
                entry.insert("icmp_type".into(), json!(modifier));
            } else {
                entry.insert("dst_port".into(), json!(modifier));
            }
        }
    }
}
