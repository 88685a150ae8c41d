//! IOS and IOS-XE command formatting.
//!
//! One transform per supported command, selected by first-match-wins
//! substring/regex checks against the command text. The chain order matters:
//! more specific patterns sit above the broader ones they would otherwise be
//! shadowed by.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use super::common::{ace_addr, clean_record, get_list, get_str, strip_after};
use super::CmdOutput;
use crate::state::{vivify_list, vivify_map, StateNode};

static ROUTE_SUMMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^show ip route .* summary \| in Total").expect("valid pattern"));
static ROUTE_TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^show ip  route.*").expect("valid pattern"));
static BGP_PEER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("valid pattern"));

/// Formats one IOS/IOS-XE command's output into its canonical state node.
pub(crate) fn format(cmd: &str, output: CmdOutput<'_>) -> StateNode {
    let mut state = Map::new();

    // Switch and router commands
    if cmd.contains("show version") {
        version(&output, &mut state);
    } else if cmd.contains("show ip access-lists") {
        access_lists(&output, &mut state);
    } else if cmd.contains("show etherchannel summary") {
        etherchannel_summary(&output, &mut state);
    } else if cmd.contains("show ip interface brief") {
        ip_interface_brief(&output, &mut state);
    } else if cmd.contains("show cdp neighbors") || cmd.contains("show lldp neighbors") {
        neighbors(&output, &mut state);
    } else if cmd.contains("show standby brief") {
        standby_brief(&output, &mut state);
    }
    // Switch-only commands
    else if cmd.contains("show switch") {
        switch_stack(&output, &mut state);
    } else if cmd.contains("show  redundancy state | in state") {
        redundancy_state(&output, &mut state);
    } else if cmd.contains("show interfaces status") {
        interfaces_status(&output, &mut state);
    } else if cmd.contains("show interfaces switchport") {
        switchport(&output, &mut state);
    } else if cmd.contains("show vlan brief") {
        vlan_brief(&output, &mut state);
    } else if cmd.contains("show spanning-tree") {
        spanning_tree(&output, &mut state);
    } else if cmd.contains("show mac address-table | count dynamic|DYNAMIC") {
        line_count(&output, "total_mac", &mut state);
    } else if cmd.contains("show mac address-table vlan") {
        let vlan = cmd.split_whitespace().nth(4).unwrap_or_default();
        line_count(&output, &format!("{vlan}_total_mac"), &mut state);
    } else if cmd.contains("show authentication sessions | count mab") {
        line_count(&output, "auth_mab", &mut state);
    } else if cmd.contains("show authentication sessions | count dot1x") {
        line_count(&output, "auth_dot1x", &mut state);
    }
    // Router-only commands
    else if cmd.contains("show vrf") {
        vrf(&output, &mut state);
    } else if ROUTE_SUMMARY_RE.is_match(cmd) {
        route_summary(cmd, &output, &mut state);
    } else if ROUTE_TABLE_RE.is_match(cmd) {
        route_table(output, &mut state);
    } else if cmd.contains("show ip ospf interface brief") {
        ospf_interface_brief(&output, &mut state);
    } else if cmd.contains("show ip ospf neighbor") {
        ospf_neighbors(&output, &mut state);
    } else if cmd.contains("show ip ospf database database-summary | in Total") {
        ospf_database_summary(&output, &mut state);
    } else if cmd.contains("show ip eigrp interfaces") {
        eigrp_interfaces(&output, &mut state);
    } else if cmd.contains("show ip eigrp neighbors") {
        eigrp_neighbors(&output, &mut state);
    } else if cmd.contains("show bgp all summary") {
        bgp_summary(&output, &mut state);
    } else if cmd.contains("show nve vni") {
        nve_vni(&output, &mut state);
    } else if cmd.contains("show nve peers") {
        nve_peers(&output, &mut state);
    } else if cmd.contains("show crypto session brief") {
        crypto_sessions(&output, &mut state);
    }

    Value::Object(state)
}

// ============================================================================
// Switch and router commands
// ============================================================================

/// `show version` - `{image: <version, or running image when blank>}`
fn version(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    let Some(record) = records.first() else { return };
    if let Some(image) = get_str(record, "version").or_else(|| get_str(record, "running_image")) {
        state.insert("image".into(), json!(image));
    }
}

/// `show ip access-lists <name>` -
/// `{acl_name: {seq: {action, protocol, src, dst, [dst_port|icmp_type]}}}`
fn access_lists(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let ace = clean_record(record);
        // Rows without a line number are ACL headers, not entries.
        let (Some(Value::String(name)), Some(Value::String(seq))) =
            (ace.get("acl_name"), ace.get("line_num"))
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
        if let Some(src) = ace_addr(&ace, "src") {
            entry.insert("src".into(), json!(src));
        }
        if let Some(dst) = ace_addr(&ace, "dst") {
            entry.insert("dst".into(), json!(dst));
        }
        if let Some(Value::String(port)) = ace.get("dst_port") {
            entry.insert("dst_port".into(), json!(port));
        } else if let Some(Value::String(icmp)) = ace.get("icmp_type") {
            entry.insert("icmp_type".into(), json!(icmp));
        }
    }
}

/// `show etherchannel summary` -
/// `{po_name: {status, protocol, members: {intf: {mbr_status}}}}`
fn etherchannel_summary(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(po_name) = get_str(record, "po_name") else { continue };
        let po = vivify_map(state, po_name);
        if let Some(status) = get_str(record, "po_status") {
            po.insert("status".into(), json!(status));
        }
        if let Some(protocol) = get_str(record, "protocol") {
            // Dash means no channel protocol is running.
            let protocol = if protocol == "-" { "NONE" } else { protocol };
            po.insert("protocol".into(), json!(protocol));
        }
        let mut members = Map::new();
        let interfaces = get_list(record, "interfaces").unwrap_or_default();
        let statuses = get_list(record, "interfaces_status").unwrap_or_default();
        for (intf, status) in interfaces.iter().zip(statuses.iter()) {
            let (Value::String(intf), Value::String(status)) = (intf, status) else {
                continue;
            };
            // Routers report a bundled member as "bndl" where switches use "P".
            let status = if status == "bndl" { "P" } else { status };
            members.insert(intf.clone(), json!({"mbr_status": status}));
        }
        po.insert("members".into(), Value::Object(members));
    }
}

/// `show ip interface brief` - `{intf: {ip, status}}`
fn ip_interface_brief(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(intf) = get_str(record, "intf") else { continue };
        let entry = vivify_map(state, intf);
        if let Some(ip) = get_str(record, "ipaddr") {
            entry.insert("ip".into(), json!(ip));
        }
        if let Some(status) = get_str(record, "status") {
            entry.insert("status".into(), json!(status));
        }
    }
}

/// `show cdp neighbors` / `show lldp neighbors` -
/// `{local_intf: {neighbor: neighbor_intf}}`
fn neighbors(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let (Some(local), Some(neighbor), Some(remote)) = (
            get_str(record, "local_interface"),
            get_str(record, "neighbor"),
            get_str(record, "neighbor_interface"),
        ) else {
            continue;
        };
        state.insert(local.to_string(), json!({ neighbor: remote }));
    }
}

/// `show standby brief` - `{group: {state, priority}}`
fn standby_brief(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(group) = get_str(record, "group") else { continue };
        let entry = vivify_map(state, group);
        if let Some(hsrp_state) = get_str(record, "state") {
            entry.insert("state".into(), json!(hsrp_state));
        }
        if let Some(priority) = get_str(record, "priority") {
            entry.insert("priority".into(), json!(priority));
        }
    }
}

// ============================================================================
// Switch-only commands
// ============================================================================

/// `show switch` - `{sw_num: {role, priority, state}}`
///
/// Raw output; the first five lines are banner and column headers.
fn switch_stack(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    if lines.len() < 6 {
        return;
    }
    for line in &lines[5..] {
        let cols: Vec<&str> = line.split_whitespace().collect();
        let (Some(num), Some(role), Some(priority), Some(sw_state)) =
            (cols.first(), cols.get(1), cols.get(3), cols.get(5))
        else {
            continue;
        };
        // The active switch is flagged with a leading asterisk.
        let entry = vivify_map(state, &num.replace('*', ""));
        entry.insert("role".into(), json!(role));
        entry.insert("priority".into(), json!(priority));
        entry.insert("state".into(), json!(sw_state));
    }
}

/// `show  redundancy state | in state` - `{my_state: x, peer_state: y}`
fn redundancy_state(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    for line in lines {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(first), Some(second)) = (words.first(), words.get(1)) else {
            continue;
        };
        // "my state = 13 -ACTIVE": the value sits after the dash.
        let Some(value) = line.splitn(2, '-').nth(1) else { continue };
        state.insert(format!("{first}_{second}"), json!(value.trim_end()));
    }
}

/// `show interfaces status` - `{intf: {duplex, speed, status, vlan}}`
fn interfaces_status(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(port) = get_str(record, "port") else { continue };
        let entry = vivify_map(state, port);
        for field in ["duplex", "speed", "status", "vlan"] {
            if let Some(value) = get_str(record, field) {
                entry.insert(field.into(), json!(value));
            }
        }
    }
}

/// `show interfaces switchport` - `{intf: {mode, vlan}}`
///
/// Access ports report their access VLAN, trunks their allowed VLAN list,
/// anything else reports a null VLAN.
fn switchport(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let (Some(intf), Some(mode)) = (get_str(record, "interface"), get_str(record, "mode"))
        else {
            continue;
        };
        let entry = vivify_map(state, intf);
        entry.insert("mode".into(), json!(mode.replace("static ", "")));
        let vlan = match mode {
            "static access" => record.get("access_vlan").cloned().unwrap_or(Value::Null),
            "trunk" => record.get("trunking_vlans").cloned().unwrap_or(Value::Null),
            _ => Value::Null,
        };
        entry.insert("vlan".into(), vlan);
    }
}

/// `show vlan brief` - `{vlan: {name, intf: [..]}}`
fn vlan_brief(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(vlan_id) = get_str(record, "vlan_id") else { continue };
        let entry = vivify_map(state, vlan_id);
        if let Some(name) = get_str(record, "name") {
            entry.insert("name".into(), json!(name));
        }
        let interfaces = record.get("interfaces").cloned().unwrap_or(json!([]));
        entry.insert("intf".into(), interfaces);
    }
}

/// `show spanning-tree` - `{vlan: [forwarding interfaces]}`
fn spanning_tree(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        if get_str(record, "status") != Some("FWD") {
            continue;
        }
        let (Some(vlan_id), Some(intf)) =
            (get_str(record, "vlan_id"), get_str(record, "interface"))
        else {
            continue;
        };
        let vlan_id = vlan_id.to_string();
        vivify_list(state, &vlan_id).push(json!(intf));
    }
}

/// Single-line `| count` output - `{key: <last word>}`
fn line_count(output: &CmdOutput<'_>, key: &str, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    let Some(count) = lines.first().and_then(|l| l.split_whitespace().last()) else {
        return;
    };
    state.insert(key.to_string(), json!(count));
}

// ============================================================================
// Router-only commands
// ============================================================================

/// `show vrf` - `{vrf: [intf, ..]}`
fn vrf(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(name) = get_str(record, "name") else { continue };
        let interfaces = record.get("interfaces").cloned().unwrap_or(json!([]));
        state.insert(name.to_string(), interfaces);
    }
}

/// `show ip route [vrf <x>] summary | in Total` - `{<vrf>_subnets: total}`
fn route_summary(cmd: &str, output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    let Some(total) = lines.first().and_then(|l| l.split_whitespace().nth(2)) else {
        return;
    };
    let key = match cmd.split_whitespace().nth(4) {
        Some("|") | None => "global_subnets".to_string(),
        Some(vrf) => format!("{vrf}_subnets"),
    };
    state.insert(key, json!(total));
}

/// `show ip  route [vrf <x>]` - `{route/prefix: next_hop | [next_hop, ..]}`
///
/// A stateful line-by-line reconstruction of the routing table text:
/// prefixes from "is subnetted" summary lines are first re-attached to the
/// member routes beneath them, then the table is walked tail-to-head so
/// next-hop continuation lines are seen before the route they belong to.
fn route_table(output: CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(mut lines) = output else { return };
    add_prefixes(&mut lines);

    let mut pending_hops: Vec<Value> = Vec::new();
    let mut routes: Vec<(String, Value)> = Vec::new();
    for line in lines.iter().rev() {
        let mut words: Vec<&str> = line.split_whitespace().collect();
        // A second route-type code (OSPF IA/E2, EIGRP EX) pads the line; drop
        // it so the column positions match the common case.
        if words.len() == 8 {
            words.remove(1);
        }
        if words.is_empty() || words[0] == "Routing" {
            continue;
        }
        if words[0].starts_with('[') {
            // Next-hop continuation line; held until its route appears.
            if let Some(hop) = words.get(2) {
                pending_hops.push(json!(hop.replace(',', "")));
            }
        } else if line.contains("via") {
            let (Some(dest), Some(hop)) = (words.get(1), words.get(4)) else {
                continue;
            };
            let hop = json!(hop.replace(',', ""));
            if pending_hops.is_empty() {
                routes.push((dest.to_string(), hop));
            } else {
                pending_hops.push(hop);
                routes.push((dest.to_string(), Value::Array(std::mem::take(&mut pending_hops))));
            }
        } else if words.len() == 2 || words.len() == 3 {
            // Route on its own line; next-hops were on continuation lines.
            let hops = match pending_hops.len() {
                1 => pending_hops.remove(0),
                _ => Value::Array(std::mem::take(&mut pending_hops)),
            };
            routes.push((words[1].to_string(), hops));
        } else if line.contains("directly") {
            if let (Some(dest), Some(intf)) = (words.get(1), words.get(5)) {
                routes.push((dest.to_string(), json!(intf)));
            }
        }
    }
    // Tail-to-head processing built the table in reverse.
    for (dest, hops) in routes.into_iter().rev() {
        state.insert(dest, hops);
    }
}

/// Re-attaches the prefix from an "is subnetted" summary line to the member
/// routes listed beneath it, which print without one.
fn add_prefixes(lines: &mut [String]) {
    for idx in 0..lines.len() {
        if !lines[idx].contains("is subnetted") {
            continue;
        }
        let words: Vec<&str> = lines[idx].split_whitespace().collect();
        let Some(prefix) = words.first().and_then(|w| w.split('/').nth(1)) else {
            continue;
        };
        let prefix = prefix.to_string();
        let Some(num_routes) = words
            .get(words.len().saturating_sub(2))
            .and_then(|w| w.parse::<usize>().ok())
        else {
            continue;
        };
        let mut skipped = 0;
        for offset in 1..=num_routes {
            let Some(line) = lines.get(idx + offset) else { break };
            // Bracketed lines hold a next-hop continuation, not a route; the
            // member they belong to sits that many lines further down.
            if line.split_whitespace().next().is_some_and(|w| w.starts_with('[')) {
                skipped += 1;
            } else {
                attach_prefix(lines, idx + offset, &prefix);
            }
        }
        if skipped != 0 && idx + num_routes < lines.len() {
            attach_prefix(lines, idx + num_routes, &prefix);
        }
    }
}

/// Appends `/prefix` to the destination column of a route line. The column
/// index depends on how many route-type codes pad the line.
fn attach_prefix(lines: &mut [String], idx: usize, prefix: &str) {
    let mut words: Vec<String> = lines[idx].split_whitespace().map(str::to_string).collect();
    let dest = match words.len() {
        2 | 6 | 7 => words.get_mut(1),
        3 | 8 => words.get_mut(2),
        _ => None,
    };
    if let Some(dest) = dest {
        dest.push('/');
        dest.push_str(prefix);
        lines[idx] = words.join(" ");
    }
}

/// `show ip ospf interface brief` - `{intf: {area, state, cost}}`
fn ospf_interface_brief(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let Some(intf) = get_str(record, "interface") else { continue };
        let entry = vivify_map(state, intf);
        for field in ["area", "state", "cost"] {
            if let Some(value) = get_str(record, field) {
                entry.insert(field.into(), json!(value));
            }
        }
    }
}

/// `show ip ospf neighbor` - `{nbr_id: {state}}`, adjacency state without
/// the DR/BDR role suffix.
fn ospf_neighbors(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        let (Some(neighbor_id), Some(nbr_state)) =
            (get_str(record, "neighbor_id"), get_str(record, "state"))
        else {
            continue;
        };
        state.insert(
            neighbor_id.to_string(),
            json!({"state": strip_after(nbr_state, '/')}),
        );
    }
}

/// `show ip ospf database database-summary | in Total` - `{total_lsa: x}`
fn ospf_database_summary(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    let Some(total) = lines.first().and_then(|l| l.split_whitespace().nth(1)) else {
        return;
    };
    state.insert("total_lsa".into(), json!(total));
}

/// `show ip eigrp interfaces` - `{intf: [..]}`
///
/// Raw output; the first three lines are banner and column headers.
fn eigrp_interfaces(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    if lines.len() < 4 {
        return;
    }
    for line in &lines[3..] {
        if let Some(intf) = line.split_whitespace().next() {
            vivify_list(state, "intf").push(json!(intf));
        }
    }
}

/// `show ip eigrp neighbors` - `{nbrs: [..]}`
fn eigrp_neighbors(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Records(records) = output else { return };
    for record in records.iter() {
        if let Some(address) = get_str(record, "address") {
            vivify_list(state, "nbrs").push(json!(address));
        }
    }
}

/// `show bgp all summary` - `{peer: {asn, rcv_pfx}}`
///
/// Raw output; peer rows are the lines starting with an IPv4 address.
fn bgp_summary(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    for line in lines {
        if !BGP_PEER_RE.is_match(line) {
            continue;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(peer), Some(asn), Some(rcv_pfx)) = (words.first(), words.get(2), words.last())
        else {
            continue;
        };
        let entry = vivify_map(state, peer);
        entry.insert("asn".into(), json!(asn));
        entry.insert("rcv_pfx".into(), json!(rcv_pfx));
    }
}

/// `show nve vni` - `{l3vni: {bdi, vrf, state}}`
fn nve_vni(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    for line in lines.iter().skip(1) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(vni), Some(vni_state), Some(bdi), Some(vrf)) =
            (words.get(1), words.get(3), words.get(5), words.get(7))
        else {
            continue;
        };
        let entry = vivify_map(state, vni);
        entry.insert("bdi".into(), json!(bdi));
        entry.insert("vrf".into(), json!(vrf));
        entry.insert("state".into(), json!(vni_state));
    }
}

/// `show nve peers` - `{l3vni: {peer, state}}`
fn nve_peers(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    for line in lines.iter().skip(1) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(vni), Some(peer), Some(peer_state)) =
            (words.get(1), words.get(3), words.get(6))
        else {
            continue;
        };
        let entry = vivify_map(state, vni);
        entry.insert("peer".into(), json!(peer));
        entry.insert("state".into(), json!(peer_state));
    }
}

/// `show crypto session brief` - `{peer: {intf, status}}`
///
/// Raw output; the first four lines are legend and column headers.
fn crypto_sessions(output: &CmdOutput<'_>, state: &mut Map<String, Value>) {
    let CmdOutput::Lines(lines) = output else { return };
    for line in lines.iter().skip(4) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (Some(peer), Some(intf), Some(status)) = (words.first(), words.get(1), words.last())
        else {
            continue;
        };
        let entry = vivify_map(state, peer);
        entry.insert("intf".into(), json!(intf));
        entry.insert("status".into(), json!(status));
    }
}
