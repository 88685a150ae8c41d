//! Desired-state input loading.
//!
//! The input file is YAML with up to three scope mappings:
//!
//! ```yaml
//! all:
//!   show ip ospf neighbor: ...
//! groups:
//!   ios:
//!     show vlan brief: ...
//! hosts:
//!   HME-SWI-VSS01:
//!     show etherchannel summary: ...
//! ```
//!
//! A host's desired state is the deep merge of the `all` scope, then each of
//! the host's groups, then the host's own entry, with later scopes winning on
//! conflicts. Host and group lookups are case-insensitive.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::state::State;

const SCOPES: [&str; 3] = ["hosts", "groups", "all"];

/// Loads and validates the desired-state input file.
///
/// The file must parse as YAML and carry at least one of the `hosts`,
/// `groups` or `all` mappings.
pub fn load_input_file(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|err| Error::InputLoad {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let input: Value = serde_yaml::from_str(&text).map_err(|err| Error::InputLoad {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    if input.is_null() {
        return Err(Error::InputEmpty(path.to_path_buf()));
    }
    let has_scope = SCOPES
        .iter()
        .any(|scope| input.get(scope).map(Value::is_object).unwrap_or(false));
    if !has_scope {
        return Err(Error::InputScopeMissing(path.to_path_buf()));
    }
    Ok(input)
}

/// Assembles the desired state for one host from the loaded input.
pub fn desired_state(input: &Value, host: &str, groups: &[String]) -> State {
    let mut desired = State::new();

    if let Some(Value::Object(all)) = input.get("all") {
        merge_into(&mut desired, all);
    }
    for group in groups {
        if let Some(commands) = scoped_entry(input, "groups", group) {
            debug!(host, group = %group, "merging group desired state");
            merge_into(&mut desired, commands);
        }
    }
    if let Some(commands) = scoped_entry(input, "hosts", host) {
        debug!(host, "merging host desired state");
        merge_into(&mut desired, commands);
    }
    desired
}

/// Case-insensitive lookup of one named entry inside a scope mapping.
fn scoped_entry<'a>(input: &'a Value, scope: &str, name: &str) -> Option<&'a State> {
    let scope = input.get(scope)?.as_object()?;
    scope
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, value)| value.as_object())
}

/// Deep merge of `overlay` into `base`: mappings merge recursively, anything
/// else in the overlay replaces the base value.
fn merge_into(base: &mut State, overlay: &State) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
