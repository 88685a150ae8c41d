//! Canonical state trees.
//!
//! Both the desired state (what the operator expects) and the actual state
//! (what was parsed from the device) are nested mappings keyed by command
//! string. Node values are mappings, scalars or sequences of scalars; the
//! trees are held as `serde_json::Value` so heterogeneous shapes, YAML input
//! and JSON report persistence all share one representation. Key order is
//! preserved (insertion order) throughout.

use serde_json::{Map, Value};

/// A mapping from command string to state node.
pub type State = Map<String, Value>;

/// One node of a state tree: a mapping, scalar or sequence.
pub type StateNode = Value;

/// Special key marking a mapping's comparison mode.
pub const MODE_KEY: &str = "_mode";

/// `_mode` value requiring the actual key set to exactly match the desired
/// key set (extra keys are a failure rather than being ignored).
pub const MODE_STRICT: &str = "strict";

/// Special key wrapping a sequence so it can coexist with a `_mode` marker
/// at the same mapping level.
pub const LIST_KEY: &str = "list";

/// Returns the empty-mapping sentinel used to flag a command with no usable
/// output. Downstream, the comparator reports such commands as skipped.
pub fn empty_node() -> StateNode {
    Value::Object(Map::new())
}

/// True if a command's actual-state entry carries no usable data: the entry
/// is absent, null, or the empty-mapping sentinel.
pub fn is_unusable(node: Option<&Value>) -> bool {
    match node {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Returns the nested mapping under `key`, inserting an empty one on first
/// access. Replaces any non-mapping value already present.
///
/// This is the explicit stand-in for the auto-vivifying scratch mappings the
/// formatter builds its per-command output in.
pub fn vivify_map<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    if !matches!(map.get(key), Some(Value::Object(_))) {
        map.insert(key.to_string(), Value::Object(Map::new()));
    }
    match map.get_mut(key) {
        Some(Value::Object(inner)) => inner,
        _ => unreachable!("entry was just inserted as an object"),
    }
}

/// Returns the nested sequence under `key`, inserting an empty one on first
/// access. Replaces any non-sequence value already present.
pub fn vivify_list<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Vec<Value> {
    if !matches!(map.get(key), Some(Value::Array(_))) {
        map.insert(key.to_string(), Value::Array(Vec::new()));
    }
    match map.get_mut(key) {
        Some(Value::Array(inner)) => inner,
        _ => unreachable!("entry was just inserted as an array"),
    }
}
