//! The recursive structural-diff algorithm.
//!
//! The desired node's type drives the comparison:
//!
//! - mapping: every desired key must exist in the actual mapping and its
//!   value must comply recursively; under `_mode: strict` the actual mapping
//!   may carry no keys outside the desired set
//! - sequence (the `list` wrapper or a bare sequence): set-style membership,
//!   every desired element must match one remaining actual element; order is
//!   not a compliance criterion, but strict mode reports unmatched actual
//!   elements as extra
//! - scalar: plain equality, with no coercion between strings and numbers
//!
//! The algorithm never fails: a desired mapping compared against a missing or
//! non-mapping actual value reports all its keys missing, a desired sequence
//! against a non-sequence is a plain non-compliance.

use serde_json::{Map, Value};

use super::{CompareResult, Present, PresentEntry};
use crate::state::{LIST_KEY, MODE_KEY, MODE_STRICT};

/// Outcome of comparing one desired node against one actual node.
#[derive(Debug, Clone, PartialEq)]
pub enum Compared {
    /// A scalar comparison: complied or not.
    Leaf(bool),
    /// A container comparison with per-key/per-element detail.
    Node(CompareResult),
}

impl Compared {
    /// Whether the compared subtree complies.
    pub fn complies(&self) -> bool {
        match self {
            Compared::Leaf(complies) => *complies,
            Compared::Node(result) => result.complies,
        }
    }

    /// Converts the outcome into a full result node. Leaf outcomes become a
    /// node with empty detail, so a degenerate scalar desired state still
    /// renders in the report's standard shape.
    pub fn into_result(self) -> CompareResult {
        match self {
            Compared::Node(result) => result,
            Compared::Leaf(complies) => {
                let mut result = CompareResult::new(Present::keys());
                result.complies = complies;
                result
            }
        }
    }
}

/// Recursively compares a desired node against an actual node.
pub fn compare(desired: &Value, actual: &Value) -> Compared {
    match desired {
        Value::Object(map) => {
            let strict = is_strict(map);
            match map.get(LIST_KEY) {
                Some(Value::Array(items)) => match actual {
                    Value::Array(actual_items) => {
                        Compared::Node(compare_sequence(items, actual_items, strict))
                    }
                    // A wrapped sequence against a non-sequence cannot match.
                    _ => Compared::Leaf(false),
                },
                _ => Compared::Node(compare_mapping(map, actual, strict)),
            }
        }
        Value::Array(items) => match actual {
            Value::Array(actual_items) => {
                Compared::Node(compare_sequence(items, actual_items, false))
            }
            _ => Compared::Leaf(false),
        },
        scalar => Compared::Leaf(scalar == actual),
    }
}

fn is_strict(map: &Map<String, Value>) -> bool {
    map.get(MODE_KEY) == Some(&Value::String(MODE_STRICT.to_string()))
}

/// Compares a desired mapping key-by-key. A non-mapping actual value behaves
/// as an empty mapping: every desired key is missing.
fn compare_mapping(desired: &Map<String, Value>, actual: &Value, strict: bool) -> CompareResult {
    let mut result = CompareResult::new(Present::keys());
    let actual_map = actual.as_object();

    for (key, desired_child) in desired {
        if key == MODE_KEY {
            continue;
        }
        let Some(actual_child) = actual_map.and_then(|map| map.get(key)) else {
            result.missing.push(Value::String(key.clone()));
            result.complies = false;
            continue;
        };
        let compared = compare(desired_child, actual_child);
        let entry = match &compared {
            Compared::Leaf(true) => PresentEntry::pass(false),
            Compared::Node(node) if node.complies => PresentEntry::pass(true),
            _ => PresentEntry::fail(),
        };
        if !compared.complies() {
            result.complies = false;
        }
        if let Present::Keys(keys) = &mut result.present {
            keys.insert(key.clone(), entry);
        }
    }

    if strict {
        if let Some(actual_map) = actual_map {
            for key in actual_map.keys() {
                if key == MODE_KEY || !desired.contains_key(key) {
                    result.extra.push(Value::String(key.clone()));
                }
            }
        }
        if !result.extra.is_empty() {
            result.complies = false;
        }
    }
    result
}

/// Compares sequences by membership: each desired element consumes the first
/// remaining actual element it matches.
fn compare_sequence(desired: &[Value], actual: &[Value], strict: bool) -> CompareResult {
    let mut result = CompareResult::new(Present::Items(Vec::new()));
    let mut remaining: Vec<Value> = actual.to_vec();

    for desired_item in desired {
        let matched = remaining
            .iter()
            .position(|actual_item| compare(desired_item, actual_item).complies());
        match matched {
            Some(index) => {
                remaining.remove(index);
                if let Present::Items(items) = &mut result.present {
                    items.push(desired_item.clone());
                }
            }
            None => {
                result.missing.push(desired_item.clone());
                result.complies = false;
            }
        }
    }

    if strict && !remaining.is_empty() {
        result.extra = remaining;
        result.complies = false;
    }
    result
}
