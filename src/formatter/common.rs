//! Helpers shared by the per-platform formatters.

use std::net::Ipv4Addr;

use serde_json::{Map, Value};

/// Returns a record field as a non-empty string.
///
/// Extraction templates emit every field for every row, empty-string when the
/// field did not apply to that row, so empty means absent.
pub(crate) fn get_str<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    match record.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Returns a record field as a (possibly empty) sequence.
pub(crate) fn get_list<'a>(record: &'a Value, key: &str) -> Option<&'a [Value]> {
    match record.get(key) {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Strips empty-string and empty-list fields from an ACL record so optional
/// fields can be tested with plain `get`.
pub(crate) fn clean_record(record: &Value) -> Map<String, Value> {
    let mut cleaned = Map::new();
    if let Value::Object(fields) = record {
        for (key, value) in fields {
            let keep = match value {
                Value::String(s) => !s.is_empty(),
                Value::Array(items) => !items.is_empty(),
                _ => true,
            };
            if keep {
                cleaned.insert(key.clone(), value.clone());
            }
        }
    }
    cleaned
}

/// Normalizes an ACE source or destination to CIDR notation.
///
/// Three addressing forms appear in ACL rows: network plus wildcard mask,
/// a bare host, or the literal "any". `side` is `"src"` or `"dst"`.
pub(crate) fn ace_addr(record: &Map<String, Value>, side: &str) -> Option<String> {
    let field = |suffix: &str| match record.get(&format!("{side}_{suffix}")) {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };
    if let (Some(network), Some(wildcard)) = (field("network"), field("wildcard")) {
        let prefix = wildcard_prefix_len(wildcard)?;
        Some(format!("{network}/{prefix}"))
    } else if let Some(host) = field("host") {
        Some(format!("{host}/32"))
    } else {
        field("any").map(str::to_string)
    }
}

/// Converts a wildcard mask to a prefix length: the wildcard is inverted and
/// its set bits counted. Non-contiguous wildcards are rejected.
pub(crate) fn wildcard_prefix_len(wildcard: &str) -> Option<u32> {
    let bits = u32::from(wildcard.parse::<Ipv4Addr>().ok()?);
    let mask = !bits;
    contiguous_ones(mask)
}

/// Normalizes an `address mask` pair to CIDR notation, accepting either a
/// netmask (255.255.255.0) or a hostmask/wildcard (0.0.0.255).
pub(crate) fn addr_mask_to_cidr(addr: &str, mask: &str) -> Option<String> {
    let ip: Ipv4Addr = addr.parse().ok()?;
    let mask_bits = u32::from(mask.parse::<Ipv4Addr>().ok()?);
    let prefix = contiguous_ones(mask_bits).or_else(|| contiguous_ones(!mask_bits).map(|n| 32 - n))?;
    Some(format!("{ip}/{prefix}"))
}

/// Counts the set bits of a mask, requiring them to be contiguous from the
/// high end (a valid netmask). All-zeros counts as 0.
fn contiguous_ones(mask: u32) -> Option<u32> {
    let ones = mask.count_ones();
    let expected = if ones == 0 { 0 } else { u32::MAX << (32 - ones) };
    (mask == expected).then_some(ones)
}

/// Removes `sep` and everything after it.
pub(crate) fn strip_after(input: &str, sep: char) -> &str {
    input.split(sep).next().unwrap_or(input)
}
