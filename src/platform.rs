//! Platform family resolution.
//!
//! Devices carry a set of platform alias strings (e.g. `cisco_ios`,
//! `cisco_iosxe`, `ios`) collected from inventory metadata. Command parsing
//! rules are selected per family by substring match against those aliases in
//! a fixed priority order: ios, then nxos, then asa. Exactly one family's
//! rules apply to a device.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A command-syntax dialect family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// IOS and IOS-XE switches/routers.
    Ios,
    /// NX-OS data-centre switches.
    Nxos,
    /// ASA firewalls.
    Asa,
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformFamily::Ios => write!(f, "ios"),
            PlatformFamily::Nxos => write!(f, "nxos"),
            PlatformFamily::Asa => write!(f, "asa"),
        }
    }
}

impl PlatformFamily {
    /// Resolves a set of platform aliases to a family.
    ///
    /// First match wins, in the order ios, nxos, asa. Returns `None` when no
    /// alias matches any family.
    pub fn from_aliases<S: AsRef<str>>(aliases: &[S]) -> Option<Self> {
        let matches = |needle: &str| aliases.iter().any(|a| a.as_ref().contains(needle));
        if matches("ios") {
            Some(PlatformFamily::Ios)
        } else if matches("nxos") {
            Some(PlatformFamily::Nxos)
        } else if matches("asa") {
            Some(PlatformFamily::Asa)
        } else {
            None
        }
    }

    /// Resolves a single free-form platform string (e.g. from the CLI).
    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::from_aliases(&[alias])
    }
}
